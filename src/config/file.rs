use crate::domain::model::{Address, Employee, StatusPage};
use crate::domain::ports::Settings;
use crate::utils::error::{Result, SelfServiceError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML file configuration. The directory seed is optional; without it the
/// embedded employee table is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub shipping: ShippingConfig,
    pub status: Option<StatusConfig>,
    pub directory: Option<DirectoryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusConfig {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub employees: Vec<EmployeeSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSeed {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl From<EmployeeSeed> for Employee {
    fn from(seed: EmployeeSeed) -> Self {
        Employee {
            address: Address {
                id: seed.id.clone(),
                street: seed.street,
                city: seed.city,
                state: seed.state,
                zip_code: seed.zip_code,
            },
            id: seed.id,
            first_name: seed.first_name,
            last_name: seed.last_name,
            age: seed.age,
        }
    }
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| SelfServiceError::ConfigError {
                field: path.as_ref().display().to_string(),
                reason: format!("Invalid TOML: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Seed employees from the file, if a `[directory]` section is present.
    pub fn seed_employees(&self) -> Option<Vec<Employee>> {
        self.directory
            .as_ref()
            .map(|d| d.employees.iter().cloned().map(Employee::from).collect())
    }
}

impl Settings for FileConfig {
    fn shipping_base_url(&self) -> &str {
        &self.shipping.base_url
    }

    fn status_page(&self) -> StatusPage {
        let defaults = StatusPage::default();
        match &self.status {
            Some(status) => StatusPage {
                offset: status.offset.unwrap_or(defaults.offset),
                limit: status.limit.unwrap_or(defaults.limit),
            },
            None => defaults,
        }
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("shipping.base_url", &self.shipping.base_url)?;
        if let Some(status) = &self.status {
            if let Some(limit) = status.limit {
                validation::validate_positive_number("status.limit", limit, 1)?;
            }
        }
        if let Some(directory) = &self.directory {
            for employee in &directory.employees {
                validation::validate_non_empty_string("directory.employees.id", &employee.id)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_minimal_config_uses_default_page() {
        let file = write_config(
            r#"
            [shipping]
            base_url = "http://localhost:8443"
            "#,
        );

        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(config.shipping_base_url(), "http://localhost:8443");
        assert_eq!(config.status_page(), StatusPage::default());
        assert!(config.seed_employees().is_none());
    }

    #[test]
    fn test_full_config_with_directory_seed() {
        let file = write_config(
            r#"
            [shipping]
            base_url = "https://shipping.internal"

            [status]
            offset = 2
            limit = 50

            [[directory.employees]]
            id = "AP002"
            first_name = "Jane"
            last_name = "Smith"
            age = 34
            street = "456 Maple Ave"
            city = "Atlanta"
            state = "GA"
            zip_code = "30301"
            "#,
        );

        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(config.status_page(), StatusPage { offset: 2, limit: 50 });

        let seed = config.seed_employees().unwrap();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed[0].full_name(), "Jane Smith");
        assert_eq!(seed[0].address.zip_code, "30301");
    }

    #[test]
    fn test_invalid_url_is_rejected_on_load() {
        let file = write_config(
            r#"
            [shipping]
            base_url = "ftp://shipping.internal"
            "#,
        );
        assert!(FileConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_zero_limit_is_rejected_on_load() {
        let file = write_config(
            r#"
            [shipping]
            base_url = "http://localhost:8443"

            [status]
            limit = 0
            "#,
        );
        assert!(FileConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let file = write_config("shipping = ");
        assert!(matches!(
            FileConfig::from_file(file.path()),
            Err(SelfServiceError::ConfigError { .. })
        ));
    }
}

use crate::utils::error::{Result, SelfServiceError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SelfServiceError::ConfigError {
            field: field_name.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SelfServiceError::ConfigError {
                field: field_name.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SelfServiceError::ConfigError {
            field: field_name.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SelfServiceError::ConfigError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(SelfServiceError::ConfigError {
            field: field_name.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

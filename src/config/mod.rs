pub mod file;

pub use file::FileConfig;

use crate::domain::model::StatusPage;
use crate::domain::ports::Settings;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "package-self-service")]
#[command(about = "Self-service backend for submitting and tracking employee packages")]
pub struct CliConfig {
    /// Base URL of the external shipping service.
    #[arg(long, default_value = "http://localhost:8443")]
    pub shipping_url: String,

    /// Pagination offset forwarded to per-status shipping queries.
    #[arg(long, default_value = "1")]
    pub status_offset: u32,

    /// Pagination limit forwarded to per-status shipping queries.
    #[arg(long, default_value = "10")]
    pub status_limit: u32,

    /// Optional TOML config file; overrides the flags above when present.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the employees available as receivers.
    Receivers,
    /// Submit a package for shipping to another employee.
    Submit {
        #[arg(long)]
        package_name: String,
        #[arg(long)]
        weight_grams: f64,
        #[arg(long)]
        sender_id: String,
        #[arg(long)]
        receiver_id: String,
    },
    /// List a sender's packages, optionally restricted to one status.
    List {
        #[arg(long)]
        sender_id: String,
        #[arg(long)]
        status: Option<String>,
    },
    /// Show the shipping service's record for a single package.
    Details {
        #[arg(long)]
        package_id: String,
    },
}

impl Settings for CliConfig {
    fn shipping_base_url(&self) -> &str {
        &self.shipping_url
    }

    fn status_page(&self) -> StatusPage {
        StatusPage {
            offset: self.status_offset,
            limit: self.status_limit,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("shipping_url", &self.shipping_url)?;
        validation::validate_positive_number("status_limit", self.status_limit, 1)?;
        Ok(())
    }
}

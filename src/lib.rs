pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{directory::InMemoryDirectory, shipping::HttpShippingService};
pub use config::{file::FileConfig, CliConfig};
pub use core::{status::StatusAggregator, submission::SubmissionOrchestrator};
pub use utils::error::{Result, SelfServiceError};

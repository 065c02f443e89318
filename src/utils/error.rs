use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelfServiceError {
    #[error("Receiver not found")]
    ReceiverNotFound,

    #[error("Invalid weight: cannot be negative ({0} g)")]
    InvalidWeight(f64),

    #[error("Shipping service rejected the submission: {0}")]
    SubmissionRejected(String),

    #[error("Shipping service submission failed: {0}")]
    SubmissionFailed(String),

    #[error("Shipping service returned unexpected status {0}")]
    UnexpectedStatus(u16),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {reason}")]
    ConfigError { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, SelfServiceError>;

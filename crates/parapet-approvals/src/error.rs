//! Approval store errors

use thiserror::Error;

/// Errors loading approval reference data
#[derive(Error, Debug)]
pub enum ApprovalError {
    #[error("approval dataset failed to parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for approval operations
pub type Result<T> = std::result::Result<T, ApprovalError>;

//! Code table errors

use thiserror::Error;

/// Errors loading or validating the jurisdiction table
///
/// Lookup misses are not errors; they fall through the
/// county -> state -> global ladder. Anything here indicates a broken
/// data table, which is a build defect, not a runtime condition.
#[derive(Error, Debug)]
pub enum CodeTableError {
    #[error("jurisdiction table failed to parse: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("jurisdiction table has no global default entry")]
    MissingGlobalDefault,
}

/// Result type alias for code table operations
pub type Result<T> = std::result::Result<T, CodeTableError>;

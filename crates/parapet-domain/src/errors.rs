//! Domain errors for Parapet

use thiserror::Error;

/// Core domain errors
///
/// These cover validation of caller-supplied values only. Infrastructure
/// failures (network, parsing embedded tables) are defined by the crates
/// that own those concerns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("address must not be empty")]
    EmptyAddress,

    #[error("building height must be positive, got {height_ft}")]
    InvalidBuildingHeight { height_ft: f64 },
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

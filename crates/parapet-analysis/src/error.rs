//! Analysis pipeline errors

use parapet_domain::DomainError;
use parapet_geo::GeoError;
use parapet_wind::WindError;
use thiserror::Error;

/// Errors that abort a whole analysis
///
/// Deliberately small: per the degradation policy, everything that is
/// not input validation or a data-table bug falls to a lower-confidence
/// tier instead of landing here.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("request must include an address or coordinates")]
    MissingLocation,

    #[error("invalid input: {0}")]
    InvalidInput(#[from] DomainError),

    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error(transparent)]
    Wind(#[from] WindError),
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

//! ASCE 7 wind uplift pressure calculator for Parapet
//!
//! One authoritative, version-parameterized calculator: terrain
//! constants, velocity pressure factors, and per-edition roof
//! coefficient tables feed a single pure `compute_pressures` function.
//! Edition differences live in data tables, never in duplicated
//! formula paths.

pub mod calculator;
pub mod coefficients;
pub mod error;
pub mod factors;
pub mod terrain;

pub use calculator::{compute_pressures, WindAnalysis};
pub use coefficients::{roof_coefficients, RoofCoefficients};
pub use error::{Result, WindError};
pub use factors::{
    kh, kzt, velocity_pressure, DIRECTIONALITY_FACTOR, GCPI_ENCLOSED, IMPORTANCE_FACTOR,
    MIN_COEFFICIENT_HEIGHT_FT, VELOCITY_PRESSURE_CONSTANT,
};
pub use terrain::{terrain_params, TerrainParams};

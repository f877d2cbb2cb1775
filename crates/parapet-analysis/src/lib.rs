//! Engineering analysis orchestration for Parapet
//!
//! Composes the geo resolver, code mapper, wind calculator, approval
//! filter, fastening derivation, and template selector into one
//! pipeline producing an [`AnalysisResult`] with provenance and
//! data-quality warnings on every sub-result.
//!
//! Callers with partial data can skip the pipeline:
//! [`AnalysisEngine::lookup_code`] answers code questions directly, and
//! [`compute_pressures`] / [`derive_fastening`] are re-exported for the
//! document layer.

pub mod config;
pub mod engine;
pub mod error;
pub mod request;
pub mod result;

pub use config::EngineConfig;
pub use engine::AnalysisEngine;
pub use error::{AnalysisError, Result};
pub use request::AnalysisRequest;
pub use result::{AnalysisResult, ProvenanceRecord};

// Narrow accessors for callers that already hold partial data.
pub use parapet_attachment::derive_fastening;
pub use parapet_wind::compute_pressures;

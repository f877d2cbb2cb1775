//! Core domain types for Parapet
//!
//! Shared vocabulary for the analysis pipeline: locations and
//! jurisdictions, building-code profiles, wind analysis inputs and
//! outputs, manufacturer approvals, fastening specifications, and the
//! provenance metadata every resolved value carries.
//!
//! This crate holds data and validation only. Lookup tables, HTTP
//! clients, and calculation engines live in the crates that consume
//! these types.

pub mod approval;
pub mod code_profile;
pub mod errors;
pub mod fastening;
pub mod geography;
pub mod provenance;
pub mod wind;

pub use approval::ManufacturerApproval;
pub use code_profile::{AsceVersion, CodeProfile};
pub use errors::{DomainError, DomainResult};
pub use fastening::{FasteningSpec, TemplateFamily};
pub use geography::{Coordinates, JurisdictionIdentity};
pub use provenance::{
    AnalysisId, Confidence, DataQualityWarning, Provenance, Source, WarningKind,
};
pub use wind::{ExposureCategory, UpliftFactors, WindAnalysisParams, ZonePressures};

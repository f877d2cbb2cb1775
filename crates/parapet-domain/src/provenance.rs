//! Provenance and data-quality metadata
//!
//! Every resolved sub-result carries a [`Provenance`] recording which
//! fallback tier produced it and how trustworthy it is. Warnings are
//! never silently dropped; anything the pipeline had to assume or clamp
//! is surfaced in the final result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which tier of the fallback ladder produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    Cache,
    LocalTable,
    ExternalService,
    Interpolation,
    StaticDefault,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Cache => "cache",
            Source::LocalTable => "local-table",
            Source::ExternalService => "external-service",
            Source::Interpolation => "interpolation",
            Source::StaticDefault => "static-default",
        }
    }
}

/// Trust level of a resolved value
///
/// Variants are declared lowest-first so the derived `Ord` makes
/// `High` the greatest, letting callers take `min()` across components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// Source and confidence for one resolved sub-result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub source: Source,
    pub confidence: Confidence,
}

impl Provenance {
    pub fn new(source: Source, confidence: Confidence) -> Self {
        Self { source, confidence }
    }

    /// Same value, rebadged as served from cache
    pub fn cached(mut self) -> Self {
        self.source = Source::Cache;
        self
    }
}

/// Categories of data-quality findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    HvhzOutsideFlorida,
    SpacingClamped,
    ExposureDefaulted,
    AsceVersionDefaulted,
    UpstreamUnavailable,
    NoEligibleApprovals,
    TemplateFallback,
}

/// A finding the pipeline recorded instead of silently correcting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataQualityWarning {
    pub kind: WarningKind,
    pub message: String,
}

impl DataQualityWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Analysis identifier - a UUID-based identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(uuid::Uuid);

impl AnalysisId {
    /// Generate a new random analysis ID
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Create from string representation
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(uuid::Uuid::parse_str(s)?))
    }
}

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

//! The analysis result aggregate

use chrono::{DateTime, Utc};
use parapet_approvals::ApprovalEvaluation;
use parapet_attachment::TemplateSelection;
use parapet_domain::{
    AnalysisId, CodeProfile, DataQualityWarning, FasteningSpec, JurisdictionIdentity,
    Provenance, UpliftFactors, WindAnalysisParams, ZonePressures,
};
use serde::{Deserialize, Serialize};

/// Provenance for each sub-result of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceRecord {
    pub geo: Provenance,
    pub code: Provenance,
    pub pressures: Provenance,
    pub approvals: Provenance,
    pub template: Provenance,
}

impl ProvenanceRecord {
    /// The weakest confidence across sub-results
    pub fn overall_confidence(&self) -> parapet_domain::Confidence {
        self.geo
            .confidence
            .min(self.code.confidence)
            .min(self.pressures.confidence)
            .min(self.approvals.confidence)
            .min(self.template.confidence)
    }
}

/// Complete outcome of one analysis request
///
/// Constructed once by the engine and never mutated; the document and
/// workflow layers consume it as structured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: AnalysisId,
    pub jurisdiction: JurisdictionIdentity,
    pub elevation_ft: f64,
    pub code_profile: CodeProfile,
    pub wind_params: WindAnalysisParams,
    pub factors: UpliftFactors,
    pub pressures: ZonePressures,
    pub approvals: ApprovalEvaluation,
    pub fastening: FasteningSpec,
    pub template: TemplateSelection,
    pub provenance: ProvenanceRecord,
    pub warnings: Vec<DataQualityWarning>,
    pub computed_at: DateTime<Utc>,
}

//! The resolution pipeline
//!
//! One linear path: resolve geo, map code, assemble wind params, compute
//! pressures, screen approvals, select a template, derive fastening,
//! assemble the result. Branches exist only as the per-component
//! fallback tiers; a component that cannot answer at full confidence
//! answers at lower confidence instead of aborting. Only a missing or
//! invalid location aborts a request.

use chrono::Utc;
use parapet_approvals::{filter_approvals, ApprovalStore};
use parapet_attachment::{
    derive_fastening, select_template, MembraneFamily, PressureTier, ProjectType, SelectorKey,
    BASE_TEMPLATE_ID,
};
use parapet_codes::{validate_hvhz_consistency, CodeMapper};
use parapet_domain::{
    AnalysisId, CodeProfile, Confidence, DataQualityWarning, DomainError, ExposureCategory,
    Provenance, Source, WarningKind, WindAnalysisParams,
};
use parapet_geo::{GeoQuery, GeoResolver};
use parapet_wind::compute_pressures;
use tracing::info;

use crate::{
    config::EngineConfig,
    error::{AnalysisError, Result},
    request::AnalysisRequest,
    result::{AnalysisResult, ProvenanceRecord},
};

/// The engineering analysis engine
pub struct AnalysisEngine {
    resolver: GeoResolver,
    mapper: CodeMapper,
    approvals: ApprovalStore,
    config: EngineConfig,
}

impl AnalysisEngine {
    /// Production engine: HTTP geocoder, embedded reference data
    pub fn new(config: EngineConfig) -> Result<Self> {
        let resolver = GeoResolver::new(config.geocoder.clone(), config.cache.clone())?;
        Ok(Self::with_parts(
            config,
            resolver,
            CodeMapper::new(),
            ApprovalStore::embedded(),
        ))
    }

    /// Engine that never calls out to the network
    pub fn offline(config: EngineConfig) -> Self {
        let resolver = GeoResolver::offline(config.cache.clone());
        Self::with_parts(config, resolver, CodeMapper::new(), ApprovalStore::embedded())
    }

    /// Engine with injected collaborators, for tests and embedding
    pub fn with_parts(
        config: EngineConfig,
        resolver: GeoResolver,
        mapper: CodeMapper,
        approvals: ApprovalStore,
    ) -> Self {
        Self {
            resolver,
            mapper,
            approvals,
            config,
        }
    }

    /// Run the full pipeline for one request
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let query = self.location_query(request)?;
        let location = self.resolver.resolve(&query).await?;
        let mut warnings: Vec<DataQualityWarning> = location.warnings.clone();

        let (code_profile, code_provenance) = self.mapper.map_code(&location.jurisdiction);
        if let Some(warning) =
            validate_hvhz_consistency(&code_profile, &location.jurisdiction.state)
        {
            warnings.push(warning);
        }

        let (exposure, exposure_warning) =
            resolve_exposure(request.exposure, location.exposure_hint);
        if let Some(warning) = exposure_warning {
            warnings.push(warning);
        }

        let building_height_ft = request
            .building_height_ft
            .unwrap_or(self.config.default_building_height_ft);
        if !building_height_ft.is_finite() || building_height_ft <= 0.0 {
            return Err(AnalysisError::InvalidInput(
                DomainError::InvalidBuildingHeight {
                    height_ft: building_height_ft,
                },
            ));
        }

        let wind_params = WindAnalysisParams {
            latitude: location.coordinates.latitude,
            longitude: location.coordinates.longitude,
            elevation_ft: location.elevation_ft,
            exposure,
            building_height_ft,
            asce_version: code_profile.asce_version,
            base_wind_speed_mph: code_profile.base_wind_speed_mph,
        };
        let wind = compute_pressures(&wind_params)?;

        let product_type = request
            .product_type
            .as_deref()
            .unwrap_or(&self.config.default_product_type);
        let evaluation = filter_approvals(
            &wind.pressures,
            product_type,
            code_profile.hvhz,
            Utc::now(),
            &self.approvals,
        );
        if evaluation.eligible.is_empty() {
            warnings.push(DataQualityWarning::new(
                WarningKind::NoEligibleApprovals,
                format!(
                    "no {product_type} approval meets the required \
                     {:.0} lbf rating",
                    evaluation.required_mcrf_lbf
                ),
            ));
        }

        let selector_key = SelectorKey {
            project_type: request.project_type.unwrap_or(ProjectType::Replacement),
            deck_type: request.deck_type,
            membrane_family: request.membrane_family.unwrap_or(MembraneFamily::Tpo),
            attachment_method: request.attachment_method,
            hvhz: code_profile.hvhz,
            pressure_tier: PressureTier::from_corner_pressure(wind.pressures.corner),
        };
        let template = select_template(&selector_key);
        if template.template_id == BASE_TEMPLATE_ID {
            warnings.push(DataQualityWarning::new(
                WarningKind::TemplateFallback,
                "no template row matched; defaulted to the base template".to_string(),
            ));
        }

        let (fastening, fastening_warnings) =
            derive_fastening(wind.pressures.corner, template.family);
        warnings.extend(fastening_warnings);

        let provenance = assemble_provenance(
            location.provenance,
            code_provenance,
            &template.fallback_steps,
        );
        dedup_warnings(&mut warnings);

        let result = AnalysisResult {
            id: AnalysisId::new(),
            jurisdiction: location.jurisdiction,
            elevation_ft: location.elevation_ft,
            code_profile,
            wind_params,
            factors: wind.factors,
            pressures: wind.pressures,
            approvals: evaluation,
            fastening,
            template,
            provenance,
            warnings,
            computed_at: Utc::now(),
        };

        info!(
            analysis_id = %result.id,
            county = %result.jurisdiction.county,
            state = %result.jurisdiction.state,
            code_cycle = %result.code_profile.code_cycle,
            hvhz = result.code_profile.hvhz,
            corner_psf = result.pressures.corner,
            template = %result.template.template_id,
            confidence = result.provenance.overall_confidence().as_str(),
            warnings = result.warnings.len(),
            "analysis complete"
        );
        Ok(result)
    }

    /// Code profile for a known (county, state), skipping geocoding
    pub fn lookup_code(&self, county: &str, state: &str) -> (CodeProfile, Provenance) {
        self.mapper.lookup_code(county, state)
    }

    fn location_query(&self, request: &AnalysisRequest) -> Result<GeoQuery> {
        if let Some(coordinates) = request.coordinates {
            return Ok(GeoQuery::Point(coordinates));
        }
        match &request.address {
            Some(address) if !address.trim().is_empty() => {
                Ok(GeoQuery::Address(address.clone()))
            }
            _ => Err(AnalysisError::MissingLocation),
        }
    }
}

/// Exposure priority: caller override, then region hint, then C
fn resolve_exposure(
    requested: Option<ExposureCategory>,
    hint: Option<ExposureCategory>,
) -> (ExposureCategory, Option<DataQualityWarning>) {
    if let Some(exposure) = requested {
        return (exposure, None);
    }
    if let Some(exposure) = hint {
        return (exposure, None);
    }
    (
        ExposureCategory::C,
        Some(DataQualityWarning::new(
            WarningKind::ExposureDefaulted,
            "no exposure category supplied or inferable; defaulted to C".to_string(),
        )),
    )
}

fn assemble_provenance(
    geo: Provenance,
    code: Provenance,
    template_fallback_steps: &[String],
) -> ProvenanceRecord {
    // Pressures are a pure function of geo and code inputs; they carry
    // the weakest confidence feeding them.
    let pressures = Provenance::new(
        Source::LocalTable,
        geo.confidence.min(code.confidence),
    );
    let template_confidence = if template_fallback_steps.is_empty() {
        Confidence::High
    } else {
        Confidence::Medium
    };
    ProvenanceRecord {
        geo,
        code,
        pressures,
        approvals: Provenance::new(Source::LocalTable, Confidence::High),
        template: Provenance::new(Source::LocalTable, template_confidence),
    }
}

fn dedup_warnings(warnings: &mut Vec<DataQualityWarning>) {
    let mut seen = Vec::new();
    warnings.retain(|warning| {
        let key = (warning.kind, warning.message.clone());
        if seen.contains(&key) {
            false
        } else {
            seen.push(key);
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposure_priority_is_override_then_hint_then_default() {
        let (exposure, warning) =
            resolve_exposure(Some(ExposureCategory::B), Some(ExposureCategory::D));
        assert_eq!(exposure, ExposureCategory::B);
        assert!(warning.is_none());

        let (exposure, warning) = resolve_exposure(None, Some(ExposureCategory::D));
        assert_eq!(exposure, ExposureCategory::D);
        assert!(warning.is_none());

        let (exposure, warning) = resolve_exposure(None, None);
        assert_eq!(exposure, ExposureCategory::C);
        assert_eq!(warning.unwrap().kind, WarningKind::ExposureDefaulted);
    }

    #[test]
    fn duplicate_warnings_collapse() {
        let mut warnings = vec![
            DataQualityWarning::new(WarningKind::SpacingClamped, "a"),
            DataQualityWarning::new(WarningKind::SpacingClamped, "a"),
            DataQualityWarning::new(WarningKind::SpacingClamped, "b"),
        ];
        dedup_warnings(&mut warnings);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn missing_location_is_rejected_before_any_work() {
        let engine = AnalysisEngine::offline(EngineConfig::default());
        let request = AnalysisRequest::for_address("   ");
        let err = engine.location_query(&request).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingLocation));
    }
}

//! End-to-end pipeline behavior with the offline engine
//!
//! The offline engine exercises every tier except the external
//! geocoder: local region dataset, embedded code table, embedded
//! approval dataset.

use parapet_analysis::{AnalysisEngine, AnalysisError, AnalysisRequest, EngineConfig};
use parapet_domain::{
    Confidence, Coordinates, ExposureCategory, Source, TemplateFamily, WarningKind,
};

fn engine() -> AnalysisEngine {
    AnalysisEngine::offline(EngineConfig::default())
}

fn miami() -> Coordinates {
    Coordinates::new(25.7743, -80.1937).unwrap()
}

fn dallas() -> Coordinates {
    Coordinates::new(32.7767, -96.797).unwrap()
}

#[tokio::test]
async fn miami_analysis_is_hvhz_under_the_fbc() {
    let request = AnalysisRequest::for_coordinates(miami())
        .with_building_height_ft(30.0)
        .with_exposure(ExposureCategory::C);
    let result = engine().analyze(&request).await.unwrap();

    assert_eq!(result.jurisdiction.county, "miami-dade");
    assert_eq!(result.jurisdiction.state, "FL");
    assert!(result.code_profile.hvhz);
    assert_eq!(result.code_profile.code_cycle, "2023 FBC");
    assert!(result.code_profile.base_wind_speed_mph >= 175.0);

    // Zone severity ordering.
    assert!(result.pressures.corner.abs() > result.pressures.perimeter_outer.abs());
    assert!(result.pressures.perimeter_outer.abs() > result.pressures.field.abs());

    // HVHZ flows through template and fastening.
    assert_eq!(result.template.family, TemplateFamily::Hvhz);
    assert!(result
        .fastening
        .engineering_notes
        .iter()
        .any(|n| n.contains("TAS 105")));

    assert_eq!(result.provenance.geo.source, Source::LocalTable);
    assert_eq!(result.provenance.geo.confidence, Confidence::High);
}

#[tokio::test]
async fn dallas_analysis_uses_the_ibc_default() {
    let request = AnalysisRequest::for_coordinates(dallas())
        .with_building_height_ft(25.0)
        .with_exposure(ExposureCategory::B);
    let result = engine().analyze(&request).await.unwrap();

    assert_eq!(result.jurisdiction.state, "TX");
    assert!(!result.code_profile.hvhz);
    assert_eq!(result.code_profile.code_cycle, "2021 IBC");
    assert_eq!(result.code_profile.base_wind_speed_mph, 115.0);
    assert_eq!(result.wind_params.exposure, ExposureCategory::B);
    assert!(!result
        .warnings
        .iter()
        .any(|w| w.kind == WarningKind::HvhzOutsideFlorida));
}

#[tokio::test]
async fn repeat_analysis_is_byte_identical() {
    let engine = engine();
    let request = AnalysisRequest::for_coordinates(miami()).with_building_height_ft(30.0);

    let first = engine.analyze(&request).await.unwrap();
    let second = engine.analyze(&request).await.unwrap();

    assert_eq!(
        serde_json::to_vec(&first.pressures).unwrap(),
        serde_json::to_vec(&second.pressures).unwrap()
    );
    assert_eq!(
        serde_json::to_vec(&first.code_profile).unwrap(),
        serde_json::to_vec(&second.code_profile).unwrap()
    );
}

#[tokio::test]
async fn request_without_location_is_rejected() {
    let mut request = AnalysisRequest::for_address("placeholder");
    request.address = None;
    let err = engine().analyze(&request).await.unwrap_err();
    assert!(matches!(err, AnalysisError::MissingLocation));
}

#[tokio::test]
async fn invalid_coordinates_fail_the_whole_pipeline() {
    let request = AnalysisRequest::for_coordinates(Coordinates {
        latitude: 120.0,
        longitude: 0.0,
    });
    assert!(engine().analyze(&request).await.is_err());
}

#[tokio::test]
async fn unknown_product_type_yields_a_warning_not_an_error() {
    let request = AnalysisRequest::for_coordinates(dallas())
        .with_exposure(ExposureCategory::B)
        .with_product_type("thatch");
    let result = engine().analyze(&request).await.unwrap();

    assert!(result.approvals.eligible.is_empty());
    assert!(result
        .warnings
        .iter()
        .any(|w| w.kind == WarningKind::NoEligibleApprovals));
}

#[tokio::test]
async fn missing_exposure_defaults_to_c_with_a_warning() {
    // Dallas has no exposure hint in the region table.
    let request = AnalysisRequest::for_coordinates(dallas());
    let result = engine().analyze(&request).await.unwrap();

    assert_eq!(result.wind_params.exposure, ExposureCategory::C);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.kind == WarningKind::ExposureDefaulted));
}

#[tokio::test]
async fn coastal_exposure_hint_applies_when_not_overridden() {
    let request = AnalysisRequest::for_coordinates(miami());
    let result = engine().analyze(&request).await.unwrap();
    assert_eq!(result.wind_params.exposure, ExposureCategory::D);
}

#[tokio::test]
async fn lookup_code_accessor_skips_geocoding() {
    let engine = engine();
    let (profile, provenance) = engine.lookup_code("Broward", "FL");
    assert!(profile.hvhz);
    assert_eq!(provenance.source, Source::LocalTable);

    let (fallback, fallback_provenance) = engine.lookup_code("Unknown", "ZZ");
    assert_eq!(fallback.code_cycle, "2021 IBC");
    assert_eq!(fallback.base_wind_speed_mph, 115.0);
    assert_eq!(fallback_provenance.confidence, Confidence::Low);
}

#[tokio::test]
async fn negative_building_height_is_invalid_input() {
    let request =
        AnalysisRequest::for_coordinates(dallas()).with_building_height_ft(-10.0);
    let err = engine().analyze(&request).await.unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidInput(_)));
}

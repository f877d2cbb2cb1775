//! Pressure calculator benchmarks
//!
//! The calculator sits on the hot path of every analysis request, so a
//! single run should stay in the sub-microsecond range.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parapet_domain::{AsceVersion, ExposureCategory, WindAnalysisParams};
use parapet_wind::compute_pressures;

fn bench_compute_pressures(c: &mut Criterion) {
    let params = WindAnalysisParams {
        latitude: 25.7617,
        longitude: -80.1918,
        elevation_ft: 10.0,
        exposure: ExposureCategory::C,
        building_height_ft: 30.0,
        asce_version: AsceVersion::V7_16,
        base_wind_speed_mph: 175.0,
    };

    c.bench_function("compute_pressures_7_16", |b| {
        b.iter(|| compute_pressures(black_box(&params)))
    });

    let mut tall = params;
    tall.building_height_ft = 120.0;
    tall.asce_version = AsceVersion::V7_22;
    tall.elevation_ft = 2500.0;
    c.bench_function("compute_pressures_7_22_tall", |b| {
        b.iter(|| compute_pressures(black_box(&tall)))
    });
}

criterion_group!(benches, bench_compute_pressures);
criterion_main!(benches);

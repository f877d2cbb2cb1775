//! Capacity screening
//!
//! Splits candidate approvals into eligible systems ranked by capacity
//! margin and rejected ones with human-readable reasons. The rejections
//! are a required output for the audit record, not debugging residue.

use chrono::{DateTime, Utc};
use parapet_domain::{ManufacturerApproval, ZonePressures};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{store::ApprovalStore, thresholds::minimum_required_mcrf};

/// An eligible approval with its capacity margin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedApproval {
    pub approval: ManufacturerApproval,
    /// Rating minus required, lbf; larger is safer
    pub margin_lbf: f64,
}

/// An excluded approval and why
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedApproval {
    pub approval: ManufacturerApproval,
    pub reason: String,
}

/// Full screening outcome for one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalEvaluation {
    /// The centralized policy threshold that was applied, lbf
    pub required_mcrf_lbf: f64,
    /// Eligible systems, best margin first
    pub eligible: Vec<RankedApproval>,
    /// Excluded candidates with reasons, original order
    pub rejected: Vec<RejectedApproval>,
}

/// Screen every approval of a product type against the design pressure
pub fn filter_approvals(
    pressures: &ZonePressures,
    product_type: &str,
    hvhz: bool,
    now: DateTime<Utc>,
    store: &ApprovalStore,
) -> ApprovalEvaluation {
    let max_pressure = pressures.max_uplift_magnitude();
    let required = minimum_required_mcrf(max_pressure, hvhz);

    let mut eligible = Vec::new();
    let mut rejected = Vec::new();

    for candidate in store.by_product_type(product_type) {
        match rejection_reason(candidate, required, now) {
            Some(reason) => rejected.push(RejectedApproval {
                approval: candidate.clone(),
                reason,
            }),
            None => eligible.push(RankedApproval {
                approval: candidate.clone(),
                margin_lbf: candidate.pull_resistance_lbf - required,
            }),
        }
    }

    // Best margin first; manufacturer name breaks ties so equal-margin
    // runs come out in a stable order.
    eligible.sort_by(|a, b| {
        b.margin_lbf
            .partial_cmp(&a.margin_lbf)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.approval.manufacturer.cmp(&b.approval.manufacturer))
    });

    debug!(
        product_type,
        max_pressure_psf = max_pressure,
        required_mcrf_lbf = required,
        eligible = eligible.len(),
        rejected = rejected.len(),
        "screened manufacturer approvals"
    );

    ApprovalEvaluation {
        required_mcrf_lbf: required,
        eligible,
        rejected,
    }
}

fn rejection_reason(
    approval: &ManufacturerApproval,
    required_lbf: f64,
    now: DateTime<Utc>,
) -> Option<String> {
    if !approval.active {
        return Some("marked inactive by the approval authority".to_string());
    }
    if approval.is_expired(now) {
        return Some(format!(
            "expired {}",
            approval.expiration.format("%Y-%m-%d")
        ));
    }
    if approval.pull_resistance_lbf < required_lbf {
        return Some(format!(
            "insufficient rating: {:.0} lbf < required {:.0} lbf",
            approval.pull_resistance_lbf, required_lbf
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn row(
        manufacturer: &str,
        rating: f64,
        active: bool,
        expiration: DateTime<Utc>,
    ) -> ManufacturerApproval {
        ManufacturerApproval {
            manufacturer: manufacturer.to_string(),
            product_type: "single-ply membrane".to_string(),
            approval_number: format!("TEST-{manufacturer}"),
            pull_resistance_lbf: rating,
            expiration,
            active,
        }
    }

    fn pressures(corner: f64) -> ZonePressures {
        ZonePressures {
            field: corner * 0.3,
            perimeter_inner: corner * 0.5,
            perimeter_outer: corner * 0.7,
            corner,
        }
    }

    #[test]
    fn screening_at_45_psf_applies_the_300_lbf_tier() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 0, 0, 0).unwrap();
        let future = Utc.with_ymd_and_hms(2028, 1, 1, 0, 0, 0).unwrap();
        let store = ApprovalStore::from_records(vec![
            row("Underrated", 280.0, true, future),
            row("Adequate", 310.0, true, future),
        ]);

        let evaluation =
            filter_approvals(&pressures(-45.0), "single-ply membrane", false, now, &store);

        assert_eq!(evaluation.required_mcrf_lbf, 300.0);
        assert_eq!(evaluation.eligible.len(), 1);
        assert_eq!(evaluation.eligible[0].approval.manufacturer, "Adequate");
        assert!((evaluation.eligible[0].margin_lbf - 10.0).abs() < 1e-9);
        assert_eq!(evaluation.rejected.len(), 1);
        assert!(evaluation.rejected[0]
            .reason
            .contains("insufficient rating: 280 lbf < required 300 lbf"));
    }

    #[test]
    fn expired_and_inactive_rows_are_never_eligible() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 0, 0, 0).unwrap();
        let past = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let future = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let store = ApprovalStore::from_records(vec![
            row("Expired", 500.0, true, past),
            row("Inactive", 500.0, false, future),
        ]);

        let evaluation =
            filter_approvals(&pressures(-20.0), "single-ply membrane", false, now, &store);

        assert!(evaluation.eligible.is_empty());
        assert_eq!(evaluation.rejected.len(), 2);
        assert!(evaluation.rejected[0].reason.contains("expired 2024-06-01"));
        assert!(evaluation.rejected[1].reason.contains("inactive"));
    }

    #[test]
    fn eligible_systems_rank_by_margin_then_name() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 0, 0, 0).unwrap();
        let future = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let store = ApprovalStore::from_records(vec![
            row("Bravo", 320.0, true, future),
            row("Alpha", 320.0, true, future),
            row("Charlie", 400.0, true, future),
        ]);

        let evaluation =
            filter_approvals(&pressures(-35.0), "single-ply membrane", false, now, &store);

        let names: Vec<&str> = evaluation
            .eligible
            .iter()
            .map(|r| r.approval.manufacturer.as_str())
            .collect();
        assert_eq!(names, vec!["Charlie", "Alpha", "Bravo"]);
    }

    #[test]
    fn hvhz_screening_tightens_the_threshold() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 0, 0, 0).unwrap();
        let future = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let store =
            ApprovalStore::from_records(vec![row("Borderline", 285.0, true, future)]);

        let standard =
            filter_approvals(&pressures(-35.0), "single-ply membrane", false, now, &store);
        assert_eq!(standard.eligible.len(), 1);

        let hvhz =
            filter_approvals(&pressures(-35.0), "single-ply membrane", true, now, &store);
        assert!(hvhz.eligible.is_empty());
        assert_eq!(hvhz.required_mcrf_lbf, 300.0);
    }
}

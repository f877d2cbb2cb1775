//! Manufacturer product approvals
//!
//! Approval rows come from an external administrative feed and are
//! read-only here. Eligibility screening lives in the approvals crate;
//! this type only knows its own lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A certified roof-system approval (NOA or state product approval)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturerApproval {
    pub manufacturer: String,
    pub product_type: String,
    /// Listing number, e.g. "NOA 22-0513.04" or "FL16354-R35"
    pub approval_number: String,
    /// Certified pullout capacity (MCRF), lbf
    pub pull_resistance_lbf: f64,
    pub expiration: DateTime<Utc>,
    pub active: bool,
}

impl ManufacturerApproval {
    /// An approval past its expiration date is never eligible,
    /// regardless of rating.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration <= now
    }
}

//! Manufacturer approval screening for Parapet
//!
//! A read-only store of certified roof-system approvals plus the
//! capacity screening that splits them into eligible systems ranked by
//! margin and rejected candidates with reasons. The MCRF threshold
//! table lives in one place here; no other crate restates it.

pub mod error;
pub mod filter;
pub mod store;
pub mod thresholds;

pub use error::{ApprovalError, Result};
pub use filter::{filter_approvals, ApprovalEvaluation, RankedApproval, RejectedApproval};
pub use store::ApprovalStore;
pub use thresholds::{minimum_required_mcrf, MCRF_FLOOR_LBF, MCRF_THRESHOLDS};

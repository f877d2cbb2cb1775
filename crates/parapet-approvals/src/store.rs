//! Approval reference store
//!
//! Read-only view over the manufacturer approval dataset. The embedded
//! rows stand in for the administratively maintained feed; deployments
//! with a live feed construct the store from records instead.

use once_cell::sync::Lazy;
use parapet_domain::ManufacturerApproval;

use crate::error::Result;

/// The embedded reference dataset
const APPROVALS_JSON: &str = include_str!("../data/approvals.json");

static EMBEDDED: Lazy<Vec<ManufacturerApproval>> = Lazy::new(|| {
    serde_json::from_str(APPROVALS_JSON).expect("embedded approval dataset must parse")
});

/// Read-only approval queries
pub struct ApprovalStore {
    records: Vec<ManufacturerApproval>,
}

impl ApprovalStore {
    /// Store over the embedded reference dataset
    pub fn embedded() -> Self {
        Self {
            records: EMBEDDED.clone(),
        }
    }

    /// Store over externally supplied rows
    pub fn from_records(records: Vec<ManufacturerApproval>) -> Self {
        Self { records }
    }

    /// Store parsed from an external JSON feed
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            records: serde_json::from_str(json)?,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows for a product type, case-insensitive
    pub fn by_product_type(&self, product_type: &str) -> Vec<&ManufacturerApproval> {
        self.records
            .iter()
            .filter(|r| r.product_type.eq_ignore_ascii_case(product_type.trim()))
            .collect()
    }

    /// Rows for one manufacturer and product type, case-insensitive
    pub fn by_manufacturer_and_type(
        &self,
        manufacturer: &str,
        product_type: &str,
    ) -> Vec<&ManufacturerApproval> {
        self.by_product_type(product_type)
            .into_iter()
            .filter(|r| r.manufacturer.eq_ignore_ascii_case(manufacturer.trim()))
            .collect()
    }
}

impl Default for ApprovalStore {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_loads() {
        let store = ApprovalStore::embedded();
        assert!(store.len() >= 10);
        assert!(!store.by_product_type("single-ply membrane").is_empty());
        assert!(!store.by_product_type("modified bitumen").is_empty());
    }

    #[test]
    fn product_type_match_is_case_insensitive() {
        let store = ApprovalStore::embedded();
        assert_eq!(
            store.by_product_type("Single-Ply Membrane").len(),
            store.by_product_type("single-ply membrane").len()
        );
        assert!(store.by_product_type("thatch").is_empty());
    }

    #[test]
    fn manufacturer_query_narrows_the_set() {
        let store = ApprovalStore::embedded();
        let rows = store.by_manufacturer_and_type("carlisle syntec", "single-ply membrane");
        assert!(!rows.is_empty());
        assert!(rows
            .iter()
            .all(|r| r.manufacturer.eq_ignore_ascii_case("Carlisle SynTec")));
    }

    #[test]
    fn external_feed_parses() {
        let json = r#"[{
            "manufacturer": "Acme",
            "product_type": "single-ply membrane",
            "approval_number": "FL00001-R1",
            "pull_resistance_lbf": 300.0,
            "expiration": "2030-01-01T00:00:00Z",
            "active": true
        }]"#;
        let store = ApprovalStore::from_json(json).unwrap();
        assert_eq!(store.len(), 1);
        assert!(ApprovalStore::from_json("not json").is_err());
    }
}

//! Embedded jurisdiction table
//!
//! State defaults and county overrides ship inside the binary as
//! annotated JSON, comment-stripped and parsed exactly once at first
//! use. Rows are data; lookup policy lives in the mapper.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use parapet_domain::AsceVersion;
use serde::Deserialize;

use crate::{error::Result, jsonc::strip_comments};

/// The annotated jurisdiction dataset
const JURISDICTIONS_JSONC: &str = include_str!("../data/jurisdictions.jsonc");

/// Baseline profile for a state (or the global default)
#[derive(Debug, Clone, Deserialize)]
pub struct StateEntry {
    pub code_cycle: String,
    #[serde(deserialize_with = "deserialize_asce_version")]
    pub asce_version: AsceVersion,
    pub base_wind_speed_mph: f64,
    #[serde(default)]
    pub special_requirements: Vec<String>,
    #[serde(default)]
    pub counties: HashMap<String, CountyEntry>,
}

/// Per-county overrides layered onto the state row
#[derive(Debug, Clone, Deserialize)]
pub struct CountyEntry {
    #[serde(default)]
    pub base_wind_speed_mph: Option<f64>,
    #[serde(default)]
    pub hvhz: bool,
    #[serde(default)]
    pub special_requirements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionTable {
    pub global_default: StateEntry,
    pub states: HashMap<String, StateEntry>,
}

impl JurisdictionTable {
    pub fn state(&self, state: &str) -> Option<&StateEntry> {
        self.states.get(state)
    }

    /// County override under a state, canonical-key match
    pub fn county(&self, county: &str, state: &str) -> Option<&CountyEntry> {
        self.state(state)?.counties.get(county)
    }
}

fn deserialize_asce_version<'de, D>(deserializer: D) -> std::result::Result<AsceVersion, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    AsceVersion::parse(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("unknown ASCE version in table: {raw}"))
    })
}

fn parse_table(jsonc: &str) -> Result<JurisdictionTable> {
    let stripped = strip_comments(jsonc);
    Ok(serde_json::from_str(&stripped)?)
}

/// The parsed table, loaded once for the process lifetime
///
/// A parse failure here is a data bug shipped in the binary, so the
/// initializer panics with the parse error rather than threading an
/// impossible `Result` through every lookup.
pub static TABLE: Lazy<JurisdictionTable> = Lazy::new(|| {
    parse_table(JURISDICTIONS_JSONC).expect("embedded jurisdiction table must parse")
});

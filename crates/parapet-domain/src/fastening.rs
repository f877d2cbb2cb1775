//! Fastening specifications and template families

use serde::{Deserialize, Serialize};

/// Roof-system template family, the coarse grouping that drives
/// fastening modifiers and test-protocol citations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateFamily {
    Standard,
    Enhanced,
    Hvhz,
    DualAttachment,
}

impl TemplateFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateFamily::Standard => "standard",
            TemplateFamily::Enhanced => "enhanced",
            TemplateFamily::Hvhz => "hvhz",
            TemplateFamily::DualAttachment => "dual-attachment",
        }
    }
}

/// Derived fastening requirements for one analysis
///
/// Recomputed per request from pressures and template family; never
/// stored as canonical truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FasteningSpec {
    /// Center-to-center fastener spacing per zone, inches
    pub field_spacing_in: f64,
    pub perimeter_spacing_in: f64,
    pub corner_spacing_in: f64,
    /// Minimum deck penetration, inches
    pub penetration_depth_in: f64,
    /// Required pullout resistance, lbf
    pub required_pullout_lbf: f64,
    /// Human-readable record: governing pressure, factors, protocol
    /// citations
    pub engineering_notes: Vec<String>,
}

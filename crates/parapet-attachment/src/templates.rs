//! System template selection
//!
//! A declarative decision table keyed by project, deck, membrane,
//! attachment, HVHZ, and pressure tier. Rows use `None` as a wildcard
//! and are ordered most-specific first. Lookup relaxes the key one
//! dimension at a time (attachment method, then deck type) before
//! landing on the named base template; every relaxation is recorded so
//! callers can explain why a template was chosen.

use parapet_domain::TemplateFamily;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Kind of roofing project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Recover,
    Replacement,
    NewConstruction,
}

/// Structural deck under the roof system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeckType {
    Steel,
    Wood,
    Concrete,
    LightweightConcrete,
}

/// Membrane product family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MembraneFamily {
    Tpo,
    Epdm,
    Pvc,
    ModifiedBitumen,
}

/// How the system is secured to the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttachmentMethod {
    MechanicallyAttached,
    FullyAdhered,
    InductionWelded,
}

/// Severity band of the design pressure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureTier {
    Standard,
    Elevated,
    Extreme,
}

/// Corner pressure magnitude where the elevated tier begins, psf
pub const ELEVATED_TIER_PSF: f64 = 40.0;

/// Corner pressure magnitude where the extreme tier begins, psf
pub const EXTREME_TIER_PSF: f64 = 75.0;

impl PressureTier {
    /// Tier for a corner-zone pressure, sign ignored
    pub fn from_corner_pressure(corner_psf: f64) -> Self {
        let magnitude = corner_psf.abs();
        if magnitude > EXTREME_TIER_PSF {
            PressureTier::Extreme
        } else if magnitude > ELEVATED_TIER_PSF {
            PressureTier::Elevated
        } else {
            PressureTier::Standard
        }
    }
}

/// Selection key; `None` marks inputs the caller does not know
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorKey {
    pub project_type: ProjectType,
    pub deck_type: Option<DeckType>,
    pub membrane_family: MembraneFamily,
    pub attachment_method: Option<AttachmentMethod>,
    pub hvhz: bool,
    pub pressure_tier: PressureTier,
}

/// The chosen template and how it attaches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSelection {
    pub template_id: String,
    pub attachment_method: AttachmentMethod,
    pub family: TemplateFamily,
    /// Relaxation steps taken to reach this row, empty for exact hits
    pub fallback_steps: Vec<String>,
}

/// One decision-table row; `None` fields match anything
struct Rule {
    project_type: Option<ProjectType>,
    deck_type: Option<DeckType>,
    membrane: Option<MembraneFamily>,
    attachment: Option<AttachmentMethod>,
    hvhz: bool,
    tier: Option<PressureTier>,
    template_id: &'static str,
    attachment_out: AttachmentMethod,
    family: TemplateFamily,
}

/// Template id used when no row matches at any specificity
pub const BASE_TEMPLATE_ID: &str = "base-mechanically-attached";

/// The decision table, most specific rows first
const RULES: &[Rule] = &[
    // HVHZ rows: family is always Hvhz and adhered systems give way to
    // mechanically attached ones with NOA-listed plates.
    Rule {
        project_type: None,
        deck_type: Some(DeckType::Concrete),
        membrane: Some(MembraneFamily::ModifiedBitumen),
        attachment: None,
        hvhz: true,
        tier: None,
        template_id: "modbit-concrete-hvhz",
        attachment_out: AttachmentMethod::FullyAdhered,
        family: TemplateFamily::Hvhz,
    },
    Rule {
        project_type: None,
        deck_type: None,
        membrane: Some(MembraneFamily::ModifiedBitumen),
        attachment: None,
        hvhz: true,
        tier: None,
        template_id: "modbit-hvhz",
        attachment_out: AttachmentMethod::MechanicallyAttached,
        family: TemplateFamily::Hvhz,
    },
    Rule {
        project_type: None,
        deck_type: None,
        membrane: None,
        attachment: None,
        hvhz: true,
        tier: None,
        template_id: "single-ply-hvhz",
        attachment_out: AttachmentMethod::MechanicallyAttached,
        family: TemplateFamily::Hvhz,
    },
    // Extreme pressures outside the HVHZ escalate to dual attachment.
    Rule {
        project_type: None,
        deck_type: None,
        membrane: None,
        attachment: None,
        hvhz: false,
        tier: Some(PressureTier::Extreme),
        template_id: "dual-attachment-extreme",
        attachment_out: AttachmentMethod::MechanicallyAttached,
        family: TemplateFamily::DualAttachment,
    },
    // Specific standard-tier systems.
    Rule {
        project_type: Some(ProjectType::Recover),
        deck_type: Some(DeckType::Steel),
        membrane: Some(MembraneFamily::Tpo),
        attachment: Some(AttachmentMethod::InductionWelded),
        hvhz: false,
        tier: None,
        template_id: "tpo-steel-recover-induction",
        attachment_out: AttachmentMethod::InductionWelded,
        family: TemplateFamily::Enhanced,
    },
    Rule {
        project_type: None,
        deck_type: Some(DeckType::Steel),
        membrane: Some(MembraneFamily::Tpo),
        attachment: Some(AttachmentMethod::MechanicallyAttached),
        hvhz: false,
        tier: None,
        template_id: "tpo-steel-mechanical",
        attachment_out: AttachmentMethod::MechanicallyAttached,
        family: TemplateFamily::Standard,
    },
    Rule {
        project_type: None,
        deck_type: Some(DeckType::Concrete),
        membrane: Some(MembraneFamily::Epdm),
        attachment: Some(AttachmentMethod::FullyAdhered),
        hvhz: false,
        tier: None,
        template_id: "epdm-concrete-adhered",
        attachment_out: AttachmentMethod::FullyAdhered,
        family: TemplateFamily::Standard,
    },
    // Membrane-level defaults once deck or attachment is unknown.
    Rule {
        project_type: None,
        deck_type: None,
        membrane: Some(MembraneFamily::Tpo),
        attachment: None,
        hvhz: false,
        tier: Some(PressureTier::Elevated),
        template_id: "tpo-enhanced",
        attachment_out: AttachmentMethod::MechanicallyAttached,
        family: TemplateFamily::Enhanced,
    },
    Rule {
        project_type: None,
        deck_type: None,
        membrane: Some(MembraneFamily::Tpo),
        attachment: None,
        hvhz: false,
        tier: None,
        template_id: "tpo-mechanical",
        attachment_out: AttachmentMethod::MechanicallyAttached,
        family: TemplateFamily::Standard,
    },
    Rule {
        project_type: None,
        deck_type: None,
        membrane: Some(MembraneFamily::Epdm),
        attachment: None,
        hvhz: false,
        tier: None,
        template_id: "epdm-adhered",
        attachment_out: AttachmentMethod::FullyAdhered,
        family: TemplateFamily::Standard,
    },
    Rule {
        project_type: None,
        deck_type: None,
        membrane: Some(MembraneFamily::Pvc),
        attachment: None,
        hvhz: false,
        tier: None,
        template_id: "pvc-mechanical",
        attachment_out: AttachmentMethod::MechanicallyAttached,
        family: TemplateFamily::Standard,
    },
    Rule {
        project_type: None,
        deck_type: None,
        membrane: Some(MembraneFamily::ModifiedBitumen),
        attachment: None,
        hvhz: false,
        tier: None,
        template_id: "modbit-torch",
        attachment_out: AttachmentMethod::FullyAdhered,
        family: TemplateFamily::Standard,
    },
];

impl Rule {
    fn matches(&self, key: &SelectorKey, use_attachment: bool, use_deck: bool) -> bool {
        dim(self.project_type, Some(key.project_type))
            && dim(self.membrane, Some(key.membrane_family))
            && self.hvhz == key.hvhz
            && dim(self.tier, Some(key.pressure_tier))
            && (!use_attachment || dim(self.attachment, key.attachment_method))
            && (!use_deck || dim(self.deck_type, key.deck_type))
    }
}

/// Wildcard dimension match: a `None` rule field matches anything; a
/// concrete rule field requires the same concrete key value.
fn dim<T: PartialEq>(rule: Option<T>, key: Option<T>) -> bool {
    match rule {
        None => true,
        Some(r) => key == Some(r),
    }
}

/// Select a template through the specificity ladder
pub fn select_template(key: &SelectorKey) -> TemplateSelection {
    let mut fallback_steps = Vec::new();
    if key.attachment_method.is_none() {
        fallback_steps.push("attachment method not specified".to_string());
    }
    if key.deck_type.is_none() {
        fallback_steps.push("deck type not specified".to_string());
    }

    let passes: [(&str, bool, bool); 3] = [
        ("exact", true, true),
        ("dropped attachment method", false, true),
        ("dropped attachment method and deck type", false, false),
    ];

    for (label, use_attachment, use_deck) in passes {
        if let Some(rule) = RULES
            .iter()
            .find(|rule| rule.matches(key, use_attachment, use_deck))
        {
            if label != "exact" {
                fallback_steps.push(label.to_string());
            }
            debug!(
                template_id = rule.template_id,
                pass = label,
                "selected system template"
            );
            return TemplateSelection {
                template_id: rule.template_id.to_string(),
                attachment_method: rule.attachment_out,
                family: rule.family,
                fallback_steps,
            };
        }
        fallback_steps.push(format!("no match at specificity: {label}"));
    }

    debug!(template_id = BASE_TEMPLATE_ID, "fell back to base template");
    fallback_steps.push("defaulted to base template".to_string());
    TemplateSelection {
        template_id: BASE_TEMPLATE_ID.to_string(),
        attachment_method: AttachmentMethod::MechanicallyAttached,
        family: TemplateFamily::Standard,
        fallback_steps,
    }
}

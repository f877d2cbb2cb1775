//! Fastening derivation and template selection for Parapet
//!
//! Two table-driven decisions: how tightly to fasten (a monotone step
//! function of pressure with family modifiers and a hard 2-inch floor)
//! and which system template a project should render from (a wildcard
//! decision table with an explicit specificity ladder).

pub mod fastening;
pub mod templates;

pub use fastening::{
    derive_fastening, MIN_PULLOUT_LBF, MIN_SPACING_IN, PENETRATION_ENHANCED_IN,
    PENETRATION_STANDARD_IN, PULLOUT_PER_PSF,
};
pub use templates::{
    select_template, AttachmentMethod, DeckType, MembraneFamily, PressureTier, ProjectType,
    SelectorKey, TemplateSelection, BASE_TEMPLATE_ID, ELEVATED_TIER_PSF, EXTREME_TIER_PSF,
};

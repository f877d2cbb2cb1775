//! Property tests for fastening derivation
//!
//! The floor must hold for any pressure up to an extreme bound and any
//! family, spacing must never loosen as pressure grows, and clamping
//! must always be accompanied by a warning.

use parapet_attachment::{derive_fastening, MIN_SPACING_IN};
use parapet_domain::{TemplateFamily, WarningKind};
use proptest::prelude::*;

fn family_strategy() -> impl Strategy<Value = TemplateFamily> {
    prop_oneof![
        Just(TemplateFamily::Standard),
        Just(TemplateFamily::Enhanced),
        Just(TemplateFamily::Hvhz),
        Just(TemplateFamily::DualAttachment),
    ]
}

proptest! {
    #[test]
    fn spacing_never_goes_below_the_floor(
        pressure in -200.0f64..0.0,
        family in family_strategy(),
    ) {
        let (spec, _) = derive_fastening(pressure, family);
        prop_assert!(spec.field_spacing_in >= MIN_SPACING_IN);
        prop_assert!(spec.perimeter_spacing_in >= MIN_SPACING_IN);
        prop_assert!(spec.corner_spacing_in >= MIN_SPACING_IN);
    }

    #[test]
    fn zones_never_loosen_inward(
        pressure in -200.0f64..0.0,
        family in family_strategy(),
    ) {
        let (spec, _) = derive_fastening(pressure, family);
        prop_assert!(spec.corner_spacing_in <= spec.perimeter_spacing_in);
        prop_assert!(spec.perimeter_spacing_in <= spec.field_spacing_in);
    }

    #[test]
    fn spacing_is_monotone_in_pressure(
        pressure in 0.0f64..195.0,
        delta in 0.0f64..5.0,
        family in family_strategy(),
    ) {
        let (looser, _) = derive_fastening(-pressure, family);
        let (tighter, _) = derive_fastening(-(pressure + delta), family);
        prop_assert!(tighter.field_spacing_in <= looser.field_spacing_in);
        prop_assert!(tighter.corner_spacing_in <= looser.corner_spacing_in);
        prop_assert!(tighter.required_pullout_lbf >= looser.required_pullout_lbf);
    }

    #[test]
    fn clamping_is_always_reported(
        pressure in -200.0f64..0.0,
        family in family_strategy(),
    ) {
        let (spec, warnings) = derive_fastening(pressure, family);
        let at_floor = spec.corner_spacing_in == MIN_SPACING_IN
            || spec.perimeter_spacing_in == MIN_SPACING_IN
            || spec.field_spacing_in == MIN_SPACING_IN;
        let clamped = warnings.iter().any(|w| w.kind == WarningKind::SpacingClamped);
        if clamped {
            prop_assert!(at_floor, "a clamp warning requires a zone at the floor");
        }
    }
}

//! Property-based tests for the measurement facade.
//!
//! These tests use proptest to generate random gear specifications and
//! verify the pipeline's invariants.
//!
//! Run with: cargo test -p gear-measure -- proptest

use gear_measure::{
    GearSpecification, MeasurementMethod, PinSource, measure, measure_batch,
};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// A specification with every parameter inside its validation domain and a
/// tooth thickness near the nominal half circular pitch, so the geometry is
/// usually feasible.
fn arb_feasible_external() -> impl Strategy<Value = GearSpecification> {
    (
        20u32..=400,
        4.0..32.0f64,
        (14.5..30.0f64, -30.0..30.0f64),
    )
        .prop_map(|(teeth, dp, (pa, helix))| {
            let half_circular_pitch = std::f64::consts::PI / (2.0 * dp);
            GearSpecification::external(teeth, dp, pa, half_circular_pitch)
                .with_helix_angle(helix)
        })
}

/// Completely unconstrained numeric input.
fn arb_wild_spec() -> impl Strategy<Value = GearSpecification> {
    (
        0u32..2000,
        prop::num::f64::ANY,
        prop::num::f64::ANY,
        prop::num::f64::ANY,
        prop::num::f64::ANY,
        prop::bool::ANY,
    )
        .prop_map(|(teeth, pitch, pa, flank, helix, internal)| {
            let spec = if internal {
                GearSpecification::internal(teeth, pitch, pa, flank)
            } else {
                GearSpecification::external(teeth, pitch, pa, flank)
            };
            spec.with_helix_angle(helix)
        })
}

// =============================================================================
// Property Tests: Robustness
// =============================================================================

proptest! {
    /// The facade never panics, whatever numbers it is handed; bad input
    /// surfaces as an error value.
    #[test]
    fn measure_never_panics(spec in arb_wild_spec()) {
        let _ = measure(&spec);
    }

    /// Identical specifications produce bit-identical results.
    #[test]
    fn measure_is_idempotent(spec in arb_feasible_external()) {
        let first = measure(&spec);
        let second = measure(&spec);
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Property Tests: Measurement invariants
// =============================================================================

proptest! {
    /// Parity selection is deterministic and exhaustive over the tooth
    /// range: even is 2-pin, odd is odd-tooth, nothing else.
    #[test]
    fn parity_is_exhaustive(spec in arb_feasible_external()) {
        if let Ok(result) = measure(&spec) {
            let expected = if spec.teeth % 2 == 0 {
                MeasurementMethod::TwoPin
            } else {
                MeasurementMethod::OddTooth
            };
            prop_assert_eq!(result.method, expected);
        }
    }

    /// An external measurement over pins always exceeds the pitch diameter
    /// of its computation plane.
    #[test]
    fn external_measurement_exceeds_pitch_diameter(spec in arb_feasible_external()) {
        if let Ok(result) = measure(&spec) {
            prop_assert!(result.value > result.pitch_diameter);
        }
    }

    /// Spur results carry exactly zero correction and no transverse block;
    /// helical results carry both.
    #[test]
    fn correction_tracks_helix(spec in arb_feasible_external()) {
        if let Ok(result) = measure(&spec) {
            if spec.helix_angle_deg == 0.0 {
                prop_assert_eq!(result.helical_correction, 0.0);
                prop_assert!(result.transverse.is_none());
            } else {
                prop_assert!(result.transverse.is_some());
            }
        }
    }

    /// The measurement is symmetric in hand: mirroring the helix angle
    /// changes the reported hand but not the measured value.
    #[test]
    fn hand_symmetry(spec in arb_feasible_external()) {
        let mirrored = spec.clone().with_helix_angle(-spec.helix_angle_deg);
        match (measure(&spec), measure(&mirrored)) {
            (Ok(right), Ok(left)) => {
                prop_assert_eq!(right.value, left.value);
                prop_assert_eq!(right.helical_correction, left.helical_correction);
                prop_assert_eq!(right.method, left.method);
            }
            (Err(_), Err(_)) => {}
            (right, left) => {
                prop_assert!(false, "hand asymmetry: {right:?} vs {left:?}");
            }
        }
    }

    /// Omitting the pin always yields an estimated-pin result (or a clean
    /// error), never a panic or a specified-pin claim.
    #[test]
    fn missing_pin_is_estimated(spec in arb_feasible_external()) {
        if let Ok(result) = measure(&spec) {
            prop_assert_eq!(result.pin_source, PinSource::Estimated);
            prop_assert!(result.pin_diameter > 0.0);
        }
    }
}

// =============================================================================
// Property Tests: Batch evaluation
// =============================================================================

proptest! {
    /// Batch evaluation agrees with single evaluation record by record and
    /// preserves order.
    #[test]
    fn batch_matches_single(specs in prop::collection::vec(arb_feasible_external(), 1..20)) {
        let batched = measure_batch(&specs);
        prop_assert_eq!(batched.len(), specs.len());
        for (spec, outcome) in specs.iter().zip(&batched) {
            prop_assert_eq!(outcome, &measure(spec));
        }
    }
}

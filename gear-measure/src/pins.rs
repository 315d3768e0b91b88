//! Rule-of-thumb pin diameter estimation.
//!
//! The common shop rule for nominal, unshifted gears is `d = k / DP`
//! (or `k * module` metric) with `k` keyed by pressure angle. The true best
//! pin varies slightly with tooth count and profile shift; this is a
//! convenience default, and results computed from it carry a wider
//! uncertainty.

use gear_types::Units;

/// One pressure-angle band of the estimation table.
#[derive(Debug, Clone, Copy)]
struct PinRule {
    /// Inclusive band bounds, degrees of pressure angle.
    min_pa_deg: f64,
    max_pa_deg: f64,
    /// Shop constant `k` in `d = k / DP`.
    constant: f64,
}

// Shop constants for the standard pressure angles. Published references
// disagree on the 20 degree constant (1.68 vs 1.728); this table is the
// authoritative choice, documented in DESIGN.md.
static PIN_RULES: [PinRule; 3] = [
    PinRule {
        min_pa_deg: 19.0,
        max_pa_deg: 21.0,
        constant: 1.68,
    },
    PinRule {
        min_pa_deg: 24.0,
        max_pa_deg: 26.0,
        constant: 1.70,
    },
    PinRule {
        min_pa_deg: 14.0,
        max_pa_deg: 15.0,
        constant: 1.728,
    },
];

// Interpolation anchors for pressure angles outside every band.
const INTERP_LOW: (f64, f64) = (14.5, 1.728);
const INTERP_HIGH: (f64, f64) = (25.0, 1.70);

/// Estimate a measuring pin diameter from the pressure-angle rule.
///
/// Returns the pin in the units of `pitch` (inches for diametral pitch,
/// millimeters for module). Pressure angles outside every table band fall
/// back to linear interpolation between the 14.5 and 25 degree anchors.
pub(crate) fn estimate_pin(pressure_angle_deg: f64, pitch: f64, units: Units) -> f64 {
    let constant = PIN_RULES
        .iter()
        .find(|rule| {
            pressure_angle_deg >= rule.min_pa_deg && pressure_angle_deg <= rule.max_pa_deg
        })
        .map_or_else(
            || {
                let (pa_low, k_low) = INTERP_LOW;
                let (pa_high, k_high) = INTERP_HIGH;
                let slope = (k_high - k_low) / (pa_high - pa_low);
                k_low + slope * (pressure_angle_deg - pa_low)
            },
            |rule| rule.constant,
        );

    match units {
        Units::Inches => constant / pitch,
        Units::Millimeters => constant * pitch,
    }
}

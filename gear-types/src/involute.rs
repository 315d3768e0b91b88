//! The involute function and its numerical inverse.
//!
//! The involute function `inv(x) = tan(x) - x` maps the roll angle of a
//! point on an involute flank to its polar-angle offset. Pin measurement
//! needs the inverse mapping, which has no closed form; it is recovered by
//! Newton-Raphson on `f(x) = tan(x) - x - y`:
//!
//! 1. Seed with the small-angle approximation `x0 = cbrt(3y)`
//! 2. Iterate `x <- x - f(x)/f'(x)` with `f'(x) = tan^2(x)`
//! 3. Stop once both the step and the residual fall below tolerance
//!
//! The seed always lands at or right of the root (`inv(x) > x^3/3` on the
//! whole domain), so the convex iteration descends monotonically and never
//! approaches the `tan` pole. Iterates are clamped below the asymptote as a
//! final guard, and the loop is capped: exhausting the cap is reported as
//! [`GearError::NonConvergence`], never returned as an unconverged angle.

use crate::error::{GearError, GearResult};
use std::f64::consts::FRAC_PI_2;

/// Largest angle the inversion will visit, just below the `tan` asymptote.
const MAX_ANGLE: f64 = FRAC_PI_2 - 1e-9;

/// Evaluates the involute function `inv(x) = tan(x) - x`.
///
/// Strictly increasing on `[0, pi/2)` with `inv(0) = 0`, diverging as the
/// angle approaches `pi/2`.
///
/// # Example
///
/// ```
/// use gear_types::involute;
///
/// // 20 degree pressure angle, the most common gear standard
/// let inv = involute(20.0_f64.to_radians());
/// assert!((inv - 0.014904).abs() < 1e-6);
/// ```
#[must_use]
pub fn involute(angle: f64) -> f64 {
    angle.tan() - angle
}

/// Parameters for the involute inversion.
#[derive(Debug, Clone, Copy)]
pub struct InversionParams {
    /// Maximum number of Newton iterations (default: 250).
    pub max_iterations: u32,
    /// Convergence tolerance applied to both the step size and the function
    /// residual (default: 1e-12).
    pub tolerance: f64,
}

impl Default for InversionParams {
    fn default() -> Self {
        Self {
            max_iterations: 250,
            tolerance: 1e-12,
        }
    }
}

impl InversionParams {
    /// Creates new inversion parameters with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Result of a converged involute inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InversionResult {
    /// The angle `x` with `inv(x)` equal to the requested value.
    pub angle: f64,
    /// Number of Newton iterations performed.
    pub iterations: u32,
    /// Function residual at the last evaluated iterate.
    pub residual: f64,
}

/// Inverts the involute function.
///
/// Finds the unique `x` in `[0, pi/2)` with `inv(x) = value`.
///
/// # Errors
///
/// Returns an error if:
/// - `value` is negative or not finite (`InvalidParameter`)
/// - the iteration cap is reached before convergence (`NonConvergence`)
///
/// # Example
///
/// ```
/// use gear_types::{inverse_involute, involute, InversionParams};
///
/// let y = involute(0.35);
/// let found = inverse_involute(y, &InversionParams::default()).unwrap();
/// assert!((found.angle - 0.35).abs() < 1e-9);
/// ```
pub fn inverse_involute(value: f64, params: &InversionParams) -> GearResult<InversionResult> {
    if !value.is_finite() {
        return Err(GearError::invalid_parameter(
            "involute_value",
            format!("must be finite, got {value}"),
        ));
    }
    if value < 0.0 {
        return Err(GearError::invalid_parameter(
            "involute_value",
            format!("must be non-negative, got {value}"),
        ));
    }
    if value == 0.0 {
        return Ok(InversionResult {
            angle: 0.0,
            iterations: 0,
            residual: 0.0,
        });
    }

    let mut x = (3.0 * value).cbrt().min(MAX_ANGLE);
    let mut iterations = 0;
    let mut residual = f64::MAX;

    for iter in 0..params.max_iterations {
        iterations = iter + 1;

        let tan_x = x.tan();
        let f = tan_x - x - value;
        let df = tan_x * tan_x;

        let step = f / df;
        x = (x - step).clamp(0.0, MAX_ANGLE);
        residual = f;

        if step.abs() <= params.tolerance && f.abs() <= params.tolerance {
            return Ok(InversionResult {
                angle: x,
                iterations,
                residual,
            });
        }
    }

    Err(GearError::non_convergence(iterations, residual))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_involute_known_values() {
        assert_relative_eq!(involute(0.0), 0.0);
        // inv(20 deg), the tabulated standard value
        assert_relative_eq!(
            involute(20.0_f64.to_radians()),
            0.014904383867336446,
            epsilon = 1e-15
        );
        // inv(14.5 deg)
        assert_relative_eq!(
            involute(14.5_f64.to_radians()),
            0.0055448,
            epsilon = 1e-7
        );
    }

    #[test]
    fn test_involute_strictly_increasing() {
        let mut prev = involute(0.01);
        for i in 2..150 {
            let x = f64::from(i) * 0.01;
            let next = involute(x);
            assert!(next > prev, "involute not increasing at x = {x}");
            prev = next;
        }
    }

    #[test]
    fn test_inverse_involute_roundtrip() {
        let params = InversionParams::default();
        for &x in &[0.05, 0.2, 0.405, 0.7, 1.0, 1.3, 1.399] {
            let result = inverse_involute(involute(x), &params).unwrap();
            assert_relative_eq!(result.angle, x, epsilon = 1e-11);
            // Large values clamp the seed at the asymptote and walk back,
            // which costs extra iterations
            assert!(result.iterations <= 40, "too many iterations at x = {x}");
        }
    }

    #[test]
    fn test_inverse_involute_zero() {
        let result = inverse_involute(0.0, &InversionParams::default()).unwrap();
        assert_relative_eq!(result.angle, 0.0);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_inverse_involute_negative() {
        let result = inverse_involute(-0.01, &InversionParams::default());
        assert!(matches!(result, Err(GearError::InvalidParameter { .. })));
    }

    #[test]
    fn test_inverse_involute_non_finite() {
        let result = inverse_involute(f64::NAN, &InversionParams::default());
        assert!(matches!(result, Err(GearError::InvalidParameter { .. })));

        let result = inverse_involute(f64::INFINITY, &InversionParams::default());
        assert!(matches!(result, Err(GearError::InvalidParameter { .. })));
    }

    #[test]
    fn test_inverse_involute_iteration_cap() {
        // Two iterations are nowhere near enough for a value this large
        let params = InversionParams::new().with_max_iterations(2);
        let result = inverse_involute(1.0, &params);
        assert!(matches!(
            result,
            Err(GearError::NonConvergence { iterations: 2, .. })
        ));
    }

    #[test]
    fn test_inverse_involute_large_value() {
        // Root sits close to the asymptote; the clamp must keep the
        // iteration inside the domain
        let result = inverse_involute(50.0, &InversionParams::default()).unwrap();
        assert!(result.angle < FRAC_PI_2);
        assert!((involute(result.angle) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_params_builders() {
        let params = InversionParams::new()
            .with_max_iterations(100)
            .with_tolerance(1e-10);
        assert_eq!(params.max_iterations, 100);
        assert_relative_eq!(params.tolerance, 1e-10);
    }
}

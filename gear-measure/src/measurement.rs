//! The measurement facade.
//!
//! [`measure`] is the single entry point of the pipeline: it validates the
//! specification, resolves the pin, dispatches over the four gear classes
//! (external/internal crossed with spur/helical) and assembles the immutable
//! result. [`measure_batch`] evaluates many specifications in parallel with
//! one independent outcome per record.

use gear_types::{GearKind, GearResult, GearSpecification, Units};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::contact::{self, ContactSolution};
use crate::helical;
use crate::pins;
use crate::result::{MeasurementResult, PinSource, TransverseGeometry};

/// Compute the pin measurement for one gear.
///
/// Steps: validate, resolve the pin (rule-of-thumb estimate if the
/// specification carries none), solve the contact geometry in the
/// appropriate plane, apply the helical correction where applicable, and
/// attach the uncertainty estimate. Pure function: identical inputs yield
/// bit-identical results.
///
/// # Errors
///
/// - [`gear_types::GearError::InvalidParameter`] for out-of-domain inputs
/// - [`gear_types::GearError::GeometricInfeasibility`] when the pin cannot
///   sit in the tooth space or contact the flanks
/// - [`gear_types::GearError::NonConvergence`] if the involute inversion
///   exhausts its iteration cap
///
/// # Example
///
/// ```
/// use gear_measure::measure;
/// use gear_types::GearSpecification;
///
/// let spec = GearSpecification::external(45, 8.0, 20.0, 0.2124)
///     .with_pin_diameter(0.2160);
/// let result = measure(&spec).unwrap();
/// assert!((result.value - 5.963727).abs() < 2e-6);
/// ```
#[allow(clippy::too_many_lines)]
pub fn measure(spec: &GearSpecification) -> GearResult<MeasurementResult> {
    spec.validate()?;

    if !spec.has_standard_pressure_angle() {
        warn!(
            pressure_angle_deg = spec.pressure_angle_deg,
            "Nonstandard pressure angle, no published pin table applies"
        );
    }

    let (pin_diameter, pin_source) = match spec.pin_diameter {
        Some(diameter) => (diameter, PinSource::Specified),
        None => (
            pins::estimate_pin(spec.pressure_angle_deg, spec.pitch, spec.units),
            PinSource::Estimated,
        ),
    };

    info!(
        teeth = spec.teeth,
        kind = spec.kind.label(),
        helix_deg = spec.helix_angle_deg,
        pin = pin_diameter,
        "Starting pin measurement"
    );

    let (solution, correction, transverse) = match (&spec.kind, spec.is_spur()) {
        (GearKind::External { tooth_thickness }, true) => {
            let solution = contact::solve_external(
                spec.teeth,
                spec.pitch_diameter(),
                spec.pressure_angle_deg.to_radians(),
                *tooth_thickness,
                pin_diameter,
            )?;
            (solution, 0.0, None)
        }
        (GearKind::Internal { space_width }, true) => {
            let solution = contact::solve_internal(
                spec.teeth,
                spec.pitch_diameter(),
                spec.pressure_angle_deg.to_radians(),
                *space_width,
                pin_diameter,
            )?;
            (solution, 0.0, None)
        }
        (GearKind::External { tooth_thickness }, false) => {
            let params = helical::to_transverse(
                spec.pressure_angle_deg,
                spec.helix_angle_deg,
                spec.pitch,
                *tooth_thickness,
                spec.units,
            );
            let mut solution = contact::solve_external(
                spec.teeth,
                transverse_pitch_diameter(spec.teeth, params.pitch, spec.units),
                params.pressure_angle_rad,
                params.flank_dimension,
                pin_diameter,
            )?;
            let correction = helical::helical_correction(
                spec.helix_angle_deg,
                spec.pressure_angle_deg,
                pin_diameter,
                false,
            );
            solution.value += correction;
            (solution, correction, Some(transverse_geometry(&params)))
        }
        (GearKind::Internal { space_width }, false) => {
            let params = helical::to_transverse(
                spec.pressure_angle_deg,
                spec.helix_angle_deg,
                spec.pitch,
                *space_width,
                spec.units,
            );
            let mut solution = contact::solve_internal(
                spec.teeth,
                transverse_pitch_diameter(spec.teeth, params.pitch, spec.units),
                params.pressure_angle_rad,
                params.flank_dimension,
                pin_diameter,
            )?;
            let correction = helical::helical_correction(
                spec.helix_angle_deg,
                spec.pressure_angle_deg,
                pin_diameter,
                true,
            );
            solution.value -= correction;
            (solution, -correction, Some(transverse_geometry(&params)))
        }
    };

    debug!(
        contact_angle_rad = solution.contact_angle_rad,
        iterations = solution.iterations,
        correction,
        "Contact angle solved"
    );

    let result = assemble(spec, &solution, correction, transverse, pin_diameter, pin_source);

    info!(
        value = result.value,
        method = result.method.label(),
        uncertainty = result.uncertainty,
        "Pin measurement complete"
    );

    Ok(result)
}

/// Evaluate many specifications in parallel.
///
/// Records are independent: one failing record never aborts its siblings,
/// and the output order matches the input order.
#[must_use]
pub fn measure_batch(specs: &[GearSpecification]) -> Vec<GearResult<MeasurementResult>> {
    specs.par_iter().map(measure).collect()
}

/// Pitch diameter from the transverse pitch.
fn transverse_pitch_diameter(teeth: u32, pitch: f64, units: Units) -> f64 {
    match units {
        Units::Inches => f64::from(teeth) / pitch,
        Units::Millimeters => f64::from(teeth) * pitch,
    }
}

fn transverse_geometry(params: &helical::TransverseParams) -> TransverseGeometry {
    TransverseGeometry {
        pressure_angle_deg: params.pressure_angle_rad.to_degrees(),
        pitch: params.pitch,
        flank_dimension: params.flank_dimension,
        base_helix_angle_deg: params.base_helix_angle_rad.to_degrees(),
    }
}

fn assemble(
    spec: &GearSpecification,
    solution: &ContactSolution,
    correction: f64,
    transverse: Option<TransverseGeometry>,
    pin_diameter: f64,
    pin_source: PinSource,
) -> MeasurementResult {
    MeasurementResult {
        value: solution.value,
        method: solution.method,
        pitch_diameter: solution.pitch_diameter,
        base_diameter: solution.base_diameter,
        pin_center_diameter: solution.pin_center_diameter,
        contact_angle_rad: solution.contact_angle_rad,
        helical_correction: correction,
        uncertainty: estimate_uncertainty(spec, pin_diameter, pin_source, correction),
        pin_diameter,
        pin_source,
        iterations: solution.iterations,
        transverse,
        units: spec.units,
    }
}

/// Measurement uncertainty in output units.
///
/// Scales a base uncertainty by helix angle, by the pin's distance from the
/// nominal shop pin, and by low tooth counts; widens by half again when the
/// pin was estimated rather than specified, and grows with the magnitude of
/// the empirical correction.
fn estimate_uncertainty(
    spec: &GearSpecification,
    pin_diameter: f64,
    pin_source: PinSource,
    correction: f64,
) -> f64 {
    let base = match spec.units {
        Units::Inches => 3.0e-5,
        Units::Millimeters => 3.0e-5 * 25.4,
    };

    let helix_factor = 1.0 + spec.helix_angle_deg.abs() * 0.001;

    let nominal_pin = match spec.units {
        Units::Inches => 1.68 / spec.pitch,
        Units::Millimeters => 1.68 * spec.pitch,
    };
    let pin_factor = 1.0 + (pin_diameter / nominal_pin - 1.0).abs() * 0.05;

    let tooth_factor = if spec.teeth < 50 {
        1.0 + (50.0 / f64::from(spec.teeth)) * 0.001
    } else {
        1.0
    };

    let mut uncertainty = base * helix_factor * pin_factor * tooth_factor;
    if pin_source == PinSource::Estimated {
        uncertainty *= 1.5;
    }
    uncertainty + 0.02 * correction.abs()
}

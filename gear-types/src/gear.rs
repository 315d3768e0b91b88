//! Gear specification value types.
//!
//! A [`GearSpecification`] carries everything the measurement pipeline needs:
//! tooth count, pitch, pressure angle, the flank dimension (tooth thickness
//! for external gears, space width for internal), an optional pin diameter,
//! and the helix angle. The flank dimension lives inside [`GearKind`] so an
//! external gear can never accidentally carry a space width or vice versa.

use crate::error::{GearError, GearResult};
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pressure angles with published pin tables; anything else still computes
/// but is worth flagging to the operator.
pub const STANDARD_PRESSURE_ANGLES: [f64; 6] = [14.5, 17.5, 20.0, 22.5, 25.0, 30.0];

/// Unit system of a gear specification.
///
/// The `pitch` field of a [`GearSpecification`] is a diametral pitch
/// (1/inch) under [`Units::Inches`] and a module (millimeters) under
/// [`Units::Millimeters`]. All lengths in and out share the declared unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Units {
    /// Diametral-pitch system; lengths in inches.
    Inches,
    /// Module system; lengths in millimeters.
    Millimeters,
}

impl Units {
    /// Check if this is the metric (module) system.
    #[must_use]
    pub const fn is_metric(self) -> bool {
        matches!(self, Self::Millimeters)
    }

    /// Unit label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inches => "in",
            Self::Millimeters => "mm",
        }
    }
}

/// External or internal gear, carrying the flank dimension that applies.
///
/// External gears are specified by circular tooth thickness, internal gears
/// by circular space width, both at the reference pitch circle. Making the
/// dimension part of the variant enforces that exactly one is meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GearKind {
    /// External gear, measured over pins.
    External {
        /// Circular tooth thickness at the pitch circle.
        tooth_thickness: f64,
    },
    /// Internal (ring) gear, measured between pins.
    Internal {
        /// Circular space width at the pitch circle.
        space_width: f64,
    },
}

impl GearKind {
    /// Check if this is an internal gear.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }

    /// The flank dimension: tooth thickness (external) or space width
    /// (internal).
    #[must_use]
    pub const fn flank_dimension(&self) -> f64 {
        match self {
            Self::External { tooth_thickness } => *tooth_thickness,
            Self::Internal { space_width } => *space_width,
        }
    }

    /// Label for display and error messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::External { .. } => "external",
            Self::Internal { .. } => "internal",
        }
    }
}

/// Immutable input to a pin measurement.
///
/// Constructed with [`external`](Self::external) /
/// [`internal`](Self::internal) (diametral-pitch system) or
/// [`external_module`](Self::external_module) /
/// [`internal_module`](Self::internal_module) (metric), then refined with
/// the `with_*` builders.
///
/// # Example
///
/// ```
/// use gear_types::GearSpecification;
///
/// let spec = GearSpecification::external(45, 8.0, 20.0, 0.2124)
///     .with_pin_diameter(0.2160);
///
/// assert!(spec.validate().is_ok());
/// assert!((spec.pitch_diameter() - 5.625).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GearSpecification {
    /// External/internal, with the flank dimension.
    pub kind: GearKind,
    /// Number of teeth.
    pub teeth: u32,
    /// Diametral pitch (1/inch) or module (mm), per `units`.
    pub pitch: f64,
    /// Normal pressure angle in degrees.
    pub pressure_angle_deg: f64,
    /// Helix angle in degrees; 0 for spur gears.
    pub helix_angle_deg: f64,
    /// Measuring pin diameter; `None` requests the rule-of-thumb estimate.
    pub pin_diameter: Option<f64>,
    /// Unit system of all lengths.
    pub units: Units,
}

impl GearSpecification {
    /// External spur gear in the diametral-pitch system.
    #[must_use]
    pub const fn external(
        teeth: u32,
        diametral_pitch: f64,
        pressure_angle_deg: f64,
        tooth_thickness: f64,
    ) -> Self {
        Self {
            kind: GearKind::External { tooth_thickness },
            teeth,
            pitch: diametral_pitch,
            pressure_angle_deg,
            helix_angle_deg: 0.0,
            pin_diameter: None,
            units: Units::Inches,
        }
    }

    /// Internal spur gear in the diametral-pitch system.
    #[must_use]
    pub const fn internal(
        teeth: u32,
        diametral_pitch: f64,
        pressure_angle_deg: f64,
        space_width: f64,
    ) -> Self {
        Self {
            kind: GearKind::Internal { space_width },
            teeth,
            pitch: diametral_pitch,
            pressure_angle_deg,
            helix_angle_deg: 0.0,
            pin_diameter: None,
            units: Units::Inches,
        }
    }

    /// External spur gear in the module (metric) system.
    #[must_use]
    pub const fn external_module(
        teeth: u32,
        module: f64,
        pressure_angle_deg: f64,
        tooth_thickness: f64,
    ) -> Self {
        Self {
            kind: GearKind::External { tooth_thickness },
            teeth,
            pitch: module,
            pressure_angle_deg,
            helix_angle_deg: 0.0,
            pin_diameter: None,
            units: Units::Millimeters,
        }
    }

    /// Internal spur gear in the module (metric) system.
    #[must_use]
    pub const fn internal_module(
        teeth: u32,
        module: f64,
        pressure_angle_deg: f64,
        space_width: f64,
    ) -> Self {
        Self {
            kind: GearKind::Internal { space_width },
            teeth,
            pitch: module,
            pressure_angle_deg,
            helix_angle_deg: 0.0,
            pin_diameter: None,
            units: Units::Millimeters,
        }
    }

    /// Set the helix angle in degrees.
    #[must_use]
    pub const fn with_helix_angle(mut self, helix_angle_deg: f64) -> Self {
        self.helix_angle_deg = helix_angle_deg;
        self
    }

    /// Set the measuring pin diameter.
    #[must_use]
    pub const fn with_pin_diameter(mut self, pin_diameter: f64) -> Self {
        self.pin_diameter = Some(pin_diameter);
        self
    }

    /// Check if this is a spur gear (zero helix angle).
    #[must_use]
    pub fn is_spur(&self) -> bool {
        self.helix_angle_deg == 0.0
    }

    /// Reference pitch diameter: `z / DP` (inch system) or `z · m` (metric).
    ///
    /// For helical gears this is the normal-plane reference; the transverse
    /// pitch diameter used by the solver is derived from the converted pitch.
    #[must_use]
    pub fn pitch_diameter(&self) -> f64 {
        match self.units {
            Units::Inches => f64::from(self.teeth) / self.pitch,
            Units::Millimeters => f64::from(self.teeth) * self.pitch,
        }
    }

    /// Reference base diameter at the normal pressure angle.
    #[must_use]
    pub fn base_diameter(&self) -> f64 {
        self.pitch_diameter() * self.pressure_angle_deg.to_radians().cos()
    }

    /// Circular pitch at the reference pitch circle.
    #[must_use]
    pub fn circular_pitch(&self) -> f64 {
        PI * self.pitch_diameter() / f64::from(self.teeth)
    }

    /// Check if the pressure angle is one of the standard values with
    /// published pin tables.
    #[must_use]
    pub fn has_standard_pressure_angle(&self) -> bool {
        STANDARD_PRESSURE_ANGLES
            .iter()
            .any(|&std| (self.pressure_angle_deg - std).abs() < 1e-9)
    }

    /// Validate every parameter against its declared domain.
    ///
    /// Bounds are inch-system values scaled by 25.4 under the module system.
    ///
    /// # Errors
    ///
    /// Returns [`GearError::InvalidParameter`] naming the first parameter
    /// found outside its domain.
    pub fn validate(&self) -> GearResult<()> {
        if !(4..=1000).contains(&self.teeth) {
            return Err(GearError::invalid_parameter(
                "teeth",
                format!("must be in 4..=1000, got {}", self.teeth),
            ));
        }

        let (pitch_lo, pitch_hi, pitch_name) = match self.units {
            Units::Inches => (0.1, 1000.0, "diametral_pitch"),
            Units::Millimeters => (0.025, 25.4, "module"),
        };
        if !self.pitch.is_finite() || self.pitch < pitch_lo || self.pitch > pitch_hi {
            return Err(GearError::invalid_parameter(
                pitch_name,
                format!("must be in {pitch_lo}..={pitch_hi}, got {}", self.pitch),
            ));
        }

        if !self.pressure_angle_deg.is_finite()
            || !(5.0..=45.0).contains(&self.pressure_angle_deg)
        {
            return Err(GearError::invalid_parameter(
                "pressure_angle_deg",
                format!("must be in 5..=45 degrees, got {}", self.pressure_angle_deg),
            ));
        }

        if !self.helix_angle_deg.is_finite() || self.helix_angle_deg.abs() > 45.0 {
            return Err(GearError::invalid_parameter(
                "helix_angle_deg",
                format!("must be in -45..=45 degrees, got {}", self.helix_angle_deg),
            ));
        }

        let scale = if self.units.is_metric() { 25.4 } else { 1.0 };

        let flank = self.kind.flank_dimension();
        let flank_name = match self.kind {
            GearKind::External { .. } => "tooth_thickness",
            GearKind::Internal { .. } => "space_width",
        };
        if !flank.is_finite() || flank < 0.001 * scale || flank > 100.0 * scale {
            return Err(GearError::invalid_parameter(
                flank_name,
                format!(
                    "must be in {}..={} {}, got {flank}",
                    0.001 * scale,
                    100.0 * scale,
                    self.units.label(),
                ),
            ));
        }

        if let Some(pin) = self.pin_diameter {
            if !pin.is_finite() || pin < 0.001 * scale || pin > 50.0 * scale {
                return Err(GearError::invalid_parameter(
                    "pin_diameter",
                    format!(
                        "must be in {}..={} {}, got {pin}",
                        0.001 * scale,
                        50.0 * scale,
                        self.units.label(),
                    ),
                ));
            }
        }

        Ok(())
    }
}

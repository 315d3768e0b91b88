//! Result types for pin measurement.

use gear_types::Units;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the pins are placed, selected by tooth-count parity.
///
/// Even tooth counts place two pins diametrically opposite; odd counts
/// cannot, so the measurement is projected through `cos(pi/(2z))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeasurementMethod {
    /// Even tooth count: pins diametrically opposite.
    TwoPin,
    /// Odd tooth count: nearest-to-opposite placement with cosine
    /// projection.
    OddTooth,
}

impl MeasurementMethod {
    /// Shop-floor label for this method.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TwoPin => "2-pin",
            Self::OddTooth => "odd tooth",
        }
    }
}

/// Where the pin diameter in a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PinSource {
    /// The caller supplied the pin diameter.
    Specified,
    /// The pin was estimated from the pressure-angle rule of thumb.
    Estimated,
}

/// Transverse-plane parameters of a helical gear measurement.
///
/// Present in a [`MeasurementResult`] only for helical gears; the parity
/// formulas ran on these values rather than the normal-plane inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransverseGeometry {
    /// Transverse pressure angle in degrees.
    pub pressure_angle_deg: f64,
    /// Transverse diametral pitch (1/inch) or module (mm), per the result's
    /// units.
    pub pitch: f64,
    /// Transverse tooth thickness (external) or space width (internal).
    pub flank_dimension: f64,
    /// Helix angle at the base cylinder, degrees.
    pub base_helix_angle_deg: f64,
}

/// Immutable result of a pin measurement.
///
/// `value` is the Measurement Over Pins for external gears and the
/// Measurement Between Pins for internal gears, in the same unit system as
/// the inputs. Derived geometry is reported in the plane the solver ran in
/// (transverse for helical gears).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasurementResult {
    /// MOP (external) or MBP (internal).
    pub value: f64,
    /// Pin placement method, chosen by tooth-count parity.
    pub method: MeasurementMethod,
    /// Pitch diameter in the computation plane.
    pub pitch_diameter: f64,
    /// Base diameter in the computation plane.
    pub base_diameter: f64,
    /// Diameter of the circle through the pin centers.
    pub pin_center_diameter: f64,
    /// Contact angle at which the pin touches the involute flank, radians.
    pub contact_angle_rad: f64,
    /// Empirical helical correction applied to the value; 0 for spur gears.
    pub helical_correction: f64,
    /// Estimated measurement uncertainty, same units as `value`.
    pub uncertainty: f64,
    /// Pin diameter the result was computed with.
    pub pin_diameter: f64,
    /// Whether the pin was caller-specified or estimated.
    pub pin_source: PinSource,
    /// Newton iterations spent solving the contact angle.
    pub iterations: u32,
    /// Transverse-plane parameters; `None` for spur gears.
    pub transverse: Option<TransverseGeometry>,
    /// Unit system of every length in this result.
    pub units: Units,
}

impl MeasurementResult {
    /// Check if this result came from a helical gear.
    #[must_use]
    pub const fn is_helical(&self) -> bool {
        self.transverse.is_some()
    }

    /// Contact angle in degrees, for reporting.
    #[must_use]
    pub fn contact_angle_deg(&self) -> f64 {
        self.contact_angle_rad.to_degrees()
    }
}

impl std::fmt::Display for MeasurementResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = self.units.label();
        writeln!(
            f,
            "Measurement: {:.6} {unit} (+/- {:.6}) [{}]",
            self.value,
            self.uncertainty,
            self.method.label()
        )?;
        writeln!(f, "  Pitch diameter:      {:.6} {unit}", self.pitch_diameter)?;
        writeln!(f, "  Base diameter:       {:.6} {unit}", self.base_diameter)?;
        writeln!(
            f,
            "  Pin center diameter: {:.6} {unit}",
            self.pin_center_diameter
        )?;
        writeln!(
            f,
            "  Contact angle:       {:.4} deg",
            self.contact_angle_deg()
        )?;
        writeln!(
            f,
            "  Pin diameter:        {:.6} {unit}{}",
            self.pin_diameter,
            match self.pin_source {
                PinSource::Specified => "",
                PinSource::Estimated => " (estimated)",
            }
        )?;
        if let Some(transverse) = &self.transverse {
            writeln!(
                f,
                "  Helical correction:  {:+.6} {unit}",
                self.helical_correction
            )?;
            writeln!(
                f,
                "  Transverse PA:       {:.4} deg",
                transverse.pressure_angle_deg
            )?;
        }
        Ok(())
    }
}

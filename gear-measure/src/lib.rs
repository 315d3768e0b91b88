//! Measurement over pins and between pins for involute gears.
//!
//! This crate computes the precision span obtained by inserting calibrated
//! pins into the tooth spaces of a gear and measuring across (external
//! gears, MOP) or between (internal gears, MBP) them. The result verifies
//! manufactured gears against drawing tolerances without full profile
//! metrology.
//!
//! # Pipeline
//!
//! - **Contact solve**: the involute of the pin contact angle is expressed
//!   from the flank dimension and pin diameter, inverted numerically, and
//!   the span read off the base circle with parity-dependent pin placement.
//! - **Helical model**: normal-plane parameters convert to the transverse
//!   plane, the spur formulas run there, and a range-bucketed empirical
//!   correction absorbs the residual axial-positioning effect.
//! - **Pin estimation**: a pressure-angle-keyed rule of thumb fills in the
//!   pin diameter when the specification carries none.
//!
//! # Example
//!
//! ```
//! use gear_measure::{MeasurementMethod, measure};
//! use gear_types::GearSpecification;
//!
//! let spec = GearSpecification::external(45, 8.0, 20.0, 0.2124)
//!     .with_pin_diameter(0.2160);
//!
//! let result = measure(&spec).unwrap();
//! assert_eq!(result.method, MeasurementMethod::OddTooth);
//! println!("{result}");
//! ```
//!
//! # Purity
//!
//! Every computation is a pure function of its inputs: no I/O, no shared
//! state. [`measure_batch`] evaluates records in parallel; each record's
//! outcome is independent. Logging uses `tracing` events; this crate never
//! installs a subscriber.
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for the result types

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod contact;
mod helical;
mod measurement;
mod pins;
mod result;

pub use measurement::{measure, measure_batch};
pub use result::{MeasurementMethod, MeasurementResult, PinSource, TransverseGeometry};

// Re-export the input types for convenience
pub use gear_types::{GearError, GearKind, GearResult, GearSpecification, Units};

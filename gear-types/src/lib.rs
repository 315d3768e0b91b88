//! Involute gear geometry primitives for pin metrology.
//!
//! This crate provides the value types and the numerical core shared by the
//! gear measurement pipeline:
//!
//! - [`GearSpecification`] - Immutable description of a gear to be measured
//! - [`involute`] / [`inverse_involute`] - The involute function and its
//!   bounded Newton-Raphson inverse
//! - [`GearError`] - The error taxonomy for the whole pipeline
//!
//! # Pure Math
//!
//! Everything here is a pure function of its inputs: no I/O, no logging, no
//! shared state. The only loop is the capped Newton iteration inside
//! [`inverse_involute`], whose termination evidence (iterations, residual)
//! is part of its result.
//!
//! # Example
//!
//! ```
//! use gear_types::{involute, inverse_involute, InversionParams};
//!
//! // The involute of the 20 degree pressure angle
//! let y = involute(20.0_f64.to_radians());
//!
//! // ...and back again
//! let x = inverse_involute(y, &InversionParams::default()).unwrap();
//! assert!((x.angle - 20.0_f64.to_radians()).abs() < 1e-12);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for the value types

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod gear;
mod involute;

pub use error::{GearError, GearResult};
pub use gear::{GearKind, GearSpecification, STANDARD_PRESSURE_ANGLES, Units};
pub use involute::{InversionParams, InversionResult, inverse_involute, involute};

//! Error types for gear measurement operations.

use thiserror::Error;

/// Result type alias for gear measurement operations.
pub type GearResult<T> = Result<T, GearError>;

/// Errors that can occur when computing a pin measurement.
///
/// All three variants are terminal for the calculation that raised them;
/// no partial result is ever returned alongside an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GearError {
    /// A parameter is outside its declared domain.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Description of the violated bound.
        reason: String,
    },

    /// The pin diameter is incompatible with the tooth geometry, either too
    /// large to fit the tooth space or too small to contact the flanks.
    #[error("geometrically infeasible: {reason}")]
    GeometricInfeasibility {
        /// Description of the geometric conflict.
        reason: String,
    },

    /// The involute inversion did not converge within the iteration cap.
    ///
    /// This is a numerical failure rather than a user input problem and
    /// should be rare enough to investigate when it occurs.
    #[error("involute inversion did not converge after {iterations} iterations (residual {residual:e})")]
    NonConvergence {
        /// Iterations performed before giving up.
        iterations: u32,
        /// Function residual at the final iterate.
        residual: f64,
    },
}

impl GearError {
    /// Create an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Create a geometric infeasibility error.
    #[must_use]
    pub fn infeasible(reason: impl Into<String>) -> Self {
        Self::GeometricInfeasibility {
            reason: reason.into(),
        }
    }

    /// Create a non-convergence error.
    #[must_use]
    pub const fn non_convergence(iterations: u32, residual: f64) -> Self {
        Self::NonConvergence {
            iterations,
            residual,
        }
    }

    /// Check if this is an invalid parameter error.
    #[must_use]
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Check if this is a geometric infeasibility error.
    #[must_use]
    pub const fn is_infeasible(&self) -> bool {
        matches!(self, Self::GeometricInfeasibility { .. })
    }

    /// Check if this is a non-convergence error.
    #[must_use]
    pub const fn is_non_convergence(&self) -> bool {
        matches!(self, Self::NonConvergence { .. })
    }
}

//! Error types for the Accrue library.
//!
//! Every variant is a rejected argument: validation runs to completion
//! before any arithmetic, so an error never reflects a partially computed
//! result.

use thiserror::Error;

/// A specialized Result type for Accrue calculations.
pub type AccrueResult<T> = Result<T, AccrueError>;

/// Errors that can occur while validating calculation inputs.
#[derive(Error, Debug, Clone)]
pub enum AccrueError {
    /// One or more numeric arguments failed a non-negativity check.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Value out of bounds.
    #[error("{name} value {value} is out of bounds [{min}, {max}]")]
    OutOfBounds {
        /// Name of the parameter that is out of bounds.
        name: String,
        /// The value that was provided.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// Compounding frequency must be at least one period per year.
    #[error("invalid compounding frequency: {value} - must be a positive number of periods per year")]
    InvalidFrequency {
        /// The frequency that was provided.
        value: u32,
    },
}

impl AccrueError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Creates an out of bounds error.
    #[must_use]
    pub fn out_of_bounds(name: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfBounds {
            name: name.into(),
            value,
            min,
            max,
        }
    }
}

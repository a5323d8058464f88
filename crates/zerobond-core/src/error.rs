//! Error types for the zero-coupon pricer.

use thiserror::Error;

use crate::quote::Field;

/// A specialized Result type for pricer operations.
pub type PricerResult<T> = Result<T, PricerError>;

/// Errors that can occur while acquiring inputs or configuring the pricer.
///
/// Pricing itself is total over the reals and never produces an error.
#[derive(Error, Debug)]
pub enum PricerError {
    /// A prompted field could not be parsed as a finite real number.
    #[error("Invalid {field}: '{input}' is not a finite real number")]
    InputParse {
        /// The field being read.
        field: Field,
        /// The offending text, trimmed.
        input: String,
    },

    /// Input closed before the field was supplied.
    #[error("Unexpected end of input while reading {field}")]
    UnexpectedEof {
        /// The field being read.
        field: Field,
    },

    /// Configuration failed to load or validate.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of what's invalid.
        reason: String,
    },

    /// Report serialization failed.
    #[error("Serialization error: {reason}")]
    Serialization {
        /// Description of the failure.
        reason: String,
    },

    /// Console read or write failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PricerError {
    /// Creates an input parse error.
    #[must_use]
    pub fn input_parse(field: Field, input: impl Into<String>) -> Self {
        Self::InputParse {
            field,
            input: input.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns true if this error came from malformed numeric input.
    #[must_use]
    pub fn is_input_parse(&self) -> bool {
        matches!(self, Self::InputParse { .. })
    }
}

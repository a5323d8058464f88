//! CLI error types.

use thiserror::Error;

use zerobond_core::PricerError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be loaded.
    #[error("Failed to load config {path}")]
    ConfigFile {
        /// Path given on the command line.
        path: String,
        /// Underlying failure.
        #[source]
        source: PricerError,
    },

    /// Pricer error.
    #[error(transparent)]
    Pricer(#[from] PricerError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

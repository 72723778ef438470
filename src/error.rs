//! Error types for azimuth-calc

use std::io;

use thiserror::Error;

/// Result type for azimuth-calc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in azimuth-calc operations
///
/// Unparsable user input is not an error: the input layer reports it as
/// `None`. These variants cover solver failures and the I/O around batches
/// and configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV read or write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Structurally invalid batch input
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A NaN or infinite value was handed to the solver
    #[error("Non-finite input: {0}")]
    NonFinite(String),

    /// The solver returned a non-finite result
    #[error("Geodesic solver did not converge: {0}")]
    NonConvergent(String),

    /// Invalid configuration value or file
    #[error("Configuration error: {0}")]
    Config(String),
}

//! Error types for the transport solver

use thiserror::Error;

/// Result type for solver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Solver errors
#[derive(Error, Debug)]
pub enum Error {
    /// Negative, non-finite or otherwise unusable input value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Total supply and total demand are both zero
    #[error("Degenerate problem: total supply and total demand are both zero")]
    DegenerateProblem,

    /// Cost grid shape does not match the supply and demand lengths
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A total does not fit in the numeric type
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Problem or solution (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors the caller can fix by correcting the problem data
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_) | Error::DegenerateProblem | Error::DimensionMismatch(_)
        )
    }
}

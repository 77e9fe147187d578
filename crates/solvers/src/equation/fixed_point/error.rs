use thiserror::Error;

/// Errors that can occur during fixed-point iteration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The initial guess is NaN or infinite.
    #[error("initial guess must be finite, got {x0}")]
    InvalidGuess { x0: f64 },
}

use thiserror::Error;

use crate::equation::BracketError;

/// Errors that can occur during Newton-Raphson solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    /// The derivative evaluated to exactly zero, so the update is undefined.
    #[error("derivative is zero at x = {x} (f(x) = {fx}), Newton-Raphson failed")]
    ZeroDerivative { x: f64, fx: f64 },
}

use thiserror::Error;

use crate::equation::BracketError;

/// Errors that can occur during secant solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    /// `f(x0)` and `f(x1)` are equal, so the secant line is horizontal.
    #[error("division by zero in secant method: f({x0}) = f({x1}) = {fx}")]
    DegenerateSecant { x0: f64, x1: f64, fx: f64 },
}

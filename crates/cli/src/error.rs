use std::io;

use radix_expr::ParseError;
use radix_solvers::equation::{ConfigError, bisection, fixed_point, newton, secant};
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::args::ArgsError;

/// Errors that end a CLI session.
///
/// `main` prints these as `Error: <message>`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Args(#[from] ArgsError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("could not read input: {0}")]
    Readline(#[from] ReadlineError),

    #[error("input ended before {0} was entered")]
    UnexpectedEof(String),

    #[error("could not read {label} from '{input}', expected a number")]
    InvalidNumber { label: String, input: String },

    #[error("invalid formula: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid options: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bisection(#[from] bisection::Error),

    #[error(transparent)]
    FixedPoint(#[from] fixed_point::Error),

    #[error(transparent)]
    Newton(#[from] newton::Error),

    #[error(transparent)]
    Secant(#[from] secant::Error),

    #[error("plotting is not available, rebuild with the `plot` feature")]
    PlotUnavailable,

    #[cfg(feature = "plot")]
    #[error("could not open plot window: {0}")]
    Plot(String),
}

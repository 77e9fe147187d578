use std::{fmt, str::FromStr};

use thiserror::Error;

pub const USAGE: &str = "\
Usage: radix <METHOD> [OPTIONS]

Methods:
  bisection      halve a sign-changing bracket
  fixed-point    iterate x = g(x) from an initial guess
  newton         Newton-Raphson with a symbolic derivative
  secant         secant method seeded with the bracket endpoints

Options:
  --tol <TOL>          convergence tolerance (default 1e-5, fixed-point 1e-2)
  --max-iters <N>      iteration cap (default 100)
  --plot               show the function and iterates in a window
  -h, --help           print this message";

/// Errors that can occur when reading command-line arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing method, run with --help for usage")]
    MissingMethod,

    #[error("unknown method '{0}', expected bisection, fixed-point, newton, or secant")]
    UnknownMethod(String),

    #[error("unexpected argument '{0}'")]
    Unexpected(String),

    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },

    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: &'static str, value: String },
}

/// The root-finding method to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Bisection,
    FixedPoint,
    Newton,
    Secant,
}

impl FromStr for Solver {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bisection" | "bisect" => Ok(Self::Bisection),
            "fixed-point" | "fixed_point" | "fixedpoint" => Ok(Self::FixedPoint),
            "newton" | "newton-raphson" | "newton_raphson" => Ok(Self::Newton),
            "secant" => Ok(Self::Secant),
            _ => Err(ArgsError::UnknownMethod(s.to_owned())),
        }
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bisection => "Bisection Method",
            Self::FixedPoint => "Fixed-Point Iteration",
            Self::Newton => "Newton-Raphson Method",
            Self::Secant => "Secant Method",
        })
    }
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Run(Args),
}

/// Options for one solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub solver: Solver,
    pub tol: Option<f64>,
    pub max_iters: Option<usize>,
    pub plot: bool,
}

impl Command {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing or unknown method, an unknown flag, or
    /// a flag value that does not parse.
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut solver = None;
        let mut tol = None;
        let mut max_iters = None;
        let mut plot = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Self::Help),
                "--plot" => plot = true,
                "--tol" => tol = Some(value(&mut args, "--tol")?),
                "--max-iters" => max_iters = Some(value(&mut args, "--max-iters")?),
                flag if flag.starts_with('-') => {
                    return Err(ArgsError::Unexpected(flag.to_owned()));
                }
                name if solver.is_none() => solver = Some(name.parse()?),
                extra => return Err(ArgsError::Unexpected(extra.to_owned())),
            }
        }

        let solver = solver.ok_or(ArgsError::MissingMethod)?;
        Ok(Self::Run(Args {
            solver,
            tol,
            max_iters,
            plot,
        }))
    }
}

fn value<T: FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<T, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    value
        .parse()
        .map_err(|_| ArgsError::InvalidValue { flag, value })
}

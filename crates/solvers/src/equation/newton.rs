//! Newton-Raphson iteration with an explicit derivative.
//!
//! # Algorithm
//!
//! Starting from the midpoint of a sign-changing bracket, each iteration
//! evaluates `f(x)` and `f'(x)` and takes the step
//! `x_next = x - f(x) / f'(x)`. The run converges when either
//! `|f(x)| < tol` or `|x_next - x| < tol`.
//!
//! The bracket only seeds the first iterate and guards against obviously
//! root-free inputs. Iterates are free to leave it.
//!
//! # Result
//!
//! A converged run reports the iterate `x` that passed either test, not the
//! step taken from it. An exhausted run reports the last computed `x_next`.
//!
//! # Failure
//!
//! A derivative of exactly zero aborts the run with
//! [`Error::ZeroDerivative`]. There is no tolerance on that check.

mod error;

pub use error::Error;

use radix_core::{Function, Observer};

use super::{Action, Bracket, Config, Method, Solution, iterate};

/// Event emitted by the Newton-Raphson solver.
pub type Event<'a> = super::Event<'a, Record>;

/// Values recorded for one Newton-Raphson iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Current iterate.
    pub x: f64,
    /// `f(x)`.
    pub fx: f64,
    /// `f'(x)`.
    pub dfx: f64,
    /// `x - f(x) / f'(x)`.
    pub x_next: f64,
}

impl Record {
    /// Returns the step size `|x_next - x|`.
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.x_next - self.x).abs()
    }
}

/// The Newton-Raphson update rule, borrowing the derivative `f'`.
#[derive(Debug)]
pub struct Newton<'d, D: ?Sized> {
    derivative: &'d D,
    bounds: [f64; 2],
    tol: f64,
}

impl<'d, D: Function + ?Sized> Newton<'d, D> {
    /// Creates a Newton-Raphson method seeded from the midpoint of `bounds`.
    #[must_use]
    pub fn new(derivative: &'d D, bounds: [f64; 2], config: &Config) -> Self {
        Self {
            derivative,
            bounds,
            tol: config.tol(),
        }
    }

    fn converged(&self, record: &Record) -> bool {
        record.fx.abs() < self.tol || record.step() < self.tol
    }
}

impl<F, D> Method<F> for Newton<'_, D>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
{
    type State = f64;
    type Record = Record;
    type Error = Error;

    fn init(&self, f: &F) -> Result<f64, Error> {
        Ok(Bracket::new(f, self.bounds)?.midpoint())
    }

    fn step(&self, f: &F, x: &mut f64) -> Result<Record, Error> {
        let fx = f.call(*x);
        let dfx = self.derivative.call(*x);

        #[allow(clippy::float_cmp)]
        if dfx == 0.0 {
            return Err(Error::ZeroDerivative { x: *x, fx });
        }

        let record = Record {
            x: *x,
            fx,
            dfx,
            x_next: *x - fx / dfx,
        };
        *x = record.x_next;
        Ok(record)
    }

    fn is_converged(&self, record: &Record) -> bool {
        self.converged(record)
    }

    fn estimate(&self, record: &Record) -> f64 {
        if self.converged(record) {
            record.x
        } else {
            record.x_next
        }
    }
}

/// Finds a root of `f` using Newton-Raphson with derivative `df`, starting
/// from the midpoint of `bounds`.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if `bounds` is not a valid sign-changing
/// bracket, or [`Error::ZeroDerivative`] if `df` is exactly zero at an
/// iterate.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    bounds: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<Record>, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    iterate(&Newton::new(df, bounds, config), f, config, observer)
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_unobserved<F, D>(
    f: &F,
    df: &D,
    bounds: [f64; 2],
    config: &Config,
) -> Result<Solution<Record>, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
{
    solve(f, df, bounds, config, ())
}

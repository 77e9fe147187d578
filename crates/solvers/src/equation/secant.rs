//! Secant method seeded with both bracket endpoints.
//!
//! The first two iterates are `x0 = a` and `x1 = b`, in the order given.
//! Each iteration draws the line through `(x0, f(x0))` and `(x1, f(x1))`,
//! takes its zero
//!
//! ```text
//! x2 = x1 - f(x1)·(x1 - x0) / (f(x1) - f(x0))
//! ```
//!
//! and converges once `|f(x2)| < tol`. Otherwise the pair shifts to
//! `(x1, x2)`. The reported root is always the last `x2`.
//!
//! Like Newton-Raphson, iterates may leave the bracket; the sign-change check
//! only rejects inputs that are unlikely to contain a root.

mod error;

pub use error::Error;

use radix_core::{Function, Observer};

use super::{Action, Bracket, Config, Method, Solution, iterate};

/// Event emitted by the secant solver.
pub type Event<'a> = super::Event<'a, Record>;

/// Values recorded for one secant iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub x0: f64,
    pub x1: f64,
    pub f0: f64,
    pub f1: f64,
    /// Zero of the secant line.
    pub x2: f64,
    /// `f(x2)`.
    pub f2: f64,
}

/// The secant update rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Secant {
    bounds: [f64; 2],
    tol: f64,
}

impl Secant {
    /// Creates a secant method seeded with `bounds`.
    #[must_use]
    pub fn new(bounds: [f64; 2], config: &Config) -> Self {
        Self {
            bounds,
            tol: config.tol(),
        }
    }
}

impl<F: Function + ?Sized> Method<F> for Secant {
    type State = [f64; 2];
    type Record = Record;
    type Error = Error;

    fn init(&self, f: &F) -> Result<[f64; 2], Error> {
        let bracket = Bracket::new(f, self.bounds)?;
        Ok([bracket.a(), bracket.b()])
    }

    fn step(&self, f: &F, pair: &mut [f64; 2]) -> Result<Record, Error> {
        let [x0, x1] = *pair;
        let f0 = f.call(x0);
        let f1 = f.call(x1);

        let denominator = f1 - f0;
        #[allow(clippy::float_cmp)]
        if denominator == 0.0 {
            return Err(Error::DegenerateSecant { x0, x1, fx: f1 });
        }

        let x2 = x1 - f1 * (x1 - x0) / denominator;
        let f2 = f.call(x2);

        *pair = [x1, x2];
        Ok(Record {
            x0,
            x1,
            f0,
            f1,
            x2,
            f2,
        })
    }

    fn is_converged(&self, record: &Record) -> bool {
        record.f2.abs() < self.tol
    }

    fn estimate(&self, record: &Record) -> f64 {
        record.x2
    }
}

/// Finds a root of `f` using the secant method seeded with `bounds`.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if `bounds` is not a valid sign-changing
/// bracket, or [`Error::DegenerateSecant`] if two consecutive iterates have
/// exactly equal function values.
pub fn solve<F, Obs>(
    f: &F,
    bounds: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<Record>, Error>
where
    F: Function + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    iterate(&Secant::new(bounds, config), f, config, observer)
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_unobserved<F>(
    f: &F,
    bounds: [f64; 2],
    config: &Config,
) -> Result<Solution<Record>, Error>
where
    F: Function + ?Sized,
{
    solve(f, bounds, config, ())
}

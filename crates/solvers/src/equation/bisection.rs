//! Bisection method on a sign-changing bracket.
//!
//! # Algorithm
//!
//! Each iteration evaluates `f` at the midpoint `m` of the current bracket
//! `[a, b]`. The run converges once `|f(m)| < tol`; otherwise the half that
//! still changes sign becomes the new bracket, so the width halves every step.
//!
//! # Preconditions
//!
//! `f(a)·f(b)` must be strictly negative. A root sitting exactly on an
//! endpoint is rejected like any other bracket without a sign change.
//!
//! # Result
//!
//! The reported root is the last midpoint, whether the run converged or
//! exhausted its iterations.

mod error;

pub use error::Error;

use radix_core::{Function, Observer};

use super::{Action, Bracket, Config, Method, Solution, iterate};

/// Event emitted by the bisection solver.
pub type Event<'a> = super::Event<'a, Record>;

/// Values recorded for one bisection iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Midpoint of the bracket.
    pub midpoint: f64,
    /// First bracket endpoint before the update.
    pub a: f64,
    /// Second bracket endpoint before the update.
    pub b: f64,
    /// `f(a)`.
    pub fa: f64,
    /// `f(b)`.
    pub fb: f64,
    /// `f(midpoint)`.
    pub f_mid: f64,
}

impl Record {
    /// Returns the bracket width at this iteration.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }
}

/// The bisection update rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisection {
    bounds: [f64; 2],
    tol: f64,
}

impl Bisection {
    /// Creates a bisection method over `bounds`.
    #[must_use]
    pub fn new(bounds: [f64; 2], config: &Config) -> Self {
        Self {
            bounds,
            tol: config.tol(),
        }
    }
}

impl<F: Function + ?Sized> Method<F> for Bisection {
    type State = Bracket;
    type Record = Record;
    type Error = Error;

    fn init(&self, f: &F) -> Result<Bracket, Error> {
        Ok(Bracket::new(f, self.bounds)?)
    }

    fn step(&self, f: &F, bracket: &mut Bracket) -> Result<Record, Error> {
        let midpoint = bracket.midpoint();
        let f_mid = f.call(midpoint);

        let record = Record {
            midpoint,
            a: bracket.a(),
            b: bracket.b(),
            fa: bracket.fa(),
            fb: bracket.fb(),
            f_mid,
        };

        bracket.shrink(midpoint, f_mid);
        Ok(record)
    }

    fn is_converged(&self, record: &Record) -> bool {
        record.f_mid.abs() < self.tol
    }

    fn estimate(&self, record: &Record) -> f64 {
        record.midpoint
    }
}

/// Finds a root of `f` in `bounds` using the bisection method.
/// Observers see each iteration's record.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if `bounds` is not a valid sign-changing
/// bracket. No iteration is performed in that case.
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
    iterate(&Bisection::new(bounds, config), f, config, observer)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if `bounds` is not a valid sign-changing
/// bracket.
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

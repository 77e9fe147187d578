//! Fixed-point iteration for `x = g(x)`.
//!
//! The function passed to [`solve`] is the iteration function `g`, not the
//! equation `f`. A root of `f` is found by rewriting `f(x) = 0` as
//! `x = g(x)` for some `g` that contracts near the root.
//!
//! Each iteration computes `x_next = g(x)` and converges once
//! `|x_next - x| < tol`. Divergent sequences are not detected: they run to
//! the iteration cap and end as [`Status::Exhausted`].
//!
//! The reported root is the last computed `g(x)`.
//!
//! [`Status::Exhausted`]: super::Status::Exhausted

mod error;

pub use error::Error;

use radix_core::{Function, Observer};

use super::{Action, Config, Method, Solution, iterate};

/// Event emitted by the fixed-point solver.
pub type Event<'a> = super::Event<'a, Record>;

/// Values recorded for one fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Current iterate.
    pub x: f64,
    /// `g(x)`, the next iterate.
    pub gx: f64,
}

impl Record {
    /// Returns the step size `|g(x) - x|`.
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.gx - self.x).abs()
    }
}

/// The fixed-point update rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPoint {
    x0: f64,
    tol: f64,
}

impl FixedPoint {
    /// Creates a fixed-point method starting from `x0`.
    #[must_use]
    pub fn new(x0: f64, config: &Config) -> Self {
        Self {
            x0,
            tol: config.tol(),
        }
    }
}

impl<G: Function + ?Sized> Method<G> for FixedPoint {
    type State = f64;
    type Record = Record;
    type Error = Error;

    fn init(&self, _g: &G) -> Result<f64, Error> {
        if self.x0.is_finite() {
            Ok(self.x0)
        } else {
            Err(Error::InvalidGuess { x0: self.x0 })
        }
    }

    fn step(&self, g: &G, x: &mut f64) -> Result<Record, Error> {
        let record = Record {
            x: *x,
            gx: g.call(*x),
        };
        *x = record.gx;
        Ok(record)
    }

    fn is_converged(&self, record: &Record) -> bool {
        record.step() < self.tol
    }

    fn estimate(&self, record: &Record) -> f64 {
        record.gx
    }
}

/// Iterates `x = g(x)` from `x0` until successive iterates agree within
/// `config.tol()`.
///
/// # Errors
///
/// Returns [`Error::InvalidGuess`] if `x0` is not finite.
pub fn solve<G, Obs>(
    g: &G,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<Record>, Error>
where
    G: Function + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    iterate(&FixedPoint::new(x0, config), g, config, observer)
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// Returns [`Error::InvalidGuess`] if `x0` is not finite.
pub fn solve_unobserved<G>(g: &G, x0: f64, config: &Config) -> Result<Solution<Record>, Error>
where
    G: Function + ?Sized,
{
    solve(g, x0, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::equation::Status;

    #[test]
    fn finds_dottie_number() {
        let config = Config::new(200, 1e-10).expect("valid config");
        let solution = solve_unobserved(&f64::cos, 1.0, &config).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 0.739_085_133_215_160_6, epsilon = 1e-9);
    }

    #[test]
    fn records_chain_iterates() {
        // g(x) = (x + 2/x) / 2 converges to sqrt(2).
        let g = |x: f64| 0.5 * (x + 2.0 / x);
        let solution = solve_unobserved(&g, 1.0, &Config::fixed_point()).expect("should solve");

        let first = solution.trace[0].record;
        assert_relative_eq!(first.x, 1.0);
        assert_relative_eq!(first.gx, 1.5);

        for pair in solution.trace.iter().collect::<Vec<_>>().windows(2) {
            assert_relative_eq!(pair[1].record.x, pair[0].record.gx);
        }

        let last = solution.trace.last().expect("non-empty trace").record;
        assert_relative_eq!(solution.x, last.gx);
        assert!(last.step() < 1e-2);
    }

    #[test]
    fn converged_run_reports_newest_iterate() {
        let g = |x: f64| (x + 1.0).cbrt();
        let solution =
            solve_unobserved(&g, 1.5, &Config::fixed_point()).expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 3);

        let last = solution.trace.last().expect("non-empty trace").record;
        assert_eq!(solution.x, last.gx);
        assert_eq!(format!("{:.5}", last.x), "1.33086");
        assert_eq!(format!("{:.5}", solution.x), "1.32588");
    }

    #[test]
    fn exact_fixed_point_converges_immediately() {
        let g = |x: f64| 0.5 * x + 1.0;
        let solution = solve_unobserved(&g, 2.0, &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 2.0);
    }

    #[test]
    fn non_contracting_map_does_not_converge() {
        let g = |x: f64| 2.0 * x;
        let config = Config::new(20, 1e-2).expect("valid config");
        let solution = solve_unobserved(&g, 1.0, &config).expect("should run");

        assert_eq!(solution.status, Status::Exhausted);
        assert_eq!(solution.iters, 20);
        assert_relative_eq!(solution.x, 2.0_f64.powi(20));
    }

    #[test]
    fn overflowing_map_never_converges() {
        let g = |x: f64| x * x;
        let config = Config::new(30, 1e-2).expect("valid config");
        let solution = solve_unobserved(&g, 10.0, &config).expect("should run");

        assert_eq!(solution.status, Status::Exhausted);
        assert!(!solution.x.is_finite());
    }

    #[test]
    fn rejects_non_finite_guess() {
        assert!(matches!(
            solve_unobserved(&f64::cos, f64::NAN, &Config::default()),
            Err(Error::InvalidGuess { x0 }) if x0.is_nan()
        ));
        assert_eq!(
            solve_unobserved(&f64::cos, f64::INFINITY, &Config::default()),
            Err(Error::InvalidGuess { x0: f64::INFINITY })
        );
    }

    #[test]
    fn observer_can_stop_iteration() {
        let solution = solve(
            &f64::cos,
            1.0,
            &Config::new(500, 1e-12).expect("valid config"),
            |event: &Event<'_>| (event.iter == 4).then_some(Action::StopEarly),
        )
        .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 4);
    }
}

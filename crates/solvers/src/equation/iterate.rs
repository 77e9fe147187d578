use radix_core::{Function, Observer};

use super::{Action, Config, Event, Solution, Status, Trace};

/// An iterative root-refinement rule.
///
/// A method supplies the parts that differ between algorithms:
///
/// - [`init`](Method::init) checks preconditions and builds the starting state
/// - [`step`](Method::step) computes one record and advances the state
/// - [`is_converged`](Method::is_converged) is the convergence predicate
/// - [`estimate`](Method::estimate) reads the root estimate from a record
///
/// The shared loop in [`iterate`] handles counting, the iteration cap,
/// observers, and the trace.
pub trait Method<F: Function + ?Sized> {
    /// Mutable iteration state, created fresh for each run.
    type State;
    /// Values recorded for each iteration.
    type Record;
    /// Failures that abort the run.
    type Error;

    /// Checks preconditions and returns the initial state.
    ///
    /// # Errors
    ///
    /// Returns an error if the method cannot start from the given inputs.
    fn init(&self, f: &F) -> Result<Self::State, Self::Error>;

    /// Performs one iteration, returning its record.
    ///
    /// # Errors
    ///
    /// Returns an error if the update rule cannot be applied.
    fn step(&self, f: &F, state: &mut Self::State) -> Result<Self::Record, Self::Error>;

    /// Returns true if the record satisfies the convergence predicate.
    fn is_converged(&self, record: &Self::Record) -> bool;

    /// Returns the root estimate to report if the run ends at this record.
    fn estimate(&self, record: &Self::Record) -> f64;
}

/// Runs a method until it converges, is stopped, or hits the iteration cap.
///
/// The observer sees each record before the convergence check, so it can
/// stop a run on any iteration. Exhausting `config.max_iters()` is a normal
/// outcome reported as [`Status::Exhausted`].
///
/// # Errors
///
/// Returns the method's error if `init` or any `step` fails. No partial
/// trace is returned in that case.
pub fn iterate<F, M, Obs>(
    method: &M,
    f: &F,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Record>, M::Error>
where
    F: Function + ?Sized,
    M: Method<F>,
    Obs: for<'a> Observer<Event<'a, M::Record>, Action>,
{
    let mut state = method.init(f)?;
    let mut trace = Trace::new();

    let mut iter = 1;
    loop {
        let record = method.step(f, &mut state)?;
        let x = method.estimate(&record);
        let converged = method.is_converged(&record);

        let action = observer.observe(&Event {
            iter,
            record: &record,
        });
        trace.push(iter, record);

        let status = match action {
            Some(Action::StopEarly) => Some(Status::StoppedByObserver),
            None if converged => Some(Status::Converged),
            None if iter >= config.max_iters() => Some(Status::Exhausted),
            None => None,
        };

        if let Some(status) = status {
            return Ok(Solution {
                status,
                x,
                iters: iter,
                trace,
            });
        }

        iter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Halves the distance to zero each step.
    struct Halving {
        start: f64,
        tol: f64,
    }

    #[derive(Debug, PartialEq)]
    struct NegativeStart;

    impl<F: Function + ?Sized> Method<F> for Halving {
        type State = f64;
        type Record = f64;
        type Error = NegativeStart;

        fn init(&self, _f: &F) -> Result<f64, NegativeStart> {
            if self.start < 0.0 {
                Err(NegativeStart)
            } else {
                Ok(self.start)
            }
        }

        fn step(&self, _f: &F, state: &mut f64) -> Result<f64, NegativeStart> {
            *state *= 0.5;
            Ok(*state)
        }

        fn is_converged(&self, record: &f64) -> bool {
            *record < self.tol
        }

        fn estimate(&self, record: &f64) -> f64 {
            *record
        }
    }

    fn identity(x: f64) -> f64 {
        x
    }

    #[test]
    fn converges_and_records_every_step() {
        let method = Halving {
            start: 1.0,
            tol: 0.1,
        };
        let solution =
            iterate(&method, &identity, &Config::default(), ()).expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 4);
        assert_relative_eq!(solution.x, 0.0625);

        let iters: Vec<usize> = solution.trace.iter().map(|it| it.iter).collect();
        assert_eq!(iters, [1, 2, 3, 4]);
    }

    #[test]
    fn exhausts_at_cap() {
        let method = Halving {
            start: 1.0,
            tol: 1e-300,
        };
        let config = Config::new(5, 1e-5).expect("valid config");
        let solution = iterate(&method, &identity, &config, ()).expect("should run");

        assert_eq!(solution.status, Status::Exhausted);
        assert_eq!(solution.iters, 5);
        assert_eq!(solution.trace.len(), 5);
        assert_relative_eq!(solution.x, 1.0 / 32.0);
    }

    #[test]
    fn init_failure_produces_no_trace() {
        let method = Halving {
            start: -1.0,
            tol: 0.1,
        };
        let result = iterate(&method, &identity, &Config::default(), ());
        assert_eq!(result, Err(NegativeStart));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let method = Halving {
            start: 1.0,
            tol: 1e-300,
        };

        let mut calls = 0usize;
        let observer = |event: &Event<'_, f64>| {
            calls += 1;
            (event.iter >= 3).then_some(Action::StopEarly)
        };

        let solution =
            iterate(&method, &identity, &Config::default(), observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(solution.trace.len(), 3);
        assert_eq!(calls, 3);
    }

    #[test]
    fn observer_sees_records_in_order() {
        let method = Halving {
            start: 8.0,
            tol: 1.5,
        };

        let mut seen = Vec::new();
        let solution = iterate(
            &method,
            &identity,
            &Config::default(),
            |event: &Event<'_, f64>| {
                seen.push((event.iter, *event.record));
                None
            },
        )
        .expect("should converge");

        assert_eq!(seen, [(1, 4.0), (2, 2.0), (3, 1.0)]);
        assert_eq!(solution.status, Status::Converged);
    }
}

use std::{ops::Index, slice};

/// How a solver run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The convergence predicate was met.
    Converged,

    /// Reached the iteration limit without converging.
    Exhausted,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// One entry of a [`Trace`].
#[derive(Debug, Clone, PartialEq)]
pub struct Iteration<R> {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Values computed during this iteration.
    pub record: R,
}

/// The chronological record of one solver run.
///
/// Traces are append-only while the solver runs and read-only afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<R> {
    iterations: Vec<Iteration<R>>,
}

impl<R> Trace<R> {
    pub(crate) fn new() -> Self {
        Self {
            iterations: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, iter: usize, record: R) {
        self.iterations.push(Iteration { iter, record });
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iterations.len()
    }

    /// Returns true if no iteration was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }

    /// Returns the most recent iteration.
    #[must_use]
    pub fn last(&self) -> Option<&Iteration<R>> {
        self.iterations.last()
    }

    /// Iterates over the recorded iterations in order.
    pub fn iter(&self) -> slice::Iter<'_, Iteration<R>> {
        self.iterations.iter()
    }

    /// Iterates over the records alone, in order.
    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.iterations.iter().map(|iteration| &iteration.record)
    }
}

impl<R> Index<usize> for Trace<R> {
    type Output = Iteration<R>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.iterations[index]
    }
}

impl<'a, R> IntoIterator for &'a Trace<R> {
    type Item = &'a Iteration<R>;
    type IntoIter = slice::Iter<'a, Iteration<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The result of a solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<R> {
    /// Final solver status.
    pub status: Status,
    /// Root estimate implied by the last iteration.
    pub x: f64,
    /// Iteration count when the solver finished.
    pub iters: usize,
    /// Every iteration, in order.
    pub trace: Trace<R>,
}

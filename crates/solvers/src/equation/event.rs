/// Iteration event emitted once per solver step.
///
/// `R` is the solver's record type, e.g. [`bisection::Record`].
///
/// [`bisection::Record`]: super::bisection::Record
#[derive(Debug)]
pub struct Event<'a, R> {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Values computed during this iteration.
    pub record: &'a R,
}

/// Control actions an observer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver after the current iteration.
    StopEarly,
}

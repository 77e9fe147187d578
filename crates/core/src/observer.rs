/// A hook called once per solver iteration.
///
/// The solver hands each iteration's event `E` to the observer before it
/// checks for convergence. Returning `Some(action)` asks the solver to act on
/// it (in Radix the only action is stopping early). Returning `None` leaves
/// the run alone.
///
/// The iteration table in the CLI is an observer, as is any closure of the
/// form `|event: &E| -> Option<A>`. Pass `()` to run without one.
pub trait Observer<E, A> {
    /// Inspects one event, optionally requesting an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Ignores every event.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

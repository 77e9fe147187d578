/// A pure real-valued function of one real variable.
///
/// Solvers only ever call [`Function::call`], so anything that maps an `f64`
/// to an `f64` without side effects can be used: parsed expressions, plain
/// closures, or hand-written types.
///
/// Closures implement `Function` automatically.
pub trait Function {
    /// Evaluates the function at `x`.
    fn call(&self, x: f64) -> f64;
}

/// Blanket implementation for closures and function pointers.
impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}

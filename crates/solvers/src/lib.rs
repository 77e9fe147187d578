//! Univariate root-finding solvers for the Radix toolkit.
//!
//! All solvers live in [`equation`] and share one iteration contract: a
//! [`Method`](equation::Method) supplies the precondition check, the update
//! rule, and the convergence predicate, while [`iterate`](equation::iterate)
//! owns the loop, the iteration cap, and the trace.

pub mod equation;

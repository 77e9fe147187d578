//! Solvers for scalar equations, finding `x` such that `f(x) ≈ 0`.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a sign-changing bracket
//! - [`fixed_point`]: iterates `x = g(x)` from an initial guess
//! - [`newton`]: Newton-Raphson using an explicit derivative
//! - [`secant`]: derivative-free, seeded with both bracket endpoints
//!
//! Every solver returns a [`Solution`] holding the root estimate, a
//! terminal [`Status`], and the full [`Trace`] of per-iteration records.
//! Reaching the iteration cap is not an error: the run ends with
//! [`Status::Exhausted`] and the last estimate.

mod bracket;
mod config;
mod event;
mod iterate;
mod solution;

pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError};
pub use event::{Action, Event};
pub use iterate::{Method, iterate};
pub use solution::{Iteration, Solution, Status, Trace};

pub mod bisection;
pub mod fixed_point;
pub mod newton;
pub mod secant;

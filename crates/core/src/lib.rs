//! Core traits for the Radix root-finding toolkit.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! expression evaluators build on:
//!
//! - [`Function`]: a pure mapping from one real number to another
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::Function;
pub use observer::Observer;

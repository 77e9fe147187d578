//! Formula parsing, evaluation, and symbolic differentiation.
//!
//! An [`Expression`] is built from formula text in one free variable `x`:
//!
//! ```
//! use radix_core::Function;
//! use radix_expr::Expression;
//!
//! let f = Expression::parse("x**2 - 4*x + log(x)")?;
//! let df = f.derivative();
//!
//! assert!((f.call(1.0) + 3.0).abs() < 1e-12);
//! assert!((df.call(1.0) + 1.0).abs() < 1e-12);
//! # Ok::<(), radix_expr::ParseError>(())
//! ```
//!
//! # Vocabulary
//!
//! - Operators `+ - * / ^`, with `**` accepted as an alias for `^`
//! - Functions `sin`, `cos`, `tan`, `exp`, `sqrt`, `abs`, and the natural
//!   logarithm spelled either `log` or `ln`
//! - Constants `pi` and `e`

mod derive;
mod error;
mod expr;
mod expression;
mod lexer;
mod parser;

pub use error::ParseError;
pub use expr::{Expr, Func};
pub use expression::Expression;
pub use parser::{MAX_DEPTH, VARIABLE, parse};

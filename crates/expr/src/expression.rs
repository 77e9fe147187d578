use std::{fmt, str::FromStr};

use radix_core::Function;

use crate::{Expr, ParseError, parser};

/// A parsed formula paired with the text it was built from.
///
/// Expressions are immutable once parsed. Evaluating one never fails:
/// out-of-domain inputs follow IEEE-754 and produce NaN or an infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    expr: Expr,
}

impl Expression {
    /// Parses formula text.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is not a valid formula in `x`.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let expr = parser::parse(source)?;
        Ok(Self {
            source: source.trim().to_string(),
            expr,
        })
    }

    /// Returns the symbolic first derivative with respect to `x`.
    ///
    /// The derivative's source text is its canonical printed form.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let expr = self.expr.derivative();
        Self {
            source: expr.to_string(),
            expr,
        }
    }

    /// Returns the formula text as given (trimmed).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the parsed expression tree.
    #[must_use]
    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

impl Function for Expression {
    fn call(&self, x: f64) -> f64 {
        self.expr.eval(x)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

//! Shared fixtures for the cross-crate tests.

use radix_expr::Expression;

/// A formula with a bracket known to contain exactly one root.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    pub formula: &'static str,
    pub bracket: [f64; 2],
    pub root: f64,
}

impl Case {
    /// Parses the formula.
    ///
    /// # Panics
    ///
    /// Panics if the fixture formula does not parse.
    #[must_use]
    pub fn function(&self) -> Expression {
        Expression::parse(self.formula).expect("fixture formulas parse")
    }
}

/// Bracketed formulas used across the solver tests.
pub const CASES: [Case; 6] = [
    Case {
        formula: "x^2 - 2",
        bracket: [1.0, 2.0],
        root: std::f64::consts::SQRT_2,
    },
    Case {
        formula: "exp(x) - 2 - cos(exp(x) - 2)",
        bracket: [0.5, 1.5],
        root: 1.007_623_971_658,
    },
    Case {
        formula: "x**2 - 4*x + 4 - ln(x)",
        bracket: [1.0, 2.0],
        root: 1.412_391_172_024,
    },
    Case {
        formula: "x**2 - 4*x + 4 - log(x)",
        bracket: [3.0, 4.0],
        root: 3.057_103_549_995,
    },
    Case {
        formula: "exp(x) + 2*exp(-x) + 2*cos(x) - 6",
        bracket: [1.0, 2.0],
        root: 1.819_322_963_753,
    },
    Case {
        formula: "ln(x-1) + cos(x-1)",
        bracket: [1.3, 2.0],
        root: 1.397_748_475_959,
    },
];

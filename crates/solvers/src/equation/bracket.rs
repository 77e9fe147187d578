use radix_core::Function;
use thiserror::Error;

/// Errors that can occur when validating a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("bracket contains non-finite value: [{a}, {b}]")]
    NonFinite { a: f64, b: f64 },

    /// Endpoints are equal, giving zero width.
    #[error("bracket has zero width: both endpoints are {value}")]
    ZeroWidth { value: f64 },

    /// `f(a)` and `f(b)` do not have strictly opposite signs.
    #[error(
        "the function must have different signs at the endpoints of the interval: \
         f({a})={fa}, f({b})={fb}"
    )]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },
}

/// An interval `[a, b]` over which `f` changes sign.
///
/// Endpoints keep the order they were given in, so `a > b` is allowed.
/// Function values at both endpoints are cached alongside them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    a: f64,
    b: f64,
    fa: f64,
    fb: f64,
}

impl Bracket {
    /// Evaluates `f` at both endpoints and checks for a strict sign change.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is non-finite, the endpoints are equal,
    /// or `f(a)·f(b)` is not strictly negative (including when it is NaN).
    pub fn new<F>(f: &F, bounds: [f64; 2]) -> Result<Self, BracketError>
    where
        F: Function + ?Sized,
    {
        let [a, b] = bounds;

        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite { a, b });
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::ZeroWidth { value: a });
        }

        let fa = f.call(a);
        let fb = f.call(b);
        if !(fa * fb < 0.0) {
            return Err(BracketError::NoSignChange { a, b, fa, fb });
        }

        Ok(Self { a, b, fa, fb })
    }

    /// Returns the first endpoint.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the second endpoint.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns `f(a)`.
    #[must_use]
    pub fn fa(&self) -> f64 {
        self.fa
    }

    /// Returns `f(b)`.
    #[must_use]
    pub fn fb(&self) -> f64 {
        self.fb
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    /// Returns the absolute bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }

    /// Replaces one endpoint with `x`, keeping the sign change.
    ///
    /// If `f(a)·fx < 0` the root lies between `a` and `x`, so `b` moves;
    /// otherwise `a` moves.
    pub(crate) fn shrink(&mut self, x: f64, fx: f64) {
        if self.fa * fx < 0.0 {
            self.b = x;
            self.fb = fx;
        } else {
            self.a = x;
            self.fa = fx;
        }
    }
}

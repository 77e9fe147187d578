use thiserror::Error;

/// Default iteration cap shared by all solvers.
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Default tolerance for bisection, Newton-Raphson, and secant.
pub const DEFAULT_TOL: f64 = 1e-5;

/// Default tolerance for fixed-point iteration.
///
/// Looser than [`DEFAULT_TOL`] because fixed-point sequences usually
/// converge more slowly.
pub const FIXED_POINT_TOL: f64 = 1e-2;

/// Configuration shared by the equation solvers.
///
/// Each solver applies `tol` to its own convergence predicate and never
/// records more than `max_iters` iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig", into = "RawConfig")
)]
pub struct Config {
    max_iters: usize,
    tol: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    ZeroMaxIters,

    #[error("tol must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            tol: DEFAULT_TOL,
        }
    }
}

impl Config {
    /// Creates a new config with a validated iteration cap and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `tol` is not a finite,
    /// positive number.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::ZeroMaxIters);
        }
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        Ok(Self { max_iters, tol })
    }

    /// Returns the defaults for fixed-point iteration.
    #[must_use]
    pub fn fixed_point() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            tol: FIXED_POINT_TOL,
        }
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }
}

/// Unvalidated wire form of [`Config`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawConfig {
    max_iters: usize,
    tol: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.max_iters, raw.tol)
    }
}

#[cfg(feature = "serde")]
impl From<Config> for RawConfig {
    fn from(config: Config) -> Self {
        Self {
            max_iters: config.max_iters,
            tol: config.tol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_solver_conventions() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 100);
        assert_relative_eq!(config.tol(), 1e-5);

        let config = Config::fixed_point();
        assert_eq!(config.max_iters(), 100);
        assert_relative_eq!(config.tol(), 1e-2);
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(Config::new(0, 1e-6), Err(ConfigError::ZeroMaxIters));
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, -1e-3), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::Tolerance));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_validates() {
        let config: Config =
            serde_json::from_str(r#"{"max_iters": 25, "tol": 1e-7}"#).expect("valid config");
        assert_eq!(config.max_iters(), 25);

        let err = serde_json::from_str::<Config>(r#"{"max_iters": 0, "tol": 1e-7}"#);
        assert!(err.is_err());
    }
}

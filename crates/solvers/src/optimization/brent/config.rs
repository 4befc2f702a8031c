use thiserror::Error;

use valley_core::Scalar;

/// Configuration for the Brent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config<T> {
    tol: T,
}

/// Errors that can occur when validating a Brent solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and non-negative")]
    Tol,
}

impl<T: Scalar> Default for Config<T> {
    fn default() -> Self {
        Self { tol: T::TOL }
    }
}

impl<T: Scalar> Config<T> {
    /// Creates a new config with a validated tolerance.
    ///
    /// `tol` is relative to `|x|`. It also bounds the objective change and
    /// step length that count as converged. A tolerance of zero leaves only
    /// the absolute floor [`Scalar::TOL`] on the interval tests.
    ///
    /// `tol` does not bound the error in `x`. Near a smooth minimum the
    /// objective changes quadratically, so the objective-change test can stop
    /// the search while `x` is still about `√tol · (1 + |x*|)` from the
    /// minimizer `x*`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn new(tol: T) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol < T::zero() {
            return Err(ConfigError::Tol);
        }
        Ok(Self { tol })
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tol(&self) -> T {
        self.tol
    }
}

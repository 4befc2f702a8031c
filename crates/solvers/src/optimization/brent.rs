//! Brent's method for locating a local minimum inside a bracketing triplet.
//!
//! # Algorithm
//!
//! The solver keeps the interval `[a, b]` together with the three best points
//! seen so far. Each iteration fits a parabola through those points and jumps
//! to its vertex when the step is short enough and lands well inside the
//! interval. Otherwise it takes a golden-section step into the larger half.
//! The trial point then replaces one end of the interval, so the interval
//! shrinks every iteration.
//!
//! When a [`Derivative`] is supplied, each trial point `u` also gets a Newton
//! correction `u - f(u) / slope(u)`. The corrected point is kept only if it
//! stays inside the interval, moves less than the current tolerance, and
//! lowers the objective.
//!
//! # Convergence
//!
//! With `tol` from the [`Config`], `tol1 = tol·|x| + TOL` around the best
//! point `x`. The tests run in this order at the start of each iteration:
//!
//! 1. [`Criterion::Midpoint`]: the interval lies within `2·tol1` of `x`
//! 2. [`Criterion::Width`]: the interval is narrower than `tol1 / 10`
//! 3. [`Criterion::ObjectiveChange`]: the best objective moved by less than
//!    `tol` at the last improvement
//!
//! After each evaluation, a trial within `tol` of `x` ends the search with
//! [`Criterion::StepSize`].
//!
//! Running out of iterations is reported as [`Status::MaxIters`] with the best
//! point found, not as an error.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the trial point (and
//! any Newton correction) is evaluated. Observers can return
//! [`Action::StopEarly`] to halt with the best point so far.
//!
//! [`Derivative`]: valley_core::Derivative

mod action;
mod config;
mod error;
mod event;
mod newton;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Criterion, Solution, Status};

use valley_core::{Derivative, Objective, Observer, Scalar};

use crate::optimization::{Maximize, Minimize};

use search::search;

/// Placeholder derivative type for searches without one.
type NoDerivative<T> = fn(T) -> T;

/// Finds a local minimum of the objective inside `[a, b, c]`.
///
/// `a` and `c` are the interval ends in either order and `b` is the starting
/// point strictly between them, typically a bracket from
/// [`refiner`](super::refiner).
///
/// # Errors
///
/// Returns an error if any coordinate is non-finite, the ends coincide, or
/// `b` is not strictly between them.
pub fn minimize<T, F, Obs>(
    objective: &F,
    points: [T; 3],
    config: &Config<T>,
    observer: Obs,
) -> Result<Solution<T>, Error>
where
    T: Scalar,
    F: Objective<T>,
    Obs: Observer<Event<T>, Action>,
{
    search::<T, F, NoDerivative<T>, Minimize, Obs>(objective, None, points, config, observer)
}

/// Finds a local minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the input triple is invalid (see [`minimize`]).
pub fn minimize_unobserved<T, F>(
    objective: &F,
    points: [T; 3],
    config: &Config<T>,
) -> Result<Solution<T>, Error>
where
    T: Scalar,
    F: Objective<T>,
{
    minimize(objective, points, config, ())
}

/// Finds a local minimum using a slope oracle for Newton corrections.
///
/// See the [module docs](self) for when a correction is kept.
///
/// # Errors
///
/// Returns an error if the input triple is invalid (see [`minimize`]).
pub fn minimize_with_derivative<T, F, D, Obs>(
    objective: &F,
    derivative: &D,
    points: [T; 3],
    config: &Config<T>,
    observer: Obs,
) -> Result<Solution<T>, Error>
where
    T: Scalar,
    F: Objective<T>,
    D: Derivative<T>,
    Obs: Observer<Event<T>, Action>,
{
    search::<T, F, D, Minimize, Obs>(objective, Some(derivative), points, config, observer)
}

/// Finds a local maximum of the objective inside `[a, b, c]`.
///
/// Event and solution objectives are reported unchanged, not negated.
///
/// # Errors
///
/// Returns an error if the input triple is invalid (see [`minimize`]).
pub fn maximize<T, F, Obs>(
    objective: &F,
    points: [T; 3],
    config: &Config<T>,
    observer: Obs,
) -> Result<Solution<T>, Error>
where
    T: Scalar,
    F: Objective<T>,
    Obs: Observer<Event<T>, Action>,
{
    search::<T, F, NoDerivative<T>, Maximize, Obs>(objective, None, points, config, observer)
}

/// Finds a local maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the input triple is invalid (see [`minimize`]).
pub fn maximize_unobserved<T, F>(
    objective: &F,
    points: [T; 3],
    config: &Config<T>,
) -> Result<Solution<T>, Error>
where
    T: Scalar,
    F: Objective<T>,
{
    maximize(objective, points, config, ())
}

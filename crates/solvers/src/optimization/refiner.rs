//! Bracket refinement: from an interval and an interior probe to a valid
//! bracketing triplet.
//!
//! # Algorithm
//!
//! The refiner first evaluates both ends of the interval. While an end is
//! lower than the probe, the minimum may lie beyond it, so the interval is
//! pushed outward: the probe moves to that end and the new outer end is placed
//! a golden ratio of the previous width further out.
//!
//! Once the probe is no higher than both ends, a Brent-style search contracts
//! the interval around the best point, alternating parabolic interpolation and
//! golden-section steps, until the interval is within a relative tolerance of
//! the best point. The result is a tight triplet `(a, b, c)` with `f(b)` no
//! greater than either flank.
//!
//! # Outcomes
//!
//! The [`Solution`] carries a [`Status`]:
//!
//! - [`Status::Converged`]: the bracket is valid
//! - [`Status::Flat`]: the search converged but no flank is strictly higher
//!   (the objective is constant over the final interval)
//! - [`Status::MaxIters`]: the iteration cap was hit, for example on an
//!   objective that decreases without bound; the best triplet so far is
//!   returned
//! - [`Status::StoppedByObserver`]: an observer returned [`Action::StopEarly`]
//!
//! # Observer Events
//!
//! Each iteration emits one [`Event`]: [`Event::Expanded`] during outward
//! expansion and [`Event::Evaluated`] during contraction.

mod action;
mod error;
mod event;
mod expand;
mod search;
mod solution;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use valley_core::{Objective, Observer, Scalar};

use search::search;

/// Refines `[a, b, c]` into a bracketing triplet around a local minimum.
///
/// `a` and `c` are the interval ends in either order, `b` an interior probe,
/// and `fb` the objective at `b`, which the refiner trusts and does not
/// re-evaluate.
///
/// # Errors
///
/// Returns an error if any coordinate is non-finite, the ends coincide, or
/// `b` is not strictly between them.
pub fn refine<T, F, Obs>(
    objective: &F,
    points: [T; 3],
    fb: T,
    observer: Obs,
) -> Result<Solution<T>, Error>
where
    T: Scalar,
    F: Objective<T>,
    Obs: Observer<Event<T>, Action>,
{
    search(objective, points, fb, observer)
}

/// Refines `[a, b, c]` without observer support.
///
/// This is a convenience wrapper around [`refine`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the input triple is invalid (see [`refine`]).
pub fn refine_unobserved<T, F>(objective: &F, points: [T; 3], fb: T) -> Result<Solution<T>, Error>
where
    T: Scalar,
    F: Objective<T>,
{
    refine(objective, points, fb, ())
}

//! Solvers for one-dimensional minimization: refining a bracket and then
//! converging on the minimum inside it.
//!
//! An objective is any [`Objective`], most often a closure `|x| ...`. Solvers
//! report each evaluation to an [`Observer`] and return a solution tagged with
//! a status, so running out of iterations is an outcome rather than an error.
//!
//! # Solvers
//!
//! - [`refiner`]: turns an interval and an interior probe into a valid
//!   bracketing triplet, expanding outward when the minimum lies beyond it
//! - [`brent`]: converges on the minimum inside a bracketing triplet using
//!   parabolic interpolation with a golden-section fallback, optionally
//!   corrected by a Newton step from a [`Derivative`]
//!
//! A typical search chains the two:
//!
//! ```
//! use valley_solvers::optimization::{brent, refiner};
//!
//! let f = |x: f64| (x - 5.0).powi(2);
//!
//! let refined = refiner::refine_unobserved(&f, [0.0, 1.0, 2.0], f(1.0)).unwrap();
//! assert!(refined.bracket.is_bracketing());
//!
//! let [a, b, c] = refined.bracket.abscissae();
//! let solution = brent::minimize_unobserved(&f, [a, b, c], &brent::Config::default()).unwrap();
//! assert!((solution.x - 5.0).abs() < 1e-5);
//! ```
//!
//! [`Objective`]: valley_core::Objective
//! [`Derivative`]: valley_core::Derivative
//! [`Observer`]: valley_core::Observer

mod bracket;
mod evaluate;
mod goal;
mod parabola;
mod point;
mod step;
mod tracker;

pub use bracket::{Bracket, BracketError};
pub use goal::{Goal, Maximize, Minimize};
pub use point::Point;
pub use step::Step;

pub mod brent;
pub mod refiner;

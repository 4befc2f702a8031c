//! Core traits and constants for one-dimensional minimization.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Scalar`]: the real type a search runs in, with the numeric constants
//!   the solvers share
//! - [`Objective`]: the function being minimized
//! - [`Derivative`]: an optional slope oracle used for Newton refinement
//! - [`Observer`]: receives solver events and optionally returns control actions

mod objective;
mod observer;
mod scalar;

pub use objective::{Derivative, Objective};
pub use observer::Observer;
pub use scalar::{MAX_ITERATIONS, Scalar};

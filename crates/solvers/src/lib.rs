//! Solvers for locating local minima of one-dimensional functions.
//!
//! See [`optimization`] for the available solvers and how they fit together.

pub mod optimization;

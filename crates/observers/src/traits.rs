//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Example
//!
//! ```rust
//! use valley_core::Observer;
//! use valley_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct Budget {
//!     remaining: usize,
//! }
//!
//! impl<E: HasObjective<f64>, A: CanStopEarly> Observer<E, A> for Budget {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.objective().is_nan() || self.remaining == 0 {
//!             return Some(A::stop_early());
//!         }
//!         self.remaining -= 1;
//!         None
//!     }
//! }
//! ```

use valley_core::Scalar;

use valley_solvers::optimization::{brent, refiner};

/// An event that carries an objective value.
pub trait HasObjective<T> {
    /// Returns the objective of the point evaluated for this event.
    fn objective(&self) -> T;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<T: Scalar> HasObjective<T> for refiner::Event<T> {
    fn objective(&self) -> T {
        self.evaluated().objective
    }
}

impl<T: Scalar> HasObjective<T> for brent::Event<T> {
    fn objective(&self) -> T {
        self.trial.objective
    }
}

impl CanStopEarly for refiner::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for brent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

//! Reusable observers for the Valley minimization solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across both solvers in `valley-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasObjective`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Recorder`] keeps a copy of every event for later inspection
//! - [`StopBelow`] stops a search once the objective falls under a threshold
//!
//! [`Observer`]: valley_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod recorder;
mod stop_below;

pub use recorder::Recorder;
pub use stop_below::StopBelow;

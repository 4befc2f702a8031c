use valley_core::{Observer, Scalar};

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a search as soon as an evaluated objective falls below `threshold`.
///
/// Useful when any point that is good enough will do, such as finding a
/// feasible setting rather than the best one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopBelow<T> {
    threshold: T,
}

impl<T: Scalar> StopBelow<T> {
    /// Creates an observer that stops below `threshold`.
    #[must_use]
    pub fn new(threshold: T) -> Self {
        Self { threshold }
    }

    /// Returns the threshold.
    #[must_use]
    pub fn threshold(&self) -> T {
        self.threshold
    }
}

impl<T, E, A> Observer<E, A> for StopBelow<T>
where
    T: Scalar,
    E: HasObjective<T>,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.objective() < self.threshold).then(A::stop_early)
    }
}

/// Which convergence test ended a Brent search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// The interval shrank to within tolerance around the best point.
    Midpoint,

    /// The interval became narrower than a tenth of the tolerance.
    Width,

    /// The best objective barely changed since the last improvement.
    ObjectiveChange,

    /// The trial point was within tolerance of the best point.
    StepSize,
}

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged by the given test.
    Converged(Criterion),

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Returns `true` if the search converged by any test.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged(_))
    }
}

/// The result of a Brent search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<T> {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the minimizer.
    pub x: T,

    /// Objective value at the reported x.
    pub objective: T,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Number of objective evaluations, including initialization.
    pub evals: usize,
}

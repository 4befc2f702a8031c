use crate::optimization::Bracket;

/// How bracket refinement ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The returned bracket is a valid bracketing triplet.
    Converged,

    /// The search converged, but the objective is equal at all three points.
    ///
    /// Near `x = 0` the contraction tolerance falls to [`Scalar::TINY`], so the
    /// interval can shrink below the objective's resolution. A minimum at the
    /// origin may then end here with a tiny bracket beside it rather than
    /// around it.
    ///
    /// [`Scalar::TINY`]: valley_core::Scalar::TINY
    Flat,

    /// Reached the iteration limit; the bracket is the best found so far and
    /// may not be valid.
    ///
    /// Kinked minima at the origin, such as `|x|`, can spend the whole budget
    /// contracting toward the [`Scalar::TINY`] floor.
    ///
    /// [`Scalar::TINY`]: valley_core::Scalar::TINY
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of bracket refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<T> {
    /// Final status.
    pub status: Status,

    /// The refined triplet, oriented like the input ends.
    pub bracket: Bracket<T>,

    /// Iterations used, counting both expansion and contraction.
    pub iters: usize,

    /// Number of objective evaluations.
    pub evals: usize,
}

use crate::optimization::{Point, Step};

/// Event emitted by the Brent solver once per iteration.
///
/// Objective values are the caller's, even when maximizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<T> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Interval `[a, b]` the trial was chosen in.
    pub interval: [T; 2],

    /// Best point before this trial.
    pub best: Point<T>,

    /// The trial point, after any Newton correction.
    pub trial: Point<T>,

    /// How the trial point was chosen.
    pub step: Step,

    /// Whether a Newton correction replaced the trial point.
    pub newton: bool,
}

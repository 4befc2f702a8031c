use crate::optimization::{Bracket, Point, Step};

/// Events emitted by the bracket refiner, one per iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<T> {
    /// The interval was pushed outward past an end lower than the probe.
    Expanded {
        /// Iteration counter (1-based).
        iter: usize,

        /// The triplet after expansion, in ascending order.
        bracket: Bracket<T>,

        /// The newly evaluated outer end.
        outer: Point<T>,
    },

    /// A trial point was evaluated while contracting the interval.
    Evaluated {
        /// Iteration counter (1-based).
        iter: usize,

        /// Interval `[lo, hi]` the trial was chosen in.
        interval: [T; 2],

        /// Best point before this trial.
        best: Point<T>,

        /// The evaluated trial point.
        trial: Point<T>,

        /// How the trial point was chosen.
        step: Step,
    },
}

impl<T: Copy> Event<T> {
    /// Returns the iteration counter.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Expanded { iter, .. } | Self::Evaluated { iter, .. } => *iter,
        }
    }

    /// Returns the point evaluated in this iteration.
    #[must_use]
    pub fn evaluated(&self) -> Point<T> {
        match self {
            Self::Expanded { outer, .. } => *outer,
            Self::Evaluated { trial, .. } => *trial,
        }
    }
}

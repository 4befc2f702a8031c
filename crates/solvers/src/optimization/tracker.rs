use valley_core::Scalar;

use super::{Bracket, Point, parabola::Parabola};

/// Search state shared by the Brent-style solvers.
///
/// Tracks the interval `[lo, hi]` as evaluated points, the three best points
/// seen (`best`, `second`, `third`, known in the literature as x, w, v), and
/// the last two step lengths.
///
/// Invariants: `lo.x ≤ best.x ≤ hi.x`, and `best` has the lowest score of the
/// three tracked points.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tracker<T> {
    pub(crate) lo: Point<T>,
    pub(crate) hi: Point<T>,
    pub(crate) best: Point<T>,
    pub(crate) second: Point<T>,
    pub(crate) third: Point<T>,

    /// Length of the most recent step (d).
    pub(crate) step: T,

    /// Length of the step before that (e).
    pub(crate) prev_step: T,
}

impl<T: Scalar> Tracker<T> {
    pub(crate) fn new(lo: Point<T>, hi: Point<T>, best: Point<T>) -> Self {
        Self {
            lo,
            hi,
            best,
            second: best,
            third: best,
            step: T::zero(),
            prev_step: T::zero(),
        }
    }

    pub(crate) fn midpoint(&self) -> T {
        T::HALF * (self.lo.x + self.hi.x)
    }

    pub(crate) fn width(&self) -> T {
        self.hi.x - self.lo.x
    }

    pub(crate) fn interval(&self) -> [T; 2] {
        [self.lo.x, self.hi.x]
    }

    pub(crate) fn bracket(&self) -> Bracket<T> {
        Bracket::new(self.lo, self.best, self.hi)
    }

    /// Returns `true` when the interval has shrunk to within `2·tol1` around
    /// the best point.
    pub(crate) fn is_centered(&self, tol1: T) -> bool {
        (self.best.x - self.midpoint()).abs() <= T::TWO * tol1 - T::HALF * self.width()
    }

    pub(crate) fn parabola(&self) -> Parabola<T> {
        Parabola::fit(self.best, self.second, self.third)
    }

    /// Sets up a golden-section step toward the farther interval end.
    pub(crate) fn golden_step(&mut self) {
        let x = self.best.x;
        self.prev_step = if x < self.midpoint() {
            self.hi.x - x
        } else {
            self.lo.x - x
        };
        self.step = T::GOLDEN_SECTION * self.prev_step;
    }

    /// Folds an evaluated trial point into the interval and the ranking.
    ///
    /// Returns `true` if the trial became the new best point.
    pub(crate) fn update(&mut self, trial: Point<T>) -> bool {
        let best = self.best;

        if trial.objective <= best.objective {
            if trial.x >= best.x {
                self.lo = best;
            } else {
                self.hi = best;
            }
            self.third = self.second;
            self.second = best;
            self.best = trial;
            return true;
        }

        if trial.x < best.x {
            self.lo = trial;
        } else {
            self.hi = trial;
        }

        if trial.objective <= self.second.objective || self.second.x == best.x {
            self.third = self.second;
            self.second = trial;
        } else if trial.objective <= self.third.objective
            || self.third.x == best.x
            || self.third.x == self.second.x
        {
            self.third = trial;
        }
        false
    }
}

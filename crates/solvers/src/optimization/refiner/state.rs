use valley_core::Scalar;

use crate::optimization::{Bracket, Point, Step, tracker::Tracker};

use super::expand::Expansion;

/// Contraction state of the bracket refiner.
pub(super) struct State<T> {
    tracker: Tracker<T>,
}

impl<T: Scalar> State<T> {
    pub(super) fn new(expansion: &Expansion<T>) -> Self {
        Self {
            tracker: Tracker::new(expansion.lo, expansion.hi, expansion.probe),
        }
    }

    pub(super) fn best(&self) -> Point<T> {
        self.tracker.best
    }

    pub(super) fn interval(&self) -> [T; 2] {
        self.tracker.interval()
    }

    pub(super) fn bracket(&self) -> Bracket<T> {
        self.tracker.bracket()
    }

    /// Tolerance `tol1` around the current best point.
    pub(super) fn tolerance(&self) -> T {
        T::TOL * self.tracker.best.x.abs() + T::TINY
    }

    pub(super) fn is_converged(&self, tol1: T) -> bool {
        self.tracker.is_centered(tol1)
    }

    /// Chooses the next trial abscissa.
    ///
    /// Steps shorter than `tol1` are lengthened to `tol1` so every trial is
    /// distinguishable from the best point.
    pub(super) fn next_trial(&mut self, tol1: T) -> (T, Step) {
        let tracker = &mut self.tracker;
        let x = tracker.best.x;
        let xm = tracker.midpoint();
        let tol2 = T::TWO * tol1;
        let toward_middle = if x < xm { tol1 } else { -tol1 };

        let mut kind = Step::Golden;
        if tracker.prev_step.abs() > tol1 {
            let parabola = tracker.parabola();
            let prev = tracker.prev_step;
            tracker.prev_step = tracker.step;

            if parabola.is_acceptable(x, tracker.lo.x, tracker.hi.x, prev) {
                let d = parabola.step();
                let u = x + d;
                tracker.step = if u - tracker.lo.x < tol2 || tracker.hi.x - u < tol2 {
                    toward_middle
                } else {
                    d
                };
                kind = Step::Parabolic;
            }
        }
        if kind == Step::Golden {
            tracker.golden_step();
        }

        let d = tracker.step;
        let d = if d.abs() >= tol1 {
            d
        } else if d > T::zero() {
            tol1
        } else if d < T::zero() {
            -tol1
        } else {
            toward_middle
        };
        (x + d, kind)
    }

    pub(super) fn update(&mut self, trial: Point<T>) {
        self.tracker.update(trial);
    }
}

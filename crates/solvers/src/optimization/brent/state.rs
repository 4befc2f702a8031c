use valley_core::Scalar;

use crate::optimization::{Point, Step, tracker::Tracker};

use super::Criterion;

/// Tolerances derived from the configured `tol` around the best point.
#[derive(Debug, Clone, Copy)]
pub(super) struct Tolerances<T> {
    pub(super) tol: T,
    pub(super) tol1: T,
    pub(super) tol2: T,
    pub(super) tol3: T,
}

impl<T: Scalar> Tolerances<T> {
    pub(super) fn around(tol: T, x: T) -> Self {
        let tol1 = tol * x.abs() + T::TOL;
        Self {
            tol,
            tol1,
            tol2: T::TWO * tol1,
            tol3: tol1 / T::TEN,
        }
    }
}

/// Brent search state: the shared tracker plus the objective reference used
/// by the objective-change test.
pub(super) struct State<T> {
    tracker: Tracker<T>,

    /// Best score before the most recent improving move.
    reference: T,
}

impl<T: Scalar> State<T> {
    /// Starts from the probe `best` inside `[lo, hi]`.
    ///
    /// The reference starts at the higher end, so a probe that already sits
    /// at the flanks' level converges on the objective-change test at once.
    pub(super) fn new(lo: Point<T>, hi: Point<T>, best: Point<T>) -> Self {
        Self {
            tracker: Tracker::new(lo, hi, best),
            reference: lo.objective.max(hi.objective),
        }
    }

    pub(super) fn best(&self) -> Point<T> {
        self.tracker.best
    }

    pub(super) fn interval(&self) -> [T; 2] {
        self.tracker.interval()
    }

    /// Runs the convergence tests in order and returns the first that passes.
    pub(super) fn converged(&self, tols: &Tolerances<T>) -> Option<Criterion> {
        if self.tracker.is_centered(tols.tol1) {
            Some(Criterion::Midpoint)
        } else if self.tracker.width() < tols.tol3 {
            Some(Criterion::Width)
        } else if (self.tracker.best.objective - self.reference).abs() < tols.tol {
            Some(Criterion::ObjectiveChange)
        } else {
            None
        }
    }

    /// Chooses the next trial abscissa.
    pub(super) fn next_trial(&mut self, tols: &Tolerances<T>) -> (T, Step) {
        let tracker = &mut self.tracker;
        let x = tracker.best.x;

        if tracker.prev_step.abs() > tols.tol1 {
            let parabola = tracker.parabola();
            let prev = tracker.prev_step;
            tracker.prev_step = tracker.step;

            if parabola.is_acceptable(x, tracker.lo.x, tracker.hi.x, prev) {
                let d = parabola.step();
                let u = x + d;
                if u - tracker.lo.x >= tols.tol2 && tracker.hi.x - u >= tols.tol2 {
                    tracker.step = d;
                    return (u, Step::Parabolic);
                }
            }
        }

        tracker.golden_step();
        (x + tracker.step, Step::Golden)
    }

    pub(super) fn update(&mut self, trial: Point<T>) {
        let previous = self.tracker.best.objective;
        if self.tracker.update(trial) {
            self.reference = previous;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn state(f: impl Fn(f64) -> f64, lo: f64, probe: f64, hi: f64) -> State<f64> {
        State::new(
            Point::new(lo, f(lo)),
            Point::new(hi, f(hi)),
            Point::new(probe, f(probe)),
        )
    }

    #[test]
    fn tolerances_scale_with_x() {
        let tols = Tolerances::around(1e-3, -100.0);
        assert_relative_eq!(tols.tol1, 0.1 + 1e-6);
        assert_relative_eq!(tols.tol2, 2.0 * tols.tol1);
        assert_relative_eq!(tols.tol3, tols.tol1 / 10.0);
    }

    #[test]
    fn first_step_is_golden_toward_farther_end() {
        let mut state = state(|x| (x - 2.0).powi(2), 0.0, 1.0, 5.0);
        let tols = Tolerances::around(1e-4, 1.0);

        let (u, step) = state.next_trial(&tols);

        assert_eq!(step, Step::Golden);
        assert_relative_eq!(u, 1.0 + f64::GOLDEN_SECTION * 4.0);
    }

    #[test]
    fn flat_objective_converges_on_objective_change() {
        let state = state(|_| 3.0, 0.0, 1.0, 2.0);
        let tols = Tolerances::around(1e-6, 1.0);

        assert_eq!(state.converged(&tols), Some(Criterion::ObjectiveChange));
    }

    #[test]
    fn narrow_interval_converges_on_midpoint() {
        let state = state(|x| x * x, -1e-7, 0.0, 1e-7);
        let tols = Tolerances::around(0.0, 0.0);

        assert_eq!(state.converged(&tols), Some(Criterion::Midpoint));
    }

    #[test]
    fn improvement_moves_the_reference() {
        let f = |x: f64| (x - 2.0).powi(2);
        let mut state = state(f, 0.0, 1.0, 5.0);
        assert_relative_eq!(state.reference, 9.0);

        state.update(Point::new(2.5, f(2.5)));
        assert_relative_eq!(state.reference, 1.0);

        // A worse trial leaves it alone.
        state.update(Point::new(4.0, f(4.0)));
        assert_relative_eq!(state.reference, 1.0);
    }
}

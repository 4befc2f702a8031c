use valley_core::{Derivative, Objective, Scalar};

use crate::optimization::{Goal, Point, evaluate::Evaluator};

/// Tries a Newton correction `u - f(u) / slope(u)` of a scored trial point.
///
/// The corrected point is evaluated only if it lies strictly inside
/// `interval` and within `tol1` of the trial, and is returned only if it
/// scores strictly better.
pub(super) fn correct<T, F, D, G>(
    eval: &mut Evaluator<'_, T, F, G>,
    derivative: &D,
    trial: Point<T>,
    interval: [T; 2],
    tol1: T,
) -> Option<Point<T>>
where
    T: Scalar,
    F: Objective<T>,
    D: Derivative<T>,
    G: Goal,
{
    let slope = derivative.slope(trial.x);
    if slope == T::zero() {
        return None;
    }

    let value = eval.report(trial).objective;
    let x = trial.x - value / slope;
    let [lo, hi] = interval;
    if !(lo < x && x < hi) || (x - trial.x).abs() >= tol1 {
        return None;
    }

    let corrected = eval.eval(x);
    (corrected.objective < trial.objective).then_some(corrected)
}

use std::marker::PhantomData;

use valley_core::{Objective, Scalar};

use super::{Goal, Point};

/// Evaluates an objective for a solver and counts the calls.
///
/// Points produced here carry the goal-transformed objective (the score the
/// solver minimizes). [`Evaluator::report`] converts a scored point back to
/// the caller's objective.
pub(crate) struct Evaluator<'a, T, F, G> {
    objective: &'a F,
    evals: usize,
    _marker: PhantomData<(T, G)>,
}

impl<'a, T, F, G> Evaluator<'a, T, F, G>
where
    T: Scalar,
    F: Objective<T>,
    G: Goal,
{
    pub(crate) fn new(objective: &'a F) -> Self {
        Self {
            objective,
            evals: 0,
            _marker: PhantomData,
        }
    }

    /// Evaluates the objective at `x` and returns the scored point.
    pub(crate) fn eval(&mut self, x: T) -> Point<T> {
        self.evals += 1;
        Point::new(x, G::transform(self.objective.value(x)))
    }

    /// Converts a scored point back to the caller's objective.
    pub(crate) fn report(&self, point: Point<T>) -> Point<T> {
        Point::new(point.x, G::transform(point.objective))
    }

    /// Number of objective evaluations so far.
    pub(crate) fn evals(&self) -> usize {
        self.evals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::optimization::{Maximize, Minimize};

    #[test]
    fn counts_every_evaluation() {
        let f = |x: f64| x * x;
        let mut eval = Evaluator::<_, _, Minimize>::new(&f);

        let p = eval.eval(3.0);
        eval.eval(-1.0);

        assert_relative_eq!(p.objective, 9.0);
        assert_eq!(eval.evals(), 2);
    }

    #[test]
    fn maximize_scores_are_negated_and_reported_back() {
        let f = |x: f64| 2.0 * x;
        let mut eval = Evaluator::<_, _, Maximize>::new(&f);

        let scored = eval.eval(4.0);
        assert_relative_eq!(scored.objective, -8.0);

        let reported = eval.report(scored);
        assert_relative_eq!(reported.x, 4.0);
        assert_relative_eq!(reported.objective, 8.0);
    }
}

use valley_core::{Derivative, MAX_ITERATIONS, Objective, Observer, Scalar};

use crate::optimization::{Goal, Point, bracket::validate, evaluate::Evaluator};

use super::{
    Action, Config, Criterion, Error, Event, Solution, Status, newton,
    state::{State, Tolerances},
};

/// Core Brent search, shared by minimize and maximize.
///
/// The goal `G` maps objective values to scores that are always minimized.
/// When `derivative` is present, each trial point gets a Newton correction.
pub(super) fn search<T, F, D, G, Obs>(
    objective: &F,
    derivative: Option<&D>,
    points: [T; 3],
    config: &Config<T>,
    mut observer: Obs,
) -> Result<Solution<T>, Error>
where
    T: Scalar,
    F: Objective<T>,
    D: Derivative<T>,
    G: Goal,
    Obs: Observer<Event<T>, Action>,
{
    let interval = validate(points)?;
    let mut eval = Evaluator::<T, F, G>::new(objective);

    let best = eval.eval(interval.interior);
    let lo = eval.eval(interval.lo);
    let hi = eval.eval(interval.hi);
    let mut state = State::new(lo, hi, best);

    let finish = |best: Point<T>, status: Status, iters: usize, evals: usize| {
        let best = Point::new(best.x, G::transform(best.objective));
        Solution {
            status,
            x: best.x,
            objective: best.objective,
            iters,
            evals,
        }
    };

    for iter in 1..=MAX_ITERATIONS {
        let tols = Tolerances::around(config.tol(), state.best().x);
        if let Some(criterion) = state.converged(&tols) {
            return Ok(finish(
                state.best(),
                Status::Converged(criterion),
                iter - 1,
                eval.evals(),
            ));
        }

        let best = state.best();
        let bounds = state.interval();
        let (x, step) = state.next_trial(&tols);
        let mut trial = eval.eval(x);

        let corrected = derivative
            .and_then(|d| newton::correct(&mut eval, d, trial, bounds, tols.tol1));
        if let Some(point) = corrected {
            trial = point;
        }

        let event = Event {
            iter,
            interval: bounds,
            best: eval.report(best),
            trial: eval.report(trial),
            step,
            newton: corrected.is_some(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            state.update(trial);
            return Ok(finish(
                state.best(),
                Status::StoppedByObserver,
                iter,
                eval.evals(),
            ));
        }

        if (best.x - trial.x).abs() < tols.tol {
            return Ok(finish(
                best,
                Status::Converged(Criterion::StepSize),
                iter,
                eval.evals(),
            ));
        }

        state.update(trial);
    }

    Ok(finish(
        state.best(),
        Status::MaxIters,
        MAX_ITERATIONS,
        eval.evals(),
    ))
}

use valley_core::{MAX_ITERATIONS, Objective, Observer, Scalar};

use crate::optimization::{Bracket, Minimize, Point, bracket::validate, evaluate::Evaluator};

use super::{Action, Error, Event, Solution, Status, expand::Expansion, state::State};

/// Core bracket refinement: outward expansion, then Brent-style contraction.
///
/// Both phases share one iteration budget of [`MAX_ITERATIONS`].
pub(super) fn search<T, F, Obs>(
    objective: &F,
    points: [T; 3],
    fb: T,
    mut observer: Obs,
) -> Result<Solution<T>, Error>
where
    T: Scalar,
    F: Objective<T>,
    Obs: Observer<Event<T>, Action>,
{
    let interval = validate(points)?;
    let mut eval = Evaluator::<T, F, Minimize>::new(objective);

    let lo = eval.eval(interval.lo);
    let hi = eval.eval(interval.hi);
    let mut expansion = Expansion {
        lo,
        probe: Point::new(interval.interior, fb),
        hi,
    };

    let finish = |bracket: Bracket<T>, status: Status, iters: usize, evals: usize| Solution {
        status,
        bracket: Bracket::oriented(bracket.a, bracket.b, bracket.c, interval.descending),
        iters,
        evals,
    };

    let mut iter = 0;
    while let Some(side) = expansion.downhill() {
        if iter == MAX_ITERATIONS {
            return Ok(finish(expansion.bracket(), Status::MaxIters, iter, eval.evals()));
        }
        iter += 1;

        let outer = eval.eval(expansion.next_outer(side));
        expansion.shift(side, outer);

        let event = Event::Expanded {
            iter,
            bracket: expansion.bracket(),
            outer,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(
                expansion.bracket(),
                Status::StoppedByObserver,
                iter,
                eval.evals(),
            ));
        }
    }

    let mut state = State::new(&expansion);
    while iter < MAX_ITERATIONS {
        let tol1 = state.tolerance();
        if state.is_converged(tol1) {
            let bracket = state.bracket();
            let status = if bracket.is_bracketing() {
                Status::Converged
            } else {
                Status::Flat
            };
            return Ok(finish(bracket, status, iter, eval.evals()));
        }
        iter += 1;

        let best = state.best();
        let bounds = state.interval();
        let (x, step) = state.next_trial(tol1);
        let trial = eval.eval(x);

        let event = Event::Evaluated {
            iter,
            interval: bounds,
            best,
            trial,
            step,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(
                state.bracket(),
                Status::StoppedByObserver,
                iter,
                eval.evals(),
            ));
        }

        state.update(trial);
    }

    Ok(finish(state.bracket(), Status::MaxIters, iter, eval.evals()))
}

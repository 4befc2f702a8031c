use std::cell::Cell;

use approx::assert_relative_eq;

use valley_core::{MAX_ITERATIONS, Scalar};

use crate::optimization::{BracketError, Step};

use super::{Action, Error, Event, Status, refine, refine_unobserved};

fn shifted_square(center: f64) -> impl Fn(f64) -> f64 {
    move |x| (x - center).powi(2)
}

#[test]
fn expands_right_and_brackets_minimum() {
    let f = shifted_square(5.0);

    let solution = refine_unobserved(&f, [0.0, 1.0, 2.0], f(1.0)).expect("valid input");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.bracket.is_bracketing());

    let [a, b, c] = solution.bracket.abscissae();
    assert!(a < 5.0 && 5.0 < c, "bracket ({a}, {b}, {c}) misses x = 5");
    assert_relative_eq!(b, 5.0, epsilon = 1e-6);
    assert!(c - a < 1e-4);
}

#[test]
fn expands_left_when_minimum_is_below_the_interval() {
    let f = shifted_square(-5.0);
    let mut expansions = 0;

    let solution = refine(&f, [0.0, 1.0, 2.0], f(1.0), |event: &Event<f64>| {
        if let Event::Expanded { bracket, outer, .. } = event {
            expansions += 1;
            assert_eq!(bracket.a, *outer);
        }
        None
    })
    .expect("valid input");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(expansions, 2);
    assert_relative_eq!(solution.bracket.b.x, -5.0, epsilon = 1e-6);
}

#[test]
fn keeps_descending_orientation() {
    let f = shifted_square(5.0);

    let solution = refine_unobserved(&f, [2.0, 1.0, 0.0], f(1.0)).expect("valid input");

    assert_eq!(solution.status, Status::Converged);
    let [a, b, c] = solution.bracket.abscissae();
    assert!(a > b && b > c);
    assert_relative_eq!(b, 5.0, epsilon = 1e-6);
}

#[test]
fn valid_input_only_contracts() {
    let f = shifted_square(1.0);
    let mut steps = Vec::new();

    let solution = refine(&f, [0.0, 0.5, 4.0], f(0.5), |event: &Event<f64>| {
        match event {
            Event::Expanded { .. } => panic!("no expansion expected"),
            Event::Evaluated { step, .. } => steps.push(*step),
        }
        None
    })
    .expect("valid input");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(steps.first(), Some(&Step::Golden));
    assert!(steps.contains(&Step::Parabolic));
    assert_relative_eq!(solution.bracket.b.x, 1.0, epsilon = 1e-6);
}

#[test]
fn trusts_supplied_probe_value() {
    let calls = Cell::new(0);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        (x - 5.0).powi(2)
    };

    let solution = refine_unobserved(&f, [0.0, 1.0, 2.0], 16.0).expect("valid input");

    assert_eq!(solution.evals, calls.get());
    assert_eq!(solution.evals, solution.iters + 2);
}

#[test]
fn interval_never_grows_while_contracting() {
    let f = |x: f64| x.cos();
    let mut widths = Vec::new();

    let solution = refine(&f, [2.0, 3.0, 4.0], f(3.0), |event: &Event<f64>| {
        if let Event::Evaluated { interval, .. } = event {
            widths.push(interval[1] - interval[0]);
        }
        None
    })
    .expect("valid input");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.bracket.b.x, std::f64::consts::PI, epsilon = 1e-5);
    assert!(widths.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn reports_flat_objective() {
    let f = |_: f64| 7.0;

    let solution = refine_unobserved(&f, [0.0, 1.0, 2.0], 7.0).expect("valid input");

    assert_eq!(solution.status, Status::Flat);
    assert!(!solution.bracket.is_bracketing());
    assert!(solution.bracket.is_ordered());
}

#[test]
fn unbounded_objective_hits_iteration_cap() {
    let f = |x: f64| -x;

    let solution = refine_unobserved(&f, [0.0, 1.0, 2.0], -1.0).expect("valid input");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, MAX_ITERATIONS);
    assert_eq!(solution.evals, MAX_ITERATIONS + 2);
    assert!(solution.bracket.c.x > 1e30);
}

#[test]
fn minimum_at_origin_contracts_past_objective_resolution() {
    let solution = refine_unobserved(&f64::cosh, [-1.0, 0.3, 2.0], 0.3_f64.cosh()).expect("valid input");

    assert_eq!(solution.status, Status::Flat);
    assert!(solution.bracket.b.x.abs() < 1e-8);

    let kink = |x: f64| x.abs();
    let solution = refine_unobserved(&kink, [-1.0, 0.3, 1.0], 0.3).expect("valid input");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, MAX_ITERATIONS);
}

#[test]
fn observer_can_stop_early() {
    let f = shifted_square(5.0);

    let solution = refine(&f, [0.0, 1.0, 2.0], f(1.0), |event: &Event<f64>| {
        (event.iter() == 2).then_some(Action::StopEarly)
    })
    .expect("valid input");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.evals, 4);

    let first = 2.0 + f64::GOLDEN_RATIO * 2.0;
    let second = first + f64::GOLDEN_RATIO * (first - 1.0);
    assert_relative_eq!(solution.bracket.b.x, first);
    assert_relative_eq!(solution.bracket.c.x, second);
}

#[test]
fn rejects_invalid_input() {
    let f = shifted_square(0.0);

    assert_eq!(
        refine_unobserved(&f, [1.0, 1.0, 1.0], 1.0),
        Err(Error::Bracket(BracketError::ZeroWidth { value: 1.0 }))
    );
    assert!(matches!(
        refine_unobserved(&f, [0.0, 3.0, 2.0], 9.0),
        Err(Error::Bracket(BracketError::InteriorOutside { .. }))
    ));
    assert!(matches!(
        refine_unobserved(&f, [0.0, 1.0, f64::INFINITY], 1.0),
        Err(Error::Bracket(BracketError::NonFinite { .. }))
    ));
}

#[test]
fn refines_in_single_precision() {
    let f = |x: f32| (x - 5.0) * (x - 5.0);

    let solution = refine_unobserved(&f, [0.0_f32, 1.0, 2.0], f(1.0)).expect("valid input");

    assert_eq!(solution.status, Status::Converged);
    let [a, _, c] = solution.bracket.abscissae();
    assert!(a < 5.0 && 5.0 < c);
    assert_relative_eq!(solution.bracket.b.x, 5.0, epsilon = 1e-5);
}

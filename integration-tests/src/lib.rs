//! Shared fixtures for the cross-crate tests in `tests/`.

use std::cell::Cell;

use valley_core::Objective;

/// Wraps an objective and counts how often it is evaluated.
pub struct Counted<F> {
    f: F,
    calls: Cell<usize>,
}

impl<F> Counted<F> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<F: Fn(f64) -> f64> Objective<f64> for Counted<F> {
    fn value(&self, x: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        (self.f)(x)
    }
}

/// A smooth unimodal test function with a known minimizer.
pub struct Case {
    pub name: &'static str,
    pub f: fn(f64) -> f64,
    pub bracket: [f64; 3],
    pub minimizer: f64,
}

/// Smooth unimodal functions on valid brackets.
pub fn smooth_cases() -> Vec<Case> {
    vec![
        Case {
            name: "exp(x) - 2x",
            f: |x| x.exp() - 2.0 * x,
            bracket: [-1.0, 0.0, 3.0],
            minimizer: std::f64::consts::LN_2,
        },
        Case {
            name: "3(x + 1.5)² - 4",
            f: |x| 3.0 * (x + 1.5).powi(2) - 4.0,
            bracket: [-4.0, -2.0, 1.0],
            minimizer: -1.5,
        },
        Case {
            name: "cosh(x - 0.3)",
            f: |x| (x - 0.3).cosh(),
            bracket: [-2.0, 0.0, 2.0],
            minimizer: 0.3,
        },
        Case {
            name: "(x - 1)⁴ + (x - 1)²",
            f: |x| (x - 1.0).powi(4) + (x - 1.0).powi(2),
            bracket: [0.0, 0.5, 3.0],
            minimizer: 1.0,
        },
        Case {
            name: "x - ln(x)",
            f: |x| x - x.ln(),
            bracket: [0.2, 0.5, 4.0],
            minimizer: 1.0,
        },
        Case {
            name: "x + 1/x",
            f: |x| x + 1.0 / x,
            bracket: [0.1, 2.0, 10.0],
            minimizer: 1.0,
        },
    ]
}

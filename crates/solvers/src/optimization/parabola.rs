use valley_core::Scalar;

use super::Point;

/// Step from the best point to the vertex of the parabola through three points.
///
/// Stored as `p / q` with `q ≥ 0` so acceptance tests can compare without
/// dividing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Parabola<T> {
    pub(crate) p: T,
    pub(crate) q: T,
}

impl<T: Scalar> Parabola<T> {
    /// Fits a parabola through `x` (best), `w`, and `v`.
    pub(crate) fn fit(x: Point<T>, w: Point<T>, v: Point<T>) -> Self {
        let r = (x.x - w.x) * (x.objective - v.objective);
        let q = (x.x - v.x) * (x.objective - w.objective);
        let p = (x.x - v.x) * q - (x.x - w.x) * r;
        let q = T::TWO * (q - r);

        if q > T::zero() {
            Self { p: -p, q }
        } else {
            Self { p, q: -q }
        }
    }

    /// Returns `true` when the step is shorter than half of `prev_step` and
    /// lands strictly inside `(lo, hi)`.
    pub(crate) fn is_acceptable(&self, x: T, lo: T, hi: T, prev_step: T) -> bool {
        self.p.abs() < (T::HALF * self.q * prev_step).abs()
            && self.p > self.q * (lo - x)
            && self.p < self.q * (hi - x)
    }

    /// Returns the step length `p / q`.
    pub(crate) fn step(&self) -> T {
        self.p / self.q.max(T::TINY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn on(f: impl Fn(f64) -> f64, x: f64) -> Point<f64> {
        Point::new(x, f(x))
    }

    #[test]
    fn lands_on_vertex_of_exact_quadratic() {
        let f = |x: f64| (x - 2.0).powi(2);
        let parabola = Parabola::fit(on(f, 1.0), on(f, 3.0), on(f, 0.0));

        assert!(parabola.q >= 0.0);
        assert_relative_eq!(1.0 + parabola.step(), 2.0);
    }

    #[test]
    fn vertex_is_independent_of_point_order() {
        let f = |x: f64| 3.0 * (x + 1.5).powi(2) - 4.0;
        let parabola = Parabola::fit(on(f, -1.0), on(f, -3.0), on(f, 0.5));

        assert_relative_eq!(-1.0 + parabola.step(), -1.5, epsilon = 1e-12);
    }

    #[test]
    fn collinear_points_are_never_acceptable() {
        let f = |x: f64| 2.0 * x;
        let parabola = Parabola::fit(on(f, 1.0), on(f, 2.0), on(f, 3.0));

        assert_relative_eq!(parabola.q, 0.0);
        assert!(!parabola.is_acceptable(1.0, 0.0, 4.0, 10.0));
    }

    #[test]
    fn steps_that_are_too_long_or_leave_the_interval_are_rejected() {
        let f = |x: f64| (x - 2.0).powi(2);
        let parabola = Parabola::fit(on(f, 1.0), on(f, 3.0), on(f, 0.0));

        // Step of 1.0 needs a previous step longer than 2.0.
        assert!(parabola.is_acceptable(1.0, 0.0, 5.0, 2.5));
        assert!(!parabola.is_acceptable(1.0, 0.0, 5.0, 1.5));

        // Vertex at 2.0 must lie strictly inside the interval.
        assert!(!parabola.is_acceptable(1.0, 0.0, 2.0, 10.0));
    }
}

use std::fmt::{Debug, Display};

use num_traits::Float;

/// Hard cap on iterations for every solver in this workspace.
pub const MAX_ITERATIONS: usize = 100;

/// A real scalar type that solvers can search over.
///
/// All arithmetic in a search happens in one `Scalar` type. Implementations
/// are provided for `f32` and `f64`.
///
/// The associated constants are fixed by the algorithms and are not
/// configurable per search.
pub trait Scalar: Float + Debug + Display {
    /// The golden ratio φ = (1 + √5) / 2.
    const GOLDEN_RATIO: Self;

    /// The golden section 1/φ ≈ 0.618, the fraction of the remaining distance
    /// covered by a golden step.
    const GOLDEN_SECTION: Self;

    /// Division guard for degenerate parabolic fits. Not a tolerance.
    const TINY: Self;

    /// Additive floor on relative tolerances, so they do not collapse to zero
    /// near `x = 0`.
    const TOL: Self;

    /// One half, for midpoints and half-steps.
    const HALF: Self;

    /// Two, for doubled tolerances and parabola denominators.
    const TWO: Self;

    /// Ten, the divisor of the step-size tolerance.
    const TEN: Self;

    /// Widens the value to `f64`, for error reporting.
    fn as_f64(self) -> f64;
}

impl Scalar for f64 {
    const GOLDEN_RATIO: Self = 1.618_033_988_749_895;
    const GOLDEN_SECTION: Self = 0.618_033_988_749_894_9;
    const TINY: Self = 1.0e-20;
    const TOL: Self = 1.0e-6;
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;
    const TEN: Self = 10.0;

    fn as_f64(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    const GOLDEN_RATIO: Self = 1.618_034;
    const GOLDEN_SECTION: Self = 0.618_034;
    const TINY: Self = 1.0e-20;
    const TOL: Self = 1.0e-6;
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;
    const TEN: Self = 10.0;

    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

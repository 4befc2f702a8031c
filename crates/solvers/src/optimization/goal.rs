use valley_core::Scalar;

/// Defines the optimization direction.
///
/// Solvers always minimize internally and compare objective values through
/// [`Goal::transform`], which lets one implementation serve both directions.
/// The transform is its own inverse, so applying it again recovers the
/// original objective for reporting.
pub trait Goal {
    /// Transforms an objective value for internal minimization.
    ///
    /// - [`Minimize`]: returns the value unchanged
    /// - [`Maximize`]: negates the value
    fn transform<T: Scalar>(value: T) -> T;
}

/// Minimize the objective function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimize;

impl Goal for Minimize {
    #[inline]
    fn transform<T: Scalar>(value: T) -> T {
        value
    }
}

/// Maximize the objective function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Maximize;

impl Goal for Maximize {
    #[inline]
    fn transform<T: Scalar>(value: T) -> T {
        -value
    }
}

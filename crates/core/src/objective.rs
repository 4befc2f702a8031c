/// A real-valued function of one real variable.
///
/// Solvers call the objective many times per search, so it must be
/// deterministic: the same `x` always yields the same value. Any state the
/// function needs is captured by the implementing type (typically a closure).
///
/// Returning NaN or an infinity is outside the contract. Such values flow into
/// the solver's comparisons unchecked and may end a search early with a
/// meaningless result.
pub trait Objective<T> {
    /// Evaluates the objective at `x`.
    fn value(&self, x: T) -> T;
}

impl<T, F> Objective<T> for F
where
    F: Fn(T) -> T,
{
    fn value(&self, x: T) -> T {
        self(x)
    }
}

/// A local slope oracle paired with an [`Objective`].
///
/// The minimizer treats the returned value as the first derivative of the
/// objective at `x` and uses it for a Newton-style correction of each trial
/// point, `u - f(u) / slope(u)`. The correction is only kept when it stays
/// inside the current interval, moves less than the current tolerance, and
/// lowers the objective, so an inaccurate slope costs evaluations but never
/// worsens the result.
///
/// A slope of exactly zero disables the correction for that trial point.
pub trait Derivative<T> {
    /// Evaluates the slope at `x`.
    fn slope(&self, x: T) -> T;
}

impl<T, F> Derivative<T> for F
where
    F: Fn(T) -> T,
{
    fn slope(&self, x: T) -> T {
        self(x)
    }
}

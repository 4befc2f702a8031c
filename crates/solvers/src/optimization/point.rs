/// A point with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    /// The x value.
    pub x: T,

    /// The objective value at x.
    pub objective: T,
}

impl<T> Point<T> {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: T, objective: T) -> Self {
        Self { x, objective }
    }
}

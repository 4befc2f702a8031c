use thiserror::Error;

use valley_core::Scalar;

use super::Point;

/// Errors from validating the abscissae of an input bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    #[error("bracket contains non-finite value: {value}")]
    NonFinite { value: f64 },

    #[error("bracket has zero width: both ends are {value}")]
    ZeroWidth { value: f64 },

    #[error("interior point {b} is not strictly between {a} and {c}")]
    InteriorOutside { a: f64, b: f64, c: f64 },
}

/// Three abscissae with their objective values.
///
/// A bracket is *valid* (see [`Bracket::is_bracketing`]) when `b` lies
/// strictly between `a` and `c`, in either orientation, and `f(b)` is no
/// greater than both flanks and strictly less than at least one of them. A
/// continuous function then has a local minimum between `a` and `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T> {
    pub a: Point<T>,
    pub b: Point<T>,
    pub c: Point<T>,
}

impl<T: Scalar> Bracket<T> {
    /// Creates a bracket from three points.
    #[must_use]
    pub fn new(a: Point<T>, b: Point<T>, c: Point<T>) -> Self {
        Self { a, b, c }
    }

    /// Returns `[a, b, c]` as abscissae, ready to pass to a solver.
    #[must_use]
    pub fn abscissae(&self) -> [T; 3] {
        [self.a.x, self.b.x, self.c.x]
    }

    /// Returns the distance between the outer points.
    #[must_use]
    pub fn width(&self) -> T {
        (self.c.x - self.a.x).abs()
    }

    /// Returns `true` if `b` lies strictly between `a` and `c`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        let (a, b, c) = (self.a.x, self.b.x, self.c.x);
        (a < b && b < c) || (c < b && b < a)
    }

    /// Returns `true` if this is a valid bracketing triplet.
    #[must_use]
    pub fn is_bracketing(&self) -> bool {
        let (fa, fb, fc) = (self.a.objective, self.b.objective, self.c.objective);
        self.is_ordered() && fb <= fa && fb <= fc && (fb < fa || fb < fc)
    }

    /// Builds a bracket from an ascending triple, flipping it back when the
    /// caller supplied the ends in descending order.
    pub(crate) fn oriented(lo: Point<T>, mid: Point<T>, hi: Point<T>, descending: bool) -> Self {
        if descending {
            Self::new(hi, mid, lo)
        } else {
            Self::new(lo, mid, hi)
        }
    }
}

/// A validated input triple in ascending order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Interval<T> {
    pub(crate) lo: T,
    pub(crate) interior: T,
    pub(crate) hi: T,

    /// Whether the caller listed the ends as `[hi, interior, lo]`.
    pub(crate) descending: bool,
}

/// Validates `[a, b, c]`: finite, non-degenerate, and `b` strictly inside.
pub(crate) fn validate<T: Scalar>(points: [T; 3]) -> Result<Interval<T>, BracketError> {
    if let Some(value) = points.iter().find(|v| !v.is_finite()) {
        return Err(BracketError::NonFinite {
            value: value.as_f64(),
        });
    }

    let [a, b, c] = points;
    if a == c {
        return Err(BracketError::ZeroWidth { value: a.as_f64() });
    }

    let descending = c < a;
    let (lo, hi) = if descending { (c, a) } else { (a, c) };
    if !(lo < b && b < hi) {
        return Err(BracketError::InteriorOutside {
            a: a.as_f64(),
            b: b.as_f64(),
            c: c.as_f64(),
        });
    }

    Ok(Interval {
        lo,
        interior: b,
        hi,
        descending,
    })
}

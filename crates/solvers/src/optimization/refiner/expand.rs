use valley_core::Scalar;

use crate::optimization::{Bracket, Point};

/// Direction of an outward expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Side {
    Left,
    Right,
}

/// Ascending triple `lo < probe < hi` during outward expansion.
#[derive(Debug, Clone, Copy)]
pub(super) struct Expansion<T> {
    pub(super) lo: Point<T>,
    pub(super) probe: Point<T>,
    pub(super) hi: Point<T>,
}

impl<T: Scalar> Expansion<T> {
    /// Returns the side the objective falls toward, or `None` once the probe
    /// is no higher than both ends.
    ///
    /// Ties between the ends favor expanding right.
    pub(super) fn downhill(&self) -> Option<Side> {
        let (flo, fp, fhi) = (self.lo.objective, self.probe.objective, self.hi.objective);
        if fhi < fp && fhi <= flo {
            Some(Side::Right)
        } else if flo < fp {
            Some(Side::Left)
        } else {
            None
        }
    }

    /// Returns where the new outer end goes when expanding toward `side`.
    pub(super) fn next_outer(&self, side: Side) -> T {
        let span = self.hi.x - self.lo.x;
        match side {
            Side::Right => self.hi.x + T::GOLDEN_RATIO * span,
            Side::Left => self.lo.x - T::GOLDEN_RATIO * span,
        }
    }

    /// Moves the probe onto the lower end and installs `outer` beyond it.
    pub(super) fn shift(&mut self, side: Side, outer: Point<T>) {
        match side {
            Side::Right => {
                self.lo = self.probe;
                self.probe = self.hi;
                self.hi = outer;
            }
            Side::Left => {
                self.hi = self.probe;
                self.probe = self.lo;
                self.lo = outer;
            }
        }
    }

    pub(super) fn bracket(&self) -> Bracket<T> {
        Bracket::new(self.lo, self.probe, self.hi)
    }
}

/// How a solver chose its trial point for an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Jump toward the vertex of the parabola through the three best points.
    Parabolic,

    /// Move a golden section of the way toward the farther interval end.
    Golden,
}

/// Actions an observer can take during bracket refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and return the current triplet.
    StopEarly,
}

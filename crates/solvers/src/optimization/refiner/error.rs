use thiserror::Error;

use crate::optimization::BracketError;

/// Errors that can occur during bracket refinement.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    Bracket(#[from] BracketError),
}

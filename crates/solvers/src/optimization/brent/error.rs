use thiserror::Error;

use crate::optimization::BracketError;

/// Errors that can occur when starting a Brent search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    Bracket(#[from] BracketError),
}

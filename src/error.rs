use thiserror::Error;

/// Errors reported by the checked cursor helpers
///
/// Plain `Cursor::next` never produces this: exhaustion there is `None`.
/// Only callers that demand a fixed number of elements see it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The cursor ran out before the requested number of steps completed
    #[error("cursor exhausted after {advanced} of {requested} requested elements")]
    Exhausted { advanced: usize, requested: usize },
}

impl SequenceError {
    /// Number of elements that were successfully consumed before exhaustion
    pub fn advanced(&self) -> usize {
        match self {
            SequenceError::Exhausted { advanced, .. } => *advanced,
        }
    }
}

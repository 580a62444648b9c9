//! Submission result types
//!
//! Defines the outcome of one validation attempt.

use crate::error::ValidationError;

/// Outcome of one submit event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Every character was allowed; the submission goes ahead
    Proceed,
    /// The submission was cancelled and the error region updated
    Blocked(ValidationError),
}

impl SubmissionOutcome {
    pub fn is_proceed(&self) -> bool {
        matches!(self, SubmissionOutcome::Proceed)
    }
}

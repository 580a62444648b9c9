//! Search form validator
//!
//! Gates submission of the search form on the must-have ingredients rule.
//! Other form fields are deliberately left unvalidated.

use log::{debug, warn};

use super::capabilities::{MessageSink, ValueSource};
use super::event::SubmitEvent;
use super::results::SubmissionOutcome;
use crate::validation::validate_must_have;

/// Validator bound to one page for the page's lifetime.
pub struct SearchFormValidator<S, K> {
    source: S,
    sink: K,
}

impl<S: ValueSource, K: MessageSink> SearchFormValidator<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }

    /// Handles a submit event.
    ///
    /// On a disallowed character the event is cancelled and the error region
    /// receives the fixed message. A passing value leaves both untouched.
    pub fn on_submit(&mut self, event: &mut SubmitEvent) -> SubmissionOutcome {
        let value = self.source.current_value();

        match validate_must_have(&value) {
            Ok(()) => {
                debug!("Form {} passed must-have validation", event.form_id());
                SubmissionOutcome::Proceed
            }
            Err(e) => {
                warn!("Blocked submission of form {}: {}", event.form_id(), e);
                event.prevent_default();
                self.sink.show_message(e.user_message());
                SubmissionOutcome::Blocked(e)
            }
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Swap in the field value for the next submission.
    pub fn replace_source(&mut self, source: S) {
        self.source = source;
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }
}

impl<S, K: Default> SearchFormValidator<S, K> {
    /// Clear the error region, as loading a new page does.
    pub fn reset_region(&mut self) {
        self.sink = K::default();
    }
}

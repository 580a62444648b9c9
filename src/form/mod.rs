//! Search form submission gate
//!
//! Binds the must-have rule to a page through two narrow capabilities: a
//! value source for the field and a message sink for the error region.

pub mod capabilities;
pub mod event;
pub mod results;
pub mod validator;

pub use capabilities::{MessageSink, ValueSource};
pub use event::SubmitEvent;
pub use results::SubmissionOutcome;
pub use validator::SearchFormValidator;

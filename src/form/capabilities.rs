//! Page capabilities
//!
//! The two operations the validator needs from a page.

/// Reads the current value of the validated field.
pub trait ValueSource {
    fn current_value(&self) -> String;
}

/// Displays a message in the error region, replacing what was there.
pub trait MessageSink {
    fn show_message(&mut self, message: &str);
}

impl ValueSource for String {
    fn current_value(&self) -> String {
        self.clone()
    }
}

impl ValueSource for &str {
    fn current_value(&self) -> String {
        (*self).to_string()
    }
}

/// Plain in-memory error region.
impl MessageSink for Option<String> {
    fn show_message(&mut self, message: &str) {
        *self = Some(message.to_string());
    }
}

impl<T: MessageSink + ?Sized> MessageSink for &mut T {
    fn show_message(&mut self, message: &str) {
        (**self).show_message(message);
    }
}

//! Terminal error region

use crate::form::MessageSink;

/// Error display element of the terminal page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalErrorRegion {
    text: Option<String>,
}

impl TerminalErrorRegion {
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Render the region as a line tagged with its element id.
    pub fn render(&self, element_id: &str) -> Option<String> {
        self.text
            .as_ref()
            .map(|text| format!("[{}] {}\n", element_id, text))
    }
}

impl MessageSink for TerminalErrorRegion {
    fn show_message(&mut self, message: &str) {
        self.text = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_region_renders_nothing() {
        assert_eq!(TerminalErrorRegion::default().render("error_display"), None);
    }

    #[test]
    fn test_message_overwrites() {
        let mut region = TerminalErrorRegion::default();
        region.show_message("first");
        region.show_message("second");

        assert_eq!(region.text(), Some("second"));
        assert_eq!(
            region.render("error_display").as_deref(),
            Some("[error_display] second\n")
        );
    }
}

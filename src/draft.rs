//! Draft Input State
//!
//! Unsubmitted text held by the add-item input.

/// Key that commits the draft
pub const CONFIRM_KEY: &str = "Enter";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
}

impl Draft {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Take the field content verbatim (no trimming or validation)
    pub fn change(&mut self, value: String) {
        self.text = value;
    }

    /// Handle a key-down on the field.
    ///
    /// On `Enter` the draft is cleared and the value from the event is
    /// returned for submission. Other keys leave everything as is.
    pub fn key_down(&mut self, key: &str, field_value: String) -> Option<String> {
        if key != CONFIRM_KEY {
            return None;
        }
        self.text.clear();
        Some(field_value)
    }
}

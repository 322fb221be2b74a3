//! Draft input

/// Holds the text the user is composing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputController {
    draft: String,
}

impl InputController {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn is_blank(&self) -> bool {
        self.draft.trim().is_empty()
    }

    /// Clear the draft, returning what it held.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.draft)
    }
}

/// Enter submits; Shift+Enter is left for a newline.
pub fn submits_on_enter(shift_held: bool) -> bool {
    !shift_held
}

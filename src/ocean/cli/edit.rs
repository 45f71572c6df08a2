//! Inline-edit draft.
//!
//! The draft is local to the presentation layer. It never touches the shared
//! record until [`EditDraft::commit`] says there is something to write.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The draft was blank; the previous title stays.
    Reverted,
    /// The draft matches the current title; nothing to write.
    Unchanged,
    /// Write this title.
    Changed(String),
}

#[derive(Debug, Clone)]
pub struct EditDraft {
    current: String,
    draft: String,
}

impl EditDraft {
    /// Starts editing with the draft set to the current title.
    pub fn new(current: &str) -> Self {
        Self {
            current: current.to_string(),
            draft: current.to_string(),
        }
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Abandons the edit and restores the draft to the current title.
    pub fn cancel(&mut self) {
        self.draft = self.current.clone();
    }

    pub fn commit(&mut self) -> EditOutcome {
        let value = self.draft.trim();
        if value.is_empty() {
            self.cancel();
            return EditOutcome::Reverted;
        }
        if value == self.current {
            return EditOutcome::Unchanged;
        }
        EditOutcome::Changed(value.to_string())
    }
}

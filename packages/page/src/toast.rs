use crate::Lang;

pub const COPIED_COLOR: &str = "#10b981";

/// Text that goes to the clipboard when a contact field is clicked.
pub fn copy_payload(text: &str) -> &str {
    text.trim()
}

/// The short "copied" flash on a contact field.
///
/// Holds what the field showed before so it can be put back verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyFeedback {
    original: String,
    message: &'static str,
}

impl CopyFeedback {
    pub fn new(original: impl Into<String>, lang: Lang) -> Self {
        Self {
            original: original.into(),
            message: lang.copied_message(),
        }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn original(&self) -> &str {
        &self.original
    }
}

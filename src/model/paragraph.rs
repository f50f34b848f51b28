//! Paragraph model.

/// A body paragraph of a document.
///
/// Holds the text of every run in document order. Tabs and line breaks that
/// Word stores as separate elements are folded in as `\t` and `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Concatenated run text
    pub text: String,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph holding `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Append run text.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Text of the paragraph.
    pub fn plain_text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Paragraph {
    fn from(text: &str) -> Self {
        Paragraph::with_text(text)
    }
}

impl From<String> for Paragraph {
    fn from(text: String) -> Self {
        Paragraph::with_text(text)
    }
}

//! Rendering options configuration.

/// Options for the text and Markdown outline renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces of indentation per heading level
    pub indent_width: usize,

    /// Character for Markdown list markers
    pub list_marker: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            list_marker: '-',
        }
    }
}

impl RenderOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indentation per level (capped at 8 spaces).
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent_width = width.min(8);
        self
    }

    /// Set the Markdown list marker (`-`, `*` or `+`).
    pub fn with_list_marker(mut self, marker: char) -> Self {
        if matches!(marker, '-' | '*' | '+') {
            self.list_marker = marker;
        }
        self
    }

    pub(crate) fn indent(&self, depth: usize) -> String {
        " ".repeat(self.indent_width * depth)
    }
}

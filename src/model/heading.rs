//! Heading levels and classified headings.

/// Depth of a numbered heading: "1", "1.1" or "1.1.1".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Get the numeric level (1-3).
    pub fn level(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "H{}", self.level())
    }
}

/// A paragraph recognized as a numbered heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Depth of the numeric prefix
    pub level: HeadingLevel,
    /// Text following the numeric prefix and its whitespace
    pub label: String,
}

impl Heading {
    /// Create a heading.
    pub fn new(level: HeadingLevel, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level() {
        assert_eq!(HeadingLevel::H1.level(), 1);
        assert_eq!(HeadingLevel::H2.level(), 2);
        assert_eq!(HeadingLevel::H3.to_string(), "H3");
    }

    #[test]
    fn test_level_ordering() {
        assert!(HeadingLevel::H1 < HeadingLevel::H2);
        assert!(HeadingLevel::H2 < HeadingLevel::H3);
    }
}

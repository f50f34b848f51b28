//! Numbered heading detection and outline assembly.
//!
//! A paragraph is a heading when its trimmed text consists of a dotted
//! numeric prefix, whitespace and a label, and nothing else:
//!
//! - `1 Introduction` is level 1
//! - `1.1 Background` is level 2
//! - `1.1.1 History` is level 3
//!
//! Headings are attached to the most recent heading one level up. A heading
//! whose parent has not been seen yet (an orphan) is dropped.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::model::{Heading, HeadingLevel, HeadingTree, Paragraph};

static H1_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\s+(.+)$").unwrap());
static H2_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\s+(.+)$").unwrap());
static H3_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+\s+(.+)$").unwrap());

/// Configuration for heading extraction.
///
/// Built with [`ExtractOptions::new`] and the `with_*` methods, which keep
/// the depth limit within 1-3.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    max_depth: u8,
    carry_over_subsection: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_depth: 3,
            carry_over_subsection: false,
        }
    }
}

impl ExtractOptions {
    /// Create extraction options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deepest heading level to collect.
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth.clamp(1, 3);
        self
    }

    /// Keep the current level-2 heading when a new level-1 heading starts.
    ///
    /// When set, a level-3 heading that directly follows a new level-1
    /// heading is filed under the level-2 label of the previous chapter,
    /// recreated beneath the new level-1 heading.
    pub fn with_carry_over_subsection(mut self, carry_over: bool) -> Self {
        self.carry_over_subsection = carry_over;
        self
    }

    /// Deepest heading level collected (1-3).
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Whether the level-2 context survives a new level-1 heading.
    pub fn carry_over_subsection(&self) -> bool {
        self.carry_over_subsection
    }
}

/// Classify already-trimmed paragraph text as a numbered heading.
///
/// The three patterns cannot match the same text, so the order in which they
/// are tried only matters for speed.
pub fn classify(text: &str) -> Option<Heading> {
    let patterns: [(&Regex, HeadingLevel); 3] = [
        (&*H1_PATTERN, HeadingLevel::H1),
        (&*H2_PATTERN, HeadingLevel::H2),
        (&*H3_PATTERN, HeadingLevel::H3),
    ];

    patterns.into_iter().find_map(|(pattern, level)| {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|label| Heading::new(level, label.as_str()))
    })
}

/// Builds a [`HeadingTree`] from paragraph text in one pass.
///
/// The extractor holds only configuration. The "current level-1/level-2"
/// context lives inside each [`extract`](Self::extract) call, so one
/// extractor can serve independent documents concurrently.
#[derive(Debug, Clone, Default)]
pub struct HeadingExtractor {
    options: ExtractOptions,
}

impl HeadingExtractor {
    /// Create an extractor.
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Classify `text`, ignoring levels deeper than the configured limit.
    fn classify(&self, text: &str) -> Option<Heading> {
        classify(text).filter(|h| h.level.level() <= self.options.max_depth())
    }

    /// Extract the heading tree from paragraph texts in document order.
    pub fn extract<I, S>(&self, paragraphs: I) -> HeadingTree
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = HeadingTree::new();
        let mut current_h1: Option<String> = None;
        let mut current_h2: Option<String> = None;

        for (index, paragraph) in paragraphs.into_iter().enumerate() {
            let text = paragraph.as_ref().trim();
            if text.is_empty() {
                continue;
            }

            let Some(heading) = self.classify(text) else {
                continue;
            };
            trace!(index, level = %heading.level, label = %heading.label, "heading");

            match heading.level {
                HeadingLevel::H1 => {
                    tree.root_mut().insert(heading.label.as_str());
                    if !self.options.carry_over_subsection() {
                        current_h2 = None;
                    }
                    current_h1 = Some(heading.label);
                }
                HeadingLevel::H2 => match current_h1.as_deref() {
                    Some(h1) => {
                        tree.root_mut()
                            .get_or_insert(h1)
                            .insert(heading.label.as_str());
                        current_h2 = Some(heading.label);
                    }
                    None => {
                        debug!(index, label = %heading.label, "dropping level-2 heading before any level-1 heading");
                    }
                },
                HeadingLevel::H3 => match (current_h1.as_deref(), current_h2.as_deref()) {
                    (Some(h1), Some(h2)) => {
                        tree.root_mut()
                            .get_or_insert(h1)
                            .get_or_insert(h2)
                            .insert(heading.label);
                    }
                    _ => {
                        debug!(index, label = %heading.label, "dropping level-3 heading without a level-2 parent");
                    }
                },
            }
        }

        debug!(
            chapters = tree.len(),
            headings = tree.heading_count(),
            "assembled heading tree"
        );
        tree
    }

    /// Extract the heading tree from parsed paragraphs.
    pub fn extract_paragraphs(&self, paragraphs: &[Paragraph]) -> HeadingTree {
        self.extract(paragraphs.iter().map(Paragraph::plain_text))
    }
}

/// Extract the heading tree with default options.
///
/// # Example
///
/// ```
/// use headtree::extract_headings;
///
/// let tree = extract_headings(["1 Introduction", "1.1 Background", "1.1.1 History"]);
/// let json = serde_json::to_string(&tree).unwrap();
/// assert_eq!(json, r#"{"Introduction":{"Background":{"History":{}}}}"#);
/// ```
pub fn extract_headings<I, S>(paragraphs: I) -> HeadingTree
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    HeadingExtractor::default().extract(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_value(tree: &HeadingTree) -> serde_json::Value {
        serde_json::to_value(tree).unwrap()
    }

    #[test]
    fn test_classify_levels() {
        assert_eq!(
            classify("1 Introduction"),
            Some(Heading::new(HeadingLevel::H1, "Introduction"))
        );
        assert_eq!(
            classify("12.3 Background"),
            Some(Heading::new(HeadingLevel::H2, "Background"))
        );
        assert_eq!(
            classify("1.2.10 History"),
            Some(Heading::new(HeadingLevel::H3, "History"))
        );
    }

    #[test]
    fn test_classify_rejects_non_headings() {
        assert_eq!(classify("Introduction"), None);
        assert_eq!(classify("1Introduction"), None);
        assert_eq!(classify("1."), None);
        assert_eq!(classify("1. Introduction"), None);
        assert_eq!(classify("1.1.1.1 Too deep"), None);
        assert_eq!(classify("I Roman"), None);
        assert_eq!(classify("A.1 Lettered"), None);
        assert_eq!(classify("See 1 Introduction"), None);
    }

    #[test]
    fn test_classify_label_is_rest_of_line() {
        let heading = classify("2   Results 2.1 and 3.4.5").unwrap();
        assert_eq!(heading.level, HeadingLevel::H1);
        assert_eq!(heading.label, "Results 2.1 and 3.4.5");

        let heading = classify("1.1\tTabbed").unwrap();
        assert_eq!(heading.label, "Tabbed");
    }

    #[test]
    fn test_classify_requires_single_line() {
        assert_eq!(classify("1 Title\nbody text"), None);
    }

    #[test]
    fn test_no_headings_yields_empty_tree() {
        let tree = extract_headings(["Lorem ipsum", "", "dolor sit amet"]);
        assert!(tree.is_empty());
        assert_eq!(to_value(&tree), json!({}));

        let tree = extract_headings(Vec::<String>::new());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_three_levels() {
        let tree = extract_headings(["1 Introduction", "1.1 Background", "1.1.1 History"]);
        assert_eq!(
            to_value(&tree),
            json!({"Introduction": {"Background": {"History": {}}}})
        );
    }

    #[test]
    fn test_orphan_level2_is_dropped() {
        let tree = extract_headings(["1.1 Orphan"]);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_level3_without_level2_is_dropped() {
        let tree = extract_headings(["1 A", "1.1.1 B"]);
        assert_eq!(to_value(&tree), json!({"A": {}}));
    }

    #[test]
    fn test_repeated_level1_resets_children() {
        let tree = extract_headings(["1 Intro", "1.1 Old", "2 Body", "3 Intro"]);
        assert_eq!(to_value(&tree), json!({"Intro": {}, "Body": {}}));
        assert_eq!(tree.root().labels(), vec!["Intro", "Body"]);
    }

    #[test]
    fn test_blank_paragraphs_are_ignored() {
        let tree = extract_headings(["1 A", "", "   ", "\t", "1.1 B", " \n ", "1.1.1 C"]);
        assert_eq!(to_value(&tree), json!({"A": {"B": {"C": {}}}}));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let tree = extract_headings(["  1 A  ", "\t1.1 B\n"]);
        assert_eq!(to_value(&tree), json!({"A": {"B": {}}}));
    }

    #[test]
    fn test_non_ascii_labels() {
        let tree = extract_headings(["1 引言", "1.1 研究背景", "1.1.1 国内现状"]);
        assert!(tree.path(&["引言", "研究背景", "国内现状"]).is_some());
    }

    #[test]
    fn test_body_text_between_headings() {
        let tree = extract_headings([
            "1 Introduction",
            "This chapter introduces the topic.",
            "1.1 Background",
            "Some background.",
            "1.2 Scope",
            "2 Method",
            "2.1 Design",
            "2.1.1 Sampling",
            "2.1.2 Analysis",
        ]);
        assert_eq!(
            to_value(&tree),
            json!({
                "Introduction": {"Background": {}, "Scope": {}},
                "Method": {"Design": {"Sampling": {}, "Analysis": {}}}
            })
        );
        assert_eq!(tree.heading_count(), 7);
    }

    #[test]
    fn test_level2_context_resets_on_new_level1() {
        let tree = extract_headings(["1 A", "1.1 B", "2 C", "2.1.1 D"]);
        assert_eq!(to_value(&tree), json!({"A": {"B": {}}, "C": {}}));
    }

    #[test]
    fn test_carry_over_subsection() {
        let extractor =
            HeadingExtractor::new(ExtractOptions::new().with_carry_over_subsection(true));
        let tree = extractor.extract(["1 A", "1.1 B", "2 C", "2.1.1 D"]);
        assert_eq!(
            to_value(&tree),
            json!({"A": {"B": {}}, "C": {"B": {"D": {}}}})
        );
    }

    #[test]
    fn test_max_depth() {
        let input = ["1 A", "1.1 B", "1.1.1 C"];

        let extractor = HeadingExtractor::new(ExtractOptions::new().with_max_depth(2));
        assert_eq!(to_value(&extractor.extract(input)), json!({"A": {"B": {}}}));

        let extractor = HeadingExtractor::new(ExtractOptions::new().with_max_depth(1));
        assert_eq!(to_value(&extractor.extract(input)), json!({"A": {}}));
    }

    #[test]
    fn test_max_depth_is_clamped() {
        assert_eq!(ExtractOptions::new().with_max_depth(0).max_depth(), 1);
        assert_eq!(ExtractOptions::new().with_max_depth(9).max_depth(), 3);
    }

    #[test]
    fn test_zero_depth_still_collects_chapters() {
        let options = ExtractOptions::new().with_max_depth(0);
        let tree = HeadingExtractor::new(options).extract(["1 A", "1.1 B"]);
        assert_eq!(to_value(&tree), json!({"A": {}}));
    }

    #[test]
    fn test_extract_paragraphs() {
        let mut heading = Paragraph::with_text("1.1");
        heading.push_str(" Split across runs");
        let paragraphs = vec![Paragraph::from("1 Chapter"), heading];

        let tree = HeadingExtractor::default().extract_paragraphs(&paragraphs);
        assert_eq!(
            to_value(&tree),
            json!({"Chapter": {"Split across runs": {}}})
        );
    }
}

//! JSON renderer implementation.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Error, Result};
use crate::model::HeadingTree;

/// Indentation used for pretty-printed output.
const PRETTY_INDENT: &[u8] = b"    ";

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 4-space indentation
    #[default]
    Pretty,
}

/// Convert a heading tree to JSON.
///
/// Keys keep document order and non-ASCII labels are written as-is.
pub fn to_json(tree: &HeadingTree, format: JsonFormat) -> Result<String> {
    match format {
        JsonFormat::Compact => Ok(serde_json::to_string(tree)?),
        JsonFormat::Pretty => {
            let mut out = Vec::new();
            let formatter = PrettyFormatter::with_indent(PRETTY_INDENT);
            let mut serializer = Serializer::with_formatter(&mut out, formatter);
            tree.serialize(&mut serializer)?;
            String::from_utf8(out).map_err(|e| Error::Render(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract_headings;

    #[test]
    fn test_to_json_pretty() {
        let tree = extract_headings(["1 Introduction", "1.1 Background", "1.1.1 History"]);
        let json = to_json(&tree, JsonFormat::Pretty).unwrap();
        let expected = r#"{
    "Introduction": {
        "Background": {
            "History": {}
        }
    }
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_to_json_compact() {
        let tree = extract_headings(["1 A", "1.1 B", "2 C"]);
        let json = to_json(&tree, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert_eq!(json, r#"{"A":{"B":{}},"C":{}}"#);
    }

    #[test]
    fn test_empty_tree() {
        let tree = HeadingTree::new();
        assert_eq!(to_json(&tree, JsonFormat::Pretty).unwrap(), "{}");
        assert_eq!(to_json(&tree, JsonFormat::Compact).unwrap(), "{}");
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let tree = extract_headings(["1 引言", "1.1 背景"]);
        let json = to_json(&tree, JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"引言":{"背景":{}}}"#);
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_labels_are_escaped_as_json() {
        let tree = extract_headings([r#"1 Say "hi" \ bye"#]);
        let json = to_json(&tree, JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"Say \"hi\" \\ bye":{}}"#);
    }
}

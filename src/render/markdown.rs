//! Markdown outline renderer.

use crate::error::Result;
use crate::model::{HeadingNode, HeadingTree};

use super::options::RenderOptions;

/// Convert a heading tree to a nested Markdown list.
pub fn to_markdown(tree: &HeadingTree, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();
    render_node(tree.root(), 0, options, &mut output);
    Ok(output.trim_end().to_string())
}

fn render_node(node: &HeadingNode, depth: usize, options: &RenderOptions, output: &mut String) {
    for (label, child) in node.iter() {
        output.push_str(&options.indent(depth));
        output.push(options.list_marker);
        output.push(' ');
        output.push_str(&escape_markdown(label));
        output.push('\n');
        render_node(child, depth + 1, options, output);
    }
}

/// Escape characters that would change how a list item renders.
///
/// A label that starts like a block (`#`, `+`, `-`, `1.`, `1)`) would turn
/// the item into a heading or a nested list, so the marker is escaped too.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 1);
    if text.starts_with(['#', '+', '-']) {
        result.push('\\');
    }
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    for (i, c) in text.char_indices() {
        let ordered_marker = digits > 0 && i == digits && matches!(c, '.' | ')');
        if ordered_marker || matches!(c, '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '|') {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

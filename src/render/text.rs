//! Plain text outline renderer.

use crate::error::Result;
use crate::model::{HeadingNode, HeadingTree};

use super::options::RenderOptions;

/// Convert a heading tree to an indented plain text outline.
///
/// One heading per line; each level is indented by
/// [`RenderOptions::indent_width`] spaces.
pub fn to_text(tree: &HeadingTree, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();
    render_node(tree.root(), 0, options, &mut output);
    Ok(output.trim_end().to_string())
}

fn render_node(node: &HeadingNode, depth: usize, options: &RenderOptions, output: &mut String) {
    for (label, child) in node.iter() {
        output.push_str(&options.indent(depth));
        output.push_str(label);
        output.push('\n');
        render_node(child, depth + 1, options, output);
    }
}

//! # headtree
//!
//! Extract the numbered heading outline ("1", "1.1", "1.1.1") of a Word
//! document as a nested, ordered mapping.
//!
//! ## Quick Start
//!
//! ```no_run
//! use headtree::{extract_file, render};
//!
//! let tree = extract_file("report.docx")?;
//! println!("{}", render::to_json(&tree, render::JsonFormat::Pretty)?);
//! # Ok::<(), headtree::Error>(())
//! ```
//!
//! ## Working with plain text
//!
//! The extractor does not care where paragraphs come from:
//!
//! ```
//! use headtree::extract_headings;
//!
//! let tree = extract_headings(["1 引言", "1.1 研究背景", "正文", "1.1.1 国内现状"]);
//! assert!(tree.path(&["引言", "研究背景", "国内现状"]).is_some());
//! ```
//!
//! ## Options
//!
//! ```no_run
//! use headtree::{extract_file_with_options, ExtractOptions};
//!
//! let options = ExtractOptions::new().with_max_depth(2);
//! let tree = extract_file_with_options("report.docx", &options)?;
//! # Ok::<(), headtree::Error>(())
//! ```

pub mod container;
pub mod detect;
pub mod docx;
pub mod error;
pub mod headings;
pub mod model;
pub mod render;

#[cfg(test)]
mod test_support;

// Re-exports
pub use container::OoxmlContainer;
pub use detect::{detect_format_from_bytes, detect_format_from_path, FormatType};
pub use error::{Error, Result};
pub use headings::{classify, extract_headings, ExtractOptions, HeadingExtractor};
pub use model::{Heading, HeadingLevel, HeadingNode, HeadingTree, Paragraph};

use std::path::Path;

use tracing::debug;

/// Load the body paragraphs of a Word document.
///
/// Spreadsheets and presentations are rejected with
/// [`Error::UnsupportedFormat`].
pub fn load_paragraphs(path: impl AsRef<Path>) -> Result<Vec<Paragraph>> {
    let path = path.as_ref();
    let format = detect_format_from_path(path)?;
    debug!(path = %path.display(), %format, "detected document format");
    ensure_docx(format)?;

    docx::DocxParser::open(path)?.paragraphs()
}

/// Load the body paragraphs of a Word document held in memory.
pub fn load_paragraphs_from_bytes(data: &[u8]) -> Result<Vec<Paragraph>> {
    let format = detect_format_from_bytes(data)?;
    ensure_docx(format)?;

    docx::DocxParser::from_bytes(data.to_vec())?.paragraphs()
}

fn ensure_docx(format: FormatType) -> Result<()> {
    if format.has_headings() {
        Ok(())
    } else {
        Err(Error::UnsupportedFormat(format.name().to_string()))
    }
}

/// Extract the heading tree of a Word document.
///
/// # Example
///
/// ```no_run
/// use headtree::extract_file;
///
/// let tree = extract_file("report.docx")?;
/// println!("Chapters: {}", tree.len());
/// # Ok::<(), headtree::Error>(())
/// ```
pub fn extract_file(path: impl AsRef<Path>) -> Result<HeadingTree> {
    extract_file_with_options(path, &ExtractOptions::default())
}

/// Extract the heading tree of a Word document with options.
pub fn extract_file_with_options(
    path: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<HeadingTree> {
    let paragraphs = load_paragraphs(path)?;
    Ok(HeadingExtractor::new(options.clone()).extract_paragraphs(&paragraphs))
}

/// Extract the heading tree of a Word document held in memory.
pub fn extract_bytes(data: &[u8]) -> Result<HeadingTree> {
    extract_bytes_with_options(data, &ExtractOptions::default())
}

/// Extract the heading tree of an in-memory Word document with options.
pub fn extract_bytes_with_options(data: &[u8], options: &ExtractOptions) -> Result<HeadingTree> {
    let paragraphs = load_paragraphs_from_bytes(data)?;
    Ok(HeadingExtractor::new(options.clone()).extract_paragraphs(&paragraphs))
}

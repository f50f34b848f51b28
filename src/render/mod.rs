//! Output rendering for heading trees.
//!
//! This module provides renderers for converting a [`HeadingTree`] to
//! JSON, an indented plain text outline, or a nested Markdown list.
//!
//! # Example
//!
//! ```no_run
//! use headtree::{extract_file, render::*};
//!
//! let tree = extract_file("report.docx")?;
//!
//! // Render to JSON
//! let json = to_json(&tree, JsonFormat::Pretty)?;
//!
//! // Render to plain text
//! let text = to_text(&tree, &RenderOptions::default())?;
//!
//! // Render to Markdown
//! let md = to_markdown(&tree, &RenderOptions::default())?;
//! # Ok::<(), headtree::Error>(())
//! ```
//!
//! [`HeadingTree`]: crate::model::HeadingTree

mod json;
mod markdown;
mod options;
mod text;

pub use json::{to_json, JsonFormat};
pub use markdown::to_markdown;
pub use options::RenderOptions;
pub use text::to_text;

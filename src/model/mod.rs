//! Data model shared by the parser, the heading extractor and the renderers.
//!
//! Parsers turn document XML into [`Paragraph`]s, the extractor classifies
//! them into [`Heading`]s and assembles a [`HeadingTree`].

mod heading;
mod paragraph;
mod tree;

pub use heading::*;
pub use paragraph::*;
pub use tree::*;

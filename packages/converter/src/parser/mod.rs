//! Structural parser for Korean statute text.
//!
//! Consumes the ordered lines of one document and builds the nested
//! part/chapter/section/article tree, with paragraphs, items and sub-items
//! inside each article.

mod engine;
mod finalize;
pub mod tree;

pub use engine::{parse_structure, StructureParser};
pub use finalize::finalize_article;

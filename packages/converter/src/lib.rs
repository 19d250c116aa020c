//! LexVis Converter - Convert Korean statute documents into structured trees.
//!
//! This crate reads statutes exported as `.docx` files, classifies each
//! paragraph line by its structural marker (편, 장, 절, 조, ①, 1., 가.) and
//! builds a nested content tree together with header metadata.
//!
//! # Example
//!
//! ```
//! use lexvis_converter::converter::convert_lines;
//!
//! let lines = [
//!     "[시행 2020. 9. 1.] [법률 제1234호, 2020. 3. 1., 일부개정]",
//!     "제1장 총칙",
//!     "제1조(목적) 이 법은 국민의 안전을 목적으로 한다.",
//!     "①이 법은 모든 국민에게 적용한다.",
//! ];
//! let record = convert_lines(&lines, "안전법.docx", 15);
//!
//! assert_eq!(record.name, "안전법");
//! assert_eq!(record.promulgation_date, "20200301");
//! assert_eq!(record.article_count(), 1);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, runtime settings and helpers
//! - [`types`]: Content tree and record types
//! - [`error`]: Error types and Result alias
//! - [`hierarchy`]: Line classification patterns per structural level
//! - [`parser`]: Stateful tree builder and article finalization
//! - [`metadata`]: Header metadata extraction
//! - [`xml`]: WordprocessingML helpers
//! - [`docx`]: Reading `.docx` files into lines
//! - [`converter`]: Per-document pipeline and batch driver
//! - [`output`]: JSON/YAML output generation
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod converter;
pub mod docx;
pub mod error;
pub mod hierarchy;
pub mod metadata;
pub mod output;
pub mod parser;
pub mod types;
pub mod xml;

// Re-export main functions
pub use converter::{convert_directory, convert_document, convert_lines, BatchReport};

// Re-export commonly used items
pub use error::{ConverterError, Result};
pub use metadata::extract_metadata;
pub use parser::{parse_structure, StructureParser};
pub use types::{ContentNode, DocumentMetadata, DocumentRecord};

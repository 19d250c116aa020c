//! Error types for the converter.
//!
//! Only the plumbing around the parser can fail: opening a source document,
//! walking the input directory and writing the batch output. The structural
//! parser and the metadata extractor are total and never return errors.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// A source document could not be opened or decoded.
    #[error("Failed to open document {}: {source}", .path.display())]
    DocumentOpen {
        path: PathBuf,
        #[source]
        source: Box<ConverterError>,
    },

    /// The document container lacks a required part.
    #[error("Missing part '{part}' in {}", .path.display())]
    MissingPart { path: PathBuf, part: String },

    /// Input directory does not exist or is not a directory.
    #[error("Invalid input directory: {0}")]
    InvalidInputDir(String),

    /// Unsupported output format name.
    #[error("Unsupported output format: '{0}'. Expected 'json' or 'yaml'")]
    InvalidFormat(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP container error.
    #[error("ZIP archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl ConverterError {
    /// Wrap a lower-level failure as a per-document open error.
    #[must_use]
    pub fn document_open(path: impl Into<PathBuf>, source: ConverterError) -> Self {
        Self::DocumentOpen {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConverterError>;

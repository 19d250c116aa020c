//! Per-document pipeline and directory batch driver.

use std::path::{Path, PathBuf};

use crate::config::{document_id, document_name, validate_input_dir, DOCUMENT_EXTENSION, STATUTE_TYPE};
use crate::docx::read_document_lines;
use crate::error::Result;
use crate::metadata::extract_metadata;
use crate::parser::parse_structure;
use crate::types::DocumentRecord;

/// A document that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of converting a set of documents.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Converted documents, in input order.
    pub records: Vec<DocumentRecord>,

    /// Documents skipped because they could not be opened.
    pub failures: Vec<ConversionFailure>,
}

impl BatchReport {
    /// Total number of documents attempted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len() + self.failures.len()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Build a record from the lines of one document.
///
/// `filename` is the base name including its extension.
///
/// # Examples
/// ```
/// use lexvis_converter::converter::convert_lines;
///
/// let lines = ["시행 2020. 9. 1.", "제1조(목적) 이 법은 ..."];
/// let record = convert_lines(&lines, "도로교통법.docx", 15);
/// assert_eq!(record.id, "local-law-도로교통법.docx");
/// assert_eq!(record.name, "도로교통법");
/// assert_eq!(record.enforcement_date, "20200901");
/// assert_eq!(record.article_count(), 1);
/// ```
#[must_use]
pub fn convert_lines<S: AsRef<str>>(lines: &[S], filename: &str, header_lines: usize) -> DocumentRecord {
    let metadata = extract_metadata(lines, header_lines);
    let contents = parse_structure(lines);

    DocumentRecord {
        id: document_id(filename),
        name: document_name(filename),
        doc_type: STATUTE_TYPE.to_string(),
        department: metadata.department,
        promulgation_date: metadata.promulgation_date,
        enforcement_date: metadata.enforcement_date,
        contents,
    }
}

/// Open one `.docx` file and convert it.
pub fn convert_document(path: &Path, header_lines: usize) -> Result<DocumentRecord> {
    let lines = read_document_lines(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let record = convert_lines(&lines, &filename, header_lines);
    tracing::debug!(
        file = %path.display(),
        articles = record.article_count(),
        "Converted document"
    );
    Ok(record)
}

fn is_source_document(path: &Path) -> bool {
    let is_lock_file = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with("~$"));
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION));

    has_extension && !is_lock_file && path.is_file()
}

/// List the source documents directly inside `dir`, sorted by file name.
///
/// Subdirectories are not searched and Office lock files (`~$...`) are skipped.
pub fn discover_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    validate_input_dir(dir)?;

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if is_source_document(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::info!(dir = %dir.display(), documents = paths.len(), "Discovered documents");
    Ok(paths)
}

/// Convert documents in order, calling `on_progress` after each one.
///
/// A document that fails to open is recorded in the report and skipped.
pub fn convert_paths<F>(paths: &[PathBuf], header_lines: usize, mut on_progress: F) -> BatchReport
where
    F: FnMut(&Path),
{
    let mut report = BatchReport::default();

    for path in paths {
        match convert_document(path, header_lines) {
            Ok(record) => report.records.push(record),
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Skipping document");
                report.failures.push(ConversionFailure {
                    path: path.clone(),
                    message: e.to_string(),
                });
            }
        }
        on_progress(path);
    }

    report
}

/// Convert every source document in `dir`.
///
/// Only failing to list the directory is fatal.
pub fn convert_directory(dir: &Path, header_lines: usize) -> Result<BatchReport> {
    let paths = discover_documents(dir)?;
    Ok(convert_paths(&paths, header_lines, |_| {}))
}

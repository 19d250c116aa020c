//! Configuration constants, runtime settings and small validation helpers.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{ConverterError, Result};

/// Number of leading lines searched for header metadata.
pub const HEADER_LINE_COUNT: usize = 15;

/// Department used when the header names no ministry.
pub const DEFAULT_DEPARTMENT: &str = "정보없음";

/// Document type recorded for every converted file.
pub const STATUTE_TYPE: &str = "법률";

/// Extension of source documents picked up by the batch driver.
pub const DOCUMENT_EXTENSION: &str = "docx";

/// Prefix of the identifier synthesized from a document filename.
pub const DOCUMENT_ID_PREFIX: &str = "local-law-";

/// Output file written when none is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "law_converted.json";

/// Serialization format of the batch output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

impl OutputFormat {
    /// Get the lowercase name of the format.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ConverterError::InvalidFormat(s.to_string())),
        }
    }
}

/// Runtime settings for a batch conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub header_lines: usize,
}

impl ConverterConfig {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            format: OutputFormat::Json,
            header_lines: HEADER_LINE_COUNT,
        }
    }

    /// Build settings from `LEXVIS_*` environment variables.
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let input_dir = std::env::var("LEXVIS_INPUT_DIR").unwrap_or_else(|_| ".".into());

        let output_path: PathBuf = std::env::var("LEXVIS_OUTPUT")
            .unwrap_or_else(|_| DEFAULT_OUTPUT_FILE.into())
            .into();

        let format = std::env::var("LEXVIS_FORMAT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        let header_lines = std::env::var("LEXVIS_HEADER_LINES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(HEADER_LINE_COUNT);

        Self::new(input_dir)
            .with_output_path(output_path)
            .with_format(format)
            .with_header_lines(header_lines)
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_header_lines(mut self, header_lines: usize) -> Self {
        self.header_lines = header_lines;
        self
    }
}

/// Validate that the input path exists and is a directory.
pub fn validate_input_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ConverterError::InvalidInputDir(format!(
            "{} does not exist",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(ConverterError::InvalidInputDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    Ok(())
}

/// Synthesize the document identifier from its filename.
///
/// # Examples
/// ```
/// use lexvis_converter::config::document_id;
///
/// assert_eq!(document_id("민법.docx"), "local-law-민법.docx");
/// ```
#[must_use]
pub fn document_id(filename: &str) -> String {
    format!("{DOCUMENT_ID_PREFIX}{filename}")
}

/// Derive the document name by dropping the `.docx` extension.
///
/// # Examples
/// ```
/// use lexvis_converter::config::document_name;
///
/// assert_eq!(document_name("도로교통법.docx"), "도로교통법");
/// assert_eq!(document_name("notes.txt"), "notes.txt");
/// ```
#[must_use]
pub fn document_name(filename: &str) -> String {
    let suffix_len = DOCUMENT_EXTENSION.len() + 1;
    if filename.len() > suffix_len && filename.is_char_boundary(filename.len() - suffix_len) {
        let (stem, ext) = filename.split_at(filename.len() - suffix_len);
        if ext.eq_ignore_ascii_case(".docx") {
            return stem.to_string();
        }
    }
    filename.to_string()
}

/// Normalize captured date parts into a compact `YYYYMMDD` string.
///
/// Month and day are zero-padded. The parts are not checked against the
/// calendar: a date printed in the header is kept as written. Parts that are
/// not numbers yield an empty string.
///
/// # Examples
/// ```
/// use lexvis_converter::config::normalize_date;
///
/// assert_eq!(normalize_date("2020", "3", "1"), "20200301");
/// assert_eq!(normalize_date("2021", "2", "30"), "20210230");
/// ```
#[must_use]
pub fn normalize_date(year: &str, month: &str, day: &str) -> String {
    let parsed = (
        year.trim().parse::<u32>(),
        month.trim().parse::<u32>(),
        day.trim().parse::<u32>(),
    );
    let (Ok(y), Ok(m), Ok(d)) = parsed else {
        tracing::debug!(year, month, day, "Header date parts are not numeric");
        return String::new();
    };

    format!("{y:04}{m:02}{d:02}")
}

/// Format a compact `YYYYMMDD` date as `YYYY.MM.DD` for display.
///
/// Anything that is not exactly eight characters is returned unchanged.
#[must_use]
pub fn display_date(compact: &str) -> String {
    if compact.len() != 8 || !compact.bytes().all(|b| b.is_ascii_digit()) {
        return compact.to_string();
    }
    format!("{}.{}.{}", &compact[..4], &compact[4..6], &compact[6..])
}

//! Reading source `.docx` documents into text lines.
//!
//! A `.docx` file is a ZIP container; the body text lives in
//! `word/document.xml`. Each top-level paragraph becomes one line.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use roxmltree::Document;
use unicode_normalization::UnicodeNormalization;
use zip::ZipArchive;

use crate::error::{ConverterError, Result};
use crate::xml::{body_paragraphs, paragraph_text};

/// Archive entry holding the main document body.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Extract the ordered, non-empty, trimmed paragraph lines from document XML.
///
/// # Examples
/// ```
/// use lexvis_converter::docx::lines_from_document_xml;
///
/// let xml = r#"<w:document xmlns:w="urn:w"><w:body>
///   <w:p><w:r><w:t>제1장 총칙</w:t></w:r></w:p>
///   <w:p/>
/// </w:body></w:document>"#;
/// assert_eq!(lines_from_document_xml(xml).unwrap(), vec!["제1장 총칙"]);
/// ```
pub fn lines_from_document_xml(xml: &str) -> Result<Vec<String>> {
    let doc = Document::parse(xml)?;

    let lines = body_paragraphs(doc.root_element())
        .map(paragraph_text)
        .filter_map(|text| {
            let normalized: String = text.nfc().collect();
            let trimmed = normalized.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect();

    Ok(lines)
}

fn read_document_xml(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    let mut entry = match archive.by_name(DOCUMENT_PART) {
        Ok(entry) => entry,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(ConverterError::MissingPart {
                path: path.to_path_buf(),
                part: DOCUMENT_PART.to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Open a `.docx` file and return its paragraph lines.
///
/// Every failure is reported as [`ConverterError::DocumentOpen`] naming the file.
pub fn read_document_lines(path: &Path) -> Result<Vec<String>> {
    let lines = read_document_xml(path)
        .and_then(|xml| lines_from_document_xml(&xml))
        .map_err(|e| ConverterError::document_open(path, e))?;

    tracing::debug!(file = %path.display(), lines = lines.len(), "Read document");
    Ok(lines)
}

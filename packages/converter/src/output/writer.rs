//! Serialization of converted documents and atomic file output.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::types::DocumentRecord;

/// Generate pretty-printed JSON for a batch.
///
/// Non-ASCII text is written as-is, not escaped.
pub fn generate_json(records: &[DocumentRecord]) -> Result<String> {
    let mut content = serde_json::to_string_pretty(records)?;
    content.push('\n');
    Ok(content)
}

/// Generate YAML for a batch.
pub fn generate_yaml(records: &[DocumentRecord]) -> Result<String> {
    let yaml_string = serde_yaml_ng::to_string(records)?;

    // Add document start marker and clean up trailing whitespace
    let lines: Vec<&str> = yaml_string.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Generate a batch in the requested format.
pub fn generate_output(records: &[DocumentRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => generate_json(records),
        OutputFormat::Yaml => generate_yaml(records),
    }
}

/// Save a batch to `path`.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
pub fn save_batch(records: &[DocumentRecord], path: &Path, format: OutputFormat) -> Result<()> {
    let content = generate_output(records, format)?;

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = parent {
        fs::create_dir_all(dir)?;
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;

    tracing::info!(
        path = %path.display(),
        format = format.as_str(),
        documents = records.len(),
        "Wrote output"
    );
    Ok(())
}

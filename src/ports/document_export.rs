//! Exported document - rendered bytes with the metadata delivery needs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RenderWarning;
use crate::domain::minutes::iso_date;

/// Prefix of suggested file names ("ata" is Portuguese for minutes).
const FILENAME_PREFIX: &str = "Ata";

/// Document formats a renderer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Office Open XML word-processing document.
    Docx,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Docx => write!(f, "docx"),
        }
    }
}

/// Rendered document with content and delivery metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// The document as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
    /// Non-fatal problems met while rendering.
    pub warnings: Vec<RenderWarning>,
}

impl ExportedDocument {
    /// Create a new exported document.
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
            warnings: Vec::new(),
        }
    }

    /// Create the minutes of a meeting held on `date`, named `Ata_<ISO-date>`.
    pub fn minutes(content: Vec<u8>, format: ExportFormat, date: NaiveDate) -> Self {
        Self::new(content, format, &minutes_base_filename(date))
    }

    pub fn with_warnings(mut self, warnings: Vec<RenderWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Write the content under `dir` using the suggested file name.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the directory or file cannot be written.
    pub fn write_to_dir(&self, dir: &Path) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.content)?;
        Ok(path)
    }
}

/// Base file name (no extension) for minutes of the given date.
pub fn minutes_base_filename(date: NaiveDate) -> String {
    format!("{}_{}", FILENAME_PREFIX, iso_date(date))
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

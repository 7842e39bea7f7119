//! Minutes Renderer Port - document serialization interface.
//!
//! The renderer consumes a record and render options and produces a complete,
//! self-contained document buffer. Cosmetic problems (an unusable logo) are
//! reported as warnings; structural problems fail the whole call.

use thiserror::Error;

use super::ExportFormat;
use crate::domain::minutes::{MeetingRecord, RenderOptions};

/// Port for rendering meeting minutes into a binary document.
///
/// # Contract
///
/// Implementations must:
/// - Build a fresh document model per call (no shared builder state)
/// - Be deterministic: identical inputs give byte-identical output
/// - Never embed generation timestamps or random identifiers
/// - Degrade to a text-only header when the logo cannot be embedded, reporting a
///   [`RenderWarning::LogoDiscarded`]
/// - Return no partial output on [`RenderError::Serialization`]
pub trait MinutesRenderer: Send + Sync {
    /// Render the record.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Serialization` when the document package cannot be
    /// written.
    fn render(
        &self,
        record: &MeetingRecord,
        options: RenderOptions,
        logo: Option<&[u8]>,
    ) -> Result<RenderedDocument, RenderError>;

    /// Format of the bytes this renderer produces.
    fn format(&self) -> ExportFormat;
}

/// Output of a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub warnings: Vec<RenderWarning>,
}

/// Non-fatal problems recovered during rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderWarning {
    /// The logo could not be decoded; the header was rendered without it.
    #[error("Logo discarded: {reason}")]
    LogoDiscarded { reason: String },
}

impl RenderWarning {
    pub fn logo_discarded(reason: impl Into<String>) -> Self {
        Self::LogoDiscarded {
            reason: reason.into(),
        }
    }
}

/// Errors that abort rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The document package could not be written.
    #[error("Document serialization failed: {0}")]
    Serialization(String),
}

impl RenderError {
    /// Creates a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

//! GenerateMinutesHandler - Command handler for producing a minutes document.
//!
//! Validates the input, renders it through the configured renderer and wraps
//! the bytes with delivery metadata. Nothing is persisted here; writing the file
//! is up to the caller.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::foundation::ValidationError;
use crate::domain::minutes::{MeetingForm, MeetingRecord, RenderOptions};
use crate::ports::{ExportedDocument, MinutesRenderer, RenderError};

/// Where the meeting data comes from.
#[derive(Debug, Clone)]
pub enum MinutesSource {
    /// Raw form fields, validated by the handler.
    Form(MeetingForm),
    /// An already validated record.
    Record(MeetingRecord),
}

/// Command to generate meeting minutes.
#[derive(Debug, Clone)]
pub struct GenerateMinutesCommand {
    pub source: MinutesSource,
    pub options: RenderOptions,
    /// Raw logo bytes for the page header.
    pub logo: Option<Vec<u8>>,
}

impl GenerateMinutesCommand {
    pub fn from_form(form: MeetingForm) -> Self {
        Self {
            source: MinutesSource::Form(form),
            options: RenderOptions::default(),
            logo: None,
        }
    }

    pub fn from_record(record: MeetingRecord) -> Self {
        Self {
            source: MinutesSource::Record(record),
            options: RenderOptions::default(),
            logo: None,
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_logo(mut self, logo: Vec<u8>) -> Self {
        self.logo = Some(logo);
        self
    }
}

/// Error type for minutes generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateMinutesError {
    /// The form does not describe a valid meeting.
    #[error("Invalid meeting data: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The renderer failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Handler for generating minutes.
///
/// # Usage
///
/// ```rust,ignore
/// let handler = GenerateMinutesHandler::new(Arc::new(DocxMinutesRenderer::default()));
/// let document = handler.handle(GenerateMinutesCommand::from_form(form))?;
/// document.write_to_dir(Path::new("out"))?;
/// ```
pub struct GenerateMinutesHandler {
    renderer: Arc<dyn MinutesRenderer>,
}

impl GenerateMinutesHandler {
    pub fn new(renderer: Arc<dyn MinutesRenderer>) -> Self {
        Self { renderer }
    }

    pub fn handle(&self, cmd: GenerateMinutesCommand) -> Result<ExportedDocument, GenerateMinutesError> {
        // 1. Resolve the record
        let record = match cmd.source {
            MinutesSource::Form(form) => MeetingRecord::try_from(form)?,
            MinutesSource::Record(record) => record,
        };

        // 2. Render
        let rendered = self
            .renderer
            .render(&record, cmd.options, cmd.logo.as_deref())?;

        for warning in &rendered.warnings {
            warn!(date = %record.date(), "{}", warning);
        }

        // 3. Wrap with delivery metadata
        let document = ExportedDocument::minutes(rendered.bytes, self.renderer.format(), record.date())
            .with_warnings(rendered.warnings);

        info!(filename = %document.filename, size = document.content.len(), "Minutes generated");

        Ok(document)
    }
}

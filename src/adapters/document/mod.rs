//! Document adapters - turn meeting records into finished documents.
//!
//! - `MinutesLayout` - maps a record onto the format-neutral block model
//! - `DocxMinutesRenderer` - serializes the model as WordprocessingML (.docx)

mod docx;
mod layout;

pub use docx::{serialize, DocxMinutesRenderer};
pub use layout::{
    action_items_table, MinutesLayout, ACTION_TABLE_HEADER, NARRATIVE_SIGNATURES_HEADING,
    SIGNATURE_LABEL, SIGNATURE_LINE,
};

use crate::domain::document::StyleTheme;
use crate::domain::minutes::{MeetingRecord, RenderOptions};
use crate::ports::{MinutesRenderer, RenderError, RenderedDocument};

/// Render a record with the default theme and the built-in prose composer.
///
/// # Errors
///
/// Returns `RenderError::Serialization` if the package cannot be written.
pub fn render_minutes(
    record: &MeetingRecord,
    options: RenderOptions,
    logo: Option<&[u8]>,
) -> Result<RenderedDocument, RenderError> {
    DocxMinutesRenderer::new(StyleTheme::default()).render(record, options, logo)
}

//! Ports - Interfaces between the minutes domain and its collaborators.
//!
//! Following hexagonal architecture, ports define the contracts; adapters
//! implement them.
//!
//! - `NarrativeComposer` - Record to ordered prose paragraphs
//! - `MinutesRenderer` - Record to a serialized word-processing document
//! - `ExportedDocument` - Rendered bytes plus delivery metadata

mod document_export;
mod minutes_renderer;
mod narrative_composer;

pub use document_export::{ExportFormat, ExportedDocument};
pub use minutes_renderer::{MinutesRenderer, RenderError, RenderWarning, RenderedDocument};
pub use narrative_composer::{NarrativeComposer, MAX_NARRATIVE_PARAGRAPHS};

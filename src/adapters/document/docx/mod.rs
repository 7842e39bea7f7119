//! WordprocessingML (.docx) renderer adapter.
//!
//! Implements the `MinutesRenderer` port. A record is first laid out into a
//! format-neutral [`DocumentModel`], which [`serialize`] then turns into an
//! OPC package.
//!
//! # Example
//!
//! ```rust,ignore
//! let renderer = DocxMinutesRenderer::new(StyleTheme::default());
//! let rendered = renderer.render(&record, RenderOptions::default(), None)?;
//! std::fs::write("ata.docx", rendered.bytes)?;
//! ```

mod document;
mod header;
mod markup;
mod media;
mod numbering;
mod package;
mod section;
mod styles;

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapters::narrative::ProseNarrativeComposer;
use crate::domain::document::{DocumentModel, StyleTheme};
use crate::domain::minutes::{MeetingRecord, RenderOptions};
use crate::ports::{
    ExportFormat, MinutesRenderer, NarrativeComposer, RenderError, RenderWarning,
    RenderedDocument,
};

use super::layout::MinutesLayout;
use document::BodyWriter;
use numbering::NumberingRegistry;
use package::{DocxPackage, PackageManifest, HEADER_REL_ID};

/// Renders meeting minutes as `.docx`.
#[derive(Clone)]
pub struct DocxMinutesRenderer {
    theme: StyleTheme,
    composer: Arc<dyn NarrativeComposer>,
}

impl DocxMinutesRenderer {
    /// Renderer with the built-in prose composer.
    pub fn new(theme: StyleTheme) -> Self {
        Self {
            theme,
            composer: Arc::new(ProseNarrativeComposer::new()),
        }
    }
}

impl Default for DocxMinutesRenderer {
    fn default() -> Self {
        Self::new(StyleTheme::default())
    }
}

impl std::fmt::Debug for DocxMinutesRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocxMinutesRenderer")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl MinutesRenderer for DocxMinutesRenderer {
    fn render(
        &self,
        record: &MeetingRecord,
        options: RenderOptions,
        logo: Option<&[u8]>,
    ) -> Result<RenderedDocument, RenderError> {
        let model = MinutesLayout::new(&self.theme, self.composer.as_ref())
            .layout(record, options, logo);
        let rendered = serialize(&model)?;

        info!(
            date = %record.date(),
            narrative = options.narrative_mode,
            line_numbering = options.line_numbering,
            sections = model.section_count(),
            bytes = rendered.bytes.len(),
            warnings = rendered.warnings.len(),
            "Rendered meeting minutes"
        );

        Ok(rendered)
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Docx
    }
}

/// Serialize a document model into a `.docx` package.
///
/// An undecodable logo is dropped with a warning; the organization name still
/// appears in the header.
///
/// # Errors
///
/// Returns `RenderError::Serialization` if the ZIP container cannot be written.
pub fn serialize(model: &DocumentModel) -> Result<RenderedDocument, RenderError> {
    let mut warnings = Vec::new();

    let logo = match model.header.logo.as_deref() {
        Some(bytes) => match media::probe_logo(bytes) {
            Ok(logo) => Some(logo),
            Err(reason) => {
                warn!(reason = %reason, size = bytes.len(), "Discarding unusable logo");
                warnings.push(RenderWarning::logo_discarded(reason));
                None
            }
        },
        None => None,
    };

    let organization = model.header.organization.as_deref();
    let manifest = PackageManifest {
        header: logo.is_some() || organization.is_some(),
        image: logo.as_ref().map(|logo| logo.kind),
    };
    let header_rel_id = manifest.header.then_some(HEADER_REL_ID);

    let mut numbering = NumberingRegistry::new();
    let body = BodyWriter::new(&mut numbering, header_rel_id).write(model);

    let mut package = DocxPackage::new();
    package.add("[Content_Types].xml", package::content_types_xml(&manifest));
    package.add("_rels/.rels", package::root_rels_xml());
    package.add("word/document.xml", body);
    package.add("word/styles.xml", styles::styles_xml(&model.theme));
    package.add("word/numbering.xml", numbering.to_xml());
    package.add("word/settings.xml", package::settings_xml());
    if manifest.header {
        package.add(
            "word/header1.xml",
            header::header_xml(logo.as_ref(), organization, model.theme.logo_width_in),
        );
    }
    if let Some(logo) = &logo {
        package.add("word/_rels/header1.xml.rels", header::header_rels_xml(logo));
        package.add(format!("word/{}", logo.part_name()), logo.bytes.clone());
    }
    package.add("word/_rels/document.xml.rels", package::document_rels_xml(&manifest));
    package.add("docProps/core.xml", package::core_properties_xml(&model.properties));
    package.add("docProps/app.xml", package::app_properties_xml(&model.properties));

    tracing::debug!(parts = package.part_names().count(), "Packaging document");

    Ok(RenderedDocument {
        bytes: package.finish()?,
        warnings,
    })
}

//! Minutes layout - maps a meeting record onto the document block model.
//!
//! Layout decides *what* goes where (header, title, sections, signatures, section
//! boundaries for line numbering). It knows nothing about the output format.

use tracing::debug;

use crate::domain::document::{
    Alignment, Block, DocumentModel, DocumentProperties, HeaderBlock, LineNumbering, Paragraph,
    SectionProperties, StyleTheme, Table,
};
use crate::domain::foundation::{or_placeholder, PLACEHOLDER};
use crate::domain::minutes::{humanize_date, MeetingRecord, RenderOptions};
use crate::ports::NarrativeComposer;

/// Column headers of the action-items table.
pub const ACTION_TABLE_HEADER: [&str; 3] = ["Task", "Owner", "Due"];

/// Heading above the signatures in narrative mode.
pub const NARRATIVE_SIGNATURES_HEADING: &str = "SIGNATURES";

/// Pre-printed line used when nobody is listed to sign.
pub const SIGNATURE_LINE: &str = "______________________________";

/// Label under the pre-printed signature line.
pub const SIGNATURE_LABEL: &str = "Signature";

/// Lays out one record. Holds no state between calls.
pub struct MinutesLayout<'a> {
    theme: &'a StyleTheme,
    composer: &'a dyn NarrativeComposer,
}

impl<'a> MinutesLayout<'a> {
    pub fn new(theme: &'a StyleTheme, composer: &'a dyn NarrativeComposer) -> Self {
        Self { theme, composer }
    }

    /// Build the complete document model for a record.
    pub fn layout(
        &self,
        record: &MeetingRecord,
        options: RenderOptions,
        logo: Option<&[u8]>,
    ) -> DocumentModel {
        let mut model = DocumentModel::new(self.theme.clone());

        model.properties = DocumentProperties {
            title: record.title().to_string(),
            organization: record.organization().map(str::to_string),
        };
        model.header = HeaderBlock {
            logo: logo.filter(|bytes| !bytes.is_empty()).map(<[u8]>::to_vec),
            organization: record.organization().map(str::to_string),
        };

        model.push(Paragraph::title(record.title().to_uppercase()));

        // Numbering must start with the first body line, so the title gets a
        // section of its own.
        let body_section = if options.line_numbering {
            model.break_section(SectionProperties::plain());
            SectionProperties::numbered(LineNumbering::continuous())
        } else {
            SectionProperties::plain()
        };

        let structured_sections = if options.narrative_mode {
            self.narrative_body(&mut model, record);
            None
        } else {
            Some(self.structured_body(&mut model, record))
        };

        if options.line_numbering && !options.number_signatures {
            model.break_section(body_section);
            model.final_section = SectionProperties::plain();
        } else {
            model.final_section = body_section;
        }

        match structured_sections {
            Some(mut sections) => model.push(sections.heading("Signatures")),
            None => model.push(Paragraph::heading(2, NARRATIVE_SIGNATURES_HEADING)),
        }
        signature_blocks(record)
            .into_iter()
            .for_each(|block| model.push(block));

        debug!(
            narrative = options.narrative_mode,
            line_numbering = options.line_numbering,
            blocks = model.blocks.len(),
            sections = model.section_count(),
            "laid out minutes"
        );

        model
    }

    fn narrative_body(&self, model: &mut DocumentModel, record: &MeetingRecord) {
        for text in self.composer.compose(record) {
            model.push(
                Paragraph::new(text)
                    .aligned(Alignment::Justify)
                    .indented_cm(self.theme.first_line_indent_cm),
            );
        }
    }

    /// Emits sections 1 to 6; the caller adds the signatures heading.
    fn structured_body(&self, model: &mut DocumentModel, record: &MeetingRecord) -> SectionCounter {
        let mut sections = SectionCounter::default();

        model.push(sections.heading("Meeting Identification"));
        model.push(Paragraph::new(identification_line(record)));
        model.push(Paragraph::new(format!(
            "Chair: {}; Secretary: {}",
            or_placeholder(record.chair()),
            or_placeholder(record.secretary())
        )));

        model.push(sections.heading("Participants"));
        model.push(list_or_placeholder(record.attendees(), Block::BulletList));

        model.push(sections.heading("Agenda"));
        model.push(list_or_placeholder(record.agenda(), Block::NumberedList));

        model.push(sections.heading("Deliberations"));
        model.push(Paragraph::new(or_placeholder(record.deliberations())));

        model.push(sections.heading("Action Items"));
        match action_items_table(record) {
            Some(table) => model.push(table),
            None => model.push(Paragraph::new(PLACEHOLDER)),
        }

        if !record.closing().is_empty() {
            model.push(sections.heading("Closing"));
            model.push(Paragraph::new(record.closing()));
        }

        sections
    }
}

/// Numbers structured headings in the order they are emitted.
#[derive(Default)]
struct SectionCounter {
    emitted: usize,
}

impl SectionCounter {
    fn heading(&mut self, label: &str) -> Paragraph {
        self.emitted += 1;
        Paragraph::heading(1, format!("{}. {}", self.emitted, label))
    }
}

/// "Date: …; Time: …; Location: …"
fn identification_line(record: &MeetingRecord) -> String {
    let time = match (record.start_time(), record.end_time()) {
        ("", "") => PLACEHOLDER.to_string(),
        (start, "") => start.to_string(),
        ("", end) => end.to_string(),
        (start, end) => format!("{} – {}", start, end),
    };

    format!(
        "Date: {}; Time: {}; Location: {}",
        humanize_date(record.date(), None),
        time,
        or_placeholder(record.location())
    )
}

fn list_or_placeholder(entries: &[String], list: fn(Vec<String>) -> Block) -> Block {
    if entries.is_empty() {
        Block::Paragraph(Paragraph::new(PLACEHOLDER))
    } else {
        list(entries.to_vec())
    }
}

/// The action-items table, or `None` when there are no items.
pub fn action_items_table(record: &MeetingRecord) -> Option<Table> {
    if record.action_items().is_empty() {
        return None;
    }

    let mut table = Table::new(ACTION_TABLE_HEADER);
    for item in record.action_items() {
        table.push_row([
            item.task.as_str(),
            item.owner.as_str(),
            item.due_date.as_str(),
        ]);
    }
    Some(table)
}

/// Spacer plus centered name per signatory, or one blank signature line.
fn signature_blocks(record: &MeetingRecord) -> Vec<Block> {
    if record.signatories().is_empty() {
        return vec![
            Paragraph::spacer().into(),
            Paragraph::new(SIGNATURE_LINE).aligned(Alignment::Center).into(),
            Paragraph::new(SIGNATURE_LABEL).aligned(Alignment::Center).into(),
        ];
    }

    record
        .signatories()
        .iter()
        .flat_map(|name| {
            [
                Block::from(Paragraph::spacer()),
                Block::from(Paragraph::new(name.as_str()).aligned(Alignment::Center)),
            ]
        })
        .collect()
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

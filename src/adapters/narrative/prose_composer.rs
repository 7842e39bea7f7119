//! Prose narrative composer.
//!
//! Writes the body of the minutes as formal Portuguese prose: an opening sentence
//! naming date, meeting and agenda, an attendance sentence, then the deliberations,
//! the action items and the closing remarks.

use crate::domain::foundation::{or_placeholder, PLACEHOLDER};
use crate::domain::minutes::{humanize_date, ActionItem, MeetingRecord};
use crate::ports::NarrativeComposer;

/// Separator between the fields of one action item.
const FIELD_SEPARATOR: &str = " — ";

/// Separator between agenda entries and between action items.
const ITEM_SEPARATOR: &str = "; ";

/// Composer producing Portuguese prose paragraphs.
///
/// The opening and attendance paragraphs always appear because their framing
/// sentence is never empty; missing values inside them become "—". The
/// deliberations, action-items and closing paragraphs appear only when the
/// record has content for them.
#[derive(Debug, Clone, Default)]
pub struct ProseNarrativeComposer;

impl ProseNarrativeComposer {
    /// Creates a new prose composer.
    pub fn new() -> Self {
        Self
    }

    /// "Ao <date>, realizou-se a <title>[, em <location>], tendo como pauta: <agenda>."
    fn opening(&self, record: &MeetingRecord) -> String {
        let when = humanize_date(record.date(), Some(record.start_time()));
        let location = record.location();
        let location_clause = if location.is_empty() {
            String::new()
        } else {
            format!(", em {}", location)
        };

        format!(
            "Ao {}, realizou-se a {}{}, tendo como pauta: {}.",
            when,
            record.title(),
            location_clause,
            agenda_clause(record.agenda())
        )
    }

    fn attendance(&self, record: &MeetingRecord) -> String {
        let attendees = if record.attendees().is_empty() {
            PLACEHOLDER.to_string()
        } else {
            record.attendees().join(", ")
        };

        format!(
            "Estiveram presentes: {}. A reunião foi presidida por {} e secretariada por {}.",
            attendees,
            or_placeholder(record.chair()),
            or_placeholder(record.secretary())
        )
    }

    fn deliberations(&self, record: &MeetingRecord) -> Option<String> {
        non_empty(record.deliberations())
    }

    fn action_items(&self, record: &MeetingRecord) -> Option<String> {
        let items: Vec<String> = record
            .action_items()
            .iter()
            .map(describe_action_item)
            .filter(|item| !item.is_empty())
            .collect();

        if items.is_empty() {
            None
        } else {
            Some(format!("Encaminhamentos: {}.", items.join(ITEM_SEPARATOR)))
        }
    }

    fn closing(&self, record: &MeetingRecord) -> Option<String> {
        non_empty(record.closing())
    }
}

impl NarrativeComposer for ProseNarrativeComposer {
    fn compose(&self, record: &MeetingRecord) -> Vec<String> {
        [
            Some(self.opening(record)),
            Some(self.attendance(record)),
            self.deliberations(record),
            self.action_items(record),
            self.closing(record),
        ]
        .into_iter()
        .flatten()
        .filter(|paragraph| !paragraph.trim().is_empty())
        .collect()
    }
}

/// Agenda entries joined by "; ", or the placeholder for an empty agenda.
pub(crate) fn agenda_clause(agenda: &[String]) -> String {
    if agenda.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        agenda.join(ITEM_SEPARATOR)
    }
}

/// "task — owner — due" with blank fields left out.
fn describe_action_item(item: &ActionItem) -> String {
    [&item.task, &item.owner, &item.due_date]
        .into_iter()
        .map(|field| field.trim())
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

//! MeetingRecord - the sole input of a render call.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::foundation::{is_blank, normalize_entries};

/// Title used when the record carries none.
pub const DEFAULT_TITLE: &str = "Meeting Minutes";

/// One follow-up task agreed during the meeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ActionItem {
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default, alias = "dueDate")]
    pub due_date: String,
}

impl ActionItem {
    pub fn new(
        task: impl Into<String>,
        owner: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            task: task.into(),
            owner: owner.into(),
            due_date: due_date.into(),
        }
    }

    /// True when task, owner and due date are all blank.
    pub fn is_blank(&self) -> bool {
        is_blank(&self.task) && is_blank(&self.owner) && is_blank(&self.due_date)
    }

    /// Copy with every field trimmed.
    fn trimmed(&self) -> Self {
        Self::new(self.task.trim(), self.owner.trim(), self.due_date.trim())
    }
}

/// Complete description of one meeting's minutes.
///
/// Construction normalizes the data: list entries are trimmed with blanks removed
/// and action items whose fields are all blank are dropped. The date is the only
/// required field, so a record always holds a valid calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RecordData")]
pub struct MeetingRecord {
    organization: Option<String>,
    title: String,
    date: NaiveDate,
    start_time: String,
    end_time: String,
    location: String,
    chair: String,
    secretary: String,
    attendees: Vec<String>,
    agenda: Vec<String>,
    deliberations: String,
    action_items: Vec<ActionItem>,
    closing: String,
    signatories: Vec<String>,
}

impl MeetingRecord {
    /// Creates an otherwise empty record for the given date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            organization: None,
            title: String::new(),
            date,
            start_time: String::new(),
            end_time: String::new(),
            location: String::new(),
            chair: String::new(),
            secretary: String::new(),
            attendees: Vec::new(),
            agenda: Vec::new(),
            deliberations: String::new(),
            action_items: Vec::new(),
            closing: String::new(),
            signatories: Vec::new(),
        }
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        let organization = organization.into().trim().to_string();
        self.organization = (!organization.is_empty()).then_some(organization);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into().trim().to_string();
        self
    }

    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into().trim().to_string();
        self.end_time = end.into().trim().to_string();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into().trim().to_string();
        self
    }

    pub fn with_chair(mut self, chair: impl Into<String>) -> Self {
        self.chair = chair.into().trim().to_string();
        self
    }

    pub fn with_secretary(mut self, secretary: impl Into<String>) -> Self {
        self.secretary = secretary.into().trim().to_string();
        self
    }

    pub fn with_attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.attendees = normalize_entries(attendees);
        self
    }

    pub fn with_agenda<I, S>(mut self, agenda: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.agenda = normalize_entries(agenda);
        self
    }

    /// Deliberations keep their inner line breaks; only the outer whitespace goes.
    pub fn with_deliberations(mut self, deliberations: impl Into<String>) -> Self {
        self.deliberations = deliberations.into().trim().to_string();
        self
    }

    pub fn with_action_items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = ActionItem>,
    {
        self.action_items = items
            .into_iter()
            .filter(|item| !item.is_blank())
            .map(|item| item.trimmed())
            .collect();
        self
    }

    pub fn with_closing(mut self, closing: impl Into<String>) -> Self {
        self.closing = closing.into().trim().to_string();
        self
    }

    pub fn with_signatories<I, S>(mut self, signatories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.signatories = normalize_entries(signatories);
        self
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    /// The title, falling back to [`DEFAULT_TITLE`] when none was given.
    pub fn title(&self) -> &str {
        if self.title.is_empty() {
            DEFAULT_TITLE
        } else {
            &self.title
        }
    }

    /// Title as it was supplied, possibly empty.
    pub fn raw_title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn chair(&self) -> &str {
        &self.chair
    }

    pub fn secretary(&self) -> &str {
        &self.secretary
    }

    pub fn attendees(&self) -> &[String] {
        &self.attendees
    }

    pub fn agenda(&self) -> &[String] {
        &self.agenda
    }

    pub fn deliberations(&self) -> &str {
        &self.deliberations
    }

    pub fn action_items(&self) -> &[ActionItem] {
        &self.action_items
    }

    pub fn closing(&self) -> &str {
        &self.closing
    }

    pub fn signatories(&self) -> &[String] {
        &self.signatories
    }
}

/// Wire shape of a record; every field but the date may be missing.
#[derive(Debug, Deserialize)]
struct RecordData {
    #[serde(default)]
    organization: Option<String>,
    #[serde(default)]
    title: String,
    date: NaiveDate,
    #[serde(default, alias = "startTime")]
    start_time: String,
    #[serde(default, alias = "endTime")]
    end_time: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    chair: String,
    #[serde(default)]
    secretary: String,
    #[serde(default)]
    attendees: Vec<String>,
    #[serde(default)]
    agenda: Vec<String>,
    #[serde(default)]
    deliberations: String,
    #[serde(default, alias = "actionItems")]
    action_items: Vec<ActionItem>,
    #[serde(default)]
    closing: String,
    #[serde(default)]
    signatories: Vec<String>,
}

impl From<RecordData> for MeetingRecord {
    fn from(data: RecordData) -> Self {
        MeetingRecord::new(data.date)
            .with_organization(data.organization.unwrap_or_default())
            .with_title(data.title)
            .with_times(data.start_time, data.end_time)
            .with_location(data.location)
            .with_chair(data.chair)
            .with_secretary(data.secretary)
            .with_attendees(data.attendees)
            .with_agenda(data.agenda)
            .with_deliberations(data.deliberations)
            .with_action_items(data.action_items)
            .with_closing(data.closing)
            .with_signatories(data.signatories)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn blank_title_falls_back_to_default() {
        let record = MeetingRecord::new(march_15()).with_title("   ");
        assert_eq!(record.title(), DEFAULT_TITLE);
        assert_eq!(record.raw_title(), "");
    }

    #[test]
    fn list_fields_drop_blank_entries() {
        let record = MeetingRecord::new(march_15())
            .with_attendees(["Ana", "", "  ", " Bruno "])
            .with_agenda(["", "Budget"])
            .with_signatories(["   "]);

        assert_eq!(record.attendees(), ["Ana", "Bruno"]);
        assert_eq!(record.agenda(), ["Budget"]);
        assert!(record.signatories().is_empty());
    }

    #[test]
    fn all_blank_action_items_are_dropped() {
        let record = MeetingRecord::new(march_15()).with_action_items(vec![
            ActionItem::new(" ", "", "  "),
            ActionItem::new("", "Ana", ""),
        ]);

        assert_eq!(record.action_items(), [ActionItem::new("", "Ana", "")]);
    }

    #[test]
    fn blank_organization_is_none() {
        let record = MeetingRecord::new(march_15()).with_organization("  ");
        assert_eq!(record.organization(), None);
    }

    // ───────────────────────────────────────────────────────────────
    // Deserialization
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn deserializes_and_normalizes() {
        let json = r#"{
            "title": "Board Meeting",
            "date": "2024-03-15",
            "startTime": "09:00",
            "attendees": ["Ana", "", "Bruno"],
            "actionItems": [
                {"task": "Review budget", "owner": "Ana", "dueDate": "2024-06-01"},
                {"task": "", "owner": "", "dueDate": ""}
            ]
        }"#;

        let record: MeetingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title(), "Board Meeting");
        assert_eq!(record.start_time(), "09:00");
        assert_eq!(record.attendees(), ["Ana", "Bruno"]);
        assert_eq!(
            record.action_items(),
            [ActionItem::new("Review budget", "Ana", "2024-06-01")]
        );
    }

    #[test]
    fn missing_date_fails_deserialization() {
        let result: Result<MeetingRecord, _> = serde_json::from_str(r#"{"title": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_date_fails_deserialization() {
        let result: Result<MeetingRecord, _> =
            serde_json::from_str(r#"{"date": "2024-02-31"}"#);
        assert!(result.is_err());
    }
}

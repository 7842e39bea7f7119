//! MeetingForm - raw field values as the form layer collects them.
//!
//! Every list is a single multi-line text field and the date is text. Turning a
//! form into a [`MeetingRecord`] is the one place where input can be rejected.

use chrono::NaiveDate;
use serde::Deserialize;

use super::record::{ActionItem, MeetingRecord};
use crate::domain::foundation::{non_blank_lines, ValidationError};

/// Date layouts accepted from the form, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Unvalidated form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MeetingForm {
    pub organization: String,
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub chair: String,
    pub secretary: String,
    /// One attendee per line.
    pub attendees: String,
    /// One agenda item per line.
    pub agenda: String,
    pub deliberations: String,
    /// Repeated rows; rows with every field blank are dropped.
    pub action_items: Vec<ActionItem>,
    pub closing: String,
    /// One signatory per line.
    pub signatories: String,
}

impl MeetingForm {
    /// Parses the date field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` when the date is blank and
    /// `ValidationError::InvalidFormat` when no accepted layout matches.
    pub fn parse_date(&self) -> Result<NaiveDate, ValidationError> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return Err(ValidationError::empty_field("date"));
        }

        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "date",
                    format!("'{}' is not a calendar date (use YYYY-MM-DD or DD/MM/YYYY)", raw),
                )
            })
    }
}

impl TryFrom<MeetingForm> for MeetingRecord {
    type Error = ValidationError;

    fn try_from(form: MeetingForm) -> Result<Self, Self::Error> {
        let date = form.parse_date()?;

        Ok(MeetingRecord::new(date)
            .with_organization(form.organization)
            .with_title(form.title)
            .with_times(form.start_time, form.end_time)
            .with_location(form.location)
            .with_chair(form.chair)
            .with_secretary(form.secretary)
            .with_attendees(non_blank_lines(&form.attendees))
            .with_agenda(non_blank_lines(&form.agenda))
            .with_deliberations(form.deliberations)
            .with_action_items(form.action_items)
            .with_closing(form.closing)
            .with_signatories(non_blank_lines(&form.signatories)))
    }
}

//! Minutes module - the meeting record and how it is rendered.
//!
//! A [`MeetingRecord`] is built once per render call (from JSON or from a raw
//! [`MeetingForm`]) and is never mutated afterwards.

mod date;
mod form;
mod options;
mod record;

pub use date::{humanize_date, iso_date, month_name, MONTH_NAMES};
pub use form::MeetingForm;
pub use options::RenderOptions;
pub use record::{ActionItem, MeetingRecord, DEFAULT_TITLE};

//! Narrative Composer Port - prose generation interface.
//!
//! Turns a meeting record into plain-text paragraphs (no styling). Used only when
//! the body is rendered in narrative mode.

use crate::domain::minutes::MeetingRecord;

/// Upper bound on the paragraphs a composer may return.
pub const MAX_NARRATIVE_PARAGRAPHS: usize = 5;

/// Port for composing the narrative body of the minutes.
///
/// # Contract
///
/// Implementations must:
/// - Be pure: the same record always yields the same paragraphs
/// - Return at most [`MAX_NARRATIVE_PARAGRAPHS`] paragraphs, none of them empty
/// - Keep the fixed order opening, attendance, deliberations, action items, closing
///
/// # Usage
///
/// ```rust,ignore
/// let composer: &dyn NarrativeComposer = get_composer();
/// for paragraph in composer.compose(&record) {
///     println!("{}", paragraph);
/// }
/// ```
pub trait NarrativeComposer: Send + Sync {
    /// Compose the ordered prose paragraphs for a record.
    fn compose(&self, record: &MeetingRecord) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrative_composer_is_object_safe() {
        fn check<T: NarrativeComposer + ?Sized>() {}
        check::<dyn NarrativeComposer>();
    }
}

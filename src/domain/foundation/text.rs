//! Text normalization helpers shared by intake, composer and layout.

/// Em dash shown wherever a required clause has no content.
pub const PLACEHOLDER: &str = "—";

/// True when the text is empty or whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Splits a multi-line form field into trimmed, non-blank entries.
pub fn non_blank_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trims every entry and drops the blank ones, preserving order.
pub fn normalize_entries<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| entry.as_ref().trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Returns the trimmed text, or the placeholder when it is blank.
pub fn or_placeholder(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        PLACEHOLDER
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_lines_drops_blank_and_whitespace_lines() {
        let lines = non_blank_lines("Ana\n\n   \n  Bruno  \r\nCarla");
        assert_eq!(lines, vec!["Ana", "Bruno", "Carla"]);
    }

    #[test]
    fn non_blank_lines_of_empty_text_is_empty() {
        assert!(non_blank_lines("").is_empty());
        assert!(non_blank_lines("\n\n").is_empty());
    }

    #[test]
    fn normalize_entries_trims_and_filters() {
        let entries = normalize_entries(vec![" a ", "", "  ", "b"]);
        assert_eq!(entries, vec!["a", "b"]);
    }

    #[test]
    fn or_placeholder_substitutes_dash_for_blank() {
        assert_eq!(or_placeholder("   "), PLACEHOLDER);
        assert_eq!(or_placeholder(" Ana "), "Ana");
    }

    #[test]
    fn is_blank_detects_whitespace() {
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" x "));
    }
}

//! RenderOptions - toggles that shape the output, never the data.

use serde::Deserialize;

/// Orthogonal rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Render the body as prose paragraphs instead of titled sections.
    pub narrative_mode: bool,

    /// Print continuous line numbers beside the body.
    pub line_numbering: bool,

    /// Whether the signature block stays inside the numbered scope.
    pub number_signatures: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            narrative_mode: true,
            line_numbering: true,
            number_signatures: true,
        }
    }
}

impl RenderOptions {
    /// Titled sections with tables and lists.
    pub fn structured() -> Self {
        Self {
            narrative_mode: false,
            ..Self::default()
        }
    }

    /// Flowing prose paragraphs.
    pub fn narrative() -> Self {
        Self::default()
    }

    pub fn with_line_numbering(mut self, enabled: bool) -> Self {
        self.line_numbering = enabled;
        self
    }

    pub fn with_numbered_signatures(mut self, enabled: bool) -> Self {
        self.number_signatures = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_narrative_and_numbering() {
        let opts = RenderOptions::default();
        assert!(opts.narrative_mode);
        assert!(opts.line_numbering);
        assert!(opts.number_signatures);
    }

    #[test]
    fn structured_keeps_numbering() {
        let opts = RenderOptions::structured();
        assert!(!opts.narrative_mode);
        assert!(opts.line_numbering);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let opts: RenderOptions = serde_json::from_str(r#"{"line_numbering": false}"#).unwrap();
        assert!(opts.narrative_mode);
        assert!(!opts.line_numbering);
    }
}

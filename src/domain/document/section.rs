//! Section properties: the scope line numbering attaches to.

/// Line numbering directive for one section.
///
/// The counter never resets within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineNumbering {
    /// Print a number on every n-th line.
    pub count_by: u32,
    /// First printed number.
    pub start: u32,
}

impl LineNumbering {
    /// Every line, starting at 1, never restarting.
    pub fn continuous() -> Self {
        Self {
            count_by: 1,
            start: 1,
        }
    }
}

impl Default for LineNumbering {
    fn default() -> Self {
        Self::continuous()
    }
}

/// Formatting scope shared by a run of consecutive blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionProperties {
    pub line_numbering: Option<LineNumbering>,
}

impl SectionProperties {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn numbered(numbering: LineNumbering) -> Self {
        Self {
            line_numbering: Some(numbering),
        }
    }

    pub fn is_numbered(&self) -> bool {
        self.line_numbering.is_some()
    }
}

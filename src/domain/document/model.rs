//! DocumentModel - everything a serializer needs, in reading order.

use super::{Block, SectionProperties, StyleTheme};

/// Running header content, repeated on every page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderBlock {
    /// Raw logo bytes; the serializer decides whether it can embed them.
    pub logo: Option<Vec<u8>>,
    pub organization: Option<String>,
}

/// Descriptive metadata stored alongside the content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentProperties {
    pub title: String,
    pub organization: Option<String>,
}

/// A complete document ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentModel {
    pub theme: StyleTheme,
    pub header: HeaderBlock,
    pub properties: DocumentProperties,
    pub blocks: Vec<Block>,
    /// Properties of the section that ends with the last block.
    pub final_section: SectionProperties,
}

impl DocumentModel {
    pub fn new(theme: StyleTheme) -> Self {
        Self {
            theme,
            header: HeaderBlock::default(),
            properties: DocumentProperties::default(),
            blocks: Vec::new(),
            final_section: SectionProperties::plain(),
        }
    }

    pub fn push(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }

    /// Closes the current section; later blocks belong to a new one.
    pub fn break_section(&mut self, closing: SectionProperties) {
        self.blocks.push(Block::SectionBreak(closing));
    }

    /// Number of sections the blocks are split into.
    pub fn section_count(&self) -> usize {
        1 + self
            .blocks
            .iter()
            .filter(|block| matches!(block, Block::SectionBreak(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{LineNumbering, Paragraph};

    #[test]
    fn new_model_has_one_plain_section() {
        let model = DocumentModel::new(StyleTheme::default());
        assert_eq!(model.section_count(), 1);
        assert!(!model.final_section.is_numbered());
        assert_eq!(model.header, HeaderBlock::default());
    }

    #[test]
    fn break_section_adds_a_section() {
        let mut model = DocumentModel::new(StyleTheme::default());
        model.push(Paragraph::title("ATA"));
        model.break_section(SectionProperties::plain());
        model.final_section = SectionProperties::numbered(LineNumbering::continuous());
        assert_eq!(model.section_count(), 2);
    }
}

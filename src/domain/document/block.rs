//! Block-level content: paragraphs, lists and tables.

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Named paragraph styles every serializer must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Normal,
    Title,
    /// Section heading, level 1 to 3.
    Heading(u8),
}

/// A single paragraph of plain text.
///
/// Line breaks inside `text` are kept as soft breaks within the paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub style: ParagraphStyle,
    /// `None` leaves the alignment to the style.
    pub alignment: Option<Alignment>,
    /// First-line indent in centimetres.
    pub first_line_indent_cm: Option<f32>,
}

impl Paragraph {
    /// Normal paragraph with style defaults.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: ParagraphStyle::Normal,
            alignment: None,
            first_line_indent_cm: None,
        }
    }

    /// Empty paragraph used as vertical space.
    pub fn spacer() -> Self {
        Self::new("")
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::new(text)
            .with_style(ParagraphStyle::Title)
            .aligned(Alignment::Center)
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(text)
            .with_style(ParagraphStyle::Heading(level.clamp(1, 3)))
            .aligned(Alignment::Left)
    }

    pub fn with_style(mut self, style: ParagraphStyle) -> Self {
        self.style = style;
        self
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn indented_cm(mut self, indent: f32) -> Self {
        self.first_line_indent_cm = Some(indent);
        self
    }
}

/// Grid table with a single header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a body row; short rows are padded with empty cells.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.column_count().max(row.len()), String::new());
        self.rows.push(row);
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Total rows including the header row.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }
}

/// One unit of body content.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    BulletList(Vec<String>),
    NumberedList(Vec<String>),
    Table(Table),
    /// Ends the current section with the given properties; the next section
    /// starts on the same page.
    SectionBreak(super::SectionProperties),
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_level_is_clamped() {
        assert_eq!(Paragraph::heading(0, "x").style, ParagraphStyle::Heading(1));
        assert_eq!(Paragraph::heading(9, "x").style, ParagraphStyle::Heading(3));
    }

    #[test]
    fn title_is_centered() {
        let title = Paragraph::title("ATA");
        assert_eq!(title.alignment, Some(Alignment::Center));
        assert_eq!(title.style, ParagraphStyle::Title);
    }

    #[test]
    fn table_counts_header_row() {
        let mut table = Table::new(["Task", "Owner", "Due"]);
        assert_eq!(table.row_count(), 1);
        table.push_row(["a"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0], vec!["a", "", ""]);
    }
}

//! `word/document.xml`: the body, block by block.
//!
//! A section ends on the paragraph carrying its `w:sectPr`. When the block
//! before a break is a paragraph the properties ride on it. After a table they
//! ride on the paragraph that must follow the table anyway. Otherwise an empty
//! carrier paragraph is emitted. The last section's properties sit at the end
//! of the body.

use crate::domain::document::{
    Block, DocumentModel, Paragraph, ParagraphStyle, SectionProperties, Table,
};

use super::markup::{cm_to_twips, justification, text_run, R_NS, W_NS, XML_DECLARATION};
use super::numbering::NumberingRegistry;
use super::section::{content_width, section_xml};
use super::styles::{heading_style_id, STYLE_LIST_PARAGRAPH, STYLE_TABLE_GRID, STYLE_TITLE};

/// List instance a paragraph belongs to.
#[derive(Debug, Clone, Copy)]
struct ListMembership {
    num_id: u32,
}

/// Streams the body of a [`DocumentModel`] into WordprocessingML.
pub(crate) struct BodyWriter<'a> {
    numbering: &'a mut NumberingRegistry,
    header_rel_id: Option<&'a str>,
    section_index: usize,
    xml: String,
}

impl<'a> BodyWriter<'a> {
    pub(crate) fn new(numbering: &'a mut NumberingRegistry, header_rel_id: Option<&'a str>) -> Self {
        Self {
            numbering,
            header_rel_id,
            section_index: 0,
            xml: String::new(),
        }
    }

    /// Write the full `word/document.xml` part.
    pub(crate) fn write(mut self, model: &DocumentModel) -> String {
        let blocks = &model.blocks;
        let mut index = 0;

        while index < blocks.len() {
            match &blocks[index] {
                Block::Paragraph(paragraph) => {
                    let section = self.close_before(blocks.get(index + 1));
                    if section.is_some() {
                        index += 1;
                    }
                    self.paragraph(paragraph, None, section.as_deref());
                }
                Block::BulletList(items) => {
                    let membership = ListMembership {
                        num_id: self.numbering.bullet(),
                    };
                    self.list(items, membership);
                }
                Block::NumberedList(items) => {
                    let membership = ListMembership {
                        num_id: self.numbering.next_numbered(),
                    };
                    self.list(items, membership);
                }
                Block::Table(table) => {
                    let section = self.close_before(blocks.get(index + 1));
                    if section.is_some() {
                        index += 1;
                    }
                    self.table(table, section.as_deref());
                }
                Block::SectionBreak(properties) => {
                    let section = self.close_section(properties);
                    self.paragraph(&Paragraph::spacer(), None, Some(section.as_str()));
                }
            }
            index += 1;
        }

        let final_section = section_xml(&model.final_section, self.section_index, self.header_rel_id);

        let mut xml = String::from(XML_DECLARATION);
        xml.push_str(&format!(
            "<w:document xmlns:w=\"{}\" xmlns:r=\"{}\"><w:body>",
            W_NS, R_NS
        ));
        xml.push_str(&self.xml);
        xml.push_str(&final_section);
        xml.push_str("</w:body></w:document>");
        xml
    }

    /// Closes the current section when `next` is a break, returning its `w:sectPr`.
    fn close_before(&mut self, next: Option<&Block>) -> Option<String> {
        match next {
            Some(Block::SectionBreak(properties)) => Some(self.close_section(properties)),
            _ => None,
        }
    }

    fn close_section(&mut self, properties: &SectionProperties) -> String {
        let xml = section_xml(properties, self.section_index, self.header_rel_id);
        self.section_index += 1;
        xml
    }

    fn paragraph(
        &mut self,
        paragraph: &Paragraph,
        list: Option<ListMembership>,
        section: Option<&str>,
    ) {
        let mut properties = String::new();

        match paragraph.style {
            ParagraphStyle::Normal if list.is_some() => {
                properties.push_str(&style_ref(STYLE_LIST_PARAGRAPH));
            }
            ParagraphStyle::Normal => {}
            ParagraphStyle::Title => properties.push_str(&style_ref(STYLE_TITLE)),
            ParagraphStyle::Heading(level) => {
                properties.push_str(&style_ref(&heading_style_id(level)))
            }
        }

        if let Some(list) = list {
            properties.push_str(&format!(
                "<w:numPr><w:ilvl w:val=\"0\"/><w:numId w:val=\"{}\"/></w:numPr>",
                list.num_id
            ));
        }
        if let Some(indent) = paragraph.first_line_indent_cm {
            properties.push_str(&format!(
                "<w:ind w:firstLine=\"{}\"/>",
                cm_to_twips(indent)
            ));
        }
        if let Some(alignment) = paragraph.alignment {
            properties.push_str(&format!("<w:jc w:val=\"{}\"/>", justification(alignment)));
        }
        if let Some(section) = section {
            properties.push_str(section);
        }

        self.xml.push_str("<w:p>");
        if !properties.is_empty() {
            self.xml.push_str("<w:pPr>");
            self.xml.push_str(&properties);
            self.xml.push_str("</w:pPr>");
        }
        self.xml.push_str(&text_run(&paragraph.text, false));
        self.xml.push_str("</w:p>");
    }

    fn list(&mut self, items: &[String], membership: ListMembership) {
        for item in items {
            self.paragraph(&Paragraph::new(item.as_str()), Some(membership), None);
        }
    }

    fn table(&mut self, table: &Table, section: Option<&str>) {
        let columns = table.column_count().max(1);
        let column_width = content_width() / columns as u32;

        self.xml.push_str("<w:tbl><w:tblPr>");
        self.xml.push_str(&format!("<w:tblStyle w:val=\"{}\"/>", STYLE_TABLE_GRID));
        self.xml.push_str("<w:tblW w:w=\"5000\" w:type=\"pct\"/>");
        self.xml.push_str("<w:tblLook w:val=\"04A0\" w:firstRow=\"1\" w:lastRow=\"0\" \
             w:firstColumn=\"1\" w:lastColumn=\"0\" w:noHBand=\"0\" w:noVBand=\"1\"/>");
        self.xml.push_str("</w:tblPr><w:tblGrid>");
        for _ in 0..columns {
            self.xml
                .push_str(&format!("<w:gridCol w:w=\"{}\"/>", column_width));
        }
        self.xml.push_str("</w:tblGrid>");

        self.row(&table.header, column_width, true);
        for row in &table.rows {
            self.row(row, column_width, false);
        }

        self.xml.push_str("</w:tbl>");
        // Word requires a paragraph between a table and whatever follows it.
        self.paragraph(&Paragraph::spacer(), None, section);
    }

    fn row(&mut self, cells: &[String], column_width: u32, header: bool) {
        self.xml.push_str("<w:tr>");
        if header {
            self.xml.push_str("<w:trPr><w:tblHeader/></w:trPr>");
        }
        for cell in cells {
            self.xml.push_str(&format!(
                "<w:tc><w:tcPr><w:tcW w:w=\"{}\" w:type=\"dxa\"/></w:tcPr><w:p>{}</w:p></w:tc>",
                column_width,
                text_run(cell, header)
            ));
        }
        self.xml.push_str("</w:tr>");
    }
}

fn style_ref(style_id: &str) -> String {
    format!("<w:pStyle w:val=\"{}\"/>", style_id)
}

//! `word/styles.xml` - the style theme expressed as WordprocessingML styles.
//!
//! Each built-in style gets its font set through one operation,
//! [`StyleDefinition::font`], so the family lands in the ASCII, high-ANSI,
//! East-Asian and complex-script slots alike.

use super::markup::{half_points, xml_escape, W_NS, XML_DECLARATION};
use crate::domain::document::StyleTheme;

/// Style ids referenced from the body.
pub(crate) const STYLE_NORMAL: &str = "Normal";
pub(crate) const STYLE_TITLE: &str = "Title";
pub(crate) const STYLE_LIST_PARAGRAPH: &str = "ListParagraph";
pub(crate) const STYLE_HEADER: &str = "Header";
pub(crate) const STYLE_TABLE_GRID: &str = "TableGrid";

/// Style id of a heading level.
pub(crate) fn heading_style_id(level: u8) -> String {
    format!("Heading{}", level.clamp(1, 3))
}

/// A paragraph style under construction.
struct StyleDefinition {
    id: String,
    name: String,
    is_default: bool,
    based_on: Option<&'static str>,
    paragraph_properties: String,
    font_family: String,
    size_pt: f32,
    bold: bool,
}

impl StyleDefinition {
    fn paragraph(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_default: false,
            based_on: None,
            paragraph_properties: String::new(),
            font_family: String::new(),
            size_pt: 0.0,
            bold: false,
        }
    }

    fn default_style(mut self) -> Self {
        self.is_default = true;
        self
    }

    fn based_on(mut self, parent: &'static str) -> Self {
        self.based_on = Some(parent);
        self
    }

    /// Sets family and size for this style.
    fn font(mut self, family: &str, size_pt: f32) -> Self {
        self.font_family = family.to_string();
        self.size_pt = size_pt;
        self
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn paragraph_properties(mut self, properties: &str) -> Self {
        self.paragraph_properties = properties.to_string();
        self
    }

    fn to_xml(&self) -> String {
        let mut xml = String::from("<w:style w:type=\"paragraph\"");
        if self.is_default {
            xml.push_str(" w:default=\"1\"");
        }
        xml.push_str(&format!(" w:styleId=\"{}\">", self.id));
        xml.push_str(&format!("<w:name w:val=\"{}\"/>", xml_escape(&self.name)));
        if let Some(parent) = self.based_on {
            xml.push_str(&format!("<w:basedOn w:val=\"{}\"/>", parent));
            xml.push_str(&format!("<w:next w:val=\"{}\"/>", STYLE_NORMAL));
        }
        xml.push_str("<w:qFormat/>");
        if !self.paragraph_properties.is_empty() {
            xml.push_str(&format!("<w:pPr>{}</w:pPr>", self.paragraph_properties));
        }
        xml.push_str("<w:rPr>");
        if !self.font_family.is_empty() {
            xml.push_str(&font_slots(&self.font_family));
        }
        if self.bold {
            xml.push_str("<w:b/><w:bCs/>");
        }
        if self.size_pt > 0.0 {
            let size = half_points(self.size_pt);
            xml.push_str(&format!("<w:sz w:val=\"{size}\"/><w:szCs w:val=\"{size}\"/>"));
        }
        xml.push_str("</w:rPr></w:style>");
        xml
    }
}

/// `w:rFonts` naming the family in every script slot.
fn font_slots(family: &str) -> String {
    let family = xml_escape(family);
    format!(
        "<w:rFonts w:ascii=\"{f}\" w:hAnsi=\"{f}\" w:eastAsia=\"{f}\" w:cs=\"{f}\"/>",
        f = family
    )
}

/// Heading paragraph properties: keep with next, left aligned, outline level.
fn heading_properties(outline_level: u8) -> String {
    format!(
        "<w:keepNext/><w:spacing w:before=\"240\" w:after=\"120\"/>\
         <w:jc w:val=\"left\"/><w:outlineLvl w:val=\"{}\"/>",
        outline_level
    )
}

/// Build `word/styles.xml` for a theme.
pub(crate) fn styles_xml(theme: &StyleTheme) -> String {
    let family = theme.font_family.as_str();
    let base = half_points(theme.base_size_pt);

    let styles = [
        StyleDefinition::paragraph(STYLE_NORMAL, "Normal")
            .default_style()
            .font(family, theme.base_size_pt),
        StyleDefinition::paragraph(STYLE_TITLE, "Title")
            .based_on(STYLE_NORMAL)
            .font(family, theme.title_size_pt)
            .bold()
            .paragraph_properties("<w:spacing w:after=\"240\"/><w:jc w:val=\"center\"/>"),
        StyleDefinition::paragraph(heading_style_id(1), "heading 1")
            .based_on(STYLE_NORMAL)
            .font(family, theme.heading1_size_pt)
            .bold()
            .paragraph_properties(&heading_properties(0)),
        StyleDefinition::paragraph(heading_style_id(2), "heading 2")
            .based_on(STYLE_NORMAL)
            .font(family, theme.heading2_size_pt)
            .bold()
            .paragraph_properties(&heading_properties(1)),
        StyleDefinition::paragraph(heading_style_id(3), "heading 3")
            .based_on(STYLE_NORMAL)
            .font(family, theme.heading3_size_pt())
            .bold()
            .paragraph_properties(&heading_properties(2)),
        StyleDefinition::paragraph(STYLE_LIST_PARAGRAPH, "List Paragraph")
            .based_on(STYLE_NORMAL)
            .paragraph_properties("<w:ind w:left=\"720\"/><w:contextualSpacing/>"),
        StyleDefinition::paragraph(STYLE_HEADER, "header")
            .based_on(STYLE_NORMAL)
            .paragraph_properties("<w:spacing w:after=\"0\"/>"),
    ];

    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!("<w:styles xmlns:w=\"{}\">", W_NS));

    xml.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
    xml.push_str(&font_slots(family));
    xml.push_str(&format!(
        "<w:sz w:val=\"{base}\"/><w:szCs w:val=\"{base}\"/><w:lang w:val=\"pt-BR\"/>"
    ));
    xml.push_str("</w:rPr></w:rPrDefault><w:pPrDefault><w:pPr>");
    xml.push_str("<w:spacing w:after=\"120\" w:line=\"276\" w:lineRule=\"auto\"/>");
    xml.push_str("</w:pPr></w:pPrDefault></w:docDefaults>");

    for style in &styles {
        xml.push_str(&style.to_xml());
    }

    xml.push_str(&format!(
        "<w:style w:type=\"table\" w:styleId=\"{}\"><w:name w:val=\"Table Grid\"/>\
         <w:tblPr><w:tblBorders>\
         <w:top w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
         <w:left w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
         <w:bottom w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
         <w:right w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
         <w:insideH w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
         <w:insideV w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
         </w:tblBorders></w:tblPr></w:style>",
        STYLE_TABLE_GRID
    ));

    xml.push_str("</w:styles>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_uses_the_theme_family() {
        let theme = StyleTheme {
            font_family: "Arial".to_string(),
            ..StyleTheme::default()
        };
        let xml = styles_xml(&theme);

        assert!(!xml.contains("Calibri"));
        assert!(xml.contains("w:eastAsia=\"Arial\""));
        // docDefaults plus Normal, Title and three headings
        assert_eq!(xml.matches("w:ascii=\"Arial\"").count(), 6);
    }

    #[test]
    fn title_is_larger_and_bold() {
        let xml = styles_xml(&StyleTheme::default());
        let title = &xml[xml.find("w:styleId=\"Title\"").unwrap()..];
        let title = &title[..title.find("</w:style>").unwrap()];

        assert!(title.contains("<w:b/>"));
        assert!(title.contains("<w:sz w:val=\"40\"/>"));
    }

    #[test]
    fn headings_are_bold_left_aligned_with_own_sizes() {
        let xml = styles_xml(&StyleTheme::default());
        for (id, size) in [("Heading1", 28), ("Heading2", 24)] {
            let start = xml.find(&format!("w:styleId=\"{}\"", id)).unwrap();
            let style = &xml[start..start + xml[start..].find("</w:style>").unwrap()];
            assert!(style.contains("<w:jc w:val=\"left\"/>"));
            assert!(style.contains("<w:b/>"));
            assert!(style.contains(&format!("<w:sz w:val=\"{}\"/>", size)));
        }
    }

    #[test]
    fn styles_xml_is_well_formed() {
        let xml = styles_xml(&StyleTheme::default());
        roxmltree::Document::parse(&xml).unwrap();
    }
}

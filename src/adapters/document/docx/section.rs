//! Section properties (`w:sectPr`): page geometry, header reference and the
//! line numbering directive.

use crate::domain::document::{LineNumbering, SectionProperties};

/// A4 page, 2.54 cm margins, in twips.
pub(crate) const PAGE_WIDTH: u32 = 11_906;
pub(crate) const PAGE_HEIGHT: u32 = 16_838;
pub(crate) const PAGE_MARGIN: u32 = 1_440;
const HEADER_DISTANCE: u32 = 708;

/// Usable text width between the margins, in twips.
pub(crate) fn content_width() -> u32 {
    PAGE_WIDTH - 2 * PAGE_MARGIN
}

/// `w:lnNumType` for a numbering directive.
///
/// `w:start` is zero-based in WordprocessingML: a first printed number of 1 is
/// written as 0.
pub(crate) fn line_numbering_xml(numbering: &LineNumbering) -> String {
    format!(
        "<w:lnNumType w:countBy=\"{}\" w:start=\"{}\" w:restart=\"continuous\"/>",
        numbering.count_by.max(1),
        numbering.start.saturating_sub(1),
    )
}

/// Full `w:sectPr` for one section.
///
/// Every section after the first starts continuously, on the same page.
pub(crate) fn section_xml(
    properties: &SectionProperties,
    index: usize,
    header_rel_id: Option<&str>,
) -> String {
    let mut xml = String::from("<w:sectPr>");

    if let Some(rel_id) = header_rel_id {
        xml.push_str(&format!(
            "<w:headerReference w:type=\"default\" r:id=\"{}\"/>",
            rel_id
        ));
    }
    if index > 0 {
        xml.push_str("<w:type w:val=\"continuous\"/>");
    }

    xml.push_str(&format!(
        "<w:pgSz w:w=\"{}\" w:h=\"{}\"/>",
        PAGE_WIDTH, PAGE_HEIGHT
    ));
    xml.push_str(&format!(
        "<w:pgMar w:top=\"{m}\" w:right=\"{m}\" w:bottom=\"{m}\" w:left=\"{m}\" \
         w:header=\"{h}\" w:footer=\"{h}\" w:gutter=\"0\"/>",
        m = PAGE_MARGIN,
        h = HEADER_DISTANCE
    ));

    if let Some(numbering) = &properties.line_numbering {
        xml.push_str(&line_numbering_xml(numbering));
    }

    xml.push_str("</w:sectPr>");
    xml
}

//! WordprocessingML markup helpers: namespaces, escaping, unit conversion, runs.

use crate::domain::document::Alignment;

pub(crate) const XML_DECLARATION: &str =
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

pub(crate) const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub(crate) const R_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub(crate) const WP_NS: &str =
    "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
pub(crate) const A_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub(crate) const PIC_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";

const EMU_PER_INCH: f32 = 914_400.0;
const TWIPS_PER_CM: f32 = 1440.0 / 2.54;

/// Escape special XML characters and drop characters XML 1.0 forbids.
pub(crate) fn xml_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' | '\n' | '\r' => escaped.push(c),
            c if c.is_control() || !is_xml_char(c) => {}
            c => escaped.push(c),
        }
    }
    escaped
}

/// The XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}

/// Font size in half-points, the unit of `w:sz`.
pub(crate) fn half_points(pt: f32) -> u32 {
    (pt * 2.0).round().max(1.0) as u32
}

pub(crate) fn cm_to_twips(cm: f32) -> u32 {
    (cm * TWIPS_PER_CM).round().max(0.0) as u32
}

pub(crate) fn inches_to_emu(inches: f32) -> u64 {
    (inches * EMU_PER_INCH).round().max(0.0) as u64
}

/// Value of `w:jc` for an alignment.
pub(crate) fn justification(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        Alignment::Justify => "both",
    }
}

/// One run holding `text`; newlines become `w:br` and tabs `w:tab`.
///
/// Returns an empty string for empty text so spacer paragraphs carry no run.
pub(crate) fn text_run(text: &str, bold: bool) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut run = String::from("<w:r>");
    if bold {
        run.push_str("<w:rPr><w:b/><w:bCs/></w:rPr>");
    }

    for (index, line) in text.lines().enumerate() {
        if index > 0 {
            run.push_str("<w:br/>");
        }
        for (piece_index, piece) in line.split('\t').enumerate() {
            if piece_index > 0 {
                run.push_str("<w:tab/>");
            }
            if !piece.is_empty() {
                run.push_str("<w:t xml:space=\"preserve\">");
                run.push_str(&xml_escape(piece));
                run.push_str("</w:t>");
            }
        }
    }

    run.push_str("</w:r>");
    run
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(
            xml_escape("Song & Dance <Test> \"q\" 'a'"),
            "Song &amp; Dance &lt;Test&gt; &quot;q&quot; &apos;a&apos;"
        );
    }

    #[test]
    fn escape_drops_forbidden_control_characters() {
        assert_eq!(xml_escape("a\u{0}b\u{7}c"), "abc");
        assert_eq!(xml_escape("ção"), "ção");
    }

    #[test]
    fn escape_drops_noncharacters_outside_xml_char_range() {
        assert_eq!(xml_escape("a\u{FFFE}b\u{FFFF}c"), "abc");
        assert_eq!(xml_escape("\u{FFFD}\u{1F600}"), "\u{FFFD}\u{1F600}");
    }

    #[test]
    fn escaped_text_always_parses() {
        let raw: String = ['x', '\u{1}', '\u{FFFE}', '\u{B}', 'é', '\u{FFFF}', '\u{10FFFF}']
            .iter()
            .collect();
        let xml = format!("<r>{}</r>", xml_escape(&raw));
        assert!(roxmltree::Document::parse(&xml).is_ok());
    }

    #[test]
    fn unit_conversions() {
        assert_eq!(half_points(11.0), 22);
        assert_eq!(half_points(20.0), 40);
        assert_eq!(cm_to_twips(0.8), 454);
        assert_eq!(inches_to_emu(1.2), 1_097_280);
    }

    #[test]
    fn run_turns_newlines_into_breaks() {
        let run = text_run("a\n\nb", false);
        assert_eq!(
            run,
            "<w:r><w:t xml:space=\"preserve\">a</w:t><w:br/><w:br/>\
             <w:t xml:space=\"preserve\">b</w:t></w:r>"
        );
    }

    #[test]
    fn bold_run_has_run_properties() {
        assert!(text_run("ACME", true).starts_with("<w:r><w:rPr><w:b/><w:bCs/></w:rPr>"));
    }

    #[test]
    fn empty_text_has_no_run() {
        assert_eq!(text_run("", true), "");
    }
}

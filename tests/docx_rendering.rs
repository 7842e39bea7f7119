//! End-to-end rendering tests: open the produced package and inspect its parts.

use std::io::{Cursor, Read};

use chrono::NaiveDate;
use image::{ImageBuffer, ImageFormat, Rgba};
use meeting_minutes::domain::minutes::{ActionItem, MeetingRecord, RenderOptions};
use meeting_minutes::ports::RenderWarning;
use meeting_minutes::render_minutes;

const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

// ════════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════════

fn part(bytes: &[u8], name: &str) -> Option<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let mut file = archive.by_name(name).ok()?;
    let mut out = String::new();
    file.read_to_string(&mut out).unwrap();
    Some(out)
}

fn part_names(bytes: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    archive.file_names().map(str::to_string).collect()
}

fn document_xml(bytes: &[u8]) -> String {
    part(bytes, "word/document.xml").expect("document part")
}

fn text_of(node: roxmltree::Node) -> String {
    node.descendants()
        .filter(|n| n.has_tag_name((W, "t")))
        .filter_map(|n| n.text())
        .collect()
}

/// Direct children of `w:body`.
fn body_children<'a>(doc: &'a roxmltree::Document<'a>) -> Vec<roxmltree::Node<'a, 'a>> {
    doc.descendants()
        .find(|n| n.has_tag_name((W, "body")))
        .unwrap()
        .children()
        .filter(|n| n.is_element())
        .collect()
}

fn has_child(node: roxmltree::Node, name: &str) -> bool {
    node.descendants().any(|n| n.has_tag_name((W, name)))
}

fn justified_paragraphs(xml: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(xml).unwrap();
    body_children(&doc)
        .into_iter()
        .filter(|p| {
            p.descendants()
                .any(|n| n.has_tag_name((W, "jc")) && n.attribute((W, "val")) == Some("both"))
        })
        .map(text_of)
        .collect()
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn full_record() -> MeetingRecord {
    MeetingRecord::new(date())
        .with_organization("Associação de Moradores")
        .with_title("Reunião Ordinária")
        .with_times("09:00", "10:30")
        .with_location("Sala 2")
        .with_chair("Ana")
        .with_secretary("Bruno")
        .with_attendees(["Ana", "Bruno", "Carla"])
        .with_agenda(["Orçamento", "Eventos"])
        .with_deliberations("Aprovado o orçamento.")
        .with_action_items([ActionItem::new("Review budget", "Ana", "2024-06-01")])
        .with_closing("Nada mais havendo a tratar, encerrou-se a reunião.")
        .with_signatories(["Ana", "Bruno"])
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = ImageBuffer::from_pixel(width, height, Rgba([0u8, 80, 160, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

// ════════════════════════════════════════════════════════════════════════════════
// Narrative content
// ════════════════════════════════════════════════════════════════════════════════

#[test]
fn minimal_narrative_has_exactly_two_body_paragraphs() {
    let record = MeetingRecord::new(date()).with_times("09:00", "");

    let rendered = render_minutes(&record, RenderOptions::narrative(), None).unwrap();
    let paragraphs = justified_paragraphs(&document_xml(&rendered.bytes));

    assert_eq!(paragraphs.len(), 2, "{:?}", paragraphs);
    assert!(paragraphs[0].starts_with("Ao 15 de março de 2024, às 09:00, realizou-se a"));
    assert!(paragraphs[0].ends_with("tendo como pauta: —."));
    assert!(paragraphs[1].starts_with("Estiveram presentes: —."));
}

#[test]
fn full_narrative_has_five_body_paragraphs() {
    let rendered = render_minutes(&full_record(), RenderOptions::narrative(), None).unwrap();
    let paragraphs = justified_paragraphs(&document_xml(&rendered.bytes));

    assert_eq!(paragraphs.len(), 5);
    assert!(paragraphs[0].contains("tendo como pauta: Orçamento; Eventos."));
    assert_eq!(
        paragraphs[4],
        "Nada mais havendo a tratar, encerrou-se a reunião."
    );
}

#[test]
fn title_is_upper_cased() {
    let rendered = render_minutes(&full_record(), RenderOptions::narrative(), None).unwrap();
    let xml = document_xml(&rendered.bytes);
    let doc = roxmltree::Document::parse(&xml).unwrap();

    assert_eq!(text_of(body_children(&doc)[0]), "REUNIÃO ORDINÁRIA");
}

// ════════════════════════════════════════════════════════════════════════════════
// Line numbering
// ════════════════════════════════════════════════════════════════════════════════

#[test]
fn numbering_starts_after_the_title() {
    let rendered = render_minutes(&full_record(), RenderOptions::structured(), None).unwrap();
    let xml = document_xml(&rendered.bytes);
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let children = body_children(&doc);

    let title = children[0];
    assert!(has_child(title, "sectPr"));
    assert!(!has_child(title, "lnNumType"));

    let final_section = *children.last().unwrap();
    assert!(final_section.has_tag_name((W, "sectPr")));
    let directive = final_section
        .children()
        .find(|n| n.has_tag_name((W, "lnNumType")))
        .expect("numbered body");
    assert_eq!(directive.attribute((W, "restart")), Some("continuous"));
    assert_eq!(directive.attribute((W, "countBy")), Some("1"));

    let section_count = doc
        .descendants()
        .filter(|n| n.has_tag_name((W, "sectPr")))
        .count();
    assert_eq!(section_count, 2);
}

#[test]
fn numbering_disabled_leaves_single_plain_section() {
    let options = RenderOptions::narrative().with_line_numbering(false);
    let rendered = render_minutes(&full_record(), options, None).unwrap();
    let xml = document_xml(&rendered.bytes);

    assert_eq!(xml.matches("<w:sectPr>").count(), 1);
    assert!(!xml.contains("lnNumType"));
}

#[test]
fn excluded_signatures_sit_in_an_unnumbered_section() {
    let options = RenderOptions::narrative().with_numbered_signatures(false);
    let rendered = render_minutes(&full_record(), options, None).unwrap();
    let xml = document_xml(&rendered.bytes);
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let sections: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name((W, "sectPr")))
        .collect();
    assert_eq!(sections.len(), 3);
    assert!(!has_child(sections[0], "lnNumType"));
    assert!(has_child(sections[1], "lnNumType"));
    assert!(!has_child(sections[2], "lnNumType"));
}

// ════════════════════════════════════════════════════════════════════════════════
// Structured content
// ════════════════════════════════════════════════════════════════════════════════

#[test]
fn action_table_rows_match_items() {
    let rendered = render_minutes(&full_record(), RenderOptions::structured(), None).unwrap();
    let xml = document_xml(&rendered.bytes);
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let rows: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name((W, "tr")))
        .collect();
    assert_eq!(rows.len(), 2);

    let cells: Vec<String> = rows[1]
        .children()
        .filter(|n| n.has_tag_name((W, "tc")))
        .map(text_of)
        .collect();
    assert_eq!(cells, vec!["Review budget", "Ana", "2024-06-01"]);
}

#[test]
fn no_table_without_action_items() {
    let record = MeetingRecord::new(date()).with_title("Reunião");
    let rendered = render_minutes(&record, RenderOptions::structured(), None).unwrap();

    assert!(!document_xml(&rendered.bytes).contains("<w:tbl>"));
}

#[test]
fn structured_headings_are_numbered_in_order() {
    let rendered = render_minutes(&full_record(), RenderOptions::structured(), None).unwrap();
    let xml = document_xml(&rendered.bytes);
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let headings: Vec<String> = body_children(&doc)
        .into_iter()
        .filter(|p| {
            p.descendants().any(|n| {
                n.has_tag_name((W, "pStyle")) && n.attribute((W, "val")) == Some("Heading1")
            })
        })
        .map(text_of)
        .collect();

    assert_eq!(
        headings,
        vec![
            "1. Meeting Identification",
            "2. Participants",
            "3. Agenda",
            "4. Deliberations",
            "5. Action Items",
            "6. Closing",
            "7. Signatures",
        ]
    );
}

// ════════════════════════════════════════════════════════════════════════════════
// Header and logo
// ════════════════════════════════════════════════════════════════════════════════

#[test]
fn header_shows_bold_organization() {
    let rendered = render_minutes(&full_record(), RenderOptions::default(), None).unwrap();
    let header = part(&rendered.bytes, "word/header1.xml").expect("header part");

    assert!(header.contains("Associação de Moradores"));
    assert!(header.contains("<w:b/>"));
    assert!(document_xml(&rendered.bytes).contains("<w:headerReference"));
}

#[test]
fn png_logo_is_embedded() {
    let logo = png(30, 10);
    let rendered = render_minutes(&full_record(), RenderOptions::default(), Some(&logo)).unwrap();

    assert!(rendered.warnings.is_empty());
    assert!(part_names(&rendered.bytes).contains(&"word/media/logo.png".to_string()));
    let header = part(&rendered.bytes, "word/header1.xml").unwrap();
    assert!(header.contains("<wp:extent cx=\"1097280\" cy=\"365760\"/>"));
}

#[test]
fn unusable_logo_degrades_to_text_header() {
    let rendered =
        render_minutes(&full_record(), RenderOptions::default(), Some(b"GIF89a-broken")).unwrap();

    assert!(matches!(
        rendered.warnings.as_slice(),
        [RenderWarning::LogoDiscarded { .. }]
    ));
    assert!(!part_names(&rendered.bytes)
        .iter()
        .any(|name| name.starts_with("word/media/")));
    let header = part(&rendered.bytes, "word/header1.xml").unwrap();
    assert!(header.contains("Associação de Moradores"));
    assert!(!header.contains("w:drawing"));
}

// ════════════════════════════════════════════════════════════════════════════════
// Package
// ════════════════════════════════════════════════════════════════════════════════

#[test]
fn identical_inputs_give_identical_bytes() {
    let logo = png(8, 8);
    let first = render_minutes(&full_record(), RenderOptions::default(), Some(&logo)).unwrap();
    let second = render_minutes(&full_record(), RenderOptions::default(), Some(&logo)).unwrap();

    assert_eq!(first.bytes, second.bytes);
}

#[test]
fn package_declares_wordprocessing_main_part() {
    let rendered = render_minutes(&full_record(), RenderOptions::default(), None).unwrap();
    let types = part(&rendered.bytes, "[Content_Types].xml").unwrap();

    assert!(types.contains(
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"
    ));
    assert!(part(&rendered.bytes, "docProps/core.xml")
        .unwrap()
        .contains("<dc:title>Reunião Ordinária</dc:title>"));
}

#[test]
fn noncharacters_in_record_text_keep_document_well_formed() {
    let record = full_record()
        .with_deliberations("Aprovado\u{FFFE} o orçamento\u{FFFF}")
        .with_location("Sala\u{1} 2");

    for options in [RenderOptions::structured(), RenderOptions::narrative()] {
        let rendered = render_minutes(&record, options, None).unwrap();
        let xml = document_xml(&rendered.bytes);
        let doc = roxmltree::Document::parse(&xml).expect("well-formed document.xml");

        assert!(doc
            .descendants()
            .filter(|n| n.has_tag_name((W, "t")))
            .any(|n| n.text().map_or(false, |t| t.contains("Aprovado o orçamento"))));
    }
}

#[test]
fn table_closing_the_numbered_section_adds_no_blank_lines() {
    let record = MeetingRecord::new(date())
        .with_title("Reunião")
        .with_action_items([ActionItem::new("Review budget", "Ana", "2024-06-01")]);
    let options = RenderOptions::structured().with_numbered_signatures(false);

    let rendered = render_minutes(&record, options, None).unwrap();
    let xml = document_xml(&rendered.bytes);
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let children = body_children(&doc);

    let table = children
        .iter()
        .position(|n| n.has_tag_name((W, "tbl")))
        .expect("action table");
    let after = children[table + 1];
    assert!(after.has_tag_name((W, "p")));
    assert!(text_of(after).is_empty());
    assert!(has_child(after, "lnNumType"), "numbered section ends right after the table");
    assert!(!has_child(children[table + 2], "sectPr"));
}

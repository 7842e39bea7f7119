//! `word/header1.xml`: optional logo above the organization name.

use crate::domain::document::Alignment;

use super::markup::{justification, text_run, xml_escape, A_NS, PIC_NS, R_NS, WP_NS, W_NS, XML_DECLARATION};
use super::media::LogoImage;
use super::styles::STYLE_HEADER;

/// Relationship id of the logo inside the header part.
pub(crate) const LOGO_REL_ID: &str = "rIdLogo1";

/// Build the header part. `logo` must already have been probed.
pub(crate) fn header_xml(
    logo: Option<&LogoImage>,
    organization: Option<&str>,
    logo_width_in: f32,
) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!(
        "<w:hdr xmlns:w=\"{}\" xmlns:r=\"{}\" xmlns:wp=\"{}\" xmlns:a=\"{}\" xmlns:pic=\"{}\">",
        W_NS, R_NS, WP_NS, A_NS, PIC_NS
    ));

    if let Some(logo) = logo {
        xml.push_str(&header_paragraph(Alignment::Left, &inline_picture(logo, logo_width_in)));
    }

    if let Some(name) = organization {
        xml.push_str(&header_paragraph(Alignment::Center, &text_run(name, true)));
    }

    // A header part must hold at least one block.
    if logo.is_none() && organization.is_none() {
        xml.push_str(&header_paragraph(Alignment::Left, ""));
    }

    xml.push_str("</w:hdr>");
    xml
}

/// Relationships of the header part: only the logo, when present.
pub(crate) fn header_rels_xml(logo: &LogoImage) -> String {
    format!(
        "{}<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
         <Relationship Id=\"{}\" \
         Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/image\" \
         Target=\"{}\"/></Relationships>",
        XML_DECLARATION,
        LOGO_REL_ID,
        xml_escape(&logo.part_name())
    )
}

fn header_paragraph(alignment: Alignment, content: &str) -> String {
    format!(
        "<w:p><w:pPr><w:pStyle w:val=\"{}\"/><w:jc w:val=\"{}\"/></w:pPr>{}</w:p>",
        STYLE_HEADER,
        justification(alignment),
        content
    )
}

fn inline_picture(logo: &LogoImage, width_in: f32) -> String {
    let (cx, cy) = logo.extent_emu(width_in);
    format!(
        "<w:r><w:drawing>\
         <wp:inline distT=\"0\" distB=\"0\" distL=\"0\" distR=\"0\">\
         <wp:extent cx=\"{cx}\" cy=\"{cy}\"/>\
         <wp:docPr id=\"1\" name=\"Logo\"/>\
         <wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect=\"1\"/></wp:cNvGraphicFramePr>\
         <a:graphic><a:graphicData uri=\"{pic}\">\
         <pic:pic>\
         <pic:nvPicPr><pic:cNvPr id=\"0\" name=\"logo.{ext}\"/><pic:cNvPicPr/></pic:nvPicPr>\
         <pic:blipFill><a:blip r:embed=\"{rel}\"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>\
         <pic:spPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
         <a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></pic:spPr>\
         </pic:pic></a:graphicData></a:graphic>\
         </wp:inline></w:drawing></w:r>",
        cx = cx,
        cy = cy,
        pic = PIC_NS,
        ext = logo.kind.extension(),
        rel = LOGO_REL_ID,
    )
}

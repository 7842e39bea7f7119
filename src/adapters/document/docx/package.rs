//! OPC packaging: content types, relationships, document properties and the
//! ZIP container.
//!
//! Part order, timestamps and compression are fixed so that identical models
//! produce byte-identical packages.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::domain::document::DocumentProperties;
use crate::ports::RenderError;

use super::markup::{xml_escape, W_NS, XML_DECLARATION};
use super::media::ImageKind;

const RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const CT_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const OFFICE_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const WML_CT: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml";

/// Relationship id of the header part inside `document.xml.rels`.
pub(crate) const HEADER_REL_ID: &str = "rIdHeader1";

/// Which optional parts the package carries.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PackageManifest {
    pub(crate) header: bool,
    pub(crate) image: Option<ImageKind>,
}

/// Ordered list of parts waiting to be zipped.
#[derive(Debug, Default)]
pub(crate) struct DocxPackage {
    parts: Vec<(String, Vec<u8>)>,
}

impl DocxPackage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.parts.push((name.into(), content.into()));
    }

    pub(crate) fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(name, _)| name.as_str())
    }

    /// Zip every part in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Serialization` if the archive cannot be written.
    pub(crate) fn finish(self) -> Result<Vec<u8>, RenderError> {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in &self.parts {
            zip.start_file(name.as_str(), options)
                .map_err(|e| RenderError::serialization(format!("{}: {}", name, e)))?;
            zip.write_all(content)
                .map_err(|e| RenderError::serialization(format!("{}: {}", name, e)))?;
        }

        let cursor = zip
            .finish()
            .map_err(|e| RenderError::serialization(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

/// `[Content_Types].xml`
pub(crate) fn content_types_xml(manifest: &PackageManifest) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!("<Types xmlns=\"{}\">", CT_NS));
    xml.push_str(
        "<Default Extension=\"rels\" \
         ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
         <Default Extension=\"xml\" ContentType=\"application/xml\"/>",
    );
    if let Some(kind) = manifest.image {
        xml.push_str(&format!(
            "<Default Extension=\"{}\" ContentType=\"{}\"/>",
            kind.extension(),
            kind.content_type()
        ));
    }

    let mut overrides = vec![
        ("/word/document.xml", format!("{}.document.main+xml", WML_CT)),
        ("/word/styles.xml", format!("{}.styles+xml", WML_CT)),
        ("/word/numbering.xml", format!("{}.numbering+xml", WML_CT)),
        ("/word/settings.xml", format!("{}.settings+xml", WML_CT)),
    ];
    if manifest.header {
        overrides.push(("/word/header1.xml", format!("{}.header+xml", WML_CT)));
    }
    overrides.push((
        "/docProps/core.xml",
        "application/vnd.openxmlformats-package.core-properties+xml".to_string(),
    ));
    overrides.push((
        "/docProps/app.xml",
        "application/vnd.openxmlformats-officedocument.extended-properties+xml".to_string(),
    ));

    for (part, content_type) in overrides {
        xml.push_str(&format!(
            "<Override PartName=\"{}\" ContentType=\"{}\"/>",
            part, content_type
        ));
    }

    xml.push_str("</Types>");
    xml
}

/// `_rels/.rels`
pub(crate) fn root_rels_xml() -> String {
    relationships(&[
        ("rId1", format!("{}/officeDocument", OFFICE_REL), "word/document.xml"),
        (
            "rId2",
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties"
                .to_string(),
            "docProps/core.xml",
        ),
        ("rId3", format!("{}/extended-properties", OFFICE_REL), "docProps/app.xml"),
    ])
}

/// `word/_rels/document.xml.rels`
pub(crate) fn document_rels_xml(manifest: &PackageManifest) -> String {
    let mut rels = vec![
        ("rId1", format!("{}/styles", OFFICE_REL), "styles.xml"),
        ("rId2", format!("{}/numbering", OFFICE_REL), "numbering.xml"),
        ("rId3", format!("{}/settings", OFFICE_REL), "settings.xml"),
    ];
    if manifest.header {
        rels.push((HEADER_REL_ID, format!("{}/header", OFFICE_REL), "header1.xml"));
    }
    relationships(&rels)
}

fn relationships(entries: &[(&str, String, &str)]) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!("<Relationships xmlns=\"{}\">", RELS_NS));
    for (id, kind, target) in entries {
        xml.push_str(&format!(
            "<Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"/>",
            id, kind, target
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

/// `word/settings.xml`
pub(crate) fn settings_xml() -> String {
    format!(
        "{}<w:settings xmlns:w=\"{}\"><w:defaultTabStop w:val=\"708\"/>\
         <w:characterSpacingControl w:val=\"doNotCompress\"/>\
         <w:compat><w:compatSetting w:name=\"compatibilityMode\" \
         w:uri=\"http://schemas.microsoft.com/office/word\" w:val=\"15\"/></w:compat>\
         </w:settings>",
        XML_DECLARATION, W_NS
    )
}

/// `docProps/core.xml`. No timestamps, so output stays reproducible.
pub(crate) fn core_properties_xml(properties: &DocumentProperties) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(
        "<cp:coreProperties \
         xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
         xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
         xmlns:dcterms=\"http://purl.org/dc/terms/\" \
         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">",
    );
    xml.push_str(&format!("<dc:title>{}</dc:title>", xml_escape(&properties.title)));
    if let Some(organization) = &properties.organization {
        xml.push_str(&format!("<dc:creator>{}</dc:creator>", xml_escape(organization)));
    }
    xml.push_str("<dc:language>pt-BR</dc:language>");
    xml.push_str("</cp:coreProperties>");
    xml
}

/// `docProps/app.xml`
pub(crate) fn app_properties_xml(properties: &DocumentProperties) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(
        "<Properties \
         xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\">",
    );
    xml.push_str(&format!("<Application>{}</Application>", env!("CARGO_PKG_NAME")));
    if let Some(organization) = &properties.organization {
        xml.push_str(&format!("<Company>{}</Company>", xml_escape(organization)));
    }
    xml.push_str("</Properties>");
    xml
}

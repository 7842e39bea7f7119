//! `word/numbering.xml` - bullet and decimal list definitions.
//!
//! Bulleted lists share one numbering instance. Every numbered list gets its own
//! instance restarting at 1, so two agendas never continue each other's count.

use super::markup::{W_NS, XML_DECLARATION};

const BULLET_ABSTRACT_ID: u32 = 0;
const DECIMAL_ABSTRACT_ID: u32 = 1;
const BULLET_NUM_ID: u32 = 1;

/// Hands out `w:numId` values while the body is written.
#[derive(Debug, Default)]
pub(crate) struct NumberingRegistry {
    numbered_lists: Vec<u32>,
}

impl NumberingRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// numId shared by all bulleted lists.
    pub(crate) fn bullet(&self) -> u32 {
        BULLET_NUM_ID
    }

    /// Fresh numId for a new numbered list.
    pub(crate) fn next_numbered(&mut self) -> u32 {
        let id = BULLET_NUM_ID + 1 + self.numbered_lists.len() as u32;
        self.numbered_lists.push(id);
        id
    }

    /// Build `word/numbering.xml` with every instance handed out so far.
    pub(crate) fn to_xml(&self) -> String {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str(&format!("<w:numbering xmlns:w=\"{}\">", W_NS));

        xml.push_str(&abstract_num(BULLET_ABSTRACT_ID, "bullet", "•"));
        xml.push_str(&abstract_num(DECIMAL_ABSTRACT_ID, "decimal", "%1."));

        xml.push_str(&format!(
            "<w:num w:numId=\"{}\"><w:abstractNumId w:val=\"{}\"/></w:num>",
            BULLET_NUM_ID, BULLET_ABSTRACT_ID
        ));
        for id in &self.numbered_lists {
            xml.push_str(&format!(
                "<w:num w:numId=\"{}\"><w:abstractNumId w:val=\"{}\"/>\
                 <w:lvlOverride w:ilvl=\"0\"><w:startOverride w:val=\"1\"/></w:lvlOverride>\
                 </w:num>",
                id, DECIMAL_ABSTRACT_ID
            ));
        }

        xml.push_str("</w:numbering>");
        xml
    }
}

fn abstract_num(id: u32, format: &str, text: &str) -> String {
    format!(
        "<w:abstractNum w:abstractNumId=\"{id}\">\
         <w:multiLevelType w:val=\"singleLevel\"/>\
         <w:lvl w:ilvl=\"0\"><w:start w:val=\"1\"/><w:numFmt w:val=\"{format}\"/>\
         <w:lvlText w:val=\"{text}\"/><w:lvlJc w:val=\"left\"/>\
         <w:pPr><w:ind w:left=\"720\" w:hanging=\"360\"/></w:pPr></w:lvl>\
         </w:abstractNum>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_lists_get_distinct_ids_after_bullets() {
        let mut registry = NumberingRegistry::new();
        assert_eq!(registry.bullet(), 1);
        assert_eq!(registry.next_numbered(), 2);
        assert_eq!(registry.next_numbered(), 3);
        assert_eq!(registry.bullet(), 1);
    }

    #[test]
    fn numbered_instances_restart_at_one() {
        let mut registry = NumberingRegistry::new();
        registry.next_numbered();
        let xml = registry.to_xml();

        assert!(xml.contains("<w:num w:numId=\"2\">"));
        assert!(xml.contains("<w:startOverride w:val=\"1\"/>"));
        roxmltree::Document::parse(&xml).unwrap();
    }

    #[test]
    fn abstract_definitions_precede_instances() {
        let xml = NumberingRegistry::new().to_xml();
        let last_abstract = xml.rfind("<w:abstractNum ").unwrap();
        let first_num = xml.find("<w:num ").unwrap();
        assert!(last_abstract < first_num);
    }
}

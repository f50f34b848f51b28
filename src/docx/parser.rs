//! DOCX parser implementation.

use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use crate::container::OoxmlContainer;
use crate::error::{Error, Result};
use crate::model::Paragraph;

/// Main document part inside a DOCX package.
const DOCUMENT_PART: &str = "word/document.xml";

/// Parser for DOCX (Word) documents.
///
/// Yields the paragraphs that sit directly in the document body, in
/// document order. Paragraphs inside tables, content controls, text boxes,
/// headers and footers are not body paragraphs and are skipped.
#[derive(Debug)]
pub struct DocxParser {
    container: OoxmlContainer,
}

impl DocxParser {
    /// Open a DOCX file for parsing.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let container = OoxmlContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = OoxmlContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    /// Create a parser from a container.
    pub fn from_container(container: OoxmlContainer) -> Result<Self> {
        if !container.exists(DOCUMENT_PART) {
            return Err(Error::MissingComponent(DOCUMENT_PART.to_string()));
        }
        Ok(Self { container })
    }

    /// Parse the body paragraphs of the document.
    pub fn paragraphs(&self) -> Result<Vec<Paragraph>> {
        let xml = self.container.read_xml(DOCUMENT_PART)?;
        let paragraphs = parse_body_paragraphs(&xml)?;
        debug!(paragraphs = paragraphs.len(), "parsed document body");
        Ok(paragraphs)
    }
}

/// Where the reader currently is relative to the paragraph being collected.
///
/// Depths are lengths of the open-element stack, so a direct child of an
/// element opened at depth `d` is opened at depth `d + 1`.
#[derive(Debug, Default)]
struct Cursor {
    paragraph: Option<(usize, Paragraph)>,
    hyperlink_depth: Option<usize>,
    run_depth: Option<usize>,
}

impl Cursor {
    fn paragraph_depth(&self) -> Option<usize> {
        self.paragraph.as_ref().map(|(depth, _)| *depth)
    }

    /// A run counts when it is a direct child of the paragraph or of a
    /// hyperlink that is itself a direct child of the paragraph.
    fn accepts_run(&self, depth: usize) -> bool {
        match self.paragraph_depth() {
            Some(p) => depth == p + 1 || self.hyperlink_depth == Some(depth - 1),
            None => false,
        }
    }

    fn push_run_text(&mut self, text: &str) {
        if let Some((_, para)) = self.paragraph.as_mut() {
            para.push_str(text);
        }
    }
}

/// Parse `word/document.xml` into body paragraphs.
pub fn parse_body_paragraphs(xml: &str) -> Result<Vec<Paragraph>> {
    let mut reader = quick_xml::Reader::from_str(xml);
    // Whitespace inside w:t is content
    reader.config_mut().trim_text(false);

    let mut paragraphs = Vec::new();
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut cursor = Cursor::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let parent = stack.last().map(Vec::as_slice);
                let depth = stack.len() + 1;
                match e.name().as_ref() {
                    b"w:p" if parent == Some(b"w:body".as_slice()) => {
                        cursor.paragraph = Some((depth, Paragraph::new()));
                    }
                    b"w:hyperlink" if cursor.paragraph_depth() == Some(depth - 1) => {
                        cursor.hyperlink_depth = Some(depth);
                    }
                    b"w:r" if cursor.accepts_run(depth) => {
                        cursor.run_depth = Some(depth);
                    }
                    _ => {}
                }
                stack.push(e.name().as_ref().to_vec());
            }
            Ok(Event::Empty(ref e)) => {
                let parent = stack.last().map(Vec::as_slice);
                let depth = stack.len() + 1;
                if e.name().as_ref() == b"w:p" && parent == Some(b"w:body".as_slice()) {
                    paragraphs.push(Paragraph::new());
                } else if cursor.run_depth == Some(depth - 1) {
                    if let Some(text) = run_child_text(e) {
                        cursor.push_run_text(text);
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                if is_run_text(&stack, cursor.run_depth) {
                    let text = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                    cursor.push_run_text(&text);
                }
            }
            Ok(Event::CData(ref e)) => {
                if is_run_text(&stack, cursor.run_depth) {
                    cursor.push_run_text(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::End(_)) => {
                let depth = stack.len();
                stack.pop();
                if cursor.run_depth == Some(depth) {
                    cursor.run_depth = None;
                } else if cursor.hyperlink_depth == Some(depth) {
                    cursor.hyperlink_depth = None;
                } else if cursor.paragraph_depth() == Some(depth) {
                    if let Some((_, para)) = cursor.paragraph.take() {
                        paragraphs.push(para);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

/// Text is collected only from `w:t` elements directly inside an accepted run.
fn is_run_text(stack: &[Vec<u8>], run_depth: Option<usize>) -> bool {
    run_depth.is_some_and(|d| stack.len() == d + 1)
        && stack.last().is_some_and(|name| name.as_slice() == b"w:t")
}

/// Text contributed by an empty element inside a run.
fn run_child_text(e: &BytesStart) -> Option<&'static str> {
    match e.name().as_ref() {
        b"w:tab" | b"w:ptab" => Some("\t"),
        b"w:cr" => Some("\n"),
        b"w:noBreakHyphen" => Some("-"),
        // Page and column breaks carry no text
        b"w:br" => match get_attr(e, b"w:type").as_deref() {
            None | Some("textWrapping") => Some("\n"),
            Some(_) => None,
        },
        _ => None,
    }
}

/// Helper to get an attribute value as a string.
fn get_attr(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{build_zip, docx_with_body, docx_with_paragraphs};

    fn texts(body: &str) -> Vec<String> {
        let parser = DocxParser::from_bytes(docx_with_body(body)).unwrap();
        parser
            .paragraphs()
            .unwrap()
            .into_iter()
            .map(|p| p.text)
            .collect()
    }

    #[test]
    fn test_simple_paragraphs() {
        let data = docx_with_paragraphs(&["1 Introduction", "Body text", "1.1 Background"]);
        let parser = DocxParser::from_bytes(data).unwrap();
        let paragraphs = parser.paragraphs().unwrap();

        let texts: Vec<_> = paragraphs.iter().map(Paragraph::plain_text).collect();
        assert_eq!(texts, vec!["1 Introduction", "Body text", "1.1 Background"]);
    }

    #[test]
    fn test_runs_are_concatenated() {
        let body = r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>1.1</w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve"> Back</w:t></w:r><w:r><w:t>ground</w:t></w:r></w:p>"#;
        assert_eq!(texts(body), vec!["1.1 Background"]);
    }

    #[test]
    fn test_tabs_and_breaks() {
        let body = r#"<w:p><w:r><w:t>1</w:t><w:tab/><w:t>Intro</w:t><w:br/><w:t>Next</w:t><w:br w:type="page"/></w:r></w:p>"#;
        assert_eq!(texts(body), vec!["1\tIntro\nNext"]);
    }

    #[test]
    fn test_tab_stops_are_not_text() {
        let body = r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>2 Method</w:t></w:r></w:p>"#;
        assert_eq!(texts(body), vec!["2 Method"]);
    }

    #[test]
    fn test_hyperlink_text_is_included() {
        let body = r#"<w:p><w:r><w:t xml:space="preserve">1 See </w:t></w:r><w:hyperlink r:id="rId4"><w:r><w:t>Appendix</w:t></w:r></w:hyperlink></w:p>"#;
        assert_eq!(texts(body), vec!["1 See Appendix"]);
    }

    #[test]
    fn test_field_codes_and_deleted_text_are_skipped() {
        let body = r#"<w:p><w:r><w:instrText> TOC \o "1-3" </w:instrText></w:r><w:r><w:delText>old</w:delText></w:r><w:r><w:t>3 Results</w:t></w:r></w:p>"#;
        assert_eq!(texts(body), vec!["3 Results"]);
    }

    #[test]
    fn test_table_paragraphs_are_skipped() {
        let body = r#"<w:p><w:r><w:t>1 Before</w:t></w:r></w:p><w:tbl><w:tr><w:tc><w:p><w:r><w:t>1.1 In table</w:t></w:r></w:p></w:tc></w:tr></w:tbl><w:p><w:r><w:t>2 After</w:t></w:r></w:p>"#;
        assert_eq!(texts(body), vec!["1 Before", "2 After"]);
    }

    #[test]
    fn test_text_box_content_is_skipped() {
        let body = r#"<w:p><w:r><w:t>1 Main</w:t></w:r><w:r><w:drawing><wps:txbx><w:txbxContent><w:p><w:r><w:t>9 Boxed</w:t></w:r></w:p></w:txbxContent></wps:txbx></w:drawing></w:r></w:p>"#;
        assert_eq!(texts(body), vec!["1 Main"]);
    }

    #[test]
    fn test_empty_paragraphs_and_entities() {
        let body = r#"<w:p/><w:p><w:r><w:t>1 R&amp;D</w:t></w:r></w:p><w:sectPr/>"#;
        assert_eq!(texts(body), vec!["", "1 R&D"]);
    }

    #[test]
    fn test_non_ascii_text() {
        let body = r#"<w:p><w:r><w:t>1 引言</w:t></w:r></w:p>"#;
        assert_eq!(texts(body), vec!["1 引言"]);
    }

    #[test]
    fn test_missing_document_part() {
        let data = build_zip(&[("[Content_Types].xml", "<Types/>")]);
        let result = DocxParser::from_bytes(data);
        assert!(matches!(result, Err(Error::MissingComponent(_))));
    }

    #[test]
    fn test_malformed_xml() {
        let result = parse_body_paragraphs("<w:document><w:body><w:p></w:body>");
        assert!(matches!(result, Err(Error::XmlParse(_))));
    }
}

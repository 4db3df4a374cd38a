use crate::common::{read_part, tender_request};
use procdoc_export::formats::docx::model::{ParagraphStyle, RunContent};
use procdoc_export::formats::DocxFormat;
use procdoc_export::{ExportRequest, FrontMatter};

fn body_only() -> FrontMatter {
    FrontMatter {
        cover: false,
        toc: false,
    }
}

#[test]
fn test_heading_then_formatted_paragraph() {
    let request = ExportRequest::new("# Title\nHello **world**\nNext line");
    let doc = DocxFormat::default().document(&request, body_only());

    // generated title, then the markdown
    assert_eq!(doc.body.len(), 3);

    let heading = doc.body[1].as_paragraph().unwrap();
    assert_eq!(heading.style, Some(ParagraphStyle::Heading(1)));
    let bookmark = heading.bookmark().unwrap();
    assert_eq!(bookmark.name, "section1");
    assert_eq!(heading.text(), "Title");

    let runs: Vec<(RunContent, bool)> = doc.body[2]
        .as_paragraph()
        .unwrap()
        .runs()
        .into_iter()
        .map(|run| (run.content.clone(), run.bold))
        .collect();
    assert_eq!(
        runs,
        vec![
            (RunContent::Text("Hello ".to_string()), false),
            (RunContent::Text("world".to_string()), true),
            (RunContent::Break, false),
            (RunContent::Text("Next line".to_string()), false),
        ]
    );
}

#[test]
fn test_document_xml_runs() {
    let request = ExportRequest::new("Hello **world**");
    let bytes = DocxFormat::default().render(&request, body_only()).unwrap();
    let xml = read_part(&bytes, "word/document.xml");
    assert!(xml.contains(
        r#"<w:r><w:rPr><w:b/><w:sz w:val="20"/><w:szCs w:val="20"/></w:rPr><w:t xml:space="preserve">world</w:t></w:r>"#
    ));
}

#[test]
fn test_code_block_lines_keep_blank_line() {
    let doc = DocxFormat::default().document(&tender_request(), body_only());
    let code = doc
        .body
        .iter()
        .filter_map(|element| element.as_paragraph())
        .find(|p| p.text().starts_with("REPORT-001"))
        .expect("code paragraph");
    assert_eq!(code.text(), "REPORT-001\nREPORT-002\n\nREPORT-010");
    assert!(code
        .runs()
        .iter()
        .filter(|run| !run.is_break())
        .all(|run| run.font.as_deref() == Some("Courier New")));
}

#[test]
fn test_blockquote_is_muted_and_indented() {
    let doc = DocxFormat::default().document(&tender_request(), body_only());
    let quote = doc
        .body
        .iter()
        .filter_map(|element| element.as_paragraph())
        .find(|p| p.text() == "All reports are submitted in two copies.")
        .expect("quote paragraph");
    assert_eq!(quote.indent_left, Some(720));
    assert!(quote
        .runs()
        .iter()
        .all(|run| run.color.as_deref() == Some("666666")));
    assert!(quote.runs().iter().any(|run| run.bold));
}

#[test]
fn test_rule_is_decorative_line() {
    let doc = DocxFormat::default().document(&tender_request(), body_only());
    assert!(doc
        .body
        .iter()
        .filter_map(|element| element.as_paragraph())
        .any(|p| p.text() == "─".repeat(50)));
}

#[test]
fn test_translation_is_idempotent() {
    let request = tender_request();
    let first = DocxFormat::default().render(&request, FrontMatter::default()).unwrap();
    let second = DocxFormat::default().render(&request, FrontMatter::default()).unwrap();
    assert_eq!(
        read_part(&first, "word/document.xml"),
        read_part(&second, "word/document.xml")
    );
}

use crate::common::{part_names, read_part, tender_request};
use procdoc_export::format::Format;
use procdoc_export::formats::DocxFormat;
use procdoc_export::{export_markdown_to_word, FrontMatter, ProjectInfo};

fn tender_package() -> Vec<u8> {
    DocxFormat::default()
        .render(&tender_request(), FrontMatter::default())
        .expect("render docx")
}

#[test]
fn test_package_has_all_parts() {
    let names = part_names(&tender_package());
    assert_eq!(names[0], "[Content_Types].xml");
    for part in [
        "_rels/.rels",
        "word/document.xml",
        "word/styles.xml",
        "word/numbering.xml",
        "word/settings.xml",
        "word/_rels/document.xml.rels",
        "docProps/core.xml",
        "docProps/app.xml",
    ] {
        assert!(names.iter().any(|n| n == part), "missing {part}");
    }
}

#[test]
fn test_cover_table_lists_project_info() {
    let xml = read_part(&tender_package(), "word/document.xml");
    for text in [
        "Street Lighting 2025",
        "City Works Department",
        "2025-01 to 2025-12",
        "North District",
        "2025-02-14",
        "Table of Contents",
    ] {
        assert!(xml.contains(text), "document.xml lacks {text}");
    }
}

#[test]
fn test_front_matter_precedes_page_break() {
    let xml = read_part(&tender_package(), "word/document.xml");
    let toc = xml.find("Table of Contents").unwrap();
    let page_break = xml.find(r#"<w:br w:type="page"/>"#).unwrap();
    let first_heading = xml.find(r#"w:name="section1""#).unwrap();
    assert!(toc < page_break);
    assert!(page_break < first_heading);
}

#[test]
fn test_core_properties_carry_title() {
    let core = read_part(&tender_package(), "docProps/core.xml");
    assert!(core.contains("<dc:title>Street Lighting 2025</dc:title>"));
}

#[test]
fn test_bullets_are_numbered_not_ordered_items() {
    let xml = read_part(&tender_package(), "word/document.xml");
    // four bullet items (one nested, flattened), two ordered items without numbering
    assert_eq!(xml.matches(r#"<w:numId w:val="1"/>"#).count(), 4);
    assert_eq!(xml.matches(r#"<w:pStyle w:val="ListParagraph"/>"#).count(), 6);
    assert!(!xml.contains("- Inspection"));
}

#[test]
fn test_front_matter_can_be_disabled() {
    let format = DocxFormat::default();
    let mut options = std::collections::HashMap::new();
    options.insert("cover".to_string(), "false".to_string());
    options.insert("toc".to_string(), "false".to_string());

    let bytes = format
        .serialize_with_options(&tender_request(), &options)
        .unwrap()
        .into_bytes();
    let xml = read_part(&bytes, "word/document.xml");
    assert!(!xml.contains("Table of Contents"));
    assert!(!xml.contains(r#"w:type="page""#));
    assert!(!xml.contains("City Works Department"));
}

#[test]
fn test_export_markdown_to_word_convenience() {
    let info = ProjectInfo::default().with_project_name("Quick");
    let bytes = export_markdown_to_word("# Hello\n\nWorld", &info).unwrap();
    let xml = read_part(&bytes, "word/document.xml");
    assert!(xml.contains("Hello"));
    assert!(xml.contains("World"));
}

#[test]
fn test_empty_markdown_still_exports() {
    let bytes = export_markdown_to_word("", &ProjectInfo::default()).unwrap();
    let xml = read_part(&bytes, "word/document.xml");
    assert!(xml.contains("Procurement Document"));
    assert!(!xml.contains("section1"));
}

#[test]
fn test_pasted_control_characters_do_not_reach_the_package() {
    let info = ProjectInfo::default().with_project_name("Bridge\u{0007} Works");
    let bytes = export_markdown_to_word("# Scope\u{0001}\n\npasted\u{000B}text", &info).unwrap();

    let document = read_part(&bytes, "word/document.xml");
    assert!(document.contains("pastedtext"));
    assert!(document.contains("Bridge Works"));
    let core = read_part(&bytes, "docProps/core.xml");
    assert!(core.contains("<dc:title>Bridge Works</dc:title>"));

    for xml in [document, core] {
        assert!(!xml
            .chars()
            .any(|ch| ch.is_control() && !matches!(ch, '\t' | '\n' | '\r')));
    }
}

use crate::common::{attribute_values, chapters_request, read_part, tender_request};
use procdoc_export::formats::DocxFormat;
use procdoc_export::FrontMatter;

fn section_bookmarks(xml: &str) -> Vec<String> {
    attribute_values(xml, "w:bookmarkStart", "w:name")
        .into_iter()
        .filter(|name| name.starts_with("section"))
        .collect()
}

#[test]
fn test_toc_targets_match_heading_bookmarks() {
    let bytes = DocxFormat::default()
        .render(&tender_request(), FrontMatter::default())
        .unwrap();
    let xml = read_part(&bytes, "word/document.xml");

    let targets = attribute_values(&xml, "w:hyperlink", "w:anchor");
    let bookmarks = section_bookmarks(&xml);

    assert_eq!(
        targets,
        vec!["section1", "section2", "section3", "section4", "section5"]
    );
    assert_eq!(targets, bookmarks);
}

#[test]
fn test_title_bookmark_is_outside_numbering() {
    let bytes = DocxFormat::default()
        .render(&tender_request(), FrontMatter::default())
        .unwrap();
    let xml = read_part(&bytes, "word/document.xml");

    let names = attribute_values(&xml, "w:bookmarkStart", "w:name");
    assert_eq!(names[0], "title");
    assert_eq!(names[1], "section1");
    let ids = attribute_values(&xml, "w:bookmarkStart", "w:id");
    assert_eq!(ids, vec!["0", "1", "2", "3", "4", "5"]);
}

#[test]
fn test_anchors_restart_for_every_export() {
    let format = DocxFormat::default();
    let first = format.document(&tender_request(), FrontMatter::default());
    let second = format.document(&tender_request(), FrontMatter::default());
    assert_eq!(first, second);
}

#[test]
fn test_chapters_are_ordered_before_numbering() {
    let doc = DocxFormat::default().document(
        &chapters_request(),
        FrontMatter {
            cover: false,
            toc: true,
        },
    );
    let toc: Vec<(String, String)> = doc
        .body
        .iter()
        .filter_map(|element| element.as_paragraph())
        .filter_map(|p| p.hyperlink().map(|link| (link.anchor.clone(), p.text())))
        .collect();
    assert_eq!(
        toc,
        vec![
            ("section1".to_string(), "Overview".to_string()),
            ("section2".to_string(), "Scope".to_string()),
            ("section3".to_string(), "Evaluation".to_string()),
        ]
    );
}

#[test]
fn test_toc_indent_follows_depth() {
    let doc = DocxFormat::default().document(
        &tender_request(),
        FrontMatter {
            cover: false,
            toc: true,
        },
    );
    let indents: Vec<Option<u32>> = doc
        .body
        .iter()
        .filter_map(|element| element.as_paragraph())
        .filter(|p| p.hyperlink().is_some())
        .map(|p| p.indent_left)
        .collect();
    // depths 1, 2, 2, 3, 1
    assert_eq!(
        indents,
        vec![Some(0), Some(440), Some(440), Some(880), Some(0)]
    );
}

use crate::common::fixture;
use procdoc_export::formats::docx::model::RunContent;
use procdoc_export::formats::markdown::{tokenize, MarkdownOptions};
use procdoc_export::formats::DocxFormat;
use procdoc_export::ir::nodes::Block;
use procdoc_export::{ExportRequest, FrontMatter};

/// Runs of the first markdown paragraph, as (content, bold).
fn first_paragraph_runs(markdown: &str) -> Vec<(RunContent, bool)> {
    let front_matter = FrontMatter {
        cover: false,
        toc: false,
    };
    let doc = DocxFormat::default().document(&ExportRequest::new(markdown), front_matter);
    // body[0] is the generated title
    doc.body[1]
        .as_paragraph()
        .expect("paragraph")
        .runs()
        .into_iter()
        .map(|run| (run.content.clone(), run.bold))
        .collect()
}

fn text(value: &str, bold: bool) -> (RunContent, bool) {
    (RunContent::Text(value.to_string()), bold)
}

#[test]
fn test_tender_block_sequence() {
    let blocks = tokenize(&fixture("tender.md"), &MarkdownOptions::default());
    let kinds: Vec<&str> = blocks.iter().map(Block::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "heading",
            "paragraph",
            "heading",
            "list",
            "list",
            "heading",
            "table",
            "heading",
            "blockquote",
            "code",
            "rule",
            "heading",
            "paragraph",
        ]
    );
}

#[test]
fn test_tender_paragraph_keeps_bold_markers_and_breaks() {
    let blocks = tokenize(&fixture("tender.md"), &MarkdownOptions::default());
    assert_eq!(
        blocks[1],
        Block::paragraph(
            "This tender covers the **maintenance** of municipal street lighting.\nWorks start after contract signature."
        )
    );
}

#[test]
fn test_nested_items_follow_parent() {
    let blocks = tokenize(&fixture("tender.md"), &MarkdownOptions::default());
    match &blocks[3] {
        Block::List { ordered, items } => {
            assert!(!ordered);
            assert_eq!(
                items,
                &vec![
                    "Inspection of all poles".to_string(),
                    "Replacement of **faulty** lamps".to_string(),
                    "LED retrofits where possible".to_string(),
                    "Monthly reporting".to_string(),
                ]
            );
        }
        other => panic!("expected list, got {other:?}"),
    }
    assert!(matches!(blocks[4], Block::List { ordered: true, .. }));
}

#[test]
fn test_heading_depths() {
    let blocks = tokenize(&fixture("tender.md"), &MarkdownOptions::default());
    let depths: Vec<usize> = blocks
        .iter()
        .filter_map(|block| match block {
            Block::Heading { depth, .. } => Some(*depth),
            _ => None,
        })
        .collect();
    assert_eq!(depths, vec![1, 2, 2, 3, 1]);
}

#[test]
fn test_tokenizing_twice_is_stable() {
    let source = fixture("tender.md");
    let options = MarkdownOptions::default();
    assert_eq!(tokenize(&source, &options), tokenize(&source, &options));
}

#[test]
fn test_nested_strong_is_one_bold_run() {
    assert_eq!(
        first_paragraph_runs("**a __b__ c**"),
        vec![text("a b c", true)]
    );
}

#[test]
fn test_escaped_asterisks_are_not_bold() {
    assert_eq!(
        first_paragraph_runs(r"price \*\*TBD\*\* now"),
        vec![text("price **TBD** now", false)]
    );
}

#[test]
fn test_markers_inside_code_spans_are_not_bold() {
    assert_eq!(
        first_paragraph_runs("use `**kwargs` and `**opts`"),
        vec![text("use **kwargs and **opts", false)]
    );
}

#[test]
fn test_bold_next_to_literal_underscores() {
    assert_eq!(
        first_paragraph_runs("set **max_size** to `__auto__`"),
        vec![
            text("set ", false),
            text("max_size", true),
            text(" to __auto__", false),
        ]
    );
}

#[test]
fn test_table_cells_keep_literal_markers() {
    let front_matter = FrontMatter {
        cover: false,
        toc: false,
    };
    let request = ExportRequest::new("| Key | Value |\n|---|---|\n| `**x**` | **y** |\n");
    let doc = DocxFormat::default().document(&request, front_matter);
    let table = doc.body[1].as_table().expect("table");
    assert_eq!(table.rows[1].cells[0].text(), "**x**");
    let value = &table.rows[1].cells[1].paragraphs[0];
    assert!(value.runs().iter().all(|run| run.bold));
    assert_eq!(value.text(), "y");
}

use procdoc_export::common::outline::Outline;
use procdoc_export::formats::docx::model::{BodyElement, DocumentProperties, WordDocument};
use procdoc_export::formats::docx::translate::BlockTranslator;
use procdoc_export::formats::docx::write_package;
use procdoc_export::formats::DocxStyle;
use procdoc_export::ir::nodes::{Block, TableBlock};

fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn ragged() -> Block {
    Block::Table(TableBlock {
        header: cells(&["A", "B", "C", "D"]),
        rows: vec![cells(&["1", "2"]), cells(&["only"]), vec![], cells(&["x", "y", "z"])],
    })
}

fn translate(block: &Block) -> Vec<BodyElement> {
    let style = DocxStyle::default();
    let blocks = vec![block.clone()];
    let outline = Outline::from_blocks(&blocks);
    BlockTranslator::new(&style, &outline).translate_blocks(&blocks)
}

#[test]
fn test_ragged_rows_are_sized_per_row() {
    let elements = translate(&ragged());
    let table = elements[0].as_table().unwrap();

    let widths: Vec<Vec<f64>> = table
        .rows
        .iter()
        .map(|row| row.cells.iter().map(|cell| cell.width_percent).collect())
        .collect();
    assert_eq!(
        widths,
        vec![
            vec![25.0; 4],
            vec![50.0; 2],
            vec![100.0],
            vec![100.0 / 3.0; 3],
        ]
    );
    assert!(table.rows[0].header);
    assert!(table.rows[1..].iter().all(|row| !row.header));
}

#[test]
fn test_ragged_table_packages() {
    let elements = translate(&ragged());
    let doc = WordDocument {
        properties: DocumentProperties {
            title: "Ragged".to_string(),
            created: chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        },
        body: elements,
    };
    let bytes = write_package(&doc, &DocxStyle::default()).unwrap();
    let xml = crate::common::read_part(&bytes, "word/document.xml");
    assert_eq!(xml.matches("<w:tr>").count(), 4);
    assert_eq!(xml.matches("<w:gridCol ").count(), 4);
    assert!(xml.contains(r#"<w:tcW w:w="2500" w:type="pct"/>"#));
    assert!(xml.contains(r#"<w:tcW w:w="5000" w:type="pct"/>"#));
}

#[test]
fn test_headerless_table_has_no_header_row() {
    let elements = translate(&Block::Table(TableBlock {
        header: vec![],
        rows: vec![cells(&["a", "b"])],
    }));
    let table = elements[0].as_table().unwrap();
    assert_eq!(table.rows.len(), 1);
    assert!(!table.rows[0].header);
}

#[test]
fn test_markdown_table_cells_are_inline_formatted() {
    use procdoc_export::formats::DocxFormat;
    use procdoc_export::{ExportRequest, FrontMatter};

    let request = ExportRequest::new("| Item | Qty |\n|---|---|\n| **Cable** | 4 |\n");
    let doc = DocxFormat::default().document(
        &request,
        FrontMatter {
            cover: false,
            toc: false,
        },
    );
    let table = doc.body[1].as_table().unwrap();
    let header_bold = table.rows[0].cells[0].paragraphs[0].runs()[0].bold;
    let cable = table.rows[1].cells[0].paragraphs[0].runs()[0];
    assert!(header_bold);
    assert_eq!(cable.text_content(), Some("Cable"));
    assert!(cable.bold);
    assert!(!table.rows[1].cells[1].paragraphs[0].runs()[0].bold);
}

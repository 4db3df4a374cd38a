//! OOXML package writer.
//!
//! Static parts are embedded as constants; `document.xml`, `styles.xml` and
//! `core.xml` are generated with `quick-xml` events so all text is escaped by
//! the writer. Characters XML 1.0 forbids (C0 controls other than tab, line
//! feed and carriage return, and the `U+FFFE`/`U+FFFF` noncharacters) are
//! dropped from text and attribute values. The package is assembled in memory
//! and returned as bytes.

use super::model::{
    Alignment, BodyElement, DocumentProperties, Inline, Paragraph, Run, RunContent, Table,
    WordDocument,
};
use super::style::DocxStyle;
use crate::error::FormatError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Usable width of an A4 page with 1" margins, in twips.
const TEXT_WIDTH_TWIPS: u32 = 9026;
const BULLET_NUM_ID: &str = "1";

const CONTENT_TYPES_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
<Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>
<Override PartName="/word/settings.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml"/>
<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
</Types>"#;

const PACKAGE_RELS_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>
<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings" Target="settings.xml"/>
</Relationships>"#;

const NUMBERING_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:abstractNum w:abstractNumId="0">
<w:multiLevelType w:val="hybridMultilevel"/>
<w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="&#8226;"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl>
<w:lvl w:ilvl="1"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="&#9702;"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="1440" w:hanging="360"/></w:pPr></w:lvl>
<w:lvl w:ilvl="2"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="&#9642;"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="2160" w:hanging="360"/></w:pPr></w:lvl>
</w:abstractNum>
<w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
</w:numbering>"#;

const SETTINGS_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:settings xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:defaultTabStop w:val="720"/>
<w:characterSpacingControl w:val="doNotCompress"/>
<w:compat><w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/></w:compat>
</w:settings>"#;

const APP_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">
<Application>procdoc</Application>
</Properties>"#;

/// Pack `doc` into a `.docx` archive.
pub fn write_package(doc: &WordDocument, style: &DocxStyle) -> Result<Vec<u8>, FormatError> {
    let document_xml = document_xml(doc)?;
    let styles_xml = styles_xml(style)?;
    let core_xml = core_xml(&doc.properties)?;

    let parts: [(&str, &[u8]); 9] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML),
        ("_rels/.rels", PACKAGE_RELS_XML),
        ("word/document.xml", &document_xml),
        ("word/styles.xml", &styles_xml),
        ("word/numbering.xml", NUMBERING_XML),
        ("word/settings.xml", SETTINGS_XML),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML),
        ("docProps/core.xml", &core_xml),
        ("docProps/app.xml", APP_XML),
    ];

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, bytes) in parts {
        zip.start_file(name, deflated)?;
        zip.write_all(bytes)?;
    }
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Thin wrapper over `quick_xml::Writer` for attribute-heavy markup.
struct XmlOut {
    writer: Writer<Vec<u8>>,
}

impl XmlOut {
    fn new() -> Result<Self, FormatError> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(XmlOut { writer })
    }

    fn element(name: &str, attrs: &[(&str, &str)]) -> BytesStart<'static> {
        let mut element = BytesStart::new(name.to_string());
        for &(key, value) in attrs {
            element.push_attribute((key, xml_safe(value).as_ref()));
        }
        element
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), FormatError> {
        self.writer
            .write_event(Event::Start(Self::element(name, attrs)))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), FormatError> {
        self.writer
            .write_event(Event::Empty(Self::element(name, attrs)))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<(), FormatError> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), FormatError> {
        let text = xml_safe(text);
        self.writer
            .write_event(Event::Text(BytesText::new(text.as_ref())))?;
        Ok(())
    }

    /// `<name attrs>text</name>`
    fn text_element(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> Result<(), FormatError> {
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn xml_safe(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&ch| is_xml_char(ch)).collect())
    }
}

fn document_xml(doc: &WordDocument) -> Result<Vec<u8>, FormatError> {
    let mut out = XmlOut::new()?;
    out.start("w:document", &[("xmlns:w", WORDML_NS), ("xmlns:r", REL_NS)])?;
    out.start("w:body", &[])?;

    for element in &doc.body {
        match element {
            BodyElement::Paragraph(paragraph) => write_paragraph(&mut out, paragraph)?,
            BodyElement::Table(table) => write_table(&mut out, table)?,
        }
    }

    out.start("w:sectPr", &[])?;
    out.empty("w:pgSz", &[("w:w", "11906"), ("w:h", "16838")])?;
    out.empty(
        "w:pgMar",
        &[
            ("w:top", "1440"),
            ("w:right", "1440"),
            ("w:bottom", "1440"),
            ("w:left", "1440"),
            ("w:header", "708"),
            ("w:footer", "708"),
            ("w:gutter", "0"),
        ],
    )?;
    out.end("w:sectPr")?;

    out.end("w:body")?;
    out.end("w:document")?;
    Ok(out.finish())
}

fn write_paragraph(out: &mut XmlOut, paragraph: &Paragraph) -> Result<(), FormatError> {
    out.start("w:p", &[])?;
    write_paragraph_properties(out, paragraph)?;

    for child in &paragraph.children {
        match child {
            Inline::Run(run) => write_run(out, run)?,
            Inline::Bookmark(bookmark) => {
                let id = bookmark.id.to_string();
                out.empty(
                    "w:bookmarkStart",
                    &[("w:id", &id), ("w:name", &bookmark.name)],
                )?;
                for run in &bookmark.runs {
                    write_run(out, run)?;
                }
                out.empty("w:bookmarkEnd", &[("w:id", &id)])?;
            }
            Inline::Hyperlink(link) => {
                out.start(
                    "w:hyperlink",
                    &[("w:anchor", &link.anchor), ("w:history", "1")],
                )?;
                for run in &link.runs {
                    write_run(out, run)?;
                }
                out.end("w:hyperlink")?;
            }
        }
    }

    out.end("w:p")
}

/// `w:pPr` children in schema order: pStyle, numPr, spacing, ind, jc.
fn write_paragraph_properties(out: &mut XmlOut, paragraph: &Paragraph) -> Result<(), FormatError> {
    let bullet = paragraph.list.filter(|list| !list.ordered);
    if paragraph.style.is_none()
        && bullet.is_none()
        && paragraph.spacing.is_none()
        && paragraph.indent_left.is_none()
        && paragraph.alignment.is_none()
    {
        return Ok(());
    }

    out.start("w:pPr", &[])?;
    if let Some(style) = paragraph.style {
        out.empty("w:pStyle", &[("w:val", &style.style_id())])?;
    }
    if let Some(list) = bullet {
        out.start("w:numPr", &[])?;
        out.empty("w:ilvl", &[("w:val", &list.level.to_string())])?;
        out.empty("w:numId", &[("w:val", BULLET_NUM_ID)])?;
        out.end("w:numPr")?;
    }
    if let Some(spacing) = paragraph.spacing {
        out.empty(
            "w:spacing",
            &[
                ("w:before", &spacing.before.to_string()),
                ("w:after", &spacing.after.to_string()),
            ],
        )?;
    }
    if let Some(indent) = paragraph.indent_left {
        out.empty("w:ind", &[("w:left", &indent.to_string())])?;
    }
    if let Some(alignment) = paragraph.alignment {
        let value = match alignment {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        };
        out.empty("w:jc", &[("w:val", value)])?;
    }
    out.end("w:pPr")
}

fn write_run(out: &mut XmlOut, run: &Run) -> Result<(), FormatError> {
    out.start("w:r", &[])?;

    let has_properties = run.bold
        || run.size.is_some()
        || run.font.is_some()
        || run.color.is_some()
        || run.character_style.is_some();
    if has_properties {
        // rStyle, rFonts, b, color, sz, szCs
        out.start("w:rPr", &[])?;
        if let Some(style) = run.character_style.as_deref() {
            out.empty("w:rStyle", &[("w:val", style)])?;
        }
        if let Some(font) = run.font.as_deref() {
            out.empty(
                "w:rFonts",
                &[("w:ascii", font), ("w:hAnsi", font), ("w:cs", font)],
            )?;
        }
        if run.bold {
            out.empty("w:b", &[])?;
        }
        if let Some(color) = run.color.as_deref() {
            out.empty("w:color", &[("w:val", color)])?;
        }
        if let Some(size) = run.size {
            let size = size.to_string();
            out.empty("w:sz", &[("w:val", &size)])?;
            out.empty("w:szCs", &[("w:val", &size)])?;
        }
        out.end("w:rPr")?;
    }

    match &run.content {
        RunContent::Text(text) => {
            out.text_element("w:t", &[("xml:space", "preserve")], text)?;
        }
        RunContent::Break => out.empty("w:br", &[])?,
        RunContent::PageBreak => out.empty("w:br", &[("w:type", "page")])?,
    }

    out.end("w:r")
}

fn write_table(out: &mut XmlOut, table: &Table) -> Result<(), FormatError> {
    out.start("w:tbl", &[])?;

    out.start("w:tblPr", &[])?;
    out.empty("w:tblStyle", &[("w:val", "TableGrid")])?;
    out.empty(
        "w:tblW",
        &[("w:w", &fiftieths(table.width_percent)), ("w:type", "pct")],
    )?;
    out.end("w:tblPr")?;

    // Rows may be ragged; the grid follows the widest one.
    let columns = table
        .rows
        .iter()
        .map(|row| row.cells.len())
        .max()
        .unwrap_or(0)
        .max(1);
    let column_width = (TEXT_WIDTH_TWIPS / columns as u32).to_string();
    out.start("w:tblGrid", &[])?;
    for _ in 0..columns {
        out.empty("w:gridCol", &[("w:w", &column_width)])?;
    }
    out.end("w:tblGrid")?;

    for row in &table.rows {
        out.start("w:tr", &[])?;
        if row.header {
            out.start("w:trPr", &[])?;
            out.empty("w:tblHeader", &[])?;
            out.end("w:trPr")?;
        }
        for cell in &row.cells {
            out.start("w:tc", &[])?;
            out.start("w:tcPr", &[])?;
            out.empty(
                "w:tcW",
                &[("w:w", &fiftieths(cell.width_percent)), ("w:type", "pct")],
            )?;
            out.end("w:tcPr")?;
            if cell.paragraphs.is_empty() {
                write_paragraph(out, &Paragraph::new())?;
            }
            for paragraph in &cell.paragraphs {
                write_paragraph(out, paragraph)?;
            }
            out.end("w:tc")?;
        }
        out.end("w:tr")?;
    }

    out.end("w:tbl")
}

/// Percentages are stored in fiftieths of a percent (`5000` = 100%).
fn fiftieths(percent: f64) -> String {
    ((percent * 50.0).round() as u32).to_string()
}

fn styles_xml(style: &DocxStyle) -> Result<Vec<u8>, FormatError> {
    const HEADING_SIZES: [u32; 6] = [32, 28, 26, 24, 22, 20];

    let mut out = XmlOut::new()?;
    out.start("w:styles", &[("xmlns:w", WORDML_NS)])?;

    let body_size = style.body_size.to_string();
    out.start("w:docDefaults", &[])?;
    out.start("w:rPrDefault", &[])?;
    out.start("w:rPr", &[])?;
    out.empty("w:sz", &[("w:val", &body_size)])?;
    out.empty("w:szCs", &[("w:val", &body_size)])?;
    out.end("w:rPr")?;
    out.end("w:rPrDefault")?;
    out.end("w:docDefaults")?;

    out.start(
        "w:style",
        &[("w:type", "paragraph"), ("w:default", "1"), ("w:styleId", "Normal")],
    )?;
    out.empty("w:name", &[("w:val", "Normal")])?;
    out.empty("w:qFormat", &[])?;
    out.end("w:style")?;

    write_paragraph_style(&mut out, "Title", "Title", 44, None)?;
    for (index, size) in HEADING_SIZES.iter().enumerate() {
        let level = index + 1;
        write_paragraph_style(
            &mut out,
            &format!("Heading{level}"),
            &format!("heading {level}"),
            *size,
            Some(index),
        )?;
    }
    write_paragraph_style(&mut out, "TOCHeading", "TOC Heading", 28, None)?;

    out.start(
        "w:style",
        &[("w:type", "paragraph"), ("w:styleId", "ListParagraph")],
    )?;
    out.empty("w:name", &[("w:val", "List Paragraph")])?;
    out.empty("w:basedOn", &[("w:val", "Normal")])?;
    out.end("w:style")?;

    out.start(
        "w:style",
        &[("w:type", "character"), ("w:styleId", "Hyperlink")],
    )?;
    out.empty("w:name", &[("w:val", "Hyperlink")])?;
    out.start("w:rPr", &[])?;
    out.empty("w:color", &[("w:val", "0563C1")])?;
    out.empty("w:u", &[("w:val", "single")])?;
    out.end("w:rPr")?;
    out.end("w:style")?;

    out.start("w:style", &[("w:type", "table"), ("w:styleId", "TableGrid")])?;
    out.empty("w:name", &[("w:val", "Table Grid")])?;
    out.start("w:tblPr", &[])?;
    out.start("w:tblBorders", &[])?;
    for side in ["w:top", "w:left", "w:bottom", "w:right", "w:insideH", "w:insideV"] {
        out.empty(
            side,
            &[
                ("w:val", "single"),
                ("w:sz", "4"),
                ("w:space", "0"),
                ("w:color", "auto"),
            ],
        )?;
    }
    out.end("w:tblBorders")?;
    out.end("w:tblPr")?;
    out.end("w:style")?;

    out.end("w:styles")?;
    Ok(out.finish())
}

fn write_paragraph_style(
    out: &mut XmlOut,
    id: &str,
    name: &str,
    size: u32,
    outline_level: Option<usize>,
) -> Result<(), FormatError> {
    out.start("w:style", &[("w:type", "paragraph"), ("w:styleId", id)])?;
    out.empty("w:name", &[("w:val", name)])?;
    out.empty("w:basedOn", &[("w:val", "Normal")])?;
    out.empty("w:next", &[("w:val", "Normal")])?;
    out.empty("w:qFormat", &[])?;
    out.start("w:pPr", &[])?;
    out.empty("w:keepNext", &[])?;
    if let Some(level) = outline_level {
        out.empty("w:outlineLvl", &[("w:val", &level.to_string())])?;
    }
    out.end("w:pPr")?;
    out.start("w:rPr", &[])?;
    out.empty("w:b", &[])?;
    let size = size.to_string();
    out.empty("w:sz", &[("w:val", &size)])?;
    out.empty("w:szCs", &[("w:val", &size)])?;
    out.end("w:rPr")?;
    out.end("w:style")
}

fn core_xml(properties: &DocumentProperties) -> Result<Vec<u8>, FormatError> {
    let created = format!("{}T00:00:00Z", properties.created.format("%Y-%m-%d"));

    let mut out = XmlOut::new()?;
    out.start(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    out.text_element("dc:title", &[], &properties.title)?;
    out.text_element("dc:creator", &[], "procdoc")?;
    out.text_element(
        "dcterms:created",
        &[("xsi:type", "dcterms:W3CDTF")],
        &created,
    )?;
    out.text_element(
        "dcterms:modified",
        &[("xsi:type", "dcterms:W3CDTF")],
        &created,
    )?;
    out.end("cp:coreProperties")?;
    Ok(out.finish())
}

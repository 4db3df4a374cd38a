//! Shared helpers: fixtures and package inspection.

use chrono::NaiveDate;
use procdoc_export::{ExportRequest, ProjectInfo, SourceDocument};
use std::io::{Cursor, Read};

pub fn fixture(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

pub fn export_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
}

pub fn project_info() -> ProjectInfo {
    ProjectInfo::from_json(&fixture("project.json")).unwrap()
}

/// The tender fixture with project info and a fixed date.
pub fn tender_request() -> ExportRequest {
    ExportRequest::new(fixture("tender.md"))
        .with_project_info(project_info())
        .with_generated_on(export_date())
}

pub fn chapters_request() -> ExportRequest {
    let source = SourceDocument::from_json(&fixture("chapters.json")).unwrap();
    ExportRequest::from_source(&source).with_generated_on(export_date())
}

/// Names of all entries in a `.docx` package.
pub fn part_names(package: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(package)).unwrap();
    archive.file_names().map(str::to_string).collect()
}

/// Read one part of a `.docx` package as text.
pub fn read_part(package: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(package)).unwrap();
    let mut part = archive
        .by_name(name)
        .unwrap_or_else(|e| panic!("missing part {name}: {e}"));
    let mut text = String::new();
    part.read_to_string(&mut text).unwrap();
    text
}

/// Values of `attr` on every `<element ...>` occurrence, in document order.
pub fn attribute_values(xml: &str, element: &str, attr: &str) -> Vec<String> {
    let open = format!("<{element} ");
    let key = format!("{attr}=\"");
    xml.match_indices(&open)
        .filter_map(|(start, _)| {
            let tag = &xml[start..];
            let tag = &tag[..tag.find('>')?];
            let value = &tag[tag.find(&key)? + key.len()..];
            Some(value[..value.find('"')?].to_string())
        })
        .collect()
}

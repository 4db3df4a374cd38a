use crate::common::tender_request;
use procdoc_export::publish::{publish, PublishArtifact, PublishSpec};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_doc_export_wraps_preview_for_word() {
    let dir = tempdir().unwrap();
    let request = tender_request();
    let result = publish(PublishSpec::new(&request, "doc").with_output_dir(dir.path())).unwrap();

    let expected = dir.path().join("Street Lighting 2025_2025-02-14.doc");
    assert_eq!(result.artifact, PublishArtifact::File(expected.clone()));

    let html = fs::read_to_string(expected).unwrap();
    assert!(html.starts_with("<html xmlns:o=\"urn:schemas-microsoft-com:office:office\""));
    assert!(html.contains("<title>Street Lighting 2025</title>"));
    assert!(html.contains("<h1>Project Overview</h1>"));
    assert!(html.contains("<strong>maintenance</strong>"));
    assert!(html.contains("<table>"));
    // content only: no generated cover page or table of contents
    assert!(!html.contains("City Works Department"));
    assert!(!html.contains("Table of Contents"));
}

use crate::common::tender_request;
use procdoc_export::publish::{publish, PublishArtifact, PublishSpec};
use procdoc_export::{Format, FormatRegistry};

#[test]
fn test_fragment_preview() {
    let html = FormatRegistry::default()
        .get("html")
        .and_then(|format| format.serialize(&tender_request()))
        .unwrap();
    assert!(html.contains("<h1>Project Overview</h1>"));
    assert!(html.contains("<strong>maintenance</strong>"));
    assert!(html.contains("<table>"));
    assert!(html.contains("<blockquote>"));
}

#[test]
fn test_standalone_preview_uses_project_name() {
    let request = tender_request();
    let result = publish(PublishSpec::new(&request, "html").with_option("standalone", "true"))
        .unwrap();
    match result.artifact {
        PublishArtifact::InMemory(html) => {
            assert!(html.contains("<title>Street Lighting 2025</title>"));
            assert!(html.contains(r#"<div class="procdoc-preview">"#));
        }
        PublishArtifact::File(_) => panic!("expected in-memory artifact"),
    }
}

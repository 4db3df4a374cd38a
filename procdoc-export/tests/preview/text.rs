use crate::common::{chapters_request, tender_request};
use procdoc_export::formats::TextFormat;
use procdoc_export::Format;

#[test]
fn test_tender_text() {
    let text = TextFormat.serialize(&tender_request()).unwrap();
    insta::assert_snapshot!(text, @r"
    Project Overview
    This tender covers the maintenance of municipal street lighting.
    Works start after contract signature.
    Scope of Services
    Inspection of all poles
    Replacement of faulty lamps
    LED retrofits where possible
    Monthly reporting
    Survey
    Repair
    Schedule
    Phase | Start | End
    Survey | 2025-01 | 2025-02
    Repair | 2025-03 | 2025-06
    Deliverables
    All reports are submitted in two copies.
    REPORT-001
    REPORT-002

    REPORT-010
    Evaluation
    Bids are scored on price and quality.
    ");
}

#[test]
fn test_chapters_text_in_id_order() {
    let text = TextFormat.serialize(&chapters_request()).unwrap();
    assert_eq!(
        text,
        "Overview\nStreet lighting.\nScope\nPoles\nLamps\nEvaluation\nLowest price wins."
    );
}

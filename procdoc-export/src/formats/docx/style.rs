//! Presentation settings for the DOCX writer.
//!
//! Sizes are in half-points and distances in twips (1/20 pt), matching the
//! units WordprocessingML stores. `procdoc-config` builds this from the
//! `[docx]` configuration section.

/// Typography and spacing knobs used by the translator and front matter.
#[derive(Debug, Clone, PartialEq)]
pub struct DocxStyle {
    pub body_size: u32,
    pub code_size: u32,
    pub code_font: String,
    pub quote_color: String,
    pub quote_indent: u32,
    pub rule_char: char,
    pub rule_length: usize,
    pub rule_color: String,
    pub paragraph_spacing_after: u32,
    pub list_spacing_after: u32,
    pub heading1_spacing_before: u32,
    pub heading_spacing_before: u32,
    pub heading_spacing_after: u32,
    pub toc_indent_step: u32,
    pub labels: CoverLabels,
}

impl Default for DocxStyle {
    fn default() -> Self {
        DocxStyle {
            body_size: 20,
            code_size: 18,
            code_font: "Courier New".to_string(),
            quote_color: "666666".to_string(),
            quote_indent: 720,
            rule_char: '─',
            rule_length: 50,
            rule_color: "CCCCCC".to_string(),
            paragraph_spacing_after: 200,
            list_spacing_after: 100,
            heading1_spacing_before: 400,
            heading_spacing_before: 200,
            heading_spacing_after: 200,
            toc_indent_step: 440,
            labels: CoverLabels::default(),
        }
    }
}

impl DocxStyle {
    /// Space above a heading. Level 1 never gets less than deeper levels,
    /// whatever the configuration says.
    pub fn heading_spacing_before(&self, level: usize) -> u32 {
        if level == 1 {
            self.heading1_spacing_before.max(self.heading_spacing_before)
        } else {
            self.heading_spacing_before
        }
    }

    /// The decorative text emitted for a thematic break.
    pub fn rule_text(&self) -> String {
        std::iter::repeat(self.rule_char)
            .take(self.rule_length)
            .collect()
    }
}

/// Fixed strings printed on the cover page and above the TOC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverLabels {
    pub project_name: String,
    pub procurement_unit: String,
    pub service_period: String,
    pub service_location: String,
    pub generated_on: String,
    pub toc_title: String,
    /// Title used when the project has no name.
    pub default_title: String,
}

impl Default for CoverLabels {
    fn default() -> Self {
        CoverLabels {
            project_name: "Project Name".to_string(),
            procurement_unit: "Procurement Unit".to_string(),
            service_period: "Service Period".to_string(),
            service_location: "Service Location".to_string(),
            generated_on: "Generated On".to_string(),
            toc_title: "Table of Contents".to_string(),
            default_title: "Procurement Document".to_string(),
        }
    }
}

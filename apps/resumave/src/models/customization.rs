//! Customization configuration: colors, typography and section order.

use serde::{Deserialize, Serialize};

use crate::style::fonts::FontFamily;
use crate::style::scale::{FontSize, LineSpacing};

pub const DEFAULT_PRIMARY_COLOR: &str = "#2563eb";
pub const DEFAULT_HEADER_COLOR: &str = "#1f2937";
pub const DEFAULT_TEXT_COLOR: &str = "#374151";
pub const DEFAULT_ACCENT_COLOR: &str = "#4b5563";

// ────────────────────────────────────────────────────────────────────────────
// Section names
// ────────────────────────────────────────────────────────────────────────────

/// The orderable resume sections. The header is always first and is not part
/// of the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certificates,
    Languages,
}

/// Order used when the customization carries none.
pub const DEFAULT_SECTION_ORDER: [SectionKind; 7] = [
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Skills,
    SectionKind::Projects,
    SectionKind::Certificates,
    SectionKind::Languages,
];

impl SectionKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "summary" => Some(SectionKind::Summary),
            "experience" => Some(SectionKind::Experience),
            "education" => Some(SectionKind::Education),
            "skills" => Some(SectionKind::Skills),
            "projects" => Some(SectionKind::Projects),
            "certificates" => Some(SectionKind::Certificates),
            "languages" => Some(SectionKind::Languages),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Certificates => "certificates",
            SectionKind::Languages => "languages",
        }
    }

    /// Heading printed above the section.
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Summary => "PROFESSIONAL SUMMARY",
            SectionKind::Experience => "PROFESSIONAL EXPERIENCE",
            SectionKind::Education => "EDUCATION",
            SectionKind::Skills => "SKILLS",
            SectionKind::Projects => "PROJECTS",
            SectionKind::Certificates => "CERTIFICATIONS",
            SectionKind::Languages => "LANGUAGES",
        }
    }
}

pub fn default_section_order() -> Vec<String> {
    DEFAULT_SECTION_ORDER
        .iter()
        .map(|s| s.as_str().to_string())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Customization
// ────────────────────────────────────────────────────────────────────────────

/// User-facing look-and-feel settings.
///
/// Any field missing from JSON input takes its default. `section_order` keeps
/// raw names: unknown names are tolerated here and skipped at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Customization {
    pub primary_color: String,
    pub header_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub font_size: FontSize,
    pub font_family: FontFamily,
    pub line_spacing: LineSpacing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_order: Option<Vec<String>>,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            header_color: DEFAULT_HEADER_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            font_size: FontSize::default(),
            font_family: FontFamily::default(),
            line_spacing: LineSpacing::default(),
            section_order: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_documented_defaults() {
        let c: Customization = serde_json::from_str("{}").unwrap();
        assert_eq!(c.primary_color, "#2563eb");
        assert_eq!(c.header_color, "#1f2937");
        assert_eq!(c.text_color, "#374151");
        assert_eq!(c.accent_color, "#4b5563");
        assert_eq!(c.font_size, FontSize::Medium);
        assert_eq!(c.font_family, FontFamily::TimesRoman);
        assert_eq!(c.line_spacing, LineSpacing::Normal);
        assert!(c.section_order.is_none());
    }

    #[test]
    fn test_camel_case_keys_and_lenient_enums() {
        let c: Customization = serde_json::from_str(
            r##"{ "primaryColor": "#000000", "fontSize": "huge", "lineSpacing": "relaxed",
                 "fontFamily": "Helvetica", "sectionOrder": ["skills", "hobbies"] }"##,
        )
        .unwrap();
        assert_eq!(c.primary_color, "#000000");
        assert_eq!(c.font_size, FontSize::Medium);
        assert_eq!(c.line_spacing, LineSpacing::Relaxed);
        assert_eq!(c.font_family, FontFamily::Helvetica);
        assert_eq!(
            c.section_order,
            Some(vec!["skills".to_string(), "hobbies".to_string()])
        );
    }

    #[test]
    fn test_section_names_round_trip() {
        for kind in DEFAULT_SECTION_ORDER {
            assert_eq!(SectionKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(SectionKind::from_name("hobbies"), None);
    }

    #[test]
    fn test_default_section_order_names() {
        assert_eq!(
            default_section_order(),
            vec!["summary", "experience", "education", "skills", "projects", "certificates", "languages"]
        );
    }
}

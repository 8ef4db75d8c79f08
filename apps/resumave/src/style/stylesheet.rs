//! Stylesheet derivation: customization in, flat set of named style records out.
//!
//! `derive_stylesheet` is total and pure. The type and spacing rows are looked
//! up once and every record references them, so changing `fontSize` or
//! `lineSpacing` moves the whole document together.

use serde::Serialize;

use crate::models::Customization;
use crate::style::fonts::FontVariants;
use crate::style::scale::{SpacingScale, TypeScale};

/// Hairline color of the divider between entries. Not customizable.
const DIVIDER_COLOR: &str = "#e5e7eb";
const PAGE_BACKGROUND: &str = "#ffffff";

// ────────────────────────────────────────────────────────────────────────────
// Style primitives
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTransform {
    Uppercase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexDirection {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    FlexStart,
    Center,
    SpaceBetween,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Border {
    pub width: f32,
    pub color: String,
}

impl Border {
    fn solid(width: f32, color: &str) -> Self {
        Self {
            width,
            color: color.to_string(),
        }
    }
}

/// One named style record. Unset properties inherit from the parent node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_horizontal: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_vertical: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Stylesheet
// ────────────────────────────────────────────────────────────────────────────

/// Every style record the section renderers paint with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stylesheet {
    pub page: Style,

    pub header: Style,
    pub header_name: Style,
    pub header_title: Style,
    pub header_links: Style,
    pub header_link: Style,
    pub header_separator: Style,

    pub section: Style,
    pub section_title: Style,

    pub wrapper: Style,
    pub title_wrapper: Style,
    pub title: Style,
    pub date: Style,
    pub subtitle_wrapper: Style,
    pub subtitle: Style,
    pub location: Style,

    pub lists: Style,
    pub list_item: Style,
    pub list_bullet: Style,
    pub list_content: Style,

    pub text: Style,
    pub small_text: Style,

    pub skills_container: Style,
    pub skills_row: Style,
    pub skills_label: Style,
    pub skills_value: Style,

    pub line: Style,
    pub link: Style,
    pub summary: Style,
    pub inline_wrapper: Style,
    pub inline_item: Style,
}

/// Derives the complete stylesheet for a customization.
pub fn derive_stylesheet(customization: &Customization) -> Stylesheet {
    let sizes: &TypeScale = customization.font_size.scale();
    let spacing: &SpacingScale = customization.line_spacing.scale();
    let fonts: FontVariants<'_> = customization.font_family.variants();

    let primary = customization.primary_color.as_str();
    let header = customization.header_color.as_str();
    let text = customization.text_color.as_str();
    let accent = customization.accent_color.as_str();

    let color = |c: &str| Some(c.to_string());
    let face = |f: &str| Some(f.to_string());

    Stylesheet {
        page: Style {
            background_color: color(PAGE_BACKGROUND),
            color: color(text),
            padding: Some(30.0),
            padding_top: Some(25.0),
            padding_bottom: Some(25.0),
            font_family: face(fonts.regular),
            ..Style::default()
        },

        header: Style {
            text_align: Some(TextAlign::Center),
            margin_bottom: Some(spacing.section),
            border_bottom: Some(Border::solid(1.5, primary)),
            padding_bottom: Some(spacing.item),
            ..Style::default()
        },
        header_name: Style {
            color: color(header),
            font_size: Some(sizes.name),
            font_family: face(fonts.bold),
            text_align: Some(TextAlign::Center),
            text_transform: Some(TextTransform::Uppercase),
            letter_spacing: Some(1.0),
            margin_bottom: Some(4.0),
            ..Style::default()
        },
        header_title: Style {
            color: color(accent),
            font_size: Some(sizes.title),
            text_align: Some(TextAlign::Center),
            margin_bottom: Some(6.0),
            ..Style::default()
        },
        header_links: Style {
            color: color(text),
            font_size: Some(sizes.small),
            flex_direction: Some(FlexDirection::Row),
            justify_content: Some(Alignment::Center),
            flex_wrap: Some(true),
            gap: Some(8.0),
            margin_top: Some(4.0),
            ..Style::default()
        },
        header_link: Style {
            color: color(text),
            underline: Some(false),
            ..Style::default()
        },
        header_separator: Style {
            color: color(accent),
            margin_horizontal: Some(4.0),
            ..Style::default()
        },

        section: Style {
            margin_bottom: Some(spacing.section),
            ..Style::default()
        },
        section_title: Style {
            font_size: Some(sizes.section),
            font_family: face(fonts.bold),
            color: color(primary),
            text_transform: Some(TextTransform::Uppercase),
            border_bottom: Some(Border::solid(1.0, primary)),
            padding_bottom: Some(2.0),
            margin_bottom: Some(spacing.item),
            letter_spacing: Some(0.5),
            ..Style::default()
        },

        wrapper: Style {
            margin_bottom: Some(spacing.item),
            ..Style::default()
        },
        title_wrapper: Style {
            flex_direction: Some(FlexDirection::Row),
            justify_content: Some(Alignment::SpaceBetween),
            align_items: Some(Alignment::FlexStart),
            margin_bottom: Some(1.0),
            ..Style::default()
        },
        title: Style {
            font_family: face(fonts.bold),
            font_size: Some(sizes.title),
            color: color(header),
            flex: Some(1.0),
            ..Style::default()
        },
        date: Style {
            font_family: face(fonts.italic),
            font_size: Some(sizes.small),
            color: color(accent),
            text_align: Some(TextAlign::Right),
            ..Style::default()
        },
        subtitle_wrapper: Style {
            flex_direction: Some(FlexDirection::Row),
            justify_content: Some(Alignment::SpaceBetween),
            align_items: Some(Alignment::Center),
            margin_bottom: Some(2.0),
            ..Style::default()
        },
        subtitle: Style {
            font_size: Some(sizes.text),
            color: color(accent),
            ..Style::default()
        },
        location: Style {
            font_size: Some(sizes.small),
            color: color(accent),
            font_family: face(fonts.italic),
            ..Style::default()
        },

        lists: Style {
            margin_top: Some(spacing.list),
            margin_left: Some(0.0),
            ..Style::default()
        },
        list_item: Style {
            flex_direction: Some(FlexDirection::Row),
            margin_bottom: Some(spacing.list),
            padding_left: Some(8.0),
            ..Style::default()
        },
        list_bullet: Style {
            width: Some(12.0),
            font_size: Some(sizes.text),
            color: color(text),
            ..Style::default()
        },
        list_content: Style {
            flex: Some(1.0),
            font_size: Some(sizes.text),
            color: color(text),
            line_height: Some(1.4),
            ..Style::default()
        },

        text: Style {
            font_size: Some(sizes.text),
            color: color(text),
            line_height: Some(1.4),
            ..Style::default()
        },
        small_text: Style {
            font_size: Some(sizes.small),
            color: color(accent),
            ..Style::default()
        },

        skills_container: Style {
            margin_top: Some(2.0),
            ..Style::default()
        },
        skills_row: Style {
            flex_direction: Some(FlexDirection::Row),
            margin_bottom: Some(3.0),
            flex_wrap: Some(true),
            ..Style::default()
        },
        skills_label: Style {
            font_family: face(fonts.bold),
            font_size: Some(sizes.text),
            color: color(header),
            width: Some(120.0),
            ..Style::default()
        },
        skills_value: Style {
            font_size: Some(sizes.text),
            color: color(text),
            flex: Some(1.0),
            ..Style::default()
        },

        line: Style {
            border_bottom: Some(Border::solid(0.5, DIVIDER_COLOR)),
            margin_vertical: Some(spacing.list),
            ..Style::default()
        },
        link: Style {
            color: color(text),
            underline: Some(false),
            ..Style::default()
        },
        summary: Style {
            font_size: Some(sizes.text),
            color: color(text),
            line_height: Some(1.5),
            text_align: Some(TextAlign::Justify),
            ..Style::default()
        },
        inline_wrapper: Style {
            flex_direction: Some(FlexDirection::Row),
            flex_wrap: Some(true),
            gap: Some(16.0),
            ..Style::default()
        },
        inline_item: Style {
            margin_right: Some(16.0),
            ..Style::default()
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::fonts::FontFamily;
    use crate::style::scale::{FontSize, LineSpacing};

    #[test]
    fn test_default_customization_uses_medium_normal_serif() {
        let styles = derive_stylesheet(&Customization::default());
        assert_eq!(styles.header_name.font_size, Some(20.0));
        assert_eq!(styles.text.font_size, Some(10.0));
        assert_eq!(styles.section.margin_bottom, Some(8.0));
        assert_eq!(styles.page.font_family.as_deref(), Some("Times-Roman"));
        assert_eq!(styles.title.font_family.as_deref(), Some("Times-Bold"));
        assert_eq!(styles.date.font_family.as_deref(), Some("Times-Italic"));
    }

    #[test]
    fn test_colors_flow_into_records() {
        let customization = Customization {
            primary_color: "#059669".to_string(),
            header_color: "#111827".to_string(),
            text_color: "#374151".to_string(),
            accent_color: "#6b7280".to_string(),
            ..Customization::default()
        };
        let styles = derive_stylesheet(&customization);
        assert_eq!(styles.section_title.color.as_deref(), Some("#059669"));
        assert_eq!(
            styles.header.border_bottom.as_ref().map(|b| b.color.as_str()),
            Some("#059669")
        );
        assert_eq!(styles.header_name.color.as_deref(), Some("#111827"));
        assert_eq!(styles.date.color.as_deref(), Some("#6b7280"));
        assert_eq!(styles.page.color.as_deref(), Some("#374151"));
    }

    #[test]
    fn test_large_relaxed_rows() {
        let customization = Customization {
            font_size: FontSize::Large,
            line_spacing: LineSpacing::Relaxed,
            ..Customization::default()
        };
        let styles = derive_stylesheet(&customization);
        assert_eq!(styles.header_name.font_size, Some(22.0));
        assert_eq!(styles.section_title.font_size, Some(13.0));
        assert_eq!(styles.small_text.font_size, Some(10.0));
        assert_eq!(styles.section.margin_bottom, Some(10.0));
        assert_eq!(styles.wrapper.margin_bottom, Some(6.0));
        assert_eq!(styles.list_item.margin_bottom, Some(3.0));
    }

    #[test]
    fn test_helvetica_bold_without_italic() {
        let customization = Customization {
            font_family: FontFamily::Helvetica,
            ..Customization::default()
        };
        let styles = derive_stylesheet(&customization);
        assert_eq!(styles.skills_label.font_family.as_deref(), Some("Helvetica-Bold"));
        assert_eq!(styles.location.font_family.as_deref(), Some("Helvetica"));
    }

    #[test]
    fn test_unrecognized_family_is_used_verbatim() {
        let customization = Customization {
            font_family: FontFamily::from_name("Garamond"),
            ..Customization::default()
        };
        let styles = derive_stylesheet(&customization);
        assert_eq!(styles.header_name.font_family.as_deref(), Some("Garamond"));
        assert_eq!(styles.date.font_family.as_deref(), Some("Garamond"));
    }

    #[test]
    fn test_divider_color_is_fixed() {
        let customization = Customization {
            primary_color: "#ff0000".to_string(),
            ..Customization::default()
        };
        let styles = derive_stylesheet(&customization);
        assert_eq!(
            styles.line.border_bottom.as_ref().map(|b| b.color.as_str()),
            Some(DIVIDER_COLOR)
        );
    }

    #[test]
    fn test_serialized_keys_are_camel_case_and_sparse() {
        let styles = derive_stylesheet(&Customization::default());
        let json = serde_json::to_value(&styles).unwrap();
        assert!(json.get("headerName").is_some());
        assert!(json["headerName"].get("fontSize").is_some());
        // unset properties are omitted
        assert!(json["section"].get("color").is_none());
    }
}

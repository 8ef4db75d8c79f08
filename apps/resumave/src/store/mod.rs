// Customization Store: template selection plus user customization.
// Mutated only through the named transitions below; every transition reports
// whether it changed anything so the preview knows when to re-render.

pub mod preview;
pub mod templates;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::customization::default_section_order;
use crate::models::Customization;
use crate::style::{FontFamily, FontSize, LineSpacing};

pub use preview::ResumePreview;
pub use templates::{find_template, templates, TemplateColors, TemplateId, TemplatePreset};

/// Outcome of one store transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored,
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Updates
// ────────────────────────────────────────────────────────────────────────────

/// Fields a caller may overwrite by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomizationKey {
    PrimaryColor,
    HeaderColor,
    TextColor,
    AccentColor,
    FontSize,
    FontFamily,
    LineSpacing,
}

impl CustomizationKey {
    /// Parses the camelCase key used by the editor.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "primaryColor" => Some(CustomizationKey::PrimaryColor),
            "headerColor" => Some(CustomizationKey::HeaderColor),
            "textColor" => Some(CustomizationKey::TextColor),
            "accentColor" => Some(CustomizationKey::AccentColor),
            "fontSize" => Some(CustomizationKey::FontSize),
            "fontFamily" => Some(CustomizationKey::FontFamily),
            "lineSpacing" => Some(CustomizationKey::LineSpacing),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomizationKey::PrimaryColor => "primaryColor",
            CustomizationKey::HeaderColor => "headerColor",
            CustomizationKey::TextColor => "textColor",
            CustomizationKey::AccentColor => "accentColor",
            CustomizationKey::FontSize => "fontSize",
            CustomizationKey::FontFamily => "fontFamily",
            CustomizationKey::LineSpacing => "lineSpacing",
        }
    }

    /// Pairs the key with a raw value. Enum-valued fields parse leniently.
    pub fn with_value(self, value: &str) -> CustomizationUpdate {
        match self {
            CustomizationKey::PrimaryColor => CustomizationUpdate::PrimaryColor(value.to_string()),
            CustomizationKey::HeaderColor => CustomizationUpdate::HeaderColor(value.to_string()),
            CustomizationKey::TextColor => CustomizationUpdate::TextColor(value.to_string()),
            CustomizationKey::AccentColor => CustomizationUpdate::AccentColor(value.to_string()),
            CustomizationKey::FontSize => CustomizationUpdate::FontSize(FontSize::from(value)),
            CustomizationKey::FontFamily => {
                CustomizationUpdate::FontFamily(FontFamily::from_name(value))
            }
            CustomizationKey::LineSpacing => {
                CustomizationUpdate::LineSpacing(LineSpacing::from(value))
            }
        }
    }
}

/// A typed single-field update.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomizationUpdate {
    PrimaryColor(String),
    HeaderColor(String),
    TextColor(String),
    AccentColor(String),
    FontSize(FontSize),
    FontFamily(FontFamily),
    LineSpacing(LineSpacing),
}

/// Serializable form of every transition, as sent by the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreAction {
    SelectTemplate { name: String },
    UpdateField { key: String, value: String },
    UpdateSectionOrder { order: Vec<String> },
    ResetToDefault,
}

// ────────────────────────────────────────────────────────────────────────────
// Store
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationStore {
    selected_template: TemplateId,
    customization: Customization,
}

impl Default for CustomizationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomizationStore {
    /// Classic template, classic colors, default typography and section order.
    pub fn new() -> Self {
        Self {
            selected_template: TemplateId::Classic,
            customization: default_customization(TemplateId::Classic),
        }
    }

    pub fn selected_template(&self) -> TemplateId {
        self.selected_template
    }

    pub fn customization(&self) -> &Customization {
        &self.customization
    }

    /// Classic template with a previously saved customization.
    pub fn with_customization(customization: Customization) -> Self {
        Self {
            selected_template: TemplateId::Classic,
            customization,
        }
    }

    pub fn select_template(&mut self, name: &str) -> Transition {
        let Some(id) = TemplateId::from_name(name) else {
            debug!("Ignoring unknown template '{name}'");
            return Transition::Ignored;
        };
        self.selected_template = id;
        id.preset().colors.apply_to(&mut self.customization);
        Transition::Applied
    }

    pub fn update_field(&mut self, key: &str, value: &str) -> Transition {
        match CustomizationKey::from_name(key) {
            Some(key) => self.apply(key.with_value(value)),
            None => {
                debug!("Ignoring update of unknown customization key '{key}'");
                Transition::Ignored
            }
        }
    }

    pub fn apply(&mut self, update: CustomizationUpdate) -> Transition {
        let c = &mut self.customization;
        match update {
            CustomizationUpdate::PrimaryColor(v) => c.primary_color = v,
            CustomizationUpdate::HeaderColor(v) => c.header_color = v,
            CustomizationUpdate::TextColor(v) => c.text_color = v,
            CustomizationUpdate::AccentColor(v) => c.accent_color = v,
            CustomizationUpdate::FontSize(v) => c.font_size = v,
            CustomizationUpdate::FontFamily(v) => c.font_family = v,
            CustomizationUpdate::LineSpacing(v) => c.line_spacing = v,
        }
        Transition::Applied
    }

    /// Replaces the section order. Names are validated at render time.
    pub fn update_section_order(&mut self, order: Vec<String>) -> Transition {
        self.customization.section_order = Some(order);
        Transition::Applied
    }

    /// Typography, spacing and section order back to defaults; colors back to
    /// the selected template's preset.
    pub fn reset_to_default(&mut self) -> Transition {
        self.customization = default_customization(self.selected_template);
        Transition::Applied
    }

    pub fn dispatch(&mut self, action: StoreAction) -> Transition {
        match action {
            StoreAction::SelectTemplate { name } => self.select_template(&name),
            StoreAction::UpdateField { key, value } => self.update_field(&key, &value),
            StoreAction::UpdateSectionOrder { order } => self.update_section_order(order),
            StoreAction::ResetToDefault => self.reset_to_default(),
        }
    }
}

fn default_customization(template: TemplateId) -> Customization {
    let mut customization = Customization {
        section_order: Some(default_section_order()),
        ..Customization::default()
    };
    template.preset().colors.apply_to(&mut customization);
    customization
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let store = CustomizationStore::new();
        let c = store.customization();
        assert_eq!(store.selected_template(), TemplateId::Classic);
        assert_eq!(c.primary_color, "#2563eb");
        assert_eq!(c.font_size, FontSize::Medium);
        assert_eq!(c.font_family, FontFamily::TimesRoman);
        assert_eq!(c.line_spacing, LineSpacing::Normal);
        assert_eq!(c.section_order, Some(default_section_order()));
    }

    #[test]
    fn test_select_template_sets_colors_keeps_typography() {
        let mut store = CustomizationStore::new();
        store.update_field("fontFamily", "Helvetica");

        assert_eq!(store.select_template("modern"), Transition::Applied);
        let c = store.customization();
        assert_eq!(store.selected_template(), TemplateId::Modern);
        assert_eq!(c.primary_color, "#059669");
        assert_eq!(c.header_color, "#111827");
        assert_eq!(c.text_color, "#374151");
        assert_eq!(c.accent_color, "#6b7280");
        assert_eq!(c.font_family, FontFamily::Helvetica);
    }

    #[test]
    fn test_with_customization_starts_from_classic() {
        let saved = Customization {
            primary_color: "#abcdef".to_string(),
            font_size: FontSize::Small,
            ..Customization::default()
        };
        let mut store = CustomizationStore::with_customization(saved.clone());
        assert_eq!(store.selected_template(), TemplateId::Classic);
        assert_eq!(store.customization(), &saved);

        store.select_template("minimal");
        assert_eq!(store.customization().primary_color, "#000000");
        assert_eq!(store.customization().font_size, FontSize::Small);
    }

    #[test]
    fn test_template_names_match_exactly() {
        let mut store = CustomizationStore::new();
        let before = store.clone();
        assert_eq!(store.select_template(" modern "), Transition::Ignored);
        assert_eq!(store.select_template("Modern"), Transition::Ignored);
        assert_eq!(store, before);
    }

    #[test]
    fn test_select_unknown_template_is_noop() {
        let mut store = CustomizationStore::new();
        store.select_template("minimal");
        let before = store.clone();

        assert_eq!(store.select_template("unknown-xyz"), Transition::Ignored);
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_field_known_keys() {
        let mut store = CustomizationStore::new();
        assert!(store.update_field("primaryColor", "#ff0000").is_applied());
        assert!(store.update_field("fontSize", "large").is_applied());
        assert!(store.update_field("lineSpacing", "compact").is_applied());
        assert!(store.update_field("fontFamily", "Courier").is_applied());

        let c = store.customization();
        assert_eq!(c.primary_color, "#ff0000");
        assert_eq!(c.font_size, FontSize::Large);
        assert_eq!(c.line_spacing, LineSpacing::Compact);
        assert_eq!(c.font_family, FontFamily::Courier);
    }

    #[test]
    fn test_update_field_unknown_key_is_ignored() {
        let mut store = CustomizationStore::new();
        let before = store.clone();
        assert_eq!(store.update_field("showIcons", "true"), Transition::Ignored);
        assert_eq!(store.update_field("PrimaryColor", "#000"), Transition::Ignored);
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_field_unknown_size_falls_back_to_medium() {
        let mut store = CustomizationStore::new();
        store.update_field("fontSize", "large");
        store.update_field("fontSize", "huge");
        assert_eq!(store.customization().font_size, FontSize::Medium);
    }

    #[test]
    fn test_apply_typed_update() {
        let mut store = CustomizationStore::new();
        let t = store.apply(CustomizationUpdate::FontFamily(FontFamily::Other(
            "Garamond".to_string(),
        )));
        assert!(t.is_applied());
        assert_eq!(store.customization().font_family.name(), "Garamond");
    }

    #[test]
    fn test_update_section_order_replaces() {
        let mut store = CustomizationStore::new();
        store.update_section_order(vec!["skills".to_string(), "summary".to_string()]);
        assert_eq!(
            store.customization().section_order.as_deref(),
            Some(&["skills".to_string(), "summary".to_string()][..])
        );
    }

    #[test]
    fn test_reset_restores_defaults_with_template_colors() {
        let mut store = CustomizationStore::new();
        store.select_template("executive");
        store.update_field("fontSize", "small");
        store.update_field("fontFamily", "Courier");
        store.update_field("lineSpacing", "relaxed");
        store.update_field("primaryColor", "#123456");
        store.update_section_order(vec!["languages".to_string()]);

        assert!(store.reset_to_default().is_applied());
        let c = store.customization();
        assert_eq!(store.selected_template(), TemplateId::Executive);
        assert_eq!(c.font_size, FontSize::Medium);
        assert_eq!(c.font_family, FontFamily::TimesRoman);
        assert_eq!(c.line_spacing, LineSpacing::Normal);
        assert_eq!(c.primary_color, "#0369a1");
        assert_eq!(c.header_color, "#0c4a6e");
        assert_eq!(c.section_order, Some(default_section_order()));
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let mut store = CustomizationStore::new();
        let action: StoreAction =
            serde_json::from_str(r#"{"type":"select_template","name":"professional"}"#).unwrap();
        assert!(store.dispatch(action).is_applied());
        assert_eq!(store.selected_template(), TemplateId::Professional);

        let action: StoreAction =
            serde_json::from_str(r##"{"type":"update_field","key":"textColor","value":"#222"}"##)
                .unwrap();
        assert!(store.dispatch(action).is_applied());
        assert_eq!(store.customization().text_color, "#222");

        let action: StoreAction = serde_json::from_str(r#"{"type":"reset_to_default"}"#).unwrap();
        assert!(store.dispatch(action).is_applied());
        assert_eq!(store.customization().text_color, "#4b5563");
    }

    #[test]
    fn test_store_serializes_camel_case() {
        let json = serde_json::to_value(CustomizationStore::new()).unwrap();
        assert_eq!(json["selectedTemplate"], "classic");
        assert_eq!(json["customization"]["fontFamily"], "Times-Roman");
        assert_eq!(json["customization"]["sectionOrder"][0], "summary");
    }

    #[test]
    fn test_key_names_round_trip() {
        for name in [
            "primaryColor",
            "headerColor",
            "textColor",
            "accentColor",
            "fontSize",
            "fontFamily",
            "lineSpacing",
        ] {
            assert_eq!(CustomizationKey::from_name(name).map(|k| k.as_str()), Some(name));
        }
    }
}

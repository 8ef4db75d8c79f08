//! Built-in template presets.
//!
//! A preset is a named color bundle. Selecting one overwrites the four colors
//! of the customization and leaves typography alone.

use serde::{Deserialize, Serialize};

use crate::models::Customization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Classic,
    Modern,
    Professional,
    Minimal,
    Executive,
}

impl TemplateId {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(TemplateId::Classic),
            "modern" => Some(TemplateId::Modern),
            "professional" => Some(TemplateId::Professional),
            "minimal" => Some(TemplateId::Minimal),
            "executive" => Some(TemplateId::Executive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Professional => "professional",
            TemplateId::Minimal => "minimal",
            TemplateId::Executive => "executive",
        }
    }

    pub fn preset(&self) -> &'static TemplatePreset {
        match self {
            TemplateId::Classic => &TEMPLATES[0],
            TemplateId::Modern => &TEMPLATES[1],
            TemplateId::Professional => &TEMPLATES[2],
            TemplateId::Minimal => &TEMPLATES[3],
            TemplateId::Executive => &TEMPLATES[4],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateColors {
    pub primary_color: &'static str,
    pub header_color: &'static str,
    pub text_color: &'static str,
    pub accent_color: &'static str,
}

impl TemplateColors {
    /// Overwrites the four colors of `customization`.
    pub fn apply_to(&self, customization: &mut Customization) {
        customization.primary_color = self.primary_color.to_string();
        customization.header_color = self.header_color.to_string();
        customization.text_color = self.text_color.to_string();
        customization.accent_color = self.accent_color.to_string();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePreset {
    pub id: TemplateId,
    pub display_name: &'static str,
    pub description: &'static str,
    pub colors: TemplateColors,
}

static TEMPLATES: [TemplatePreset; 5] = [
    TemplatePreset {
        id: TemplateId::Classic,
        display_name: "Classic",
        description: "Traditional ATS-friendly format",
        colors: TemplateColors {
            primary_color: "#2563eb",
            header_color: "#1f2937",
            text_color: "#374151",
            accent_color: "#4b5563",
        },
    },
    TemplatePreset {
        id: TemplateId::Modern,
        display_name: "Modern",
        description: "Clean modern design",
        colors: TemplateColors {
            primary_color: "#059669",
            header_color: "#111827",
            text_color: "#374151",
            accent_color: "#6b7280",
        },
    },
    TemplatePreset {
        id: TemplateId::Professional,
        display_name: "Professional",
        description: "Corporate professional style",
        colors: TemplateColors {
            primary_color: "#7c3aed",
            header_color: "#1e1b4b",
            text_color: "#4b5563",
            accent_color: "#6366f1",
        },
    },
    TemplatePreset {
        id: TemplateId::Minimal,
        display_name: "Minimal",
        description: "Simple and clean",
        colors: TemplateColors {
            primary_color: "#000000",
            header_color: "#111111",
            text_color: "#333333",
            accent_color: "#666666",
        },
    },
    TemplatePreset {
        id: TemplateId::Executive,
        display_name: "Executive",
        description: "Senior/executive style",
        colors: TemplateColors {
            primary_color: "#0369a1",
            header_color: "#0c4a6e",
            text_color: "#334155",
            accent_color: "#475569",
        },
    },
];

impl TemplatePreset {
    /// Name the editor selects the preset by.
    pub fn key(&self) -> &'static str {
        self.id.as_str()
    }
}

/// All presets in catalog order.
pub fn templates() -> &'static [TemplatePreset] {
    &TEMPLATES
}

pub fn find_template(name: &str) -> Option<&'static TemplatePreset> {
    TemplateId::from_name(name).map(|id| id.preset())
}

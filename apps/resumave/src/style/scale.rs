//! Fixed type and spacing scales.
//!
//! Sizes are in points. Every enum here parses leniently: an unknown name
//! resolves to the middle row (`medium` / `normal`) instead of failing.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font size
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// One row of the type scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TypeScale {
    pub name: f32,
    pub section: f32,
    pub title: f32,
    pub text: f32,
    pub small: f32,
}

static SMALL_TYPE: TypeScale = TypeScale { name: 18.0, section: 11.0, title: 10.0, text: 9.0, small: 8.0 };
static MEDIUM_TYPE: TypeScale = TypeScale { name: 20.0, section: 12.0, title: 11.0, text: 10.0, small: 9.0 };
static LARGE_TYPE: TypeScale = TypeScale { name: 22.0, section: 13.0, title: 12.0, text: 11.0, small: 10.0 };

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    /// Strict lookup, `None` for names outside the enumerated set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "small" => Some(FontSize::Small),
            "medium" => Some(FontSize::Medium),
            "large" => Some(FontSize::Large),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    pub fn scale(&self) -> &'static TypeScale {
        match self {
            FontSize::Small => &SMALL_TYPE,
            FontSize::Medium => &MEDIUM_TYPE,
            FontSize::Large => &LARGE_TYPE,
        }
    }
}

impl From<&str> for FontSize {
    fn from(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }
}

impl From<String> for FontSize {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<FontSize> for String {
    fn from(size: FontSize) -> Self {
        size.as_str().to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Line spacing
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LineSpacing {
    Compact,
    #[default]
    Normal,
    Relaxed,
}

/// Vertical gaps: between sections, between items, between list rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpacingScale {
    pub section: f32,
    pub item: f32,
    pub list: f32,
}

static COMPACT_SPACING: SpacingScale = SpacingScale { section: 6.0, item: 3.0, list: 1.0 };
static NORMAL_SPACING: SpacingScale = SpacingScale { section: 8.0, item: 4.0, list: 2.0 };
static RELAXED_SPACING: SpacingScale = SpacingScale { section: 10.0, item: 6.0, list: 3.0 };

impl LineSpacing {
    pub const ALL: [LineSpacing; 3] = [LineSpacing::Compact, LineSpacing::Normal, LineSpacing::Relaxed];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "compact" => Some(LineSpacing::Compact),
            "normal" => Some(LineSpacing::Normal),
            "relaxed" => Some(LineSpacing::Relaxed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineSpacing::Compact => "compact",
            LineSpacing::Normal => "normal",
            LineSpacing::Relaxed => "relaxed",
        }
    }

    pub fn scale(&self) -> &'static SpacingScale {
        match self {
            LineSpacing::Compact => &COMPACT_SPACING,
            LineSpacing::Normal => &NORMAL_SPACING,
            LineSpacing::Relaxed => &RELAXED_SPACING,
        }
    }
}

impl From<&str> for LineSpacing {
    fn from(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }
}

impl From<String> for LineSpacing {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<LineSpacing> for String {
    fn from(spacing: LineSpacing) -> Self {
        spacing.as_str().to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

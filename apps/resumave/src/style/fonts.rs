//! Static font-variant table for the resume font families.
//!
//! The PDF painter only knows the standard base-14 faces, so bold and italic
//! are separate font names rather than weight/style flags. Each known family
//! maps to a fixed `{regular, bold, italic}` triple. A family without an
//! italic face reuses its regular face for italic.
//!
//! Names outside the table are passed through unchanged for all three slots:
//! no bold or italic variant is synthesized for them.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// Font families offered by the template editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FontFamily {
    /// Default serif, the ATS-safe choice.
    #[default]
    TimesRoman,
    /// Sans-serif.
    Helvetica,
    /// Monospace.
    Courier,
    /// Any other face name, e.g. one registered by the painter.
    Other(String),
}

/// Resolved face names for one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontVariants<'a> {
    pub regular: &'a str,
    pub bold: &'a str,
    pub italic: &'a str,
}

static TIMES_VARIANTS: FontVariants<'static> = FontVariants {
    regular: "Times-Roman",
    bold: "Times-Bold",
    italic: "Times-Italic",
};

static HELVETICA_VARIANTS: FontVariants<'static> = FontVariants {
    regular: "Helvetica",
    bold: "Helvetica-Bold",
    italic: "Helvetica",
};

static COURIER_VARIANTS: FontVariants<'static> = FontVariants {
    regular: "Courier",
    bold: "Courier-Bold",
    italic: "Courier",
};

impl FontFamily {
    pub const KNOWN: [FontFamily; 3] = [FontFamily::TimesRoman, FontFamily::Helvetica, FontFamily::Courier];

    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "Times-Roman" => FontFamily::TimesRoman,
            "Helvetica" => FontFamily::Helvetica,
            "Courier" => FontFamily::Courier,
            other => FontFamily::Other(other.to_string()),
        }
    }

    /// The face name as the painter expects it.
    pub fn name(&self) -> &str {
        self.variants().regular
    }

    pub fn variants(&self) -> FontVariants<'_> {
        match self {
            FontFamily::TimesRoman => TIMES_VARIANTS,
            FontFamily::Helvetica => HELVETICA_VARIANTS,
            FontFamily::Courier => COURIER_VARIANTS,
            FontFamily::Other(name) => FontVariants {
                regular: name.as_str(),
                bold: name.as_str(),
                italic: name.as_str(),
            },
        }
    }
}

impl From<String> for FontFamily {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<FontFamily> for String {
    fn from(family: FontFamily) -> Self {
        family.name().to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_family_is_serif() {
        assert_eq!(FontFamily::default(), FontFamily::TimesRoman);
        assert_eq!(FontFamily::default().name(), "Times-Roman");
    }

    #[test]
    fn test_times_has_bold_and_italic() {
        let v = FontFamily::TimesRoman.variants();
        assert_eq!(v.bold, "Times-Bold");
        assert_eq!(v.italic, "Times-Italic");
    }

    #[test]
    fn test_sans_and_mono_have_bold_only() {
        let h = FontFamily::Helvetica.variants();
        assert_eq!(h.bold, "Helvetica-Bold");
        assert_eq!(h.italic, "Helvetica");

        let c = FontFamily::Courier.variants();
        assert_eq!(c.bold, "Courier-Bold");
        assert_eq!(c.italic, "Courier");
    }

    #[test]
    fn test_unknown_family_passes_through() {
        let family = FontFamily::from_name("Garamond");
        assert_eq!(family, FontFamily::Other("Garamond".to_string()));
        let v = family.variants();
        assert_eq!((v.regular, v.bold, v.italic), ("Garamond", "Garamond", "Garamond"));
    }

    #[test]
    fn test_known_names_round_trip_through_strings() {
        for family in FontFamily::KNOWN {
            let name: String = family.clone().into();
            assert_eq!(FontFamily::from(name), family);
        }
    }

    #[test]
    fn test_serde_uses_face_names() {
        assert_eq!(serde_json::to_string(&FontFamily::Courier).unwrap(), "\"Courier\"");
        let parsed: FontFamily = serde_json::from_str("\"Helvetica\"").unwrap();
        assert_eq!(parsed, FontFamily::Helvetica);
    }
}

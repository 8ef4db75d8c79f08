//! Structured resume data, as handed over by the editing collaborator.
//!
//! Every sub-record is optional and every collection keeps the order the user
//! entered it in. Nothing here is validated: the editor owns validation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub contact: Option<Contact>,
    pub summary: Option<Summary>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Option<Skills>,
    pub certificates: Vec<CertificateEntry>,
    pub languages: Vec<LanguageEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: Option<String>,
    pub title: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default, alias = "summary")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub location: Option<String>,
    pub start: String,
    /// `None` (or blank) means the position is ongoing.
    pub end: Option<String>,
    /// One bullet per non-blank line.
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub start: String,
    pub end: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    /// Free text, one skill row per line. `Category: a, b` lines get a label.
    #[serde(default, alias = "skills")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateEntry {
    pub title: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageEntry {
    pub language: String,
    pub proficiency: String,
}

impl Contact {
    /// Display name, if one was entered.
    pub fn display_name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }
}

/// Returns the trimmed value when it holds anything but whitespace.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_accepts_legacy_summary_and_skills_keys() {
        let data: ResumeData = serde_json::from_str(
            r#"{
                "summary": { "summary": "Backend engineer" },
                "skills": { "skills": "Languages: Rust, Go" }
            }"#,
        )
        .unwrap();
        assert_eq!(data.summary.unwrap().text, "Backend engineer");
        assert_eq!(data.skills.unwrap().text, "Languages: Rust, Go");
    }

    #[test]
    fn test_deserialize_missing_sections_default_to_empty() {
        let data: ResumeData = serde_json::from_str("{}").unwrap();
        assert!(data.contact.is_none());
        assert!(data.experience.is_empty());
        assert!(data.languages.is_empty());
    }

    #[test]
    fn test_experience_null_end_is_none() {
        let entry: ExperienceEntry = serde_json::from_str(
            r#"{ "role": "Engineer", "company": "Acme", "start": "2021-03", "end": null }"#,
        )
        .unwrap();
        assert!(entry.end.is_none());
        assert!(entry.location.is_none());
    }

    #[test]
    fn test_collections_preserve_input_order() {
        let data: ResumeData = serde_json::from_str(
            r#"{ "languages": [
                { "language": "French", "proficiency": "Native" },
                { "language": "English", "proficiency": "Fluent" }
            ] }"#,
        )
        .unwrap();
        let names: Vec<_> = data.languages.iter().map(|l| l.language.as_str()).collect();
        assert_eq!(names, vec!["French", "English"]);
    }

    #[test]
    fn test_non_blank_filters_whitespace() {
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" a@b.c ")), Some("a@b.c"));
    }
}

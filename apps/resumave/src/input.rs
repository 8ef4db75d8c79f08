//! JSON file loading and document output for the CLI.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use resumave::{AppError, Customization, Document, ResumeData};

pub fn load_resume(path: &Path) -> Result<ResumeData, AppError> {
    read_json(path)
}

pub fn load_customization(path: &Path) -> Result<Customization, AppError> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "Read input file");

    serde_json::from_str(&raw).map_err(|source| AppError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })
}

pub fn document_json(document: &Document, pretty: bool) -> Result<String, AppError> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}

/// Writes the document to `path`, or to stdout when no path is given.
pub fn write_document(
    document: &Document,
    path: Option<&Path>,
    pretty: bool,
) -> Result<(), AppError> {
    let json = document_json(document, pretty)?;
    match path {
        Some(path) => fs::write(path, json).map_err(|source| AppError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").map_err(|source| AppError::Write {
                path: "<stdout>".into(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumave::compose;
    use resumave::style::FontSize;
    use tempfile::NamedTempFile;

    fn temp_json(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_resume() {
        let file = temp_json(
            r#"{
                "contact": {"name": "Jane Doe", "email": "jane@example.com"},
                "summary": {"summary": "Engineer."},
                "experience": [{"role": "Dev", "company": "Acme", "start": "2020-01", "end": null}]
            }"#,
        );
        let resume = load_resume(file.path()).unwrap();
        assert_eq!(resume.contact.unwrap().name.as_deref(), Some("Jane Doe"));
        assert_eq!(resume.summary.unwrap().text, "Engineer.");
        assert_eq!(resume.experience.len(), 1);
        assert!(resume.experience[0].end.is_none());
    }

    #[test]
    fn test_load_customization_unknown_size_is_medium() {
        let file = temp_json(r##"{"fontSize": "gigantic", "primaryColor": "#111111"}"##);
        let c = load_customization(file.path()).unwrap();
        assert_eq!(c.font_size, FontSize::Medium);
        assert_eq!(c.primary_color, "#111111");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_resume(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code(), "READ_ERROR");
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let file = temp_json("{ not json");
        let err = load_resume(file.path()).unwrap_err();
        assert_eq!(err.code(), "MALFORMED_INPUT");
    }

    #[test]
    fn test_write_document_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("doc.json");
        let doc = compose(&ResumeData::default(), &Customization::default());

        write_document(&doc, Some(&out), false).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written["metadata"]["title"], "Resume - Resume");
        assert_eq!(written["page"]["size"], "A4");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("doc.json");
        let doc = compose(&ResumeData::default(), &Customization::default());
        let err = write_document(&doc, Some(&out), true).unwrap_err();
        assert_eq!(err.code(), "WRITE_ERROR");
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let doc = compose(&ResumeData::default(), &Customization::default());
        assert!(document_json(&doc, true).unwrap().contains('\n'));
        assert!(!document_json(&doc, false).unwrap().contains('\n'));
    }
}

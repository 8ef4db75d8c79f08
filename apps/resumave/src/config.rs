use std::path::PathBuf;

use anyhow::{Context, Result};

/// CLI configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub resume_path: PathBuf,
    pub customization_path: Option<PathBuf>,
    pub template: Option<String>,
    pub output_path: Option<PathBuf>,
    pub pretty_output: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            resume_path: require_env(&lookup, "RESUME_PATH")?.into(),
            customization_path: optional("CUSTOMIZATION_PATH").map(PathBuf::from),
            template: optional("RESUME_TEMPLATE"),
            output_path: optional("OUTPUT_PATH").map(PathBuf::from),
            pretty_output: optional("PRETTY_OUTPUT")
                .map(|v| parse_flag(&v))
                .transpose()
                .context("PRETTY_OUTPUT must be true/false or 1/0")?
                .unwrap_or(false),
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_env<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => anyhow::bail!("invalid flag value '{other}'"),
    }
}

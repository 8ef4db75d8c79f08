mod config;
mod input;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::input::{load_customization, load_resume, write_document};
use resumave::{AppError, CustomizationStore, ResumePreview};

fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging; stdout carries only the document
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Resumave v{}", env!("CARGO_PKG_VERSION"));

    run(&config)
        .inspect_err(AppError::report)
        .context("Resume rendering failed")
}

fn run(config: &Config) -> Result<(), AppError> {
    let resume = load_resume(&config.resume_path)?;
    info!(path = %config.resume_path.display(), "Resume loaded");

    let mut store = match &config.customization_path {
        Some(path) => {
            let customization = load_customization(path)?;
            info!(path = %path.display(), "Customization loaded");
            CustomizationStore::with_customization(customization)
        }
        None => CustomizationStore::new(),
    };

    // A named template overrides the colors of a loaded customization
    if let Some(name) = &config.template {
        if !store.select_template(name).is_applied() {
            return Err(AppError::UnknownTemplate(name.clone()));
        }
        info!("Template selected: {}", store.selected_template().as_str());
    }

    let document = ResumePreview::new(store, resume).into_document();
    info!(
        sections = document.section_order().len(),
        "Document composed: {}", document.metadata.title
    );

    write_document(&document, config.output_path.as_deref(), config.pretty_output)?;
    match &config.output_path {
        Some(path) => info!("Document written to {}", path.display()),
        None => info!("Document written to stdout"),
    }
    Ok(())
}

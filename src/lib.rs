use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

pub mod application;
pub mod config;
pub mod documents;

pub use crate::application::{Application, ApplicationId, ApplicationRepository};
pub use crate::config::DocumentSettings;
pub use crate::documents::{DocumentEngine, DocumentError, GeneratedDocument};

/// Render the document for one application to a PDF file.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "application-documents", version)]
pub struct CliArgs {
    /// JSON file holding an array of applications
    pub applications: PathBuf,
    /// Identifier of the application to render
    pub application_id: ApplicationId,
    /// Where to write the generated PDF
    pub output: PathBuf,
    /// Location prefix for templates (defaults to DOCUMENTS_TEMPLATE_ROOT)
    pub base_location: Option<String>,
}

pub async fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let settings = DocumentSettings::from_env().context("failed to load document settings")?;

    let base_location = args
        .base_location
        .clone()
        .unwrap_or_else(|| settings.template_root.to_string_lossy().into_owned());

    let repository = Arc::new(application::JsonFileApplicationRepository::new(
        &args.applications,
    ));
    let engine = DocumentEngine::new(repository, settings);

    match engine.generate(&args.application_id, &base_location).await? {
        Some(document) => {
            tokio::fs::write(&args.output, &document.pdf)
                .await
                .with_context(|| format!("failed to write {}", args.output.display()))?;
            log::info!(
                "wrote {} ({}) to {}",
                document.filename,
                document.pdf.len(),
                args.output.display()
            );
        }
        None => {
            log::info!(
                "no document produced for application {}",
                args.application_id
            );
        }
    }

    Ok(())
}

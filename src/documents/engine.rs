//! Document generation entry point.

use std::sync::Arc;

use super::builders::builder_for;
use super::common::sanitize_filename;
use super::converter::{DocumentConverter, LayoutOptions, TypstPdfConverter};
use super::diagnostics::{Diagnostics, LogDiagnostics};
use super::kind::DocumentKind;
use super::render::{TypstViewRenderer, ViewRenderer};
use super::templates::{StaticTemplateRegistry, TemplateRegistry};
use super::{DocumentError, GeneratedDocument};
use crate::application::{ApplicationId, ApplicationRepository};
use crate::config::DocumentSettings;

/// Looks up an application and produces the document for its current state.
///
/// Holds no per-request state; every call reads the application afresh.
#[derive(Clone)]
pub struct DocumentEngine {
    repository: Arc<dyn ApplicationRepository>,
    templates: Arc<dyn TemplateRegistry>,
    renderer: Arc<dyn ViewRenderer>,
    converter: Arc<dyn DocumentConverter>,
    diagnostics: Arc<dyn Diagnostics>,
    settings: DocumentSettings,
}

impl DocumentEngine {
    /// Engine wired to the Typst renderer/converter and `log` diagnostics.
    pub fn new(repository: Arc<dyn ApplicationRepository>, settings: DocumentSettings) -> Self {
        Self {
            repository,
            templates: Arc::new(StaticTemplateRegistry::new()),
            renderer: Arc::new(TypstViewRenderer::new()),
            converter: Arc::new(TypstPdfConverter::new()),
            diagnostics: Arc::new(LogDiagnostics),
            settings,
        }
    }

    pub fn with_templates(mut self, templates: Arc<dyn TemplateRegistry>) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn ViewRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_converter(mut self, converter: Arc<dyn DocumentConverter>) -> Self {
        self.converter = converter;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn settings(&self) -> &DocumentSettings {
        &self.settings
    }

    /// Generate the document for an application.
    ///
    /// Returns `Ok(None)` when the application does not exist or its state has
    /// no document; both cases emit one warning. Collaborator failures are
    /// returned as errors.
    pub async fn generate(
        &self,
        application_id: &ApplicationId,
        base_location: &str,
    ) -> Result<Option<GeneratedDocument>, DocumentError> {
        let Some(application) = self.repository.find(application_id).await? else {
            self.diagnostics
                .warn(&format!("No application found for id {}", application_id));
            return Ok(None);
        };

        let Some(kind) = DocumentKind::for_state(&application.state) else {
            self.diagnostics.warn(&format!(
                "No document template for application {} in state {}",
                application.id, application.state
            ));
            return Ok(None);
        };

        let markup = builder_for(kind).render(
            &application,
            &self.settings,
            base_location,
            self.templates.as_ref(),
            self.renderer.as_ref(),
        )?;

        let options = LayoutOptions::default().with_header(self.settings.header_markup.clone());
        let pdf = self.converter.convert(&markup, &options)?;

        log::info!(
            "generated {} document for application {} ({} bytes)",
            kind.template_name(),
            application.id,
            pdf.len()
        );

        Ok(Some(GeneratedDocument {
            filename: format!(
                "{}-{}.pdf",
                kind.slug(),
                sanitize_filename(&application.reference, "application")
            ),
            pdf,
            kind,
        }))
    }
}

//! Documents module - picks, assembles and renders the document for an application.
//!
//! One builder exists per document kind:
//! - `Pending` - acknowledgement of a pending application
//! - `Activated` - portfolio summary for an activated application
//! - `InReview` - portfolio summary plus the reason the application is on hold

pub mod builders;
pub mod common;
pub mod converter;
pub mod diagnostics;
pub mod engine;
pub mod funds;
pub mod kind;
pub mod render;
pub mod review;
pub mod templates;
pub mod view_model;

pub use builders::{builder_for, DocumentBuilder};
pub use converter::{DocumentConverter, LayoutOptions, PageNumbering, TypstPdfConverter};
pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use engine::DocumentEngine;
pub use kind::DocumentKind;
pub use render::{TypstViewRenderer, ViewRenderer};
pub use templates::{StaticTemplateRegistry, TemplateRegistry};
pub use view_model::DocumentViewModel;

use thiserror::Error;

use crate::application::{ApplicationId, RepositoryError};

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("application lookup failed: {0}")]
    Repository(#[from] RepositoryError),
    #[error("no template registered for document kind '{0}'")]
    TemplateNotRegistered(String),
    #[error("failed to load Typst template {path}: {source}")]
    TemplateIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("application {0} is in review but carries no review record")]
    MissingReview(ApplicationId),
    #[error("application {0} is flagged as a legal entity but carries no legal-entity details")]
    MissingLegalEntity(ApplicationId),
    #[error("net total for application {0} overflows")]
    NetTotalOverflow(ApplicationId),
    #[error("failed to serialize view model: {0}")]
    ViewModel(#[source] serde_json::Error),
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write Typst source: {0}")]
    WriteTypst(#[source] std::io::Error),
    #[error("Typst CLI execution failed: {0}")]
    TypstIo(#[source] std::io::Error),
    #[error("Typst CLI exited with status {0}")]
    TypstExit(i32),
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
    pub kind: DocumentKind,
}

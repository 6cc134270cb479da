#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use application_documents::application::{
    Applicant, Application, ApplicationId, Fund, InMemoryApplicationRepository, LegalEntity,
    LifecycleState, Product, Review,
};
use application_documents::config::DocumentSettings;
use application_documents::documents::{
    Diagnostics, DocumentConverter, DocumentError, DocumentViewModel, LayoutOptions,
    ViewRenderer,
};
use application_documents::DocumentEngine;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub fn test_settings() -> DocumentSettings {
    DocumentSettings {
        support_email: "support@example.com".to_string(),
        signature: "The Operations Team".to_string(),
        tax_rate: Decimal::new(2, 1),
        header_markup: "*Test Header*".to_string(),
        template_root: application_documents::config::default_template_root().to_path_buf(),
    }
}

pub fn fund(name: &str, amount: i64, fee: i64) -> Fund {
    Fund {
        name: name.to_string(),
        amount: Decimal::from(amount),
        fee: Decimal::from(fee),
    }
}

pub fn application(state: LifecycleState) -> Application {
    Application {
        id: ApplicationId::new(),
        reference: "REF-1".to_string(),
        state,
        applicant: Applicant {
            first_name: "Jane".to_string(),
            surname: "Doe".to_string(),
        },
        application_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        is_legal_entity: false,
        legal_entity: None,
        products: vec![
            Product {
                name: "P1".to_string(),
                funds: vec![fund("f1", 100, 10), fund("f2", 50, 0)],
            },
            Product {
                name: "P2".to_string(),
                funds: vec![fund("f3", 20, 5)],
            },
        ],
        current_review: None,
    }
}

pub fn legal_entity() -> LegalEntity {
    LegalEntity {
        name: "Doe Holdings Ltd".to_string(),
        registration_number: "12345678".to_string(),
        address: Some("1 Main Street".to_string()),
    }
}

pub fn review(reason: &str) -> Review {
    Review {
        reason: reason.to_string(),
        opened_on: NaiveDate::from_ymd_opt(2024, 2, 1),
    }
}

/// Diagnostics implementation that keeps every warning.
#[derive(Default)]
pub struct RecordingDiagnostics {
    pub warnings: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

/// Renderer that records what it was asked to render.
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Mutex<Vec<(String, DocumentViewModel)>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<(String, DocumentViewModel)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ViewRenderer for RecordingRenderer {
    fn render(&self, location: &str, model: &DocumentViewModel) -> Result<String, DocumentError> {
        self.calls
            .lock()
            .unwrap()
            .push((location.to_string(), model.clone()));
        Ok(format!("= {}", model.common().reference))
    }
}

/// Converter that returns the markup bytes prefixed with a fake PDF header.
#[derive(Default)]
pub struct EchoConverter {
    pub options: Mutex<Vec<LayoutOptions>>,
}

impl DocumentConverter for EchoConverter {
    fn convert(&self, markup: &str, options: &LayoutOptions) -> Result<Vec<u8>, DocumentError> {
        self.options.lock().unwrap().push(options.clone());
        let mut bytes = b"%PDF-".to_vec();
        bytes.extend_from_slice(markup.as_bytes());
        Ok(bytes)
    }
}

/// Converter that always fails the way a crashed compiler would.
pub struct FailingConverter;

impl DocumentConverter for FailingConverter {
    fn convert(&self, _markup: &str, _options: &LayoutOptions) -> Result<Vec<u8>, DocumentError> {
        Err(DocumentError::TypstExit(1))
    }
}

pub struct Harness {
    pub engine: DocumentEngine,
    pub repository: InMemoryApplicationRepository,
    pub diagnostics: Arc<RecordingDiagnostics>,
    pub renderer: Arc<RecordingRenderer>,
    pub converter: Arc<EchoConverter>,
}

pub fn harness(applications: Vec<Application>) -> Harness {
    let repository = InMemoryApplicationRepository::with_applications(applications);
    let diagnostics = Arc::new(RecordingDiagnostics::default());
    let renderer = Arc::new(RecordingRenderer::default());
    let converter = Arc::new(EchoConverter::default());

    let engine = DocumentEngine::new(Arc::new(repository.clone()), test_settings())
        .with_diagnostics(diagnostics.clone())
        .with_renderer(renderer.clone())
        .with_converter(converter.clone());

    Harness {
        engine,
        repository,
        diagnostics,
        renderer,
        converter,
    }
}

pub fn static_dir() -> PathBuf {
    application_documents::config::default_template_root().to_path_buf()
}

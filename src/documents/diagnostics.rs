/// Sink for soft-failure warnings.
pub trait Diagnostics: Send + Sync {
    fn warn(&self, message: &str);
}

/// Forwards warnings to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&self, message: &str) {
        log::warn!(target: "application_documents::documents", "{}", message);
    }
}

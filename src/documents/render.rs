//! View rendering: binds a view model to a Typst template.

use std::fs;

use super::common::escape_typst_string;
use super::view_model::DocumentViewModel;
use super::DocumentError;

pub trait ViewRenderer: Send + Sync {
    /// Render the template at `location` with `model` into markup.
    fn render(&self, location: &str, model: &DocumentViewModel) -> Result<String, DocumentError>;
}

/// Reads templates from disk and exposes the view model to them as `model`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypstViewRenderer;

impl TypstViewRenderer {
    pub fn new() -> Self {
        Self
    }

    fn model_binding(model: &DocumentViewModel) -> Result<String, DocumentError> {
        let json = serde_json::to_string(model).map_err(DocumentError::ViewModel)?;
        Ok(format!(
            "#let model = json(bytes(\"{}\"))\n",
            escape_typst_string(&json)
        ))
    }
}

impl ViewRenderer for TypstViewRenderer {
    fn render(&self, location: &str, model: &DocumentViewModel) -> Result<String, DocumentError> {
        let template = fs::read_to_string(location).map_err(|source| DocumentError::TemplateIo {
            path: location.to_string(),
            source,
        })?;

        let mut source = Self::model_binding(model)?;
        source.push_str(&template);
        Ok(source)
    }
}

//! Template path resolution.

use std::collections::HashMap;

use super::DocumentError;

pub trait TemplateRegistry: Send + Sync {
    /// Relative template path for a document kind name.
    fn resolve(&self, kind_name: &str) -> Result<String, DocumentError>;
}

/// Fixed name-to-path table.
#[derive(Debug, Clone)]
pub struct StaticTemplateRegistry {
    paths: HashMap<String, String>,
}

impl StaticTemplateRegistry {
    pub fn new() -> Self {
        let paths = [
            ("Pending", "/templates/pending.typ"),
            ("Activated", "/templates/activated.typ"),
            ("InReview", "/templates/in_review.typ"),
        ]
        .into_iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect();

        Self { paths }
    }

    pub fn with_template(mut self, kind_name: impl Into<String>, path: impl Into<String>) -> Self {
        self.paths.insert(kind_name.into(), path.into());
        self
    }
}

impl Default for StaticTemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRegistry for StaticTemplateRegistry {
    fn resolve(&self, kind_name: &str) -> Result<String, DocumentError> {
        self.paths
            .get(kind_name)
            .cloned()
            .ok_or_else(|| DocumentError::TemplateNotRegistered(kind_name.to_string()))
    }
}

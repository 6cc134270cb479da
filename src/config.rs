//! Process configuration consumed by the document builders.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

pub const DEFAULT_HEADER_MARKUP: &str = "*Application Services*";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("DOCUMENTS_TAX_RATE '{0}' is not a decimal number")]
    InvalidTaxRate(String),
}

/// Read-only values every document needs.
#[derive(Debug, Clone)]
pub struct DocumentSettings {
    pub support_email: String,
    pub signature: String,
    pub tax_rate: Decimal,
    pub header_markup: String,
    pub template_root: PathBuf,
}

impl DocumentSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let support_email = required("DOCUMENTS_SUPPORT_EMAIL")?;
        let signature = required("DOCUMENTS_SIGNATURE")?;
        let raw_rate = required("DOCUMENTS_TAX_RATE")?;
        let tax_rate = Decimal::from_str(raw_rate.trim())
            .map_err(|_| ConfigError::InvalidTaxRate(raw_rate.clone()))?;

        let header_markup = lookup("DOCUMENTS_HEADER_MARKUP")
            .unwrap_or_else(|| DEFAULT_HEADER_MARKUP.to_string());
        let template_root = lookup("DOCUMENTS_TEMPLATE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| default_template_root().to_path_buf());

        Ok(Self {
            support_email,
            signature,
            tax_rate,
            header_markup,
            template_root,
        })
    }
}

/// Directory holding the bundled Typst templates.
pub fn default_template_root() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let settings = DocumentSettings::from_lookup(lookup_from(&[
            ("DOCUMENTS_SUPPORT_EMAIL", "support@example.com"),
            ("DOCUMENTS_SIGNATURE", "The Operations Team"),
            ("DOCUMENTS_TAX_RATE", "0.2"),
        ]))
        .unwrap();

        assert_eq!(settings.support_email, "support@example.com");
        assert_eq!(settings.tax_rate, Decimal::new(2, 1));
        assert_eq!(settings.header_markup, DEFAULT_HEADER_MARKUP);
        assert_eq!(settings.template_root, default_template_root());
    }

    #[test]
    fn test_missing_value() {
        let result = DocumentSettings::from_lookup(lookup_from(&[
            ("DOCUMENTS_SUPPORT_EMAIL", "support@example.com"),
            ("DOCUMENTS_TAX_RATE", "0.2"),
        ]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("DOCUMENTS_SIGNATURE"));
    }

    #[test]
    fn test_invalid_tax_rate() {
        let result = DocumentSettings::from_lookup(lookup_from(&[
            ("DOCUMENTS_SUPPORT_EMAIL", "support@example.com"),
            ("DOCUMENTS_SIGNATURE", "Ops"),
            ("DOCUMENTS_TAX_RATE", "twenty percent"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidTaxRate(_))));
    }
}

//! Typst conversion engine.
//!
//! Handles writing Typst source to a temporary directory, invoking the
//! compiler, and reading back the output PDF.

use std::fs;
use std::process::Command;

use tempfile::{tempdir, TempDir};

use super::DocumentError;
use crate::config::DEFAULT_HEADER_MARKUP;

const SOURCE_FILE: &str = "document.typ";
const OUTPUT_FILE: &str = "document.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNumbering {
    Numeric,
    Hidden,
}

/// Page layout applied on top of the rendered markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    pub page_numbering: PageNumbering,
    pub header_on_first_page_only: bool,
    pub header_markup: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            page_numbering: PageNumbering::Numeric,
            header_on_first_page_only: true,
            header_markup: DEFAULT_HEADER_MARKUP.to_string(),
        }
    }
}

impl LayoutOptions {
    pub fn with_header(mut self, header_markup: impl Into<String>) -> Self {
        self.header_markup = header_markup.into();
        self
    }

    /// Typst `#set page(..)` rule for these options.
    pub fn page_setup(&self) -> String {
        let numbering = match self.page_numbering {
            PageNumbering::Numeric => "\"1\"",
            PageNumbering::Hidden => "none",
        };

        let header = if self.header_on_first_page_only {
            format!(
                "context {{ if counter(page).get().first() == 1 [{}] }}",
                self.header_markup
            )
        } else {
            format!("[{}]", self.header_markup)
        };

        format!("#set page(numbering: {numbering}, header: {header})\n")
    }
}

pub trait DocumentConverter: Send + Sync {
    fn convert(&self, markup: &str, options: &LayoutOptions) -> Result<Vec<u8>, DocumentError>;
}

/// Compiles markup with the `typst` CLI.
#[derive(Debug, Clone)]
pub struct TypstPdfConverter {
    program: String,
}

impl TypstPdfConverter {
    pub fn new() -> Self {
        Self {
            program: "typst".to_string(),
        }
    }

    /// Use a different compiler executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for TypstPdfConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentConverter for TypstPdfConverter {
    fn convert(&self, markup: &str, options: &LayoutOptions) -> Result<Vec<u8>, DocumentError> {
        let temp_dir = tempdir().map_err(DocumentError::TempDir)?;

        let mut source = options.page_setup();
        source.push_str(markup);
        fs::write(temp_dir.path().join(SOURCE_FILE), source).map_err(DocumentError::WriteTypst)?;

        compile_typst_to_pdf(&self.program, &temp_dir)
    }
}

fn compile_typst_to_pdf(program: &str, temp_dir: &TempDir) -> Result<Vec<u8>, DocumentError> {
    let typ_path = temp_dir.path().join(SOURCE_FILE);
    let output_path = temp_dir.path().join(OUTPUT_FILE);

    let status = Command::new(program)
        .arg("compile")
        .arg(&typ_path)
        .arg(&output_path)
        .current_dir(temp_dir.path())
        .status()
        .map_err(DocumentError::TypstIo)?;

    if !status.success() {
        let code = status.code().unwrap_or(-1);
        return Err(DocumentError::TypstExit(code));
    }

    fs::read(&output_path).map_err(DocumentError::ReadPdf)
}

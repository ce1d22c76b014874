use log::{info, warn};
use once_cell::sync::OnceCell;
use std::path::Path;

use crate::core::domain::Year1Document;
use crate::parsing::json_parser::{self, ParseError};

/// Example document shown to users and used when a submission cannot be parsed.
pub const DEFAULT_DOCUMENT_JSON: &str = include_str!("../../data/demoArea.json");

static DEFAULT_DOCUMENT: OnceCell<Year1Document> = OnceCell::new();

/// Where the document returned by a resolve call came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSource {
    Submitted,
    Fallback,
}

/// Result of resolving a submission
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub document: Year1Document,
    pub source: DocumentSource,
    /// Parse error of the rejected submission, when the fallback was used.
    pub rejected: Option<String>,
}

impl LoadOutcome {
    pub fn used_fallback(&self) -> bool {
        self.source == DocumentSource::Fallback
    }
}

/// Unified interface for loading Year 1 documents
pub struct DocumentLoader;

impl DocumentLoader {
    /// Load a document from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Year1Document, ParseError> {
        let document = json_parser::parse_document(path)?;
        info!(
            "Loaded {} areas from {}",
            document.area_count(),
            path.display()
        );
        Ok(document)
    }

    /// Load a document from a JSON string
    pub fn load_from_str(json_str: &str) -> Result<Year1Document, ParseError> {
        json_parser::parse_document_str(json_str)
    }

    /// The bundled example document, parsed once
    pub fn default_document() -> Result<&'static Year1Document, ParseError> {
        DEFAULT_DOCUMENT.get_or_try_init(|| json_parser::parse_document_str(DEFAULT_DOCUMENT_JSON))
    }

    /// Load the fallback document: the file at `path` if given, else the bundled example
    pub fn load_default(path: Option<&Path>) -> Result<Year1Document, ParseError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::default_document().cloned(),
        }
    }

    /// Parse a submission, replacing it with `fallback` if it cannot be parsed
    ///
    /// Nothing of a rejected submission is kept.
    pub fn resolve_with_fallback(json_str: &str, fallback: &Year1Document) -> LoadOutcome {
        match json_parser::parse_document_str(json_str) {
            Ok(document) => LoadOutcome {
                document,
                source: DocumentSource::Submitted,
                rejected: None,
            },
            Err(e) => {
                warn!("Submitted document rejected, showing the default instead: {}", e);
                LoadOutcome {
                    document: fallback.clone(),
                    source: DocumentSource::Fallback,
                    rejected: Some(e.to_string()),
                }
            }
        }
    }

    /// Parse a submission, falling back to the bundled example document
    ///
    /// # Examples
    ///
    /// ```
    /// use lts_year1::io::DocumentLoader;
    ///
    /// let outcome = DocumentLoader::resolve_submission("{ not json").unwrap();
    /// assert!(outcome.used_fallback());
    /// assert_eq!(outcome.document.area_count(), 3);
    /// ```
    pub fn resolve_submission(json_str: &str) -> Result<LoadOutcome, ParseError> {
        let fallback = Self::default_document()?;
        Ok(Self::resolve_with_fallback(json_str, fallback))
    }
}

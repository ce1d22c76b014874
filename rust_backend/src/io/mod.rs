//! Document loading and export.
//!
//! This module provides the loaders that turn submitted text or files into a
//! [`Year1Document`](crate::core::domain::Year1Document), the fallback policy
//! for rejected submissions, and the export of the document as a download.
//!
//! # Example
//!
//! ```no_run
//! use lts_year1::io::{export, DocumentLoader};
//! use std::path::Path;
//!
//! let document = DocumentLoader::load_from_file(Path::new("demoArea.json"))
//!     .expect("Failed to load");
//! let path = export::export_document(&document, Path::new("."), Some(7), export::local_today())
//!     .expect("Failed to export");
//! println!("Wrote {}", path.display());
//! ```

pub mod export;
pub mod loaders;

#[cfg(test)]
mod loaders_tests;

pub use export::{export_document, export_file_name, format_document, ExportError};
pub use loaders::{DocumentLoader, DocumentSource, LoadOutcome};

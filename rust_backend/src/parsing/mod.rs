//! Parsers for the Year 1 preference document.
//!
//! The document is parsed in two stages: [`json_parser::parse_document_str`]
//! checks the outer structure and keeps area records raw, then
//! [`json_parser::decode_area`] turns each record into a typed shape.
//!
//! # Example
//!
//! ```no_run
//! use lts_year1::parsing::json_parser::parse_document;
//! use std::path::Path;
//!
//! let document = parse_document(Path::new("demoArea.json"))
//!     .expect("Failed to parse document");
//! println!("{} areas", document.area_count());
//! ```

pub mod json_parser;


pub use json_parser::{decode_area, parse_document, parse_document_str, ParseError, ShapeDecodeError};

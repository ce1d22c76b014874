use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub use crate::core::domain::AREAS_KEY;
use crate::core::domain::{ShapeKind, ShapeRecord, Year1Document};

/// The only structural requirement on a document: `year1Areas` is an array.
/// Its records are checked one by one later.
#[derive(Deserialize)]
struct AreasShape {
    #[serde(rename = "year1Areas")]
    _areas: Vec<IgnoredAny>,
}

/// Error returned when a submitted document cannot be used at all
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON syntax: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Document must be a JSON object")]
    NotAnObject,

    #[error("JSON must contain a 'year1Areas' key. Found keys: {found:?}")]
    MissingAreas { found: Vec<String> },

    #[error("Invalid document structure at '{path}': {message}")]
    InvalidStructure { path: String, message: String },
}

/// Error returned when a single area record cannot be decoded
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeDecodeError {
    #[error("Area record is not a JSON object")]
    NotAnObject,

    #[error("Area record has no 'type' field")]
    MissingType,

    #[error("Unknown shape type '{0}'")]
    UnknownType(String),

    #[error("Invalid {kind} record at '{path}': {message}")]
    Malformed {
        kind: ShapeKind,
        path: String,
        message: String,
    },
}

/// Parse a Year 1 document file
pub fn parse_document(json_path: &Path) -> Result<Year1Document, ParseError> {
    let json_content = std::fs::read_to_string(json_path).map_err(|source| ParseError::Io {
        path: json_path.to_path_buf(),
        source,
    })?;

    parse_document_str(&json_content)
}

/// Parse a Year 1 document from a string
///
/// Only the outer structure is checked here; area records stay raw and are
/// decoded one by one with [`decode_area`], so one bad record cannot reject
/// the whole document.
pub fn parse_document_str(json_str: &str) -> Result<Year1Document, ParseError> {
    let json_value: Value = serde_json::from_str(json_str).map_err(ParseError::InvalidJson)?;

    let object = json_value.as_object().ok_or(ParseError::NotAnObject)?;
    if !object.contains_key(AREAS_KEY) {
        return Err(ParseError::MissingAreas {
            found: object.keys().cloned().collect(),
        });
    }

    // Metadata such as `survey` is passed through untyped; only the areas
    // list can reject a document.
    let _: AreasShape = serde_path_to_error::deserialize(&json_value).map_err(|e| {
        ParseError::InvalidStructure {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    })?;

    match json_value {
        Value::Object(fields) => Ok(Year1Document::from_fields(fields)),
        _ => Err(ParseError::NotAnObject),
    }
}

/// Decode one raw entry of `year1Areas` into a shape record
///
/// The `type` tag is checked first so that unknown shapes are reported as
/// such rather than as a generic deserialization failure.
///
/// # Examples
///
/// ```
/// use lts_year1::parsing::json_parser::{decode_area, ShapeDecodeError};
/// use serde_json::json;
///
/// let err = decode_area(&json!({"type": "hexagon"})).unwrap_err();
/// assert_eq!(err, ShapeDecodeError::UnknownType("hexagon".to_string()));
/// ```
pub fn decode_area(raw: &Value) -> Result<ShapeRecord, ShapeDecodeError> {
    let object = raw.as_object().ok_or(ShapeDecodeError::NotAnObject)?;

    let kind = match object.get("type") {
        None => return Err(ShapeDecodeError::MissingType),
        Some(Value::String(tag)) => {
            ShapeKind::from_tag(tag).ok_or_else(|| ShapeDecodeError::UnknownType(tag.clone()))?
        }
        Some(other) => return Err(ShapeDecodeError::UnknownType(other.to_string())),
    };

    let malformed = |e: serde_path_to_error::Error<serde_json::Error>| ShapeDecodeError::Malformed {
        kind,
        path: e.path().to_string(),
        message: e.inner().to_string(),
    };

    // The tag is already known, so decode the variant body directly; paths
    // into buffered tagged content would be lost.
    match kind {
        ShapeKind::Box => serde_path_to_error::deserialize(raw)
            .map(ShapeRecord::Box)
            .map_err(malformed),
        ShapeKind::Circle => serde_path_to_error::deserialize(raw)
            .map(ShapeRecord::Circle)
            .map_err(malformed),
        ShapeKind::Ellipse => serde_path_to_error::deserialize(raw)
            .map(ShapeRecord::Ellipse)
            .map_err(malformed),
    }
}

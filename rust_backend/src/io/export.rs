//! Export of the Year 1 document as a downloadable JSON file.
//!
//! The file content mirrors Python's
//! `json.dumps(data, indent=4, separators=(", ", ": "))`: four-space
//! indentation, `", "` between items (so lines end in a trailing space),
//! `": "` between keys and values, non-ASCII escaped as `\uXXXX` and floats in
//! Python `repr` notation. Only the submitted document is written; computed
//! outlines never are.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::domain::Year1Document;

/// Largest survey selection that fits the two-digit file name prefix.
pub const MAX_SURVEY_NUMBER: u8 = 99;

/// Error type for export operations
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Survey number {0} does not fit the two-digit file prefix")]
    InvalidSurveyNumber(u8),

    #[error("Failed to write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// `serde_json` formatter producing Python `json.dumps` style output.
#[derive(Debug, Default)]
pub struct PythonJsonFormatter {
    current_indent: usize,
    has_value: bool,
}

const INDENT: &[u8] = b"    ";

impl PythonJsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_indent<W: ?Sized + io::Write>(&self, writer: &mut W) -> io::Result<()> {
        for _ in 0..self.current_indent {
            writer.write_all(INDENT)?;
        }
        Ok(())
    }
}

impl Formatter for PythonJsonFormatter {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.current_indent += 1;
        self.has_value = false;
        writer.write_all(b"[")
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.current_indent -= 1;
        if self.has_value {
            writer.write_all(b"\n")?;
            self.write_indent(writer)?;
        }
        writer.write_all(b"]")
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        writer.write_all(if first { b"\n" } else { b", \n" })?;
        self.write_indent(writer)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.current_indent += 1;
        self.has_value = false;
        writer.write_all(b"{")
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.current_indent -= 1;
        if self.has_value {
            writer.write_all(b"\n")?;
            self.write_indent(writer)?;
        }
        writer.write_all(b"}")
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        writer.write_all(if first { b"\n" } else { b", \n" })?;
        self.write_indent(writer)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        writer.write_all(python_float_repr(value).as_bytes())
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        // Printable ASCII passes through; everything else becomes \uXXXX.
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Formats a float the way Python's `repr` does.
///
/// # Examples
///
/// ```
/// use lts_year1::io::export::python_float_repr;
///
/// assert_eq!(python_float_repr(52.5), "52.5");
/// assert_eq!(python_float_repr(0.0), "0.0");
/// assert_eq!(python_float_repr(1e-5), "1e-05");
/// assert_eq!(python_float_repr(2.5e16), "2.5e+16");
/// ```
pub fn python_float_repr(value: f64) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if (-4..16).contains(&exponent) {
        let fixed = value.to_string();
        if fixed.contains('.') {
            fixed
        } else {
            format!("{}.0", fixed)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// Serializes any value with [`PythonJsonFormatter`].
pub fn to_python_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExportError> {
    let mut buffer = Vec::with_capacity(256);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PythonJsonFormatter::new());
    value.serialize(&mut serializer)?;
    // The formatter only ever writes ASCII.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Formats the document as it appears in the exported file.
pub fn format_document(document: &Year1Document) -> Result<String, ExportError> {
    to_python_json(document)
}

/// Builds `S<NN>_LTSYear1_<YYYYMMDD>.json`; an unselected survey is `00`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lts_year1::io::export::export_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
/// assert_eq!(export_file_name(Some(7), date).unwrap(), "S07_LTSYear1_20260309.json");
/// assert_eq!(export_file_name(None, date).unwrap(), "S00_LTSYear1_20260309.json");
/// ```
pub fn export_file_name(survey: Option<u8>, date: NaiveDate) -> Result<String, ExportError> {
    let survey = survey.unwrap_or(0);
    if survey > MAX_SURVEY_NUMBER {
        return Err(ExportError::InvalidSurveyNumber(survey));
    }
    Ok(format!("S{:02}_LTSYear1_{}.json", survey, date.format("%Y%m%d")))
}

/// Today's date in the local time zone, as used in export file names.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Writes the formatted document into `dir` and returns the file path.
pub fn export_document(
    document: &Year1Document,
    dir: &Path,
    survey: Option<u8>,
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_file_name(survey, date)?);
    let content = format_document(document)?;
    std::fs::write(&path, content).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    log::info!("Exported {} areas to {}", document.area_count(), path.display());
    Ok(path)
}

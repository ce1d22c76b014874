//! Streamlit API Functions.
//!
//! `#[pyfunction]` exports used by the Streamlit page. Each one parses the
//! text from the code editor, calls into the library and converts the result
//! at the boundary.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::api::types as api;
use crate::config::AppConfig;
use crate::geometry::convert_areas;
use crate::io::export::{self, local_today};
use crate::io::loaders::{DocumentLoader, DEFAULT_DOCUMENT_JSON};
use crate::services::{build_sky_plot, ExposureGrid};

/// Register all API functions and classes with the Python module.
pub fn register_api_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(area_outlines, m)?)?;
    m.add_function(wrap_pyfunction!(sky_plot_json, m)?)?;
    m.add_function(wrap_pyfunction!(py_format_document, m)?)?;
    m.add_function(wrap_pyfunction!(py_export_file_name, m)?)?;
    m.add_function(wrap_pyfunction!(default_document_text, m)?)?;

    m.add_class::<api::SkyOutline>()?;
    m.add_class::<api::SkippedAreaInfo>()?;
    m.add_class::<api::AreaOutlines>()?;

    Ok(())
}

fn runtime_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyRuntimeError, _>(e.to_string())
}

/// Convert every area of a submitted document into a closed outline.
///
/// Unparseable submissions are replaced by the bundled default document.
///
/// Args:
///     text: JSON text from the editor
///
/// Returns:
///     AreaOutlines with the drawable outlines and the skipped entries
#[pyfunction]
fn area_outlines(text: &str) -> PyResult<api::AreaOutlines> {
    let outcome = DocumentLoader::resolve_submission(text).map_err(runtime_error)?;
    let report = convert_areas(outcome.document.year1_areas());
    Ok(api::AreaOutlines::from_report(&report, &outcome))
}

/// Describe the full sky plot as JSON.
///
/// Args:
///     text: JSON text from the editor
///     exposure: Optional rows x cols grid of exposure minutes
///
/// Returns:
///     JSON string with layout, heatmap, traces and skipped areas
#[pyfunction]
#[pyo3(signature = (text, exposure=None))]
fn sky_plot_json(text: &str, exposure: Option<Vec<Vec<f64>>>) -> PyResult<String> {
    let grid = exposure
        .map(ExposureGrid::new)
        .transpose()
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;

    let settings = AppConfig::from_default_location_or_default().plot;

    let outcome = DocumentLoader::resolve_submission(text).map_err(runtime_error)?;
    let plot = build_sky_plot(&outcome.document, grid.as_ref(), &settings);
    serde_json::to_string(&plot)
        .map_err(|e| runtime_error(format!("Serialization failed: {}", e)))
}

/// Format a document the way the download button writes it.
///
/// Raises:
///     ValueError: if the text is not a valid Year 1 document
#[pyfunction]
#[pyo3(name = "format_document")]
fn py_format_document(text: &str) -> PyResult<String> {
    let document = DocumentLoader::load_from_str(text)
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
    export::format_document(&document).map_err(runtime_error)
}

/// File name of today's export, e.g. `S07_LTSYear1_20261019.json`.
#[pyfunction]
#[pyo3(name = "export_file_name", signature = (survey=None))]
fn py_export_file_name(survey: Option<u8>) -> PyResult<String> {
    export::export_file_name(survey, local_today())
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}

/// The example document shown in the editor on first load.
#[pyfunction]
fn default_document_text() -> &'static str {
    DEFAULT_DOCUMENT_JSON
}

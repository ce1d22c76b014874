//! Year 1 Long Term Scheduler area preferences.
//!
//! Parses the `year1Areas` document submitted by a survey, turns every box,
//! circle and ellipse into a closed outline on the (R.A., Dec) plane, builds
//! the preference sky plot and writes the document back out for download.
//!
//! The `python` feature adds the PyO3 module used by the Streamlit page.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod config;
pub mod core;
pub mod geometry;
pub mod io;
pub mod parsing;
pub mod services;

#[cfg(feature = "python")]
pub mod api;

pub use config::AppConfig;
pub use core::domain::{PolygonOutline, ShapeKind, ShapeRecord, SkyPoint, Year1Document};
pub use geometry::{convert_areas, convert_shape, ConversionReport, GeometryError};
pub use io::DocumentLoader;
pub use parsing::ParseError;

/// Python module exposing the Streamlit API.
#[cfg(feature = "python")]
#[pymodule]
fn lts_year1(m: &Bound<'_, PyModule>) -> PyResult<()> {
    api::register_api_functions(m)
}

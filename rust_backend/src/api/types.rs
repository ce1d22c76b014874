//! Python-facing Data Transfer Objects (DTOs).
//!
//! Plain `#[pyclass]` types built from primitives. Internal types such as
//! [`crate::core::domain::PolygonOutline`] never cross the boundary.

use pyo3::prelude::*;
use serde::Serialize;

/// A converted area, ready to be handed to plotly.
#[pyclass(module = "lts_year1", get_all)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyOutline {
    /// Area name, empty when the record had none
    pub name: String,
    /// `"box"`, `"circle"` or `"ellipse"`
    pub kind: String,
    /// Requested fraction of Year 1 time
    pub t_frac: f64,
    /// Closed ring right ascensions in degrees
    pub ra: Vec<f64>,
    /// Closed ring declinations in degrees
    pub dec: Vec<f64>,
}

#[pymethods]
impl SkyOutline {
    fn __len__(&self) -> usize {
        self.ra.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "SkyOutline(name={:?}, kind={}, t_frac={}, vertices={})",
            self.name,
            self.kind,
            self.t_frac,
            self.ra.len()
        )
    }
}

/// An area that could not be drawn.
#[pyclass(module = "lts_year1", get_all)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedAreaInfo {
    /// Position in `year1Areas`
    pub index: usize,
    pub name: Option<String>,
    pub reason: String,
}

#[pymethods]
impl SkippedAreaInfo {
    fn __repr__(&self) -> String {
        format!("SkippedAreaInfo(index={}, reason={:?})", self.index, self.reason)
    }
}

/// Result of converting a submitted document.
#[pyclass(module = "lts_year1", get_all)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaOutlines {
    pub outlines: Vec<SkyOutline>,
    pub skipped: Vec<SkippedAreaInfo>,
    /// True when the submission could not be parsed and the default document was used
    pub used_fallback: bool,
    /// Parse error of the rejected submission
    pub rejected: Option<String>,
}

#[pymethods]
impl AreaOutlines {
    fn __len__(&self) -> usize {
        self.outlines.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "AreaOutlines(outlines={}, skipped={}, used_fallback={})",
            self.outlines.len(),
            self.skipped.len(),
            if self.used_fallback { "True" } else { "False" }
        )
    }
}

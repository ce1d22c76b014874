//! # API Module
//!
//! Sole entry point for the Streamlit integration. PyO3 stays inside this
//! module; the rest of the crate is plain Rust.
//!
//! - [`types`]: `#[pyclass]` DTOs
//! - [`conversions`]: internal results to DTOs
//! - [`streamlit`]: `#[pyfunction]` exports

pub mod conversions;
pub mod streamlit;
pub mod types;

pub use streamlit::register_api_functions;
pub use types::*;

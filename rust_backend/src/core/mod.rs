//! Core domain models for Year 1 area planning.
//!
//! This module defines the fundamental data structures used throughout the crate,
//! representing the submitted document, its area records, and computed outlines.

pub mod domain;

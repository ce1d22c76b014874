//! Error types for shape-to-polygon conversion.

/// Result type for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Error type for geometry operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("RA and Dec arrays differ in length ({ra} vs {dec})")]
    MismatchedArrays { ra: usize, dec: usize },

    #[error("Convex hull needs at least 3 distinct points, got {0}")]
    TooFewPoints(usize),

    #[error("Convex hull is degenerate: all {0} points are collinear")]
    Collinear(usize),

    #[error("Tissot circle is undefined at the pole (Dec_center = {dec_center})")]
    PolarSingularity { dec_center: f64 },

    #[error("Non-finite value in {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },
}

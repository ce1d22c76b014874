//! Conversion of area records into closed sky outlines.
//!
//! Three shape handlers produce vertices in (RA, Dec) degrees:
//!
//! - [`hull`]: planar convex hull, used for boxes and ellipses
//! - [`tissot`]: small-circle approximation for circles
//! - [`ellipse`]: rotated ellipse sampling
//!
//! [`converter`] dispatches decoded records to the right handler and applies the
//! skip-and-log policy for records that cannot be drawn.
//!
//! # Example
//!
//! ```
//! use lts_year1::core::domain::{CircleArea, ShapeRecord};
//! use lts_year1::geometry::convert_shape;
//!
//! let record = ShapeRecord::Circle(CircleArea {
//!     name: "SMC".to_string(),
//!     ra_center: 13.2,
//!     dec_center: -72.8,
//!     radius: 4.0,
//!     t_frac: 0.2,
//! });
//! let outline = convert_shape(&record).expect("circle away from the pole");
//! assert!(outline.is_closed());
//! ```

pub mod converter;
pub mod ellipse;
pub mod error;
pub mod hull;
pub mod tissot;


pub use converter::{convert_areas, convert_shape, ConversionReport, SkippedArea};
pub use error::{GeometryError, GeometryResult};

//! Dispatch from area records to outlines.
//!
//! A record that cannot be drawn, whether its `type` is unknown, its fields are
//! malformed, or its geometry is degenerate, is skipped with a logged
//! diagnostic. The remaining records are still converted.

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;

use crate::core::domain::{PolygonOutline, ShapeRecord, SkyPoint};
use crate::parsing::json_parser::{decode_area, ShapeDecodeError};

use super::ellipse::ellipse_ring;
use super::error::{GeometryError, GeometryResult};
use super::hull::convex_hull;
use super::tissot::tissot_ring;

/// Converts one decoded record into its closed outline.
///
/// Boxes and ellipses are reduced through the convex hull; circles are
/// sampled directly from their Tissot ellipse.
pub fn convert_shape(record: &ShapeRecord) -> GeometryResult<PolygonOutline> {
    let vertices = match record {
        ShapeRecord::Box(area) => {
            if area.ra.len() != area.dec.len() {
                return Err(GeometryError::MismatchedArrays {
                    ra: area.ra.len(),
                    dec: area.dec.len(),
                });
            }
            let points: Vec<SkyPoint> = area
                .ra
                .iter()
                .zip(&area.dec)
                .map(|(&ra, &dec)| SkyPoint::new(ra, dec))
                .collect();
            convex_hull(&points)?
        }
        ShapeRecord::Circle(area) => tissot_ring(area)?,
        ShapeRecord::Ellipse(area) => ellipse_ring(area)?,
    };

    Ok(PolygonOutline::new(record, vertices))
}

/// Why an entry of `year1Areas` produced no outline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    #[error(transparent)]
    Decode(#[from] ShapeDecodeError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// An entry of `year1Areas` that was left out of the plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedArea {
    /// Position in `year1Areas`.
    pub index: usize,
    pub name: Option<String>,
    pub reason: String,
}

/// Outcome of converting every entry of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversionReport {
    pub outlines: Vec<PolygonOutline>,
    pub skipped: Vec<SkippedArea>,
}

impl ConversionReport {
    /// Returns `true` if every entry produced an outline.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Converts every raw entry of `year1Areas`, in order.
///
/// # Examples
///
/// ```
/// use lts_year1::geometry::convert_areas;
/// use serde_json::json;
///
/// let areas = vec![
///     json!({"name": "odd", "type": "hexagon", "t_frac": 0.1}),
///     json!({"name": "deep", "type": "circle", "RA_center": 150.1,
///            "Dec_center": 2.2, "radius": 1.5, "t_frac": 0.4}),
/// ];
/// let report = convert_areas(&areas);
/// assert_eq!(report.outlines.len(), 1);
/// assert_eq!(report.skipped[0].index, 0);
/// ```
pub fn convert_areas(areas: &[Value]) -> ConversionReport {
    let mut report = ConversionReport::default();

    for (index, raw) in areas.iter().enumerate() {
        let name = raw.get("name").and_then(Value::as_str).map(str::to_string);

        let outcome = decode_area(raw)
            .map_err(SkipReason::from)
            .and_then(|record| convert_shape(&record).map_err(SkipReason::from));

        match outcome {
            Ok(outline) => {
                debug!(
                    "year1Areas[{}] ({} '{}'): {} vertices",
                    index,
                    outline.kind,
                    outline.name,
                    outline.len()
                );
                report.outlines.push(outline);
            }
            Err(reason) => {
                if matches!(reason, SkipReason::Decode(ShapeDecodeError::UnknownType(_))) {
                    warn!(
                        "Skipping year1Areas[{}]: {}. Please enter a valid shape: 'box', 'circle', 'ellipse'",
                        index, reason
                    );
                } else {
                    warn!("Skipping year1Areas[{}]: {}", index, reason);
                }
                report.skipped.push(SkippedArea {
                    index,
                    name,
                    reason: reason.to_string(),
                });
            }
        }
    }

    info!(
        "Converted {} of {} areas ({} skipped)",
        report.outlines.len(),
        areas.len(),
        report.skipped.len()
    );

    report
}

//! Domain models for Year 1 sky-coverage preference areas.
//!
//! This module provides the core data structures shared by the parser, the
//! geometry converter and the plot builder: the submitted document, the shape
//! records it contains, and the polygon outlines computed from them.

use geo::{Area, Centroid, Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A position on the sky in equatorial coordinates, both values in degrees.
///
/// The converter treats RA/Dec as a planar pair; no wrapping or range checks
/// are applied here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyPoint {
    pub ra: f64,
    pub dec: f64,
}

impl SkyPoint {
    pub const fn new(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }

    /// Planar (RA, Dec) distance to another point, in degrees.
    pub fn planar_distance(&self, other: &SkyPoint) -> f64 {
        (self.ra - other.ra).hypot(self.dec - other.dec)
    }
}

/// Discriminator of the three supported area shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Box,
    Circle,
    Ellipse,
}

impl ShapeKind {
    /// All supported kinds, in the order they are listed to users.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Box, ShapeKind::Circle, ShapeKind::Ellipse];

    /// The `type` tag used for this kind in area records.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Box => "box",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
        }
    }

    /// Looks up a kind from its `type` tag (case-sensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use lts_year1::core::domain::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_tag("circle"), Some(ShapeKind::Circle));
    /// assert_eq!(ShapeKind::from_tag("Circle"), None);
    /// assert_eq!(ShapeKind::from_tag("hexagon"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polygon given by its vertices as parallel `RA` / `Dec` arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxArea {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "RA")]
    pub ra: Vec<f64>,
    #[serde(rename = "Dec")]
    pub dec: Vec<f64>,
    pub t_frac: f64,
}

/// Small circle on the sky, drawn with the Tissot ellipse approximation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleArea {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "RA_center")]
    pub ra_center: f64,
    #[serde(rename = "Dec_center")]
    pub dec_center: f64,
    /// Angular radius in degrees.
    pub radius: f64,
    pub t_frac: f64,
}

/// Rotated ellipse in the planar (RA, Dec) degree plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseArea {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "RA_center")]
    pub ra_center: f64,
    #[serde(rename = "Dec_center")]
    pub dec_center: f64,
    /// Semi-major axis in degrees.
    pub a: f64,
    /// Semi-minor axis in degrees.
    pub b: f64,
    /// Rotation in degrees.
    pub theta: f64,
    pub t_frac: f64,
}

/// One entry of `year1Areas`, decoded once from its `type` tag.
///
/// `t_frac` is carried through unchanged; it is never validated or clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeRecord {
    Box(BoxArea),
    Circle(CircleArea),
    Ellipse(EllipseArea),
}

impl ShapeRecord {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeRecord::Box(_) => ShapeKind::Box,
            ShapeRecord::Circle(_) => ShapeKind::Circle,
            ShapeRecord::Ellipse(_) => ShapeKind::Ellipse,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ShapeRecord::Box(area) => &area.name,
            ShapeRecord::Circle(area) => &area.name,
            ShapeRecord::Ellipse(area) => &area.name,
        }
    }

    pub fn t_frac(&self) -> f64 {
        match self {
            ShapeRecord::Box(area) => area.t_frac,
            ShapeRecord::Circle(area) => area.t_frac,
            ShapeRecord::Ellipse(area) => area.t_frac,
        }
    }
}

/// Closed outline computed from one shape record.
///
/// The last vertex repeats the first, so consumers can draw the ring as a
/// polyline without closing it themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonOutline {
    pub name: String,
    pub kind: ShapeKind,
    pub t_frac: f64,
    pub vertices: Vec<SkyPoint>,
}

impl PolygonOutline {
    pub fn new(record: &ShapeRecord, vertices: Vec<SkyPoint>) -> Self {
        Self {
            name: record.name().to_string(),
            kind: record.kind(),
            t_frac: record.t_frac(),
            vertices,
        }
    }

    /// RA values of the ring, in drawing order.
    pub fn ra(&self) -> Vec<f64> {
        self.vertices.iter().map(|p| p.ra).collect()
    }

    /// Dec values of the ring, in drawing order.
    pub fn dec(&self) -> Vec<f64> {
        self.vertices.iter().map(|p| p.dec).collect()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if the last vertex repeats the first.
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => self.vertices.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Signed planar area in square degrees (positive when counter-clockwise).
    pub fn signed_area(&self) -> f64 {
        self.to_polygon().signed_area()
    }

    /// Enclosed planar area in square degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use lts_year1::core::domain::{PolygonOutline, ShapeKind, SkyPoint};
    ///
    /// let outline = PolygonOutline {
    ///     name: "square".to_string(),
    ///     kind: ShapeKind::Box,
    ///     t_frac: 0.5,
    ///     vertices: vec![
    ///         SkyPoint::new(0.0, 0.0),
    ///         SkyPoint::new(2.0, 0.0),
    ///         SkyPoint::new(2.0, 2.0),
    ///         SkyPoint::new(0.0, 2.0),
    ///         SkyPoint::new(0.0, 0.0),
    ///     ],
    /// };
    /// assert_eq!(outline.area(), 4.0);
    /// ```
    pub fn area(&self) -> f64 {
        self.to_polygon().unsigned_area()
    }

    /// Area-weighted centroid of the ring; `None` for a ring without area.
    pub fn centroid(&self) -> Option<SkyPoint> {
        let polygon = self.to_polygon();
        if polygon.unsigned_area() < f64::EPSILON {
            return None;
        }
        polygon.centroid().map(|c| SkyPoint::new(c.x(), c.y()))
    }

    /// The ring as a `geo` polygon with (RA, Dec) as (x, y).
    pub fn to_polygon(&self) -> Polygon<f64> {
        let exterior: LineString<f64> = self
            .vertices
            .iter()
            .map(|p| Coord { x: p.ra, y: p.dec })
            .collect();
        Polygon::new(exterior, vec![])
    }
}

/// Key holding the list of area records.
pub const AREAS_KEY: &str = "year1Areas";

/// The submitted Year 1 preference document.
///
/// The top-level object is kept as parsed, in submission order, so the
/// exported file passes every key through verbatim: area records the
/// converter cannot draw, `null` metadata and keys this crate does not know.
/// Documents are built by [`crate::parsing::json_parser::parse_document_str`],
/// which guarantees that `year1Areas` is an array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Year1Document {
    fields: Map<String, Value>,
}

impl Year1Document {
    pub(crate) fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Survey label, when present and a string.
    pub fn survey(&self) -> Option<&str> {
        self.fields.get("survey").and_then(Value::as_str)
    }

    /// Science justification, when present and a string.
    pub fn science_justification(&self) -> Option<&str> {
        self.fields
            .get("scienceJustification")
            .and_then(Value::as_str)
    }

    /// Raw area records, in document order.
    pub fn year1_areas(&self) -> &[Value] {
        self.fields
            .get(AREAS_KEY)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Every top-level entry, in submission order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn area_count(&self) -> usize {
        self.year1_areas().len()
    }
}

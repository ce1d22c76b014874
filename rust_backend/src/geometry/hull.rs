//! Planar convex hull of (RA, Dec) point sets.
//!
//! The hull itself comes from `geo`; this module adds the strict input checks
//! and a canonical ring order. Points are treated as planar; no wrapping is
//! applied at RA = 0/360.

use geo::{ConvexHull, MultiPoint, Point, Winding};

use crate::core::domain::SkyPoint;

use super::error::{GeometryError, GeometryResult};

/// Points closer than this (in degrees, per axis) count as the same vertex.
pub const COINCIDENT_TOLERANCE_DEG: f64 = 1e-9;

/// Computes the convex hull of `points` as a closed ring.
///
/// The ring runs counter-clockwise, starts at the vertex with the lowest RA
/// (then lowest Dec) and ends with a copy of that starting vertex. Points lying
/// on a hull edge are dropped.
///
/// # Errors
///
/// * [`GeometryError::NonFinite`] if a coordinate is NaN or infinite
/// * [`GeometryError::TooFewPoints`] with fewer than 3 distinct points
/// * [`GeometryError::Collinear`] if every point lies on one line
///
/// # Examples
///
/// ```
/// use lts_year1::core::domain::SkyPoint;
/// use lts_year1::geometry::hull::convex_hull;
///
/// let points = [
///     SkyPoint::new(0.0, 0.0),
///     SkyPoint::new(4.0, 0.0),
///     SkyPoint::new(2.0, 1.0),
///     SkyPoint::new(4.0, 4.0),
///     SkyPoint::new(0.0, 4.0),
/// ];
/// let ring = convex_hull(&points).unwrap();
/// assert_eq!(ring.len(), 5);
/// assert_eq!(ring.first(), ring.last());
/// ```
pub fn convex_hull(points: &[SkyPoint]) -> GeometryResult<Vec<SkyPoint>> {
    for p in points {
        if !p.ra.is_finite() {
            return Err(GeometryError::NonFinite { field: "RA", value: p.ra });
        }
        if !p.dec.is_finite() {
            return Err(GeometryError::NonFinite { field: "Dec", value: p.dec });
        }
    }

    let distinct = distinct_points(points);
    if distinct.len() < 3 {
        return Err(GeometryError::TooFewPoints(distinct.len()));
    }

    let cloud: MultiPoint<f64> = distinct.iter().map(|p| Point::new(p.ra, p.dec)).collect();
    let mut exterior = cloud.convex_hull().exterior().clone();
    exterior.make_ccw_winding();

    let mut ring: Vec<SkyPoint> = exterior.coords().map(|c| SkyPoint::new(c.x, c.y)).collect();
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    drop_straight_vertices(&mut ring);

    if ring.len() < 3 {
        return Err(GeometryError::Collinear(distinct.len()));
    }

    let start = ring
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.ra.total_cmp(&b.ra).then(a.dec.total_cmp(&b.dec)))
        .map_or(0, |(index, _)| index);
    ring.rotate_left(start);
    ring.push(ring[0]);
    Ok(ring)
}

/// Sorted copy of `points` with coincident points merged.
///
/// Every kept point is compared with all earlier kept points inside the RA
/// tolerance window, so the result does not depend on input order.
fn distinct_points(points: &[SkyPoint]) -> Vec<SkyPoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.ra.total_cmp(&b.ra).then(a.dec.total_cmp(&b.dec)));

    let mut kept: Vec<SkyPoint> = Vec::with_capacity(sorted.len());
    for p in sorted {
        let duplicate = kept
            .iter()
            .rev()
            .take_while(|k| p.ra - k.ra <= COINCIDENT_TOLERANCE_DEG)
            .any(|k| coincident(k, &p));
        if !duplicate {
            kept.push(p);
        }
    }
    kept
}

// Removes vertices where an open counter-clockwise ring does not turn left.
fn drop_straight_vertices(ring: &mut Vec<SkyPoint>) {
    let mut i = 0;
    while ring.len() >= 3 && i < ring.len() {
        let n = ring.len();
        let prev = ring[(i + n - 1) % n];
        let next = ring[(i + 1) % n];
        if cross(&prev, &ring[i], &next) <= 0.0 {
            ring.remove(i);
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }
}

/// Z component of `(a - o) x (b - o)`; positive for a counter-clockwise turn.
fn cross(o: &SkyPoint, a: &SkyPoint, b: &SkyPoint) -> f64 {
    (a.ra - o.ra) * (b.dec - o.dec) - (a.dec - o.dec) * (b.ra - o.ra)
}

fn coincident(a: &SkyPoint, b: &SkyPoint) -> bool {
    (a.ra - b.ra).abs() <= COINCIDENT_TOLERANCE_DEG
        && (a.dec - b.dec).abs() <= COINCIDENT_TOLERANCE_DEG
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ring_area(ring: &[SkyPoint]) -> f64 {
        ring.windows(2)
            .map(|w| w[0].ra * w[1].dec - w[1].ra * w[0].dec)
            .sum::<f64>()
            * 0.5
    }

    #[test]
    fn test_square_is_its_own_hull() {
        let points = [
            SkyPoint::new(0.0, -35.0),
            SkyPoint::new(52.5, -35.0),
            SkyPoint::new(52.5, -25.0),
            SkyPoint::new(0.0, -25.0),
        ];
        let ring = convex_hull(&points).unwrap();
        assert_eq!(
            ring,
            vec![
                SkyPoint::new(0.0, -35.0),
                SkyPoint::new(52.5, -35.0),
                SkyPoint::new(52.5, -25.0),
                SkyPoint::new(0.0, -25.0),
                SkyPoint::new(0.0, -35.0),
            ]
        );
    }

    #[test]
    fn test_interior_and_edge_points_dropped() {
        let points = [
            SkyPoint::new(0.0, 0.0),
            SkyPoint::new(1.0, 0.0), // on the bottom edge
            SkyPoint::new(2.0, 0.0),
            SkyPoint::new(1.0, 1.0), // interior
            SkyPoint::new(2.0, 2.0),
            SkyPoint::new(0.0, 2.0),
        ];
        let ring = convex_hull(&points).unwrap();
        assert_eq!(ring.len(), 5);
        assert!(!ring.contains(&SkyPoint::new(1.0, 0.0)));
        assert!(!ring.contains(&SkyPoint::new(1.0, 1.0)));
    }

    #[test]
    fn test_ring_is_counter_clockwise() {
        let points = [
            SkyPoint::new(10.0, 10.0),
            SkyPoint::new(0.0, 10.0),
            SkyPoint::new(5.0, 0.0),
        ];
        let ring = convex_hull(&points).unwrap();
        assert!(ring_area(&ring) > 0.0);
        assert_eq!(ring[0], SkyPoint::new(0.0, 10.0));
    }

    #[test]
    fn test_duplicates_do_not_count_as_distinct() {
        let points = [
            SkyPoint::new(1.0, 1.0),
            SkyPoint::new(1.0, 1.0),
            SkyPoint::new(3.0, 1.0),
        ];
        assert_eq!(convex_hull(&points), Err(GeometryError::TooFewPoints(2)));
    }

    #[test]
    fn test_near_duplicates_merged_regardless_of_neighbours() {
        // The second point sorts between the two coincident ones.
        let points = [
            SkyPoint::new(0.0, 0.0),
            SkyPoint::new(1e-10, 5.0),
            SkyPoint::new(2e-10, 1e-10),
        ];
        assert_eq!(convex_hull(&points), Err(GeometryError::TooFewPoints(2)));
    }

    #[test]
    fn test_collinear_points_rejected() {
        let points = [
            SkyPoint::new(0.0, 0.0),
            SkyPoint::new(1.0, 1.0),
            SkyPoint::new(2.0, 2.0),
            SkyPoint::new(3.0, 3.0),
        ];
        assert_eq!(convex_hull(&points), Err(GeometryError::Collinear(4)));
    }

    #[test]
    fn test_nan_rejected() {
        let points = [
            SkyPoint::new(0.0, 0.0),
            SkyPoint::new(f64::NAN, 1.0),
            SkyPoint::new(2.0, 0.0),
        ];
        assert!(matches!(
            convex_hull(&points),
            Err(GeometryError::NonFinite { field: "RA", .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convex_hull(&[]), Err(GeometryError::TooFewPoints(0)));
    }

    proptest! {
        #[test]
        fn prop_hull_contains_every_input_point(
            coords in prop::collection::vec((0.0..360.0f64, -90.0..90.0f64), 3..40)
        ) {
            let points: Vec<SkyPoint> = coords.iter().map(|&(ra, dec)| SkyPoint::new(ra, dec)).collect();
            if let Ok(ring) = convex_hull(&points) {
                for p in &points {
                    for edge in ring.windows(2) {
                        // Every point is on the inner (left) side of each CCW edge.
                        let scale = 1.0 + p.ra.abs().max(p.dec.abs());
                        prop_assert!(cross(&edge[0], &edge[1], p) >= -1e-9 * scale * scale);
                    }
                }
            }
        }

        #[test]
        fn prop_hull_area_is_order_independent(
            coords in prop::collection::vec((0.0..360.0f64, -90.0..90.0f64), 3..30)
        ) {
            let points: Vec<SkyPoint> = coords.iter().map(|&(ra, dec)| SkyPoint::new(ra, dec)).collect();
            let mut reversed = points.clone();
            reversed.reverse();
            match (convex_hull(&points), convex_hull(&reversed)) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(a), Err(b)) => prop_assert_eq!(a, b),
                _ => prop_assert!(false, "hull success depends on input order"),
            }
        }
    }
}

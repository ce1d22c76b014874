//! Rotated ellipse outlines.
//!
//! The ellipse lives directly in the (RA, Dec) degree plane; this is a planar
//! approximation, not a spherical one.

use qtty::angular::{Degrees, Radian};
use std::f64::consts::TAU;

use crate::core::domain::{EllipseArea, SkyPoint};

use super::error::{GeometryError, GeometryResult};
use super::hull::convex_hull;

/// Number of intervals over the full turn; `ELLIPSE_INTERVALS + 1` samples are taken.
pub const ELLIPSE_INTERVALS: usize = 20;

/// Samples the rotated ellipse at `alpha = k / 20 * 2π` for `k = 0..=20`.
///
/// Both endpoints of the turn are included, so the first and last samples
/// (nearly) coincide.
pub fn sample_ellipse(ellipse: &EllipseArea) -> Vec<SkyPoint> {
    let theta = Degrees::new(ellipse.theta).to::<Radian>().value();
    let (sin_theta, cos_theta) = theta.sin_cos();

    (0..=ELLIPSE_INTERVALS)
        .map(|k| {
            let alpha = k as f64 / ELLIPSE_INTERVALS as f64 * TAU;
            let (sin_alpha, cos_alpha) = alpha.sin_cos();
            SkyPoint::new(
                ellipse.ra_center + ellipse.a * cos_alpha * cos_theta
                    - ellipse.b * sin_alpha * sin_theta,
                ellipse.dec_center
                    + ellipse.a * cos_alpha * sin_theta
                    + ellipse.b * sin_alpha * cos_theta,
            )
        })
        .collect()
}

/// Samples the ellipse and reduces the samples to their convex hull.
///
/// # Errors
///
/// * [`GeometryError::NonFinite`] for NaN or infinite parameters
/// * hull errors when an axis is zero and the samples collapse to a line
///
/// # Examples
///
/// ```
/// use lts_year1::core::domain::EllipseArea;
/// use lts_year1::geometry::ellipse::ellipse_ring;
///
/// let ellipse = EllipseArea {
///     name: "LMC".to_string(),
///     ra_center: 80.9,
///     dec_center: -69.8,
///     a: 6.0,
///     b: 4.0,
///     theta: 30.0,
///     t_frac: 0.3,
/// };
/// let ring = ellipse_ring(&ellipse).unwrap();
/// assert_eq!(ring.first(), ring.last());
/// ```
pub fn ellipse_ring(ellipse: &EllipseArea) -> GeometryResult<Vec<SkyPoint>> {
    for (field, value) in [
        ("RA_center", ellipse.ra_center),
        ("Dec_center", ellipse.dec_center),
        ("a", ellipse.a),
        ("b", ellipse.b),
        ("theta", ellipse.theta),
    ] {
        if !value.is_finite() {
            return Err(GeometryError::NonFinite { field, value });
        }
    }

    convex_hull(&sample_ellipse(ellipse))
}

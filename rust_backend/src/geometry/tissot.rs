//! Tissot approximation of small circles on the sky.
//!
//! A circle of angular radius `r` centred at `(ra, dec)` is drawn as a planar
//! ellipse in longitude/latitude radians with semi-axes `r / cos(dec)` along RA
//! and `r` along Dec. The approximation holds for small radii away from the
//! poles.

use qtty::angular::{Degree, Degrees, Radian, Radians};
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::domain::{CircleArea, SkyPoint};

use super::error::{GeometryError, GeometryResult};

/// Number of angular steps around the ellipse; the ring has one more vertex.
pub const TISSOT_SEGMENTS: usize = 64;

/// Samples the Tissot ellipse of a circle area as a closed ring in degrees.
///
/// The centre RA is shifted into `(-180, 180]` before projecting, and vertices
/// that come out negative are moved back by `+360`, so every RA lies in
/// `[0, 360)` for centres in that range.
///
/// # Errors
///
/// * [`GeometryError::PolarSingularity`] when `cos(Dec_center)` vanishes
/// * [`GeometryError::NonFinite`] for NaN or infinite inputs
///
/// # Examples
///
/// ```
/// use lts_year1::core::domain::CircleArea;
/// use lts_year1::geometry::tissot::tissot_ring;
///
/// let circle = CircleArea {
///     name: String::new(),
///     ra_center: 200.0,
///     dec_center: 0.0,
///     radius: 5.0,
///     t_frac: 0.1,
/// };
/// let ring = tissot_ring(&circle).unwrap();
/// assert_eq!(ring.len(), 65);
/// assert!(ring.iter().all(|p| (0.0..360.0).contains(&p.ra)));
/// ```
pub fn tissot_ring(circle: &CircleArea) -> GeometryResult<Vec<SkyPoint>> {
    check_finite("RA_center", circle.ra_center)?;
    check_finite("Dec_center", circle.dec_center)?;
    check_finite("radius", circle.radius)?;

    let centred_ra = if circle.ra_center > 180.0 {
        circle.ra_center - 360.0
    } else {
        circle.ra_center
    };
    let phi = Degrees::new(centred_ra).to::<Radian>().value();
    let theta = Degrees::new(circle.dec_center).to::<Radian>().value();

    let cos_theta = theta.cos();
    if cos_theta <= f64::EPSILON {
        return Err(GeometryError::PolarSingularity {
            dec_center: circle.dec_center,
        });
    }

    let radius = Degrees::new(circle.radius).to::<Radian>().value();
    let semi_ra = radius / cos_theta;
    let semi_dec = radius;

    let ring = (0..=TISSOT_SEGMENTS)
        .map(|step| {
            // Start at the bottom of the ellipse and run counter-clockwise.
            let angle = if step == TISSOT_SEGMENTS {
                -FRAC_PI_2
            } else {
                -FRAC_PI_2 + TAU * step as f64 / TISSOT_SEGMENTS as f64
            };
            let x = phi + semi_ra * angle.cos();
            let y = theta + semi_dec * angle.sin();
            SkyPoint::new(wrap_ra(to_degrees(x)), to_degrees(y))
        })
        .collect();

    Ok(ring)
}

fn to_degrees(value: f64) -> f64 {
    Radians::new(value).to::<Degree>().value()
}

fn wrap_ra(ra: f64) -> f64 {
    if ra < 0.0 {
        ra + 360.0
    } else {
        ra
    }
}

fn check_finite(field: &'static str, value: f64) -> GeometryResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn circle(ra_center: f64, dec_center: f64, radius: f64) -> CircleArea {
        CircleArea {
            name: "test".to_string(),
            ra_center,
            dec_center,
            radius,
            t_frac: 0.5,
        }
    }

    #[test]
    fn test_ring_is_closed() {
        let ring = tissot_ring(&circle(120.0, -20.0, 3.0)).unwrap();
        assert_eq!(ring.len(), TISSOT_SEGMENTS + 1);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn test_equator_has_no_stretch() {
        let ring = tissot_ring(&circle(200.0, 0.0, 5.0)).unwrap();
        let ra_min = ring.iter().map(|p| p.ra).fold(f64::INFINITY, f64::min);
        let ra_max = ring.iter().map(|p| p.ra).fold(f64::NEG_INFINITY, f64::max);
        assert_abs_diff_eq!((ra_max - ra_min) / 2.0, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ra_min, 195.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ra_max, 205.0, epsilon = 1e-9);
    }

    #[test]
    fn test_latitude_stretches_ra() {
        let ring = tissot_ring(&circle(40.0, 60.0, 2.0)).unwrap();
        let ra_min = ring.iter().map(|p| p.ra).fold(f64::INFINITY, f64::min);
        let ra_max = ring.iter().map(|p| p.ra).fold(f64::NEG_INFINITY, f64::max);
        let dec_min = ring.iter().map(|p| p.dec).fold(f64::INFINITY, f64::min);
        let dec_max = ring.iter().map(|p| p.dec).fold(f64::NEG_INFINITY, f64::max);
        // cos(60°) = 0.5 doubles the RA extent
        assert_abs_diff_eq!(ra_max - ra_min, 8.0, epsilon = 1e-9);
        assert_abs_diff_eq!(dec_max - dec_min, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ra_wraps_across_zero() {
        let ring = tissot_ring(&circle(359.0, 0.0, 3.0)).unwrap();
        assert!(ring.iter().all(|p| (0.0..360.0).contains(&p.ra)));
        assert!(ring.iter().any(|p| p.ra < 10.0));
        assert!(ring.iter().any(|p| p.ra > 350.0));
    }

    #[test]
    fn test_pole_is_rejected() {
        assert_eq!(
            tissot_ring(&circle(10.0, 90.0, 1.0)),
            Err(GeometryError::PolarSingularity { dec_center: 90.0 })
        );
        assert!(tissot_ring(&circle(10.0, -90.0, 1.0)).is_err());
    }

    #[test]
    fn test_nan_radius_is_rejected() {
        assert!(matches!(
            tissot_ring(&circle(10.0, 0.0, f64::NAN)),
            Err(GeometryError::NonFinite { field: "radius", .. })
        ));
    }
}

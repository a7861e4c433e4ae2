//! Axis-aligned ellipse in the XY plane.

use curves_core::{CurveError, Result, Validate};
use curves_math::{dvec3, Point3, Vector3};
use serde::Serialize;

use super::{CurveKind, ParametricCurve};

/// An ellipse centered at the origin in the XY plane.
///
/// `point_at(t) = (x_radius * cos t, y_radius * sin t, 0)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ellipse {
    x_radius: f64,
    y_radius: f64,
}

impl Ellipse {
    /// Create an ellipse, rejecting negative radii.
    pub fn new(x_radius: f64, y_radius: f64) -> Result<Self> {
        let ellipse = Self { x_radius, y_radius };
        ellipse.validate()?;
        Ok(ellipse)
    }

    pub fn x_radius(&self) -> f64 {
        self.x_radius
    }

    pub fn y_radius(&self) -> f64 {
        self.y_radius
    }
}

impl Validate for Ellipse {
    fn validate(&self) -> Result<()> {
        CurveError::check_radius("x radius", self.x_radius)?;
        CurveError::check_radius("y radius", self.y_radius)
    }
}

impl ParametricCurve for Ellipse {
    fn point_at(&self, t: f64) -> Point3 {
        dvec3(self.x_radius * t.cos(), self.y_radius * t.sin(), 0.0)
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        dvec3(-self.x_radius * t.sin(), self.y_radius * t.cos(), 0.0)
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Ellipse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_ellipse_cardinal_points() {
        let ellipse = Ellipse::new(2.0, 1.0).unwrap();

        assert_abs_diff_eq!(ellipse.point_at(0.0), dvec3(2.0, 0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(ellipse.point_at(PI / 2.0), dvec3(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(ellipse.point_at(PI), dvec3(-2.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_ellipse_closed_form() {
        let ellipse = Ellipse::new(3.0, 7.0).unwrap();
        for i in -8..=8 {
            let t = i as f64 * PI / 5.0;
            let p = ellipse.point_at(t);
            let d = ellipse.derivative_at(t);
            assert_abs_diff_eq!(p, dvec3(3.0 * t.cos(), 7.0 * t.sin(), 0.0), epsilon = 1e-12);
            assert_abs_diff_eq!(d, dvec3(-3.0 * t.sin(), 7.0 * t.cos(), 0.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ellipse_derivative_matches_finite_difference() {
        let ellipse = Ellipse::new(5.0, 2.0).unwrap();
        let h = 1e-6;
        for i in 0..12 {
            let t = i as f64 * PI / 6.0;
            let numeric = (ellipse.point_at(t + h) - ellipse.point_at(t - h)) / (2.0 * h);
            assert_abs_diff_eq!(ellipse.derivative_at(t), numeric, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_ellipse_periodic() {
        let ellipse = Ellipse::new(4.0, 9.0).unwrap();
        let t = 0.37;
        assert_abs_diff_eq!(
            ellipse.point_at(t),
            ellipse.point_at(t + ellipse.period()),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_ellipse_rejects_negative_radius() {
        assert!(Ellipse::new(-1.0, 2.0).unwrap_err().is_invalid_geometry());
        assert!(Ellipse::new(1.0, -0.5).unwrap_err().is_invalid_geometry());
        assert!(Ellipse::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_ellipse_zero_radius_is_valid() {
        let ellipse = Ellipse::new(0.0, 0.0).unwrap();
        assert_eq!(ellipse.point_at(1.0), Point3::ZERO);
        assert_eq!(ellipse.kind(), CurveKind::Ellipse);
    }
}

//! Curve traits and implementations.

mod circle;
mod ellipse;
mod helix;

use std::f64::consts::TAU;
use std::fmt;

use curves_math::{Point3, Vector3};
use serde::Serialize;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix3D;

/// Tag identifying which variant a curve is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CurveKind {
    Ellipse,
    Circle,
    Helix3D,
}

impl CurveKind {
    pub const ALL: [CurveKind; 3] = [CurveKind::Ellipse, CurveKind::Circle, CurveKind::Helix3D];

    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Ellipse => "Ellipse",
            CurveKind::Circle => "Circle",
            CurveKind::Helix3D => "Helix3D",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for parametric curves in 3D space, parameterized by an angle `t`.
pub trait ParametricCurve: Send + Sync {
    /// Evaluate the position at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the first derivative of the position with respect to `t`.
    fn derivative_at(&self, t: f64) -> Vector3;

    /// Which variant this curve is.
    fn kind(&self) -> CurveKind;

    /// Period of the angular component.
    fn period(&self) -> f64 {
        TAU
    }
}

/// A curve of any supported variant.
///
/// Collections own their curves as `Vec<Curve>` and hand out `&Curve`
/// borrows for filtering and sorting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Curve {
    Ellipse(Ellipse),
    Circle(Circle),
    Helix3D(Helix3D),
}

impl Curve {
    /// The circle inside this curve, if it is a `Circle` variant.
    ///
    /// A helix is built on a circle but is not one, so it yields `None`.
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Curve::Circle(circle) => Some(circle),
            Curve::Ellipse(_) | Curve::Helix3D(_) => None,
        }
    }
}

impl ParametricCurve for Curve {
    fn point_at(&self, t: f64) -> Point3 {
        match self {
            Curve::Ellipse(c) => c.point_at(t),
            Curve::Circle(c) => c.point_at(t),
            Curve::Helix3D(c) => c.point_at(t),
        }
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        match self {
            Curve::Ellipse(c) => c.derivative_at(t),
            Curve::Circle(c) => c.derivative_at(t),
            Curve::Helix3D(c) => c.derivative_at(t),
        }
    }

    fn kind(&self) -> CurveKind {
        match self {
            Curve::Ellipse(_) => CurveKind::Ellipse,
            Curve::Circle(_) => CurveKind::Circle,
            Curve::Helix3D(_) => CurveKind::Helix3D,
        }
    }
}

impl From<Ellipse> for Curve {
    fn from(ellipse: Ellipse) -> Self {
        Curve::Ellipse(ellipse)
    }
}

impl From<Circle> for Curve {
    fn from(circle: Circle) -> Self {
        Curve::Circle(circle)
    }
}

impl From<Helix3D> for Curve {
    fn from(helix: Helix3D) -> Self {
        Curve::Helix3D(helix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sample() -> Vec<Curve> {
        vec![
            Ellipse::new(2.0, 3.0).unwrap().into(),
            Circle::new(4.0).unwrap().into(),
            Helix3D::new(1.0, 6.0).unwrap().into(),
        ]
    }

    #[test]
    fn test_kind_tags() {
        let kinds: Vec<_> = sample().iter().map(|c| c.kind()).collect();
        assert_eq!(kinds, CurveKind::ALL.to_vec());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CurveKind::Helix3D.to_string(), "Helix3D");
        assert_eq!(format!("{}", CurveKind::Ellipse), "Ellipse");
    }

    #[test]
    fn test_enum_dispatch_matches_variant() {
        let circle = Circle::new(4.0).unwrap();
        let curve = Curve::from(circle.clone());
        let t = PI / 3.0;
        assert_eq!(curve.point_at(t), circle.point_at(t));
        assert_eq!(curve.derivative_at(t), circle.derivative_at(t));
        assert!((curve.period() - 2.0 * PI).abs() < 1e-15);
    }

    #[test]
    fn test_curve_serializes_with_kind_tag() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"[{"kind":"Ellipse","x_radius":2.0,"y_radius":3.0},{"kind":"Circle","radius":4.0},{"kind":"Helix3D","radius":1.0,"step":6.0}]"#
        );
    }

    #[test]
    fn test_variant_serializes_without_inner_curve() {
        let helix = serde_json::to_value(Helix3D::new(2.5, -1.0).unwrap()).unwrap();
        assert_eq!(helix, serde_json::json!({"radius": 2.5, "step": -1.0}));

        let circle = serde_json::to_value(Circle::new(0.0).unwrap()).unwrap();
        assert_eq!(circle, serde_json::json!({"radius": 0.0}));
    }

    #[test]
    fn test_as_circle() {
        let curves = sample();
        assert!(curves[0].as_circle().is_none());
        assert_eq!(curves[1].as_circle().map(Circle::radius), Some(4.0));
        assert!(curves[2].as_circle().is_none());
    }
}

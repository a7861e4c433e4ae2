//! Circle curve, an ellipse with equal radii.

use curves_core::{Result, Validate};
use curves_math::{Point3, Vector3};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{CurveKind, Ellipse, ParametricCurve};

/// A circle centered at the origin in the XY plane.
///
/// Evaluation is delegated to an inner [`Ellipse`] whose radii are always
/// equal to `radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    ellipse: Ellipse,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        Ok(Self {
            ellipse: Ellipse::new(radius, radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.ellipse.x_radius()
    }

    /// The equivalent ellipse.
    pub fn as_ellipse(&self) -> &Ellipse {
        &self.ellipse
    }
}

impl Validate for Circle {
    fn validate(&self) -> Result<()> {
        self.ellipse.validate()
    }
}

impl ParametricCurve for Circle {
    fn point_at(&self, t: f64) -> Point3 {
        self.ellipse.point_at(t)
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        self.ellipse.derivative_at(t)
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Circle
    }
}

impl Serialize for Circle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Circle", 1)?;
        state.serialize_field("radius", &self.radius())?;
        state.end()
    }
}

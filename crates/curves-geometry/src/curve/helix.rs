//! Helix built on a circle with a linear rise along Z.

use std::f64::consts::TAU;

use curves_core::{Result, Validate};
use curves_math::{Point3, Vector3};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{Circle, CurveKind, ParametricCurve};

/// A helix around the Z axis.
///
/// The XY projection follows a [`Circle`] of `radius`; Z rises by `step`
/// per full turn, so `z = t / 2π * step`. A negative step winds downward and
/// a zero step keeps the helix in the z = 0 plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Helix3D {
    circle: Circle,
    step: f64,
}

impl Helix3D {
    pub fn new(radius: f64, step: f64) -> Result<Self> {
        Ok(Self {
            circle: Circle::new(radius)?,
            step,
        })
    }

    pub fn radius(&self) -> f64 {
        self.circle.radius()
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// The circle traced by the XY projection.
    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    /// Height gained over one full turn.
    pub fn rise_per_turn(&self) -> f64 {
        self.step
    }
}

impl Validate for Helix3D {
    fn validate(&self) -> Result<()> {
        self.circle.validate()
    }
}

impl ParametricCurve for Helix3D {
    fn point_at(&self, t: f64) -> Point3 {
        let mut p = self.circle.point_at(t);
        p.z = t / TAU * self.step;
        p
    }

    fn derivative_at(&self, t: f64) -> Vector3 {
        let mut d = self.circle.derivative_at(t);
        d.z = self.step / TAU;
        d
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Helix3D
    }
}

impl Serialize for Helix3D {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Helix3D", 2)?;
        state.serialize_field("radius", &self.radius())?;
        state.serialize_field("step", &self.step)?;
        state.end()
    }
}

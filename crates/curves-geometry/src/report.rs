//! Per-curve evaluation reports for display or JSON output.

use std::fmt;

use curves_math::{Point3, Vector3};
use serde::Serialize;

use crate::curve::{Circle, Curve, CurveKind, ParametricCurve};

/// Decimal places used when the formatter does not specify a precision.
pub const DEFAULT_PRECISION: usize = 3;

/// A curve evaluated at one parameter value, with its defining attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSample {
    /// 1-based position in the sampled sequence
    pub index: usize,
    pub kind: CurveKind,
    /// Attribute labels and values, e.g. `("xr", 2.0)`
    pub attributes: Vec<(&'static str, f64)>,
    pub t: f64,
    pub point: Point3,
    pub derivative: Vector3,
}

impl CurveSample {
    fn evaluate<C: ParametricCurve + ?Sized>(
        index: usize,
        curve: &C,
        attributes: Vec<(&'static str, f64)>,
        t: f64,
    ) -> Self {
        Self {
            index,
            kind: curve.kind(),
            attributes,
            t,
            point: curve.point_at(t),
            derivative: curve.derivative_at(t),
        }
    }
}

impl fmt::Display for CurveSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(DEFAULT_PRECISION);
        let (t, p, d) = (self.t, self.point, self.derivative);

        write!(f, "Curve {} ({}", self.index, self.kind)?;
        for (name, value) in &self.attributes {
            write!(f, " {name}={value:.prec$}")?;
        }
        writeln!(f, ")")?;
        writeln!(f, "f({t:.prec$}):  x {:.prec$} y {:.prec$} z {:.prec$}", p.x, p.y, p.z)?;
        write!(f, "f'({t:.prec$}): x {:.prec$} y {:.prec$} z {:.prec$}", d.x, d.y, d.z)
    }
}

fn attributes_of(curve: &Curve) -> Vec<(&'static str, f64)> {
    match curve {
        Curve::Ellipse(e) => vec![("xr", e.x_radius()), ("yr", e.y_radius())],
        Curve::Circle(c) => vec![("r", c.radius())],
        Curve::Helix3D(h) => vec![("r", h.radius()), ("s", h.step())],
    }
}

/// Evaluate every curve at `t`.
pub fn sample_curves(curves: &[&Curve], t: f64) -> Vec<CurveSample> {
    curves
        .iter()
        .enumerate()
        .map(|(i, &curve)| CurveSample::evaluate(i + 1, curve, attributes_of(curve), t))
        .collect()
}

/// Evaluate every circle at `t`.
pub fn sample_circles(circles: &[&Circle], t: f64) -> Vec<CurveSample> {
    circles
        .iter()
        .enumerate()
        .map(|(i, &circle)| CurveSample::evaluate(i + 1, circle, vec![("r", circle.radius())], t))
        .collect()
}

//! Polyline approximation of curves over a parameter range.

use curves_math::Point3;

use crate::curve::ParametricCurve;

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Convert the part of `curve` between `t_min` and `t_max` to a polyline.
///
/// The range is first cut into spans of at most a quarter period, then
/// segments are split in half while the curve midpoint deviates from the
/// chord midpoint by more than `tolerance`. The polyline starts at
/// `point_at(t_min)` and ends at `point_at(t_max)`. An empty or inverted
/// range yields only the start point, and a non-finite bound yields no
/// points at all.
///
/// At least four spans are emitted per turn, so the output grows linearly
/// with `(t_max - t_min) / period`; bound the range accordingly.
pub fn curve_to_polyline<C: ParametricCurve + ?Sized>(
    curve: &C,
    t_min: f64,
    t_max: f64,
    tolerance: f64,
) -> Vec<Point3> {
    if !t_min.is_finite() || !t_max.is_finite() {
        return Vec::new();
    }
    let mut points = vec![curve.point_at(t_min)];
    if t_max <= t_min {
        return points;
    }

    // Seed spans of at most a quarter period; over a whole turn the chord
    // midpoint can coincide with the curve.
    let spans = ((t_max - t_min) / (curve.period() * 0.25)).ceil().max(1.0) as usize;
    let dt = (t_max - t_min) / spans as f64;
    for i in 0..spans {
        let t0 = t_min + dt * i as f64;
        let t1 = if i + 1 == spans { t_max } else { t0 + dt };
        subdivide(curve, t0, t1, tolerance, &mut points, 0);
    }
    points
}

/// One full turn, `[0, period]`.
pub fn one_turn<C: ParametricCurve + ?Sized>(curve: &C, tolerance: f64) -> Vec<Point3> {
    curve_to_polyline(curve, 0.0, curve.period(), tolerance)
}

fn subdivide<C: ParametricCurve + ?Sized>(
    curve: &C,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<Point3>,
    depth: u32,
) {
    let p1 = curve.point_at(t1);
    if depth >= MAX_DEPTH {
        points.push(p1);
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.point_at(t0);
    let chord_mid = (p0 + p1) * 0.5;
    let deviation = (curve.point_at(t_mid) - chord_mid).length();

    if deviation > tolerance {
        subdivide(curve, t0, t_mid, tolerance, points, depth + 1);
        subdivide(curve, t_mid, t1, tolerance, points, depth + 1);
    } else {
        points.push(p1);
    }
}

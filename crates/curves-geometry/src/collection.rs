//! Operations over collections of curves.
//!
//! A `Vec<Curve>` owns the curves. Everything here works on borrowed
//! `&Curve` / `&Circle` handles whose lifetime is tied to that owner.

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::debug;

use crate::curve::{Circle, Curve};

/// Borrow every curve of an owning collection, in insertion order.
pub fn curve_refs(curves: &[Curve]) -> Vec<&Curve> {
    curves.iter().collect()
}

/// Keep only the `Circle` variants, preserving their relative order.
pub fn circles<'a>(curves: &[&'a Curve]) -> Vec<&'a Circle> {
    let found: Vec<&'a Circle> = curves.iter().filter_map(|&c| c.as_circle()).collect();
    debug!(total = curves.len(), circles = found.len(), "extracted circles");
    found
}

/// Sort circles by ascending radius.
///
/// The sort is stable: circles with equal radii keep their input order.
pub fn sort_circles_by_radius(circles: &mut [&Circle]) {
    circles.sort_by(|a, b| compare_radius(a, b));
}

fn compare_radius(a: &Circle, b: &Circle) -> Ordering {
    a.radius().total_cmp(&b.radius())
}

/// Total radius of all circles, reduced in parallel.
///
/// Partial sums are combined in whatever order the thread pool produces,
/// so the result may differ from a sequential sum in the last bits.
pub fn sum_of_radii(circles: &[&Circle]) -> f64 {
    let sum: f64 = circles.par_iter().map(|c| c.radius()).sum();
    debug!(count = circles.len(), sum, "summed circle radii");
    sum
}

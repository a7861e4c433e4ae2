//! Curves math primitives.
//!
//! Positions and tangent directions share one representation: a plain
//! `f64` triple backed by [`glam::DVec3`]. `Point3::default()` is the origin
//! and components are read through `.x`, `.y` and `.z`.

pub use glam::{dvec3, DVec3};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;

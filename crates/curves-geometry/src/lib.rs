//! Curves geometry: parametric curves and operations over curve collections.

pub mod collection;
pub mod curve;
pub mod random;
pub mod report;
pub mod tessellate;

pub use collection::{circles, curve_refs, sort_circles_by_radius, sum_of_radii};
pub use curve::{Circle, Curve, CurveKind, Ellipse, Helix3D, ParametricCurve};
pub use random::{random_curves, GeneratorConfig};
pub use report::{sample_circles, sample_curves, CurveSample};

//! Random curve generation.

use curves_core::{CurveError, Result, Validate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::curve::{Circle, Curve, CurveKind, Ellipse, Helix3D};

/// Settings for [`GeneratorConfig::generate`].
///
/// Every geometric attribute (radii and helix step) is drawn uniformly from
/// the integers `min_attribute..=max_attribute`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of curves to generate
    pub count: usize,
    pub min_attribute: u32,
    pub max_attribute: u32,
    /// Seed for the caller's RNG; `None` means seed from OS entropy
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub const DEFAULT_COUNT: usize = 20;
    pub const DEFAULT_MIN_ATTRIBUTE: u32 = 1;
    pub const DEFAULT_MAX_ATTRIBUTE: u32 = 20;

    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Generate `self.count` curves, each variant picked uniformly at random.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Curve>> {
        self.validate()?;

        let curves = (0..self.count)
            .map(|_| self.random_curve(rng))
            .collect::<Result<Vec<_>>>()?;

        info!(count = curves.len(), "generated random curves");
        Ok(curves)
    }

    fn random_curve<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Curve> {
        let kind = CurveKind::ALL[rng.gen_range(0..CurveKind::ALL.len())];
        let curve: Curve = match kind {
            CurveKind::Ellipse => {
                Ellipse::new(self.random_attribute(rng), self.random_attribute(rng))?.into()
            }
            CurveKind::Circle => Circle::new(self.random_attribute(rng))?.into(),
            CurveKind::Helix3D => {
                Helix3D::new(self.random_attribute(rng), self.random_attribute(rng))?.into()
            }
        };
        debug!(?curve, "generated curve");
        Ok(curve)
    }

    fn random_attribute<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        f64::from(rng.gen_range(self.min_attribute..=self.max_attribute))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: Self::DEFAULT_COUNT,
            min_attribute: Self::DEFAULT_MIN_ATTRIBUTE,
            max_attribute: Self::DEFAULT_MAX_ATTRIBUTE,
            seed: None,
        }
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        if self.min_attribute > self.max_attribute {
            return Err(CurveError::InvalidConfig(format!(
                "min_attribute ({}) is greater than max_attribute ({})",
                self.min_attribute, self.max_attribute
            )));
        }
        Ok(())
    }
}

/// Generate `count` random curves with attributes in `1..=20`.
pub fn random_curves<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Vec<Curve>> {
    GeneratorConfig::with_count(count).generate(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::ParametricCurve;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn attributes(curve: &Curve) -> Vec<f64> {
        match curve {
            Curve::Ellipse(e) => vec![e.x_radius(), e.y_radius()],
            Curve::Circle(c) => vec![c.radius()],
            Curve::Helix3D(h) => vec![h.radius(), h.step()],
        }
    }

    #[test]
    fn test_random_curves_count_and_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let curves = random_curves(500, &mut rng).unwrap();
        assert_eq!(curves.len(), 500);

        for curve in &curves {
            for value in attributes(curve) {
                assert!((1.0..=20.0).contains(&value), "attribute out of range: {}", value);
                assert_eq!(value.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_random_curves_cover_every_kind() {
        let mut rng = StdRng::seed_from_u64(7);
        let curves = random_curves(300, &mut rng).unwrap();
        for kind in CurveKind::ALL {
            let n = curves.iter().filter(|c| c.kind() == kind).count();
            assert!(n > 50, "{} generated only {} times", kind, n);
        }
    }

    #[test]
    fn test_random_curves_deterministic_for_seed() {
        let a = random_curves(25, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = random_curves(25, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_curves(0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_fixed_range() {
        let config = GeneratorConfig {
            count: 40,
            min_attribute: 5,
            max_attribute: 5,
            seed: None,
        };
        let curves = config.generate(&mut StdRng::seed_from_u64(3)).unwrap();
        assert!(curves.iter().flat_map(attributes).all(|v| v == 5.0));
    }

    #[test]
    fn test_invalid_range_rejected() {
        let config = GeneratorConfig {
            min_attribute: 10,
            max_attribute: 2,
            ..GeneratorConfig::default()
        };
        let err = config.generate(&mut StdRng::seed_from_u64(3)).unwrap_err();
        assert!(matches!(err, CurveError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: GeneratorConfig = serde_json::from_str(r#"{"count": 5, "seed": 11}"#).unwrap();
        assert_eq!(config.count, 5);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.min_attribute, 1);
        assert_eq!(config.max_attribute, 20);

        assert!(serde_json::from_str::<GeneratorConfig>(r#"{"radius": 3}"#).is_err());
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CurveError {
    /// Rejects a radius that is negative or NaN.
    pub fn check_radius(name: &str, value: f64) -> Result<()> {
        if value >= 0.0 {
            Ok(())
        } else {
            Err(Self::InvalidGeometry(format!(
                "{name} must be non-negative, got {value}"
            )))
        }
    }

    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Self::InvalidGeometry(_))
    }
}

pub type Result<T> = std::result::Result<T, CurveError>;

use crate::error::Result;

/// Validate the invariants of a geometric entity or configuration.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

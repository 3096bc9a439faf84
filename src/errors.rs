//! Validation errors

use crate::float_types::Real;
use nalgebra::Point3;

/// All the possible validation issues we might encounter while accepting
/// level geometry or tree configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (TooFewPoints) A face has fewer than the minimal number of vertices
    #[error("(TooFewPoints) A face needs at least 3 vertices, got {0}")]
    TooFewPoints(usize),
    /// (InvalidCoordinate) The coordinate has a NaN or infinite
    #[error("(InvalidCoordinate) The coordinate ({0}) has a NaN or infinite")]
    InvalidCoordinate(Point3<Real>),
    /// (InvalidConfig) A tree configuration value is out of range
    #[error("(InvalidConfig) {0}")]
    InvalidConfig(String),
}

use thiserror::Error;

use crate::math::vec2::Vec2;

/// Errors raised when a shape would end up with geometry the engine cannot reason about.
///
/// These are reported at construction or mutation time. Query methods never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("segment endpoints coincide at {point:?}")]
    DegenerateSegment { point: Vec2 },

    #[error("circle radius must be finite and non-negative, got {radius}")]
    InvalidRadius { radius: f64 },

    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,

    #[error("polygon edge {index} has zero length")]
    DegenerateEdge { index: usize },

    #[error("polygon is not convex")]
    NonConvex,

    #[error("polygon encloses no area")]
    ZeroArea,

    #[error("coordinates must be finite")]
    NonFinite,

    #[error("point index {index} out of range for a shape with {count} points")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("scale must be finite and non-zero, got {scale:?}")]
    InvalidScale { scale: Vec2 },
}

pub type Result<T> = std::result::Result<T, GeometryError>;

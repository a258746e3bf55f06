//! 2D collision detection between circles, segments and convex polygons.
//!
//! Pair queries answer overlap, containment, boundary intersections and the
//! minimum displacement that separates two shapes, using the separating axis
//! theorem.

pub mod collision;
pub mod error;
pub mod math;
pub mod shapes;

// Re-export key types for easier use
pub use collision::{Collision, AABB};
pub use error::{GeometryError, Result};
pub use math::{Axis, Projection, Transformation, Vec2};
pub use shapes::{Circle, Polygon, PolygonBuilder, Segment, Shape};

pub mod aabb;
pub mod detection;
pub mod manifold;
pub mod sat;

// Re-export key types
pub use aabb::AABB;
pub use detection::collide;
pub use manifold::Collision;
pub use sat::{calc_displacement, sat_overlaps, Project};

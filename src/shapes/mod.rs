pub mod circle;
pub mod polygon;
pub mod segment;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use circle::Circle;
pub use polygon::{Polygon, PolygonBuilder};
pub use segment::Segment;

use crate::collision::aabb::AABB;
use crate::collision::detection;
use crate::collision::manifold::Collision;
use crate::collision::sat::Project;
use crate::error::{GeometryError, Result};
use crate::math::{Axis, Projection, Transformation, Vec2};

/// Any of the supported primitives.
///
/// Every pairwise query is available on `Shape`, whichever kinds are involved.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    Circle(Circle),
    Segment(Segment),
    Polygon(Polygon),
}

/// Rejects transforms that would collapse or corrupt geometry.
pub(crate) fn check_transform(t: &Transformation) -> Result<()> {
    let scale = t.get_scale();
    if !scale.is_finite() || scale.x == 0.0 || scale.y == 0.0 {
        debug!("rejected transform scale {:?}", scale);
        return Err(GeometryError::InvalidScale { scale });
    }
    if !t.get_rotation().is_finite() || !t.get_translation().is_finite() || !t.get_pivot().is_finite()
    {
        debug!("rejected non-finite transform {:?}", t);
        return Err(GeometryError::NonFinite);
    }
    Ok(())
}

impl Shape {
    pub fn circle(center: Vec2, radius: f64) -> Result<Shape> {
        Circle::new(center, radius).map(Shape::Circle)
    }

    pub fn segment(a: Vec2, b: Vec2) -> Result<Shape> {
        Segment::new(a, b).map(Shape::Segment)
    }

    pub fn polygon(points: Vec<Vec2>) -> Result<Shape> {
        Polygon::new(points).map(Shape::Polygon)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Segment(_) => "segment",
            Shape::Polygon(_) => "polygon",
        }
    }

    pub fn center(&self) -> Vec2 {
        match self {
            Shape::Circle(c) => c.center(),
            Shape::Segment(s) => s.center(),
            Shape::Polygon(p) => p.center(),
        }
    }

    /// Outline vertices. A circle has none.
    pub fn points(&self) -> &[Vec2] {
        match self {
            Shape::Circle(_) => &[],
            Shape::Segment(s) => s.points(),
            Shape::Polygon(p) => p.points(),
        }
    }

    pub fn point_count(&self) -> usize {
        self.points().len()
    }

    pub fn point(&self, index: usize) -> Option<Vec2> {
        self.points().get(index).copied()
    }

    /// Only circles have a radius.
    pub fn radius(&self) -> Option<f64> {
        match self {
            Shape::Circle(c) => Some(c.radius()),
            _ => None,
        }
    }

    /// The shape's own SAT axes. A circle has none.
    pub fn axes(&self) -> &[Axis] {
        match self {
            Shape::Circle(_) => &[],
            Shape::Segment(s) => s.axes(),
            Shape::Polygon(p) => p.axes(),
        }
    }

    pub fn bounds(&self) -> AABB {
        match self {
            Shape::Circle(c) => c.bounds(),
            Shape::Segment(s) => s.bounds(),
            Shape::Polygon(p) => p.bounds(),
        }
    }

    pub fn project(&self, axis: Axis) -> Projection {
        match self {
            Shape::Circle(c) => c.project(axis),
            Shape::Segment(s) => s.project(axis),
            Shape::Polygon(p) => p.project(axis),
        }
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        match self {
            Shape::Circle(c) => c.contains_point(point),
            Shape::Segment(s) => s.contains_point(point),
            Shape::Polygon(p) => p.contains_point(point),
        }
    }

    /// Whether this shape fully encloses `other`.
    pub fn contains(&self, other: &Shape) -> bool {
        detection::contains(self, other)
    }

    /// Whether `other` fully encloses this shape.
    pub fn is_inside(&self, other: &Shape) -> bool {
        detection::contains(other, self)
    }

    pub fn overlaps(&self, other: &Shape) -> bool {
        detection::overlaps(self, other)
    }

    /// Points where the outlines cross, without duplicates.
    pub fn intersects(&self, other: &Shape) -> Vec<Vec2> {
        detection::intersects(self, other)
    }

    /// Vector to add to `other` to separate it from this shape; zero when apart.
    pub fn displacement(&self, other: &Shape) -> Vec2 {
        detection::displacement(self, other)
    }

    pub fn collision(&self, other: &Shape) -> Collision {
        detection::collide(self, other)
    }

    /// On error the shape is left unchanged.
    pub fn transform(&mut self, t: &Transformation) -> Result<()> {
        match self {
            Shape::Circle(c) => c.transform(t),
            Shape::Segment(s) => s.transform(t),
            Shape::Polygon(p) => p.transform(t),
        }
    }

    pub fn translate(&mut self, offset: Vec2) -> Result<()> {
        self.transform(&Transformation::translation(offset))
    }

    /// A moved copy.
    pub fn translated(&self, offset: Vec2) -> Result<Shape> {
        let mut moved = self.clone();
        moved.translate(offset)?;
        Ok(moved)
    }

    /// Counter-clockwise rotation about the shape's center.
    pub fn rotate(&mut self, degrees: f64) -> Result<()> {
        self.transform(&Transformation::rotation_about(degrees, self.center()))
    }

    /// Uniform scale about the shape's center.
    pub fn scale(&mut self, factor: f64) -> Result<()> {
        self.transform(&Transformation::scaling_about(
            Vec2::new(factor, factor),
            self.center(),
        ))
    }

    /// Replaces a vertex. Circles have no vertices to replace.
    pub fn set_point(&mut self, index: usize, point: Vec2) -> Result<()> {
        match self {
            Shape::Circle(_) => Err(GeometryError::IndexOutOfRange { index, count: 0 }),
            Shape::Segment(s) => s.set_point(index, point),
            Shape::Polygon(p) => p.set_point(index, point),
        }
    }
}

impl Project for Shape {
    fn project(&self, axis: Axis) -> Projection {
        Shape::project(self, axis)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Segment> for Shape {
    fn from(segment: Segment) -> Self {
        Shape::Segment(segment)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collision::aabb::AABB;
use crate::collision::sat::Project;
use crate::error::{GeometryError, Result};
use crate::math::{Projection, Transformation, Vec2, EPSILON, SEPARATION_MARGIN};

use super::{check_transform, Polygon, Segment};

/// A circle in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "CircleData", into = "CircleData")
)]
pub struct Circle {
    center: Vec2,
    radius: f64,
}

impl Circle {
    /// Creates a circle. The radius must be finite and non-negative.
    pub fn new(center: Vec2, radius: f64) -> Result<Self> {
        if !center.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius { radius });
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_center(&mut self, center: Vec2) -> Result<()> {
        *self = Self::new(center, self.radius)?;
        Ok(())
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        *self = Self::new(self.center, radius).map_err(|err| {
            debug!("rejected circle radius {}: {}", radius, err);
            err
        })?;
        Ok(())
    }

    /// Center projected on the axis, widened by the radius.
    pub fn project(&self, axis: Vec2) -> Projection {
        let c = self.center.dot(axis);
        Projection::new(c - self.radius, c + self.radius)
    }

    pub fn bounds(&self) -> AABB {
        let r = Vec2::new(self.radius, self.radius);
        AABB::new(self.center - r, self.center + r)
    }

    /// Strict: points on the circumference are not contained.
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.center.distance(point) < self.radius
    }

    pub fn contains_circle(&self, other: &Circle) -> bool {
        other.radius <= self.radius
            && self.center.distance(other.center) <= self.radius - other.radius
    }

    pub fn contains_segment(&self, segment: &Segment) -> bool {
        segment.points().iter().all(|&p| self.contains_point(p))
    }

    pub fn contains_polygon(&self, polygon: &Polygon) -> bool {
        polygon.points().iter().all(|&p| self.contains_point(p))
    }

    /// Touching circles overlap.
    pub fn overlaps_circle(&self, other: &Circle) -> bool {
        self.center.distance(other.center) <= self.radius + other.radius
    }

    /// Vector that moves `other` clear of this circle along the line between the
    /// centers, or `None` when the circles are apart.
    ///
    /// Concentric circles are pushed along `+x`.
    pub fn mtv_circle(&self, other: &Circle) -> Option<Vec2> {
        if !self.overlaps_circle(other) {
            return None;
        }
        let delta = other.center - self.center;
        let direction = delta.y.atan2(delta.x);
        let push = self.radius + other.radius - delta.length() + SEPARATION_MARGIN;
        Some(Vec2::new(direction.cos(), direction.sin()) * push)
    }

    pub fn displacement_circle(&self, other: &Circle) -> Vec2 {
        self.mtv_circle(other).unwrap_or(Vec2::ZERO)
    }

    /// Points where the two circumferences cross: none, one when tangent, or two.
    ///
    /// Coincident circles report no points.
    pub fn intersects_circle(&self, other: &Circle) -> Vec<Vec2> {
        let (r1, r2) = (self.radius, other.radius);
        let delta = other.center - self.center;
        let d = delta.length();

        if d == 0.0 || d > r1 + r2 || d < (r1 - r2).abs() {
            return Vec::new();
        }

        // Distance from self.center to the radical line, and half the chord length.
        let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
        let h_sq = r1 * r1 - a * a;
        let unit = delta / d;
        let base = self.center + unit * a;

        if h_sq <= EPSILON * r1 * r1 {
            return vec![base];
        }
        let offset = unit.perpendicular() * h_sq.sqrt();
        vec![base + offset, base - offset]
    }

    /// Moves the center through `t` and grows the radius by the larger scale factor.
    pub fn transform(&mut self, t: &Transformation) -> Result<()> {
        check_transform(t)?;
        let scale = t.get_scale();
        let radius = self.radius * scale.x.abs().max(scale.y.abs());
        *self = Self::new(t.apply(self.center), radius).map_err(|err| {
            debug!("rejected circle transform {:?}: {}", t, err);
            err
        })?;
        Ok(())
    }

    pub fn translate(&mut self, offset: Vec2) -> Result<()> {
        self.transform(&Transformation::translation(offset))
    }

    /// Rotation about the circle's own center leaves it in place.
    pub fn rotate(&mut self, degrees: f64) -> Result<()> {
        self.transform(&Transformation::rotation_about(degrees, self.center))
    }

    pub fn scale(&mut self, factor: f64) -> Result<()> {
        self.transform(&Transformation::scaling_about(
            Vec2::new(factor, factor),
            self.center,
        ))
    }
}

impl Project for Circle {
    fn project(&self, axis: Vec2) -> Projection {
        Circle::project(self, axis)
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct CircleData {
    center: Vec2,
    radius: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CircleData> for Circle {
    type Error = GeometryError;

    fn try_from(data: CircleData) -> Result<Self> {
        Circle::new(data.center, data.radius)
    }
}

#[cfg(feature = "serde")]
impl From<Circle> for CircleData {
    fn from(circle: Circle) -> Self {
        CircleData {
            center: circle.center,
            radius: circle.radius,
        }
    }
}

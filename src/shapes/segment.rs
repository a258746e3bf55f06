use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collision::aabb::AABB;
use crate::collision::sat::{self, Project};
use crate::error::{GeometryError, Result};
use crate::math::{
    dedup_points, Axis, Projection, Transformation, Vec2, AXIS_ALIGNED_EPSILON, EPSILON,
};

use super::{check_transform, Circle, Polygon};

/// A line segment between two world-space points.
///
/// The unit normal, length, midpoint and slope are derived when the segment is
/// built and rebuilt by every mutator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "SegmentData", into = "SegmentData")
)]
pub struct Segment {
    points: [Vec2; 2],
    center: Vec2,
    axis: Axis,
    length: f64,
    slope: f64,
}

impl Segment {
    /// Creates a segment from `a` to `b`. The endpoints must differ.
    pub fn new(a: Vec2, b: Vec2) -> Result<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        let edge = b - a;
        let axis = edge
            .perpendicular()
            .normalize()
            .map_err(|_| GeometryError::DegenerateSegment { point: a })?;
        let slope = if edge.x.abs() < AXIS_ALIGNED_EPSILON {
            f64::INFINITY
        } else {
            edge.y / edge.x
        };

        Ok(Self {
            points: [a, b],
            center: (a + b) / 2.0,
            axis,
            length: edge.length(),
            slope,
        })
    }

    pub fn start(&self) -> Vec2 {
        self.points[0]
    }

    pub fn end(&self) -> Vec2 {
        self.points[1]
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Midpoint.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Unit normal, the edge direction turned counter-clockwise.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The normal as a one-element axis list.
    pub fn axes(&self) -> &[Axis] {
        std::slice::from_ref(&self.axis)
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// `dy / dx`; vertical segments report `f64::INFINITY`.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Unit vector from start to end.
    pub fn direction(&self) -> Vec2 {
        (self.end() - self.start()) / self.length
    }

    /// Replaces endpoint 0 or 1.
    pub fn set_point(&mut self, index: usize, point: Vec2) -> Result<()> {
        if index > 1 {
            return Err(GeometryError::IndexOutOfRange { index, count: 2 });
        }
        let mut points = self.points;
        points[index] = point;
        *self = Self::new(points[0], points[1]).map_err(|err| {
            debug!("rejected segment point {} = {:?}: {}", index, point, err);
            err
        })?;
        Ok(())
    }

    /// Perpendicular distance from `point` to the infinite line through the segment.
    ///
    /// Positive on the left of start→end, negative on the right.
    pub fn signed_distance_point(&self, point: Vec2) -> f64 {
        let (a, b) = (self.start(), self.end());
        let dx = b.x - a.x;
        let dy = b.y - a.y;

        if dx.abs() < AXIS_ALIGNED_EPSILON {
            return -(point.x - a.x) * dy.signum();
        }
        if dy.abs() < AXIS_ALIGNED_EPSILON {
            return (point.y - a.y) * dx.signum();
        }
        (b - a).cross(point - a) / self.length
    }

    /// Closest point of the segment to `point`.
    pub fn nearest_point(&self, point: Vec2) -> Vec2 {
        let a = self.start();
        let edge = self.end() - a;
        let t = (point - a).dot(edge) / (self.length * self.length);
        a + edge * t.clamp(0.0, 1.0)
    }

    /// The endpoint closer to `point`, the start on a tie.
    pub fn nearest_vertex(&self, point: Vec2) -> Vec2 {
        if self.end().distance_squared(point) < self.start().distance_squared(point) {
            self.end()
        } else {
            self.start()
        }
    }

    /// Distance from `point` to the closest point of the segment.
    pub fn distance_point(&self, point: Vec2) -> f64 {
        point.distance(self.nearest_point(point))
    }

    pub fn is_parallel(&self, other: &Segment) -> bool {
        self.direction().cross(other.direction()).abs() <= EPSILON
    }

    /// Covers the vertical against horizontal case, where the slopes are infinity and 0.
    pub fn is_perpendicular(&self, other: &Segment) -> bool {
        self.direction().dot(other.direction()).abs() <= EPSILON
    }

    pub fn project(&self, axis: Axis) -> Projection {
        Projection::new(self.start().dot(axis), self.end().dot(axis))
    }

    pub fn bounds(&self) -> AABB {
        AABB::new(self.start(), self.end())
    }

    /// True when `point` lies on the segment, endpoints included.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let edge = self.end() - self.start();
        let rel = point - self.start();
        let along = edge.dot(rel);
        let slack = EPSILON * self.length;

        (edge.cross(rel) / self.length).abs() <= EPSILON
            && along >= -slack
            && along <= self.length * self.length + slack
    }

    pub fn contains_segment(&self, other: &Segment) -> bool {
        other.length <= self.length + EPSILON
            && self.contains_point(other.start())
            && self.contains_point(other.end())
    }

    /// A segment encloses no area.
    pub fn contains_circle(&self, _circle: &Circle) -> bool {
        false
    }

    /// A segment encloses no area.
    pub fn contains_polygon(&self, _polygon: &Polygon) -> bool {
        false
    }

    /// Crossing point of two segments.
    ///
    /// Collinear segments that overlap report the endpoints of the shared stretch.
    pub fn intersects_segment(&self, other: &Segment) -> Vec<Vec2> {
        let (a1, b1) = (self.start(), other.start());
        let d1 = self.end() - a1;
        let d2 = other.end() - b1;
        let delta_start = b1 - a1;
        let denominator = d1.cross(d2);

        if denominator.abs() <= EPSILON * self.length * other.length {
            if self.signed_distance_point(b1).abs() > EPSILON {
                return Vec::new();
            }
            let mut points: Vec<Vec2> = other
                .points
                .iter()
                .copied()
                .filter(|&p| self.contains_point(p))
                .chain(self.points.iter().copied().filter(|&p| other.contains_point(p)))
                .collect();
            dedup_points(&mut points);
            return points;
        }

        let t = delta_start.cross(d2) / denominator;
        let u = delta_start.cross(d1) / denominator;
        let range = -EPSILON..=1.0 + EPSILON;

        if range.contains(&t) && range.contains(&u) {
            vec![a1 + d1 * t]
        } else {
            Vec::new()
        }
    }

    /// Points where the circle's circumference crosses the segment.
    pub fn intersects_circle(&self, circle: &Circle) -> Vec<Vec2> {
        let dir = self.direction();
        let r_sq = circle.radius() * circle.radius();
        let foot = self.start() + dir * (circle.center() - self.start()).dot(dir);
        let dist_sq = circle.center().distance_squared(foot);

        // Same boundary as overlap: a line farther than the radius misses, however close.
        if dist_sq > r_sq {
            return Vec::new();
        }
        let half_chord_sq = r_sq - dist_sq;
        let candidates = if half_chord_sq <= EPSILON * r_sq {
            vec![foot]
        } else {
            let half_chord = half_chord_sq.sqrt();
            vec![foot + dir * half_chord, foot - dir * half_chord]
        };

        let mut points: Vec<Vec2> = candidates
            .into_iter()
            .filter(|&p| self.contains_point(p))
            .collect();
        dedup_points(&mut points);
        points
    }

    pub fn intersects_polygon(&self, polygon: &Polygon) -> Vec<Vec2> {
        let mut points: Vec<Vec2> = polygon
            .sides()
            .iter()
            .flat_map(|side| self.intersects_segment(side))
            .collect();
        dedup_points(&mut points);
        points
    }

    fn axes_segment(&self, other: &Segment) -> Vec<Axis> {
        let mut axes = vec![self.axis, other.axis];
        if self.is_parallel(other) {
            axes.push(self.direction());
            axes.push(other.direction());
        }
        axes
    }

    fn axes_circle(&self, circle: &Circle) -> Vec<Axis> {
        let mut axes = vec![self.axis];
        if let Ok(axis) = (self.nearest_point(circle.center()) - circle.center()).normalize() {
            axes.push(axis);
        }
        axes
    }

    fn axes_polygon(&self, polygon: &Polygon) -> Vec<Axis> {
        let mut axes = polygon.axes().to_vec();
        axes.push(self.axis);
        axes
    }

    pub fn overlaps_segment(&self, other: &Segment) -> bool {
        sat::sat_overlaps(&self.axes_segment(other), self, other)
    }

    pub fn overlaps_circle(&self, circle: &Circle) -> bool {
        sat::sat_overlaps(&self.axes_circle(circle), self, circle)
    }

    pub fn overlaps_polygon(&self, polygon: &Polygon) -> bool {
        sat::sat_overlaps(&self.axes_polygon(polygon), self, polygon)
    }

    /// Vector that moves `other` clear of this segment, `None` when apart.
    pub fn mtv_segment(&self, other: &Segment) -> Option<Vec2> {
        sat::calc_displacement(&self.axes_segment(other), self, other)
    }

    pub fn mtv_circle(&self, circle: &Circle) -> Option<Vec2> {
        sat::calc_displacement(&self.axes_circle(circle), self, circle)
    }

    pub fn mtv_polygon(&self, polygon: &Polygon) -> Option<Vec2> {
        sat::calc_displacement(&self.axes_polygon(polygon), self, polygon)
    }

    pub fn displacement_segment(&self, other: &Segment) -> Vec2 {
        self.mtv_segment(other).unwrap_or(Vec2::ZERO)
    }

    pub fn displacement_circle(&self, circle: &Circle) -> Vec2 {
        self.mtv_circle(circle).unwrap_or(Vec2::ZERO)
    }

    pub fn displacement_polygon(&self, polygon: &Polygon) -> Vec2 {
        self.mtv_polygon(polygon).unwrap_or(Vec2::ZERO)
    }

    /// Moves both endpoints through `t`. On error the segment is left unchanged.
    pub fn transform(&mut self, t: &Transformation) -> Result<()> {
        check_transform(t)?;
        *self = Self::new(t.apply(self.start()), t.apply(self.end())).map_err(|err| {
            debug!("rejected segment transform {:?}: {}", t, err);
            err
        })?;
        Ok(())
    }

    pub fn translate(&mut self, offset: Vec2) -> Result<()> {
        self.transform(&Transformation::translation(offset))
    }

    /// Rotates counter-clockwise about the midpoint.
    pub fn rotate(&mut self, degrees: f64) -> Result<()> {
        self.transform(&Transformation::rotation_about(degrees, self.center))
    }

    /// Scales about the midpoint.
    pub fn scale(&mut self, factor: f64) -> Result<()> {
        self.transform(&Transformation::scaling_about(
            Vec2::new(factor, factor),
            self.center,
        ))
    }
}

impl Project for Segment {
    fn project(&self, axis: Axis) -> Projection {
        Segment::project(self, axis)
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct SegmentData {
    start: Vec2,
    end: Vec2,
}

#[cfg(feature = "serde")]
impl TryFrom<SegmentData> for Segment {
    type Error = GeometryError;

    fn try_from(data: SegmentData) -> Result<Self> {
        Segment::new(data.start, data.end)
    }
}

#[cfg(feature = "serde")]
impl From<Segment> for SegmentData {
    fn from(segment: Segment) -> Self {
        SegmentData {
            start: segment.start(),
            end: segment.end(),
        }
    }
}

use std::f64::consts::TAU;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collision::aabb::AABB;
use crate::collision::sat::{self, Project};
use crate::error::{GeometryError, Result};
use crate::math::{dedup_points, Axis, Projection, Transformation, Vec2, EPSILON};

use super::{check_transform, Circle, Segment};

/// A convex polygon with world-space vertices in a consistent winding.
///
/// The center (mean of the vertices), the sides and the SAT axes are derived
/// from the vertices whenever they change. Sides parallel to an earlier side
/// do not contribute a second axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "PolygonData", into = "PolygonData")
)]
pub struct Polygon {
    points: Vec<Vec2>,
    center: Vec2,
    sides: Vec<Segment>,
    axes: Vec<Axis>,
}

/// Signed shoelace area, positive for counter-clockwise winding.
fn signed_area(points: &[Vec2]) -> f64 {
    let n = points.len();
    let mut area = 0.0;
    for i in 0..n {
        area += points[i].cross(points[(i + 1) % n]);
    }
    area / 2.0
}

/// Every turn goes the same way as the winding, and the turns add up to one
/// full revolution. Straight continuations are allowed.
fn check_convex(sides: &[Segment], winding: f64) -> Result<()> {
    let n = sides.len();
    let mut turning = 0.0;
    for i in 0..n {
        let d1 = sides[i].direction();
        let d2 = sides[(i + 1) % n].direction();
        let cross = d1.cross(d2);
        if cross * winding < -EPSILON {
            return Err(GeometryError::NonConvex);
        }
        turning += cross.atan2(d1.dot(d2));
    }
    if (turning.abs() - TAU).abs() > 1e-6 {
        return Err(GeometryError::NonConvex);
    }
    Ok(())
}

/// Barycentric containment in triangle `a, b, c`, boundary included.
fn triangle_contains(a: Vec2, b: Vec2, c: Vec2, point: Vec2) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = point - a;

    let dot00 = v0.dot(v0);
    let dot01 = v0.dot(v1);
    let dot02 = v0.dot(v2);
    let dot11 = v1.dot(v1);
    let dot12 = v1.dot(v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom == 0.0 {
        return false;
    }
    let u = (dot11 * dot02 - dot01 * dot12) / denom;
    let v = (dot00 * dot12 - dot01 * dot02) / denom;

    u >= -EPSILON && v >= -EPSILON && u + v <= 1.0 + EPSILON
}

impl Polygon {
    /// Builds a polygon from at least 3 vertices.
    ///
    /// The vertices must be finite and describe a convex outline with non-zero
    /// area and no zero-length edge.
    pub fn new(points: Vec<Vec2>) -> Result<Self> {
        let n = points.len();
        if n < 3 {
            return Err(GeometryError::TooFewPoints { count: n });
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(GeometryError::NonFinite);
        }

        let sides = (0..n)
            .map(|i| {
                Segment::new(points[i], points[(i + 1) % n])
                    .map_err(|_| GeometryError::DegenerateEdge { index: i })
            })
            .collect::<Result<Vec<_>>>()?;

        let area = signed_area(&points);
        if area.abs() <= EPSILON {
            return Err(GeometryError::ZeroArea);
        }
        check_convex(&sides, area.signum())?;

        let mut axes: Vec<Axis> = Vec::with_capacity(n);
        for side in &sides {
            let axis = side.axis();
            if !axes.iter().any(|a| a.cross(axis).abs() <= EPSILON) {
                axes.push(axis);
            }
        }

        let center = points.iter().fold(Vec2::ZERO, |sum, &p| sum + p) / n as f64;

        Ok(Self {
            points,
            center,
            sides,
            axes,
        })
    }

    pub fn builder() -> PolygonBuilder {
        PolygonBuilder::default()
    }

    /// A builder holding a copy of this polygon's vertices.
    pub fn to_builder(&self) -> PolygonBuilder {
        PolygonBuilder {
            points: self.points.clone(),
        }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Mean of the vertices.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Unit edge normals, one per direction.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Edges in vertex order, the last one closing back to vertex 0.
    pub fn sides(&self) -> &[Segment] {
        &self.sides
    }

    /// Calculates the area of the polygon using the Shoelace formula.
    pub fn area(&self) -> f64 {
        signed_area(&self.points).abs()
    }

    /// The vertex closest to `point`, the earliest one on a tie.
    pub fn nearest_vertex(&self, point: Vec2) -> Vec2 {
        self.points
            .iter()
            .copied()
            .fold(self.points[0], |best, p| {
                if p.distance_squared(point) < best.distance_squared(point) {
                    p
                } else {
                    best
                }
            })
    }

    /// Replaces one vertex. The polygon is unchanged if the result is invalid.
    pub fn set_point(&mut self, index: usize, point: Vec2) -> Result<()> {
        let count = self.points.len();
        if index >= count {
            return Err(GeometryError::IndexOutOfRange { index, count });
        }
        let mut points = self.points.clone();
        points[index] = point;
        self.set_points(points)
    }

    /// Replaces every vertex. The polygon is unchanged if the result is invalid.
    pub fn set_points(&mut self, points: Vec<Vec2>) -> Result<()> {
        *self = Self::new(points).map_err(|err| {
            debug!("rejected polygon points: {}", err);
            err
        })?;
        Ok(())
    }

    pub fn project(&self, axis: Axis) -> Projection {
        let (min, max) = self.points.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), p| {
                let d = p.dot(axis);
                (min.min(d), max.max(d))
            },
        );
        Projection::new(min, max)
    }

    pub fn bounds(&self) -> AABB {
        AABB::from_points(&self.points).unwrap_or_else(|| AABB::new(self.center, self.center))
    }

    /// Inclusive containment by triangle fan around the center.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let p = &self.points;
        if p.len() == 3 {
            return triangle_contains(p[0], p[1], p[2], point);
        }
        (0..p.len()).any(|i| triangle_contains(p[i], self.center, p[(i + 1) % p.len()], point))
    }

    /// The center is inside and no side's line cuts into the circle.
    pub fn contains_circle(&self, circle: &Circle) -> bool {
        self.contains_point(circle.center())
            && self
                .sides
                .iter()
                .all(|side| side.signed_distance_point(circle.center()).abs() >= circle.radius())
    }

    pub fn contains_segment(&self, segment: &Segment) -> bool {
        segment.points().iter().all(|&p| self.contains_point(p))
    }

    pub fn contains_polygon(&self, other: &Polygon) -> bool {
        other.points.iter().all(|&p| self.contains_point(p))
    }

    pub fn intersects_segment(&self, segment: &Segment) -> Vec<Vec2> {
        segment.intersects_polygon(self)
    }

    pub fn intersects_circle(&self, circle: &Circle) -> Vec<Vec2> {
        let mut points: Vec<Vec2> = self
            .sides
            .iter()
            .flat_map(|side| side.intersects_circle(circle))
            .collect();
        dedup_points(&mut points);
        points
    }

    pub fn intersects_polygon(&self, other: &Polygon) -> Vec<Vec2> {
        let mut points: Vec<Vec2> = self
            .sides
            .iter()
            .flat_map(|side| other.sides.iter().flat_map(move |o| side.intersects_segment(o)))
            .collect();
        dedup_points(&mut points);
        points
    }

    fn axes_circle(&self, circle: &Circle) -> Vec<Axis> {
        let mut axes = self.axes.clone();
        if let Ok(axis) = (self.nearest_vertex(circle.center()) - circle.center()).normalize() {
            axes.push(axis);
        }
        axes
    }

    fn axes_polygon(&self, other: &Polygon) -> Vec<Axis> {
        let mut axes = self.axes.clone();
        axes.extend_from_slice(&other.axes);
        axes
    }

    pub fn overlaps_circle(&self, circle: &Circle) -> bool {
        sat::sat_overlaps(&self.axes_circle(circle), self, circle)
    }

    pub fn overlaps_polygon(&self, other: &Polygon) -> bool {
        sat::sat_overlaps(&self.axes_polygon(other), self, other)
    }

    /// Vector that moves the circle clear of this polygon, `None` when apart.
    pub fn mtv_circle(&self, circle: &Circle) -> Option<Vec2> {
        sat::calc_displacement(&self.axes_circle(circle), self, circle)
    }

    pub fn mtv_polygon(&self, other: &Polygon) -> Option<Vec2> {
        sat::calc_displacement(&self.axes_polygon(other), self, other)
    }

    pub fn displacement_circle(&self, circle: &Circle) -> Vec2 {
        self.mtv_circle(circle).unwrap_or(Vec2::ZERO)
    }

    pub fn displacement_polygon(&self, other: &Polygon) -> Vec2 {
        self.mtv_polygon(other).unwrap_or(Vec2::ZERO)
    }

    /// Moves every vertex through `t` and rebuilds the derived data.
    /// Mirroring transforms flip the winding, which is still accepted.
    pub fn transform(&mut self, t: &Transformation) -> Result<()> {
        check_transform(t)?;
        let points = self.points.iter().map(|&p| t.apply(p)).collect();
        self.set_points(points)
    }

    pub fn translate(&mut self, offset: Vec2) -> Result<()> {
        self.transform(&Transformation::translation(offset))
    }

    /// Rotates counter-clockwise about the center.
    pub fn rotate(&mut self, degrees: f64) -> Result<()> {
        self.transform(&Transformation::rotation_about(degrees, self.center))
    }

    /// Scales about the center.
    pub fn scale(&mut self, factor: f64) -> Result<()> {
        self.transform(&Transformation::scaling_about(
            Vec2::new(factor, factor),
            self.center,
        ))
    }
}

impl Project for Polygon {
    fn project(&self, axis: Axis) -> Projection {
        Polygon::project(self, axis)
    }
}

/// Collects vertices one at a time and validates them once in [`PolygonBuilder::build`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonBuilder {
    points: Vec<Vec2>,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `count` vertices at the origin.
    pub fn with_point_count(count: usize) -> Self {
        Self {
            points: vec![Vec2::ZERO; count],
        }
    }

    /// Grows with origin vertices or truncates.
    pub fn set_point_count(&mut self, count: usize) -> &mut Self {
        self.points.resize(count, Vec2::ZERO);
        self
    }

    pub fn set_point(&mut self, index: usize, point: Vec2) -> Result<&mut Self> {
        let count = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(GeometryError::IndexOutOfRange { index, count })?;
        *slot = point;
        Ok(self)
    }

    pub fn push(&mut self, point: Vec2) -> &mut Self {
        self.points.push(point);
        self
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn build(&self) -> Result<Polygon> {
        Polygon::new(self.points.clone())
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct PolygonData {
    points: Vec<Vec2>,
}

#[cfg(feature = "serde")]
impl TryFrom<PolygonData> for Polygon {
    type Error = GeometryError;

    fn try_from(data: PolygonData) -> Result<Self> {
        Polygon::new(data.points)
    }
}

#[cfg(feature = "serde")]
impl From<Polygon> for PolygonData {
    fn from(polygon: Polygon) -> Self {
        PolygonData {
            points: polygon.points,
        }
    }
}

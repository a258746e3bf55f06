use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Scale, rotation and translation applied to a shape's points.
///
/// Rotation is kept in degrees and normalized to `[0, 360)`. Scaling and
/// rotation happen about `pivot`, translation is applied last.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "TransformationData", into = "TransformationData")
)]
pub struct Transformation {
    scale: Vec2,
    rotation: f64,
    translation: Vec2,
    pivot: Vec2,
}

fn normalize_degrees(degrees: f64) -> f64 {
    let r = degrees % 360.0;
    if r < 0.0 {
        r + 360.0
    } else {
        r
    }
}

impl Transformation {
    /// Creates a transform about the origin.
    pub fn new(scale: Vec2, rotation: f64, translation: Vec2) -> Self {
        Self {
            scale,
            rotation: normalize_degrees(rotation),
            translation,
            pivot: Vec2::ZERO,
        }
    }

    /// Creates an identity transform (unit scale, no rotation, no translation).
    pub fn identity() -> Self {
        Self::new(Vec2::new(1.0, 1.0), 0.0, Vec2::ZERO)
    }

    pub fn translation(offset: Vec2) -> Self {
        Self::new(Vec2::new(1.0, 1.0), 0.0, offset)
    }

    pub fn rotation_about(degrees: f64, pivot: Vec2) -> Self {
        Self::new(Vec2::new(1.0, 1.0), degrees, Vec2::ZERO).with_pivot(pivot)
    }

    pub fn scaling_about(factor: Vec2, pivot: Vec2) -> Self {
        Self::new(factor, 0.0, Vec2::ZERO).with_pivot(pivot)
    }

    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn get_scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    /// Multiplies the current scale component-wise.
    pub fn scale(&mut self, factor: Vec2) {
        self.scale = self.scale.component_mul(factor);
    }

    /// Rotation in degrees, always within `[0, 360)`.
    pub fn get_rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = normalize_degrees(degrees);
    }

    pub fn rotate(&mut self, degrees: f64) {
        self.rotation = normalize_degrees(self.rotation + degrees);
    }

    pub fn get_translation(&self) -> Vec2 {
        self.translation
    }

    pub fn set_translation(&mut self, translation: Vec2) {
        self.translation = translation;
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.translation += offset;
    }

    pub fn get_pivot(&self) -> Vec2 {
        self.pivot
    }

    pub fn set_pivot(&mut self, pivot: Vec2) {
        self.pivot = pivot;
    }

    pub fn is_identity(&self) -> bool {
        self.scale == Vec2::new(1.0, 1.0) && self.rotation == 0.0 && self.translation == Vec2::ZERO
    }

    /// Applies scale and counter-clockwise rotation about the pivot, then translation.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        let local = (point - self.pivot).component_mul(self.scale);
        local.rotate(self.rotation.to_radians()) + self.pivot + self.translation
    }

    /// The transform that undoes this one.
    ///
    /// Returns `None` when no single `Transformation` can express the undo: a zero
    /// scale component, or a non-uniform scale combined with a rotation that does
    /// not commute with it.
    pub fn inverse(&self) -> Option<Transformation> {
        if self.scale.x == 0.0 || self.scale.y == 0.0 {
            return None;
        }
        let uniform = self.scale.x == self.scale.y;
        if !uniform && self.rotation % 180.0 != 0.0 {
            return None;
        }
        // Undo the translation by shifting the pivot along with it.
        Some(Transformation {
            scale: Vec2::new(1.0 / self.scale.x, 1.0 / self.scale.y),
            rotation: normalize_degrees(-self.rotation),
            translation: -self.translation,
            pivot: self.pivot + self.translation,
        })
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

/// Negates every component: scale, rotation and translation. The pivot is kept.
impl Neg for Transformation {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            scale: -self.scale,
            rotation: normalize_degrees(-self.rotation),
            translation: -self.translation,
            pivot: self.pivot,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct TransformationData {
    scale: Vec2,
    rotation: f64,
    translation: Vec2,
    #[serde(default)]
    pivot: Vec2,
}

/// Loads through the constructor so the rotation is normalized.
#[cfg(feature = "serde")]
impl From<TransformationData> for Transformation {
    fn from(data: TransformationData) -> Self {
        Transformation::new(data.scale, data.rotation, data.translation).with_pivot(data.pivot)
    }
}

#[cfg(feature = "serde")]
impl From<Transformation> for TransformationData {
    fn from(t: Transformation) -> Self {
        TransformationData {
            scale: t.scale,
            rotation: t.rotation,
            translation: t.translation,
            pivot: t.pivot,
        }
    }
}

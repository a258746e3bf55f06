use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Everything one pair query found out about shapes A and B.
///
/// Built once per query and never changed afterwards. The default value
/// describes two shapes that do not touch.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Collision {
    overlaps: bool,
    intersects: Vec<Vec2>,
    a_contains_b: bool,
    b_contains_a: bool,
    displacement: Vec2,
}

impl Collision {
    pub fn new(
        overlaps: bool,
        intersects: Vec<Vec2>,
        a_contains_b: bool,
        b_contains_a: bool,
        displacement: Vec2,
    ) -> Self {
        Self {
            overlaps,
            intersects,
            a_contains_b,
            b_contains_a,
            displacement,
        }
    }

    pub fn overlaps(&self) -> bool {
        self.overlaps
    }

    /// Points where the outlines cross.
    pub fn intersects(&self) -> &[Vec2] {
        &self.intersects
    }

    pub fn a_contains_b(&self) -> bool {
        self.a_contains_b
    }

    pub fn b_contains_a(&self) -> bool {
        self.b_contains_a
    }

    /// Vector to add to B to separate it from A.
    pub fn displacement(&self) -> Vec2 {
        self.displacement
    }

    /// Length of the displacement.
    pub fn penetration(&self) -> f64 {
        self.displacement.length()
    }
}

/// Swaps the roles of A and B.
impl Neg for Collision {
    type Output = Collision;

    fn neg(self) -> Collision {
        Collision {
            overlaps: self.overlaps,
            intersects: self.intersects,
            a_contains_b: self.b_contains_a,
            b_contains_a: self.a_contains_b,
            displacement: -self.displacement,
        }
    }
}

impl Neg for &Collision {
    type Output = Collision;

    fn neg(self) -> Collision {
        -self.clone()
    }
}

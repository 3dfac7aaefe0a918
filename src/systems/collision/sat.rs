//! SAT (Separating Axis Theorem) narrow phase
//!
//! Two convex polygons are disjoint iff some edge normal of either polygon
//! separates their projections. Checking the edge normals of both shapes is
//! sufficient for convex polygon pairs.

use crate::math::Vec2;
use crate::systems::body::Body;

/// Scalar interval of a body's vertices projected onto an axis
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub min: f32,
    pub max: f32,
}

impl Projection {
    pub fn overlaps(&self, other: &Projection) -> bool {
        self.min.max(other.min) <= self.max.min(other.max)
    }

    pub fn overlap_amount(&self, other: &Projection) -> f32 {
        self.max.min(other.max) - self.min.max(other.min)
    }
}

/// Result of one pairwise test: penetration depth along the best axis.
/// The axis direction is arbitrary until the resolver orients it.
#[derive(Clone, Copy, Debug)]
pub struct Manifold {
    pub overlap: f32,
    pub axis: Vec2,
}

/// Test two bodies for overlap.
///
/// Returns `None` as soon as a separating axis is found. Otherwise the axis
/// with the smallest overlap wins; ties keep the first axis reaching the
/// minimum, iterated in fixed order (a's axes, then b's). Deterministic,
/// but not symmetric under operand swap.
pub fn test(a: &Body, b: &Body) -> Option<Manifold> {
    let mut overlap = f32::INFINITY;
    let mut smallest_axis = Vec2::zero();

    for axis in a.axes().into_iter().chain(b.axes()) {
        let p1 = a.project(axis);
        let p2 = b.project(axis);

        if !p1.overlaps(&p2) {
            return None; // Separating axis found
        }
        let o = p1.overlap_amount(&p2);
        if o < overlap {
            overlap = o;
            smallest_axis = axis;
        }
    }

    Some(Manifold {
        overlap,
        axis: smallest_axis,
    })
}

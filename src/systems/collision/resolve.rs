//! Collision resolution - positional separation plus velocity correction
//!
//! Purely inelastic and frictionless: overlap is removed by displacing
//! bodies along the contact normal and the velocity component pointing into
//! the other body is zeroed. Tangential velocity and angular velocity are
//! untouched (no angular impulse).

use crate::systems::body::Body;

use super::sat::Manifold;

/// Resolve one contact between `bodies[j]` and `bodies[k]` (j < k).
///
/// Mutates poses mid-pass, so callers iterate by index; each positional
/// write refreshes the body's world vertices so later pair tests in the
/// same pass observe the corrected pose.
pub fn resolve_pair(bodies: &mut [Body], j: usize, k: usize, manifold: &Manifold) {
    debug_assert!(j < k);
    let (left, right) = bodies.split_at_mut(k);
    let b1 = &mut left[j];
    let b2 = &mut right[0];

    if b1.is_static && b2.is_static {
        return;
    }

    let mut normal = manifold.axis;
    let overlap = manifold.overlap;

    // Orient the normal so it points from b1's center toward b2's center;
    // the SAT axis direction is otherwise arbitrary.
    let dir = b2.pos - b1.pos;
    if dir.dot(normal) < 0.0 {
        normal = -normal;
    }

    // A dynamic body absorbs the full overlap against a static one, half of
    // it against another dynamic one (equal-mass convention, no mass model).
    if !b1.is_static {
        let share = if b2.is_static { 1.0 } else { 0.5 };
        b1.pos = b1.pos - normal * (overlap * share);
        b1.refresh_world_vertices();

        // Kill only the velocity component moving into b2.
        let dot = b1.velocity.dot(normal);
        if dot > 0.0 {
            b1.velocity = b1.velocity - normal * dot;
        }
    }
    if !b2.is_static {
        let share = if b1.is_static { 1.0 } else { 0.5 };
        b2.pos = b2.pos + normal * (overlap * share);
        b2.refresh_world_vertices();

        let dot = b2.velocity.dot(normal);
        if dot < 0.0 {
            b2.velocity = b2.velocity - normal * dot;
        }
    }
}

//! Body - a convex polygon that moves as a unit
//!
//! The body stores its shape in local coordinates (relative to center 0,0)
//! and caches world coordinates derived from position and rotation. The
//! cache is refreshed by every pose mutator so geometric queries always see
//! the current pose.

mod body;

pub use body::Body;

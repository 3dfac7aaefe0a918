//! Narrow-phase collision detection and resolution.
//!
//! Every unordered body pair is tested directly; there is no broad phase.
//! The design assumes tens of bodies, not thousands; cost grows as
//! O(n² · iterations) and degrades rather than fails.

pub mod resolve;
pub mod sat;

pub use sat::{Manifold, Projection};

//! Physics systems: bodies, narrow phase, resolution.

pub mod body;
pub mod collision;

//! Math primitives shared by the physics core.

mod vec2;

pub use vec2::Vec2;

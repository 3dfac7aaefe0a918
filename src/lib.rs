//! NEGEN Physics - rigid body polygon physics core in WASM
//!
//! A discrete-time 2D physics engine for browser mini-games: semi-implicit
//! Euler integration, SAT (Separating Axis Theorem) narrow phase over convex
//! polygons, and an iterative positional/velocity resolution solver that
//! keeps falling, rotating, stacking shapes stable across simulation ticks.
//!
//! Architecture:
//! - math/        - Vec2 primitives
//! - systems/     - Body geometry, SAT narrow phase, resolution
//! - simulation/  - World orchestration and the JS-facing facade
//!
//! The fixed-timestep scheduler, scenes, rendering, audio and input all live
//! on the JS side; this crate only owns simulation truth.

pub mod math;
pub mod simulation;
pub mod systems;

// Convenience re-exports for Rust consumers and tests
pub use math::Vec2;
pub use simulation::{PerfStats, World, WorldConfig, WorldCore};
pub use systems::body::Body;
pub use systems::collision::{sat, Manifold, Projection};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 NEGEN Physics WASM core initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

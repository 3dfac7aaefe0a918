use wasm_bindgen::prelude::*;

use crate::math::Vec2;
use crate::systems::body::Body;

use super::perf_stats::PerfStats;
use super::WorldCore;

/// JS-facing world. Pure simulation state: bodies carry no colors, sprites
/// or timers. Callers key their presentation data off the returned body IDs.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: WorldCore::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn gravity(&self) -> f32 {
        self.core.gravity()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), JsValue> {
        self.core.set_gravity(gravity).map_err(|e| JsValue::from_str(&e))
    }

    /// Load world tuning from a JSON config object
    pub fn load_config_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn get_config_json(&self) -> String {
        self.core.config_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === BODY API ===

    /// Spawn a dynamic box centered at (x, y). Returns the body ID, or 0
    /// if the shape is rejected.
    pub fn spawn_box(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        match Body::new_box(x, y, w, h) {
            Ok(body) => self.core.add_body(body),
            Err(_) => 0,
        }
    }

    /// Spawn a static box (ground, walls). Returns the body ID, or 0 if
    /// the shape is rejected.
    pub fn spawn_static_box(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        match Body::new_static_box(x, y, w, h) {
            Ok(body) => self.core.add_body(body),
            Err(_) => 0,
        }
    }

    /// Spawn a convex polygon from a flat [x0, y0, x1, y1, ...] array of
    /// local-space vertices (ordered, convex; convexity is not validated).
    pub fn spawn_polygon(
        &mut self,
        x: f32,
        y: f32,
        vertices: &[f32],
        is_static: bool,
    ) -> Result<u32, JsValue> {
        if vertices.len() % 2 != 0 {
            return Err(JsValue::from_str("vertex array length must be even"));
        }
        let verts: Vec<Vec2> = vertices
            .chunks_exact(2)
            .map(|c| Vec2::new(c[0], c[1]))
            .collect();
        let body = Body::from_vertices(x, y, verts, is_static)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(self.core.add_body(body))
    }

    /// Remove a body by ID. Illegal during an in-progress step, which the
    /// synchronous API makes unrepresentable from JS.
    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.remove_body(id)
    }

    /// Remove all bodies
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Advance the simulation by exactly `dt` seconds. The scheduler calls
    /// this with a fixed quantum (e.g. 1/60), zero or more times per frame.
    pub fn step(&mut self, dt: f32) -> Result<(), JsValue> {
        self.core.step(dt).map_err(|e| JsValue::from_str(&e))
    }

    // === RENDER ACCESS ===

    pub fn body_x(&self, id: u32) -> Option<f32> {
        self.core.body(id).map(|b| b.pos().x)
    }

    pub fn body_y(&self, id: u32) -> Option<f32> {
        self.core.body(id).map(|b| b.pos().y)
    }

    pub fn body_angle(&self, id: u32) -> Option<f32> {
        self.core.body(id).map(|b| b.angle())
    }

    pub fn body_is_static(&self, id: u32) -> Option<bool> {
        self.core.body(id).map(|b| b.is_static)
    }

    /// Flatten a body's world vertices into the transfer buffer and return
    /// a pointer into WASM memory (null for an unknown ID)
    pub fn extract_body_vertices(&mut self, id: u32) -> *const f32 {
        self.core.extract_body_vertices(id)
    }

    /// Number of f32 values written by the last `extract_body_vertices`
    pub fn vertex_transfer_len(&self) -> usize {
        self.core.vertex_transfer_len()
    }

    // === KINEMATIC CONTROL ===
    // For scene scripting (e.g. steering a hovering piece before dropping
    // it). Pose writes keep the cached world vertices consistent.

    pub fn set_body_position(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.core.set_body_position(id, x, y)
    }

    pub fn set_body_angle(&mut self, id: u32, angle: f32) -> bool {
        self.core.set_body_angle(id, angle)
    }

    pub fn set_body_velocity(&mut self, id: u32, vx: f32, vy: f32) -> bool {
        self.core.set_body_velocity(id, vx, vy)
    }

    pub fn set_body_angular_velocity(&mut self, id: u32, va: f32) -> bool {
        self.core.set_body_angular_velocity(id, va)
    }

    pub fn set_body_static(&mut self, id: u32, is_static: bool) -> bool {
        self.core.set_body_static(id, is_static)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

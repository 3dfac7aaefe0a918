//! World - discrete-time rigid body simulation
//!
//! The world only orchestrates: integration lives in step/integrate.rs,
//! the SAT test and resolution in systems/collision, structural commands in
//! commands/. One call to `step(dt)` fully integrates and resolves before
//! returning: single-threaded, run-to-completion, no suspension points.
//!
//! The fixed-timestep scheduler is an external collaborator: it accumulates
//! elapsed wall-clock time and calls `step` zero or more times per rendered
//! frame with a constant quantum (and is responsible for clamping runaway
//! catch-up). The world itself has no notion of wall-clock time.

use crate::systems::body::Body;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/integrate.rs"]
mod integrate;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use settings::WorldConfig;

use perf_timer::PerfTimer;

/// The simulation world: an explicitly owned value, never a singleton, so
/// multiple independent worlds (one per scene) can coexist.
pub struct WorldCore {
    bodies: Vec<Body>,
    next_id: u32,

    // Settings
    gravity: f32,
    iterations: u32,
    linear_damping: f32,
    angular_damping: f32,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    // Scratch buffer for handing flattened vertices across the WASM ABI
    vertex_transfer_buffer: Vec<f32>,
}

impl WorldCore {
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            gravity: config.gravity,
            iterations: config.iterations,
            linear_damping: config.linear_damping,
            angular_damping: config.angular_damping,
            frame: 0,
            perf_enabled: false,
            perf_stats: PerfStats::default(),
            vertex_transfer_buffer: Vec::new(),
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), String> {
        settings::set_gravity(self, gravity)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_config_json(self, json)
    }

    pub fn apply_config(&mut self, config: WorldConfig) -> Result<(), String> {
        settings::apply_config(self, config)
    }

    pub fn config_json(&self) -> String {
        settings::config_json(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === BODY API ===
    // Structural mutation is only legal between steps; `&mut self` and the
    // run-to-completion step enforce that by construction.

    /// Add a body to the world and return its assigned ID
    pub fn add_body(&mut self, body: Body) -> u32 {
        commands::add_body(self, body)
    }

    /// Remove a body by ID; returns false if no such body exists
    pub fn remove_body(&mut self, id: u32) -> bool {
        commands::remove_body(self, id)
    }

    /// Remove all bodies
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Read access for the renderer: pose and world vertices, in list order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub(crate) fn body_mut(&mut self, id: u32) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    // === KINEMATIC CONTROL ===
    // Scene scripting steers bodies directly (e.g. the hovering piece in a
    // stacking game before it drops). Every pose write refreshes the
    // body's cached world vertices.

    pub fn set_body_position(&mut self, id: u32, x: f32, y: f32) -> bool {
        commands::set_body_position(self, id, x, y)
    }

    pub fn set_body_angle(&mut self, id: u32, angle: f32) -> bool {
        commands::set_body_angle(self, id, angle)
    }

    pub fn set_body_velocity(&mut self, id: u32, vx: f32, vy: f32) -> bool {
        commands::set_body_velocity(self, id, vx, vy)
    }

    pub fn set_body_angular_velocity(&mut self, id: u32, va: f32) -> bool {
        commands::set_body_angular_velocity(self, id, va)
    }

    pub fn set_body_static(&mut self, id: u32, is_static: bool) -> bool {
        commands::set_body_static(self, id, is_static)
    }

    /// Advance the simulation by exactly `dt` seconds (one fixed tick)
    pub fn step(&mut self, dt: f32) -> Result<(), String> {
        step::step(self, dt)
    }

    /// Flatten a body's world vertices into the transfer buffer and return
    /// a pointer to it (for zero-copy JS rendering). Returns null and an
    /// empty buffer for an unknown ID.
    pub fn extract_body_vertices(&mut self, id: u32) -> *const f32 {
        self.vertex_transfer_buffer.clear();
        if let Some(body) = self.bodies.iter().find(|b| b.id == id) {
            for v in body.world_vertices() {
                self.vertex_transfer_buffer.push(v.x);
                self.vertex_transfer_buffer.push(v.y);
            }
        }
        if self.vertex_transfer_buffer.is_empty() {
            std::ptr::null()
        } else {
            self.vertex_transfer_buffer.as_ptr()
        }
    }

    /// Number of f32 values written by the last `extract_body_vertices`
    pub fn vertex_transfer_len(&self) -> usize {
        self.vertex_transfer_buffer.len()
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

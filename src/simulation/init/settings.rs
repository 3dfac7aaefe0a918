use serde::{Deserialize, Serialize};

use super::{PerfStats, WorldCore};

/// Tunable world settings, loadable from JSON.
///
/// Defaults mirror the constants the games were tuned against. Damping
/// values are per-tick decay factors, not time-scaled drag coefficients.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorldConfig {
    pub gravity: f32,
    pub iterations: u32,
    pub linear_damping: f32,
    pub angular_damping: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: 500.0,
            iterations: 4,
            linear_damping: 0.99,
            angular_damping: 0.95,
        }
    }
}

impl WorldConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.gravity.is_finite() {
            return Err("gravity must be finite".to_string());
        }
        if self.iterations == 0 {
            return Err("iterations must be at least 1".to_string());
        }
        if !self.linear_damping.is_finite() || self.linear_damping <= 0.0 {
            return Err("linearDamping must be finite and positive".to_string());
        }
        if !self.angular_damping.is_finite() || self.angular_damping <= 0.0 {
            return Err("angularDamping must be finite and positive".to_string());
        }
        Ok(())
    }
}

pub(super) fn apply_config(world: &mut WorldCore, config: WorldConfig) -> Result<(), String> {
    config.validate()?;
    world.gravity = config.gravity;
    world.iterations = config.iterations;
    world.linear_damping = config.linear_damping;
    world.angular_damping = config.angular_damping;
    Ok(())
}

pub(super) fn load_config_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    let config: WorldConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
    apply_config(world, config)
}

pub(super) fn config_json(world: &WorldCore) -> String {
    let config = WorldConfig {
        gravity: world.gravity,
        iterations: world.iterations,
        linear_damping: world.linear_damping,
        angular_damping: world.angular_damping,
    };
    serde_json::to_string(&config).unwrap_or_else(|_| "{}".to_string())
}

pub(super) fn set_gravity(world: &mut WorldCore, gravity: f32) -> Result<(), String> {
    if !gravity.is_finite() {
        return Err(format!("gravity must be finite, got {gravity}"));
    }
    world.gravity = gravity;
    Ok(())
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

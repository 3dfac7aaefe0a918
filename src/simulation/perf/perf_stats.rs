use wasm_bindgen::prelude::*;

/// Last-step perf snapshot (zeros when perf metrics are disabled)
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) solve_ms: f64,
    pub(super) pair_tests: u32,
    pub(super) contacts: u32,
    pub(super) body_count: u32,
    pub(super) iterations: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn solve_ms(&self) -> f64 { self.solve_ms }
    #[wasm_bindgen(getter)]
    pub fn pair_tests(&self) -> u32 { self.pair_tests }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn iterations(&self) -> u32 { self.iterations }
}

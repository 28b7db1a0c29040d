use wasm_bindgen::prelude::*;

use crate::rigid_body_system::StepCounters;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) extract_ms: f64,
    pub(super) frame: u64,
    pub(super) body_count: u32,
    pub(super) dynamic_bodies: u32,
    pub(super) overlap_tests: u32,
    pub(super) x_corrections: u32,
    pub(super) y_corrections: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_counters(&mut self, counters: &StepCounters) {
        self.dynamic_bodies = counters.dynamic_bodies;
        self.overlap_tests = counters.overlap_tests;
        self.x_corrections = counters.x_corrections;
        self.y_corrections = counters.y_corrections;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn extract_ms(&self) -> f64 { self.extract_ms }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn dynamic_bodies(&self) -> u32 { self.dynamic_bodies }
    #[wasm_bindgen(getter)]
    pub fn overlap_tests(&self) -> u32 { self.overlap_tests }
    #[wasm_bindgen(getter)]
    pub fn x_corrections(&self) -> u32 { self.x_corrections }
    #[wasm_bindgen(getter)]
    pub fn y_corrections(&self) -> u32 { self.y_corrections }
}

use wasm_bindgen::prelude::*;

use crate::config::SimConfig;
use crate::rigid_body::BodyKind;

use super::perf_stats::PerfStats;
use super::WorldCore;

fn parse_kind(kind: u8) -> Result<BodyKind, JsValue> {
    BodyKind::try_from(kind).map_err(|e| {
        engine_warn!("{}", e);
        JsValue::from_str(&e)
    })
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: WorldCore::new(),
        }
    }

    /// Create an empty world from a JSON config document
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: String) -> Result<World, JsValue> {
        let config = SimConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core: WorldCore::with_config(config),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn dynamic_body_count(&self) -> usize { self.core.dynamic_body_count() }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_config_json(&self) -> String {
        self.core.get_config_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    pub fn set_gravity_step_fraction(&mut self, fraction: f32) {
        self.core.set_gravity_step_fraction(fraction);
    }

    pub fn set_max_fall_speed(&mut self, speed: f32) {
        self.core.set_max_fall_speed(speed);
    }

    pub fn set_bounciness(&mut self, bounciness: f32) {
        self.core.set_bounciness(bounciness);
    }

    pub fn set_resolution_scale(&mut self, scale: f32) {
        self.core.set_resolution_scale(scale);
    }

    pub fn set_spawn_enabled(&mut self, enabled: bool) {
        self.core.set_spawn_enabled(enabled);
    }

    pub fn set_spawn_kind(&mut self, kind: u8) -> Result<(), JsValue> {
        self.core.set_spawn_kind(parse_kind(kind)?);
        Ok(())
    }

    /// Select the spawn kind by name ("static"/"staticGUI", "dynamic"/"rigidbody")
    pub fn set_spawn_kind_name(&mut self, name: String) -> Result<(), JsValue> {
        let kind: BodyKind = name.parse().map_err(|e: String| JsValue::from_str(&e))?;
        self.core.set_spawn_kind(kind);
        Ok(())
    }

    pub fn set_spawn_size(&mut self, width: f32, height: f32) {
        self.core.set_spawn_size(width, height);
    }

    // === BODY API ===

    /// Spawn a body with its top-left corner at (x, y); `kind` is 0 (static) or 1 (dynamic).
    /// Returns the body ID
    pub fn spawn_body(&mut self, x: f32, y: f32, w: f32, h: f32, kind: u8) -> Result<u32, JsValue> {
        let kind = parse_kind(kind)?;
        Ok(self.core.spawn_body(x, y, w, h, kind))
    }

    pub fn spawn_static(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        self.core.spawn_body(x, y, w, h, BodyKind::Static)
    }

    pub fn spawn_dynamic(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        self.core.spawn_body(x, y, w, h, BodyKind::Dynamic)
    }

    pub fn spawn_body_with_color(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        kind: u8,
        color: u32,
    ) -> Result<u32, JsValue> {
        let kind = parse_kind(kind)?;
        Ok(self.core.spawn_body_with_color(x, y, w, h, kind, color))
    }

    /// Pointer press at (x, y). Returns the new body ID, or 0 when spawning is off
    pub fn pointer_down(&mut self, x: f32, y: f32) -> u32 {
        self.core.pointer_down(x, y)
    }

    pub fn apply_impulse(&mut self, id: u32, vx: f32, vy: f32) -> bool {
        self.core.apply_impulse(id, vx, vy)
    }

    /// Remove all bodies
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward one frame
    pub fn step(&mut self) {
        self.core.step();
    }

    // === RENDER API ===

    /// Pack rects/colors for this frame. Returns the body count
    pub fn extract_render(&mut self) -> usize {
        self.core.extract_render()
    }

    /// Pointer to `[x, y, w, h]` f32 quads (valid until the next extract)
    pub fn render_rects_ptr(&self) -> *const f32 {
        self.core.render_rects_ptr()
    }

    /// Length of the rect buffer in f32 elements
    pub fn render_rects_len(&self) -> usize {
        self.core.render_rects().len()
    }

    pub fn render_colors_ptr(&self) -> *const u32 {
        self.core.render_colors_ptr()
    }

    pub fn render_colors_len(&self) -> usize {
        self.core.render_colors().len()
    }

    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

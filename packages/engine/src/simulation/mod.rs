//! World - box sandbox orchestration
//!
//! `WorldCore` owns the body registry, the injected `SimConfig` and the
//! buffers the host reads after each step. It only orchestrates:
//! - bodies, integration and collision live in systems/rigid_body_system
//! - configuration lives in domain/config
//!
//! Frame contract: the host calls `step()` once per rendered frame, then
//! reads the render buffers. Nothing runs concurrently with a step.

use crate::config::SimConfig;
use crate::rigid_body::{BodyKind, Rect};
use crate::rigid_body_system::RigidBodySystem;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Packed per-body data handed to the JS renderer
pub(crate) struct RenderBuffers {
    /// `[x, y, width, height]` per body, registry order
    pub(crate) rects: Vec<f32>,
    /// Packed ABGR color per body, registry order
    pub(crate) colors: Vec<u32>,
}

/// The simulation world
pub struct WorldCore {
    config: SimConfig,
    bodies: RigidBodySystem,

    // State
    frame: u64,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create an empty world with the default configuration
    pub fn new() -> Self {
        init::create_world_core(SimConfig::default())
    }

    pub fn with_config(config: SimConfig) -> Self {
        init::create_world_core(config)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bodies(&self) -> &RigidBodySystem {
        &self.bodies
    }

    pub fn frame(&self) -> u64 { self.frame }

    /// Replace the configuration and start a fresh session
    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_config_json(self, json)
    }

    pub fn get_config_json(&self) -> String {
        self.config.to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_gravity_step_fraction(&mut self, fraction: f32) {
        settings::set_gravity_step_fraction(self, fraction);
    }

    pub fn set_max_fall_speed(&mut self, speed: f32) {
        settings::set_max_fall_speed(self, speed);
    }

    pub fn set_bounciness(&mut self, bounciness: f32) {
        settings::set_bounciness(self, bounciness);
    }

    pub fn set_resolution_scale(&mut self, scale: f32) {
        settings::set_resolution_scale(self, scale);
    }

    pub fn set_spawn_enabled(&mut self, enabled: bool) {
        settings::set_spawn_enabled(self, enabled);
    }

    pub fn set_spawn_kind(&mut self, kind: BodyKind) {
        settings::set_spawn_kind(self, kind);
    }

    pub fn set_spawn_size(&mut self, width: f32, height: f32) {
        settings::set_spawn_size(self, width, height);
    }

    // === BODY API ===

    /// Spawn a body with its top-left corner at (x, y).
    /// Returns the body ID
    pub fn spawn_body(&mut self, x: f32, y: f32, w: f32, h: f32, kind: BodyKind) -> u32 {
        rigid::spawn_body(self, x, y, w, h, kind)
    }

    pub fn spawn_body_with_color(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        kind: BodyKind,
        color: u32,
    ) -> u32 {
        rigid::spawn_body_with_color(self, x, y, w, h, kind, color)
    }

    /// Add an impulse to a dynamic body's velocity
    pub fn apply_impulse(&mut self, id: u32, vx: f32, vy: f32) -> bool {
        rigid::apply_impulse(self, id, vx, vy)
    }

    pub fn body_count(&self) -> usize {
        rigid::body_count(self)
    }

    pub fn dynamic_body_count(&self) -> usize {
        rigid::dynamic_body_count(self)
    }

    /// Pointer press: spawn per the current spawn settings.
    /// Returns the body ID, or 0 when pointer spawning is disabled
    pub fn pointer_down(&mut self, x: f32, y: f32) -> u32 {
        commands::pointer_down(self, x, y)
    }

    /// Remove every body and reset the frame counter
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Step the simulation forward one frame
    pub fn step(&mut self) {
        step::step(self);
    }

    // === RENDER API ===

    /// Visit every body's rect and color in registry order
    pub fn for_each_body<F: FnMut(&Rect, u32)>(&self, f: F) {
        render_extract::for_each_body(self, f)
    }

    /// Refresh the packed render buffers. Returns the number of bodies written
    pub fn extract_render(&mut self) -> usize {
        render_extract::extract_render(self)
    }

    pub fn render_rects(&self) -> &[f32] {
        &self.render.rects
    }

    pub fn render_colors(&self) -> &[u32] {
        &self.render.colors
    }

    /// Get pointer to packed rects (for JS rendering)
    pub fn render_rects_ptr(&self) -> *const f32 {
        self.render.rects.as_ptr()
    }

    /// Get pointer to packed colors (for JS rendering)
    pub fn render_colors_ptr(&self) -> *const u32 {
        self.render.colors.as_ptr()
    }

    /// JSON array describing every body (debug tooling)
    pub fn snapshot_json(&self) -> String {
        render_extract::snapshot_json(self)
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

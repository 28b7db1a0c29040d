use crate::config::SimConfig;
use crate::rigid_body::{BodyKind, Vec2};

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn load_config_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    let config = SimConfig::from_json(json)?;
    world.config = config;
    world.clear();
    engine_log!(
        "config loaded: gravity={} bounciness={} resolution_scale={}",
        world.config.gravity,
        world.config.bounciness,
        world.config.resolution_scale
    );
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

pub(super) fn set_gravity(world: &mut WorldCore, gravity: f32) {
    world.config.gravity = gravity;
}

pub(super) fn set_gravity_step_fraction(world: &mut WorldCore, fraction: f32) {
    world.config.gravity_step_fraction = fraction;
}

pub(super) fn set_max_fall_speed(world: &mut WorldCore, speed: f32) {
    world.config.max_fall_speed = speed;
}

pub(super) fn set_bounciness(world: &mut WorldCore, bounciness: f32) {
    world.config.bounciness = bounciness;
}

pub(super) fn set_resolution_scale(world: &mut WorldCore, scale: f32) {
    world.config.resolution_scale = scale;
}

pub(super) fn set_spawn_enabled(world: &mut WorldCore, enabled: bool) {
    world.config.spawn.enabled = enabled;
}

pub(super) fn set_spawn_kind(world: &mut WorldCore, kind: BodyKind) {
    world.config.spawn.kind = kind;
}

pub(super) fn set_spawn_size(world: &mut WorldCore, width: f32, height: f32) {
    world.config.spawn.size = Vec2::new(width, height);
}

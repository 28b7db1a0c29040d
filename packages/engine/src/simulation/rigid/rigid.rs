use crate::rigid_body::{BodyKind, Rect, Vec2};

use super::WorldCore;

pub(super) fn spawn_body(world: &mut WorldCore, x: f32, y: f32, w: f32, h: f32, kind: BodyKind) -> u32 {
    let color = world.config.color_for(kind);
    spawn_body_with_color(world, x, y, w, h, kind, color)
}

pub(super) fn spawn_body_with_color(
    world: &mut WorldCore,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    kind: BodyKind,
    color: u32,
) -> u32 {
    world.bodies.add_body(kind, Rect::new(x, y, w, h), color)
}

pub(super) fn apply_impulse(world: &mut WorldCore, id: u32, vx: f32, vy: f32) -> bool {
    world.bodies.apply_impulse(id, Vec2::new(vx, vy))
}

pub(super) fn body_count(world: &WorldCore) -> usize {
    world.bodies.body_count()
}

pub(super) fn dynamic_body_count(world: &WorldCore) -> usize {
    world.bodies.dynamic_count()
}

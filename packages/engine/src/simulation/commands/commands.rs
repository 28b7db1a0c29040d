use crate::rigid_body::{Rect, Vec2};

use super::WorldCore;

pub(super) fn pointer_down(world: &mut WorldCore, x: f32, y: f32) -> u32 {
    let spawn = &world.config.spawn;
    if !spawn.enabled {
        return 0;
    }

    let kind = spawn.kind;
    let size = spawn.size;
    let color = world.config.color_for(kind);
    world
        .bodies
        .add_body(kind, Rect::from_position_size(Vec2::new(x, y), size), color)
}

pub(super) fn clear(world: &mut WorldCore) {
    let removed = world.bodies.body_count();
    world.bodies.clear();
    world.render.rects.clear();
    world.render.colors.clear();
    world.frame = 0;
    engine_log!("world cleared ({} bodies removed)", removed);
}

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::rigid_body::{Body, BodyKind, Rect};

use super::{PerfTimer, WorldCore};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BodySnapshot {
    id: u32,
    kind: BodyKind,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: u32,
    vx: f32,
    vy: f32,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        let rect = body.rect();
        let velocity = body.velocity();
        Self {
            id: body.id(),
            kind: body.kind(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            color: body.color(),
            vx: velocity.x,
            vy: velocity.y,
        }
    }
}

#[inline]
fn quad(body: &Body) -> [f32; 4] {
    let r = body.rect();
    [r.x, r.y, r.width, r.height]
}

pub(super) fn for_each_body<F: FnMut(&Rect, u32)>(world: &WorldCore, mut f: F) {
    for body in world.bodies.iter() {
        f(body.rect(), body.color());
    }
}

/// Pack rects and colors for the host, preserving registry order
pub(super) fn extract_render(world: &mut WorldCore) -> usize {
    let timer = if world.perf_enabled { Some(PerfTimer::start()) } else { None };
    let bodies = world.bodies.bodies();

    // Order-preserving map; the buffers must match registry order.
    #[cfg(feature = "parallel")]
    let quads: Vec<[f32; 4]> = bodies.par_iter().map(quad).collect();
    #[cfg(not(feature = "parallel"))]
    let quads: Vec<[f32; 4]> = bodies.iter().map(quad).collect();

    world.render.rects.clear();
    for q in quads.iter() {
        world.render.rects.extend_from_slice(q);
    }

    world.render.colors.clear();
    world.render.colors.extend(bodies.iter().map(Body::color));

    if let Some(t0) = timer {
        world.perf_stats.extract_ms = t0.elapsed_ms();
    }

    bodies.len()
}

pub(super) fn snapshot_json(world: &WorldCore) -> String {
    let out: Vec<BodySnapshot> = world.bodies.iter().map(BodySnapshot::from).collect();
    serde_json::to_string(&out).unwrap_or_else(|_| "[]".to_string())
}

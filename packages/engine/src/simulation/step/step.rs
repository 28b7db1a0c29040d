use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        // Snapshot pre-step counts
        world.perf_stats.body_count = world.bodies.body_count() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Sequential: every body resolves against positions earlier bodies
    // already reached this frame.
    let counters = world.bodies.update(&world.config);

    if let Some(t0) = step_start {
        world.perf_stats.step_ms = t0.elapsed_ms();
        world.perf_stats.record_counters(&counters);
        world.perf_stats.frame = world.frame;
    }

    world.frame += 1;
}

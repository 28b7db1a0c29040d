use crate::config::SimConfig;
use crate::rigid_body_system::RigidBodySystem;

use super::perf_stats::PerfStats;
use super::RenderBuffers;
use super::WorldCore;

/// Initial capacity of the render buffers, in bodies
const RENDER_CAPACITY: usize = 256;

pub(super) fn create_world_core(config: SimConfig) -> WorldCore {
    WorldCore {
        config,
        bodies: RigidBodySystem::new(),
        frame: 0,

        render: RenderBuffers {
            rects: Vec::with_capacity(RENDER_CAPACITY * 4),
            colors: Vec::with_capacity(RENDER_CAPACITY),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

//! RigidBodySystem - ordered registry of boxes and the per-step update
//!
//! This is intentionally approximate (no contact manifolds, no impulses).
//! Each step, for every dynamic body in registry order:
//! - integrate vertical velocity from gravity (fixed increment, clamped)
//! - advance along X, then push out of every overlapping neighbour
//! - advance along Y, then push out of every overlapping neighbour
//!
//! Only a small fraction of each penetration estimate is corrected per step,
//! so bodies separate softly over several frames. Results depend on registry
//! order and must stay sequential.

mod collision;
mod integrate;
mod system;

pub use collision::{depth_candidates, get_depth, select_shallowest, x_depth, y_depth};
pub use integrate::{clamp_speed, integrate_velocity};
pub use system::{RigidBodySystem, StepCounters};

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

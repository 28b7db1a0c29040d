use crate::config::SimConfig;
use crate::rigid_body::RigidBody;

/// Add one gravity increment to the vertical velocity and clamp it.
///
/// Horizontal velocity is left alone; it only changes through collisions
/// and impulses.
pub fn integrate_velocity(body: &mut RigidBody, config: &SimConfig) {
    body.velocity.y += config.gravity_increment();
    body.velocity.y = clamp_speed(body.velocity.y, config.max_fall_speed);
}

/// Clamp `v` to `[-limit, limit]`.
///
/// Total over any `limit` (a negative limit yields `-limit` or `limit`
/// instead of panicking like `f32::clamp`).
#[inline]
pub fn clamp_speed(v: f32, limit: f32) -> f32 {
    if v < -limit {
        -limit
    } else if v > limit {
        limit
    } else {
        v
    }
}

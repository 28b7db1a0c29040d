use crate::config::SimConfig;
use crate::rigid_body::{Axis, Body, Rect, RigidBody};

/// Counters from one axis pass
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct AxisPass {
    pub tests: u32,
    pub corrections: u32,
}

/// The four signed penetration candidates of `r1` against `r2` along `axis`.
pub fn depth_candidates(r1: &Rect, r2: &Rect, axis: Axis) -> [f32; 4] {
    let min1 = r1.min_on(axis);
    let size1 = r1.extent_on(axis);
    let min2 = r2.min_on(axis);
    let size2 = r2.extent_on(axis);

    [
        min1 - min2,
        min1 - min2 + size2,
        min1 + size1 - min2,
        min1 + size1 - min2 + size2,
    ]
}

/// Candidate with the smallest magnitude.
///
/// Starts from +inf and only replaces on a strictly smaller magnitude: the
/// earliest candidate wins ties and NaN candidates are skipped.
pub fn select_shallowest(candidates: &[f32]) -> f32 {
    candidates.iter().fold(f32::INFINITY, |best, &d| {
        if d.abs() < best.abs() {
            d
        } else {
            best
        }
    })
}

/// Scaled penetration estimate of `r1` against `r2` along `axis`.
pub fn get_depth(r1: &Rect, r2: &Rect, axis: Axis, resolution_scale: f32) -> f32 {
    select_shallowest(&depth_candidates(r1, r2, axis)) * resolution_scale
}

#[inline]
pub fn x_depth(r1: &Rect, r2: &Rect, resolution_scale: f32) -> f32 {
    get_depth(r1, r2, Axis::X, resolution_scale)
}

#[inline]
pub fn y_depth(r1: &Rect, r2: &Rect, resolution_scale: f32) -> f32 {
    get_depth(r1, r2, Axis::Y, resolution_scale)
}

/// Advance `body` along `axis` and push it out of every overlapping body.
///
/// `index` is the body's own registry slot and is skipped. Corrections
/// accumulate: each neighbour is tested against the already corrected rect,
/// and every hit flips and damps the axis velocity again.
pub(super) fn resolve_axis(
    body: &mut RigidBody,
    index: usize,
    bodies: &[Body],
    axis: Axis,
    config: &SimConfig,
) -> AxisPass {
    let mut pass = AxisPass::default();
    let step = body.velocity.on(axis);
    body.collider.rect.translate(axis, step);

    for (j, other) in bodies.iter().enumerate() {
        if j == index {
            continue;
        }
        pass.tests += 1;

        let other_rect = other.rect();
        if !body.collider.rect.overlaps(other_rect) {
            continue;
        }

        let depth = match axis {
            Axis::X => x_depth(&body.collider.rect, other_rect, config.resolution_scale),
            // Y measures the neighbour against the body (operands swapped vs X).
            Axis::Y => y_depth(other_rect, &body.collider.rect, config.resolution_scale),
        };

        body.collider.rect.translate(axis, -depth);
        *body.velocity.on_mut(axis) *= -config.bounciness;
        pass.corrections += 1;
    }

    pass
}

use crate::config::SimConfig;
use crate::rigid_body::{Axis, Body, BodyKind, Rect, Vec2};

use super::collision::resolve_axis;
use super::integrate::integrate_velocity;

/// Manages all bodies in the simulation, in spawn order
pub struct RigidBodySystem {
    bodies: Vec<Body>,
    next_id: u32,
}

/// What happened during one `update`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounters {
    pub dynamic_bodies: u32,
    pub overlap_tests: u32,
    pub x_corrections: u32,
    pub y_corrections: u32,
}

impl RigidBodySystem {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a body and return its ID.
    ///
    /// Never fails; sizes are taken as given.
    pub fn add_body(&mut self, kind: BodyKind, rect: Rect, color: u32) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.bodies.push(Body::new(id, kind, rect, color));
        id
    }

    /// Remove all bodies (used by WorldCore::clear()).
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.next_id = 1;
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn dynamic_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.as_rigid().is_some()).count()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn get(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    /// Add `impulse` to a dynamic body's velocity.
    ///
    /// Returns false for unknown IDs and static bodies.
    pub fn apply_impulse(&mut self, id: u32, impulse: Vec2) -> bool {
        match self
            .bodies
            .iter_mut()
            .find(|b| b.id() == id)
            .and_then(Body::as_rigid_mut)
        {
            Some(body) => {
                body.apply_impulse(impulse);
                true
            }
            None => false,
        }
    }

    /// Advance every dynamic body by one step, in registry order.
    ///
    /// Later bodies see the already-moved positions of earlier ones.
    pub fn update(&mut self, config: &SimConfig) -> StepCounters {
        let mut counters = StepCounters::default();

        for i in 0..self.bodies.len() {
            let Body::Dynamic(current) = &self.bodies[i] else {
                continue;
            };
            let mut body = *current;
            counters.dynamic_bodies += 1;

            integrate_velocity(&mut body, config);

            let x = resolve_axis(&mut body, i, &self.bodies, Axis::X, config);
            let y = resolve_axis(&mut body, i, &self.bodies, Axis::Y, config);

            counters.overlap_tests += x.tests + y.tests;
            counters.x_corrections += x.corrections;
            counters.y_corrections += y.corrections;

            self.bodies[i] = Body::Dynamic(body);
        }

        counters
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new()
    }
}

//! Rigid body primitives
//!
//! Every body is an axis-aligned rectangle with a display color. Static
//! colliders never move; dynamic bodies additionally carry a velocity and are
//! advanced by the rigid body system each step.

mod vec2;
mod rect;
mod body;

pub use vec2::Vec2;
pub use rect::{Axis, Rect};
pub use body::{Body, BodyKind, Collider, RigidBody, COLOR_WHITE};

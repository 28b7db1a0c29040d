use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::vec2::Vec2;

/// Packed ABGR white, the default body color
pub const COLOR_WHITE: u32 = 0xFFFF_FFFF;

/// Which kind of body a spawn request creates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyKind {
    /// Passive collider, never moved by the simulation
    #[serde(alias = "staticGUI")]
    Static,
    /// Falls under gravity and resolves against everything else
    #[default]
    #[serde(alias = "rigidbody")]
    Dynamic,
}

impl BodyKind {
    pub fn as_u8(self) -> u8 {
        match self {
            BodyKind::Static => 0,
            BodyKind::Dynamic => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BodyKind::Static => "static",
            BodyKind::Dynamic => "dynamic",
        }
    }
}

impl TryFrom<u8> for BodyKind {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(BodyKind::Static),
            1 => Ok(BodyKind::Dynamic),
            _ => Err(format!("unknown body kind code: {}", code)),
        }
    }
}

impl FromStr for BodyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" | "staticGUI" => Ok(BodyKind::Static),
            "dynamic" | "rigidbody" => Ok(BodyKind::Dynamic),
            _ => Err(format!("unknown body kind: {}", s)),
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static collider: a rectangle with a color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collider {
    /// Registry-assigned ID (never 0)
    pub id: u32,
    pub rect: Rect,
    /// Packed ABGR color for the host renderer
    pub color: u32,
}

impl Collider {
    pub fn new(id: u32, rect: Rect, color: u32) -> Self {
        Self { id, rect, color }
    }
}

/// Rigid Body - a collider that moves
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigidBody {
    pub collider: Collider,
    /// Velocity vector (pixels per step)
    pub velocity: Vec2,
}

impl RigidBody {
    /// New body at rest
    pub fn new(collider: Collider) -> Self {
        Self {
            collider,
            velocity: Vec2::zero(),
        }
    }

    /// Apply impulse at center of mass (unit mass)
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse;
    }
}

/// Entry of the body registry
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Static(Collider),
    Dynamic(RigidBody),
}

impl Body {
    pub fn new(id: u32, kind: BodyKind, rect: Rect, color: u32) -> Self {
        let collider = Collider::new(id, rect, color);
        match kind {
            BodyKind::Static => Body::Static(collider),
            BodyKind::Dynamic => Body::Dynamic(RigidBody::new(collider)),
        }
    }

    #[inline]
    pub fn collider(&self) -> &Collider {
        match self {
            Body::Static(c) => c,
            Body::Dynamic(b) => &b.collider,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.collider().id
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.collider().rect
    }

    #[inline]
    pub fn color(&self) -> u32 {
        self.collider().color
    }

    pub fn kind(&self) -> BodyKind {
        match self {
            Body::Static(_) => BodyKind::Static,
            Body::Dynamic(_) => BodyKind::Dynamic,
        }
    }

    /// Velocity of a dynamic body, zero for static colliders
    pub fn velocity(&self) -> Vec2 {
        match self {
            Body::Static(_) => Vec2::zero(),
            Body::Dynamic(b) => b.velocity,
        }
    }

    pub fn as_rigid(&self) -> Option<&RigidBody> {
        match self {
            Body::Dynamic(b) => Some(b),
            Body::Static(_) => None,
        }
    }

    pub fn as_rigid_mut(&mut self) -> Option<&mut RigidBody> {
        match self {
            Body::Dynamic(b) => Some(b),
            Body::Static(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes_and_names_parse() {
        assert_eq!(BodyKind::try_from(0u8), Ok(BodyKind::Static));
        assert_eq!(BodyKind::try_from(1u8), Ok(BodyKind::Dynamic));
        assert!(BodyKind::try_from(2u8).is_err());

        assert_eq!("staticGUI".parse::<BodyKind>(), Ok(BodyKind::Static));
        assert_eq!("rigidbody".parse::<BodyKind>(), Ok(BodyKind::Dynamic));
        assert!("ghost".parse::<BodyKind>().is_err());

        for kind in [BodyKind::Static, BodyKind::Dynamic] {
            assert_eq!(BodyKind::try_from(kind.as_u8()), Ok(kind));
            assert_eq!(kind.to_string().parse::<BodyKind>(), Ok(kind));
        }
    }

    #[test]
    fn static_bodies_report_zero_velocity() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let wall = Body::new(1, BodyKind::Static, rect, COLOR_WHITE);
        let mut ball = Body::new(2, BodyKind::Dynamic, rect, COLOR_WHITE);

        assert_eq!(wall.velocity(), Vec2::zero());
        assert!(wall.as_rigid().is_none());

        ball.as_rigid_mut().unwrap().apply_impulse(Vec2::new(0.5, 0.0));
        ball.as_rigid_mut().unwrap().apply_impulse(Vec2::new(0.25, 1.0));
        assert_eq!(ball.velocity(), Vec2::new(0.75, 1.0));
        assert_eq!(*ball.rect(), rect);
        assert_eq!(ball.id(), 2);
    }
}

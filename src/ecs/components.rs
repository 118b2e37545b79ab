use glam::Vec3;

use crate::defs::{MobjFlags, MobjKind, StateId};
use crate::ecs::systems::behavior::chase::Compass;
use crate::level::SectorId;
use crate::publish::Published;

/// Map-space position; z is the feet.
#[derive(Debug, Clone, Copy)]
pub struct Position(pub Vec3);

/// Units per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Velocity(pub Vec3);

/// Facing angle in radians, 0 = east, counter-clockwise.
#[derive(Debug, Clone, Copy)]
pub struct Facing(pub f32);

/// Type id; the template is looked up in `Defs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kind(pub MobjKind);

#[derive(Debug, Clone, Copy)]
pub struct Health(pub i32);

/// Per-entity flag set, seeded from the type and mutated in play.
#[derive(Debug, Clone, Copy)]
pub struct Flags(pub MobjFlags);

/// Collision cylinder. Height shrinks on death.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub radius: f32,
    pub height: f32,
}

/// Back-reference to the sector the origin is in. Not ownership.
#[derive(Debug, Clone, Copy)]
pub struct SectorRef(pub SectorId);

/// Animation state machine position.
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    pub state: StateId,
    /// Ticks left in `state`. Negative = frozen.
    pub tics: i32,
}

/// AI scratch fields. Entity references are weak: always re-check liveness.
#[derive(Debug, Clone, Copy)]
pub struct Brain {
    pub target: Option<hecs::Entity>,
    /// Homing projectile's quarry.
    pub tracer: Option<hecs::Entity>,
    pub reaction_time: i32,
    pub move_dir: Compass,
    /// Steps left before re-evaluating direction. Doubles as missile cooldown.
    pub move_count: i32,
    /// Ticks left in which the current target is kept even if unseen.
    pub threshold: i32,
}

impl Brain {
    pub fn new(reaction_time: i32) -> Self {
        Self {
            target: None,
            tracer: None,
            reaction_time,
            move_dir: Compass::None,
            move_count: 0,
            threshold: 0,
        }
    }
}

/// Sprite selection published to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub name: &'static str,
    pub frame: u16,
    pub fullbright: bool,
}

/// Values the presentation side reads between ticks.
#[derive(Debug)]
pub struct Presentation {
    pub position: Published<Vec3>,
    pub facing: Published<f32>,
    pub sprite: Published<Option<Sprite>>,
}

impl Presentation {
    pub fn new(position: Vec3, facing: f32) -> Self {
        Self {
            position: Published::new(position),
            facing: Published::new(facing),
            sprite: Published::new(None),
        }
    }
}

/// Reached the terminal state or was despawned; inert until flushed.
#[derive(Debug, Clone, Copy)]
pub struct Removed;

//! Pathless pursuit: pick one of eight headings toward the target, walk it
//! until blocked or the move counter runs out, then pick again.

use glam::Vec3;
use hecs::Entity;

use crate::config::GameMode;
use crate::defs::{MobjFlags, StateId};
use crate::ecs::components::{Brain, Facing};
use crate::ecs::systems::{animation, movement};
use crate::math::{heading, normalize_angle, rand_int, roll, wrap_angle, EIGHTH_PI, QUARTER_PI};
use crate::sim::Sim;

use super::{can_melee, can_shoot, find_player_target};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compass {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
    None,
}

impl Compass {
    /// Counter-clockwise from east; also the fallback scan order.
    pub const ALL: [Compass; 8] = [
        Compass::East,
        Compass::NorthEast,
        Compass::North,
        Compass::NorthWest,
        Compass::West,
        Compass::SouthWest,
        Compass::South,
        Compass::SouthEast,
    ];

    pub fn opposite(self) -> Compass {
        match self {
            Compass::East => Compass::West,
            Compass::NorthEast => Compass::SouthWest,
            Compass::North => Compass::South,
            Compass::NorthWest => Compass::SouthEast,
            Compass::West => Compass::East,
            Compass::SouthWest => Compass::NorthEast,
            Compass::South => Compass::North,
            Compass::SouthEast => Compass::NorthWest,
            Compass::None => Compass::None,
        }
    }

    pub fn angle(self) -> Option<f32> {
        Compass::ALL
            .iter()
            .position(|&d| d == self)
            .map(|i| i as f32 * QUARTER_PI)
    }

    fn diagonal(x: Compass, y: Compass) -> Compass {
        match (x, y) {
            (Compass::East, Compass::North) => Compass::NorthEast,
            (Compass::West, Compass::North) => Compass::NorthWest,
            (Compass::West, Compass::South) => Compass::SouthWest,
            (Compass::East, Compass::South) => Compass::SouthEast,
            _ => Compass::None,
        }
    }
}

/// Displacement inside this band counts as lined up on that axis.
const DEAD_ZONE: f32 = 10.0;
/// Rolls above this swap the axis order even when x dominates (22% of the time).
const AXIS_SWAP_ROLL: i32 = 200;
/// Accepted headings are kept for 0..=this many steps.
const MAX_MOVE_COUNT: i32 = 15;
/// Per-step chance out of 256 of an idle sound.
const ACTIVE_SOUND_ROLL: i32 = 3;

/// One step along `dir` at the entity's speed is clear.
pub fn can_move(sim: &Sim, entity: Entity, dir: Compass) -> bool {
    let Some(angle) = dir.angle() else {
        return false;
    };
    let (Some(pos), Some(kind)) = (sim.pos(entity), sim.kind(entity)) else {
        return false;
    };
    let speed = sim.defs.info(kind).speed;
    !movement::move_blocked(sim, entity, pos, heading(angle) * speed)
}

pub fn set_movement(sim: &mut Sim, entity: Entity, dir: Compass) {
    let count = rand_int(&mut sim.rng, 0, MAX_MOVE_COUNT);
    sim.write(entity, |b: &mut Brain| {
        b.move_dir = dir;
        b.move_count = count;
    });
}

fn try_direction(sim: &mut Sim, entity: Entity, dir: Compass) -> bool {
    if dir == Compass::None || !can_move(sim, entity, dir) {
        return false;
    }
    set_movement(sim, entity, dir);
    true
}

/// Pick a new heading toward the current target.
///
/// Preference: the diagonal, then each axis (dominant first, sometimes
/// swapped), then the old heading, then a scan of all eight in a random
/// rotational order, then straight back. The reverse of the old heading is
/// only taken once everything else is blocked.
pub fn new_chase_dir(sim: &mut Sim, entity: Entity) {
    let (Some(brain), Some(pos)) = (sim.brain(entity), sim.pos(entity)) else {
        return;
    };
    let Some(goal) = sim.target(entity).and_then(|t| sim.pos(t)) else {
        sim.write(entity, |b: &mut Brain| b.move_dir = Compass::None);
        return;
    };
    let old = brain.move_dir;
    let turnaround = old.opposite();
    let d = goal - pos;

    let x = if d.x > DEAD_ZONE {
        Compass::East
    } else if d.x < -DEAD_ZONE {
        Compass::West
    } else {
        Compass::None
    };
    let y = if d.y > DEAD_ZONE {
        Compass::North
    } else if d.y < -DEAD_ZONE {
        Compass::South
    } else {
        Compass::None
    };

    if x != Compass::None && y != Compass::None {
        let diagonal = Compass::diagonal(x, y);
        if diagonal != turnaround && try_direction(sim, entity, diagonal) {
            return;
        }
    }

    let (mut first, mut second) = (x, y);
    if roll(&mut sim.rng) > AXIS_SWAP_ROLL || d.y.abs() > d.x.abs() {
        std::mem::swap(&mut first, &mut second);
    }
    for dir in [first, second] {
        if dir != turnaround && try_direction(sim, entity, dir) {
            return;
        }
    }

    if try_direction(sim, entity, old) {
        return;
    }

    let forward = roll(&mut sim.rng) & 1 == 1;
    let mut order = Compass::ALL;
    if !forward {
        order.reverse();
    }
    for dir in order {
        if dir != turnaround && try_direction(sim, entity, dir) {
            return;
        }
    }

    if try_direction(sim, entity, turnaround) {
        return;
    }
    sim.write(entity, |b: &mut Brain| b.move_dir = Compass::None);
}

/// Take one step along the current heading if it is clear.
fn walk(sim: &mut Sim, entity: Entity) -> bool {
    let Some(dir) = sim.brain(entity).map(|b| b.move_dir) else {
        return false;
    };
    let (Some(angle), Some(pos), Some(kind)) = (dir.angle(), sim.pos(entity), sim.kind(entity)) else {
        return false;
    };
    if !can_move(sim, entity, dir) {
        return false;
    }
    let step = heading(angle) * sim.defs.info(kind).speed;
    sim.set_position(entity, pos + Vec3::new(step.x, step.y, 0.0));
    true
}

/// Turn toward the move heading a quarter turn at a time. Within an
/// eighth of the heading the facing is left alone.
fn turn_toward_heading(sim: &mut Sim, entity: Entity, dir: Compass) {
    let (Some(goal), Some(facing)) = (dir.angle(), sim.facing(entity)) else {
        return;
    };
    let error = wrap_angle(goal - facing);
    if error.abs() > EIGHTH_PI {
        let facing = normalize_angle(facing + QUARTER_PI.copysign(error));
        sim.write(entity, |f: &mut Facing| f.0 = facing);
    }
}

/// The per-step pursuit behavior.
pub fn chase(sim: &mut Sim, entity: Entity) {
    let (Some(kind), Some(brain), Some(flags)) = (sim.kind(entity), sim.brain(entity), sim.flags(entity)) else {
        return;
    };
    if sim.pos(entity).is_none() {
        return;
    }
    let info = *sim.defs.info(kind);
    let fast = sim.fast_monsters();

    let target_alive = sim.target(entity).is_some_and(|t| sim.is_alive(t));
    sim.write(entity, |b: &mut Brain| {
        if b.reaction_time > 0 {
            b.reaction_time -= 1;
        }
        if b.threshold > 0 {
            b.threshold = if target_alive { b.threshold - 1 } else { 0 };
        }
    });
    turn_toward_heading(sim, entity, brain.move_dir);

    let target = sim
        .target(entity)
        .filter(|&t| sim.flags(t).is_some_and(|f| f.contains(MobjFlags::SHOOTABLE)));
    let Some(target) = target else {
        if !find_player_target(sim, entity, true) {
            animation::set_state(sim, entity, info.spawn_state);
        }
        return;
    };

    if flags.contains(MobjFlags::JUSTATTACKED) {
        sim.set_flags(entity, MobjFlags::empty(), MobjFlags::JUSTATTACKED);
        if !fast {
            new_chase_dir(sim, entity);
        }
        return;
    }

    if info.melee_state != StateId::Null && can_melee(sim, entity, target) {
        sim.play(info.attack_sound, Some(entity));
        animation::set_state(sim, entity, info.melee_state);
        return;
    }

    if info.missile_state != StateId::Null
        && (fast || brain.move_count == 0)
        && can_shoot(sim, entity, target)
    {
        animation::set_state(sim, entity, info.missile_state);
        sim.set_flags(entity, MobjFlags::JUSTATTACKED, MobjFlags::empty());
        return;
    }

    // Out of sight with no grudge left: let go and look again. An empty
    // target sends the next step back to the spawn state.
    let threshold = sim.brain(entity).map_or(0, |b| b.threshold);
    if sim.config.mode != GameMode::Solo && threshold == 0 && !sim.sight(entity, target) {
        sim.write(entity, |b: &mut Brain| b.target = None);
        find_player_target(sim, entity, true);
        return;
    }

    let mut exhausted = false;
    sim.write(entity, |b: &mut Brain| {
        b.move_count -= 1;
        exhausted = b.move_count < 0;
    });
    let dir = sim.brain(entity).map_or(Compass::None, |b| b.move_dir);
    if exhausted || !can_move(sim, entity, dir) {
        new_chase_dir(sim, entity);
    }
    walk(sim, entity);

    if info.active_sound != crate::defs::Sound::None && roll(&mut sim.rng) < ACTIVE_SOUND_ROLL {
        sim.play(info.active_sound, Some(entity));
    }
}

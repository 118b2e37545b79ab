//! Player intents, evaluated once per scheduler advance at whatever rate
//! frames arrive. Capture happens elsewhere; this only consumes the result.

use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};
use hecs::Entity;

use crate::defs::MobjFlags;
use crate::ecs::components::{Facing, Velocity};
use crate::ecs::systems::movement::{self, MoveOutcome, FRICTION};
use crate::hooks::{Activation, Side, SpecialLine};
use crate::math::{heading, normalize_angle};
use crate::scheduler::TICK_SECONDS;
use crate::sim::Sim;
use crate::spatial::trace;

/// Per-tick speeds, scaled by `delta^2 / tick` at evaluation.
const RUN_SPEED: f32 = 50.0;
const WALK_SPEED: f32 = 25.0;
const CRAWL_SPEED: f32 = 5.0;
/// Downward pull on an airborne player, same scaling as the speeds.
const PLAYER_GRAVITY: f32 = 35.0;
/// Vertical velocity kept per evaluation while free-flying.
const FREE_FLY_Z_FRICTION: f32 = 0.96;
/// Radians per pointer unit at pointer speed 1.
const MOUSE_SENSITIVITY: f32 = 0.002;
/// Reach of the "use" ray.
const USE_RANGE: f32 = 64.0;

/// What the player wants this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub run: bool,
    pub slow: bool,
    pub activate: bool,
    /// Pointer motion since the last evaluation; consumed by it.
    pub mouse: Vec2,
}

#[derive(Debug)]
pub struct InputState {
    pub intent: PlayerIntent,
    /// Without freelook the pitch is pinned level.
    pub freelook: bool,
    pub noclip: bool,
    pub free_fly: bool,
    pub pointer_speed: f32,
    /// Look pitch in radians, positive up.
    pub pitch: f32,
    /// One activation per button press.
    handled_use: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            intent: PlayerIntent::default(),
            freelook: true,
            noclip: false,
            free_fly: false,
            pointer_speed: 1.0,
            pitch: 0.0,
            handled_use: false,
        }
    }
}

impl InputState {
    /// Apply the current intent to the tracked player over `delta` seconds
    /// of real time. No player, no effect.
    pub fn evaluate(&mut self, sim: &mut Sim, delta: f64) {
        let mouse = std::mem::take(&mut self.intent.mouse);
        let Some(player) = sim.player() else {
            return;
        };
        let (Some(pos), Some(facing), Some(vel)) =
            (sim.pos(player), sim.facing(player), sim.read::<Velocity>(player))
        else {
            return;
        };

        let turn = MOUSE_SENSITIVITY * self.pointer_speed;
        let facing = normalize_angle(facing - mouse.x * turn);
        let limit = if self.freelook { FRAC_PI_2 } else { 0.0 };
        self.pitch = (self.pitch - mouse.y * turn).clamp(-limit, limit);
        sim.write(player, |f: &mut Facing| f.0 = facing);

        let intent = self.intent;
        let dir = Vec2::new(
            f32::from(u8::from(intent.right)) - f32::from(u8::from(intent.left)),
            f32::from(u8::from(intent.forward)) - f32::from(u8::from(intent.backward)),
        )
        .normalize_or_zero();
        let dt = (delta * delta / TICK_SECONDS) as f32;
        let speed = if intent.slow {
            CRAWL_SPEED
        } else if intent.run {
            RUN_SPEED
        } else {
            WALK_SPEED
        };

        let (floor, ceiling) = sim.floor_ceiling(player).unwrap_or((pos.z, f32::MAX));
        let on_ground = pos.z <= floor;
        let mut vel = vel.0;
        if on_ground || self.free_fly {
            if intent.forward || intent.backward {
                vel += self.forward_vec(facing) * (dir.y * speed * dt);
            }
            if intent.left || intent.right {
                vel += heading(facing - FRAC_PI_2).extend(0.0) * (dir.x * speed * dt);
            }
            if self.free_fly {
                vel.z *= FREE_FLY_Z_FRICTION;
            }
        } else {
            vel.z -= PLAYER_GRAVITY * dt;
        }

        let (add, clear) = if self.noclip {
            (MobjFlags::NOCLIP, MobjFlags::empty())
        } else {
            (MobjFlags::empty(), MobjFlags::NOCLIP)
        };
        sim.set_flags(player, add, clear);

        vel = match movement::advance(sim, player, Vec3::new(vel.x, vel.y, 0.0)) {
            MoveOutcome::Moved(v) => Vec3::new(v.x, v.y, vel.z),
            MoveOutcome::Blocked(_) => Vec3::new(0.0, 0.0, vel.z),
        };
        let moved = sim.pos(player).unwrap_or(pos);
        self.walk_triggers(sim, player, pos.truncate(), moved.truncate());

        let mut z = moved.z + vel.z;
        if !self.noclip {
            let height = sim.body(player).map_or(0.0, |b| b.height);
            if z + height > ceiling {
                z = ceiling - height;
                vel.z = vel.z.min(0.0);
            }
            if z < floor {
                z = floor;
                vel.z = vel.z.max(0.0);
            }
        }
        if z != moved.z {
            sim.set_position(player, Vec3::new(moved.x, moved.y, z));
        }
        if on_ground && !self.free_fly {
            let keep = FRICTION.powf((delta / TICK_SECONDS) as f32);
            vel = (vel.truncate() * keep).extend(vel.z);
        }
        sim.write(player, |v: &mut Velocity| v.0 = vel);

        if intent.activate && !self.handled_use {
            use_lines(sim, player);
        }
        self.handled_use = intent.activate;
    }

    fn forward_vec(&self, facing: f32) -> Vec3 {
        let h = heading(facing);
        if self.free_fly {
            let (sin, cos) = self.pitch.sin_cos();
            Vec3::new(h.x * cos, h.y * cos, sin)
        } else {
            h.extend(0.0)
        }
    }

    /// Walk-over specials on every line the player's origin crossed.
    fn walk_triggers(&self, sim: &mut Sim, player: Entity, from: Vec2, to: Vec2) {
        if from == to {
            return;
        }
        let mut crossed: Vec<(f32, SpecialLine, Side)> = sim
            .level
            .blockmap
            .lines_in_box(from.min(to), from.max(to))
            .into_iter()
            .filter_map(|id| {
                let line = &sim.level.lines[id];
                if line.special == 0 {
                    return None;
                }
                let (frac, from_front) = trace::segment_crossing(line, from, to)?;
                let side = if from_front { Side::Front } else { Side::Back };
                Some((frac, special_line(sim, id), side))
            })
            .collect();
        crossed.sort_by(|a, b| a.0.total_cmp(&b.0));
        for (_, line, side) in crossed {
            sim.trigger(Some(player), line, Activation::Walk, side);
        }
    }
}

fn special_line(sim: &Sim, id: usize) -> SpecialLine {
    let line = &sim.level.lines[id];
    SpecialLine {
        line: Some(id),
        special: line.special,
        tag: line.tag,
    }
}

/// Press "use": the nearest special line in reach, facing us, gets activated.
/// Walls are never used from behind and solid walls stop the reach.
fn use_lines(sim: &mut Sim, player: Entity) {
    let (Some(pos), Some(facing)) = (sim.pos(player), sim.facing(player)) else {
        return;
    };
    let from = pos.truncate();
    let to = from + heading(facing) * USE_RANGE;
    let mut hits: Vec<(f32, usize)> = sim
        .level
        .blockmap
        .lines_in_box(from.min(to), from.max(to))
        .into_iter()
        .filter_map(|id| {
            let (frac, from_front) = trace::segment_crossing(&sim.level.lines[id], from, to)?;
            from_front.then_some((frac, id))
        })
        .collect();
    hits.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (_, id) in hits {
        let line = &sim.level.lines[id];
        if line.special != 0 {
            let special = special_line(sim, id);
            log::debug!("{:?} uses line {} (special {})", player, id, special.special);
            sim.trigger(Some(player), special, Activation::Use, Side::Front);
            return;
        }
        if !line.two_sided() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    use crate::config::SimConfig;
    use crate::defs::MobjKind;
    use crate::fixtures;
    use crate::level::LineFlags;

    fn walker(sim: &mut Sim, x: f32, y: f32, facing: f32) -> Entity {
        let player = sim.spawn_on_floor(MobjKind::Player, x, y);
        sim.write(player, |f: &mut Facing| f.0 = facing);
        player
    }

    #[test]
    fn forward_follows_facing() {
        let mut sim = fixtures::room_sim();
        let player = walker(&mut sim, 300.0, 300.0, FRAC_PI_2);
        let mut input = InputState::default();
        input.intent.forward = true;
        input.evaluate(&mut sim, 0.1);
        let pos = sim.pos(player).unwrap();
        assert!(pos.y > 300.0);
        assert!((pos.x - 300.0).abs() < 1e-3);
    }

    #[test]
    fn mouse_turns_and_pitch_clamps() {
        let mut sim = fixtures::room_sim();
        let player = walker(&mut sim, 300.0, 300.0, 1.0);
        let mut input = InputState::default();
        input.intent.mouse = Vec2::new(100.0, -10_000.0);
        input.evaluate(&mut sim, 0.0);
        assert!((sim.facing(player).unwrap() - 0.8).abs() < 1e-5);
        assert_eq!(input.pitch, FRAC_PI_2);
        assert_eq!(input.intent.mouse, Vec2::ZERO);

        input.freelook = false;
        input.intent.mouse = Vec2::new(0.0, -50.0);
        input.evaluate(&mut sim, 0.0);
        assert_eq!(input.pitch, 0.0);
    }

    #[test]
    fn walls_stop_the_player() {
        let mut sim = fixtures::room_sim();
        let player = walker(&mut sim, 40.0, 300.0, PI);
        let mut input = InputState::default();
        input.intent.forward = true;
        input.intent.run = true;
        for _ in 0..5 {
            input.evaluate(&mut sim, 0.2);
        }
        let radius = sim.body(player).unwrap().radius;
        assert!(sim.pos(player).unwrap().x >= radius);
    }

    #[test]
    fn noclip_walks_through_walls() {
        let mut sim = fixtures::room_sim();
        let player = walker(&mut sim, 20.0, 300.0, PI);
        sim.write(player, |v: &mut Velocity| v.0 = Vec3::new(-30.0, 0.0, 0.0));
        let mut input = InputState {
            noclip: true,
            ..InputState::default()
        };
        input.evaluate(&mut sim, 0.0);
        assert_eq!(sim.pos(player).map(|p| p.x), Some(-10.0));
    }

    #[test]
    fn airborne_player_falls() {
        let mut sim = fixtures::room_sim();
        let player = sim.spawn(MobjKind::Player, Vec3::new(300.0, 300.0, 50.0));
        let mut input = InputState::default();
        input.evaluate(&mut sim, TICK_SECONDS);
        let vz = sim.read::<Velocity>(player).unwrap().0.z;
        assert!((vz + 1.0).abs() < 1e-4);
        assert!((sim.pos(player).unwrap().z - 49.0).abs() < 1e-4);
    }

    #[test]
    fn use_fires_once_per_press_and_only_from_the_front() {
        let mut level = fixtures::room();
        // x = 0 wall, facing into the room
        level.lines[0].special = 1;
        let sim = fixtures::sim_in(level, SimConfig::default());
        let (mut sim, _, specials) = fixtures::recording(sim);
        let player = walker(&mut sim, 40.0, 512.0, PI);
        let mut input = InputState::default();

        input.intent.activate = true;
        input.evaluate(&mut sim, 0.0);
        input.evaluate(&mut sim, 0.0);
        assert_eq!(specials.borrow().len(), 1);
        input.intent.activate = false;
        input.evaluate(&mut sim, 0.0);
        input.intent.activate = true;
        input.evaluate(&mut sim, 0.0);
        assert_eq!(specials.borrow().len(), 2);

        let (actor, line, activation, side) = specials.borrow()[0];
        assert_eq!(actor, Some(player));
        assert_eq!(line.line, Some(0));
        assert_eq!(activation, Activation::Use);
        assert_eq!(side, Side::Front);

        sim.write(player, |f: &mut Facing| f.0 = 0.0);
        input.intent.activate = false;
        input.evaluate(&mut sim, 0.0);
        input.intent.activate = true;
        input.evaluate(&mut sim, 0.0);
        assert_eq!(specials.borrow().len(), 2);
    }

    #[test]
    fn crossing_a_special_line_triggers_walk() {
        let mut level = fixtures::two_rooms(0.0, 128.0, LineFlags::empty());
        level.lines[6].special = 88;
        level.lines[6].tag = 3;
        let sim = fixtures::sim_in(level, SimConfig::default());
        let (mut sim, _, specials) = fixtures::recording(sim);
        let player = walker(&mut sim, 500.0, 256.0, 0.0);
        sim.write(player, |v: &mut Velocity| v.0 = Vec3::new(20.0, 0.0, 0.0));

        InputState::default().evaluate(&mut sim, 0.0);
        assert_eq!(sim.pos(player).map(|p| p.x), Some(520.0));
        let fired = specials.borrow();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].1, SpecialLine { line: Some(6), special: 88, tag: 3 });
        assert_eq!(fired[0].2, Activation::Walk);
        assert_eq!(fired[0].3, Side::Back);
    }
}

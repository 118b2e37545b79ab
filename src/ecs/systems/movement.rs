use glam::{Vec2, Vec3};
use hecs::Entity;

use crate::defs::{MobjFlags, MobjKind};
use crate::ecs::components::Velocity;
use crate::ecs::systems::{animation, combat};
use crate::level::{LineId, MAX_STEP};
use crate::sim::Sim;
use crate::spatial::trace::{self, Hit};

/// Horizontal velocity multiplier per tick for things on the ground.
pub const FRICTION: f32 = 0.90625;
/// Below this horizontal speed a sliding thing stops dead.
const STOP_SPEED: f32 = 1.0 / 16.0;
/// Units per tick squared.
pub const GRAVITY: f32 = 1.0;
/// Vertical drift of floaters toward their target, units per tick.
const FLOAT_SPEED: f32 = 4.0;
/// Slides tried per move before the move is abandoned for this tick.
const SLIDE_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocker {
    Thing(Entity),
    Line(LineId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// Carries the velocity left after any slides.
    Moved(Vec3),
    Blocked(Blocker),
}

/// The fields that decide what blocks a mover, copied out once per move.
#[derive(Debug, Clone, Copy)]
pub struct Mover {
    pub entity: Entity,
    pub pos: Vec3,
    pub radius: f32,
    pub height: f32,
    pub flags: MobjFlags,
    pub kind: MobjKind,
    /// Missiles pass through whoever fired them.
    pub shooter: Option<Entity>,
}

impl Mover {
    pub fn of(sim: &Sim, entity: Entity) -> Option<Self> {
        let body = sim.body(entity)?;
        Some(Self {
            entity,
            pos: sim.pos(entity)?,
            radius: body.radius,
            height: body.height,
            flags: sim.flags(entity)?,
            kind: sim.kind(entity)?,
            shooter: sim.brain(entity).and_then(|b| b.target),
        })
    }
}

// ---------------------------------------------------------------------------
// Blocking rules
// ---------------------------------------------------------------------------

fn thing_blocks(sim: &Sim, mover: &Mover, other: Entity) -> bool {
    if other == mover.entity || !sim.is_live(other) {
        return false;
    }
    let (Some(flags), Some(pos), Some(body)) = (sim.flags(other), sim.pos(other), sim.body(other)) else {
        return false;
    };
    if !flags.intersects(MobjFlags::HITTABLE) || flags.contains(MobjFlags::SPECIAL) {
        return false;
    }
    // passed under or over
    if mover.pos.z + mover.height < pos.z || mover.pos.z > pos.z + body.height {
        return false;
    }
    !(mover.flags.contains(MobjFlags::MISSILE) && mover.shooter == Some(other))
}

/// A two-sided line is passable only when the far sector has room for the
/// mover: step up, head room, sector gap and drop-off all within limits.
fn line_blocks(sim: &Sim, mover: &Mover, line: LineId, from_front: bool) -> bool {
    let line = &sim.level.lines[line];
    let Some(end) = line.sector_beyond(from_front).and_then(|s| sim.level.sector(s)) else {
        return true;
    };
    if !line.two_sided() {
        return true;
    }
    let missile = mover.flags.contains(MobjFlags::MISSILE);
    if !missile {
        let flagged = if mover.kind == MobjKind::Player {
            line.blocks_players()
        } else {
            line.blocks_monsters()
        };
        if flagged {
            return true;
        }
    }

    let z = mover.pos.z;
    let step = if missile { 0.0 } else { MAX_STEP };
    let floor_ok = end.floor - z <= step;
    let head_ok = end.ceiling - z >= mover.height;
    let gap_ok = end.ceiling - end.floor >= mover.height;
    let drop_ok = mover
        .flags
        .intersects(MobjFlags::DROPOFF | MobjFlags::FLOAT)
        || z - end.floor <= MAX_STEP;
    !(floor_ok && head_ok && gap_ok && drop_ok)
}

/// First thing or line that stops `mover` sweeping by `delta`.
pub fn first_blocker(sim: &Sim, mover: &Mover, delta: Vec2) -> Option<Blocker> {
    if mover.flags.contains(MobjFlags::NOCLIP) {
        return None;
    }
    let mut found = None;
    trace::trace_move(&sim.level, &sim.grid, &sim.world, mover.pos, delta, mover.radius, |hit| {
        let blocker = match *hit {
            Hit::Thing { entity, .. } if thing_blocks(sim, mover, entity) => Blocker::Thing(entity),
            Hit::Line { line, from_front, .. } if line_blocks(sim, mover, line, from_front) => {
                Blocker::Line(line)
            }
            _ => return true,
        };
        found = Some(blocker);
        false
    });
    found
}

/// Whether `entity` standing at `from` could step by `delta`.
pub fn move_blocked(sim: &Sim, entity: Entity, from: Vec3, delta: Vec2) -> bool {
    let Some(mut mover) = Mover::of(sim, entity) else {
        return true;
    };
    mover.pos = from;
    first_blocker(sim, &mover, delta).is_some()
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Project the horizontal part of `vel` onto `along`; z is carried over untouched.
pub fn slide_velocity(vel: Vec3, along: Vec2) -> Vec3 {
    let len2 = along.length_squared();
    if len2 == 0.0 {
        return Vec3::new(0.0, 0.0, vel.z);
    }
    let xy = along * (vel.truncate().dot(along) / len2);
    Vec3::new(xy.x, xy.y, vel.z)
}

/// Things slide along the perpendicular of the contact normal, walls along themselves.
pub fn slide_direction(sim: &Sim, from: Vec2, blocker: Blocker) -> Vec2 {
    match blocker {
        Blocker::Thing(other) => {
            let d = from - sim.pos(other).map_or(from, |p| p.truncate());
            Vec2::new(-d.y, d.x)
        }
        Blocker::Line(line) => sim.level.lines[line].direction(),
    }
}

/// Move by the horizontal part of `vel`, sliding off whatever is in the way.
/// No-clip things just add the whole vector. Missiles and charging skulls
/// never slide; they report the first blocker instead.
pub fn advance(sim: &mut Sim, entity: Entity, vel: Vec3) -> MoveOutcome {
    let Some(mover) = Mover::of(sim, entity) else {
        return MoveOutcome::Moved(vel);
    };
    if mover.flags.contains(MobjFlags::NOCLIP) {
        sim.set_position(entity, mover.pos + vel);
        return MoveOutcome::Moved(vel);
    }

    let slides = if mover
        .flags
        .intersects(MobjFlags::MISSILE | MobjFlags::SKULLFLY)
    {
        0
    } else {
        SLIDE_ATTEMPTS
    };
    let mut vel = vel;
    let mut attempt = 0;
    loop {
        let delta = vel.truncate();
        if delta == Vec2::ZERO {
            return MoveOutcome::Moved(vel);
        }
        match first_blocker(sim, &mover, delta) {
            None => {
                sim.set_position(entity, mover.pos + delta.extend(0.0));
                return MoveOutcome::Moved(vel);
            }
            Some(blocker) if attempt == slides => return MoveOutcome::Blocked(blocker),
            Some(blocker) => {
                vel = slide_velocity(vel, slide_direction(sim, mover.pos.truncate(), blocker));
                attempt += 1;
            }
        }
    }
}

/// Per-tick horizontal physics: momentum, impacts, friction.
pub fn xy_movement(sim: &mut Sim, entity: Entity) {
    let (Some(vel), Some(flags)) = (sim.read::<Velocity>(entity), sim.flags(entity)) else {
        return;
    };
    if vel.0.truncate() == Vec2::ZERO {
        if flags.contains(MobjFlags::SKULLFLY) {
            stop_skull(sim, entity);
        }
        return;
    }

    match advance(sim, entity, vel.0) {
        MoveOutcome::Moved(v) => sim.write(entity, |vel: &mut Velocity| vel.0 = v),
        MoveOutcome::Blocked(blocker) => {
            if flags.contains(MobjFlags::MISSILE) {
                if let Blocker::Thing(victim) = blocker {
                    impact_damage(sim, entity, victim);
                }
                explode_missile(sim, entity);
                return;
            }
            if flags.contains(MobjFlags::SKULLFLY) {
                if let Blocker::Thing(victim) = blocker {
                    impact_damage(sim, entity, victim);
                }
                stop_skull(sim, entity);
                return;
            }
            sim.write(entity, |vel: &mut Velocity| vel.0 = Vec3::new(0.0, 0.0, vel.0.z));
        }
    }

    let flags = sim.flags(entity).unwrap_or(flags);
    if flags.intersects(MobjFlags::MISSILE | MobjFlags::SKULLFLY) {
        return;
    }
    let grounded = match (sim.pos(entity), sim.floor_ceiling(entity)) {
        (Some(p), Some((floor, _))) => p.z <= floor,
        _ => true,
    };
    if grounded {
        sim.write(entity, |vel: &mut Velocity| {
            let xy = vel.0.truncate() * FRICTION;
            let xy = if xy.length() < STOP_SPEED { Vec2::ZERO } else { xy };
            vel.0 = xy.extend(vel.0.z);
        });
    }
}

/// Per-tick vertical physics: floater drift, gravity, floor and ceiling clamps.
pub fn z_movement(sim: &mut Sim, entity: Entity) {
    let (Some(pos), Some(vel), Some(flags), Some(body), Some((floor, ceiling))) = (
        sim.pos(entity),
        sim.read::<Velocity>(entity),
        sim.flags(entity),
        sim.body(entity),
        sim.floor_ceiling(entity),
    ) else {
        return;
    };
    let mut z = pos.z;
    let mut vz = vel.0.z;

    if flags.contains(MobjFlags::FLOAT) && !flags.intersects(MobjFlags::SKULLFLY | MobjFlags::INFLOAT) {
        if let Some(target) = sim.target(entity).and_then(|t| sim.pos(t)) {
            let dist = pos.truncate().distance(target.truncate());
            let delta = target.z + body.height / 2.0 - z;
            if delta < 0.0 && dist < -(delta * 3.0) {
                z -= FLOAT_SPEED;
            } else if delta > 0.0 && dist < delta * 3.0 {
                z += FLOAT_SPEED;
            }
        }
    }

    z += vz;
    let mut hit_plane = false;
    if z <= floor {
        if flags.contains(MobjFlags::SKULLFLY) {
            vz = -vz;
        }
        if vz < 0.0 {
            vz = 0.0;
        }
        z = floor;
        hit_plane = true;
    } else if !flags.contains(MobjFlags::NOGRAVITY) {
        vz -= GRAVITY;
    }
    if z + body.height > ceiling {
        if vz > 0.0 {
            vz = 0.0;
        }
        z = (ceiling - body.height).max(floor);
        if flags.contains(MobjFlags::SKULLFLY) {
            vz = -vz;
        }
        hit_plane = true;
    }

    if z != pos.z {
        sim.set_position(entity, Vec3::new(pos.x, pos.y, z));
    }
    sim.write(entity, |v: &mut Velocity| v.0.z = vz);
    if hit_plane && flags.contains(MobjFlags::MISSILE) {
        explode_missile(sim, entity);
    }
}

/// Contact damage from a missile or charging skull: (1d8) times the type's damage.
fn impact_damage(sim: &mut Sim, projectile: Entity, victim: Entity) {
    if !sim.flags(victim).is_some_and(|f| f.contains(MobjFlags::SHOOTABLE)) {
        return;
    }
    let Some(kind) = sim.kind(projectile) else {
        return;
    };
    let amount = (sim.rng.i32(0..8) + 1) * sim.defs.info(kind).damage;
    let source = if sim.flags(projectile).is_some_and(|f| f.contains(MobjFlags::MISSILE)) {
        sim.brain(projectile).and_then(|b| b.target)
    } else {
        Some(projectile)
    };
    combat::damage(sim, victim, Some(projectile), source, amount);
}

/// Stop dead, switch to the death animation and stop being a missile.
pub fn explode_missile(sim: &mut Sim, missile: Entity) {
    let Some(kind) = sim.kind(missile) else {
        return;
    };
    let info = *sim.defs.info(kind);
    sim.write(missile, |v: &mut Velocity| v.0 = Vec3::ZERO);
    sim.set_flags(missile, MobjFlags::empty(), MobjFlags::MISSILE);
    if !animation::set_state(sim, missile, info.death_state) {
        return;
    }
    combat::shorten_tics(sim, missile);
    sim.play(info.death_sound, Some(missile));
}

fn stop_skull(sim: &mut Sim, skull: Entity) {
    let Some(kind) = sim.kind(skull) else {
        return;
    };
    sim.set_flags(skull, MobjFlags::empty(), MobjFlags::SKULLFLY);
    sim.write(skull, |v: &mut Velocity| v.0 = Vec3::ZERO);
    let spawn = sim.defs.info(kind).spawn_state;
    animation::set_state(sim, skull, spawn);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::defs::StateId;
    use crate::fixtures;
    use crate::level::LineFlags;

    #[test]
    fn wall_slide_keeps_vertical_velocity() {
        let mut sim = fixtures::room_sim();
        let imp = sim.spawn_on_floor(MobjKind::Troop, 21.0, 300.0);
        let out = advance(&mut sim, imp, Vec3::new(-10.0, 5.0, 3.5));
        let MoveOutcome::Moved(v) = out else {
            panic!("expected a slide, got {out:?}");
        };
        assert_eq!(v.z, 3.5);
        assert!(v.x.abs() < 1e-5);
        assert!((v.y - 5.0).abs() < 1e-5);
        assert_eq!(sim.pos(imp).map(|p| p.x), Some(21.0));
    }

    #[test]
    fn thing_slide_keeps_vertical_velocity() {
        let mut sim = fixtures::room_sim();
        let a = sim.spawn_on_floor(MobjKind::Troop, 300.0, 300.0);
        let _b = sim.spawn_on_floor(MobjKind::Troop, 345.0, 300.0);
        let out = advance(&mut sim, a, Vec3::new(8.0, 2.0, -7.25));
        let MoveOutcome::Moved(v) = out else {
            panic!("expected a slide, got {out:?}");
        };
        assert_eq!(v.z, -7.25);
        assert!(v.x.abs() < 1e-5);
    }

    #[test]
    fn slide_projection_never_touches_z() {
        let mut rng = fastrand::Rng::with_seed(9);
        for _ in 0..200 {
            let vel = Vec3::new(rng.f32() * 40.0 - 20.0, rng.f32() * 40.0 - 20.0, rng.f32() * 40.0 - 20.0);
            let along = Vec2::new(rng.f32() - 0.5, rng.f32() - 0.5);
            assert_eq!(slide_velocity(vel, along).z, vel.z);
        }
    }

    fn crossing_blocked(floor: f32, ceiling: f32, flags: LineFlags, kind: MobjKind) -> bool {
        let mut sim = fixtures::sim_in(fixtures::two_rooms(floor, ceiling, flags), SimConfig::default());
        let thing = sim.spawn_on_floor(kind, 480.0, 256.0);
        let from = sim.pos(thing).unwrap();
        move_blocked(&sim, thing, from, Vec2::new(16.0, 0.0))
    }

    #[test]
    fn step_limits() {
        assert!(!crossing_blocked(24.0, 128.0, LineFlags::empty(), MobjKind::Troop));
        assert!(crossing_blocked(25.0, 128.0, LineFlags::empty(), MobjKind::Troop));
    }

    #[test]
    fn head_room() {
        assert!(crossing_blocked(0.0, 40.0, LineFlags::empty(), MobjKind::Troop));
        assert!(!crossing_blocked(0.0, 56.0, LineFlags::empty(), MobjKind::Troop));
    }

    #[test]
    fn drop_off_waived_for_floaters() {
        assert!(crossing_blocked(-64.0, 128.0, LineFlags::empty(), MobjKind::Troop));
        assert!(!crossing_blocked(-64.0, 128.0, LineFlags::empty(), MobjKind::Head));
    }

    #[test]
    fn monster_block_flag_lets_players_through() {
        assert!(crossing_blocked(0.0, 128.0, LineFlags::BLOCK_MONSTERS, MobjKind::Troop));
        assert!(!crossing_blocked(0.0, 128.0, LineFlags::BLOCK_MONSTERS, MobjKind::Player));
        assert!(crossing_blocked(0.0, 128.0, LineFlags::BLOCKING, MobjKind::Player));
    }

    #[test]
    fn missile_explodes_on_wall() {
        let mut sim = fixtures::room_sim();
        let ball = sim.spawn(MobjKind::TroopShot, Vec3::new(30.0, 300.0, 32.0));
        sim.write(ball, |v: &mut Velocity| v.0 = Vec3::new(-10.0, 0.0, 0.0));
        for _ in 0..3 {
            xy_movement(&mut sim, ball);
        }
        assert_eq!(sim.state(ball), Some(StateId::Tballx1));
        assert!(!sim.flags(ball).unwrap().contains(MobjFlags::MISSILE));
        assert_eq!(sim.read::<Velocity>(ball).map(|v| v.0), Some(Vec3::ZERO));
    }

    #[test]
    fn missile_hurts_what_it_hits_but_not_its_shooter() {
        let mut sim = fixtures::room_sim();
        let shooter = sim.spawn_on_floor(MobjKind::Troop, 300.0, 300.0);
        let victim = sim.spawn_on_floor(MobjKind::Possessed, 400.0, 300.0);
        let ball = sim.spawn(MobjKind::TroopShot, Vec3::new(300.0, 300.0, 32.0));
        sim.write(ball, |b: &mut crate::ecs::components::Brain| b.target = Some(shooter));
        sim.write(ball, |v: &mut Velocity| v.0 = Vec3::new(10.0, 0.0, 0.0));
        for _ in 0..10 {
            xy_movement(&mut sim, ball);
        }
        assert_eq!(sim.health(shooter), Some(60));
        assert!(sim.health(victim).unwrap() < 20);
    }

    #[test]
    fn gravity_lands_on_floor() {
        let mut sim = fixtures::room_sim();
        let imp = sim.spawn(MobjKind::Troop, Vec3::new(300.0, 300.0, 50.0));
        for _ in 0..20 {
            z_movement(&mut sim, imp);
        }
        assert_eq!(sim.pos(imp).map(|p| p.z), Some(0.0));
        assert_eq!(sim.read::<Velocity>(imp).map(|v| v.0.z), Some(0.0));
    }

    #[test]
    fn friction_brings_things_to_rest() {
        let mut sim = fixtures::room_sim();
        let imp = sim.spawn_on_floor(MobjKind::Troop, 300.0, 300.0);
        sim.write(imp, |v: &mut Velocity| v.0 = Vec3::new(6.0, 0.0, 0.0));
        for _ in 0..100 {
            xy_movement(&mut sim, imp);
        }
        assert_eq!(sim.read::<Velocity>(imp).map(|v| v.0), Some(Vec3::ZERO));
        assert!(sim.pos(imp).unwrap().x > 320.0);
    }
}

//! Damage, death, projectiles and instant-hit attacks.

use glam::{Vec2, Vec3};
use hecs::Entity;

use crate::config::SKILL_BABY;
use crate::defs::{MobjFlags, MobjKind, StateId};
use crate::ecs::components::{Animation, Body, Brain, Facing, Health, Velocity};
use crate::ecs::systems::animation;
use crate::ecs::systems::movement::{self, Mover};
use crate::hooks::{Activation, Side, SpecialLine};
use crate::math::{angle_noise, bearing, heading};
use crate::sim::Sim;
use crate::spatial::trace::{self, Hit};
use crate::spatial::MAX_THING_RADIUS;

/// Ticks a monster sticks with whoever last hurt it.
pub const BASE_THRESHOLD: i32 = 100;
/// Reach of hitscan attacks.
pub const MISSILE_RANGE: f32 = 2048.0;
/// Projectiles leave the shooter this far above its feet.
const MISSILE_SPAWN_HEIGHT: f32 = 32.0;
/// Knockback per point of damage per unit of mass.
const THRUST_PER_DAMAGE: f32 = 12.5;
/// Vertical aim window of autoaim, as slopes.
const AIM_TOP: f32 = 100.0 / 160.0;
const AIM_BOTTOM: f32 = -100.0 / 160.0;
/// Speed of imp, cacodemon and baron shots when monsters are fast.
const FAST_BALL_SPEED: f32 = 20.0;

/// Shorten a fresh state by 0..=3 tics, never below one.
pub fn shorten_tics(sim: &mut Sim, entity: Entity) {
    let cut = sim.rng.i32(0..=3);
    sim.write(entity, |a: &mut Animation| {
        if a.tics > 0 {
            a.tics = (a.tics - cut).max(1);
        }
    });
}

/// Hurt `target`. `inflictor` is what touched it (missile, puff spot, the
/// attacker itself); `source` is who gets blamed and becomes the new target.
pub fn damage(sim: &mut Sim, target: Entity, inflictor: Option<Entity>, source: Option<Entity>, amount: i32) {
    if !sim.is_live(target) {
        return;
    }
    let (Some(flags), Some(kind), Some(health)) = (sim.flags(target), sim.kind(target), sim.health(target)) else {
        return;
    };
    if !flags.contains(MobjFlags::SHOOTABLE) || health <= 0 {
        return;
    }
    let info = *sim.defs.info(kind);
    let mut amount = amount;
    if kind == MobjKind::Player && sim.config.skill == SKILL_BABY {
        amount /= 2;
    }

    if flags.contains(MobjFlags::SKULLFLY) {
        sim.write(target, |v: &mut Velocity| v.0 = Vec3::ZERO);
    }

    if let (Some(from), Some(to)) = (inflictor.and_then(|i| sim.pos(i)), sim.pos(target)) {
        if !flags.contains(MobjFlags::NOCLIP) {
            let mut angle = bearing(from, to);
            let mut thrust = amount as f32 * THRUST_PER_DAMAGE / info.mass.max(1) as f32;
            // small hits from below sometimes knock things forward off ledges
            if amount < 40 && amount > health && to.z - from.z > 64.0 && sim.rng.bool() {
                angle += std::f32::consts::PI;
                thrust *= 4.0;
            }
            let push = heading(angle) * thrust;
            sim.write(target, |v: &mut Velocity| v.0 += push.extend(0.0));
        }
    }

    let health = health - amount;
    sim.write(target, |h: &mut Health| h.0 = health);
    if health <= 0 {
        kill(sim, target, source);
        return;
    }

    if sim.rng.i32(0..256) < info.pain_chance
        && !flags.contains(MobjFlags::SKULLFLY)
        && info.pain_state != StateId::Null
    {
        sim.set_flags(target, MobjFlags::JUSTHIT, MobjFlags::empty());
        if !animation::set_state(sim, target, info.pain_state) {
            return;
        }
    }
    sim.write(target, |b: &mut Brain| b.reaction_time = 0);

    let Some(source) = source.filter(|&s| s != target && sim.is_live(s)) else {
        return;
    };
    let threshold = sim.brain(target).map_or(0, |b| b.threshold);
    if (threshold == 0 || kind == MobjKind::Vile) && sim.kind(source) != Some(MobjKind::Vile) {
        sim.write(target, |b: &mut Brain| {
            b.target = Some(source);
            b.threshold = BASE_THRESHOLD;
        });
        if sim.state(target) == Some(info.spawn_state) && info.see_state != StateId::Null {
            animation::set_state(sim, target, info.see_state);
        }
    }
}

/// Turn `target` into a corpse and start its death animation.
pub fn kill(sim: &mut Sim, target: Entity, source: Option<Entity>) {
    let (Some(kind), Some(health)) = (sim.kind(target), sim.health(target)) else {
        return;
    };
    let info = *sim.defs.info(kind);
    let mut clear = MobjFlags::SHOOTABLE | MobjFlags::FLOAT | MobjFlags::SKULLFLY;
    if kind != MobjKind::Skull {
        clear |= MobjFlags::NOGRAVITY;
    }
    sim.set_flags(target, MobjFlags::CORPSE | MobjFlags::DROPOFF, clear);
    sim.write(target, |b: &mut Body| b.height /= 4.0);
    if let Some(source) = source {
        sim.write(target, |b: &mut Brain| b.target = Some(source));
    }
    log::debug!("{:?} ({}) killed by {:?}", target, info.name, source);

    let state = if health < -info.spawn_health && info.xdeath_state != StateId::Null {
        info.xdeath_state
    } else {
        info.death_state
    };
    if animation::set_state(sim, target, state) {
        shorten_tics(sim, target);
    }
}

// ---------------------------------------------------------------------------
// Projectiles
// ---------------------------------------------------------------------------

fn missile_speed(sim: &Sim, kind: MobjKind) -> f32 {
    let speed = sim.defs.info(kind).speed;
    let ball = matches!(
        kind,
        MobjKind::TroopShot | MobjKind::HeadShot | MobjKind::BruiserShot
    );
    if ball && sim.fast_monsters() {
        FAST_BALL_SPEED
    } else {
        speed
    }
}

/// Launch a projectile of `kind` from `source` toward `dest`, aimed in 3D.
/// Returns `None` when either end is gone; the missile may still have
/// exploded immediately if its first half-step is blocked.
pub fn spawn_missile(sim: &mut Sim, source: Entity, dest: Entity, kind: MobjKind) -> Option<Entity> {
    let from = sim.pos(source)?;
    let to = sim.pos(dest)?;
    let dest_flags = sim.flags(dest)?;

    let missile = sim.spawn(kind, Vec3::new(from.x, from.y, from.z + MISSILE_SPAWN_HEIGHT));
    let see_sound = sim.defs.info(kind).see_sound;
    sim.play(see_sound, Some(missile));
    sim.write(missile, |b: &mut Brain| b.target = Some(source));

    let mut angle = bearing(from, to);
    if dest_flags.contains(MobjFlags::SHADOW) {
        angle += angle_noise(&mut sim.rng, 20);
    }
    let speed = missile_speed(sim, kind);
    let dist = (from.truncate().distance(to.truncate()) / speed).max(1.0);
    let vel = (heading(angle) * speed).extend((to.z - from.z) / dist);
    sim.write(missile, |f: &mut Facing| f.0 = angle);
    sim.write(missile, |v: &mut Velocity| v.0 = vel);

    check_missile_spawn(sim, missile);
    Some(missile)
}

/// Rotate a flying missile's heading and velocity by `delta` radians.
pub fn turn_missile(sim: &mut Sim, missile: Entity, delta: f32) {
    let Some(facing) = sim.facing(missile) else {
        return;
    };
    let angle = facing + delta;
    sim.write(missile, |f: &mut Facing| f.0 = angle);
    sim.write(missile, |v: &mut Velocity| {
        let speed = v.0.truncate().length();
        v.0 = (heading(angle) * speed).extend(v.0.z);
    });
}

/// Nudge a new missile half a step forward so point-blank shots still
/// connect; explode it on the spot when even that is blocked.
pub fn check_missile_spawn(sim: &mut Sim, missile: Entity) {
    shorten_tics(sim, missile);
    let (Some(mover), Some(vel)) = (Mover::of(sim, missile), sim.read::<Velocity>(missile)) else {
        return;
    };
    let half = vel.0.truncate() / 2.0;
    if movement::first_blocker(sim, &mover, half).is_some() {
        movement::explode_missile(sim, missile);
    } else {
        sim.set_position(missile, mover.pos + half.extend(vel.0.z / 2.0));
    }
}

// ---------------------------------------------------------------------------
// Hitscan
// ---------------------------------------------------------------------------

fn shoot_z(sim: &Sim, shooter: Entity) -> Option<(Vec3, f32)> {
    let pos = sim.pos(shooter)?;
    let body = sim.body(shooter)?;
    Some((pos, pos.z + body.height / 2.0 + 8.0))
}

fn opening(sim: &Sim, line: usize) -> Option<(f32, f32, bool, bool)> {
    let l = &sim.level.lines[line];
    let back = sim.level.sector(l.back?)?;
    let front = sim.level.sector(l.front)?;
    Some((
        front.floor.max(back.floor),
        front.ceiling.min(back.ceiling),
        front.floor != back.floor,
        front.ceiling != back.ceiling,
    ))
}

/// Find the first shootable thing along `angle` inside the vertical aim
/// window, narrowing the window at every ledge and lintel passed. Returns
/// the thing and the slope to its middle; slope 0 when nothing is found.
pub fn aim_line_attack(sim: &Sim, shooter: Entity, angle: f32, range: f32) -> (Option<Entity>, f32) {
    let Some((pos, z)) = shoot_z(sim, shooter) else {
        return (None, 0.0);
    };
    let mut top = AIM_TOP;
    let mut bottom = AIM_BOTTOM;
    let mut found = (None, 0.0);
    trace::trace_move(&sim.level, &sim.grid, &sim.world, pos, heading(angle) * range, 0.0, |hit| {
        let dist = (hit.frac() * range).max(1.0);
        match *hit {
            Hit::Line { line, .. } => {
                let Some((open_bottom, open_top, floor_step, ceiling_step)) = opening(sim, line) else {
                    return false;
                };
                if open_bottom >= open_top {
                    return false;
                }
                if floor_step {
                    bottom = bottom.max((open_bottom - z) / dist);
                }
                if ceiling_step {
                    top = top.min((open_top - z) / dist);
                }
                top > bottom
            }
            Hit::Thing { entity, .. } => {
                if entity == shooter
                    || !sim.is_live(entity)
                    || !sim.flags(entity).is_some_and(|f| f.contains(MobjFlags::SHOOTABLE))
                {
                    return true;
                }
                let (Some(tp), Some(tb)) = (sim.pos(entity), sim.body(entity)) else {
                    return true;
                };
                let thing_top = (tp.z + tb.height - z) / dist;
                let thing_bottom = (tp.z - z) / dist;
                if thing_top < bottom || thing_bottom > top {
                    return true;
                }
                let slope = (thing_top.min(top) + thing_bottom.max(bottom)) / 2.0;
                found = (Some(entity), slope);
                false
            }
        }
    });
    found
}

enum ShotEnd {
    Wall(f32),
    Thing(Entity, f32),
}

/// Fire an instant shot along `angle` with vertical `slope`. The shot stops
/// at the first shootable thing whose body it crosses or the first wall;
/// blood or a puff marks the spot. Shootable line specials it crosses fire.
pub fn line_attack(sim: &mut Sim, shooter: Entity, angle: f32, range: f32, slope: f32, amount: i32) {
    let Some((pos, z)) = shoot_z(sim, shooter) else {
        return;
    };
    let delta = heading(angle) * range;
    let mut end = None;
    let mut crossed = Vec::new();
    {
        let sim = &*sim;
        trace::trace_move(&sim.level, &sim.grid, &sim.world, pos, delta, 0.0, |hit| {
            let dist = hit.frac() * range;
            match *hit {
                Hit::Line { line, frac, from_front } => {
                    if sim.level.lines[line].special != 0 {
                        crossed.push((line, from_front));
                    }
                    let shot_z = z + slope * dist;
                    let passes = opening(sim, line)
                        .is_some_and(|(bottom, top, _, _)| bottom < top && shot_z > bottom && shot_z < top);
                    if passes {
                        return true;
                    }
                    end = Some(ShotEnd::Wall(frac));
                    false
                }
                Hit::Thing { entity, frac } => {
                    if entity == shooter
                        || !sim.is_live(entity)
                        || !sim.flags(entity).is_some_and(|f| f.contains(MobjFlags::SHOOTABLE))
                    {
                        return true;
                    }
                    let (Some(tp), Some(tb)) = (sim.pos(entity), sim.body(entity)) else {
                        return true;
                    };
                    let dist = dist.max(1.0);
                    if (tp.z + tb.height - z) / dist < slope || (tp.z - z) / dist > slope {
                        return true;
                    }
                    end = Some(ShotEnd::Thing(entity, frac));
                    false
                }
            }
        });
    }

    for (line, from_front) in crossed {
        let l = &sim.level.lines[line];
        let special = SpecialLine {
            line: Some(line),
            special: l.special,
            tag: l.tag,
        };
        let side = if from_front { Side::Front } else { Side::Back };
        sim.trigger(Some(shooter), special, Activation::Shoot, side);
    }

    let spot = |frac: f32, back_off: f32| {
        let frac = (frac - back_off / range).max(0.0);
        let xy = pos.truncate() + delta * frac;
        Vec3::new(xy.x, xy.y, z + slope * frac * range)
    };
    match end {
        Some(ShotEnd::Wall(frac)) => {
            spawn_puff(sim, spot(frac, 4.0));
        }
        Some(ShotEnd::Thing(victim, frac)) => {
            let at = spot(frac, 10.0);
            if sim.flags(victim).is_some_and(|f| f.contains(MobjFlags::NOBLOOD)) {
                spawn_puff(sim, at);
            } else {
                spawn_blood(sim, at, amount);
            }
            damage(sim, victim, Some(shooter), Some(shooter), amount);
        }
        None => {}
    }
}

fn jitter_z(sim: &mut Sim) -> f32 {
    (sim.rng.i32(0..256) - sim.rng.i32(0..256)) as f32 / 64.0
}

pub fn spawn_puff(sim: &mut Sim, at: Vec3) -> Entity {
    let z = at.z + jitter_z(sim);
    let puff = sim.spawn(MobjKind::Puff, Vec3::new(at.x, at.y, z));
    sim.write(puff, |v: &mut Velocity| v.0.z = 1.0);
    shorten_tics(sim, puff);
    puff
}

pub fn spawn_blood(sim: &mut Sim, at: Vec3, amount: i32) -> Entity {
    let z = at.z + jitter_z(sim);
    let blood = sim.spawn(MobjKind::Blood, Vec3::new(at.x, at.y, z));
    sim.write(blood, |v: &mut Velocity| v.0.z = 2.0);
    shorten_tics(sim, blood);
    if (9..=12).contains(&amount) {
        animation::set_state(sim, blood, StateId::Blood2);
    } else if amount < 9 {
        animation::set_state(sim, blood, StateId::Blood3);
    }
    blood
}

// ---------------------------------------------------------------------------
// Splash
// ---------------------------------------------------------------------------

/// Blast centred on `spot`, blamed on `source`.
pub fn radius_attack(sim: &mut Sim, spot: Entity, source: Option<Entity>, amount: i32) {
    let (Some(center), Some(body)) = (sim.pos(spot), sim.body(spot)) else {
        return;
    };
    blast(sim, center, body.height, Some(spot), source, amount);
}

/// Everything shootable in sight of `center` within `amount` units takes
/// `amount - distance`, distance measured to the edge of its box. The two
/// big bosses shrug it off. Knockback comes from `inflictor` when there is one.
pub fn blast(
    sim: &mut Sim,
    center: Vec3,
    height: f32,
    inflictor: Option<Entity>,
    source: Option<Entity>,
    amount: i32,
) {
    let reach = Vec2::splat(amount as f32 + MAX_THING_RADIUS);
    let nearby = sim
        .grid
        .query_box(center.truncate() - reach, center.truncate() + reach);
    for thing in nearby {
        if !sim.is_live(thing) || !sim.flags(thing).is_some_and(|f| f.contains(MobjFlags::SHOOTABLE)) {
            continue;
        }
        if matches!(sim.kind(thing), Some(MobjKind::Cyborg | MobjKind::Spider)) {
            continue;
        }
        let (Some(pos), Some(body)) = (sim.pos(thing), sim.body(thing)) else {
            continue;
        };
        let d = (pos.truncate() - center.truncate()).abs();
        let dist = (d.x.max(d.y) - body.radius).max(0.0);
        if dist >= amount as f32 {
            continue;
        }
        if !trace::line_of_sight(&sim.level, pos, body.height, center, height) {
            continue;
        }
        damage(sim, thing, inflictor, source, amount - dist as i32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn damage_retargets_and_wakes() {
        let mut sim = fixtures::room_sim();
        let imp = sim.spawn_on_floor(MobjKind::Troop, 300.0, 300.0);
        let player = sim.spawn_on_floor(MobjKind::Player, 500.0, 300.0);
        damage(&mut sim, imp, Some(player), Some(player), 10);
        assert_eq!(sim.health(imp), Some(50));
        let brain = sim.brain(imp).unwrap();
        assert_eq!(brain.target, Some(player));
        assert_eq!(brain.threshold, BASE_THRESHOLD);
        assert_eq!(brain.reaction_time, 0);
        // woken from the spawn state
        assert_ne!(sim.state(imp), Some(StateId::TrooStnd));
    }

    #[test]
    fn knockback_pushes_away_from_inflictor() {
        let mut sim = fixtures::room_sim();
        let imp = sim.spawn_on_floor(MobjKind::Troop, 300.0, 300.0);
        let player = sim.spawn_on_floor(MobjKind::Player, 200.0, 300.0);
        damage(&mut sim, imp, Some(player), Some(player), 20);
        let v = sim.read::<Velocity>(imp).unwrap().0;
        assert!((v.x - 20.0 * THRUST_PER_DAMAGE / 100.0).abs() < 1e-4);
        assert!(v.y.abs() < 1e-4);
    }

    #[test]
    fn killing_makes_a_corpse() {
        let mut sim = fixtures::room_sim();
        let imp = sim.spawn_on_floor(MobjKind::Troop, 300.0, 300.0);
        damage(&mut sim, imp, None, None, 60);
        let flags = sim.flags(imp).unwrap();
        assert!(!flags.contains(MobjFlags::SHOOTABLE));
        assert!(flags.contains(MobjFlags::CORPSE));
        assert_eq!(sim.body(imp).map(|b| b.height), Some(14.0));
        assert_eq!(sim.state(imp), Some(StateId::TrooDie1));
        // corpses take no more damage
        damage(&mut sim, imp, None, None, 60);
        assert_eq!(sim.health(imp), Some(0));
    }

    #[test]
    fn overkill_gibs() {
        let mut sim = fixtures::room_sim();
        let imp = sim.spawn_on_floor(MobjKind::Troop, 300.0, 300.0);
        damage(&mut sim, imp, None, None, 200);
        assert_eq!(sim.state(imp), Some(StateId::TrooXdie1));
    }

    #[test]
    fn missile_is_aimed_at_target() {
        let mut sim = fixtures::room_sim();
        let imp = sim.spawn_on_floor(MobjKind::Troop, 300.0, 300.0);
        let player = sim.spawn_on_floor(MobjKind::Player, 300.0, 600.0);
        let ball = spawn_missile(&mut sim, imp, player, MobjKind::TroopShot).unwrap();
        let v = sim.read::<Velocity>(ball).unwrap().0;
        assert!(v.x.abs() < 1e-4);
        assert!((v.y - 10.0).abs() < 1e-4);
        assert_eq!(sim.brain(ball).and_then(|b| b.target), Some(imp));
        // half-step nudge
        assert!((sim.pos(ball).unwrap().y - 305.0).abs() < 1e-3);
    }

    #[test]
    fn hitscan_hits_first_shootable_in_line() {
        let mut sim = fixtures::room_sim();
        let shooter = sim.spawn_on_floor(MobjKind::Possessed, 100.0, 300.0);
        let near = sim.spawn_on_floor(MobjKind::Troop, 300.0, 300.0);
        let far = sim.spawn_on_floor(MobjKind::Troop, 500.0, 300.0);
        let (aimed, slope) = aim_line_attack(&sim, shooter, 0.0, MISSILE_RANGE);
        assert_eq!(aimed, Some(near));
        line_attack(&mut sim, shooter, 0.0, MISSILE_RANGE, slope, 5);
        assert_eq!(sim.health(near), Some(55));
        assert_eq!(sim.health(far), Some(60));
        assert_eq!(sim.count_kind(MobjKind::Blood), 1);
    }

    #[test]
    fn hitscan_into_wall_leaves_a_puff() {
        let mut sim = fixtures::room_sim();
        let shooter = sim.spawn_on_floor(MobjKind::Possessed, 100.0, 300.0);
        let (aimed, slope) = aim_line_attack(&sim, shooter, std::f32::consts::PI, MISSILE_RANGE);
        assert_eq!(aimed, None);
        assert_eq!(slope, 0.0);
        line_attack(&mut sim, shooter, std::f32::consts::PI, MISSILE_RANGE, slope, 5);
        assert_eq!(sim.count_kind(MobjKind::Puff), 1);
    }

    #[test]
    fn blast_spares_bosses_and_falls_off() {
        let mut sim = fixtures::room_sim();
        let rocket = sim.spawn(MobjKind::Rocket, Vec3::new(300.0, 300.0, 0.0));
        let close = sim.spawn_on_floor(MobjKind::Possessed, 330.0, 300.0);
        let cyber = sim.spawn_on_floor(MobjKind::Cyborg, 300.0, 400.0);
        let away = sim.spawn_on_floor(MobjKind::Possessed, 600.0, 300.0);
        radius_attack(&mut sim, rocket, None, 128);
        assert!(sim.health(close).unwrap() <= 20 - (128 - 10));
        assert_eq!(sim.health(cyber), Some(4000));
        assert_eq!(sim.health(away), Some(20));
    }
}

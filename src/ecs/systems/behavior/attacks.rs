use glam::Vec3;
use hecs::Entity;

use crate::defs::{MobjFlags, MobjKind, Sound};
use crate::ecs::components::{Brain, Facing, Velocity};
use crate::ecs::systems::combat::{self, MISSILE_RANGE};
use crate::ecs::systems::{animation, movement};
use crate::math::{angle_noise, bearing, heading, roll, wrap_angle};
use crate::sim::Sim;

use super::{can_melee, chase, face_target};

/// Lost soul charge speed, units per tick.
const SKULL_SPEED: f32 = 20.0;
/// No more lost souls are spat out once this many exist.
pub const MAX_SKULLS: usize = 20;
/// Angular gap between mancubus shots.
const FAT_SPREAD: f32 = std::f32::consts::PI / 16.0;
/// Most a revenant rocket turns per adjustment.
const TRACE_ANGLE: f32 = 0.2945;
/// Hitscan spread: `(roll - roll) << 20` of a full turn.
const SPREAD_SHIFT: u32 = 20;
/// Arch-vile blast.
const VILE_DAMAGE: i32 = 20;
const VILE_BLAST: i32 = 70;
/// Fire appears this far in front of the victim, toward the vile.
const VILE_FIRE_OFFSET: f32 = 24.0;
/// Odds out of 256 that the mastermind keeps firing regardless.
const SPIDER_REFIRE_ROLL: i32 = 10;

fn attack_sound(sim: &Sim, entity: Entity) -> Sound {
    sim.kind(entity)
        .map_or(Sound::None, |k| sim.defs.info(k).attack_sound)
}

/// Melee hit for `dice` sides times `scale` if the target is in reach.
/// Returns whether the target was in reach.
fn melee(sim: &mut Sim, entity: Entity, target: Entity, dice: i32, scale: i32, sound: Sound) -> bool {
    if !can_melee(sim, entity, target) {
        return false;
    }
    sim.play(sound, Some(entity));
    let amount = (roll(&mut sim.rng) % dice + 1) * scale;
    combat::damage(sim, target, Some(entity), Some(entity), amount);
    true
}

fn missile(sim: &mut Sim, entity: Entity, target: Entity, kind: MobjKind) -> Option<Entity> {
    combat::spawn_missile(sim, entity, target, kind)
}

fn bullet(sim: &mut Sim, entity: Entity, angle: f32, slope: f32) {
    let angle = angle + angle_noise(&mut sim.rng, SPREAD_SHIFT);
    let amount = (roll(&mut sim.rng) % 5 + 1) * 3;
    combat::line_attack(sim, entity, angle, MISSILE_RANGE, slope, amount);
}

// ---------------------------------------------------------------------------
// Hitscan
// ---------------------------------------------------------------------------

pub fn pos_attack(sim: &mut Sim, entity: Entity) {
    if sim.target(entity).is_none() {
        return;
    }
    face_target(sim, entity);
    let Some(angle) = sim.facing(entity) else {
        return;
    };
    let (_, slope) = combat::aim_line_attack(sim, entity, angle, MISSILE_RANGE);
    sim.play(Sound::Pistol, Some(entity));
    bullet(sim, entity, angle, slope);
}

/// Three pellets, each with its own spread.
pub fn spos_attack(sim: &mut Sim, entity: Entity) {
    if sim.target(entity).is_none() {
        return;
    }
    sim.play(Sound::Shotgn, Some(entity));
    face_target(sim, entity);
    let Some(angle) = sim.facing(entity) else {
        return;
    };
    let (_, slope) = combat::aim_line_attack(sim, entity, angle, MISSILE_RANGE);
    for _ in 0..3 {
        bullet(sim, entity, angle, slope);
    }
}

// ---------------------------------------------------------------------------
// Melee or missile
// ---------------------------------------------------------------------------

pub fn troop_attack(sim: &mut Sim, entity: Entity) {
    let Some(target) = sim.target(entity) else {
        return;
    };
    face_target(sim, entity);
    if !melee(sim, entity, target, 8, 3, Sound::Claw) {
        missile(sim, entity, target, MobjKind::TroopShot);
    }
}

pub fn sarg_attack(sim: &mut Sim, entity: Entity) {
    let Some(target) = sim.target(entity) else {
        return;
    };
    face_target(sim, entity);
    melee(sim, entity, target, 10, 4, Sound::None);
}

pub fn head_attack(sim: &mut Sim, entity: Entity) {
    let Some(target) = sim.target(entity) else {
        return;
    };
    face_target(sim, entity);
    if !melee(sim, entity, target, 6, 10, Sound::None) {
        missile(sim, entity, target, MobjKind::HeadShot);
    }
}

pub fn bruis_attack(sim: &mut Sim, entity: Entity) {
    let Some(target) = sim.target(entity) else {
        return;
    };
    face_target(sim, entity);
    if !melee(sim, entity, target, 8, 10, Sound::Claw) {
        missile(sim, entity, target, MobjKind::BruiserShot);
    }
}

pub fn cyber_attack(sim: &mut Sim, entity: Entity) {
    let Some(target) = sim.target(entity) else {
        return;
    };
    face_target(sim, entity);
    missile(sim, entity, target, MobjKind::Rocket);
}

/// The mastermind keeps firing while it can see a live target.
pub fn spid_refire(sim: &mut Sim, entity: Entity) {
    face_target(sim, entity);
    if roll(&mut sim.rng) < SPIDER_REFIRE_ROLL {
        return;
    }
    let keep_firing = sim
        .target(entity)
        .is_some_and(|t| sim.is_alive(t) && sim.sight(entity, t));
    if !keep_firing {
        if let Some(kind) = sim.kind(entity) {
            let see = sim.defs.info(kind).see_state;
            animation::set_state(sim, entity, see);
        }
    }
}

// ---------------------------------------------------------------------------
// Lost souls
// ---------------------------------------------------------------------------

/// Charge at the target.
pub fn skull_attack(sim: &mut Sim, entity: Entity) {
    let Some(target) = sim.target(entity) else {
        return;
    };
    sim.set_flags(entity, MobjFlags::SKULLFLY, MobjFlags::empty());
    let sound = attack_sound(sim, entity);
    sim.play(sound, Some(entity));
    face_target(sim, entity);
    let (Some(pos), Some(goal), Some(body), Some(angle)) =
        (sim.pos(entity), sim.pos(target), sim.body(target), sim.facing(entity))
    else {
        return;
    };
    let steps = (pos.truncate().distance(goal.truncate()) / SKULL_SPEED).max(1.0);
    let vz = (goal.z + body.height / 2.0 - pos.z) / steps;
    let vel = (heading(angle) * SKULL_SPEED).extend(vz);
    sim.write(entity, |v: &mut Velocity| v.0 = vel);
}

/// Spit a lost soul out along `angle`. Refused once the level holds
/// `MAX_SKULLS`; a soul spawned into a wall dies on the spot.
pub fn pain_shoot_skull(sim: &mut Sim, entity: Entity, angle: f32) {
    let count = sim.count_kind(MobjKind::Skull);
    if count >= MAX_SKULLS {
        log::debug!("{:?} skull spawn refused, {} already out", entity, count);
        return;
    }
    let (Some(pos), Some(body)) = (sim.pos(entity), sim.body(entity)) else {
        return;
    };
    let skull_radius = sim.defs.info(MobjKind::Skull).radius;
    let prestep = 4.0 + 3.0 * (body.radius + skull_radius) / 2.0;
    let offset = heading(angle) * prestep;
    let z = pos.z + 8.0;
    let skull = sim.spawn(MobjKind::Skull, Vec3::new(pos.x + offset.x, pos.y + offset.y, z));

    if movement::move_blocked(sim, skull, Vec3::new(pos.x, pos.y, z), offset) {
        combat::damage(sim, skull, Some(entity), Some(entity), 10_000);
        return;
    }
    let target = sim.target(entity);
    sim.write(skull, |b: &mut Brain| b.target = target);
    skull_attack(sim, skull);
}

pub fn pain_attack(sim: &mut Sim, entity: Entity) {
    if sim.target(entity).is_none() {
        return;
    }
    face_target(sim, entity);
    if let Some(angle) = sim.facing(entity) {
        pain_shoot_skull(sim, entity, angle);
    }
}

/// Pain elemental death: drop, then burst into three souls.
pub fn pain_die(sim: &mut Sim, entity: Entity) {
    super::reactions::fall(sim, entity);
    let Some(facing) = sim.facing(entity) else {
        return;
    };
    for quarter in 1..=3 {
        pain_shoot_skull(sim, entity, facing + quarter as f32 * std::f32::consts::FRAC_PI_2);
    }
}

// ---------------------------------------------------------------------------
// Mancubus
// ---------------------------------------------------------------------------

pub fn fat_raise(sim: &mut Sim, entity: Entity) {
    face_target(sim, entity);
    sim.play(Sound::Manatk, Some(entity));
}

/// Two shots at the target, each then turned by its spread; the body turns by `body_turn`.
fn fat_volley(sim: &mut Sim, entity: Entity, body_turn: f32, spreads: [f32; 2]) {
    face_target(sim, entity);
    let Some(target) = sim.target(entity) else {
        return;
    };
    sim.write(entity, |f: &mut Facing| f.0 += body_turn);
    for spread in spreads {
        if let Some(shot) = missile(sim, entity, target, MobjKind::FatShot) {
            if spread != 0.0 {
                combat::turn_missile(sim, shot, spread);
            }
        }
    }
}

pub fn fat_attack1(sim: &mut Sim, entity: Entity) {
    fat_volley(sim, entity, FAT_SPREAD, [0.0, FAT_SPREAD]);
}

pub fn fat_attack2(sim: &mut Sim, entity: Entity) {
    fat_volley(sim, entity, -FAT_SPREAD, [0.0, -2.0 * FAT_SPREAD]);
}

pub fn fat_attack3(sim: &mut Sim, entity: Entity) {
    fat_volley(sim, entity, 0.0, [-FAT_SPREAD / 2.0, FAT_SPREAD / 2.0]);
}

// ---------------------------------------------------------------------------
// Revenant
// ---------------------------------------------------------------------------

pub fn skel_whoosh(sim: &mut Sim, entity: Entity) {
    if sim.target(entity).is_none() {
        return;
    }
    face_target(sim, entity);
    sim.play(Sound::Skeswg, Some(entity));
}

pub fn skel_fist(sim: &mut Sim, entity: Entity) {
    let Some(target) = sim.target(entity) else {
        return;
    };
    face_target(sim, entity);
    melee(sim, entity, target, 10, 6, Sound::Skepch);
}

/// Homing rocket, fired from the shoulder and pushed one step clear.
pub fn skel_missile(sim: &mut Sim, entity: Entity) {
    let Some(target) = sim.target(entity) else {
        return;
    };
    face_target(sim, entity);
    let Some(rocket) = missile(sim, entity, target, MobjKind::Tracer) else {
        return;
    };
    if let (Some(pos), Some(vel)) = (sim.pos(rocket), sim.read::<Velocity>(rocket)) {
        let step = vel.0.truncate();
        sim.set_position(rocket, Vec3::new(pos.x + step.x, pos.y + step.y, pos.z + 16.0));
    }
    sim.write(rocket, |b: &mut Brain| b.tracer = Some(target));
}

/// Steer a homing rocket. Runs every fourth tick and leaves a puff trail.
pub fn tracer(sim: &mut Sim, entity: Entity) {
    if sim.tick & 3 != 0 {
        return;
    }
    let Some(pos) = sim.pos(entity) else {
        return;
    };
    combat::spawn_puff(sim, pos);

    let Some(dest) = sim
        .brain(entity)
        .and_then(|b| b.tracer)
        .filter(|&t| sim.is_alive(t))
    else {
        return;
    };
    let (Some(goal), Some(facing), Some(kind)) = (sim.pos(dest), sim.facing(entity), sim.kind(entity)) else {
        return;
    };
    let error = wrap_angle(bearing(pos, goal) - facing);
    let turn = if error.abs() <= TRACE_ANGLE {
        error
    } else {
        TRACE_ANGLE.copysign(error)
    };
    combat::turn_missile(sim, entity, turn);

    let speed = sim.defs.info(kind).speed;
    let steps = (pos.truncate().distance(goal.truncate()) / speed).max(1.0);
    let slope = (goal.z + 40.0 - pos.z) / steps;
    sim.write(entity, |v: &mut Velocity| {
        if slope < v.0.z {
            v.0.z -= 0.125;
        } else {
            v.0.z += 0.125;
        }
    });
}

// ---------------------------------------------------------------------------
// Arch-vile
// ---------------------------------------------------------------------------

pub fn vile_start(sim: &mut Sim, entity: Entity) {
    sim.play(Sound::Vilatk, Some(entity));
}

/// Direct hit, a launch into the air, then fire at the victim's feet.
pub fn vile_attack(sim: &mut Sim, entity: Entity) {
    let Some(target) = sim.target(entity) else {
        return;
    };
    face_target(sim, entity);
    if !sim.sight(entity, target) {
        return;
    }
    sim.play(Sound::Barexp, Some(entity));
    combat::damage(sim, target, Some(entity), Some(entity), VILE_DAMAGE);
    if let Some(kind) = sim.kind(target) {
        let lift = 1000.0 / sim.defs.info(kind).mass.max(1) as f32;
        sim.write(target, |v: &mut Velocity| v.0.z = lift);
    }

    let (Some(goal), Some(facing)) = (sim.pos(target), sim.facing(entity)) else {
        return;
    };
    let back = heading(facing) * VILE_FIRE_OFFSET;
    let fire = Vec3::new(goal.x - back.x, goal.y - back.y, goal.z);
    combat::blast(sim, fire, 0.0, None, Some(entity), VILE_BLAST);
}

// ---------------------------------------------------------------------------
// Misc
// ---------------------------------------------------------------------------

/// Rocket and barrel-style blast around the entity, blamed on its shooter.
pub fn explode(sim: &mut Sim, entity: Entity) {
    let source = sim.target(entity);
    combat::radius_attack(sim, entity, source, 128);
}

pub fn hoof(sim: &mut Sim, entity: Entity) {
    sim.play(Sound::Hoof, Some(entity));
    chase::chase(sim, entity);
}

pub fn metal(sim: &mut Sim, entity: Entity) {
    sim.play(Sound::Metal, Some(entity));
    chase::chase(sim, entity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn hunting(sim: &mut Sim, kind: MobjKind, at: (f32, f32), player_at: (f32, f32)) -> (Entity, Entity) {
        let player = sim.spawn_on_floor(MobjKind::Player, player_at.0, player_at.1);
        let monster = sim.spawn_on_floor(kind, at.0, at.1);
        sim.write(monster, |b: &mut Brain| b.target = Some(player));
        (monster, player)
    }

    #[test]
    fn imp_claws_up_close_and_throws_from_afar() {
        let mut sim = fixtures::room_sim();
        let (imp, player) = hunting(&mut sim, MobjKind::Troop, (300.0, 300.0), (340.0, 300.0));
        troop_attack(&mut sim, imp);
        assert!(sim.health(player).unwrap() < 100);
        assert_eq!(sim.count_kind(MobjKind::TroopShot), 0);

        sim.set_position(player, Vec3::new(800.0, 300.0, 0.0));
        troop_attack(&mut sim, imp);
        assert_eq!(sim.count_kind(MobjKind::TroopShot), 1);
    }

    #[test]
    fn baron_turns_before_throwing() {
        let mut sim = fixtures::room_sim();
        let (baron, _) = hunting(&mut sim, MobjKind::Bruiser, (300.0, 300.0), (300.0, 800.0));
        sim.write(baron, |f: &mut crate::ecs::components::Facing| f.0 = 0.0);
        bruis_attack(&mut sim, baron);
        assert!((sim.facing(baron).unwrap() - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
        assert_eq!(sim.count_kind(MobjKind::BruiserShot), 1);
    }

    #[test]
    fn shotgun_fires_three_pellets() {
        let mut sim = fixtures::room_sim();
        let (guy, _) = hunting(&mut sim, MobjKind::Shotguy, (300.0, 300.0), (600.0, 300.0));
        spos_attack(&mut sim, guy);
        let marks = sim.count_kind(MobjKind::Puff) + sim.count_kind(MobjKind::Blood);
        assert_eq!(marks, 3);
    }

    #[test]
    fn twenty_first_skull_is_refused() {
        let mut sim = fixtures::room_sim();
        let (pain, _) = hunting(&mut sim, MobjKind::Pain, (500.0, 300.0), (500.0, 800.0));
        for i in 0..19 {
            sim.spawn_on_floor(MobjKind::Skull, 60.0 + 40.0 * i as f32, 960.0);
        }
        pain_attack(&mut sim, pain);
        assert_eq!(sim.count_kind(MobjKind::Skull), MAX_SKULLS);
        pain_attack(&mut sim, pain);
        assert_eq!(sim.count_kind(MobjKind::Skull), MAX_SKULLS);
    }

    #[test]
    fn spat_skull_charges_the_target() {
        let mut sim = fixtures::room_sim();
        let (pain, player) = hunting(&mut sim, MobjKind::Pain, (500.0, 300.0), (500.0, 800.0));
        pain_attack(&mut sim, pain);
        let skull = sim
            .world
            .query::<&crate::ecs::components::Kind>()
            .iter()
            .find(|(_, k)| k.0 == MobjKind::Skull)
            .map(|(e, _)| e)
            .unwrap();
        assert!(sim.flags(skull).unwrap().contains(MobjFlags::SKULLFLY));
        assert_eq!(sim.brain(skull).unwrap().target, Some(player));
        let v = sim.read::<Velocity>(skull).unwrap().0;
        assert!((v.truncate().length() - SKULL_SPEED).abs() < 1e-3);
        assert!(v.y > 19.0);
    }

    #[test]
    fn skull_spat_into_a_wall_dies() {
        let mut sim = fixtures::room_sim();
        let (pain, _) = hunting(&mut sim, MobjKind::Pain, (40.0, 300.0), (500.0, 300.0));
        pain_shoot_skull(&mut sim, pain, std::f32::consts::PI);
        let skulls: Vec<Entity> = sim
            .world
            .query::<&crate::ecs::components::Kind>()
            .iter()
            .filter(|(_, k)| k.0 == MobjKind::Skull)
            .map(|(e, _)| e)
            .collect();
        assert_eq!(skulls.len(), 1);
        assert!(sim.health(skulls[0]).unwrap() <= 0);
    }

    #[test]
    fn tracer_turns_a_limited_amount() {
        let mut sim = fixtures::room_sim();
        let player = sim.spawn_on_floor(MobjKind::Player, 300.0, 800.0);
        let rocket = sim.spawn(MobjKind::Tracer, Vec3::new(300.0, 300.0, 32.0));
        sim.write(rocket, |v: &mut Velocity| v.0 = Vec3::new(10.0, 0.0, 0.0));
        sim.write(rocket, |b: &mut Brain| b.tracer = Some(player));
        tracer(&mut sim, rocket);
        assert!((sim.facing(rocket).unwrap() - TRACE_ANGLE).abs() < 1e-5);
        let v = sim.read::<Velocity>(rocket).unwrap().0;
        assert!((v.truncate().length() - 10.0).abs() < 1e-3);
        assert_eq!(sim.count_kind(MobjKind::Puff), 1);

        // off-beat ticks leave it alone
        sim.tick = 1;
        tracer(&mut sim, rocket);
        assert!((sim.facing(rocket).unwrap() - TRACE_ANGLE).abs() < 1e-5);
    }

    #[test]
    fn vile_hit_launches_and_burns() {
        let mut sim = fixtures::room_sim();
        let (vile, player) = hunting(&mut sim, MobjKind::Vile, (300.0, 300.0), (500.0, 300.0));
        vile_attack(&mut sim, vile);
        assert_eq!(sim.health(player), Some(100 - VILE_DAMAGE - (VILE_BLAST - 8)));
        assert_eq!(sim.read::<Velocity>(player).unwrap().0.z, 10.0);
        assert_eq!(sim.health(vile), Some(700));
    }

    #[test]
    fn mancubus_volley_fans_out() {
        let mut sim = fixtures::room_sim();
        let (fatso, _) = hunting(&mut sim, MobjKind::Fatso, (300.0, 300.0), (800.0, 300.0));
        fat_attack3(&mut sim, fatso);
        let mut angles: Vec<f32> = sim
            .world
            .query::<(&crate::ecs::components::Kind, &Facing)>()
            .iter()
            .filter(|(_, (k, _))| k.0 == MobjKind::FatShot)
            .map(|(_, (_, f))| f.0)
            .collect();
        angles.sort_by(f32::total_cmp);
        assert_eq!(angles.len(), 2);
        assert!((angles[0] + FAT_SPREAD / 2.0).abs() < 1e-4);
        assert!((angles[1] - FAT_SPREAD / 2.0).abs() < 1e-4);
    }
}

//! Behavior table: one function per `Action`, run when a state is entered.
//!
//! Behaviors guard their own inputs. A missing component, a removed or dead
//! target, or an entity whose position is not set yet turns the call into a
//! no-op. The dispatch is an exhaustive match, so an action id without a
//! behavior cannot be linked in the first place.

pub mod attacks;
pub mod chase;
pub mod reactions;

use std::f32::consts::FRAC_PI_2;

use hecs::Entity;

use crate::defs::{Action, MobjFlags, MobjKind, StateId};
use crate::ecs::components::{Brain, Facing};
use crate::ecs::systems::animation;
use crate::math::{angle_noise, bearing, roll, wrap_angle};
use crate::sim::Sim;

/// Point-blank range: noticed without sight, and the reach of melee attacks.
pub const MELEE_RANGE: f32 = 64.0;

// Missile range tuning. Behavior-preserving constants carried over as-is.
/// Ranged chance is measured from this far out.
const MISSILE_CHANCE_OFFSET: i32 = 64;
/// Monsters without a melee attack get this much more eager to shoot.
const NO_MELEE_BONUS: i32 = 128;
/// Arch-viles never fire from further than this.
const VILE_MAX_RANGE: i32 = 14 * 64;
/// Revenants hold their missile inside this distance.
const UNDEAD_MIN_RANGE: i32 = 196;
const MISSILE_CHANCE_CAP: i32 = 200;
const CYBORG_CHANCE_CAP: i32 = 160;

pub fn invoke(sim: &mut Sim, entity: Entity, action: Action) {
    match action {
        Action::None => {}
        Action::Look => look(sim, entity),
        Action::Chase => chase::chase(sim, entity),
        Action::FaceTarget => face_target(sim, entity),
        Action::PosAttack => attacks::pos_attack(sim, entity),
        Action::SPosAttack => attacks::spos_attack(sim, entity),
        Action::TroopAttack => attacks::troop_attack(sim, entity),
        Action::SargAttack => attacks::sarg_attack(sim, entity),
        Action::HeadAttack => attacks::head_attack(sim, entity),
        Action::BruisAttack => attacks::bruis_attack(sim, entity),
        Action::SkullAttack => attacks::skull_attack(sim, entity),
        Action::PainAttack => attacks::pain_attack(sim, entity),
        Action::PainDie => attacks::pain_die(sim, entity),
        Action::CyberAttack => attacks::cyber_attack(sim, entity),
        Action::SpidRefire => attacks::spid_refire(sim, entity),
        Action::FatRaise => attacks::fat_raise(sim, entity),
        Action::FatAttack1 => attacks::fat_attack1(sim, entity),
        Action::FatAttack2 => attacks::fat_attack2(sim, entity),
        Action::FatAttack3 => attacks::fat_attack3(sim, entity),
        Action::SkelWhoosh => attacks::skel_whoosh(sim, entity),
        Action::SkelFist => attacks::skel_fist(sim, entity),
        Action::SkelMissile => attacks::skel_missile(sim, entity),
        Action::Tracer => attacks::tracer(sim, entity),
        Action::VileStart => attacks::vile_start(sim, entity),
        Action::VileAttack => attacks::vile_attack(sim, entity),
        Action::Pain => reactions::pain(sim, entity),
        Action::Scream => reactions::scream(sim, entity),
        Action::XScream => reactions::xscream(sim, entity),
        Action::PlayerScream => reactions::player_scream(sim, entity),
        Action::Fall => reactions::fall(sim, entity),
        Action::BossDeath => reactions::boss_death(sim, entity),
        Action::Explode => attacks::explode(sim, entity),
        Action::Hoof => attacks::hoof(sim, entity),
        Action::Metal => attacks::metal(sim, entity),
    }
}

/// Big monsters announce themselves everywhere at once.
fn is_boss(kind: MobjKind) -> bool {
    matches!(kind, MobjKind::Spider | MobjKind::Cyborg)
}

/// Idle: wait for the player to show up, then go after them.
pub fn look(sim: &mut Sim, entity: Entity) {
    if sim.pos(entity).is_none() {
        return;
    }
    sim.write(entity, |b: &mut Brain| b.threshold = 0);
    if !find_player_target(sim, entity, false) {
        return;
    }
    let Some(kind) = sim.kind(entity) else {
        return;
    };
    let info = *sim.defs.info(kind);
    let sound = info.see_sound.variant(&mut sim.rng);
    let origin = if is_boss(kind) { None } else { Some(entity) };
    sim.play(sound, origin);
    animation::set_state(sim, entity, info.see_state);
}

/// Look for the player. Point-blank always works; otherwise the player has
/// to be in sight and, unless `all_around`, in front.
pub fn find_player_target(sim: &mut Sim, entity: Entity, all_around: bool) -> bool {
    let Some(player) = sim.player().filter(|&p| sim.is_alive(p)) else {
        return false;
    };
    if player == entity {
        return false;
    }
    let (Some(pos), Some(facing), Some(goal), Some(dist)) = (
        sim.pos(entity),
        sim.facing(entity),
        sim.pos(player),
        sim.distance(entity, player),
    ) else {
        return false;
    };

    if dist >= MELEE_RANGE {
        if !sim.sight(entity, player) {
            return false;
        }
        if !all_around && wrap_angle(bearing(pos, goal) - facing).abs() >= FRAC_PI_2 {
            return false;
        }
    }
    sim.write(entity, |b: &mut Brain| b.target = Some(player));
    true
}

/// Turn to face the target. Shadowy targets throw the aim off.
pub fn face_target(sim: &mut Sim, entity: Entity) {
    let Some(target) = sim.target(entity) else {
        return;
    };
    let (Some(pos), Some(goal), Some(target_flags)) = (sim.pos(entity), sim.pos(target), sim.flags(target)) else {
        return;
    };
    sim.set_flags(entity, MobjFlags::empty(), MobjFlags::AMBUSH);
    let mut angle = bearing(pos, goal);
    if target_flags.contains(MobjFlags::SHADOW) {
        angle += angle_noise(&mut sim.rng, 21);
    }
    sim.write(entity, |f: &mut Facing| f.0 = angle);
}

/// Close enough to hit with a melee attack, and in sight.
pub fn can_melee(sim: &Sim, entity: Entity, target: Entity) -> bool {
    let (Some(dist), Some(body)) = (sim.distance(entity, target), sim.body(target)) else {
        return false;
    };
    if dist >= MELEE_RANGE - 20.0 + body.radius {
        return false;
    }
    sim.sight(entity, target)
}

/// Decide whether to fire a missile this step. Close targets are likelier;
/// each type shades the odds its own way.
pub fn can_shoot(sim: &mut Sim, entity: Entity, target: Entity) -> bool {
    if !sim.sight(entity, target) {
        return false;
    }
    let (Some(flags), Some(kind), Some(brain)) = (sim.flags(entity), sim.kind(entity), sim.brain(entity)) else {
        return false;
    };
    if flags.contains(MobjFlags::JUSTHIT) {
        sim.set_flags(entity, MobjFlags::empty(), MobjFlags::JUSTHIT);
        return true;
    }
    if brain.reaction_time != 0 {
        return false;
    }
    let Some(dist) = sim.distance(entity, target) else {
        return false;
    };

    let mut chance = dist as i32 - MISSILE_CHANCE_OFFSET;
    if sim.defs.info(kind).melee_state == StateId::Null {
        chance -= NO_MELEE_BONUS;
    }
    match kind {
        MobjKind::Vile if chance > VILE_MAX_RANGE => return false,
        MobjKind::Undead => {
            if chance < UNDEAD_MIN_RANGE {
                return false;
            }
            chance >>= 1;
        }
        MobjKind::Cyborg | MobjKind::Spider | MobjKind::Skull => chance >>= 1,
        _ => {}
    }
    chance = chance.min(MISSILE_CHANCE_CAP);
    if kind == MobjKind::Cyborg {
        chance = chance.min(CYBORG_CHANCE_CAP);
    }
    roll(&mut sim.rng) > chance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use std::f32::consts::PI;

    #[test]
    fn every_action_dispatches_without_a_target() {
        let mut sim = fixtures::room_sim();
        let imp = sim.spawn_on_floor(MobjKind::Troop, 300.0, 300.0);
        for action in Action::ALL {
            if sim.is_live(imp) {
                invoke(&mut sim, imp, action);
            }
        }
    }

    #[test]
    fn look_wakes_on_player_in_front() {
        let (mut sim, sounds, _) = fixtures::recording(fixtures::room_sim());
        sim.spawn_on_floor(MobjKind::Player, 600.0, 300.0);
        let zombie = sim.spawn_on_floor(MobjKind::Possessed, 300.0, 300.0);
        look(&mut sim, zombie);
        assert_eq!(sim.state(zombie), Some(StateId::PossRun1));
        let heard = sounds.borrow();
        assert!(matches!(heard[0].0, crate::defs::Sound::Posit1 | crate::defs::Sound::Posit2 | crate::defs::Sound::Posit3));
        assert_eq!(heard[0].1, Some(zombie));
    }

    #[test]
    fn look_ignores_player_behind_unless_close() {
        let mut sim = fixtures::room_sim();
        let player = sim.spawn_on_floor(MobjKind::Player, 600.0, 300.0);
        let zombie = sim.spawn_on_floor(MobjKind::Possessed, 300.0, 300.0);
        sim.write(zombie, |f: &mut Facing| f.0 = PI);
        look(&mut sim, zombie);
        assert_eq!(sim.state(zombie), Some(StateId::PossStnd));
        assert!(find_player_target(&mut sim, zombie, true));

        sim.set_position(player, glam::Vec3::new(340.0, 300.0, 0.0));
        sim.write(zombie, |b: &mut Brain| b.target = None);
        assert!(find_player_target(&mut sim, zombie, false));
    }

    #[test]
    fn cyborg_sighting_is_heard_everywhere() {
        let (mut sim, sounds, _) = fixtures::recording(fixtures::room_sim());
        sim.spawn_on_floor(MobjKind::Player, 800.0, 500.0);
        let cyber = sim.spawn_on_floor(MobjKind::Cyborg, 300.0, 500.0);
        look(&mut sim, cyber);
        assert_eq!(sounds.borrow()[0], (crate::defs::Sound::Cybsit, None));
    }

    #[test]
    fn melee_eligibility_is_monotonic_in_distance() {
        let mut sim = fixtures::room_sim();
        let player = sim.spawn_on_floor(MobjKind::Player, 500.0, 500.0);
        let imp = sim.spawn_on_floor(MobjKind::Troop, 500.0, 500.0);
        let mut seen_out_of_range = false;
        for d in 0..120 {
            sim.set_position(imp, glam::Vec3::new(500.0 - d as f32, 500.0, 0.0));
            let ok = can_melee(&sim, imp, player);
            if seen_out_of_range {
                assert!(!ok, "eligible again at {d}");
            }
            seen_out_of_range |= !ok;
        }
        assert!(seen_out_of_range);
        sim.set_position(imp, glam::Vec3::new(459.0, 500.0, 0.0));
        assert!(can_melee(&sim, imp, player));
        sim.set_position(imp, glam::Vec3::new(440.0, 500.0, 0.0));
        assert!(!can_melee(&sim, imp, player));
    }

    #[test]
    fn melee_range_counts_height() {
        let mut sim = fixtures::room_sim();
        let player = sim.spawn_on_floor(MobjKind::Player, 500.0, 500.0);
        let head = sim.spawn_on_floor(MobjKind::Head, 470.0, 500.0);
        assert!(can_melee(&sim, head, player));
        // same spot on the map, hovering well above
        sim.set_position(head, glam::Vec3::new(470.0, 500.0, 80.0));
        assert!(!can_melee(&sim, head, player));
    }

    #[test]
    fn just_hit_fires_once() {
        let mut sim = fixtures::room_sim();
        let player = sim.spawn_on_floor(MobjKind::Player, 900.0, 500.0);
        let imp = sim.spawn_on_floor(MobjKind::Troop, 100.0, 500.0);
        sim.write(imp, |b: &mut Brain| b.reaction_time = 5);
        sim.set_flags(imp, MobjFlags::JUSTHIT, MobjFlags::empty());
        assert!(can_shoot(&mut sim, imp, player));
        assert!(!sim.flags(imp).unwrap().contains(MobjFlags::JUSTHIT));
        // reaction time still pending
        assert!(!can_shoot(&mut sim, imp, player));
    }

    #[test]
    fn revenant_holds_fire_up_close() {
        let mut sim = fixtures::room_sim();
        let player = sim.spawn_on_floor(MobjKind::Player, 500.0, 500.0);
        let skel = sim.spawn_on_floor(MobjKind::Undead, 300.0, 500.0);
        sim.write(skel, |b: &mut Brain| b.reaction_time = 0);
        for _ in 0..50 {
            assert!(!can_shoot(&mut sim, skel, player));
        }
    }

    #[test]
    fn point_blank_always_shoots_when_ready() {
        let mut sim = fixtures::room_sim();
        let player = sim.spawn_on_floor(MobjKind::Player, 380.0, 500.0);
        // no melee attack, so the close-range chance goes negative
        let zombie = sim.spawn_on_floor(MobjKind::Possessed, 300.0, 500.0);
        sim.write(zombie, |b: &mut Brain| b.reaction_time = 0);
        for _ in 0..50 {
            assert!(can_shoot(&mut sim, zombie, player));
        }
    }

    #[test]
    fn face_target_clears_ambush() {
        let mut sim = fixtures::room_sim();
        let player = sim.spawn_on_floor(MobjKind::Player, 300.0, 600.0);
        let imp = sim.spawn_map_thing(MobjKind::Troop, 300.0, 300.0, 0.0, true);
        sim.write(imp, |b: &mut Brain| b.target = Some(player));
        face_target(&mut sim, imp);
        assert!((sim.facing(imp).unwrap() - FRAC_PI_2).abs() < 1e-5);
        assert!(!sim.flags(imp).unwrap().contains(MobjFlags::AMBUSH));
    }
}

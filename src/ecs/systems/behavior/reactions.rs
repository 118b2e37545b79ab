use hecs::Entity;

use crate::config::LevelId;
use crate::defs::{MobjFlags, MobjKind, Sound};
use crate::ecs::components::{Health, Kind, Removed};
use crate::hooks::{Activation, Side, SpecialLine};
use crate::sim::Sim;

use super::is_boss;

/// Below this health a dying player gives the gory scream.
const PLAYER_GIB_HEALTH: i32 = -50;

/// Level special fired when the last boss of a kind dies on its map.
struct BossRule {
    level: LevelId,
    kind: MobjKind,
    special: u16,
    tag: u16,
}

const LOWER_FLOOR: u16 = 38;
const EXIT_LEVEL: u16 = 52;
const BLAZE_OPEN: u16 = 109;
const BOSS_TAG: u16 = 666;

const BOSS_RULES: [BossRule; 6] = [
    BossRule {
        level: LevelId::episode(1, 8),
        kind: MobjKind::Bruiser,
        special: LOWER_FLOOR,
        tag: BOSS_TAG,
    },
    BossRule {
        level: LevelId::episode(2, 8),
        kind: MobjKind::Cyborg,
        special: EXIT_LEVEL,
        tag: 0,
    },
    BossRule {
        level: LevelId::episode(3, 8),
        kind: MobjKind::Spider,
        special: EXIT_LEVEL,
        tag: 0,
    },
    BossRule {
        level: LevelId::episode(4, 6),
        kind: MobjKind::Cyborg,
        special: BLAZE_OPEN,
        tag: BOSS_TAG,
    },
    BossRule {
        level: LevelId::episode(4, 8),
        kind: MobjKind::Spider,
        special: LOWER_FLOOR,
        tag: BOSS_TAG,
    },
    BossRule {
        level: LevelId::commercial(7),
        kind: MobjKind::Fatso,
        special: LOWER_FLOOR,
        tag: BOSS_TAG,
    },
];

pub fn pain(sim: &mut Sim, entity: Entity) {
    if let Some(kind) = sim.kind(entity) {
        let sound = sim.defs.info(kind).pain_sound;
        sim.play(sound, Some(entity));
    }
}

pub fn scream(sim: &mut Sim, entity: Entity) {
    let Some(kind) = sim.kind(entity) else {
        return;
    };
    let sound = sim.defs.info(kind).death_sound.variant(&mut sim.rng);
    let origin = if is_boss(kind) { None } else { Some(entity) };
    sim.play(sound, origin);
}

pub fn xscream(sim: &mut Sim, entity: Entity) {
    sim.play(Sound::Slop, Some(entity));
}

pub fn player_scream(sim: &mut Sim, entity: Entity) {
    let gibbed = sim.health(entity).is_some_and(|h| h < PLAYER_GIB_HEALTH);
    let sound = if gibbed { Sound::Pdiehi } else { Sound::Pldeth };
    sim.play(sound, Some(entity));
}

/// Corpses can be walked over.
pub fn fall(sim: &mut Sim, entity: Entity) {
    sim.set_flags(entity, MobjFlags::empty(), MobjFlags::SOLID);
}

/// On the boss maps, the death of the last boss of the right kind fires the
/// map's special. Only counts while a player is still alive.
pub fn boss_death(sim: &mut Sim, entity: Entity) {
    let Some(kind) = sim.kind(entity) else {
        return;
    };
    let level = sim.config.level;
    let Some(rule) = BOSS_RULES
        .iter()
        .find(|r| r.level == level && r.kind == kind)
    else {
        return;
    };
    if !sim.player().is_some_and(|p| sim.is_alive(p)) {
        return;
    }
    let survivors = sim
        .world
        .query::<(&Kind, &Health)>()
        .without::<&Removed>()
        .iter()
        .any(|(other, (k, h))| other != entity && k.0 == kind && h.0 > 0);
    if survivors {
        return;
    }

    log::info!(
        "last {} down on {:?}: special {} tag {}",
        sim.defs.info(kind).name,
        level,
        rule.special,
        rule.tag
    );
    let line = SpecialLine {
        line: None,
        special: rule.special,
        tag: rule.tag,
    };
    sim.trigger(Some(entity), line, Activation::Script, Side::Front);
}

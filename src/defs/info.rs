use super::{MobjFlags as F, MobjInfo, MobjKind as K, Sound as Snd, StateId as S};

const BASE: MobjInfo = MobjInfo {
    kind: K::Player,
    name: "",
    doomednum: -1,
    spawn_state: S::Null,
    spawn_health: 1000,
    see_state: S::Null,
    see_sound: Snd::None,
    reaction_time: 8,
    attack_sound: Snd::None,
    pain_state: S::Null,
    pain_chance: 0,
    pain_sound: Snd::None,
    melee_state: S::Null,
    missile_state: S::Null,
    death_state: S::Null,
    xdeath_state: S::Null,
    death_sound: Snd::None,
    speed: 0.0,
    radius: 20.0,
    height: 16.0,
    mass: 100,
    damage: 0,
    active_sound: Snd::None,
    flags: F::empty(),
};

const MONSTER: F = F::SOLID.union(F::SHOOTABLE).union(F::COUNTKILL);
const FLOATER: F = MONSTER.union(F::FLOAT).union(F::NOGRAVITY);
const PROJECTILE: F = F::NOBLOCKMAP
    .union(F::MISSILE)
    .union(F::DROPOFF)
    .union(F::NOGRAVITY);

/// One row per `MobjKind`, in kind order.
pub static MOBJ_INFO: [MobjInfo; K::COUNT] = [
    MobjInfo {
        kind: K::Player,
        name: "player",
        doomednum: 1,
        spawn_state: S::Play,
        spawn_health: 100,
        see_state: S::PlayRun1,
        reaction_time: 0,
        pain_state: S::PlayPain,
        pain_chance: 255,
        pain_sound: Snd::Plpain,
        death_state: S::PlayDie1,
        death_sound: Snd::Pldeth,
        speed: 1.0,
        radius: 16.0,
        height: 56.0,
        flags: F::SOLID
            .union(F::SHOOTABLE)
            .union(F::DROPOFF)
            .union(F::PICKUP)
            .union(F::NOTDMATCH),
        ..BASE
    },
    MobjInfo {
        kind: K::Possessed,
        name: "zombieman",
        doomednum: 3004,
        spawn_state: S::PossStnd,
        spawn_health: 20,
        see_state: S::PossRun1,
        see_sound: Snd::Posit1,
        attack_sound: Snd::Pistol,
        pain_state: S::PossPain,
        pain_chance: 200,
        pain_sound: Snd::Popain,
        missile_state: S::PossAtk1,
        death_state: S::PossDie1,
        xdeath_state: S::PossXdie1,
        death_sound: Snd::Podth1,
        speed: 8.0,
        radius: 20.0,
        height: 56.0,
        active_sound: Snd::Posact,
        flags: MONSTER,
        ..BASE
    },
    MobjInfo {
        kind: K::Shotguy,
        name: "shotgun guy",
        doomednum: 9,
        spawn_state: S::SposStnd,
        spawn_health: 30,
        see_state: S::SposRun1,
        see_sound: Snd::Posit2,
        pain_state: S::SposPain,
        pain_chance: 170,
        pain_sound: Snd::Popain,
        missile_state: S::SposAtk1,
        death_state: S::SposDie1,
        xdeath_state: S::SposXdie1,
        death_sound: Snd::Podth2,
        speed: 8.0,
        radius: 20.0,
        height: 56.0,
        active_sound: Snd::Posact,
        flags: MONSTER,
        ..BASE
    },
    MobjInfo {
        kind: K::Troop,
        name: "imp",
        doomednum: 3001,
        spawn_state: S::TrooStnd,
        spawn_health: 60,
        see_state: S::TrooRun1,
        see_sound: Snd::Bgsit1,
        pain_state: S::TrooPain,
        pain_chance: 200,
        pain_sound: Snd::Popain,
        melee_state: S::TrooAtk1,
        missile_state: S::TrooAtk1,
        death_state: S::TrooDie1,
        xdeath_state: S::TrooXdie1,
        death_sound: Snd::Bgdth1,
        speed: 8.0,
        radius: 20.0,
        height: 56.0,
        active_sound: Snd::Bgact,
        flags: MONSTER,
        ..BASE
    },
    MobjInfo {
        kind: K::Sergeant,
        name: "demon",
        doomednum: 3002,
        spawn_state: S::SargStnd,
        spawn_health: 150,
        see_state: S::SargRun1,
        see_sound: Snd::Sgtsit,
        attack_sound: Snd::Sgtatk,
        pain_state: S::SargPain,
        pain_chance: 180,
        pain_sound: Snd::Dmpain,
        melee_state: S::SargAtk1,
        death_state: S::SargDie1,
        death_sound: Snd::Sgtdth,
        speed: 10.0,
        radius: 30.0,
        height: 56.0,
        mass: 400,
        active_sound: Snd::Dmact,
        flags: MONSTER,
        ..BASE
    },
    MobjInfo {
        kind: K::Shadows,
        name: "spectre",
        doomednum: 58,
        spawn_state: S::SargStnd,
        spawn_health: 150,
        see_state: S::SargRun1,
        see_sound: Snd::Sgtsit,
        attack_sound: Snd::Sgtatk,
        pain_state: S::SargPain,
        pain_chance: 180,
        pain_sound: Snd::Dmpain,
        melee_state: S::SargAtk1,
        death_state: S::SargDie1,
        death_sound: Snd::Sgtdth,
        speed: 10.0,
        radius: 30.0,
        height: 56.0,
        mass: 400,
        active_sound: Snd::Dmact,
        flags: MONSTER.union(F::SHADOW),
        ..BASE
    },
    MobjInfo {
        kind: K::Head,
        name: "cacodemon",
        doomednum: 3005,
        spawn_state: S::HeadStnd,
        spawn_health: 400,
        see_state: S::HeadRun1,
        see_sound: Snd::Cacsit,
        pain_state: S::HeadPain,
        pain_chance: 128,
        pain_sound: Snd::Dmpain,
        missile_state: S::HeadAtk1,
        death_state: S::HeadDie1,
        death_sound: Snd::Cacdth,
        speed: 8.0,
        radius: 31.0,
        height: 56.0,
        mass: 400,
        active_sound: Snd::Dmact,
        flags: FLOATER,
        ..BASE
    },
    MobjInfo {
        kind: K::Bruiser,
        name: "baron of hell",
        doomednum: 3003,
        spawn_state: S::BossStnd,
        spawn_health: 1000,
        see_state: S::BossRun1,
        see_sound: Snd::Brssit,
        pain_state: S::BossPain,
        pain_chance: 50,
        pain_sound: Snd::Dmpain,
        melee_state: S::BossAtk1,
        missile_state: S::BossAtk1,
        death_state: S::BossDie1,
        death_sound: Snd::Brsdth,
        speed: 8.0,
        radius: 24.0,
        height: 64.0,
        mass: 1000,
        active_sound: Snd::Dmact,
        flags: MONSTER,
        ..BASE
    },
    MobjInfo {
        kind: K::Skull,
        name: "lost soul",
        doomednum: 3006,
        spawn_state: S::SkullStnd,
        spawn_health: 100,
        see_state: S::SkullRun1,
        attack_sound: Snd::Sklatk,
        pain_state: S::SkullPain,
        pain_chance: 256,
        pain_sound: Snd::Dmpain,
        missile_state: S::SkullAtk1,
        death_state: S::SkullDie1,
        death_sound: Snd::Firxpl,
        speed: 8.0,
        radius: 16.0,
        height: 56.0,
        mass: 50,
        damage: 3,
        active_sound: Snd::Dmact,
        flags: F::SOLID
            .union(F::SHOOTABLE)
            .union(F::FLOAT)
            .union(F::NOGRAVITY),
        ..BASE
    },
    MobjInfo {
        kind: K::Pain,
        name: "pain elemental",
        doomednum: 71,
        spawn_state: S::PainStnd,
        spawn_health: 400,
        see_state: S::PainRun1,
        see_sound: Snd::Pesit,
        pain_state: S::PainPain,
        pain_chance: 128,
        pain_sound: Snd::Pepain,
        missile_state: S::PainAtk1,
        death_state: S::PainDie1,
        death_sound: Snd::Pedth,
        speed: 8.0,
        radius: 31.0,
        height: 56.0,
        mass: 400,
        active_sound: Snd::Dmact,
        flags: FLOATER,
        ..BASE
    },
    MobjInfo {
        kind: K::Cyborg,
        name: "cyberdemon",
        doomednum: 16,
        spawn_state: S::CyberStnd,
        spawn_health: 4000,
        see_state: S::CyberRun1,
        see_sound: Snd::Cybsit,
        pain_state: S::CyberPain,
        pain_chance: 20,
        pain_sound: Snd::Dmpain,
        missile_state: S::CyberAtk1,
        death_state: S::CyberDie1,
        death_sound: Snd::Cybdth,
        speed: 16.0,
        radius: 40.0,
        height: 110.0,
        mass: 1000,
        active_sound: Snd::Dmact,
        flags: MONSTER,
        ..BASE
    },
    MobjInfo {
        kind: K::Spider,
        name: "spider mastermind",
        doomednum: 7,
        spawn_state: S::SpidStnd,
        spawn_health: 3000,
        see_state: S::SpidRun1,
        see_sound: Snd::Spisit,
        attack_sound: Snd::Shotgn,
        pain_state: S::SpidPain,
        pain_chance: 40,
        pain_sound: Snd::Dmpain,
        missile_state: S::SpidAtk1,
        death_state: S::SpidDie1,
        death_sound: Snd::Spidth,
        speed: 12.0,
        radius: 128.0,
        height: 100.0,
        mass: 1000,
        active_sound: Snd::Dmact,
        flags: MONSTER,
        ..BASE
    },
    MobjInfo {
        kind: K::Fatso,
        name: "mancubus",
        doomednum: 67,
        spawn_state: S::FattStnd,
        spawn_health: 600,
        see_state: S::FattRun1,
        see_sound: Snd::Mansit,
        pain_state: S::FattPain,
        pain_chance: 80,
        pain_sound: Snd::Mnpain,
        missile_state: S::FattAtk1,
        death_state: S::FattDie1,
        death_sound: Snd::Mandth,
        speed: 8.0,
        radius: 48.0,
        height: 64.0,
        mass: 1000,
        active_sound: Snd::Posact,
        flags: MONSTER,
        ..BASE
    },
    MobjInfo {
        kind: K::Undead,
        name: "revenant",
        doomednum: 66,
        spawn_state: S::SkelStnd,
        spawn_health: 300,
        see_state: S::SkelRun1,
        see_sound: Snd::Skesit,
        pain_state: S::SkelPain,
        pain_chance: 100,
        pain_sound: Snd::Popain,
        melee_state: S::SkelFist1,
        missile_state: S::SkelMiss1,
        death_state: S::SkelDie1,
        death_sound: Snd::Skedth,
        speed: 10.0,
        radius: 20.0,
        height: 56.0,
        mass: 500,
        active_sound: Snd::Skeact,
        flags: MONSTER,
        ..BASE
    },
    MobjInfo {
        kind: K::Vile,
        name: "arch-vile",
        doomednum: 64,
        spawn_state: S::VileStnd,
        spawn_health: 700,
        see_state: S::VileRun1,
        see_sound: Snd::Vilsit,
        pain_state: S::VilePain,
        pain_chance: 10,
        pain_sound: Snd::Vipain,
        missile_state: S::VileAtk1,
        death_state: S::VileDie1,
        death_sound: Snd::Vildth,
        speed: 15.0,
        radius: 20.0,
        height: 56.0,
        mass: 500,
        active_sound: Snd::Vilact,
        flags: MONSTER,
        ..BASE
    },
    MobjInfo {
        kind: K::TroopShot,
        name: "imp fireball",
        spawn_state: S::Tball1,
        see_sound: Snd::Firsht,
        death_state: S::Tballx1,
        death_sound: Snd::Firxpl,
        speed: 10.0,
        radius: 6.0,
        height: 8.0,
        damage: 3,
        flags: PROJECTILE,
        ..BASE
    },
    MobjInfo {
        kind: K::HeadShot,
        name: "cacodemon fireball",
        spawn_state: S::Rball1,
        see_sound: Snd::Firsht,
        death_state: S::Rballx1,
        death_sound: Snd::Firxpl,
        speed: 10.0,
        radius: 6.0,
        height: 8.0,
        damage: 5,
        flags: PROJECTILE,
        ..BASE
    },
    MobjInfo {
        kind: K::BruiserShot,
        name: "baron fireball",
        spawn_state: S::Brball1,
        see_sound: Snd::Firsht,
        death_state: S::Brballx1,
        death_sound: Snd::Firxpl,
        speed: 15.0,
        radius: 6.0,
        height: 16.0,
        damage: 8,
        flags: PROJECTILE,
        ..BASE
    },
    MobjInfo {
        kind: K::Rocket,
        name: "rocket",
        spawn_state: S::Rocket,
        see_sound: Snd::Rlaunc,
        death_state: S::Explode1,
        death_sound: Snd::Barexp,
        speed: 20.0,
        radius: 11.0,
        height: 8.0,
        damage: 20,
        flags: PROJECTILE,
        ..BASE
    },
    MobjInfo {
        kind: K::FatShot,
        name: "mancubus fireball",
        spawn_state: S::Fatshot1,
        see_sound: Snd::Firsht,
        death_state: S::Fatshotx1,
        death_sound: Snd::Firxpl,
        speed: 20.0,
        radius: 6.0,
        height: 8.0,
        damage: 8,
        flags: PROJECTILE,
        ..BASE
    },
    MobjInfo {
        kind: K::Tracer,
        name: "revenant tracer",
        spawn_state: S::Tracer,
        see_sound: Snd::Skeatk,
        death_state: S::Traceexp1,
        death_sound: Snd::Barexp,
        speed: 10.0,
        radius: 11.0,
        height: 8.0,
        damage: 10,
        flags: PROJECTILE,
        ..BASE
    },
    MobjInfo {
        kind: K::Puff,
        name: "bullet puff",
        spawn_state: S::Puff1,
        flags: F::NOBLOCKMAP.union(F::NOGRAVITY),
        ..BASE
    },
    MobjInfo {
        kind: K::Blood,
        name: "blood",
        spawn_state: S::Blood1,
        flags: F::NOBLOCKMAP,
        ..BASE
    },
    MobjInfo {
        kind: K::TeleportDest,
        name: "teleport destination",
        doomednum: 14,
        flags: F::NOBLOCKMAP.union(F::NOSECTOR),
        ..BASE
    },
];

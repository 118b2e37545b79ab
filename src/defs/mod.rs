//! Immutable definitions: animation states, entity types, behavior ids, sounds.
//!
//! Everything in here is shared and read-only once the simulation starts.
//! Per-entity mutable data (flags, health, counters) lives in components.

pub mod info;
pub mod states;

use bitflags::bitflags;

use crate::error::ConfigError;
pub use info::MOBJ_INFO;
pub use states::{StateId, STATES};

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct MobjFlags: u32 {
        /// Pickup item.
        const SPECIAL      = 0x0000_0001;
        const SOLID        = 0x0000_0002;
        const SHOOTABLE    = 0x0000_0004;
        const NOSECTOR     = 0x0000_0008;
        const NOBLOCKMAP   = 0x0000_0010;
        /// Stays put until it sees the player.
        const AMBUSH       = 0x0000_0020;
        /// Took damage this cycle; next missile check fires unconditionally.
        const JUSTHIT      = 0x0000_0040;
        /// Skip the next attack opportunity.
        const JUSTATTACKED = 0x0000_0080;
        const SPAWNCEILING = 0x0000_0100;
        const NOGRAVITY    = 0x0000_0200;
        /// May walk off ledges higher than a step.
        const DROPOFF      = 0x0000_0400;
        const PICKUP       = 0x0000_0800;
        const NOCLIP       = 0x0000_1000;
        const SLIDE        = 0x0000_2000;
        const FLOAT        = 0x0000_4000;
        const TELEPORT     = 0x0000_8000;
        const MISSILE      = 0x0001_0000;
        const DROPPED      = 0x0002_0000;
        /// Partial invisibility: attackers get angular noise.
        const SHADOW       = 0x0004_0000;
        const NOBLOOD      = 0x0008_0000;
        const CORPSE       = 0x0010_0000;
        const INFLOAT      = 0x0020_0000;
        const COUNTKILL    = 0x0040_0000;
        const COUNTITEM    = 0x0080_0000;
        /// Lost soul mid-charge.
        const SKULLFLY     = 0x0100_0000;
        const NOTDMATCH    = 0x0200_0000;
    }
}

impl MobjFlags {
    /// What trace-based movement considers an obstacle.
    pub const HITTABLE: MobjFlags = MobjFlags::SOLID.union(MobjFlags::SHOOTABLE);
}

// ---------------------------------------------------------------------------
// Behavior ids
// ---------------------------------------------------------------------------

/// Behavior invoked on state entry. The numeric ids are stable and may be
/// persisted; never renumber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Action {
    None = 0,
    Look = 1,
    Chase = 2,
    FaceTarget = 3,
    PosAttack = 4,
    SPosAttack = 5,
    TroopAttack = 6,
    SargAttack = 7,
    HeadAttack = 8,
    BruisAttack = 9,
    SkullAttack = 10,
    PainAttack = 11,
    PainDie = 12,
    CyberAttack = 13,
    SpidRefire = 14,
    FatRaise = 15,
    FatAttack1 = 16,
    FatAttack2 = 17,
    FatAttack3 = 18,
    SkelWhoosh = 19,
    SkelFist = 20,
    SkelMissile = 21,
    Tracer = 22,
    VileStart = 23,
    VileAttack = 24,
    Pain = 25,
    Scream = 26,
    XScream = 27,
    PlayerScream = 28,
    Fall = 29,
    BossDeath = 30,
    Explode = 31,
    Hoof = 32,
    Metal = 33,
}

impl Action {
    pub const ALL: [Action; 34] = [
        Action::None,
        Action::Look,
        Action::Chase,
        Action::FaceTarget,
        Action::PosAttack,
        Action::SPosAttack,
        Action::TroopAttack,
        Action::SargAttack,
        Action::HeadAttack,
        Action::BruisAttack,
        Action::SkullAttack,
        Action::PainAttack,
        Action::PainDie,
        Action::CyberAttack,
        Action::SpidRefire,
        Action::FatRaise,
        Action::FatAttack1,
        Action::FatAttack2,
        Action::FatAttack3,
        Action::SkelWhoosh,
        Action::SkelFist,
        Action::SkelMissile,
        Action::Tracer,
        Action::VileStart,
        Action::VileAttack,
        Action::Pain,
        Action::Scream,
        Action::XScream,
        Action::PlayerScream,
        Action::Fall,
        Action::BossDeath,
        Action::Explode,
        Action::Hoof,
        Action::Metal,
    ];
}

impl TryFrom<u16> for Action {
    type Error = ConfigError;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| *a as u16 == id)
            .ok_or(ConfigError::UnknownAction(id))
    }
}

// ---------------------------------------------------------------------------
// Sounds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    None,
    Pistol,
    Shotgn,
    Claw,
    Sgtatk,
    Sklatk,
    Skepch,
    Skeswg,
    Skeatk,
    Manatk,
    Vilatk,
    Barexp,
    Firsht,
    Firxpl,
    Rlaunc,
    Hoof,
    Metal,
    Slop,
    Posit1,
    Posit2,
    Posit3,
    Bgsit1,
    Bgsit2,
    Sgtsit,
    Cacsit,
    Brssit,
    Cybsit,
    Spisit,
    Mansit,
    Skesit,
    Vilsit,
    Pesit,
    Popain,
    Dmpain,
    Pepain,
    Mnpain,
    Vipain,
    Plpain,
    Podth1,
    Podth2,
    Podth3,
    Bgdth1,
    Bgdth2,
    Sgtdth,
    Cacdth,
    Brsdth,
    Cybdth,
    Spidth,
    Mandth,
    Skedth,
    Vildth,
    Pedth,
    Pldeth,
    Pdiehi,
    Posact,
    Bgact,
    Dmact,
    Skeact,
    Vilact,
}

impl Sound {
    /// Alert and death sounds come in small sets; the type names the first
    /// member and one is picked at random.
    pub fn variant(self, rng: &mut fastrand::Rng) -> Sound {
        const POSIT: [Sound; 3] = [Sound::Posit1, Sound::Posit2, Sound::Posit3];
        const BGSIT: [Sound; 2] = [Sound::Bgsit1, Sound::Bgsit2];
        const PODTH: [Sound; 3] = [Sound::Podth1, Sound::Podth2, Sound::Podth3];
        const BGDTH: [Sound; 2] = [Sound::Bgdth1, Sound::Bgdth2];
        match self {
            Sound::Posit1 | Sound::Posit2 | Sound::Posit3 => POSIT[rng.usize(..POSIT.len())],
            Sound::Bgsit1 | Sound::Bgsit2 => BGSIT[rng.usize(..BGSIT.len())],
            Sound::Podth1 | Sound::Podth2 | Sound::Podth3 => PODTH[rng.usize(..PODTH.len())],
            Sound::Bgdth1 | Sound::Bgdth2 => BGDTH[rng.usize(..BGDTH.len())],
            other => other,
        }
    }
}

// ---------------------------------------------------------------------------
// Sprites and states
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteName {
    Play,
    Poss,
    Spos,
    Troo,
    Sarg,
    Head,
    Boss,
    Skul,
    Pain,
    Cybr,
    Spid,
    Fatt,
    Skel,
    Vile,
    Bal1,
    Bal2,
    Bal7,
    Misl,
    Manf,
    Fatb,
    Fbxp,
    Puff,
    Blud,
}

impl SpriteName {
    pub fn name(self) -> &'static str {
        match self {
            SpriteName::Play => "PLAY",
            SpriteName::Poss => "POSS",
            SpriteName::Spos => "SPOS",
            SpriteName::Troo => "TROO",
            SpriteName::Sarg => "SARG",
            SpriteName::Head => "HEAD",
            SpriteName::Boss => "BOSS",
            SpriteName::Skul => "SKUL",
            SpriteName::Pain => "PAIN",
            SpriteName::Cybr => "CYBR",
            SpriteName::Spid => "SPID",
            SpriteName::Fatt => "FATT",
            SpriteName::Skel => "SKEL",
            SpriteName::Vile => "VILE",
            SpriteName::Bal1 => "BAL1",
            SpriteName::Bal2 => "BAL2",
            SpriteName::Bal7 => "BAL7",
            SpriteName::Misl => "MISL",
            SpriteName::Manf => "MANF",
            SpriteName::Fatb => "FATB",
            SpriteName::Fbxp => "FBXP",
            SpriteName::Puff => "PUFF",
            SpriteName::Blud => "BLUD",
        }
    }
}

pub const FF_FULLBRIGHT: u16 = 0x8000;
pub const FF_FRAMEMASK: u16 = 0x7fff;

/// One row of the animation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub id: StateId,
    pub sprite: SpriteName,
    /// Frame index with the fullbright bit folded in.
    pub frame: u16,
    /// Duration in ticks; 0 = pass-through, negative = held forever.
    pub tics: i32,
    pub action: Action,
    pub next: StateId,
}

/// Validated state graph.
#[derive(Debug, Clone)]
pub struct StateTable {
    rows: Vec<State>,
}

impl StateTable {
    /// Rejects out-of-order rows, dangling links and zero-duration cycles.
    pub fn new(rows: Vec<State>) -> Result<Self, ConfigError> {
        for (i, row) in rows.iter().enumerate() {
            if row.id as usize != i {
                return Err(ConfigError::StateOrder {
                    row: i,
                    declared: row.id as u16,
                });
            }
            if row.next as usize >= rows.len() {
                return Err(ConfigError::MissingState {
                    state: row.id as u16,
                    next: row.next as u16,
                });
            }
        }
        let table = Self { rows };
        table.check_zero_cycles()?;
        Ok(table)
    }

    /// Walk each zero-duration chain; revisiting a state before reaching a
    /// timed or terminal one is a cycle.
    fn check_zero_cycles(&self) -> Result<(), ConfigError> {
        let mut seen = vec![false; self.rows.len()];
        for start in &self.rows {
            seen.iter_mut().for_each(|s| *s = false);
            let mut cur = start;
            while cur.tics == 0 && cur.id != StateId::Null {
                let idx = cur.id as usize;
                if seen[idx] {
                    return Err(ConfigError::ZeroDurationCycle(cur.id as u16));
                }
                seen[idx] = true;
                cur = &self.rows[cur.next as usize];
            }
        }
        Ok(())
    }

    pub fn get(&self, id: StateId) -> Option<&State> {
        self.rows.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Longest zero-duration chain is bounded by the table size.
    pub fn max_hops(&self) -> usize {
        self.rows.len() + 1
    }
}

// ---------------------------------------------------------------------------
// Entity types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum MobjKind {
    Player,
    Possessed,
    Shotguy,
    Troop,
    Sergeant,
    Shadows,
    Head,
    Bruiser,
    Skull,
    Pain,
    Cyborg,
    Spider,
    Fatso,
    Undead,
    Vile,
    TroopShot,
    HeadShot,
    BruiserShot,
    Rocket,
    FatShot,
    Tracer,
    Puff,
    Blood,
    TeleportDest,
}

impl MobjKind {
    pub const COUNT: usize = 24;

    pub fn from_doomednum(num: i32) -> Option<MobjKind> {
        MOBJ_INFO
            .iter()
            .find(|info| info.doomednum == num && num >= 0)
            .map(|info| info.kind)
    }
}

/// Immutable type template.
#[derive(Debug, Clone, Copy)]
pub struct MobjInfo {
    pub kind: MobjKind,
    pub name: &'static str,
    /// Map editor number, -1 when the type never appears in map data.
    pub doomednum: i32,
    pub spawn_state: StateId,
    pub spawn_health: i32,
    pub see_state: StateId,
    pub see_sound: Sound,
    pub reaction_time: i32,
    pub attack_sound: Sound,
    pub pain_state: StateId,
    /// Out of 256.
    pub pain_chance: i32,
    pub pain_sound: Sound,
    pub melee_state: StateId,
    pub missile_state: StateId,
    pub death_state: StateId,
    pub xdeath_state: StateId,
    pub death_sound: Sound,
    /// Units per tick.
    pub speed: f32,
    pub radius: f32,
    pub height: f32,
    pub mass: i32,
    pub damage: i32,
    pub active_sound: Sound,
    pub flags: MobjFlags,
}

/// All definitions the simulation links against.
#[derive(Debug, Clone)]
pub struct Defs {
    pub states: StateTable,
    infos: Vec<MobjInfo>,
}

impl Defs {
    /// Validates that every type row matches its kind and every state it
    /// names exists.
    pub fn new(states: StateTable, infos: Vec<MobjInfo>) -> Result<Self, ConfigError> {
        if infos.len() != MobjKind::COUNT {
            return Err(ConfigError::TypeTableSize {
                found: infos.len(),
                expected: MobjKind::COUNT,
            });
        }
        for (row, info) in infos.iter().enumerate() {
            if info.kind as usize != row {
                return Err(ConfigError::TypeOrder { row, kind: info.name });
            }
            let refs = [
                info.spawn_state,
                info.see_state,
                info.pain_state,
                info.melee_state,
                info.missile_state,
                info.death_state,
                info.xdeath_state,
            ];
            for state in refs {
                if states.get(state).is_none() {
                    return Err(ConfigError::MissingTypeState {
                        kind: info.name,
                        state: state as u16,
                    });
                }
            }
        }
        Ok(Self { states, infos })
    }

    /// The built-in classic tables.
    pub fn doom() -> Result<Self, ConfigError> {
        Self::new(StateTable::new(STATES.to_vec())?, MOBJ_INFO.to_vec())
    }

    pub fn info(&self, kind: MobjKind) -> &MobjInfo {
        // Defs::new guarantees one row per kind, in kind order.
        &self.infos[kind as usize]
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id)
    }
}

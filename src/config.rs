use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Multiplayer mode. Only non-solo games drop a target they lost sight of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Solo,
    Coop,
    Deathmatch,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Solo => "Solo",
            GameMode::Coop => "Coop",
            GameMode::Deathmatch => "Deathmatch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonsterAi {
    Normal,
    Fast,
}

/// Episode/map pair. Commercial maps use episode 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelId {
    pub episode: u8,
    pub map: u8,
}

impl LevelId {
    pub const fn episode(episode: u8, map: u8) -> Self {
        Self { episode, map }
    }

    pub const fn commercial(map: u8) -> Self {
        Self { episode: 0, map }
    }
}

/// I'm too young to die: players take half damage.
pub const SKILL_BABY: u8 = 1;
/// Nightmare.
pub const SKILL_NIGHTMARE: u8 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// 1..=5, 5 being nightmare.
    pub skill: u8,
    pub mode: GameMode,
    pub monster_ai: MonsterAi,
    pub level: LevelId,
    /// Seed for the simulation RNG. Same seed + same inputs = same replay.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            skill: 3,
            mode: GameMode::Solo,
            monster_ai: MonsterAi::Normal,
            level: LevelId::episode(1, 1),
            seed: 0x5eed,
        }
    }
}

impl SimConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Fast monsters attack on consecutive cycles and ignore the missile cooldown.
    pub fn fast_monsters(&self) -> bool {
        self.skill == SKILL_NIGHTMARE || self.monster_ai == MonsterAi::Fast
    }
}

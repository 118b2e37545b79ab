//! Periodic per-tick mutators for level surfaces: scrolling walls and
//! sector light animations. Installed once when the world is built.

use crate::level::{Level, LineId, SectorId};
use crate::math::rand_int;

/// Wall specials that scroll their texture, with the per-tick offset delta.
const SCROLLERS: [(u16, f32); 2] = [(48, 1.0), (85, -1.0)];

/// Dark ticks of a random flicker are drawn from 1..=7.
const FLICKER_DARK_MAX: i32 = 7;
/// Bright ticks of a random flicker are drawn from 1..=64.
const FLICKER_BRIGHT_MAX: i32 = 64;
/// Unsynchronized strobes start after a random 1..=7 ticks.
const STROBE_PHASE_MAX: i32 = 7;
/// Light change per tick of a glowing sector.
const GLOW_STEP: i16 = 8;
/// Fire flicker re-rolls every this many ticks.
const FIRE_PERIOD: i32 = 4;
/// Fire never drops below the dim level plus this.
const FIRE_FLOOR: i16 = 16;
/// Fire dips by a multiple of this.
const FIRE_DIP: i16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Flicker,
    Strobe { bright_ticks: i32, dark_ticks: i32 },
    Glow { step: i16 },
    Fire,
}

/// Constructor keyed by sector type code.
fn light_kind(special: u16) -> Option<(LightKind, bool)> {
    let strobe = |bright_ticks, dark_ticks| LightKind::Strobe {
        bright_ticks,
        dark_ticks,
    };
    Some(match special {
        1 => (LightKind::Flicker, false),
        2 => (strobe(5, 15), false),
        3 | 4 => (strobe(5, 35), false),
        8 => (LightKind::Glow { step: -GLOW_STEP }, false),
        12 => (strobe(5, 35), true),
        13 => (strobe(5, 15), true),
        17 => (LightKind::Fire, false),
        _ => return None,
    })
}

/// A sector light animator: closes over the sector's bright and dim levels
/// and keeps its own countdown.
#[derive(Debug, Clone)]
pub struct LightFunction {
    pub kind: LightKind,
    pub bright: i16,
    pub dim: i16,
    value: i16,
    countdown: i32,
}

impl LightFunction {
    pub fn new(kind: LightKind, bright: i16, dim: i16, synchronized: bool, rng: &mut fastrand::Rng) -> Self {
        let (dim, countdown) = match kind {
            LightKind::Strobe { .. } if !synchronized => (dim, rand_int(rng, 1, STROBE_PHASE_MAX)),
            LightKind::Fire => (dim + FIRE_FLOOR, FIRE_PERIOD),
            _ => (dim, 1),
        };
        Self {
            kind,
            bright,
            dim,
            value: bright,
            countdown,
        }
    }

    pub fn value(&self) -> i16 {
        self.value
    }

    /// Advance one tick. Returns the light to publish, if this tick sets one.
    pub fn step(&mut self, rng: &mut fastrand::Rng) -> Option<i16> {
        match &mut self.kind {
            LightKind::Glow { step } => {
                self.value += *step;
                if self.value <= self.dim || self.value >= self.bright {
                    *step = -*step;
                    self.value += *step;
                }
                return Some(self.value);
            }
            _ => {
                self.countdown -= 1;
                if self.countdown > 0 {
                    return None;
                }
            }
        }

        match self.kind {
            LightKind::Flicker => {
                if self.value == self.bright {
                    self.countdown = rand_int(rng, 1, FLICKER_DARK_MAX);
                    self.value = self.dim;
                } else {
                    self.countdown = rand_int(rng, 1, FLICKER_BRIGHT_MAX);
                    self.value = self.bright;
                }
            }
            LightKind::Strobe {
                bright_ticks,
                dark_ticks,
            } => {
                if self.value == self.bright {
                    self.countdown = dark_ticks;
                    self.value = self.dim;
                } else {
                    self.countdown = bright_ticks;
                    self.value = self.bright;
                }
            }
            LightKind::Fire => {
                self.countdown = FIRE_PERIOD;
                let dip = rand_int(rng, 0, 2) as i16 * FIRE_DIP;
                self.value = (self.bright - dip).max(self.dim);
            }
            LightKind::Glow { .. } => {}
        }
        Some(self.value)
    }
}

#[derive(Debug, Clone)]
pub enum EnvAction {
    Scroll { line: LineId, step: f32 },
    Light { sector: SectorId, light: LightFunction },
}

/// All per-tick environment actions of a level, run before any entity ticks.
#[derive(Debug, Default)]
pub struct Environment {
    actions: Vec<EnvAction>,
}

impl Environment {
    pub fn build(level: &Level, rng: &mut fastrand::Rng) -> Self {
        let mut actions = Vec::new();
        for (id, line) in level.lines.iter().enumerate() {
            if let Some(&(_, step)) = SCROLLERS.iter().find(|(special, _)| *special == line.special) {
                actions.push(EnvAction::Scroll { line: id, step });
            }
        }
        for (id, sector) in level.sectors.iter().enumerate() {
            let Some((kind, synchronized)) = light_kind(sector.special) else {
                continue;
            };
            let dim = dim_light(level, id);
            actions.push(EnvAction::Light {
                sector: id,
                light: LightFunction::new(kind, sector.base_light, dim, synchronized, rng),
            });
        }
        Self { actions }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn run(&mut self, level: &mut Level, rng: &mut fastrand::Rng) {
        for action in &mut self.actions {
            match action {
                EnvAction::Scroll { line, step } => {
                    if let Some(line) = level.lines.get_mut(*line) {
                        line.x_offset.update(|x| x + *step);
                    }
                }
                EnvAction::Light { sector, light } => {
                    if let (Some(value), Some(sector)) = (light.step(rng), level.sectors.get_mut(*sector)) {
                        sector.light.set(value);
                    }
                }
            }
        }
    }
}

/// Lowest light among the sector and its neighbours; 0 for a sector with no
/// neighbours.
pub fn dim_light(level: &Level, sector: SectorId) -> i16 {
    let neighbours = level.neighbours(sector);
    if neighbours.is_empty() {
        return 0;
    }
    let own = level.sector(sector).map_or(0, |s| s.base_light);
    neighbours
        .iter()
        .filter_map(|&n| level.sector(n))
        .map(|s| s.base_light)
        .fold(own, i16::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use crate::level::{LineSpec, Sector};

    /// Sector 0 = [0,128]^2 with `special` and light 160, sector 1 beside it at light 80.
    fn lit_pair(special: u16) -> Level {
        let v = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 128.0),
            Vec2::new(128.0, 128.0),
            Vec2::new(128.0, 0.0),
            Vec2::new(256.0, 128.0),
            Vec2::new(256.0, 0.0),
        ];
        let sectors = vec![
            Sector::new(0.0, 128.0, 160).with_special(special),
            Sector::new(0.0, 128.0, 80),
        ];
        let lines = [
            LineSpec::wall(0, 1, 0).with_special(48, 0),
            LineSpec::wall(1, 2, 0),
            LineSpec::wall(3, 0, 0).with_special(85, 0),
            LineSpec::portal(3, 2, 1, 0),
            LineSpec::wall(2, 4, 1),
            LineSpec::wall(4, 5, 1),
            LineSpec::wall(5, 3, 1),
        ];
        Level::new(&v, sectors, &lines, Vec::new()).unwrap()
    }

    fn run_lights(special: u16, ticks: usize) -> Vec<i16> {
        let mut level = lit_pair(special);
        let mut rng = fastrand::Rng::with_seed(7);
        let mut env = Environment::build(&level, &mut rng);
        (0..ticks)
            .map(|_| {
                env.run(&mut level, &mut rng);
                *level.sectors[0].light.get()
            })
            .collect()
    }

    #[test]
    fn flicker_alternates_between_dim_and_bright() {
        let seen = run_lights(1, 2000);
        assert!(seen.iter().all(|&l| l == 80 || l == 160));
        assert!(seen.contains(&80));
        assert!(seen.contains(&160));
    }

    #[test]
    fn synchronized_strobe_timing() {
        let seen = run_lights(13, 41);
        // dark on the first tick for 15, then bright for 5
        assert!(seen[..15].iter().all(|&l| l == 80));
        assert!(seen[15..20].iter().all(|&l| l == 160));
        assert!(seen[20..35].iter().all(|&l| l == 80));
        assert_eq!(seen[35], 160);
    }

    #[test]
    fn glow_bounces_in_steps_of_eight() {
        let seen = run_lights(8, 60);
        assert_eq!(&seen[..3], &[152, 144, 136]);
        assert!(seen.iter().all(|&l| (88..=152).contains(&l)));
        assert!(seen.iter().all(|&l| (160 - l) % GLOW_STEP == 0));
        // turns around without touching either end
        assert!(seen.windows(2).all(|w| (w[0] - w[1]).abs() <= GLOW_STEP));
    }

    #[test]
    fn fire_rerolls_every_four_ticks() {
        let mut level = lit_pair(17);
        let mut rng = fastrand::Rng::with_seed(3);
        let mut env = Environment::build(&level, &mut rng);
        for tick in 1..=40 {
            env.run(&mut level, &mut rng);
            let light = *level.sectors[0].light.get();
            assert!((96..=160).contains(&light));
            if tick % FIRE_PERIOD as usize != 0 {
                continue;
            }
            assert_eq!((160 - light) % FIRE_DIP, 0);
        }
    }

    #[test]
    fn scrollers_move_their_walls() {
        let mut level = lit_pair(0);
        let mut rng = fastrand::Rng::with_seed(1);
        let mut env = Environment::build(&level, &mut rng);
        assert_eq!(env.len(), 2);
        for _ in 0..10 {
            env.run(&mut level, &mut rng);
        }
        assert_eq!(*level.lines[0].x_offset.get(), 10.0);
        assert_eq!(*level.lines[2].x_offset.get(), -10.0);
        assert_eq!(*level.lines[1].x_offset.get(), 0.0);
    }

    #[test]
    fn lone_sector_dims_to_black() {
        let level = crate::fixtures::room();
        assert_eq!(dim_light(&level, 0), 0);
        let level = lit_pair(1);
        assert_eq!(dim_light(&level, 0), 80);
        assert_eq!(dim_light(&level, 1), 80);
    }

    #[test]
    fn unknown_sector_types_are_not_animated() {
        let level = lit_pair(9);
        let mut rng = fastrand::Rng::with_seed(1);
        // only the two scrollers
        assert_eq!(Environment::build(&level, &mut rng).len(), 2);
    }
}

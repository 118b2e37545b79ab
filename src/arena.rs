//! A small built-in map for the headless runner: two rooms, a glowing pit,
//! a strobing annex, a scrolling wall and a handful of monsters.

use std::f32::consts::PI;

use glam::Vec2;

use crate::config::SimConfig;
use crate::defs::{Defs, MobjKind};
use crate::error::ConfigError;
use crate::level::{AnimatedTexture, Level, LineSpec, Sector};
use crate::sim::Sim;

/// A map thing as the loader would hand it over.
#[derive(Debug, Clone, Copy)]
pub struct MapThing {
    pub doomednum: i32,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub ambush: bool,
}

const fn thing(doomednum: i32, x: f32, y: f32, angle: f32) -> MapThing {
    MapThing {
        doomednum,
        x,
        y,
        angle,
        ambush: false,
    }
}

const THINGS: [MapThing; 8] = [
    thing(1, 128.0, 512.0, 0.0),
    thing(3004, 800.0, 900.0, PI),
    thing(3001, 1200.0, 200.0, PI),
    thing(3001, 1200.0, 800.0, PI),
    thing(9, 1800.0, 500.0, PI),
    thing(3002, 1900.0, 200.0, PI),
    thing(3005, 1800.0, 800.0, PI),
    MapThing {
        doomednum: 58,
        x: 1900.0,
        y: 900.0,
        angle: PI,
        ambush: true,
    },
];

pub fn level() -> Result<Level, ConfigError> {
    let v = [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 1024.0),
        Vec2::new(1536.0, 1024.0),
        Vec2::new(1536.0, 0.0),
        Vec2::new(2048.0, 1024.0),
        Vec2::new(2048.0, 0.0),
        Vec2::new(512.0, 384.0),
        Vec2::new(512.0, 640.0),
        Vec2::new(1024.0, 640.0),
        Vec2::new(1024.0, 384.0),
    ];
    let sectors = vec![
        Sector::new(0.0, 256.0, 160),
        // glow
        Sector::new(-16.0, 256.0, 192).with_special(8),
        // synchronized strobe
        Sector::new(0.0, 192.0, 144).with_special(12),
    ];
    let lines = [
        LineSpec::wall(0, 1, 0).with_special(48, 0),
        LineSpec::wall(1, 2, 0),
        LineSpec::wall(3, 0, 0),
        LineSpec::portal(3, 2, 2, 0),
        LineSpec::wall(2, 4, 2),
        LineSpec::wall(4, 5, 2).with_special(1, 0),
        LineSpec::wall(5, 3, 2),
        LineSpec::portal(6, 7, 1, 0),
        LineSpec::portal(7, 8, 1, 0),
        LineSpec::portal(8, 9, 1, 0),
        LineSpec::portal(9, 6, 1, 0),
    ];
    let animated = vec![AnimatedTexture::new(
        vec!["NUKAGE1".into(), "NUKAGE2".into(), "NUKAGE3".into()],
        8,
    )];
    Level::new(&v, sectors, &lines, animated)
}

/// Build the arena and populate it. Unknown editor numbers are skipped.
pub fn build(config: SimConfig) -> Result<Sim, ConfigError> {
    let mut sim = Sim::new(level()?, Defs::doom()?, config);
    for t in THINGS {
        match MobjKind::from_doomednum(t.doomednum) {
            Some(kind) => {
                sim.spawn_map_thing(kind, t.x, t.y, t.angle, t.ambush);
            }
            None => log::warn!("no type for editor number {}", t.doomednum),
        }
    }
    log::info!("arena populated with {} things", sim.world.len());
    Ok(sim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::StateId;
    use crate::scheduler::Scheduler;

    #[test]
    fn sectors_resolve() {
        let level = level().unwrap();
        assert_eq!(level.sector_at(Vec2::new(100.0, 100.0)), Some(0));
        assert_eq!(level.sector_at(Vec2::new(700.0, 500.0)), Some(1));
        assert_eq!(level.sector_at(Vec2::new(1800.0, 500.0)), Some(2));
    }

    #[test]
    fn every_thing_spawns_and_the_player_is_tracked() {
        let sim = build(SimConfig::default()).unwrap();
        assert_eq!(sim.world.len() as usize, THINGS.len());
        assert!(sim.player().is_some());
    }

    #[test]
    fn monsters_wake_up_within_a_few_seconds() {
        let mut sim = build(SimConfig::default()).unwrap();
        let mut scheduler = Scheduler::new();
        for _ in 0..(35 * 5) {
            scheduler.run_tick(&mut sim);
        }
        let imps: Vec<_> = sim
            .world
            .query::<&crate::ecs::components::Kind>()
            .iter()
            .filter(|(_, k)| k.0 == MobjKind::Troop)
            .map(|(e, _)| e)
            .collect();
        assert!(imps
            .iter()
            .any(|&imp| sim.state(imp) != Some(StateId::TrooStnd) && sim.state(imp) != Some(StateId::TrooStnd2)));
    }
}

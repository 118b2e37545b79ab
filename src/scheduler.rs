//! Fixed-timestep driver. Real time goes in, whole 35 Hz ticks come out.

use crate::debug::timer::{SystemPhase, SystemTimers};
use crate::ecs::systems;
use crate::input::InputState;
use crate::sim::Sim;

pub const TICKS_PER_SECOND: u32 = 35;
/// Simulated seconds per tick.
pub const TICK_SECONDS: f64 = 1.0 / TICKS_PER_SECOND as f64;
/// Log the phase timings every this many ticks.
const TIMING_LOG_TICKS: u64 = 35 * 10;

#[derive(Debug, Default)]
pub struct Scheduler {
    pub input: InputState,
    pub timers: SystemTimers,
    /// Real time fed in so far, seconds.
    elapsed: f64,
    /// Ticks run by this scheduler; the next one is due at `ticks_run * TICK_SECONDS`.
    ticks_run: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Evaluate input once, then run every tick the elapsed time now covers.
    /// Not capped: a long stall comes back as a burst of catch-up ticks.
    /// Returns how many ticks ran.
    pub fn advance(&mut self, sim: &mut Sim, delta: f64) -> u32 {
        self.timers.begin();
        self.input.evaluate(sim, delta);
        self.timers.end(SystemPhase::Input);

        self.elapsed += delta.max(0.0);
        let mut ran = 0u32;
        while self.elapsed > self.next_tick_time() {
            self.ticks_run += 1;
            self.run_tick(sim);
            ran += 1;
        }
        if ran > 1 {
            log::debug!("catch-up burst: {} ticks for {:.1}ms", ran, delta * 1000.0);
        }
        ran
    }

    fn next_tick_time(&self) -> f64 {
        self.ticks_run as f64 * TICK_SECONDS
    }

    /// One simulation step: environment first, then texture cadence, then entities.
    pub fn run_tick(&mut self, sim: &mut Sim) {
        sim.tick += 1;

        self.timers.begin();
        let Sim {
            environment,
            level,
            rng,
            ..
        } = sim;
        environment.run(level, rng);
        self.timers.end(SystemPhase::Environment);

        self.timers.begin();
        let tick = sim.tick;
        for anim in &mut sim.level.animated {
            anim.advance(tick);
        }
        self.timers.end(SystemPhase::Textures);

        self.timers.begin();
        systems::tick_all(sim);
        sim.flush_removed();
        self.timers.end(SystemPhase::Entities);

        self.timers.begin();
        systems::publish(&mut sim.world);
        self.timers.end(SystemPhase::Publish);

        if sim.tick % TIMING_LOG_TICKS == 0 {
            log::debug!("tick {}: {}", sim.tick, self.timers.summary());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use crate::config::SimConfig;
    use crate::defs::{Defs, MobjKind};
    use crate::ecs::components::Velocity;
    use crate::fixtures;
    use crate::level::{AnimatedTexture, Level, LineSpec, Sector};

    #[test]
    fn half_a_second_is_eighteen_ticks() {
        let mut sim = fixtures::room_sim();
        let mut scheduler = Scheduler::new();
        // the first tick is due at t = 0
        assert_eq!(scheduler.advance(&mut sim, 0.5), 18);
        assert_eq!(sim.tick, 18);
        assert_eq!(scheduler.advance(&mut sim, 0.0), 0);
    }

    #[test]
    fn stalls_come_back_as_bursts() {
        let mut sim = fixtures::room_sim();
        let mut scheduler = Scheduler::new();
        scheduler.advance(&mut sim, 0.5);
        assert_eq!(scheduler.advance(&mut sim, 10.0), 350);
        assert_eq!(sim.tick, 368);
    }

    #[test]
    fn small_deltas_accumulate() {
        let mut sim = fixtures::room_sim();
        let mut scheduler = Scheduler::new();
        let total: u32 = (0..100).map(|_| scheduler.advance(&mut sim, 0.005)).sum();
        // 0.5s of real time, same as one big step
        assert_eq!(total, 18);
    }

    #[test]
    fn textures_flip_on_their_cadence() {
        let v = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 256.0),
            Vec2::new(256.0, 256.0),
            Vec2::new(256.0, 0.0),
        ];
        let lines = [
            LineSpec::wall(0, 1, 0),
            LineSpec::wall(1, 2, 0),
            LineSpec::wall(2, 3, 0),
            LineSpec::wall(3, 0, 0),
        ];
        let anim = AnimatedTexture::new(vec!["SLIME01".into(), "SLIME02".into()], 8);
        let level = Level::new(&v, vec![Sector::new(0.0, 128.0, 160)], &lines, vec![anim]).unwrap();
        let mut sim = Sim::new(level, Defs::doom().unwrap(), SimConfig::default());
        let mut scheduler = Scheduler::new();
        for _ in 0..7 {
            scheduler.run_tick(&mut sim);
        }
        assert_eq!(sim.level.animated[0].target.get(), "SLIME01");
        scheduler.run_tick(&mut sim);
        assert_eq!(sim.level.animated[0].target.get(), "SLIME02");
    }

    #[test]
    fn removals_are_flushed_at_the_end_of_the_tick() {
        let mut sim = fixtures::room_sim();
        let imp = sim.spawn_on_floor(MobjKind::Troop, 300.0, 300.0);
        sim.destroy(imp);
        Scheduler::new().run_tick(&mut sim);
        assert!(!sim.world.contains(imp));
    }

    #[test]
    fn input_is_evaluated_once_per_advance() {
        let mut sim = fixtures::room_sim();
        let player = sim.spawn_on_floor(MobjKind::Player, 300.0, 300.0);
        let mut scheduler = Scheduler::new();
        scheduler.input.intent.mouse = Vec2::new(100.0, 0.0);
        scheduler.advance(&mut sim, 1.0);
        // one turn of 100 * 0.002, whatever the tick count
        let facing = sim.facing(player).unwrap();
        let expected = std::f32::consts::TAU - 0.2;
        assert!((facing - expected).abs() < 1e-4);
        assert_eq!(sim.read::<Velocity>(player).map(|v| v.0.truncate()), Some(glam::Vec2::ZERO));
    }
}

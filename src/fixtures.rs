//! Small levels and recording collaborators for tests.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::config::SimConfig;
use crate::defs::{Defs, Sound};
use crate::hooks::{Activation, AudioSink, Side, SpecialLine, SpecialTrigger};
use crate::level::{Level, LineFlags, LineSpec, Sector};
use crate::sim::Sim;

/// One 1024x1024 room, floor 0, ceiling 128, light 160.
pub fn room() -> Level {
    let v = [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 1024.0),
        Vec2::new(1024.0, 1024.0),
        Vec2::new(1024.0, 0.0),
    ];
    let lines = [
        LineSpec::wall(0, 1, 0),
        LineSpec::wall(1, 2, 0),
        LineSpec::wall(2, 3, 0),
        LineSpec::wall(3, 0, 0),
    ];
    Level::new(&v, vec![Sector::new(0.0, 128.0, 160)], &lines, Vec::new()).unwrap()
}

/// Room A = [0,512]x[0,512] (floor 0, ceiling 128) joined at x=512 to
/// room B = [512,1024]x[0,512] with the given floor and ceiling.
/// Line 6 is the two-sided line, front side facing room B.
pub fn two_rooms(floor: f32, ceiling: f32, portal_flags: LineFlags) -> Level {
    let v = [
        Vec2::new(0.0, 0.0),
        Vec2::new(512.0, 0.0),
        Vec2::new(1024.0, 0.0),
        Vec2::new(1024.0, 512.0),
        Vec2::new(512.0, 512.0),
        Vec2::new(0.0, 512.0),
    ];
    let sectors = vec![Sector::new(0.0, 128.0, 160), Sector::new(floor, ceiling, 160)];
    let lines = [
        LineSpec::wall(0, 5, 0),
        LineSpec::wall(5, 4, 0),
        LineSpec::wall(4, 3, 1),
        LineSpec::wall(3, 2, 1),
        LineSpec::wall(2, 1, 1),
        LineSpec::wall(1, 0, 0),
        LineSpec::portal(1, 4, 1, 0).with_flags(portal_flags),
    ];
    Level::new(&v, sectors, &lines, Vec::new()).unwrap()
}

pub fn room_sim() -> Sim {
    room_sim_with(Defs::doom().unwrap())
}

pub fn room_sim_with(defs: Defs) -> Sim {
    Sim::new(room(), defs, SimConfig::default())
}

pub fn sim_in(level: Level, config: SimConfig) -> Sim {
    Sim::new(level, Defs::doom().unwrap(), config)
}

pub type SoundLog = Rc<RefCell<Vec<(Sound, Option<hecs::Entity>)>>>;
pub type SpecialLog = Rc<RefCell<Vec<(Option<hecs::Entity>, SpecialLine, Activation, Side)>>>;

pub struct RecordingAudio(pub SoundLog);

impl AudioSink for RecordingAudio {
    fn play(&mut self, sound: Sound, origin: Option<hecs::Entity>) {
        self.0.borrow_mut().push((sound, origin));
    }
}

pub struct RecordingSpecials(pub SpecialLog);

impl SpecialTrigger for RecordingSpecials {
    fn trigger(&mut self, actor: Option<hecs::Entity>, line: SpecialLine, activation: Activation, side: Side) {
        self.0.borrow_mut().push((actor, line, activation, side));
    }
}

/// Attach recording sinks and hand back their logs.
pub fn recording(sim: Sim) -> (Sim, SoundLog, SpecialLog) {
    let sounds = SoundLog::default();
    let specials = SpecialLog::default();
    let sim = sim
        .with_audio(Box::new(RecordingAudio(sounds.clone())))
        .with_specials(Box::new(RecordingSpecials(specials.clone())));
    (sim, sounds, specials)
}

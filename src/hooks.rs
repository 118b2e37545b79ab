//! Outbound collaborators: audio and level specials. The simulation only
//! produces these calls; what they do is someone else's business.

use crate::defs::Sound;

/// Line data handed to the special collaborator. Boss deaths build a fake one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialLine {
    /// Index of the real linedef, `None` for synthesized lines.
    pub line: Option<usize>,
    pub special: u16,
    pub tag: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Use,
    Walk,
    Shoot,
    /// Fired by the simulation itself (boss death).
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
}

pub trait AudioSink {
    /// `origin == None` plays at full volume everywhere.
    fn play(&mut self, sound: Sound, origin: Option<hecs::Entity>);
}

pub trait SpecialTrigger {
    fn trigger(
        &mut self,
        actor: Option<hecs::Entity>,
        line: SpecialLine,
        activation: Activation,
        side: Side,
    );
}

/// Logs sounds at trace level and drops them.
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, sound: Sound, origin: Option<hecs::Entity>) {
        log::trace!("sound {:?} from {:?}", sound, origin);
    }
}

/// Logs specials and drops them.
pub struct LogSpecials;

impl SpecialTrigger for LogSpecials {
    fn trigger(
        &mut self,
        actor: Option<hecs::Entity>,
        line: SpecialLine,
        activation: Activation,
        side: Side,
    ) {
        log::info!(
            "special {} tag {} ({:?}, {:?}) by {:?}",
            line.special,
            line.tag,
            activation,
            side,
            actor
        );
    }
}

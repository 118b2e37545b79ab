//! Simulation context: the entity world plus everything a behavior may touch.
//! Replaces module-level scratch state; behaviors get `&mut Sim` and nothing else.

use glam::{Vec2, Vec3};
use hecs::{Component, Entity, EntityBuilder};

use crate::config::{SimConfig, SKILL_NIGHTMARE};
use crate::defs::{Defs, MobjFlags, MobjKind, Sound, StateId};
use crate::ecs::components::{
    Animation, Body, Brain, Facing, Flags, Health, Kind, Position, Presentation, Removed,
    SectorRef, Velocity,
};
use crate::ecs::systems::animation;
use crate::environment::Environment;
use crate::hooks::{Activation, AudioSink, LogAudio, LogSpecials, Side, SpecialLine, SpecialTrigger};
use crate::level::blockmap::BLOCK_SIZE;
use crate::level::{Level, SectorId};
use crate::spatial::trace;
use crate::spatial::ThingGrid;

/// Bucket count for the thing grid.
const GRID_TABLE_SIZE: usize = 1024;
/// Monsters freeze this long after coming out of a teleporter.
const TELEPORT_REACTION: i32 = 18;

pub type RemovedHook = Box<dyn FnMut(Entity)>;

pub struct Sim {
    pub world: hecs::World,
    pub level: Level,
    pub defs: Defs,
    pub config: SimConfig,
    pub rng: fastrand::Rng,
    /// Ticks run so far.
    pub tick: u64,
    pub(crate) grid: ThingGrid,
    pub(crate) environment: Environment,
    /// Bumped on every state write; lets a transition notice re-entrant ones.
    pub(crate) transitions: u64,
    player: Option<Entity>,
    audio: Box<dyn AudioSink>,
    specials: Box<dyn SpecialTrigger>,
    removed_hooks: Vec<RemovedHook>,
    pending_despawn: Vec<Entity>,
}

impl Sim {
    pub fn new(level: Level, defs: Defs, config: SimConfig) -> Self {
        let mut rng = fastrand::Rng::with_seed(config.seed);
        let environment = Environment::build(&level, &mut rng);
        log::info!(
            "world built: {} sectors, {} lines, {} environment actions, {} animated textures",
            level.sectors.len(),
            level.lines.len(),
            environment.len(),
            level.animated.len()
        );
        Self {
            world: hecs::World::new(),
            level,
            defs,
            config,
            rng,
            tick: 0,
            grid: ThingGrid::new(BLOCK_SIZE, GRID_TABLE_SIZE),
            environment,
            transitions: 0,
            player: None,
            audio: Box::new(LogAudio),
            specials: Box::new(LogSpecials),
            removed_hooks: Vec::new(),
            pending_despawn: Vec::new(),
        }
    }

    pub fn with_audio(mut self, audio: Box<dyn AudioSink>) -> Self {
        self.audio = audio;
        self
    }

    pub fn with_specials(mut self, specials: Box<dyn SpecialTrigger>) -> Self {
        self.specials = specials;
        self
    }

    /// Called once per entity as it becomes inert.
    pub fn on_removed(&mut self, hook: impl FnMut(Entity) + 'static) {
        self.removed_hooks.push(Box::new(hook));
    }

    // ------------------------------------------------------------------
    // Spawning and removal
    // ------------------------------------------------------------------

    /// Create an entity in its type's spawn state. The spawn state's action
    /// does not run; the entity first acts when that state expires.
    pub fn spawn(&mut self, kind: MobjKind, pos: Vec3) -> Entity {
        let info = *self.defs.info(kind);
        let sector = self.level.sector_at(pos.truncate()).unwrap_or(0);
        let mut z = pos.z;
        if info.flags.contains(MobjFlags::SPAWNCEILING) {
            if let Some(s) = self.level.sector(sector) {
                z = s.ceiling - info.height;
            }
        }
        let pos = Vec3::new(pos.x, pos.y, z);
        let reaction_time = if self.config.skill == SKILL_NIGHTMARE {
            0
        } else {
            info.reaction_time
        };
        let tics = self.defs.state(info.spawn_state).map_or(-1, |s| s.tics);

        let mut builder = EntityBuilder::new();
        builder
            .add(Position(pos))
            .add(Velocity::default())
            .add(Facing(0.0))
            .add(Kind(kind))
            .add(Health(info.spawn_health))
            .add(Flags(info.flags))
            .add(Body {
                radius: info.radius,
                height: info.height,
            })
            .add(SectorRef(sector))
            .add(Animation {
                state: info.spawn_state,
                tics,
            })
            .add(Brain::new(reaction_time))
            .add(Presentation::new(pos, 0.0));
        let entity = self.world.spawn(builder.build());
        animation::publish_sprite(self, entity);

        if !info.flags.contains(MobjFlags::NOBLOCKMAP) {
            self.grid.insert(pos.truncate(), entity);
        }
        if kind == MobjKind::Player && self.player.is_none() {
            self.player = Some(entity);
        }
        entity
    }

    /// Spawn standing on the floor of whatever sector contains (x, y).
    pub fn spawn_on_floor(&mut self, kind: MobjKind, x: f32, y: f32) -> Entity {
        let floor = self
            .level
            .sector_at(Vec2::new(x, y))
            .and_then(|s| self.level.sector(s))
            .map_or(0.0, |s| s.floor);
        self.spawn(kind, Vec3::new(x, y, floor))
    }

    /// Spawn a thing placed by the level: on the floor, facing `angle`, with
    /// a randomized first state so groups don't animate in lockstep.
    pub fn spawn_map_thing(&mut self, kind: MobjKind, x: f32, y: f32, angle: f32, ambush: bool) -> Entity {
        let entity = self.spawn_on_floor(kind, x, y);
        self.write(entity, |f: &mut Facing| f.0 = angle);
        animation::randomize_tics(self, entity);
        if ambush {
            self.write(entity, |f: &mut Flags| f.0 |= MobjFlags::AMBUSH);
        }
        entity
    }

    /// Make an entity inert right away. It stays in the world until the end
    /// of the tick so cached references can still be resolved and rejected.
    pub fn destroy(&mut self, entity: Entity) {
        if !self.is_live(entity) {
            return;
        }
        if let (Some(pos), Some(flags)) = (self.pos(entity), self.flags(entity)) {
            if !flags.contains(MobjFlags::NOBLOCKMAP) {
                self.grid.remove(pos.truncate(), entity);
            }
        }
        let _ = self.world.insert_one(entity, Removed);
        log::debug!("removed {:?} ({:?})", entity, self.kind(entity));
        for hook in &mut self.removed_hooks {
            hook(entity);
        }
        self.pending_despawn.push(entity);
    }

    /// Despawn everything destroyed since the last flush.
    pub fn flush_removed(&mut self) {
        for entity in self.pending_despawn.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }

    pub fn is_live(&self, entity: Entity) -> bool {
        self.world.contains(entity) && self.world.get::<&Removed>(entity).is_err()
    }

    /// Live and not yet killed.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.is_live(entity) && self.health(entity).is_some_and(|h| h > 0)
    }

    /// The tracked player, if it is still in the world.
    pub fn player(&self) -> Option<Entity> {
        self.player.filter(|&p| self.is_live(p))
    }

    /// Move to the destination thing's spot on the floor of `sector`, facing
    /// the way it faces. Returns false when the destination is gone.
    pub fn teleport(&mut self, entity: Entity, dest: Entity, sector: SectorId) -> bool {
        if !self.is_live(entity) || !self.is_live(dest) {
            return false;
        }
        let (Some(to), Some(facing)) = (self.pos(dest), self.facing(dest)) else {
            return false;
        };
        let floor = self.level.sector(sector).map_or(to.z, |s| s.floor);
        self.set_position(entity, Vec3::new(to.x, to.y, floor));
        self.write(entity, |v: &mut Velocity| v.0 = Vec3::ZERO);
        self.write(entity, |f: &mut Facing| f.0 = facing);
        if self.kind(entity) != Some(MobjKind::Player) {
            self.write(entity, |b: &mut Brain| b.reaction_time = TELEPORT_REACTION);
        }
        true
    }

    // ------------------------------------------------------------------
    // Component access
    // ------------------------------------------------------------------

    /// Copy out a component. `None` for missing entities or components.
    pub fn read<T: Component + Copy>(&self, entity: Entity) -> Option<T> {
        self.world.get::<&T>(entity).ok().map(|c| *c)
    }

    /// Mutate a component in place; no-op when absent.
    pub fn write<T: Component>(&mut self, entity: Entity, f: impl FnOnce(&mut T)) {
        if let Ok(mut c) = self.world.get::<&mut T>(entity) {
            f(&mut c);
        }
    }

    pub fn pos(&self, entity: Entity) -> Option<Vec3> {
        self.read::<Position>(entity).map(|p| p.0)
    }

    pub fn facing(&self, entity: Entity) -> Option<f32> {
        self.read::<Facing>(entity).map(|f| f.0)
    }

    pub fn kind(&self, entity: Entity) -> Option<MobjKind> {
        self.read::<Kind>(entity).map(|k| k.0)
    }

    pub fn health(&self, entity: Entity) -> Option<i32> {
        self.read::<Health>(entity).map(|h| h.0)
    }

    pub fn flags(&self, entity: Entity) -> Option<MobjFlags> {
        self.read::<Flags>(entity).map(|f| f.0)
    }

    pub fn body(&self, entity: Entity) -> Option<Body> {
        self.read::<Body>(entity)
    }

    pub fn brain(&self, entity: Entity) -> Option<Brain> {
        self.read::<Brain>(entity)
    }

    pub fn state(&self, entity: Entity) -> Option<StateId> {
        self.read::<Animation>(entity).map(|a| a.state)
    }

    pub fn set_flags(&mut self, entity: Entity, add: MobjFlags, clear: MobjFlags) {
        self.write(entity, |f: &mut Flags| {
            f.0.remove(clear);
            f.0.insert(add);
        });
    }

    /// Current target, but only if it still exists.
    pub fn target(&self, entity: Entity) -> Option<Entity> {
        self.brain(entity)
            .and_then(|b| b.target)
            .filter(|&t| self.is_live(t))
    }

    /// Floor and ceiling of the sector the entity stands in.
    pub fn floor_ceiling(&self, entity: Entity) -> Option<(f32, f32)> {
        let sector = self.read::<SectorRef>(entity)?;
        self.level.sector(sector.0).map(|s| (s.floor, s.ceiling))
    }

    /// Write-through position update: keeps the thing grid and the sector
    /// back-reference in step.
    pub fn set_position(&mut self, entity: Entity, to: Vec3) {
        let Some(from) = self.pos(entity) else {
            return;
        };
        let linked = self
            .flags(entity)
            .is_some_and(|f| !f.contains(MobjFlags::NOBLOCKMAP));
        if linked && self.is_live(entity) {
            self.grid.relink(from.truncate(), to.truncate(), entity);
        }
        self.write(entity, |p: &mut Position| p.0 = to);
        if let Some(sector) = self.level.sector_at(to.truncate()) {
            self.write(entity, |s: &mut SectorRef| s.0 = sector);
        }
    }

    /// Full rebuild of the thing grid from current positions.
    pub fn rebuild_grid(&mut self) {
        self.grid.clear();
        for (entity, (pos, flags)) in self
            .world
            .query::<(&Position, &Flags)>()
            .without::<&Removed>()
            .iter()
        {
            if !flags.0.contains(MobjFlags::NOBLOCKMAP) {
                self.grid.insert(pos.0.truncate(), entity);
            }
        }
    }

    /// Live entities of one type, the caller included.
    pub fn count_kind(&self, kind: MobjKind) -> usize {
        self.world
            .query::<&Kind>()
            .without::<&Removed>()
            .iter()
            .filter(|(_, k)| k.0 == kind)
            .count()
    }

    // ------------------------------------------------------------------
    // Queries and outbound calls
    // ------------------------------------------------------------------

    /// Eye-to-body sight between two entities.
    pub fn sight(&self, from: Entity, to: Entity) -> bool {
        let (Some(a), Some(b)) = (self.pos(from), self.pos(to)) else {
            return false;
        };
        let (Some(ba), Some(bb)) = (self.body(from), self.body(to)) else {
            return false;
        };
        trace::line_of_sight(&self.level, a, ba.height, b, bb.height)
    }

    pub fn distance(&self, a: Entity, b: Entity) -> Option<f32> {
        Some(self.pos(a)?.distance(self.pos(b)?))
    }

    pub fn play(&mut self, sound: Sound, origin: Option<Entity>) {
        if sound != Sound::None {
            self.audio.play(sound, origin);
        }
    }

    pub fn trigger(&mut self, actor: Option<Entity>, line: SpecialLine, activation: Activation, side: Side) {
        self.specials.trigger(actor, line, activation, side);
    }

    pub fn fast_monsters(&self) -> bool {
        self.config.fast_monsters()
    }
}

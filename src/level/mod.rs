//! Already-parsed level geometry: sectors, linedefs, animated textures and
//! the static line blockmap used by trace queries.

pub mod blockmap;

use bitflags::bitflags;
use glam::Vec2;

use crate::error::ConfigError;
use crate::publish::Published;
use blockmap::Blockmap;

pub type SectorId = usize;
pub type LineId = usize;

/// Highest ledge a walker climbs without jumping.
pub const MAX_STEP: f32 = 24.0;

bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct LineFlags: u16 {
        /// Blocks players and monsters.
        const BLOCKING        = 0x0001;
        const BLOCK_MONSTERS  = 0x0002;
        const TWO_SIDED       = 0x0004;
        const DONT_PEG_TOP    = 0x0008;
        const DONT_PEG_BOTTOM = 0x0010;
        const SECRET          = 0x0020;
        const SOUND_BLOCK     = 0x0040;
        const DONT_DRAW       = 0x0080;
        const MAPPED          = 0x0100;
    }
}

#[derive(Debug)]
pub struct Sector {
    pub floor: f32,
    pub ceiling: f32,
    /// Light level from the map; animators use it as their bright value.
    pub base_light: i16,
    pub light: Published<i16>,
    /// Sector type code (light animations, damage floors, ...).
    pub special: u16,
    pub tag: u16,
}

impl Sector {
    pub fn new(floor: f32, ceiling: f32, light: i16) -> Self {
        Self {
            floor,
            ceiling,
            base_light: light,
            light: Published::new(light),
            special: 0,
            tag: 0,
        }
    }

    pub fn with_special(mut self, special: u16) -> Self {
        self.special = special;
        self
    }

    pub fn with_tag(mut self, tag: u16) -> Self {
        self.tag = tag;
        self
    }
}

/// Linedef as it arrives from the loader: vertex and sector indices.
#[derive(Debug, Clone, Copy)]
pub struct LineSpec {
    pub v1: usize,
    pub v2: usize,
    pub flags: LineFlags,
    pub special: u16,
    pub tag: u16,
    pub front: SectorId,
    pub back: Option<SectorId>,
}

impl LineSpec {
    pub fn wall(v1: usize, v2: usize, front: SectorId) -> Self {
        Self {
            v1,
            v2,
            flags: LineFlags::BLOCKING,
            special: 0,
            tag: 0,
            front,
            back: None,
        }
    }

    pub fn portal(v1: usize, v2: usize, front: SectorId, back: SectorId) -> Self {
        Self {
            v1,
            v2,
            flags: LineFlags::TWO_SIDED,
            special: 0,
            tag: 0,
            front,
            back: Some(back),
        }
    }

    pub fn with_special(mut self, special: u16, tag: u16) -> Self {
        self.special = special;
        self.tag = tag;
        self
    }

    pub fn with_flags(mut self, flags: LineFlags) -> Self {
        self.flags |= flags;
        self
    }
}

/// Oriented boundary. The front side is on the right of `a -> b`.
#[derive(Debug)]
pub struct Linedef {
    pub a: Vec2,
    pub b: Vec2,
    pub flags: LineFlags,
    pub special: u16,
    pub tag: u16,
    pub front: SectorId,
    pub back: Option<SectorId>,
    /// Texture scroll, driven by scrolling-wall specials.
    pub x_offset: Published<f32>,
}

impl Linedef {
    pub fn direction(&self) -> Vec2 {
        self.b - self.a
    }

    pub fn two_sided(&self) -> bool {
        self.back.is_some()
    }

    /// One-sided lines always block; flags decide the rest.
    pub fn blocks_monsters(&self) -> bool {
        !self.two_sided()
            || self
                .flags
                .intersects(LineFlags::BLOCKING | LineFlags::BLOCK_MONSTERS)
    }

    pub fn blocks_players(&self) -> bool {
        !self.two_sided() || self.flags.contains(LineFlags::BLOCKING)
    }

    /// Signed distance of `p` from the line; positive on the front side.
    pub fn side_distance(&self, p: Vec2) -> f32 {
        let d = self.direction();
        let len = d.length();
        if len == 0.0 {
            return 0.0;
        }
        (d.y * (p.x - self.a.x) - d.x * (p.y - self.a.y)) / len
    }

    /// Sector on the far side for something standing on `from_front`.
    pub fn sector_beyond(&self, from_front: bool) -> Option<SectorId> {
        if from_front {
            self.back
        } else {
            Some(self.front)
        }
    }
}

/// Flipbook texture advanced on `tick % speed == 0`.
#[derive(Debug)]
pub struct AnimatedTexture {
    pub frames: Vec<String>,
    pub speed: u64,
    pub current: usize,
    pub target: Published<String>,
}

impl AnimatedTexture {
    pub fn new(frames: Vec<String>, speed: u64) -> Self {
        let first = frames.first().cloned().unwrap_or_default();
        Self {
            frames,
            speed,
            current: 0,
            target: Published::new(first),
        }
    }

    pub fn advance(&mut self, tick: u64) {
        if self.frames.is_empty() || self.speed == 0 || tick % self.speed != 0 {
            return;
        }
        self.current = (self.current + 1) % self.frames.len();
        self.target.set(self.frames[self.current].clone());
    }
}

pub struct Level {
    pub sectors: Vec<Sector>,
    pub lines: Vec<Linedef>,
    pub animated: Vec<AnimatedTexture>,
    pub blockmap: Blockmap,
    neighbours: Vec<Vec<SectorId>>,
}

impl Level {
    pub fn new(
        vertices: &[Vec2],
        sectors: Vec<Sector>,
        specs: &[LineSpec],
        animated: Vec<AnimatedTexture>,
    ) -> Result<Self, ConfigError> {
        let mut lines = Vec::with_capacity(specs.len());
        for (i, spec) in specs.iter().enumerate() {
            let a = *vertices.get(spec.v1).ok_or(ConfigError::MissingVertex {
                line: i,
                vertex: spec.v1,
            })?;
            let b = *vertices.get(spec.v2).ok_or(ConfigError::MissingVertex {
                line: i,
                vertex: spec.v2,
            })?;
            for sector in std::iter::once(spec.front).chain(spec.back) {
                if sector >= sectors.len() {
                    return Err(ConfigError::MissingSector { line: i, sector });
                }
            }
            let mut flags = spec.flags;
            flags.set(LineFlags::TWO_SIDED, spec.back.is_some());
            lines.push(Linedef {
                a,
                b,
                flags,
                special: spec.special,
                tag: spec.tag,
                front: spec.front,
                back: spec.back,
                x_offset: Published::new(0.0),
            });
        }
        for (i, anim) in animated.iter().enumerate() {
            if anim.frames.is_empty() || anim.speed == 0 {
                return Err(ConfigError::BadAnimation(i));
            }
        }

        let mut neighbours = vec![Vec::new(); sectors.len()];
        for line in &lines {
            if let Some(back) = line.back {
                if back != line.front {
                    push_unique(&mut neighbours[line.front], back);
                    push_unique(&mut neighbours[back], line.front);
                }
            }
        }

        let blockmap = Blockmap::build(&lines);
        Ok(Self {
            sectors,
            lines,
            animated,
            blockmap,
            neighbours,
        })
    }

    pub fn sector(&self, id: SectorId) -> Option<&Sector> {
        self.sectors.get(id)
    }

    pub fn neighbours(&self, id: SectorId) -> &[SectorId] {
        self.neighbours.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Even-odd test against each sector's boundary lines. Inner sectors
    /// punch holes in the outer one because the shared lines count for both.
    pub fn sector_at(&self, p: Vec2) -> Option<SectorId> {
        let mut crossings = vec![0u32; self.sectors.len()];
        for line in &self.lines {
            let (a, b) = (line.a, line.b);
            if (a.y > p.y) == (b.y > p.y) {
                continue;
            }
            let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if x <= p.x {
                continue;
            }
            crossings[line.front] += 1;
            if let Some(back) = line.back {
                if back != line.front {
                    crossings[back] += 1;
                }
            }
        }
        crossings.iter().position(|c| c % 2 == 1)
    }
}

fn push_unique(list: &mut Vec<SectorId>, id: SectorId) {
    if !list.contains(&id) {
        list.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> Level {
        // [0,128]x[0,128] | [128,256]x[0,128]
        let v = [
            Vec2::new(0.0, 0.0),
            Vec2::new(128.0, 0.0),
            Vec2::new(256.0, 0.0),
            Vec2::new(256.0, 128.0),
            Vec2::new(128.0, 128.0),
            Vec2::new(0.0, 128.0),
        ];
        let sectors = vec![Sector::new(0.0, 128.0, 160), Sector::new(16.0, 128.0, 80)];
        let lines = [
            LineSpec::wall(0, 5, 0),
            LineSpec::wall(5, 4, 0),
            LineSpec::wall(4, 3, 1),
            LineSpec::wall(3, 2, 1),
            LineSpec::wall(2, 1, 1),
            LineSpec::wall(1, 0, 0),
            LineSpec::portal(1, 4, 1, 0),
        ];
        Level::new(&v, sectors, &lines, Vec::new()).unwrap()
    }

    #[test]
    fn point_in_sector() {
        let level = two_rooms();
        assert_eq!(level.sector_at(Vec2::new(64.0, 64.0)), Some(0));
        assert_eq!(level.sector_at(Vec2::new(200.0, 30.0)), Some(1));
        assert_eq!(level.sector_at(Vec2::new(400.0, 30.0)), None);
    }

    #[test]
    fn neighbours_come_from_two_sided_lines() {
        let level = two_rooms();
        assert_eq!(level.neighbours(0), &[1]);
        assert_eq!(level.neighbours(1), &[0]);
    }

    #[test]
    fn blocking_is_derived() {
        let level = two_rooms();
        assert!(level.lines[0].blocks_monsters());
        assert!(!level.lines[6].blocks_monsters());
        assert!(level.lines[6].flags.contains(LineFlags::TWO_SIDED));
    }

    #[test]
    fn front_side_is_right_of_direction() {
        let level = two_rooms();
        // portal runs (128,0) -> (128,128); right of that is +x, sector 1
        let portal = &level.lines[6];
        assert!(portal.side_distance(Vec2::new(200.0, 64.0)) > 0.0);
        assert!(portal.side_distance(Vec2::new(64.0, 64.0)) < 0.0);
    }

    #[test]
    fn bad_indices_are_config_errors() {
        let v = [Vec2::ZERO, Vec2::X];
        let err = Level::new(&v, vec![Sector::new(0.0, 64.0, 100)], &[LineSpec::wall(0, 5, 0)], Vec::new());
        assert!(matches!(err, Err(ConfigError::MissingVertex { .. })));
        let err = Level::new(&v, vec![Sector::new(0.0, 64.0, 100)], &[LineSpec::wall(0, 1, 3)], Vec::new());
        assert!(matches!(err, Err(ConfigError::MissingSector { .. })));
    }

    #[test]
    fn animated_texture_cadence() {
        let mut anim = AnimatedTexture::new(vec!["A".into(), "B".into(), "C".into()], 8);
        for tick in 1..=16 {
            anim.advance(tick);
        }
        assert_eq!(anim.target.get(), "C");
        assert_eq!(anim.target.version(), 2);
    }
}

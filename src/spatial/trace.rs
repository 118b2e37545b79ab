//! Swept-circle tracing and sight checks against the level and the thing grid.
//! Queries never fail; an empty hit list means nothing is in the way.

use glam::{Vec2, Vec3};

use super::{ThingGrid, MAX_THING_RADIUS};
use crate::ecs::components::{Body, Position};
use crate::level::{Level, LineId, Linedef};

/// Fraction of the eye height above the feet used for sight checks.
const EYE_HEIGHT: f32 = 0.75;

/// One candidate collision along a sweep. `frac` is in [0, 1] of the delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    Thing { entity: hecs::Entity, frac: f32 },
    /// `from_front` is the side the sweep started on.
    Line { line: LineId, frac: f32, from_front: bool },
}

impl Hit {
    pub fn frac(&self) -> f32 {
        match *self {
            Hit::Thing { frac, .. } | Hit::Line { frac, .. } => frac,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Hit::Thing { .. } => 0,
            Hit::Line { .. } => 1,
        }
    }
}

/// Sweep a circle of `radius` from `origin` by `delta` and visit every thing
/// and line it touches, nearest first (things before lines on ties). The
/// visitor returns `false` to stop probing.
///
/// Things and lines the circle already overlaps at the start only count when
/// the sweep moves further into them, so a mover can always back out.
pub fn trace_move(
    level: &Level,
    grid: &ThingGrid,
    world: &hecs::World,
    origin: Vec3,
    delta: Vec2,
    radius: f32,
    mut visitor: impl FnMut(&Hit) -> bool,
) {
    let o = origin.truncate();
    let end = o + delta;
    let mut hits = Vec::new();

    let pad = Vec2::splat(radius + MAX_THING_RADIUS);
    for entity in grid.query_box(o.min(end) - pad, o.max(end) + pad) {
        let (Ok(pos), Ok(body)) = (world.get::<&Position>(entity), world.get::<&Body>(entity)) else {
            continue;
        };
        if let Some(frac) = sweep_point(o, delta, pos.0.truncate(), radius + body.radius) {
            hits.push(Hit::Thing { entity, frac });
        }
    }

    let pad = Vec2::splat(radius);
    for line in level.blockmap.lines_in_box(o.min(end) - pad, o.max(end) + pad) {
        if let Some((frac, from_front)) = sweep_line(&level.lines[line], o, delta, radius) {
            hits.push(Hit::Line { line, frac, from_front });
        }
    }

    hits.sort_by(|a, b| a.frac().total_cmp(&b.frac()).then(a.rank().cmp(&b.rank())));
    for hit in &hits {
        if !visitor(hit) {
            break;
        }
    }
}

/// Earliest t in [0, 1] at which a point moving `o + t*d` comes within `r` of `c`.
fn sweep_point(o: Vec2, d: Vec2, c: Vec2, r: f32) -> Option<f32> {
    let a = d.length_squared();
    if a == 0.0 {
        return None;
    }
    let f = o - c;
    let b = 2.0 * f.dot(d);
    let cc = f.length_squared() - r * r;
    if cc <= 0.0 {
        return (b < 0.0).then_some(0.0);
    }
    let disc = b * b - 4.0 * a * cc;
    if disc < 0.0 {
        return None;
    }
    let t = (-b - disc.sqrt()) / (2.0 * a);
    (0.0..=1.0).contains(&t).then_some(t)
}

fn closest_point(line: &Linedef, p: Vec2) -> Vec2 {
    let seg = line.direction();
    let len2 = seg.length_squared();
    if len2 == 0.0 {
        return line.a;
    }
    let u = ((p - line.a).dot(seg) / len2).clamp(0.0, 1.0);
    line.a + seg * u
}

/// First contact of a swept circle with a segment: the offset face or either endpoint.
fn sweep_line(line: &Linedef, o: Vec2, d: Vec2, radius: f32) -> Option<(f32, bool)> {
    let seg = line.direction();
    let len2 = seg.length_squared();
    if len2 == 0.0 || d == Vec2::ZERO {
        return None;
    }
    let s0 = line.side_distance(o);
    let ds = line.side_distance(o + d) - s0;
    let from_front = s0 >= 0.0;

    let gap = o - closest_point(line, o);
    if gap.length_squared() <= radius * radius {
        let closing = if gap == Vec2::ZERO { ds != 0.0 } else { gap.dot(d) < 0.0 };
        return closing.then_some((0.0, from_front));
    }

    let mut best: Option<f32> = None;
    let side = if from_front { 1.0 } else { -1.0 };
    if ds * side < 0.0 {
        let t = (side * radius - s0) / ds;
        if (0.0..=1.0).contains(&t) {
            let u = (o + d * t - line.a).dot(seg) / len2;
            if (0.0..=1.0).contains(&u) {
                best = Some(t);
            }
        }
    }
    if radius > 0.0 {
        for end in [line.a, line.b] {
            if let Some(t) = sweep_point(o, d, end, radius) {
                best = Some(best.map_or(t, |b| b.min(t)));
            }
        }
    }
    best.map(|t| (t, from_front))
}

/// Where the segment `from -> to` crosses `line`, as (fraction, started on front).
pub fn segment_crossing(line: &Linedef, from: Vec2, to: Vec2) -> Option<(f32, bool)> {
    let s0 = line.side_distance(from);
    let s1 = line.side_distance(to);
    if (s0 > 0.0 && s1 > 0.0) || (s0 < 0.0 && s1 < 0.0) || s0 == s1 {
        return None;
    }
    let frac = s0 / (s0 - s1);
    let seg = line.direction();
    let u = (from + (to - from) * frac - line.a).dot(seg) / seg.length_squared();
    (0.0..=1.0).contains(&u).then_some((frac, s0 >= 0.0))
}

/// Boundary occlusion plus vertical check, from the eye of the looker to any
/// part of the target's body. Slopes narrow at every two-sided line whose
/// opening is smaller than the sectors on either side.
pub fn line_of_sight(level: &Level, from: Vec3, from_height: f32, to: Vec3, to_height: f32) -> bool {
    let a = from.truncate();
    let b = to.truncate();
    if a == b {
        return true;
    }
    let eye = from.z + from_height * EYE_HEIGHT;
    let mut top_slope = to.z + to_height - eye;
    let mut bottom_slope = to.z - eye;

    let mut crossings: Vec<(f32, &Linedef)> = level
        .blockmap
        .lines_in_box(a.min(b), a.max(b))
        .into_iter()
        .filter_map(|id| {
            let line = &level.lines[id];
            segment_crossing(line, a, b).map(|(frac, _)| (frac, line))
        })
        .collect();
    crossings.sort_by(|x, y| x.0.total_cmp(&y.0));

    for (frac, line) in crossings {
        let Some(back) = line.back else {
            return false;
        };
        let (front, back) = (&level.sectors[line.front], &level.sectors[back]);
        let open_top = front.ceiling.min(back.ceiling);
        let open_bottom = front.floor.max(back.floor);
        if open_bottom >= open_top {
            return false;
        }
        if frac <= 0.0 {
            continue;
        }
        if front.floor != back.floor {
            bottom_slope = bottom_slope.max((open_bottom - eye) / frac);
        }
        if front.ceiling != back.ceiling {
            top_slope = top_slope.min((open_top - eye) / frac);
        }
        if top_slope <= bottom_slope {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{LineSpec, Sector};

    /// Room [0,256]x[0,128] split at x=128 by a two-sided line into a second
    /// sector with the given floor and ceiling.
    fn split_room(floor: f32, ceiling: f32) -> Level {
        let v = [
            Vec2::new(0.0, 0.0),
            Vec2::new(128.0, 0.0),
            Vec2::new(256.0, 0.0),
            Vec2::new(256.0, 128.0),
            Vec2::new(128.0, 128.0),
            Vec2::new(0.0, 128.0),
        ];
        let sectors = vec![Sector::new(0.0, 128.0, 160), Sector::new(floor, ceiling, 160)];
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

    fn spawn_body(world: &mut hecs::World, grid: &mut ThingGrid, at: Vec3, radius: f32) -> hecs::Entity {
        let e = world.spawn((Position(at), Body { radius, height: 56.0 }));
        grid.insert(at.truncate(), e);
        e
    }

    #[test]
    fn hits_come_nearest_first() {
        let level = split_room(0.0, 128.0);
        let mut world = hecs::World::new();
        let mut grid = ThingGrid::new(128.0, 64);
        let far = spawn_body(&mut world, &mut grid, Vec3::new(200.0, 64.0, 0.0), 20.0);
        let near = spawn_body(&mut world, &mut grid, Vec3::new(90.0, 64.0, 0.0), 20.0);

        let mut seen = Vec::new();
        trace_move(&level, &grid, &world, Vec3::new(20.0, 64.0, 0.0), Vec2::new(220.0, 0.0), 16.0, |hit| {
            seen.push(*hit);
            true
        });

        let order: Vec<_> = seen
            .iter()
            .map(|h| match h {
                Hit::Thing { entity, .. } if *entity == near => "near",
                Hit::Thing { entity, .. } if *entity == far => "far",
                Hit::Line { line: 6, .. } => "portal",
                Hit::Line { .. } => "wall",
                _ => "?",
            })
            .collect();
        assert_eq!(order, vec!["near", "portal", "far", "wall"]);
        assert!(seen.windows(2).all(|w| w[0].frac() <= w[1].frac()));
    }

    #[test]
    fn visitor_can_stop_early() {
        let level = split_room(0.0, 128.0);
        let world = hecs::World::new();
        let grid = ThingGrid::new(128.0, 64);
        let mut count = 0;
        trace_move(&level, &grid, &world, Vec3::new(20.0, 64.0, 0.0), Vec2::new(300.0, 0.0), 16.0, |_| {
            count += 1;
            false
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn empty_sweep_reports_nothing() {
        let level = split_room(0.0, 128.0);
        let world = hecs::World::new();
        let grid = ThingGrid::new(128.0, 64);
        let mut count = 0;
        trace_move(&level, &grid, &world, Vec3::new(40.0, 64.0, 0.0), Vec2::new(8.0, 0.0), 16.0, |_| {
            count += 1;
            true
        });
        assert_eq!(count, 0);
    }

    #[test]
    fn backing_out_of_an_overlap_is_free() {
        let level = split_room(0.0, 128.0);
        let world = hecs::World::new();
        let grid = ThingGrid::new(128.0, 64);
        // radius 16 at x=10 already overlaps the west wall
        let mut into = 0;
        trace_move(&level, &grid, &world, Vec3::new(10.0, 64.0, 0.0), Vec2::new(-4.0, 0.0), 16.0, |_| {
            into += 1;
            true
        });
        let mut away = 0;
        trace_move(&level, &grid, &world, Vec3::new(10.0, 64.0, 0.0), Vec2::new(4.0, 0.0), 16.0, |_| {
            away += 1;
            true
        });
        assert_eq!(into, 1);
        assert_eq!(away, 0);
    }

    #[test]
    fn sight_through_open_portal() {
        let level = split_room(0.0, 128.0);
        assert!(line_of_sight(&level, Vec3::new(20.0, 64.0, 0.0), 56.0, Vec3::new(230.0, 64.0, 0.0), 56.0));
    }

    #[test]
    fn closed_portal_blocks_sight() {
        let level = split_room(64.0, 64.0);
        assert!(!line_of_sight(&level, Vec3::new(20.0, 64.0, 0.0), 56.0, Vec3::new(230.0, 64.0, 64.0), 56.0));
    }

    #[test]
    fn high_ledge_hides_target_below_it() {
        // second sector is a deep pit seen over a raised lip
        let level = split_room(-512.0, 128.0);
        let eye_level = Vec3::new(20.0, 64.0, 0.0);
        assert!(!line_of_sight(&level, eye_level, 56.0, Vec3::new(250.0, 64.0, -512.0), 56.0));
        assert!(line_of_sight(&level, eye_level, 56.0, Vec3::new(140.0, 64.0, -40.0), 56.0));
    }

    #[test]
    fn walls_block_sight() {
        let level = split_room(0.0, 128.0);
        assert!(!line_of_sight(&level, Vec3::new(20.0, 64.0, 0.0), 56.0, Vec3::new(20.0, 400.0, 0.0), 56.0));
    }
}

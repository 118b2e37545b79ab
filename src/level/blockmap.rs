use glam::Vec2;

use super::{LineId, Linedef};

/// Classic blockmap cell edge in map units.
pub const BLOCK_SIZE: f32 = 128.0;

/// Static grid of line indices. Built once; lines never move.
#[derive(Debug, Default)]
pub struct Blockmap {
    origin: Vec2,
    width: i32,
    height: i32,
    cells: Vec<Vec<LineId>>,
}

impl Blockmap {
    pub fn build(lines: &[Linedef]) -> Self {
        if lines.is_empty() {
            return Self::default();
        }
        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        for line in lines {
            min = min.min(line.a).min(line.b);
            max = max.max(line.a).max(line.b);
        }
        // one cell of slack so movers hugging the outer wall still land in the grid
        let origin = min - Vec2::splat(BLOCK_SIZE);
        let width = ((max.x - origin.x) / BLOCK_SIZE) as i32 + 2;
        let height = ((max.y - origin.y) / BLOCK_SIZE) as i32 + 2;

        let mut map = Self {
            origin,
            width,
            height,
            cells: vec![Vec::new(); (width * height) as usize],
        };
        for (id, line) in lines.iter().enumerate() {
            let lo = line.a.min(line.b);
            let hi = line.a.max(line.b);
            map.for_cells(lo, hi, |cell| cell.push(id));
        }
        map
    }

    fn cell_coords(&self, p: Vec2) -> (i32, i32) {
        let local = (p - self.origin) / BLOCK_SIZE;
        (
            (local.x.floor() as i32).clamp(0, self.width - 1),
            (local.y.floor() as i32).clamp(0, self.height - 1),
        )
    }

    fn for_cells(&mut self, lo: Vec2, hi: Vec2, mut f: impl FnMut(&mut Vec<LineId>)) {
        let (x0, y0) = self.cell_coords(lo);
        let (x1, y1) = self.cell_coords(hi);
        for y in y0..=y1 {
            for x in x0..=x1 {
                f(&mut self.cells[(y * self.width + x) as usize]);
            }
        }
    }

    /// Every line with a cell overlapping the box, deduplicated, in index order.
    pub fn lines_in_box(&self, lo: Vec2, hi: Vec2) -> Vec<LineId> {
        let mut out = Vec::new();
        if self.cells.is_empty() {
            return out;
        }
        let (x0, y0) = self.cell_coords(lo);
        let (x1, y1) = self.cell_coords(hi);
        for y in y0..=y1 {
            for x in x0..=x1 {
                out.extend_from_slice(&self.cells[(y * self.width + x) as usize]);
            }
        }
        out.sort_unstable();
        out.dedup();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{Level, LineSpec, Sector};

    #[test]
    fn box_query_finds_nearby_lines_only() {
        let v = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1024.0),
            Vec2::new(1024.0, 0.0),
            Vec2::new(1024.0, 1024.0),
        ];
        let level = Level::new(
            &v,
            vec![Sector::new(0.0, 128.0, 160)],
            &[LineSpec::wall(0, 1, 0), LineSpec::wall(3, 2, 0)],
            Vec::new(),
        )
        .unwrap();
        let near_left = level
            .blockmap
            .lines_in_box(Vec2::new(10.0, 500.0), Vec2::new(40.0, 520.0));
        assert_eq!(near_left, vec![0]);
        let both = level
            .blockmap
            .lines_in_box(Vec2::new(-10.0, 0.0), Vec2::new(1100.0, 10.0));
        assert_eq!(both, vec![0, 1]);
    }
}

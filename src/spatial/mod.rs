pub mod trace;

use glam::Vec2;

/// Largest entity radius in the built-in tables (spider mastermind).
/// Box queries pad by this so big bodies straddling a cell edge are found.
pub const MAX_THING_RADIUS: f32 = 128.0;

/// Spatial hash over entity origins, kept write-through by the movement code.
///
/// Cell size matches the line blockmap so one query box covers both.
/// Uses multiplicative hash for even distribution; two cells may share a
/// bucket, so callers must tolerate duplicates and foreign entities.
pub struct ThingGrid {
    inv_cell_size: f32,
    table_size: usize,
    /// Each bucket holds entity handles. Pre-allocated, kept across ticks.
    buckets: Vec<Vec<hecs::Entity>>,
}

impl ThingGrid {
    pub fn new(cell_size: f32, table_size: usize) -> Self {
        let mut buckets = Vec::with_capacity(table_size);
        for _ in 0..table_size {
            // Pre-allocate each bucket to avoid allocs during relinks.
            buckets.push(Vec::with_capacity(8));
        }
        Self {
            inv_cell_size: 1.0 / cell_size,
            table_size,
            buckets,
        }
    }

    /// Clear all buckets. Call before a full rebuild.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear(); // Keeps allocation.
        }
    }

    pub fn insert(&mut self, pos: Vec2, entity: hecs::Entity) {
        let hash = self.hash(pos);
        self.buckets[hash].push(entity);
    }

    /// `pos` must be the position the entity was inserted with.
    pub fn remove(&mut self, pos: Vec2, entity: hecs::Entity) {
        let hash = self.hash(pos);
        let bucket = &mut self.buckets[hash];
        if let Some(i) = bucket.iter().position(|e| *e == entity) {
            bucket.swap_remove(i);
        }
    }

    pub fn relink(&mut self, old: Vec2, new: Vec2, entity: hecs::Entity) {
        if self.hash(old) == self.hash(new) {
            return;
        }
        self.remove(old, entity);
        self.insert(new, entity);
    }

    /// Every entity whose origin cell overlaps `[lo, hi]`, deduplicated.
    pub fn query_box(&self, lo: Vec2, hi: Vec2) -> Vec<hecs::Entity> {
        let (x0, y0) = self.cell_coords(lo);
        let (x1, y1) = self.cell_coords(hi);
        let mut out = Vec::new();
        let mut seen = vec![false; self.table_size];
        for cy in y0..=y1 {
            for cx in x0..=x1 {
                let hash = self.hash_cell(cx, cy);
                if seen[hash] {
                    continue;
                }
                seen[hash] = true;
                out.extend_from_slice(&self.buckets[hash]);
            }
        }
        out
    }

    fn cell_coords(&self, pos: Vec2) -> (i32, i32) {
        let cx = (pos.x * self.inv_cell_size).floor() as i32;
        let cy = (pos.y * self.inv_cell_size).floor() as i32;
        (cx, cy)
    }

    fn hash(&self, pos: Vec2) -> usize {
        let (cx, cy) = self.cell_coords(pos);
        self.hash_cell(cx, cy)
    }

    fn hash_cell(&self, cx: i32, cy: i32) -> usize {
        // Prime multipliers keep neighbouring map cells in different buckets.
        let h = (cx as u32).wrapping_mul(73856093) ^ (cy as u32).wrapping_mul(19349663);
        (h as usize) % self.table_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_query() {
        let mut world = hecs::World::new();
        let a = world.spawn(());
        let b = world.spawn(());
        let c = world.spawn(());

        let mut grid = ThingGrid::new(128.0, 256);
        grid.insert(Vec2::new(100.0, 100.0), a);
        grid.insert(Vec2::new(110.0, 105.0), b);
        grid.insert(Vec2::new(2900.0, 2900.0), c);

        let found = grid.query_box(Vec2::new(90.0, 90.0), Vec2::new(120.0, 120.0));
        assert!(found.contains(&a));
        assert!(found.contains(&b));
    }

    #[test]
    fn relink_moves_between_cells() {
        let mut world = hecs::World::new();
        let a = world.spawn(());
        let mut grid = ThingGrid::new(128.0, 256);
        grid.insert(Vec2::new(50.0, 50.0), a);
        grid.relink(Vec2::new(50.0, 50.0), Vec2::new(650.0, 50.0), a);

        let old = grid.query_box(Vec2::new(40.0, 40.0), Vec2::new(60.0, 60.0));
        assert!(!old.contains(&a));
        let new = grid.query_box(Vec2::new(640.0, 40.0), Vec2::new(660.0, 60.0));
        assert!(new.contains(&a));
    }

    #[test]
    fn clear_and_reuse() {
        let mut world = hecs::World::new();
        let a = world.spawn(());
        let mut grid = ThingGrid::new(128.0, 256);
        grid.insert(Vec2::new(50.0, 50.0), a);
        grid.clear();

        let found = grid.query_box(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        assert!(found.is_empty());
    }
}

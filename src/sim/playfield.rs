//! Live item collection: spawn, move, cull, overlap

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::state::{Item, ItemSpec};
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playfield {
    /// Live items (sorted by id)
    pub items: Vec<Item>,
    next_id: u32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl Playfield {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.next_id = 1;
    }

    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Place a new item at the right edge at a random height
    pub fn spawn(&mut self, spec: &ItemSpec, speed: i32, rng: &mut impl RandomSource) -> u32 {
        let y = rng.int_between(ITEM_SPAWN_Y_MIN, ITEM_SPAWN_Y_MAX) as f32;
        self.spawn_at(spec, Vec2::new(PLAYFIELD_WIDTH, y), speed)
    }

    pub fn spawn_at(&mut self, spec: &ItemSpec, pos: Vec2, speed: i32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Item::from_spec(id, spec, pos, speed));
        id
    }

    /// Move every item by its velocity
    pub fn advance(&mut self, dt_ms: f32) {
        let dt = dt_ms / 1000.0;
        for item in &mut self.items {
            item.pos += item.vel * dt;
        }
    }

    /// Apply a new horizontal speed to all live items
    pub fn set_speed(&mut self, speed: i32) {
        for item in &mut self.items {
            item.vel.x = speed as f32;
        }
    }

    /// Drop items whose trailing edge left the playfield; returns how many
    pub fn cull(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.is_offscreen());
        before - self.items.len()
    }

    /// Remove an item by id (collection)
    pub fn remove(&mut self, id: u32) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Ids of items intersecting the given box, in id order
    pub fn overlapping(&self, min: Vec2, max: Vec2) -> Vec<u32> {
        self.items
            .iter()
            .filter(|item| {
                let w = item.width();
                item.pos.x < max.x
                    && item.pos.x + w > min.x
                    && item.pos.y < max.y
                    && item.pos.y + w > min.y
            })
            .map(|item| item.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::GameRng;
    use crate::sim::state::ItemKind;

    fn common(scale: f32) -> ItemSpec {
        ItemSpec {
            kind: ItemKind::Common,
            size_scale: scale,
            score_value: 5,
        }
    }

    #[test]
    fn test_spawn_at_right_edge_in_band() {
        let mut field = Playfield::new();
        let mut rng = GameRng::new(5);
        for _ in 0..50 {
            field.spawn(&common(1.0), -200, &mut rng);
        }
        for item in &field.items {
            assert_eq!(item.pos.x, PLAYFIELD_WIDTH);
            assert!((100.0..=500.0).contains(&item.pos.y));
        }
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut field = Playfield::new();
        let a = field.spawn_at(&common(1.0), Vec2::ZERO, -200);
        let b = field.spawn_at(&common(1.0), Vec2::ZERO, -200);
        assert!(b > a);
        field.remove(a);
        let c = field.spawn_at(&common(1.0), Vec2::ZERO, -200);
        assert!(c > b);
    }

    #[test]
    fn test_advance_moves_left() {
        let mut field = Playfield::new();
        let id = field.spawn_at(&common(1.0), Vec2::new(800.0, 200.0), -200);
        field.advance(500.0);
        assert_eq!(field.get(id).unwrap().pos.x, 700.0);
    }

    #[test]
    fn test_set_speed_applies_to_all() {
        let mut field = Playfield::new();
        field.spawn_at(&common(1.0), Vec2::new(800.0, 200.0), -200);
        field.spawn_at(&common(0.5), Vec2::new(600.0, 300.0), -200);
        field.set_speed(-250);
        assert!(field.items.iter().all(|i| i.vel.x == -250.0));
    }

    #[test]
    fn test_cull_removes_every_offscreen_item() {
        let mut field = Playfield::new();
        // Adjacent offscreen items must all go in one pass
        field.spawn_at(&common(1.0), Vec2::new(-100.0, 200.0), -200);
        field.spawn_at(&common(1.0), Vec2::new(-70.0, 200.0), -200);
        let keep = field.spawn_at(&common(1.0), Vec2::new(-10.0, 200.0), -200);
        field.spawn_at(&common(0.5), Vec2::new(-40.0, 200.0), -200);

        assert_eq!(field.cull(), 3);
        assert_eq!(field.len(), 1);
        assert_eq!(field.items[0].id, keep);
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut field = Playfield::new();
        assert!(field.remove(42).is_none());
    }

    #[test]
    fn test_overlapping() {
        let mut field = Playfield::new();
        let hit = field.spawn_at(&common(1.0), Vec2::new(90.0, 280.0), -200);
        field.spawn_at(&common(1.0), Vec2::new(400.0, 280.0), -200);
        let ids = field.overlapping(Vec2::new(68.0, 268.0), Vec2::new(132.0, 332.0));
        assert_eq!(ids, vec![hit]);
    }

    #[test]
    fn test_clear_resets_ids() {
        let mut field = Playfield::new();
        field.spawn_at(&common(1.0), Vec2::ZERO, -200);
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.spawn_at(&common(1.0), Vec2::ZERO, -200), 1);
    }
}

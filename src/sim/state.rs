//! Entity and event types shared across the simulation

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::ITEM_BASE_SIZE;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionPhase {
    #[default]
    Playing,
    /// Countdown reached zero; terminal until retry
    Ended,
}

/// Collectible types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Common,
    /// Low-probability item with a fixed high value
    Rare,
}

/// What the spawn economy decided to create
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub kind: ItemKind,
    /// Visual scale, `[0.5, 1.0]` for common items, 1.0 for rare
    pub size_scale: f32,
    pub score_value: u32,
}

/// A live collectible on the playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub kind: ItemKind,
    pub size_scale: f32,
    pub score_value: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Item {
    pub fn from_spec(id: u32, spec: &ItemSpec, pos: Vec2, speed: i32) -> Self {
        Self {
            id,
            kind: spec.kind,
            size_scale: spec.size_scale,
            score_value: spec.score_value,
            pos,
            vel: Vec2::new(speed as f32, 0.0),
        }
    }

    /// Displayed width (and height) in pixels
    pub fn width(&self) -> f32 {
        ITEM_BASE_SIZE * self.size_scale
    }

    /// Trailing edge has left the playfield on the left
    pub fn is_offscreen(&self) -> bool {
        self.pos.x < -self.width()
    }
}

/// Notifications for the presentation layer (audio cues, HUD, tweens)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    ItemSpawned { id: u32, kind: ItemKind },
    ItemCollected { id: u32, kind: ItemKind, value: u32 },
    LevelUp { level: u32, next_target: u32, time_remaining: u32 },
    SessionEnded { score: u32, level: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_at(x: f32, scale: f32) -> Item {
        let spec = ItemSpec {
            kind: ItemKind::Common,
            size_scale: scale,
            score_value: 5,
        };
        Item::from_spec(1, &spec, Vec2::new(x, 200.0), -200)
    }

    #[test]
    fn test_item_width_scales() {
        assert_eq!(item_at(0.0, 1.0).width(), 64.0);
        assert_eq!(item_at(0.0, 0.5).width(), 32.0);
    }

    #[test]
    fn test_offscreen_uses_trailing_edge() {
        // Partially visible: right edge still on screen
        assert!(!item_at(-63.0, 1.0).is_offscreen());
        assert!(!item_at(-64.0, 1.0).is_offscreen());
        assert!(item_at(-64.5, 1.0).is_offscreen());
        assert!(item_at(-33.0, 0.5).is_offscreen());
    }

    #[test]
    fn test_item_velocity_from_speed() {
        let item = item_at(800.0, 1.0);
        assert_eq!(item.vel, Vec2::new(-200.0, 0.0));
    }

    #[test]
    fn test_event_json_is_tagged() {
        let json = serde_json::to_string(&GameEvent::SessionEnded { score: 3, level: 1 })
            .unwrap();
        assert!(json.contains("\"type\":\"SessionEnded\""));
    }
}

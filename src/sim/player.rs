//! Reference kinematics for the controllable character
//!
//! Hosts with their own physics can ignore this and drive `collect` directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining impulse debounce (ms)
    #[serde(default)]
    pub impulse_cooldown_ms: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vel: Vec2::new(0.0, PLAYER_START_VEL_Y),
            impulse_cooldown_ms: 0.0,
        }
    }
}

impl Player {
    /// Upward impulse; ignored while the previous one is still settling
    pub fn activate(&mut self, cooldown_ms: f32) -> bool {
        if self.impulse_cooldown_ms > 0.0 {
            return false;
        }
        self.vel.y = PLAYER_IMPULSE;
        self.impulse_cooldown_ms = cooldown_ms;
        true
    }

    /// Gravity, integration and world-bounds clamp for one frame
    pub fn step(&mut self, dt_ms: f32) {
        let dt = dt_ms / 1000.0;
        self.impulse_cooldown_ms = (self.impulse_cooldown_ms - dt_ms).max(0.0);

        self.vel.y += PLAYER_GRAVITY * dt;
        self.pos += self.vel * dt;

        let half = PLAYER_SIZE / 2.0;
        let min_y = half;
        let max_y = PLAYFIELD_HEIGHT - half;
        if self.pos.y < min_y {
            self.pos.y = min_y;
            self.vel.y = 0.0;
        } else if self.pos.y > max_y {
            self.pos.y = max_y;
            self.vel.y = 0.0;
        }
    }

    /// Axis-aligned bounds as (min, max)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let half = Vec2::splat(PLAYER_SIZE / 2.0);
        (self.pos - half, self.pos + half)
    }
}

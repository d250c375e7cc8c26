//! Score, level and countdown state machine
//!
//! Total over its inputs: ticks and collects on an ended session are no-ops,
//! nothing here can fail.

use serde::{Deserialize, Serialize};

use super::curve::DifficultyCurve;
use super::state::SessionPhase;

/// Result of a level up, handed to the playfield and presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub next_target: u32,
    pub item_speed: i32,
    pub time_remaining: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionState {
    pub score: u32,
    pub level: u32,
    /// Seconds left on the countdown
    pub time_remaining: u32,
    pub next_score_target: u32,
    /// Horizontal item velocity (pixels/s, negative = leftward)
    pub item_speed: i32,
    pub phase: SessionPhase,
}

impl ProgressionState {
    pub fn new(curve: &DifficultyCurve) -> Self {
        Self {
            score: 0,
            level: 1,
            time_remaining: curve.initial_time,
            next_score_target: curve.target_for_level(1),
            item_speed: curve.initial_item_speed,
            phase: SessionPhase::Playing,
        }
    }

    pub fn is_ended(&self) -> bool {
        self.phase == SessionPhase::Ended
    }

    /// One second of countdown. Returns true on the tick that ends the session.
    pub fn tick(&mut self) -> bool {
        if self.is_ended() {
            return false;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.phase = SessionPhase::Ended;
            return true;
        }
        false
    }

    /// Add a collected item's value; levels up at most once per call
    pub fn collect(&mut self, value: u32, curve: &DifficultyCurve) -> Option<LevelUp> {
        if self.is_ended() {
            return None;
        }
        self.score = self.score.saturating_add(value);
        if self.score < self.next_score_target {
            return None;
        }

        self.time_remaining = self.time_remaining.saturating_add(curve.bonus_seconds);
        self.item_speed = self.item_speed.saturating_sub(curve.speed_increment);
        self.level += 1;
        self.next_score_target = curve.target_for_level(self.level);

        Some(LevelUp {
            level: self.level,
            next_target: self.next_score_target,
            item_speed: self.item_speed,
            time_remaining: self.time_remaining,
        })
    }

    /// Back to the initial state
    pub fn reset(&mut self, curve: &DifficultyCurve) {
        *self = Self::new(curve);
    }
}

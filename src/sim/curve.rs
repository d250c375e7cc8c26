//! Difficulty tuning
//!
//! Every constant that shapes a session lives in [`DifficultyCurve`]. Themes
//! and skins differ only by the curve they pass in, never by a separate copy
//! of the progression logic.

use serde::{Deserialize, Serialize};

/// Maps a common item's visual scale to its score value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValuePolicy {
    /// `floor(1 + scale * 9)`: 5..=10 over the spawn scale range
    #[default]
    LargerIsBetter,
    /// `floor(5 - scale * 4)`: 1..=3 over the spawn scale range
    SmallerIsBetter,
}

impl ValuePolicy {
    pub fn value_for(&self, scale: f32) -> u32 {
        let raw = match self {
            ValuePolicy::LargerIsBetter => 1.0 + scale * 9.0,
            ValuePolicy::SmallerIsBetter => 5.0 - scale * 4.0,
        };
        raw.floor().max(1.0) as u32
    }
}

/// How the score needed for the next level grows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TargetGrowth {
    /// `initial * factor^(level - 1)`
    Geometric { factor: u32 },
    /// `initial * level^exponent`
    Polynomial { exponent: u32 },
}

/// Rare item chance (percent) as a function of level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RareChanceCurve {
    /// `early` percent below `from_level`, `late` percent from it on
    Step { from_level: u32, early: u32, late: u32 },
    /// `base + per_level * (level - 1)`
    Linear { base: u32, per_level: u32 },
}

/// Spawn parameters in effect at a given level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnConfig {
    pub max_concurrent_items: usize,
    pub spawn_interval_ms: f32,
    /// Percent in `[0, 100]`
    pub rare_item_chance: u32,
    pub rare_value: u32,
    pub value_policy: ValuePolicy,
}

/// Full set of tunables for one game variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyCurve {
    /// Starting countdown (seconds)
    pub initial_time: u32,
    /// Starting item velocity (pixels/s, negative = leftward)
    pub initial_item_speed: i32,
    /// Score needed to leave level 1
    pub initial_target: u32,
    pub target_growth: TargetGrowth,
    /// Seconds added on level up
    pub bonus_seconds: u32,
    /// Speed subtracted from item velocity on level up
    pub speed_increment: i32,
    pub max_concurrent_items: usize,
    pub spawn_interval_ms: f32,
    pub rare_chance: RareChanceCurve,
    /// Upper bound on the rare chance, whatever the curve says
    pub rare_chance_ceiling: u32,
    pub rare_value: u32,
    pub value_policy: ValuePolicy,
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self::standard()
    }
}

impl DifficultyCurve {
    /// Current tuning: bigger items score more, rare items get likelier with level
    pub fn standard() -> Self {
        Self {
            initial_time: 20,
            initial_item_speed: -200,
            initial_target: 10,
            target_growth: TargetGrowth::Geometric { factor: 2 },
            bonus_seconds: 10,
            speed_increment: 50,
            max_concurrent_items: 15,
            spawn_interval_ms: 300.0,
            rare_chance: RareChanceCurve::Linear {
                base: 2,
                per_level: 2,
            },
            rare_chance_ceiling: 50,
            rare_value: 30,
            value_policy: ValuePolicy::LargerIsBetter,
        }
    }

    /// First release tuning: small items score more, 1-in-50 rare items until level 4
    pub fn classic() -> Self {
        Self {
            rare_chance: RareChanceCurve::Step {
                from_level: 4,
                early: 2,
                late: 10,
            },
            value_policy: ValuePolicy::SmallerIsBetter,
            ..Self::standard()
        }
    }

    /// Score needed to leave `level`
    pub fn target_for_level(&self, level: u32) -> u32 {
        let level = level.max(1);
        let mult = match self.target_growth {
            TargetGrowth::Geometric { factor } => factor.saturating_pow(level - 1),
            TargetGrowth::Polynomial { exponent } => level.saturating_pow(exponent),
        };
        self.initial_target.saturating_mul(mult)
    }

    /// Rare chance for `level`, clamped to the ceiling and to 100
    pub fn rare_item_chance(&self, level: u32) -> u32 {
        let level = level.max(1);
        let raw = match self.rare_chance {
            RareChanceCurve::Step {
                from_level,
                early,
                late,
            } => {
                if level < from_level {
                    early
                } else {
                    late
                }
            }
            RareChanceCurve::Linear { base, per_level } => {
                base.saturating_add(per_level.saturating_mul(level - 1))
            }
        };
        raw.min(self.rare_chance_ceiling).min(100)
    }

    pub fn spawn_config(&self, level: u32) -> SpawnConfig {
        SpawnConfig {
            max_concurrent_items: self.max_concurrent_items,
            spawn_interval_ms: self.spawn_interval_ms,
            rare_item_chance: self.rare_item_chance(level),
            rare_value: self.rare_value,
            value_policy: self.value_policy,
        }
    }

    /// Check the curve can drive a session; returns a description of the first problem
    pub fn check(&self) -> Result<(), String> {
        if self.initial_time == 0 {
            return Err("initial_time must be positive".into());
        }
        if self.initial_item_speed >= 0 {
            return Err("initial_item_speed must be negative (leftward)".into());
        }
        if self.initial_target == 0 {
            return Err("initial_target must be positive".into());
        }
        if !(self.spawn_interval_ms > 0.0) {
            return Err("spawn_interval_ms must be positive".into());
        }
        if self.max_concurrent_items == 0 {
            return Err("max_concurrent_items must be positive".into());
        }
        if self.rare_chance_ceiling > 100 {
            return Err(format!(
                "rare_chance_ceiling {} exceeds 100",
                self.rare_chance_ceiling
            ));
        }
        if self.rare_value == 0 {
            return Err("rare_value must be positive".into());
        }
        if self.speed_increment < 0 {
            return Err("speed_increment must not be negative".into());
        }
        if let RareChanceCurve::Step { early, late, .. } = self.rare_chance {
            if late < early {
                return Err(format!(
                    "rare chance must not drop with level ({} -> {})",
                    early, late
                ));
            }
        }
        let grows = match self.target_growth {
            TargetGrowth::Geometric { factor } => factor >= 2,
            TargetGrowth::Polynomial { exponent } => exponent >= 1,
        };
        if !grows {
            return Err("target_growth must increase with level".into());
        }
        Ok(())
    }
}

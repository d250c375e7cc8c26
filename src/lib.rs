//! Nibble Rush - A side-scrolling collect-'em-up arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (progression, spawn economy, playfield)
//! - `settings`: Data-driven difficulty configuration
//! - `error`: Configuration errors
//! - `web`: wasm-bindgen boundary for the host engine (wasm32 only)

pub mod error;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::ConfigError;
pub use settings::{CurvePreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Countdown tick length
    pub const TICK_INTERVAL_MS: f32 = 1000.0;
    /// Largest frame delta accepted by the simulation (prevents huge jumps after a tab stall)
    pub const MAX_FRAME_MS: f32 = 250.0;

    /// Item spawn band (y range) and sprite size at scale 1.0
    pub const ITEM_SPAWN_Y_MIN: i32 = 100;
    pub const ITEM_SPAWN_Y_MAX: i32 = 500;
    pub const ITEM_BASE_SIZE: f32 = 64.0;
    /// Size scale range for common items
    pub const ITEM_SCALE_MIN: f32 = 0.5;
    pub const ITEM_SCALE_MAX: f32 = 1.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    pub const PLAYER_START_VEL_Y: f32 = 100.0;
    pub const PLAYER_SIZE: f32 = 64.0;
    /// Downward acceleration (pixels/s²), ~5 px/s per frame at 60 Hz
    pub const PLAYER_GRAVITY: f32 = 300.0;
    /// Upward velocity set by an activate input
    pub const PLAYER_IMPULSE: f32 = -200.0;
    /// Activate inputs inside this window after an impulse are ignored
    pub const IMPULSE_COOLDOWN_MS: f32 = 150.0;
}

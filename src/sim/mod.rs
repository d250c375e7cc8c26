//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-driven accumulators only, no engine timers
//! - Seeded RNG only
//! - Stable iteration order (by item ID)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod curve;
pub mod player;
pub mod playfield;
pub mod progression;
pub mod rng;
pub mod session;
pub mod spawn;
pub mod state;

pub use autopilot::Autopilot;
pub use curve::{DifficultyCurve, RareChanceCurve, SpawnConfig, TargetGrowth, ValuePolicy};
pub use player::Player;
pub use playfield::Playfield;
pub use progression::{LevelUp, ProgressionState};
pub use rng::{GameRng, RandomSource};
pub use session::{FrameInput, SessionController, Snapshot};
pub use spawn::{SpawnEconomy, roll_item};
pub use state::{GameEvent, Item, ItemKind, ItemSpec, SessionPhase};

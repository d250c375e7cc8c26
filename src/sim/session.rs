//! Session controller: the per-frame update loop
//!
//! Owns progression, spawn economy, playfield, player and RNG. The host calls
//! [`SessionController::update`] exactly once per rendered frame; all mutation
//! happens inside that call (or `collect`/`retry`), never concurrently.

use serde::{Deserialize, Serialize};

use super::curve::DifficultyCurve;
use super::player::Player;
use super::playfield::Playfield;
use super::progression::ProgressionState;
use super::rng::GameRng;
use super::spawn::SpawnEconomy;
use super::state::{GameEvent, Item, SessionPhase};
use crate::consts::*;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer down / key press: upward impulse
    pub activate: bool,
}

/// Serializable view of a session for the HUD
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub progression: ProgressionState,
    pub player: Player,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone)]
pub struct SessionController {
    curve: DifficultyCurve,
    progression: ProgressionState,
    economy: SpawnEconomy,
    playfield: Playfield,
    player: Player,
    rng: GameRng,
    /// Frame time not yet converted into countdown ticks
    countdown_ms: f32,
    impulse_cooldown_ms: f32,
    /// Notifications since the last drain
    events: Vec<GameEvent>,
}

impl SessionController {
    pub fn new(curve: DifficultyCurve, seed: u64) -> Self {
        log::info!("Session starting (seed {})", seed);
        Self {
            progression: ProgressionState::new(&curve),
            curve,
            economy: SpawnEconomy::new(),
            playfield: Playfield::new(),
            player: Player::default(),
            rng: GameRng::new(seed),
            countdown_ms: 0.0,
            impulse_cooldown_ms: IMPULSE_COOLDOWN_MS,
            events: Vec::new(),
        }
    }

    pub fn with_impulse_cooldown(mut self, cooldown_ms: f32) -> Self {
        self.impulse_cooldown_ms = cooldown_ms.max(0.0);
        self
    }

    pub fn curve(&self) -> &DifficultyCurve {
        &self.curve
    }

    pub fn progression(&self) -> &ProgressionState {
        &self.progression
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn phase(&self) -> SessionPhase {
        self.progression.phase
    }

    pub fn is_ended(&self) -> bool {
        self.progression.is_ended()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            progression: self.progression.clone(),
            player: self.player.clone(),
            items: self.playfield.items.clone(),
        }
    }

    /// Take the notifications accumulated since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance one rendered frame
    pub fn update(&mut self, dt_ms: f32, input: &FrameInput) {
        if self.is_ended() {
            return;
        }
        // NaN would poison every accumulator for the rest of the session
        let dt_ms = if dt_ms.is_finite() {
            dt_ms.clamp(0.0, MAX_FRAME_MS)
        } else {
            0.0
        };

        // Player
        if input.activate {
            self.player.activate(self.impulse_cooldown_ms);
        }
        self.player.step(dt_ms);

        // Spawning
        if let Some(spec) = self.economy.maybe_spawn(
            dt_ms,
            self.playfield.len(),
            self.progression.level,
            &self.curve,
            &mut self.rng,
        ) {
            let id = self
                .playfield
                .spawn(&spec, self.progression.item_speed, &mut self.rng);
            log::debug!("Spawned {:?} #{} worth {}", spec.kind, id, spec.score_value);
            self.events.push(GameEvent::ItemSpawned {
                id,
                kind: spec.kind,
            });
        }

        // Items
        self.playfield.advance(dt_ms);
        self.playfield.cull();

        // Overlaps
        let (min, max) = self.player.bounds();
        for id in self.playfield.overlapping(min, max) {
            self.collect(id);
        }

        // Countdown
        self.countdown_ms += dt_ms;
        while self.countdown_ms >= TICK_INTERVAL_MS && !self.is_ended() {
            self.countdown_ms -= TICK_INTERVAL_MS;
            self.tick();
        }
    }

    /// One countdown second; ends the session when time runs out
    pub fn tick(&mut self) {
        if self.progression.tick() {
            log::info!(
                "Session ended: score {} at level {}",
                self.progression.score,
                self.progression.level
            );
            self.events.push(GameEvent::SessionEnded {
                score: self.progression.score,
                level: self.progression.level,
            });
        }
    }

    /// Collect a live item. Unknown ids and ended sessions are ignored.
    pub fn collect(&mut self, item_id: u32) -> bool {
        if self.is_ended() {
            return false;
        }
        let Some(item) = self.playfield.remove(item_id) else {
            return false;
        };

        let level_up = self.progression.collect(item.score_value, &self.curve);
        log::debug!(
            "Collected {:?} #{} (+{}), score {}",
            item.kind,
            item.id,
            item.score_value,
            self.progression.score
        );
        self.events.push(GameEvent::ItemCollected {
            id: item.id,
            kind: item.kind,
            value: item.score_value,
        });

        if let Some(up) = level_up {
            self.playfield.set_speed(up.item_speed);
            log::info!(
                "Level {} reached: next target {}, speed {}, {}s left",
                up.level,
                up.next_target,
                up.item_speed,
                up.time_remaining
            );
            self.events.push(GameEvent::LevelUp {
                level: up.level,
                next_target: up.next_target,
                time_remaining: up.time_remaining,
            });
        }
        true
    }

    /// Start over with the same curve and seed
    pub fn retry(&mut self) {
        log::info!("Session reset");
        self.progression.reset(&self.curve);
        self.economy.reset();
        self.playfield.clear();
        self.player = Player::default();
        self.rng.reseed();
        self.countdown_ms = 0.0;
        self.events.clear();
    }
}

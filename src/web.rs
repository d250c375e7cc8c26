//! wasm-bindgen boundary for the host engine
//!
//! The JS side owns rendering, audio and input. It forwards each frame's
//! delta and the activate flag, reads back a JSON snapshot, and plays cues
//! for the drained events.

use wasm_bindgen::prelude::*;

use crate::settings::Settings;
use crate::sim::{FrameInput, SessionController};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Nibble Rush (web) starting...");
}

#[wasm_bindgen]
pub struct WebSession {
    session: SessionController,
}

#[wasm_bindgen]
impl WebSession {
    /// New session using the settings stored in LocalStorage
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebSession {
        let settings = Settings::load();
        let seed = settings
            .seed
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        let session = SessionController::new(settings.effective_curve(), seed)
            .with_impulse_cooldown(settings.impulse_cooldown_ms);
        WebSession { session }
    }

    /// Advance one rendered frame
    pub fn update(&mut self, dt_ms: f32, activate: bool) {
        self.session.update(dt_ms, &FrameInput { activate });
    }

    /// Engine-detected overlap
    pub fn collect(&mut self, item_id: u32) -> bool {
        self.session.collect(item_id)
    }

    pub fn retry(&mut self) {
        self.session.retry();
    }

    pub fn is_ended(&self) -> bool {
        self.session.is_ended()
    }

    pub fn score(&self) -> u32 {
        self.session.progression().score
    }

    pub fn level(&self) -> u32 {
        self.session.progression().level
    }

    pub fn time_remaining(&self) -> u32 {
        self.session.progression().time_remaining
    }

    /// Full state for rendering
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Events since the last call, for audio cues and HUD effects
    pub fn drain_events_json(&mut self) -> Result<String, JsValue> {
        let events = self.session.drain_events();
        serde_json::to_string(&events)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WebSession {
    fn default() -> Self {
        Self::new()
    }
}

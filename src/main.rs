//! Nibble Rush entry point
//!
//! On the web the library's `web` module is the entry point. Natively this
//! runs a headless autopilot session, which is handy for tuning curves.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use nibble_rush::Settings;
    use nibble_rush::sim::{Autopilot, GameEvent, SessionController};

    env_logger::init();
    log::info!("Nibble Rush (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load_from_path(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{} ({}), using default settings", e, path);
                Settings::default()
            }
        },
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let mut session = SessionController::new(settings.effective_curve(), seed)
        .with_impulse_cooldown(settings.impulse_cooldown_ms);
    let pilot = Autopilot::new();
    let frame_ms = 1000.0 / 60.0;

    let mut frames = 0u64;
    let mut collected = 0u32;
    while !session.is_ended() {
        let input = pilot.decide(&session);
        session.update(frame_ms, &input);
        frames += 1;
        collected += session
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::ItemCollected { .. }))
            .count() as u32;
    }

    let progression = session.progression();
    println!(
        "seed {}: score {}, level {}, {} items in {:.1}s",
        seed,
        progression.score,
        progression.level,
        collected,
        frames as f32 * frame_ms / 1000.0
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_start, this is just to satisfy the compiler
}

//! Idle/demo mode: picks inputs that chase the nearest incoming item

use super::session::{FrameInput, SessionController};

/// Simple chase AI used by the headless runner and attract mode
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Pixels the player may sit below the target before flapping
    pub slack: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self { slack: 8.0 }
    }

    pub fn decide(&self, session: &SessionController) -> FrameInput {
        let player = session.player();

        // Nearest item whose trailing edge is still ahead of the player
        let target = session
            .playfield()
            .items
            .iter()
            .filter(|item| item.pos.x + item.width() > player.pos.x)
            .min_by(|a, b| {
                a.pos
                    .x
                    .partial_cmp(&b.pos.x)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let target_y = match target {
            Some(item) => item.pos.y + item.width() / 2.0,
            // Hover mid-field while waiting
            None => crate::consts::PLAYFIELD_HEIGHT / 2.0,
        };

        FrameInput {
            activate: player.pos.y > target_y + self.slack && player.vel.y >= 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::curve::DifficultyCurve;

    #[test]
    fn test_flaps_when_below_hover_line() {
        let curve = DifficultyCurve {
            spawn_interval_ms: f32::MAX,
            ..DifficultyCurve::standard()
        };
        let mut session = SessionController::new(curve, 1);
        let pilot = Autopilot::new();
        // Let the player sink below mid-field
        for _ in 0..60 {
            session.update(16.0, &FrameInput::default());
        }
        assert!(session.player().pos.y > 308.0);
        assert!(pilot.decide(&session).activate);
    }

    #[test]
    fn test_scores_over_a_session() {
        let mut session = SessionController::new(DifficultyCurve::standard(), 2024);
        let pilot = Autopilot::new();
        while !session.is_ended() {
            let input = pilot.decide(&session);
            session.update(16.0, &input);
        }
        assert!(session.progression().score > 0);
    }
}

//! Read-only state snapshot for the presentation layer
//!
//! The host page renders from this alone; it never sees timers or the RNG.

use serde::Serialize;

use crate::sim::state::{EntityKind, GameState, Phase};

#[derive(Debug, Clone, Serialize)]
pub struct EntityView {
    pub id: u32,
    pub lane: u8,
    pub position: f32,
    pub emoji: &'static str,
    pub kind: EntityKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub level_label: String,
    pub high_score: u32,
    pub player_lane: u8,
    pub is_invincible: bool,
    pub entities: Vec<EntityView>,
    /// Current flavor line, already expiry-filtered
    pub dialogue: Option<String>,
}

impl Snapshot {
    pub fn capture(state: &GameState, high_score: u32, now_ms: f64) -> Self {
        Self {
            phase: state.phase,
            score: state.score,
            level: state.level,
            level_label: state.level_label(),
            high_score,
            player_lane: state.player.lane,
            is_invincible: state.player.is_invincible(now_ms),
            entities: state
                .entities
                .iter()
                .map(|e| EntityView {
                    id: e.id,
                    lane: e.lane,
                    position: e.position,
                    emoji: e.emoji,
                    kind: e.kind,
                })
                .collect(),
            dialogue: state
                .banner
                .as_ref()
                .filter(|b| b.visible(now_ms))
                .map(|b| b.text.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Banner;

    #[test]
    fn test_snapshot_filters_expired_dialogue() {
        let mut state = GameState::new(5);
        state.reset_run(0.0);
        state.banner = Some(Banner::timed("welcome", 0.0, 2_000.0));

        let visible = Snapshot::capture(&state, 0, 1_000.0);
        assert_eq!(visible.dialogue.as_deref(), Some("welcome"));

        let expired = Snapshot::capture(&state, 0, 2_000.0);
        assert!(expired.dialogue.is_none());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = GameState::new(5);
        state.reset_run(0.0);
        let snap = Snapshot::capture(&state, 17, 0.0);
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"phase\":\"running\""));
        assert!(json.contains("\"high_score\":17"));
    }
}

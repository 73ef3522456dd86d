//! Input normalization
//!
//! Keyboard, touch swipes and on-screen buttons all funnel into the same
//! four logical actions, which resolve against the current phase into
//! commands. Anything that does not apply is dropped, so rapid-fire or
//! out-of-phase events can never corrupt state.

use crate::consts::SWIPE_THRESHOLD_PX;
use crate::sim::Phase;

/// Source-agnostic logical action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LaneUp,
    LaneDown,
    PauseToggle,
    Confirm,
}

/// Phase-resolved command for the game facade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Resume,
    MoveUp,
    MoveDown,
}

/// Map a DOM `KeyboardEvent::key` value to an action
pub fn key_action(key: &str) -> Option<Action> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Action::LaneUp),
        "ArrowDown" | "s" | "S" => Some(Action::LaneDown),
        "Escape" => Some(Action::PauseToggle),
        " " | "Enter" => Some(Action::Confirm),
        _ => None,
    }
}

/// Resolve an action against the phase state machine. Lane moves only apply
/// while running; an up/confirm on the start or game-over screen starts a
/// run instead of moving.
pub fn resolve(phase: Phase, action: Action) -> Option<Command> {
    match (phase, action) {
        (Phase::Running, Action::LaneUp) => Some(Command::MoveUp),
        (Phase::Running, Action::LaneDown) => Some(Command::MoveDown),
        (Phase::Running, Action::PauseToggle | Action::Confirm) => Some(Command::Pause),
        (Phase::Paused, Action::PauseToggle | Action::Confirm) => Some(Command::Resume),
        (Phase::Idle | Phase::Over, Action::LaneUp | Action::Confirm) => Some(Command::Start),
        _ => None,
    }
}

/// Turns a touch-start/touch-end pair into a lane action when the gesture
/// is a vertical swipe past the threshold.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    pub fn end(&mut self, x: f32, y: f32) -> Option<Action> {
        let (sx, sy) = self.start.take()?;
        let dx = x - sx;
        let dy = y - sy;
        if dy.abs() < SWIPE_THRESHOLD_PX || dy.abs() <= dx.abs() {
            return None;
        }
        if dy < 0.0 {
            Some(Action::LaneUp)
        } else {
            Some(Action::LaneDown)
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_action("ArrowUp"), Some(Action::LaneUp));
        assert_eq!(key_action("w"), Some(Action::LaneUp));
        assert_eq!(key_action("W"), Some(Action::LaneUp));
        assert_eq!(key_action("ArrowDown"), Some(Action::LaneDown));
        assert_eq!(key_action("s"), Some(Action::LaneDown));
        assert_eq!(key_action("Escape"), Some(Action::PauseToggle));
        assert_eq!(key_action(" "), Some(Action::Confirm));
        assert_eq!(key_action("Enter"), Some(Action::Confirm));
        assert_eq!(key_action("ArrowLeft"), None);
        assert_eq!(key_action("x"), None);
    }

    #[test]
    fn test_running_phase_moves_and_pauses() {
        assert_eq!(resolve(Phase::Running, Action::LaneUp), Some(Command::MoveUp));
        assert_eq!(resolve(Phase::Running, Action::LaneDown), Some(Command::MoveDown));
        assert_eq!(resolve(Phase::Running, Action::PauseToggle), Some(Command::Pause));
        assert_eq!(resolve(Phase::Running, Action::Confirm), Some(Command::Pause));
    }

    #[test]
    fn test_paused_phase_only_resumes() {
        assert_eq!(resolve(Phase::Paused, Action::LaneUp), None);
        assert_eq!(resolve(Phase::Paused, Action::LaneDown), None);
        assert_eq!(resolve(Phase::Paused, Action::PauseToggle), Some(Command::Resume));
        assert_eq!(resolve(Phase::Paused, Action::Confirm), Some(Command::Resume));
    }

    #[test]
    fn test_idle_and_over_start_on_up_or_confirm() {
        for phase in [Phase::Idle, Phase::Over] {
            assert_eq!(resolve(phase, Action::LaneUp), Some(Command::Start));
            assert_eq!(resolve(phase, Action::Confirm), Some(Command::Start));
            assert_eq!(resolve(phase, Action::LaneDown), None);
            assert_eq!(resolve(phase, Action::PauseToggle), None);
        }
    }

    #[test]
    fn test_swipe_up_and_down() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(100.0, 300.0);
        assert_eq!(swipe.end(105.0, 230.0), Some(Action::LaneUp));

        swipe.begin(100.0, 300.0);
        assert_eq!(swipe.end(95.0, 380.0), Some(Action::LaneDown));
    }

    #[test]
    fn test_swipe_below_threshold_ignored() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(100.0, 300.0);
        assert_eq!(swipe.end(100.0, 251.0), None);

        swipe.begin(100.0, 300.0);
        assert_eq!(swipe.end(100.0, 250.0), Some(Action::LaneUp));
    }

    #[test]
    fn test_horizontal_swipe_ignored() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(100.0, 300.0);
        assert_eq!(swipe.end(300.0, 380.0), None);
    }

    #[test]
    fn test_end_without_begin_is_noop() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.end(0.0, 500.0), None);

        swipe.begin(0.0, 0.0);
        swipe.cancel();
        assert_eq!(swipe.end(0.0, 500.0), None);
    }

    #[test]
    fn test_swipe_state_consumed_by_end() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(0.0, 300.0);
        assert_eq!(swipe.end(0.0, 100.0), Some(Action::LaneUp));
        assert_eq!(swipe.end(0.0, 100.0), None);
    }
}

//! Phase-guarded command facade
//!
//! The one object the host page talks to. Commands are idempotent with
//! respect to phase guards: a command that does not apply in the current
//! phase is dropped, never an error. High-score persistence happens here,
//! immediately on every scoring tick.

use crate::consts::LANES;
use crate::highscore::{BestScore, ScoreStore};
use crate::sim::{GameEvent, GameState, Phase, Snapshot, tick};

pub struct Game<S: ScoreStore> {
    state: GameState,
    best: BestScore<S>,
}

impl<S: ScoreStore> Game<S> {
    /// Create the game on the start screen, loading the stored best score
    pub fn new(seed: u64, store: S) -> Self {
        let best = BestScore::load(store);
        log::info!("game ready, seed {}, best score {}", seed, best.get());
        Self {
            state: GameState::new(seed),
            best,
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn tick_period_ms(&self) -> f64 {
        self.state.tick_period_ms
    }

    pub fn high_score(&self) -> u32 {
        self.best.get()
    }

    /// Begin a fresh run. Applies from `Idle` or `Over`; a restart is a full
    /// reset, never a resume.
    pub fn start(&mut self, now_ms: f64) -> bool {
        match self.state.phase {
            Phase::Idle | Phase::Over => {
                self.state.reset_run(now_ms);
                true
            }
            _ => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.state.phase == Phase::Running {
            self.state.phase = Phase::Paused;
            true
        } else {
            false
        }
    }

    pub fn resume(&mut self) -> bool {
        if self.state.phase == Phase::Paused {
            self.state.phase = Phase::Running;
            true
        } else {
            false
        }
    }

    /// Tear down to the start screen from any phase. An active run is
    /// discarded; whatever already reached the high-score store stays.
    pub fn close(&mut self) {
        self.state.close();
    }

    /// Move a lane toward 0. Returns whether the avatar actually moved,
    /// so the host can fire haptics only on real movement.
    pub fn move_up(&mut self) -> bool {
        if self.state.phase != Phase::Running || self.state.player.lane == 0 {
            return false;
        }
        self.state.player.lane -= 1;
        true
    }

    /// Move a lane toward `LANES - 1`
    pub fn move_down(&mut self) -> bool {
        if self.state.phase != Phase::Running || self.state.player.lane == LANES - 1 {
            return false;
        }
        self.state.player.lane += 1;
        true
    }

    /// Advance the simulation one tick and commit any new best score
    pub fn tick(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let mut events = tick(&mut self.state, now_ms);
        let scored = events
            .iter()
            .any(|e| matches!(e, GameEvent::Caught { .. } | GameEvent::GameOver { .. }));
        if scored && self.best.submit(self.state.score) {
            events.push(GameEvent::NewHighScore {
                score: self.state.score,
            });
        }
        events
    }

    pub fn snapshot(&self, now_ms: f64) -> Snapshot {
        Snapshot::capture(&self.state, self.best.get(), now_ms)
    }
}

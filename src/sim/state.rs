//! Game state and core simulation types
//!
//! Everything the tick loop mutates lives here. The state is pure data plus
//! a seeded RNG; no platform types, so the whole module compiles and tests
//! natively.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::*;
use crate::sim::catalog;
use crate::sim::progress;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Not started, or showing the start screen
    Idle,
    /// Tick loop active
    Running,
    /// Tick loop suspended, resumable
    Paused,
    /// Run ended, score frozen, restart available
    Over,
}

/// What colliding with an entity does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Food, grants points
    Catch,
    /// Grants points plus a side effect
    PowerUp,
    /// Obstacle; ends the run unless the player is invincible
    Avoid,
}

/// Side effect applied when a power-up resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Invincible,
}

/// A spawned collectible or obstacle drifting toward the player
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique increasing id, assigned at spawn, never reused
    pub id: u32,
    /// Lane, fixed at spawn
    pub lane: u8,
    /// Distance to the player; decreases every tick
    pub position: f32,
    pub kind: EntityKind,
    /// Reward for Catch/PowerUp, 0 for Avoid
    pub points: u32,
    pub effect: Option<Effect>,
    /// Glyph the host page renders
    pub emoji: &'static str,
    /// Flavor line shown on resolution (falls back to the collecting pool)
    pub dialogue: Option<&'static str>,
}

/// The player avatar
#[derive(Debug, Clone)]
pub struct Player {
    /// Lane in `[0, LANES - 1]`
    pub lane: u8,
    /// Absolute deadline; invincibility holds while `now < deadline`.
    /// Re-grants overwrite this, so overlapping pickups extend rather
    /// than stack.
    pub invincible_until_ms: f64,
}

impl Player {
    pub fn new() -> Self {
        Self {
            lane: LANES / 2,
            invincible_until_ms: 0.0,
        }
    }

    pub fn is_invincible(&self, now_ms: f64) -> bool {
        now_ms < self.invincible_until_ms
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A flavor line with its display deadline
#[derive(Debug, Clone)]
pub struct Banner {
    pub text: String,
    /// `f64::INFINITY` keeps the line up until the next transition
    pub until_ms: f64,
}

impl Banner {
    pub fn timed(text: impl Into<String>, now_ms: f64, duration_ms: f64) -> Self {
        Self {
            text: text.into(),
            until_ms: now_ms + duration_ms,
        }
    }

    pub fn sticky(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            until_ms: f64::INFINITY,
        }
    }

    pub fn visible(&self, now_ms: f64) -> bool {
        now_ms < self.until_ms
    }
}

/// Complete run state, owned by the game core and mutated only by the tick
/// loop and the phase-guarded commands.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, kept for restarts and logging
    pub seed: u64,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub tick_period_ms: f64,
    pub player: Player,
    /// In-flight entities in spawn order
    pub entities: Vec<Entity>,
    pub banner: Option<Banner>,
    /// The milestone line fires once per run
    pub milestone_shown: bool,
    next_id: u32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: Phase::Idle,
            score: 0,
            level: 1,
            tick_period_ms: BASE_TICK_MS,
            player: Player::new(),
            entities: Vec::new(),
            banner: None,
            milestone_shown: false,
            next_id: 1,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Allocate a new entity id
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset for a fresh run. Entity ids keep counting up so a restarted
    /// run never reuses an id from the previous one.
    pub fn reset_run(&mut self, now_ms: f64) {
        self.phase = Phase::Running;
        self.score = 0;
        self.level = 1;
        self.tick_period_ms = BASE_TICK_MS;
        self.player = Player::new();
        self.entities.clear();
        self.milestone_shown = false;
        self.banner = Some(Banner::timed(
            catalog::pick_start_line(&mut self.rng),
            now_ms,
            START_BANNER_MS,
        ));
    }

    /// Tear down to the start screen, discarding any active run
    pub fn close(&mut self) {
        self.phase = Phase::Idle;
        self.entities.clear();
        self.banner = None;
        self.player.invincible_until_ms = 0.0;
    }

    pub fn level_label(&self) -> String {
        progress::level_label(self.level)
    }
}

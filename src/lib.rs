//! Aisle Dash - the buffet-lane minigame embedded in the wedding invitation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, progression)
//! - `game`: Phase-guarded command facade exposed to the host page
//! - `input`: Keyboard/touch/button normalization into lane actions
//! - `scroll`: Scroll-position to active-section mapping for the page nav
//! - `highscore`: Single best-score value behind a storage trait
//! - `platform`: Browser capability wrappers (timers, storage, haptics, share)

pub mod game;
pub mod highscore;
pub mod input;
pub mod platform;
pub mod scroll;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscore::BestScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Number of buffet lanes the player can occupy
    pub const LANES: u8 = 4;

    /// Distance-to-player at which entities enter the field
    pub const SPAWN_POSITION: f32 = 10.0;
    /// Entities past this point are behind the player and despawn
    pub const DESPAWN_POSITION: f32 = -2.0;
    /// Reachable window around the player (inclusive on both ends)
    pub const CATCH_WINDOW_NEAR: f32 = -0.5;
    pub const CATCH_WINDOW_FAR: f32 = 1.5;

    /// Tick period at level 1
    pub const BASE_TICK_MS: f64 = 500.0;
    /// Tick period shrinks by this much on every level-up
    pub const TICK_DECREMENT_MS: f64 = 50.0;
    /// Tick period never drops below this
    pub const MIN_TICK_MS: f64 = 200.0;

    /// Spawn probability is capped here no matter the level
    pub const SPAWN_CAP: f64 = 0.75;

    /// Invincibility duration after a champagne pickup
    pub const INVINCIBILITY_MS: f64 = 5_000.0;

    /// Score at which the one-time milestone line fires
    pub const MILESTONE_SCORE: u32 = 100;

    /// Banner display durations
    pub const START_BANNER_MS: f64 = 2_000.0;
    pub const LEVEL_BANNER_MS: f64 = 2_000.0;
    pub const CATCH_BANNER_MS: f64 = 1_500.0;
    pub const MILESTONE_BANNER_MS: f64 = 3_000.0;

    /// Cosmetic ground-scroll timer period (~60 Hz, never touches game state)
    pub const GROUND_TICK_MS: i32 = 16;

    /// Vertical swipe shorter than this is ignored
    pub const SWIPE_THRESHOLD_PX: f32 = 50.0;
}

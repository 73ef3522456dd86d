//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit `now_ms` timestamps only, no ambient clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod catalog;
pub mod progress;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use catalog::Template;
pub use snapshot::{EntityView, Snapshot};
pub use state::{Banner, Effect, Entity, EntityKind, GameState, Phase, Player};
pub use tick::{GameEvent, spawn_entity, tick};

//! The fixed-interval simulation tick
//!
//! One call advances every entity, resolves collisions exactly once per
//! entity, applies progression, prunes the field and rolls a spawn. The
//! caller owns the interval timer; this module never touches the platform.

use rand::Rng;

use crate::consts::*;
use crate::sim::catalog;
use crate::sim::progress;
use crate::sim::state::{Banner, Effect, Entity, EntityKind, GameState, Phase};

/// What happened during a tick, for the host to react to (restart the
/// interval on `LevelUp`, stop timers on `GameOver`, persist on
/// `NewHighScore`).
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Caught { id: u32, points: u32 },
    PowerUpApplied { id: u32, until_ms: f64 },
    LevelUp { level: u32, tick_period_ms: f64 },
    Milestone { score: u32 },
    GameOver { score: u32 },
    /// Appended by the facade when the stored best is beaten mid-run
    NewHighScore { score: u32 },
}

/// Snapshot of one qualifying entity, taken before mutation starts
struct Hit {
    id: u32,
    kind: EntityKind,
    points: u32,
    effect: Option<Effect>,
    dialogue: Option<&'static str>,
}

/// Advance the run by one tick. No-op unless `Running`.
pub fn tick(state: &mut GameState, now_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != Phase::Running {
        return events;
    }

    if let Some(banner) = &state.banner {
        if !banner.visible(now_ms) {
            state.banner = None;
        }
    }

    // 1. Advance the field
    let step = progress::step_for_level(state.level);
    for entity in &mut state.entities {
        entity.position -= step;
    }

    // 2. Resolve everything reachable in the player's lane, in spawn order.
    // The game-over decision is deferred until the whole pass is done so a
    // same-tick catch still counts its points.
    let lane = state.player.lane;
    let invincible = state.player.is_invincible(now_ms);
    let hits: Vec<Hit> = state
        .entities
        .iter()
        .filter(|e| {
            e.lane == lane && (CATCH_WINDOW_NEAR..=CATCH_WINDOW_FAR).contains(&e.position)
        })
        .map(|e| Hit {
            id: e.id,
            kind: e.kind,
            points: e.points,
            effect: e.effect,
            dialogue: e.dialogue,
        })
        .collect();

    let mut resolved: Vec<u32> = Vec::with_capacity(hits.len());
    let mut fatal = false;
    let mut leveled_to: Option<u32> = None;
    let mut milestone = false;

    for hit in hits {
        if resolved.contains(&hit.id) {
            continue;
        }
        resolved.push(hit.id);

        match hit.kind {
            EntityKind::Avoid => {
                // Only the first avoid ends the run; the rest just vanish
                if !invincible && !fatal {
                    fatal = true;
                }
            }
            EntityKind::Catch | EntityKind::PowerUp => {
                let before = state.score;
                state.score += hit.points;
                events.push(GameEvent::Caught {
                    id: hit.id,
                    points: hit.points,
                });

                let new_level = progress::level_for_score(state.score);
                if new_level > state.level {
                    state.level = new_level;
                    state.tick_period_ms = progress::shrink_tick_period(state.tick_period_ms);
                    leveled_to = Some(new_level);
                    events.push(GameEvent::LevelUp {
                        level: new_level,
                        tick_period_ms: state.tick_period_ms,
                    });
                }

                if let Some(Effect::Invincible) = hit.effect {
                    let until_ms = now_ms + INVINCIBILITY_MS;
                    state.player.invincible_until_ms = until_ms;
                    events.push(GameEvent::PowerUpApplied {
                        id: hit.id,
                        until_ms,
                    });
                }

                let line = hit
                    .dialogue
                    .unwrap_or_else(|| catalog::pick_collecting_line(&mut state.rng));
                state.banner = Some(Banner::timed(line, now_ms, CATCH_BANNER_MS));

                if !state.milestone_shown
                    && before < MILESTONE_SCORE
                    && state.score >= MILESTONE_SCORE
                {
                    state.milestone_shown = true;
                    milestone = true;
                    events.push(GameEvent::Milestone { score: state.score });
                }
            }
        }
    }

    // Banner precedence for simultaneous lines: milestone > level-up > dialogue
    if let Some(level) = leveled_to {
        state.banner = Some(Banner::timed(
            format!("Level up! {}", progress::level_label(level)),
            now_ms,
            LEVEL_BANNER_MS,
        ));
    }
    if milestone {
        state.banner = Some(Banner::timed(
            catalog::MILESTONE_LINE,
            now_ms,
            MILESTONE_BANNER_MS,
        ));
    }

    // 3. Drop resolved entities and anything behind the player
    state
        .entities
        .retain(|e| !resolved.contains(&e.id) && e.position > DESPAWN_POSITION);

    if fatal {
        state.phase = Phase::Over;
        state.banner = Some(Banner::sticky(catalog::pick_game_over_line(&mut state.rng)));
        events.push(GameEvent::GameOver { score: state.score });
        log::info!("run over at score {} (level {})", state.score, state.level);
        return events;
    }

    // 4. Spawn roll
    if state.rng.random::<f64>() < progress::spawn_probability(state.level) {
        spawn_entity(state);
    }

    events
}

/// Spawn one entity from the catalog at a random lane. Returns its id.
pub fn spawn_entity(state: &mut GameState) -> u32 {
    let template = catalog::pick_template(&mut state.rng);
    let lane = state.rng.random_range(0..LANES);
    let id = state.next_entity_id();
    state.entities.push(Entity {
        id,
        lane,
        position: SPAWN_POSITION,
        kind: template.kind,
        points: template.points,
        effect: template.effect,
        emoji: template.emoji,
        dialogue: template.dialogue,
    });
    id
}

//! Spawn templates and flavor-text pools
//!
//! The combined template table is what the spawn step draws from uniformly,
//! so relative frequency is controlled by how many rows a kind gets.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::sim::state::{Effect, EntityKind};

/// Blueprint for a spawnable entity
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub kind: EntityKind,
    pub points: u32,
    pub effect: Option<Effect>,
    pub emoji: &'static str,
    pub dialogue: Option<&'static str>,
}

/// Combined catalog of treats, the champagne power-up, and hazards.
/// Spawn draws uniformly from this table.
pub const TEMPLATES: &[Template] = &[
    Template {
        kind: EntityKind::Catch,
        points: 3,
        effect: None,
        emoji: "🍰",
        dialogue: Some("Cake before the cutting? Scandalous."),
    },
    Template {
        kind: EntityKind::Catch,
        points: 2,
        effect: None,
        emoji: "🍓",
        dialogue: Some("A chocolate strawberry, obviously."),
    },
    Template {
        kind: EntityKind::Catch,
        points: 1,
        effect: None,
        emoji: "🧁",
        dialogue: None,
    },
    Template {
        kind: EntityKind::Catch,
        points: 2,
        effect: None,
        emoji: "🥟",
        dialogue: None,
    },
    Template {
        kind: EntityKind::Catch,
        points: 5,
        effect: None,
        emoji: "🦞",
        dialogue: Some("The lobster was for the head table!"),
    },
    Template {
        kind: EntityKind::PowerUp,
        points: 3,
        effect: Some(Effect::Invincible),
        emoji: "🥂",
        dialogue: Some("Liquid courage! Nothing can stop you now."),
    },
    Template {
        kind: EntityKind::Avoid,
        points: 0,
        effect: None,
        emoji: "💐",
        dialogue: None,
    },
    Template {
        kind: EntityKind::Avoid,
        points: 0,
        effect: None,
        emoji: "🐝",
        dialogue: None,
    },
];

/// Fallback lines for catches whose template carries no dialogue
pub const COLLECTING_LINES: &[&str] = &[
    "Delicious!",
    "Save some for the guests!",
    "Straight off the tray.",
    "The caterer saw that.",
    "One more won't hurt.",
];

/// Shown for two seconds when a run starts
pub const START_LINES: &[&str] = &[
    "The buffet is open!",
    "Eyes on the trays. Go!",
    "Dash before the speeches start!",
];

/// Shown when an avoid entity ends the run
pub const GAME_OVER_LINES: &[&str] = &[
    "Right into the bouquet toss...",
    "Stung! The buffet closes.",
    "The DJ saw everything.",
];

/// One-time line when the score crosses the milestone
pub const MILESTONE_LINE: &str = "100 points?! Leave some canapés for the bride!";

fn pick<'a>(rng: &mut Pcg32, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

pub fn pick_start_line(rng: &mut Pcg32) -> &'static str {
    pick(rng, START_LINES)
}

pub fn pick_collecting_line(rng: &mut Pcg32) -> &'static str {
    pick(rng, COLLECTING_LINES)
}

pub fn pick_game_over_line(rng: &mut Pcg32) -> &'static str {
    pick(rng, GAME_OVER_LINES)
}

pub fn pick_template(rng: &mut Pcg32) -> &'static Template {
    &TEMPLATES[rng.random_range(0..TEMPLATES.len())]
}

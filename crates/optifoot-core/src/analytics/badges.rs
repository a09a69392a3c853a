// Specialty badge classification.
//
// Rules are evaluated in declaration order and the first three that pass are
// kept. A rule that needs a detailed sub-attribute fails when that attribute
// (or the whole detail block) is missing.

use serde::Serialize;

use crate::player::{DetailedAttributes, PlayerRecord};

/// Maximum number of badges shown for one player.
pub const MAX_BADGES: usize = 3;

/// The all-round threshold every summary rating must meet.
const COMPLETE_PLAYER_FLOOR: u8 = 70;

/// A qualifying specialty: the rule key and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub key: &'static str,
    pub label: &'static str,
}

/// One named predicate in the fixed rule set.
pub struct BadgeRule {
    pub key: &'static str,
    pub label: &'static str,
    pub qualifies: fn(&PlayerRecord) -> bool,
}

impl BadgeRule {
    pub fn badge(&self) -> Badge {
        Badge {
            key: self.key,
            label: self.label,
        }
    }
}

/// True when the detail attribute is present and at least `threshold`.
fn detail_at_least(
    record: &PlayerRecord,
    threshold: u8,
    pick: fn(&DetailedAttributes) -> Option<u8>,
) -> bool {
    record.detail_value(pick).is_some_and(|v| v >= threshold)
}

pub static BADGE_RULES: &[BadgeRule] = &[
    BadgeRule {
        key: "playmaker",
        label: "Playmaker",
        qualifies: |p| p.ratings.passing >= 85 && detail_at_least(p, 85, |d| d.vision),
    },
    BadgeRule {
        key: "finisher",
        label: "Clinical Finisher",
        qualifies: |p| p.ratings.shooting >= 85 && detail_at_least(p, 88, |d| d.finishing),
    },
    BadgeRule {
        key: "speedster",
        label: "Speedster",
        qualifies: |p| p.ratings.pace >= 90,
    },
    BadgeRule {
        key: "aerial",
        label: "Aerial Threat",
        qualifies: |p| {
            detail_at_least(p, 85, |d| d.heading_acc) && detail_at_least(p, 85, |d| d.jumping)
        },
    },
    BadgeRule {
        key: "dribbler",
        label: "Dribble Maestro",
        qualifies: |p| p.ratings.dribbling >= 88 && detail_at_least(p, 88, |d| d.agility),
    },
    BadgeRule {
        key: "tank",
        label: "Physical Tank",
        qualifies: |p| p.ratings.physical >= 85 && detail_at_least(p, 88, |d| d.strength),
    },
    BadgeRule {
        key: "anchor",
        label: "Defensive Anchor",
        qualifies: |p| p.ratings.defense >= 85 && detail_at_least(p, 85, |d| d.interceptions),
    },
    BadgeRule {
        key: "complete",
        label: "Complete Player",
        qualifies: |p| {
            p.ratings
                .values()
                .iter()
                .all(|&v| v >= COMPLETE_PLAYER_FLOOR)
        },
    },
];

/// Every badge the player qualifies for, in rule order, before truncation.
pub fn qualifying_badges(record: &PlayerRecord) -> Vec<Badge> {
    BADGE_RULES
        .iter()
        .filter(|rule| (rule.qualifies)(record))
        .map(BadgeRule::badge)
        .collect()
}

/// The player's badge set: the first three qualifying badges in rule order.
pub fn compute_badges(record: &PlayerRecord) -> Vec<Badge> {
    BADGE_RULES
        .iter()
        .filter(|rule| (rule.qualifies)(record))
        .take(MAX_BADGES)
        .map(BadgeRule::badge)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

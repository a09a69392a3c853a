// Tactical role assignment.
//
// Each position has an ordered list of candidate roles; the player's seed
// picks one. Positions without a list (CF included) fall back to a single
// utility role.

use crate::analytics::seed::seed_for;
use crate::player::{PlayerRecord, Position};

pub const UTILITY_ROLE: &str = "Utility Player";

const STRIKER: &[&str] = &[
    "Target Man",
    "Poacher",
    "False 9",
    "Complete Forward",
    "Advanced Forward",
];
const WINGER: &[&str] = &["Inside Forward", "Inverted Winger", "Wide Playmaker", "Winger"];
const ATTACKING_MID: &[&str] = &[
    "Advanced Playmaker",
    "Shadow Striker",
    "Enganche",
    "Trequartista",
];
const CENTRAL_MID: &[&str] = &["Box-to-Box", "Deep-Lying Playmaker", "Mezzala", "Carrilero"];
const DEFENSIVE_MID: &[&str] = &["Anchor Man", "Half-Back", "Regista", "Ball-Winning DM"];
const CENTRE_BACK: &[&str] = &["Ball-Playing CB", "Stopper", "Libero", "No-Nonsense CB"];
const RIGHT_BACK: &[&str] = &[
    "Inverted Full-Back",
    "Wing-Back",
    "Defensive RB",
    "Overlapping RB",
];
const LEFT_BACK: &[&str] = &[
    "Inverted Full-Back",
    "Wing-Back",
    "Defensive LB",
    "Overlapping LB",
];
const GOALKEEPER: &[&str] = &["Sweeper Keeper", "Traditional GK", "Ball-Playing GK"];
const FALLBACK: &[&str] = &[UTILITY_ROLE];

/// Ordered candidate roles for a position.
pub fn candidate_roles(position: &Position) -> &'static [&'static str] {
    match position {
        Position::Striker => STRIKER,
        Position::LeftWing | Position::RightWing => WINGER,
        Position::AttackingMidfield => ATTACKING_MID,
        Position::CentralMidfield => CENTRAL_MID,
        Position::DefensiveMidfield => DEFENSIVE_MID,
        Position::CentreBack => CENTRE_BACK,
        Position::RightBack => RIGHT_BACK,
        Position::LeftBack => LEFT_BACK,
        Position::Goalkeeper => GOALKEEPER,
        Position::CentreForward | Position::Other(_) => FALLBACK,
    }
}

/// Pick the role at `seed mod len` from the position's candidate list.
pub fn assign_role(position: &Position, seed: u64) -> &'static str {
    let candidates = candidate_roles(position);
    candidates[(seed % candidates.len() as u64) as usize]
}

/// The tactical role for a player, seeded from the player's identity.
pub fn tactical_role(record: &PlayerRecord) -> &'static str {
    assign_role(&record.position, seed_for(record))
}

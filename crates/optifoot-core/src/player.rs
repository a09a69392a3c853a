// Player records: the immutable input to every analytics derivation.
//
// Field names follow the source roster format (`pos`, `ovr`, `fc26`, ...)
// with long-form aliases accepted on deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Football position codes. Codes outside the known set are kept verbatim in
/// `Other` so that downstream fallbacks (utility role, default archetype) can
/// still report what was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    Striker,
    LeftWing,
    RightWing,
    AttackingMidfield,
    CentralMidfield,
    DefensiveMidfield,
    CentreBack,
    RightBack,
    LeftBack,
    CentreForward,
    Goalkeeper,
    Other(String),
}

impl Position {
    /// Parse a position code. Only the exact upper-case codes are known;
    /// anything else, including `"st"`, is kept verbatim as `Other`.
    pub fn from_code(s: &str) -> Self {
        match s {
            "ST" => Position::Striker,
            "LW" => Position::LeftWing,
            "RW" => Position::RightWing,
            "CAM" => Position::AttackingMidfield,
            "CM" => Position::CentralMidfield,
            "CDM" => Position::DefensiveMidfield,
            "CB" => Position::CentreBack,
            "RB" => Position::RightBack,
            "LB" => Position::LeftBack,
            "CF" => Position::CentreForward,
            "GK" => Position::Goalkeeper,
            _ => Position::Other(s.to_string()),
        }
    }

    /// The position code as it appears in roster data.
    pub fn code(&self) -> &str {
        match self {
            Position::Striker => "ST",
            Position::LeftWing => "LW",
            Position::RightWing => "RW",
            Position::AttackingMidfield => "CAM",
            Position::CentralMidfield => "CM",
            Position::DefensiveMidfield => "CDM",
            Position::CentreBack => "CB",
            Position::RightBack => "RB",
            Position::LeftBack => "LB",
            Position::CentreForward => "CF",
            Position::Goalkeeper => "GK",
            Position::Other(code) => code,
        }
    }

    /// Attacking positions get the shooting-driven xG estimate.
    pub fn is_attacker(&self) -> bool {
        matches!(
            self,
            Position::Striker
                | Position::LeftWing
                | Position::RightWing
                | Position::AttackingMidfield
                | Position::CentreForward
        )
    }
}

impl From<String> for Position {
    fn from(s: String) -> Self {
        Position::from_code(&s)
    }
}

impl From<Position> for String {
    fn from(p: Position) -> Self {
        p.code().to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

/// The six headline attributes, each on the 0-99 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRatings {
    #[serde(rename = "pac", alias = "pace")]
    pub pace: u8,
    #[serde(rename = "sho", alias = "shooting")]
    pub shooting: u8,
    #[serde(rename = "pas", alias = "passing")]
    pub passing: u8,
    #[serde(rename = "dri", alias = "dribbling")]
    pub dribbling: u8,
    #[serde(rename = "def", alias = "defense")]
    pub defense: u8,
    #[serde(rename = "phy", alias = "physical")]
    pub physical: u8,
}

impl SummaryRatings {
    /// All six values in display order (PAC, SHO, PAS, DRI, DEF, PHY).
    pub fn values(&self) -> [u8; 6] {
        [
            self.pace,
            self.shooting,
            self.passing,
            self.dribbling,
            self.defense,
            self.physical,
        ]
    }
}

/// Fine-grained sub-attributes. Sparse: any field may be missing, and the
/// whole block may be absent from a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailedAttributes {
    pub acceleration: Option<u8>,
    pub sprint_speed: Option<u8>,
    pub positioning: Option<u8>,
    pub finishing: Option<u8>,
    pub shot_power: Option<u8>,
    pub long_shots: Option<u8>,
    pub vision: Option<u8>,
    pub crossing: Option<u8>,
    pub short_pass: Option<u8>,
    pub long_pass: Option<u8>,
    pub agility: Option<u8>,
    pub balance: Option<u8>,
    pub ball_control: Option<u8>,
    pub dribbling: Option<u8>,
    pub interceptions: Option<u8>,
    pub def_aware: Option<u8>,
    pub stand_tackle: Option<u8>,
    pub slide_tackle: Option<u8>,
    pub jumping: Option<u8>,
    pub stamina: Option<u8>,
    pub strength: Option<u8>,
    pub aggression: Option<u8>,
    pub heading_acc: Option<u8>,
}

/// Recent form indicator carried with the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

// ---------------------------------------------------------------------------
// PlayerRecord
// ---------------------------------------------------------------------------

/// One player as supplied by the roster store. Market value and salary are
/// in millions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: String,
    pub name: String,
    pub age: u32,
    #[serde(rename = "pos", alias = "position")]
    pub position: Position,
    #[serde(rename = "nat", alias = "nationality", default)]
    pub nationality: String,
    #[serde(rename = "team", alias = "club", default)]
    pub club: String,
    #[serde(rename = "ovr", alias = "overall")]
    pub overall: u8,
    #[serde(rename = "fc26", alias = "ratings")]
    pub ratings: SummaryRatings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<DetailedAttributes>,
    #[serde(alias = "market_value")]
    pub market_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(alias = "contract_end")]
    pub contract_end: i32,
    #[serde(default)]
    pub trend: Trend,
}

impl PlayerRecord {
    /// Detailed sub-attribute lookup that flattens both levels of optionality.
    pub fn detail_value(&self, pick: impl Fn(&DetailedAttributes) -> Option<u8>) -> Option<u8> {
        self.detail.as_ref().and_then(pick)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

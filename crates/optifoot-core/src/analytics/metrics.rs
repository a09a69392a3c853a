// Derived scouting metrics: purchase price, xG, xA, progressive passes.
//
// Every metric is a seeded draw scaled by the relevant summary attribute, so
// a player always gets the same numbers for the same record.

use serde::{Deserialize, Serialize};

use crate::analytics::roles::tactical_role;
use crate::analytics::rounding::{round_half_up, round_percent, round_to_cents};
use crate::analytics::seed::{seed_for, seeded_value};
use crate::clubs::ClubDirectory;
use crate::player::PlayerRecord;

// ---------------------------------------------------------------------------
// Draw ranges and attribute baselines
// ---------------------------------------------------------------------------

const PURCHASE_RANGE: (f64, f64) = (0.4, 0.9);
const ATTACKER_XG_RANGE: (f64, f64) = (0.3, 0.8);
const OTHER_XG_RANGE: (f64, f64) = (0.02, 0.15);
const XA_RANGE: (f64, f64) = (0.15, 0.5);
const PROG_PASS_RANGE: (f64, f64) = (4.0, 12.0);

const SHOOTING_BASELINE: f64 = 80.0;
const XA_PASSING_BASELINE: f64 = 85.0;
const PROG_PASSING_BASELINE: f64 = 80.0;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// The seeded performance and financial estimates for one player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub purchase_price: f64,
    /// Expected goals per 90, two decimals.
    pub xg: f64,
    /// Expected assists per 90, two decimals.
    pub xa: f64,
    pub progressive_passes: u32,
}

/// Contract, staff and performance view of a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedProfile {
    pub purchase_price: f64,
    pub current_value: f64,
    pub contract_end: i32,
    pub manager: String,
    pub tactical_role: String,
    pub xg: f64,
    pub xa: f64,
    pub progressive_passes: u32,
}

impl AdvancedProfile {
    /// Build the full profile: seeded metrics, tactical role, and the
    /// manager looked up from `clubs`.
    pub fn assemble(record: &PlayerRecord, clubs: &ClubDirectory) -> Self {
        let metrics = derive_metrics(record);
        AdvancedProfile {
            purchase_price: metrics.purchase_price,
            current_value: record.market_value,
            contract_end: record.contract_end,
            manager: clubs.manager_or_unknown(&record.club).to_string(),
            tactical_role: tactical_role(record).to_string(),
            xg: metrics.xg,
            xa: metrics.xa,
            progressive_passes: metrics.progressive_passes,
        }
    }

    /// Return on the purchase price as a whole percentage.
    ///
    /// Returns `None` when the purchase price is zero, where the ratio is
    /// undefined.
    pub fn roi_percent(&self) -> Option<i64> {
        if self.purchase_price == 0.0 {
            return None;
        }
        let roi = (self.current_value - self.purchase_price) / self.purchase_price * 100.0;
        roi.is_finite().then(|| round_percent(roi))
    }
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

fn draw(seed: u64, range: (f64, f64)) -> f64 {
    seeded_value(seed, range.0, range.1)
}

/// Purchase price before rounding: market value times a draw in [0.4, 0.9).
pub fn raw_purchase_price(record: &PlayerRecord) -> f64 {
    record.market_value * draw(seed_for(record), PURCHASE_RANGE)
}

/// Expected goals per 90. Attackers scale a higher draw by shooting;
/// everyone else gets a small unscaled draw.
pub fn expected_goals(record: &PlayerRecord) -> f64 {
    let seed = seed_for(record);
    if record.position.is_attacker() {
        let shooting = f64::from(record.ratings.shooting);
        round_to_cents(draw(seed, ATTACKER_XG_RANGE) * (shooting / SHOOTING_BASELINE))
    } else {
        round_to_cents(draw(seed, OTHER_XG_RANGE))
    }
}

/// Expected assists per 90, scaled by passing for every position.
pub fn expected_assists(record: &PlayerRecord) -> f64 {
    let passing = f64::from(record.ratings.passing);
    round_to_cents(draw(seed_for(record), XA_RANGE) * (passing / XA_PASSING_BASELINE))
}

/// Progressive passes per 90, scaled by passing.
pub fn progressive_passes(record: &PlayerRecord) -> u32 {
    let passing = f64::from(record.ratings.passing);
    round_half_up(draw(seed_for(record), PROG_PASS_RANGE) * (passing / PROG_PASSING_BASELINE))
        as u32
}

/// All seeded metrics for a player.
pub fn derive_metrics(record: &PlayerRecord) -> DerivedMetrics {
    DerivedMetrics {
        purchase_price: round_half_up(raw_purchase_price(record)),
        xg: expected_goals(record),
        xa: expected_assists(record),
        progressive_passes: progressive_passes(record),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// Scouting reports: every derivation for a player composed into one value.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;

use crate::analytics::badges::{compute_badges, Badge};
use crate::analytics::forecast::{self, ForecastPoint};
use crate::analytics::metrics::AdvancedProfile;
use crate::analytics::Engine;
use crate::player::{PlayerRecord, Position, Trend};
use crate::roster::Roster;

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// Identity and contract fields carried into the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub position: Position,
    pub nationality: String,
    pub club: String,
    pub overall: u8,
    pub market_value: f64,
    pub salary: Option<f64>,
    /// Weekly pay (thousands) of the current salary, when one is on file.
    pub weekly_salary: Option<f64>,
    pub contract_end: i32,
    pub trend: Trend,
}

impl From<&PlayerRecord> for PlayerSummary {
    fn from(record: &PlayerRecord) -> Self {
        PlayerSummary {
            id: record.id.clone(),
            name: record.name.clone(),
            age: record.age,
            position: record.position.clone(),
            nationality: record.nationality.clone(),
            club: record.club.clone(),
            overall: record.overall,
            market_value: record.market_value,
            salary: record.salary,
            weekly_salary: record.salary.map(forecast::weekly_salary),
            contract_end: record.contract_end,
            trend: record.trend,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutingReport {
    pub player: PlayerSummary,
    pub profile: AdvancedProfile,
    pub roi_percent: Option<i64>,
    pub badges: Vec<Badge>,
    pub forecast: Vec<ForecastPoint>,
}

/// A batch of reports stamped with the time they were produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEnvelope {
    pub generated_at: DateTime<Utc>,
    pub horizon: usize,
    pub players: Vec<ScoutingReport>,
}

impl ReportEnvelope {
    pub fn new(engine: &Engine, players: Vec<ScoutingReport>) -> Self {
        ReportEnvelope {
            generated_at: Utc::now(),
            horizon: engine.forecast_settings().horizon,
            players,
        }
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Full report for one player.
pub fn analyze(engine: &Engine, record: &PlayerRecord) -> ScoutingReport {
    let profile = AdvancedProfile::assemble(record, engine.clubs());
    ScoutingReport {
        player: PlayerSummary::from(record),
        roi_percent: profile.roi_percent(),
        profile,
        badges: compute_badges(record),
        forecast: forecast::forecast(record, engine.forecast_settings()),
    }
}

/// Reports for every player in the roster, computed in parallel. Output
/// order matches `roster.iter()`.
pub fn analyze_roster(engine: &Engine, roster: &Roster) -> Vec<ScoutingReport> {
    roster
        .players()
        .par_iter()
        .map(|record| analyze(engine, record))
        .collect()
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

impl fmt::Display for ScoutingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.player;
        let profile = &self.profile;

        writeln!(
            f,
            "{} [{}] {} {} | OVR {} | age {}",
            p.name, p.id, p.position, p.club, p.overall, p.age
        )?;
        writeln!(
            f,
            "  manager: {}  role: {}",
            profile.manager, profile.tactical_role
        )?;

        let roi = match self.roi_percent {
            Some(pct) => format!("{pct:+}%"),
            None => "n/a".into(),
        };
        writeln!(
            f,
            "  value: {}M  purchase: {}M  ROI: {}  contract to {}",
            profile.current_value, profile.purchase_price, roi, profile.contract_end
        )?;
        writeln!(
            f,
            "  xG/90: {:.2}  xA/90: {:.2}  progressive passes: {}",
            profile.xg, profile.xa, profile.progressive_passes
        )?;

        if self.badges.is_empty() {
            writeln!(f, "  badges: none")?;
        } else {
            let labels: Vec<&str> = self.badges.iter().map(|b| b.label).collect();
            writeln!(f, "  badges: {}", labels.join(", "))?;
        }

        writeln!(f, "  forecast:")?;
        for point in &self.forecast {
            writeln!(
                f,
                "    {}  OVR {:>3}  value {:>5}M  salary {:>4}M  ({}k/wk)",
                point.year, point.overall, point.value, point.salary, point.weekly_salary
            )?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

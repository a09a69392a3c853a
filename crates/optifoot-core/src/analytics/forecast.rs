// Aging forecast: overall rating, market value and salary over a horizon.
//
// A position archetype sets the peak age and the yearly decline rate past
// the peak. Players at or before the peak get a flat growth factor based on
// how far they currently are from it (capped at +5%); past the peak the
// rating decays linearly down to a 70% floor. Value and salary follow the
// rating trajectory with compounding decay (value) and raises (salary).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytics::rounding::round_half_up;
use crate::config::ForecastConfig;
use crate::player::{PlayerRecord, Position};

// ---------------------------------------------------------------------------
// Curve constants
// ---------------------------------------------------------------------------

const GROWTH_PER_YEAR_TO_PEAK: f64 = 0.01;
const MAX_GROWTH_FACTOR: f64 = 1.05;
const MIN_DECLINE_FACTOR: f64 = 0.7;
const VALUE_RETENTION: f64 = 0.92;
const SALARY_RAISE: f64 = 1.04;
const WEEKS_PER_YEAR: f64 = 52.0;

// ---------------------------------------------------------------------------
// Archetypes
// ---------------------------------------------------------------------------

/// Position-specific aging curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub peak_age: u32,
    pub decline_rate: f64,
}

/// Curve used for positions without a dedicated archetype.
pub const DEFAULT_ARCHETYPE: Archetype = Archetype {
    peak_age: 28,
    decline_rate: 0.035,
};

const fn archetype(peak_age: u32, decline_rate: f64) -> Archetype {
    Archetype {
        peak_age,
        decline_rate,
    }
}

/// Look up the aging curve for a position.
pub fn archetype_for(position: &Position) -> Archetype {
    match position {
        Position::Striker => archetype(28, 0.04),
        Position::LeftWing | Position::RightWing => archetype(27, 0.04),
        Position::AttackingMidfield => archetype(28, 0.035),
        Position::CentralMidfield => archetype(29, 0.03),
        Position::DefensiveMidfield | Position::CentreBack => archetype(30, 0.025),
        Position::RightBack | Position::LeftBack => archetype(29, 0.03),
        Position::CentreForward => archetype(28, 0.035),
        Position::Goalkeeper => archetype(32, 0.02),
        Position::Other(code) => {
            debug!("no aging archetype for position '{}', using default", code);
            DEFAULT_ARCHETYPE
        }
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One year of the combined projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub year: i32,
    pub overall: u32,
    pub value: f64,
    pub salary: f64,
    pub weekly_salary: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallPoint {
    pub year: i32,
    pub overall: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuePoint {
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryPoint {
    pub year: i32,
    pub salary: f64,
    pub weekly_salary: f64,
}

// ---------------------------------------------------------------------------
// Curve
// ---------------------------------------------------------------------------

/// Rating multiplier for a player currently `current_age` at future `age`.
///
/// Note the growth branch depends on the current age, not the future one:
/// every pre-peak year gets the same factor, and year 0 only reproduces the
/// current rating when the player is exactly at peak.
pub fn rating_factor(archetype: &Archetype, current_age: u32, age: u32) -> f64 {
    let peak = archetype.peak_age;
    if age <= peak {
        let years_to_peak = f64::from(peak) - f64::from(current_age);
        (1.0 + years_to_peak * GROWTH_PER_YEAR_TO_PEAK).min(MAX_GROWTH_FACTOR)
    } else {
        let years_past_peak = f64::from(age - peak);
        (1.0 - years_past_peak * archetype.decline_rate).max(MIN_DECLINE_FACTOR)
    }
}

/// Weekly pay (thousands) for an annual salary (millions).
pub fn weekly_salary(annual: f64) -> f64 {
    round_half_up(annual * 1000.0 / WEEKS_PER_YEAR)
}

/// The salary the projection starts from. Zero and missing salaries both
/// fall back to the configured default.
fn base_salary(record: &PlayerRecord, default_salary: f64) -> f64 {
    match record.salary {
        Some(s) if s != 0.0 && !s.is_nan() => s,
        _ => default_salary,
    }
}

/// Projected overall rating for each year of the horizon.
///
/// Precondition: `record.overall > 0`. The value and salary series divide by
/// it; callers are expected to have validated the record.
pub fn forecast_overall(record: &PlayerRecord, years: usize, base_year: i32) -> Vec<OverallPoint> {
    let archetype = archetype_for(&record.position);
    let overall = f64::from(record.overall);
    (0..years)
        .map(|i| {
            let age = record.age + i as u32;
            let factor = rating_factor(&archetype, record.age, age);
            OverallPoint {
                year: base_year + i as i32,
                overall: round_half_up(overall * factor) as u32,
            }
        })
        .collect()
}

/// Combined rating, value and salary projection over `settings.horizon`.
pub fn forecast(record: &PlayerRecord, settings: &ForecastConfig) -> Vec<ForecastPoint> {
    forecast_years(record, settings.horizon, settings)
}

/// Combined projection over an explicit number of years.
pub fn forecast_years(
    record: &PlayerRecord,
    years: usize,
    settings: &ForecastConfig,
) -> Vec<ForecastPoint> {
    debug_assert!(record.overall > 0, "forecast requires a non-zero overall rating");
    let current = f64::from(record.overall);
    let salary = base_salary(record, settings.default_salary);

    forecast_overall(record, years, settings.base_year)
        .into_iter()
        .enumerate()
        .map(|(i, point)| {
            let ratio = f64::from(point.overall) / current;
            let value =
                round_half_up(record.market_value * ratio * VALUE_RETENTION.powf(i as f64));
            let annual = salary * SALARY_RAISE.powf(i as f64) * ratio;
            ForecastPoint {
                year: point.year,
                overall: point.overall,
                value,
                salary: round_half_up(annual),
                weekly_salary: weekly_salary(annual),
            }
        })
        .collect()
}

/// Market value series over the configured horizon.
pub fn forecast_value(record: &PlayerRecord, settings: &ForecastConfig) -> Vec<ValuePoint> {
    forecast(record, settings)
        .into_iter()
        .map(|p| ValuePoint {
            year: p.year,
            value: p.value,
        })
        .collect()
}

/// Salary series over the configured horizon.
pub fn forecast_salary(record: &PlayerRecord, settings: &ForecastConfig) -> Vec<SalaryPoint> {
    forecast(record, settings)
        .into_iter()
        .map(|p| SalaryPoint {
            year: p.year,
            salary: p.salary,
            weekly_salary: p.weekly_salary,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

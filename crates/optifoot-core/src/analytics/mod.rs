// Scouting analytics: seeded metrics, roles, badges, and aging forecasts.

pub mod badges;
pub mod forecast;
pub mod metrics;
pub mod roles;
pub mod rounding;
pub mod seed;

use crate::clubs::ClubDirectory;
use crate::config::{EngineConfig, ForecastConfig};
use crate::player::PlayerRecord;

use badges::Badge;
use forecast::{ForecastPoint, OverallPoint, SalaryPoint, ValuePoint};
use metrics::AdvancedProfile;

/// Entry points over an optional record. A missing record yields `None` or
/// an empty series; nothing here fails.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    clubs: ClubDirectory,
    forecast: ForecastConfig,
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Self {
        Engine {
            clubs: config.clubs.clone(),
            forecast: config.forecast.clone(),
        }
    }

    /// Same engine with a different forecast horizon.
    pub fn with_horizon(mut self, years: usize) -> Self {
        self.forecast.horizon = years;
        self
    }

    pub fn clubs(&self) -> &ClubDirectory {
        &self.clubs
    }

    pub fn forecast_settings(&self) -> &ForecastConfig {
        &self.forecast
    }

    pub fn advanced_profile(&self, record: Option<&PlayerRecord>) -> Option<AdvancedProfile> {
        record.map(|r| AdvancedProfile::assemble(r, &self.clubs))
    }

    pub fn badges(&self, record: Option<&PlayerRecord>) -> Vec<Badge> {
        record.map(badges::compute_badges).unwrap_or_default()
    }

    pub fn forecast_overall(&self, record: Option<&PlayerRecord>, years: usize) -> Vec<OverallPoint> {
        record
            .map(|r| forecast::forecast_overall(r, years, self.forecast.base_year))
            .unwrap_or_default()
    }

    pub fn forecast_value(&self, record: Option<&PlayerRecord>) -> Vec<ValuePoint> {
        record
            .map(|r| forecast::forecast_value(r, &self.forecast))
            .unwrap_or_default()
    }

    pub fn forecast_salary(&self, record: Option<&PlayerRecord>) -> Vec<SalaryPoint> {
        record
            .map(|r| forecast::forecast_salary(r, &self.forecast))
            .unwrap_or_default()
    }

    /// Combined rating, value and salary projection.
    pub fn forecast(&self, record: Option<&PlayerRecord>) -> Vec<ForecastPoint> {
        record
            .map(|r| forecast::forecast(r, &self.forecast))
            .unwrap_or_default()
    }
}

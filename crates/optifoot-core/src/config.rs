// Configuration loading and parsing (engine.toml).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::clubs::ClubDirectory;

const CONFIG_FILE: &str = "engine.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no engine config at {path}")]
    FileNotFound { path: PathBuf },

    #[error("{path} is not a valid engine config: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("could not install {from} as {to}: {source}")]
    DefaultsCopyError {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Top-level assembled config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    pub forecast: ForecastConfig,
    pub data: DataPaths,
    pub clubs: ClubDirectory,
}

// ---------------------------------------------------------------------------
// engine.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire engine.toml file.
#[derive(Debug, Clone, Deserialize)]
struct EngineFile {
    forecast: ForecastConfig,
    #[serde(default)]
    data: DataPaths,
    /// Club code to manager overrides, layered over the built-in directory.
    #[serde(default)]
    clubs: HashMap<String, String>,
}

/// Forecast horizon and money defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of projected years, starting at `base_year`.
    pub horizon: usize,
    pub base_year: i32,
    /// Annual salary (millions) assumed when a record has none.
    pub default_salary: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        ForecastConfig {
            horizon: 5,
            base_year: 2025,
            default_salary: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub roster: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths {
            roster: "data/roster.json".into(),
        }
    }
}

impl DataPaths {
    /// The roster path, resolved against `base_dir` when relative.
    pub fn roster_path(&self, base_dir: &Path) -> PathBuf {
        let path = Path::new(&self.roster);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// The shipped default and the active config file under a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub shipped: PathBuf,
    pub active: PathBuf,
}

impl ConfigPaths {
    pub fn under(base_dir: &Path) -> Self {
        ConfigPaths {
            shipped: base_dir.join("defaults").join(CONFIG_FILE),
            active: base_dir.join("config").join(CONFIG_FILE),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Parse and validate `config/engine.toml` under `base_dir`. Does not
/// install the shipped default; see [`load_or_install`].
pub fn load_config_from(base_dir: &Path) -> Result<EngineConfig, ConfigError> {
    let path = ConfigPaths::under(base_dir).active;
    let text = std::fs::read_to_string(&path)
        .map_err(|_| ConfigError::FileNotFound { path: path.clone() })?;
    let file: EngineFile = toml::from_str(&text).map_err(|source| ConfigError::ParseError {
        path: path.clone(),
        source,
    })?;

    let config = EngineConfig {
        forecast: file.forecast,
        data: file.data,
        clubs: ClubDirectory::with_overrides(&file.clubs),
    };
    validate(&config)?;

    info!(
        "loaded {} (horizon {}, base year {}, {} clubs)",
        path.display(),
        config.forecast.horizon,
        config.forecast.base_year,
        config.clubs.len()
    );
    Ok(config)
}

/// Install `defaults/engine.toml` as `config/engine.toml` when no active
/// config exists yet. Returns the installed path, or `None` when an active
/// config was already present. An existing file is never overwritten.
pub fn ensure_config_file(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let paths = ConfigPaths::under(base_dir);
    if paths.active.is_file() {
        return Ok(None);
    }
    if !paths.shipped.is_file() {
        return Err(ConfigError::FileNotFound {
            path: paths.shipped,
        });
    }

    let copy_failed = |source| ConfigError::DefaultsCopyError {
        from: paths.shipped.clone(),
        to: paths.active.clone(),
        source,
    };
    if let Some(dir) = paths.active.parent() {
        std::fs::create_dir_all(dir).map_err(copy_failed)?;
    }
    let mut shipped = std::fs::File::open(&paths.shipped).map_err(copy_failed)?;
    let mut active = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&paths.active)
    {
        Ok(file) => file,
        // another process installed it first
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(None),
        Err(e) => return Err(copy_failed(e)),
    };
    std::io::copy(&mut shipped, &mut active).map_err(copy_failed)?;

    info!("installed default config at {}", paths.active.display());
    Ok(Some(paths.active))
}

/// Install the default if needed, then load from `base_dir`.
pub fn load_or_install(base_dir: &Path) -> Result<EngineConfig, ConfigError> {
    ensure_config_file(base_dir)?;
    load_config_from(base_dir)
}

/// [`load_or_install`] relative to the current working directory.
pub fn load_config() -> Result<EngineConfig, ConfigError> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load_or_install(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
    let forecast = &config.forecast;

    if !(1..=30).contains(&forecast.horizon) {
        return Err(ConfigError::ValidationError {
            field: "forecast.horizon".into(),
            message: format!("must be between 1 and 30, got {}", forecast.horizon),
        });
    }

    if !(1900..=2200).contains(&forecast.base_year) {
        return Err(ConfigError::ValidationError {
            field: "forecast.base_year".into(),
            message: format!("must be between 1900 and 2200, got {}", forecast.base_year),
        });
    }

    let salary = forecast.default_salary;
    if !salary.is_finite() || salary <= 0.0 {
        return Err(ConfigError::ValidationError {
            field: "forecast.default_salary".into(),
            message: format!("must be a finite value > 0, got {salary}"),
        });
    }

    if config.data.roster.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.roster".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

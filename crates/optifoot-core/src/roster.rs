// Roster loading: JSON datasets (array or id-keyed object) and flat CSV.
//
// Rows that fail to parse or carry unusable numbers are skipped with a
// warning; a file that yields no valid players is an error.

use serde::de::Error as _;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::player::{PlayerRecord, Position, SummaryRatings, Trend};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("unsupported roster format for {path} (expected .json or .csv)")]
    UnsupportedFormat { path: String },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// A loaded set of players, unique by id, listed by overall rating
/// (highest first, load order among equals).
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<PlayerRecord>,
    index: HashMap<String, usize>,
}

impl Roster {
    /// Build a roster from records. Later records replace earlier ones with
    /// the same id.
    pub fn from_records(records: Vec<PlayerRecord>) -> Self {
        let mut players: Vec<PlayerRecord> = Vec::with_capacity(records.len());
        let mut seen: HashMap<String, usize> = HashMap::new();
        for record in records {
            match seen.get(&record.id).copied() {
                Some(slot) => {
                    warn!("duplicate player id '{}', using latest entry", record.id);
                    players[slot] = record;
                }
                None => {
                    seen.insert(record.id.clone(), players.len());
                    players.push(record);
                }
            }
        }

        // stable: equal ratings keep load order
        players.sort_by(|a, b| b.overall.cmp(&a.overall));
        let index = players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        Roster { players, index }
    }

    pub fn get(&self, id: &str) -> Option<&PlayerRecord> {
        self.index.get(id).map(|&i| &self.players[i])
    }

    /// Players by overall rating, descending.
    pub fn iter(&self) -> std::slice::Iter<'_, PlayerRecord> {
        self.players.iter()
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a PlayerRecord;
    type IntoIter = std::slice::Iter<'a, PlayerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

// ---------------------------------------------------------------------------
// Raw CSV row (private)
// ---------------------------------------------------------------------------

/// Flat roster CSV row. Detail sub-attributes are not carried in CSV.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCsvPlayer {
    id: String,
    name: String,
    age: u32,
    pos: String,
    #[serde(default)]
    nat: String,
    #[serde(default)]
    team: String,
    ovr: u8,
    pac: u8,
    sho: u8,
    pas: u8,
    dri: u8,
    def: u8,
    phy: u8,
    market_value: f64,
    #[serde(default)]
    salary: Option<f64>,
    contract_end: i32,
    #[serde(default)]
    trend: Option<Trend>,
}

impl RawCsvPlayer {
    fn into_record(self) -> PlayerRecord {
        PlayerRecord {
            id: self.id.trim().to_string(),
            name: self.name.trim().to_string(),
            age: self.age,
            position: Position::from_code(&self.pos),
            nationality: self.nat.trim().to_string(),
            club: self.team.trim().to_string(),
            overall: self.ovr,
            ratings: SummaryRatings {
                pace: self.pac,
                shooting: self.sho,
                passing: self.pas,
                dribbling: self.dri,
                defense: self.def,
                physical: self.phy,
            },
            detail: None,
            market_value: self.market_value,
            salary: self.salary,
            contract_end: self.contract_end,
            trend: self.trend.unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Why a parsed record cannot be analysed, if it cannot.
fn rejection_reason(record: &PlayerRecord) -> Option<&'static str> {
    if record.id.is_empty() {
        Some("empty id")
    } else if record.overall == 0 {
        Some("overall rating is 0")
    } else if !record.market_value.is_finite() {
        Some("non-finite market value")
    } else if record.salary.is_some_and(|s| !s.is_finite()) {
        Some("non-finite salary")
    } else {
        None
    }
}

fn keep_valid(record: PlayerRecord, out: &mut Vec<PlayerRecord>) {
    match rejection_reason(&record) {
        Some(reason) => warn!("skipping player '{}': {}", record.id, reason),
        None => out.push(record),
    }
}

// ---------------------------------------------------------------------------
// Reader-based loaders (private, enable testing without temp files)
// ---------------------------------------------------------------------------

fn load_json_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerRecord>, serde_json::Error> {
    let root: serde_json::Value = serde_json::from_reader(rdr)?;
    let entries: Vec<(Option<String>, serde_json::Value)> = match root {
        serde_json::Value::Array(items) => items.into_iter().map(|v| (None, v)).collect(),
        serde_json::Value::Object(map) => map.into_iter().map(|(k, v)| (Some(k), v)).collect(),
        _ => {
            return Err(serde_json::Error::custom(
                "roster JSON must be an array of players or an object keyed by id",
            ))
        }
    };

    let mut players = Vec::new();
    for (key, mut value) in entries {
        // id-keyed datasets may leave the id implicit
        if let (Some(key), Some(obj)) = (&key, value.as_object_mut()) {
            obj.entry("id")
                .or_insert_with(|| serde_json::Value::String(key.clone()));
        }
        match serde_json::from_value::<PlayerRecord>(value) {
            Ok(record) => keep_valid(record, &mut players),
            Err(e) => match key {
                Some(key) => warn!("skipping malformed player '{}': {}", key, e),
                None => warn!("skipping malformed player entry: {}", e),
            },
        }
    }
    Ok(players)
}

fn load_csv_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerRecord>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let mut players = Vec::new();
    for result in reader.deserialize::<RawCsvPlayer>() {
        match result {
            Ok(raw) => keep_valid(raw.into_record(), &mut players),
            Err(e) => {
                warn!("skipping malformed roster row: {}", e);
            }
        }
    }
    Ok(players)
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<std::fs::File, RosterError> {
    std::fs::File::open(path).map_err(|e| RosterError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

fn finish(path: &Path, records: Vec<PlayerRecord>) -> Result<Roster, RosterError> {
    if records.is_empty() {
        return Err(RosterError::Validation(format!(
            "{} produced zero valid players",
            path.display()
        )));
    }
    let roster = Roster::from_records(records);
    info!("loaded {} players from {}", roster.len(), path.display());
    Ok(roster)
}

/// Load a JSON roster: an array of players, or an object keyed by id.
pub fn load_roster_json(path: &Path) -> Result<Roster, RosterError> {
    let records = load_json_from_reader(open(path)?).map_err(|e| RosterError::Json {
        path: path.display().to_string(),
        source: e,
    })?;
    finish(path, records)
}

/// Load a flat CSV roster.
pub fn load_roster_csv(path: &Path) -> Result<Roster, RosterError> {
    let records = load_csv_from_reader(open(path)?).map_err(|e| RosterError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;
    finish(path, records)
}

/// Load a roster, picking the format from the file extension.
pub fn load_roster(path: &Path) -> Result<Roster, RosterError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => load_roster_json(path),
        Some("csv") => load_roster_csv(path),
        _ => Err(RosterError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

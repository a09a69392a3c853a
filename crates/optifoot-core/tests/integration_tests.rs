// Integration tests for the scouting engine.
//
// These exercise the public API end to end: roster files from
// tests/fixtures, configuration from the shipped defaults, and full
// scouting reports built from both.

use std::path::{Path, PathBuf};

use optifoot_core::analytics::Engine;
use optifoot_core::config::{self, EngineConfig};
use optifoot_core::player::Position;
use optifoot_core::report::{analyze, analyze_roster, ReportEnvelope, ScoutingReport};
use optifoot_core::roster::{load_roster, Roster, RosterError};

// ===========================================================================
// Test helpers
// ===========================================================================

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn defaults_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../defaults")
}

fn json_roster() -> Roster {
    load_roster(&fixture("roster.json")).expect("fixture roster should load")
}

fn report_for<'a>(reports: &'a [ScoutingReport], id: &str) -> &'a ScoutingReport {
    reports
        .iter()
        .find(|r| r.player.id == id)
        .unwrap_or_else(|| panic!("no report for {id}"))
}

fn badge_keys(report: &ScoutingReport) -> Vec<&'static str> {
    report.badges.iter().map(|b| b.key).collect()
}

// ===========================================================================
// Roster loading
// ===========================================================================

#[test]
fn json_fixture_skips_invalid_entries() {
    let roster = json_roster();
    // "ghost" has overall 0 and "broken" fails to parse
    assert_eq!(roster.len(), 6);
    assert!(roster.get("ghost").is_none());
    assert!(roster.get("broken").is_none());
}

#[test]
fn json_fixture_listed_by_overall() {
    let roster = json_roster();
    let ids: Vec<_> = roster.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["mbappe", "rodri", "courtois", "van-dijk", "wirtz", "dumfries"]
    );
}

#[test]
fn json_fixture_id_taken_from_key() {
    let roster = json_roster();
    let vvd = roster.get("van-dijk").expect("van-dijk keyed without id field");
    assert_eq!(vvd.name, "Virgil van Dijk");
    assert_eq!(vvd.position, Position::CentreBack);
}

#[test]
fn csv_fixture_loads_and_dedups() {
    let roster = load_roster(&fixture("roster.csv")).unwrap();
    assert_eq!(roster.len(), 4);
    let ids: Vec<_> = roster.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["mbappe", "rodri", "van-dijk", "courtois"]);
    assert_eq!(roster.get("rodri").unwrap().name, "Rodrigo Hernández");
    assert!(roster.get("bad-age").is_none());
    assert!(roster.get("zero").is_none());
}

#[test]
fn csv_and_json_agree_on_seeded_profile() {
    let engine = Engine::default();
    let csv = load_roster(&fixture("roster.csv")).unwrap();
    let json = json_roster();
    assert_eq!(
        engine.advanced_profile(csv.get("mbappe")),
        engine.advanced_profile(json.get("mbappe"))
    );
    // CSV rows carry no detail attributes, so detail-based badges drop out
    let keys: Vec<_> = engine.badges(csv.get("mbappe")).iter().map(|b| b.key).collect();
    assert_eq!(keys, vec!["speedster"]);
}

#[test]
fn unsupported_extension_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.txt");
    std::fs::write(&path, "[]").unwrap();
    assert!(matches!(
        load_roster(&path),
        Err(RosterError::UnsupportedFormat { .. })
    ));
}

// ===========================================================================
// Full reports
// ===========================================================================

#[test]
fn advanced_profiles_for_fixture_roster() {
    let reports = analyze_roster(&Engine::default(), &json_roster());

    let expected = [
        // id, purchase, xg, xa, prog, role, manager
        ("mbappe", 89.0, 0.44, 0.2, 5, "Target Man", "Carlo Ancelotti"),
        ("rodri", 77.0, 0.07, 0.29, 8, "Half-Back", "Pep Guardiola"),
        ("van-dijk", 22.0, 0.08, 0.26, 7, "No-Nonsense CB", "Arne Slot"),
        ("wirtz", 89.0, 0.55, 0.32, 8, "Trequartista", "Arne Slot"),
        ("courtois", 19.0, 0.11, 0.19, 5, "Ball-Playing GK", "Carlo Ancelotti"),
        ("dumfries", 17.0, 0.09, 0.3, 8, "Utility Player", "Simone Inzaghi"),
    ];
    for (id, purchase, xg, xa, prog, role, manager) in expected {
        let profile = &report_for(&reports, id).profile;
        assert_eq!(profile.purchase_price, purchase, "{id} purchase price");
        assert_eq!(profile.xg, xg, "{id} xG");
        assert_eq!(profile.xa, xa, "{id} xA");
        assert_eq!(profile.progressive_passes, prog, "{id} progressive passes");
        assert_eq!(profile.tactical_role, role, "{id} role");
        assert_eq!(profile.manager, manager, "{id} manager");
    }
}

#[test]
fn badges_for_fixture_roster() {
    let reports = analyze_roster(&Engine::default(), &json_roster());
    assert_eq!(
        badge_keys(report_for(&reports, "mbappe")),
        vec!["finisher", "speedster", "dribbler"]
    );
    assert_eq!(
        badge_keys(report_for(&reports, "rodri")),
        vec!["playmaker", "anchor"]
    );
    assert_eq!(
        badge_keys(report_for(&reports, "van-dijk")),
        vec!["aerial", "tank", "anchor"]
    );
    // passing 88 alone is not enough without a vision rating
    assert!(report_for(&reports, "wirtz").badges.is_empty());
    assert!(report_for(&reports, "courtois").badges.is_empty());
    assert_eq!(badge_keys(report_for(&reports, "dumfries")), vec!["complete"]);
}

#[test]
fn forecasts_for_fixture_roster() {
    let reports = analyze_roster(&Engine::default(), &json_roster());

    let vvd: Vec<_> = report_for(&reports, "van-dijk")
        .forecast
        .iter()
        .map(|p| (p.year, p.overall, p.value, p.salary, p.weekly_salary))
        .collect();
    assert_eq!(
        vvd,
        vec![
            (2025, 82, 32.0, 19.0, 369.0),
            (2026, 80, 29.0, 19.0, 374.0),
            (2027, 78, 26.0, 20.0, 379.0),
            (2028, 76, 23.0, 20.0, 384.0),
            (2029, 73, 21.0, 20.0, 384.0),
        ]
    );

    // zero salary on file falls back to the default
    let wirtz: Vec<_> = report_for(&reports, "wirtz")
        .forecast
        .iter()
        .map(|p| (p.overall, p.value, p.salary, p.weekly_salary))
        .collect();
    assert_eq!(wirtz[0], (92, 146.0, 10.0, 201.0));
    assert_eq!(wirtz[4], (92, 105.0, 12.0, 235.0));
}

#[test]
fn roi_in_reports() {
    let reports = analyze_roster(&Engine::default(), &json_roster());
    assert_eq!(report_for(&reports, "mbappe").roi_percent, Some(102));
    // (35 - 22) / 22 = 59.09%
    assert_eq!(report_for(&reports, "van-dijk").roi_percent, Some(59));
}

#[test]
fn roster_reports_are_deterministic() {
    let engine = Engine::default();
    let roster = json_roster();
    let first = analyze_roster(&engine, &roster);
    let second = analyze_roster(&engine, &roster);
    assert_eq!(first, second);

    for (report, record) in first.iter().zip(roster.iter()) {
        assert_eq!(report, &analyze(&engine, record));
    }
}

// ===========================================================================
// Config + roster end to end
// ===========================================================================

#[test]
fn shipped_defaults_drive_a_full_run() {
    let base = tempfile::tempdir().unwrap();
    let defaults = base.path().join("defaults");
    std::fs::create_dir_all(&defaults).unwrap();
    std::fs::copy(defaults_dir().join("engine.toml"), defaults.join("engine.toml")).unwrap();

    let data = base.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::copy(fixture("roster.json"), data.join("roster.json")).unwrap();

    let cfg = config::load_or_install(base.path()).unwrap();
    assert!(base.path().join("config/engine.toml").is_file());
    assert_eq!(cfg, EngineConfig::default());

    let roster = load_roster(&cfg.data.roster_path(base.path())).unwrap();
    let engine = Engine::new(&cfg);
    let envelope = ReportEnvelope::new(&engine, analyze_roster(&engine, &roster));
    assert_eq!(envelope.players.len(), 6);

    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["players"][0]["player"]["id"], "mbappe");
    assert_eq!(json["players"][0]["forecast"][0]["year"], 2025);
}

#[test]
fn configured_horizon_and_base_year() {
    let base = tempfile::tempdir().unwrap();
    let config_dir = base.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("engine.toml"),
        "[forecast]\nhorizon = 3\nbase_year = 2026\n",
    )
    .unwrap();

    let cfg = config::load_config_from(base.path()).unwrap();
    let engine = Engine::new(&cfg);
    let roster = json_roster();
    let series = engine.forecast_value(roster.get("rodri"));
    assert_eq!(series.len(), 3);
    assert_eq!(series[0].year, 2026);
    assert_eq!(series[2].year, 2028);
}

// OptiFoot command-line entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr, so stdout carries only the report)
// 2. Load config (copying defaults on first run)
// 3. Load the roster
// 4. Analyze one player or the whole roster
// 5. Print text or a JSON envelope

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use optifoot_core::analytics::Engine;
use optifoot_core::config;
use optifoot_core::report::{self, ReportEnvelope};
use optifoot_core::roster;

#[derive(Debug, clap::Parser, Clone)]
#[clap(name = "optifoot", about = "Deterministic football scouting reports")]
struct Args {
    /// Roster file (.json or .csv); overrides the configured path
    #[clap(short = 'r', long)]
    roster: Option<PathBuf>,

    /// Report on a single player id
    #[clap(short = 'p', long)]
    player: Option<String>,

    /// Forecast horizon in years; overrides the configured horizon
    #[clap(short = 'y', long)]
    years: Option<usize>,

    /// Emit a JSON envelope instead of text
    #[clap(long)]
    json: bool,

    /// Base directory holding config/ and defaults/ (default: current dir)
    #[clap(long)]
    config_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let args = Args::parse();

    let base_dir = match &args.config_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let mut config = config::load_or_install(&base_dir).context("failed to load configuration")?;

    if let Some(years) = args.years {
        config.forecast.horizon = years;
        config::validate(&config).context("invalid --years value")?;
    }

    let roster_path = match &args.roster {
        Some(path) => path.clone(),
        None => config.data.roster_path(&base_dir),
    };
    let roster = roster::load_roster(&roster_path)
        .with_context(|| format!("failed to load roster from {}", roster_path.display()))?;

    let engine = Engine::new(&config);

    let reports = match &args.player {
        Some(id) => {
            let record = roster
                .get(id)
                .with_context(|| format!("no player with id '{id}' in roster"))?;
            vec![report::analyze(&engine, record)]
        }
        None => report::analyze_roster(&engine, &roster),
    };
    info!("analyzed {} players", reports.len());

    if args.json {
        let envelope = ReportEnvelope::new(&engine, reports);
        let json =
            serde_json::to_string_pretty(&envelope).context("failed to serialize reports")?;
        println!("{json}");
    } else {
        for report in &reports {
            println!("{report}");
        }
    }

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("optifoot=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

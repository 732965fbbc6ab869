//! Chainmail - CLI
//!
//! Word ladder game with a full-screen TUI, a plain text mode, and dataset tools.

use anyhow::{Context, Result, bail};
use chainmail::{
    commands::{Selection, run_check, run_show, run_simple},
    dataset::Dataset,
    output::print_check_report,
    session::{Game, GameConfig},
};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "chainmail",
    about = "Word ladder puzzles: change one letter at a time from start to end",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dataset: 'embedded' (default) or path to a JSON file of chains
    #[arg(short, long, global = true, default_value = "embedded")]
    dataset: String,

    /// Date for the daily puzzle (YYYY-MM-DD, default: today)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Seed for shuffle mode (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// How long a rejected word stays flagged, in milliseconds
    #[arg(long, global = true, default_value = "500")]
    feedback_ms: u64,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show the puzzle for a date or index
    Show {
        /// Pick by dataset index instead of date
        #[arg(short, long)]
        index: Option<usize>,

        /// Also print the solution chain
        #[arg(short, long)]
        reveal: bool,
    },

    /// Check every chain in the dataset is a valid ladder
    Check,
}

/// Load the dataset selected by the -d flag
fn load_dataset(source: &str) -> Result<Dataset> {
    let dataset = match source {
        "embedded" => Dataset::embedded()?,
        path => Dataset::from_file(path)
            .with_context(|| format!("failed to load dataset from {path}"))?,
    };
    tracing::info!(source, chains = dataset.len().get(), "dataset loaded");
    Ok(dataset)
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so it only logs when a log file is given.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(filter)
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    let dataset = load_dataset(&cli.dataset)?;
    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let mut config =
        GameConfig::new(today).with_feedback(Duration::from_millis(cli.feedback_ms));
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    match command {
        Commands::Play => run_play_command(dataset, &config, cli.date.is_none()),
        Commands::Simple => run_simple(&mut Game::new(dataset, &config)),
        Commands::Show { index, reveal } => {
            let selection = index.map_or(Selection::Date(today), Selection::Index);
            run_show(&dataset, selection, reveal)
        }
        Commands::Check => run_check_command(&dataset),
    }
}

fn run_play_command(dataset: Dataset, config: &GameConfig, follow_today: bool) -> Result<()> {
    use chainmail::interactive::{App, run_tui};

    let app = App::new(Game::new(dataset, config), follow_today);
    run_tui(app)
}

fn run_check_command(dataset: &Dataset) -> Result<()> {
    let report = run_check(dataset);
    print_check_report(&report);

    if !report.is_clean() {
        bail!(
            "{} of {} chains failed the check",
            report.failures.len(),
            report.total_records
        );
    }
    Ok(())
}

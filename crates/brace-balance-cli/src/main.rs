use std::path::PathBuf;

use anyhow::{Context, Result};
use brace_balance_core::{
    render_report, BracePair, BraceScanner, FileSource, OutputFormat, ScanSettings, Scanner,
    SettingsOverrides,
};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "brace-balance",
    author,
    version,
    about = "Report the first unmatched closing brace in a file, or its final brace balance"
)]
struct Cli {
    /// File to scan (overrides BRACE_BALANCE_TARGET_PATH and the config file)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Optional settings file (TOML, YAML or JSON) providing target_path and pair
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Delimiter pair to balance: curly, paren, square or angle
    #[arg(long, value_name = "PAIR")]
    pair: Option<BracePair>,

    /// Output format for the report
    #[arg(long, value_enum, default_value_t = Format::Human)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Human,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => OutputFormat::Human,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = ScanSettings::load(
        cli.config.as_deref(),
        SettingsOverrides {
            target_path: cli.path,
            pair: cli.pair,
        },
    )?;
    info!(path = %settings.target_path.display(), pair = %settings.pair, "starting scan");

    let scanner = BraceScanner::with_pair(FileSource::new(&settings.target_path), settings.pair);
    let outcome = scanner
        .scan()
        .with_context(|| format!("failed to scan {}", settings.target_path.display()))?;

    println!("{}", render_report(&outcome, cli.format.into())?);
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

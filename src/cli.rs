use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quiver",
    version,
    about = "Surf forecast fetcher with board recommendations"
)]
pub struct Cli {
    /// Surf spot name, e.g. linda_mar or "Linda Mar" (default from config)
    pub spot: Option<String>,

    /// Save spot info, conditions, recommendations and raw provider data to a JSON file
    #[arg(long)]
    pub save_json: bool,

    /// List available surf spots and exit
    #[arg(long)]
    pub list_spots: bool,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Board catalog (overrides config)
    #[arg(long)]
    pub boards: Option<PathBuf>,

    /// Construction properties (overrides config)
    #[arg(long)]
    pub constructions: Option<PathBuf>,

    /// Surf spot catalog (overrides config)
    #[arg(long)]
    pub spots: Option<PathBuf>,

    /// Forecast days to request
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub days: Option<u32>,

    /// Directory holding quiver.toml and .quiver/local.toml
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

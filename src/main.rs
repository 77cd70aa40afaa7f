mod catalog;
mod cli;
mod conditions;
mod config;
mod error;
mod export;
mod forecast;
mod provider;
mod report;
mod scoring;
mod types;

use crate::catalog::Catalog;
use crate::error::QuiverError;
use crate::provider::surfline::SurflineClient;
use chrono::Local;
use clap::Parser;
use std::io::IsTerminal;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NO_RECOMMENDATION: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
    /// 128 + SIGINT, as shells report it.
    pub const INTERRUPTED: i32 = 130;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, QuiverError> {
    let cfg = config::load_config(&cli.config_dir)?;

    let mut paths = cfg.catalog_paths().relative_to(&cli.config_dir);
    if let Some(boards) = cli.boards {
        paths.boards = boards;
    }
    if let Some(constructions) = cli.constructions {
        paths.constructions = constructions;
    }
    if let Some(spots) = cli.spots {
        paths.spots = spots;
    }

    if cli.list_spots {
        let spots = catalog::load_spots(&paths.spots)?;
        println!("Available surf spots:");
        for spot in spots.listing() {
            println!(
                "  - {} ({})",
                spot.name,
                report::title_case(spot.break_type.as_str())
            );
        }
        return Ok(exit_code::SUCCESS);
    }

    let catalog = Catalog::load(&paths)?;
    debug!(
        boards = catalog.boards.len(),
        constructions = catalog.constructions.len(),
        spots = catalog.spots.len(),
        "catalog ready"
    );

    let spot_query = cli.spot.unwrap_or_else(|| cfg.default_spot());
    let spot = match catalog.spots.lookup(&spot_query) {
        Ok(spot) => spot,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("hint: check available spots with --list-spots");
            return Ok(exit_code::NO_RECOMMENDATION);
        }
    };

    let settings = cfg.provider_settings();
    let days = cli.days.unwrap_or(settings.days);
    info!(
        "fetching forecast for {} ({})",
        spot.name,
        spot.break_type.as_str().replace('_', " ")
    );
    let provider = SurflineClient::new(&settings)?;

    let forecast_report = match forecast::run_forecast(&provider, &catalog, spot, &spot_query, days) {
        Ok(forecast_report) => forecast_report,
        Err(e) if e.is_request_level() => {
            eprintln!("error: {e}");
            return Ok(exit_code::NO_RECOMMENDATION);
        }
        Err(e) => return Err(e),
    };

    if cli.save_json {
        let path = export::write_export(
            &cfg.export_dir(),
            &spot_query,
            &forecast_report,
            Local::now(),
        )?;
        eprintln!("raw data saved to {}", path.display());
    }

    let output_format = match cli.format {
        cli::ReportFormat::Text => report::OutputFormat::Text,
        cli::ReportFormat::Json => report::OutputFormat::Json,
    };
    let rendered = report::render(&forecast_report, output_format)?;
    println!("{rendered}");

    Ok(exit_code::SUCCESS)
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\ncancelled by user");
        std::process::exit(exit_code::INTERRUPTED);
    }) {
        warn!("failed to install interrupt handler: {e}");
    }

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}

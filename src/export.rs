use crate::catalog::spots::normalize_spot_name;
use crate::error::{QuiverError, Result};
use crate::types::catalog::Spot;
use crate::types::conditions::Conditions;
use crate::types::report::{ForecastReport, RawForecast};
use crate::types::scoring::Recommendation;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
struct ForecastDump<'r, 'a> {
    spot_info: &'a Spot,
    conditions: &'r Conditions,
    recommendations: &'r [Recommendation<'a>],
    raw_data: &'r RawForecast,
}

pub fn export_file_name(spot_query: &str, now: DateTime<Local>) -> String {
    let spot = normalize_spot_name(spot_query).replace(['/', '\\'], "_");
    format!("surfline_{spot}_{}.json", now.format("%Y%m%d_%H%M"))
}

/// Writes spot metadata, conditions, the ranked quiver and the raw provider
/// payloads to a timestamped JSON file in `dir`.
pub fn write_export(
    dir: &Path,
    spot_query: &str,
    report: &ForecastReport<'_>,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(QuiverError::Io)?;
    let out_path = dir.join(export_file_name(spot_query, now));
    let dump = ForecastDump {
        spot_info: report.spot,
        conditions: &report.conditions,
        recommendations: &report.recommendations,
        raw_data: &report.raw,
    };
    let json = serde_json::to_string_pretty(&dump)?;
    fs::write(&out_path, json).map_err(QuiverError::Io)?;
    tracing::info!(path = %out_path.display(), "wrote forecast export");
    Ok(out_path)
}

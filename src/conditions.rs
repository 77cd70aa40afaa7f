//! Reduction of raw forecast payloads to current [`Conditions`].
//!
//! Only the first time step of each payload is used. The wave payload is
//! required; wind and tide degrade to zero / N/A when absent or malformed.

use crate::error::{QuiverError, Result};
use crate::types::conditions::{Conditions, TideStatus};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

// --- forecast JSON response types ---

#[derive(Debug, Deserialize)]
struct WaveResponse {
    data: WaveData,
}

#[derive(Debug, Deserialize)]
struct WaveData {
    wave: Vec<WaveStep>,
}

#[derive(Debug, Deserialize)]
struct WaveStep {
    surf: Surf,
    #[serde(default)]
    swells: Vec<Swell>,
}

#[derive(Debug, Deserialize)]
struct Surf {
    min: f64,
    max: f64,
}

#[derive(Debug, Deserialize)]
struct Swell {
    period: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WindResponse {
    data: WindData,
}

#[derive(Debug, Deserialize)]
struct WindData {
    wind: Vec<WindStep>,
}

#[derive(Debug, Default, Deserialize)]
struct WindStep {
    speed: Option<f64>,
    direction: Option<f64>,
}

pub fn parse_conditions(
    wave: &Value,
    wind: Option<&Value>,
    tide: Option<&Value>,
    captured_at: DateTime<Utc>,
) -> Result<Conditions> {
    let response = WaveResponse::deserialize(wave)
        .map_err(|e| QuiverError::ConditionsParse(format!("wave payload: {e}")))?;
    let current = response
        .data
        .wave
        .first()
        .ok_or_else(|| QuiverError::ConditionsParse("wave payload has no time steps".into()))?;

    let wave_height = (current.surf.min + current.surf.max) / 2.0;
    let period = current
        .swells
        .first()
        .and_then(|swell| swell.period)
        .unwrap_or(0.0);

    let current_wind = wind.map(first_wind_step).unwrap_or_default();
    let tide = match tide {
        Some(payload) if payload.get("data").is_some() => TideStatus::Available,
        _ => TideStatus::NotAvailable,
    };

    Ok(Conditions {
        wave_height,
        period,
        wind_speed: current_wind.speed.unwrap_or(0.0),
        wind_direction: current_wind.direction.unwrap_or(0.0),
        tide,
        timestamp: captured_at,
    })
}

fn first_wind_step(payload: &Value) -> WindStep {
    match WindResponse::deserialize(payload) {
        Ok(response) => response.data.wind.into_iter().next().unwrap_or_default(),
        Err(e) => {
            warn!("ignoring malformed wind payload: {e}");
            WindStep::default()
        }
    }
}

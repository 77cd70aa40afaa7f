pub mod surfline;

use crate::error::Result;
use crate::types::report::RawForecast;
use serde_json::Value;
use tracing::{info, warn};

/// Source of raw forecast payloads for a spot.
pub trait ConditionsProvider {
    fn fetch_wave(&self, spot_id: &str, days: u32) -> Result<Value>;
    fn fetch_wind(&self, spot_id: &str, days: u32) -> Result<Value>;
    fn fetch_tides(&self, spot_id: &str, days: u32) -> Result<Value>;
}

/// Runs the three fetches. A wave failure fails the request; wind and tide
/// failures are logged and leave their payload empty.
pub fn fetch_forecast<P: ConditionsProvider + ?Sized>(
    provider: &P,
    spot_id: &str,
    days: u32,
) -> Result<RawForecast> {
    info!(spot_id, days, "fetching forecast");
    let wave = provider.fetch_wave(spot_id, days)?;
    let wind = provider
        .fetch_wind(spot_id, days)
        .map_err(|e| warn!("wind data unavailable: {e}"))
        .ok();
    let tide = provider
        .fetch_tides(spot_id, days)
        .map_err(|e| warn!("tide data unavailable: {e}"))
        .ok();
    Ok(RawForecast { wave, wind, tide })
}

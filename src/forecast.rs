use crate::catalog::Catalog;
use crate::conditions::parse_conditions;
use crate::error::Result;
use crate::provider::{fetch_forecast, ConditionsProvider};
use crate::scoring::{recommend, ScoringInput};
use crate::types::catalog::Spot;
use crate::types::report::ForecastReport;
use chrono::Utc;
use tracing::info;

/// Fetches conditions for `spot` and ranks the whole quiver against them.
/// Fails without recommendations when the wave data cannot be fetched or
/// parsed.
pub fn run_forecast<'a, P: ConditionsProvider + ?Sized>(
    provider: &P,
    catalog: &'a Catalog,
    spot: &'a Spot,
    query: &'a str,
    days: u32,
) -> Result<ForecastReport<'a>> {
    let raw = fetch_forecast(provider, &spot.surfline_id, days)?;
    let conditions = parse_conditions(
        &raw.wave,
        raw.wind.as_ref(),
        raw.tide.as_ref(),
        Utc::now(),
    )?;
    info!(
        wave_height = conditions.wave_height,
        period = conditions.period,
        wind_speed = conditions.wind_speed,
        "parsed conditions"
    );

    let input = ScoringInput::from_conditions(&conditions, Some(spot));
    let recommendations = recommend(&catalog.boards, &catalog.constructions, &input);

    Ok(ForecastReport {
        spot,
        query,
        conditions,
        recommendations,
        raw,
    })
}

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TideStatus {
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl TideStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TideStatus::Available => "Available",
            TideStatus::NotAvailable => "N/A",
        }
    }
}

/// Current conditions at a spot, taken from the first forecast time step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conditions {
    /// Feet, mean of the reported surf min/max.
    pub wave_height: f64,
    /// Seconds, from the primary swell.
    pub period: f64,
    /// Miles per hour.
    pub wind_speed: f64,
    /// Degrees.
    pub wind_direction: f64,
    pub tide: TideStatus,
    pub timestamp: DateTime<Utc>,
}

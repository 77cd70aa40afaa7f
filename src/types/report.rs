use crate::types::catalog::Spot;
use crate::types::conditions::Conditions;
use crate::types::scoring::Recommendation;
use serde::Serialize;
use serde_json::Value;

/// Provider payloads as received. Wind and tide are optional because their
/// fetch failures do not abort a request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RawForecast {
    pub wave: Value,
    pub wind: Option<Value>,
    pub tide: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport<'a> {
    pub spot: &'a Spot,
    /// Spot name as the user typed it.
    #[serde(skip)]
    pub query: &'a str,
    pub conditions: Conditions,
    pub recommendations: Vec<Recommendation<'a>>,
    #[serde(skip)]
    pub raw: RawForecast,
}

impl<'a> ForecastReport<'a> {
    pub fn top_pick(&self) -> Option<&Recommendation<'a>> {
        self.recommendations.first()
    }
}

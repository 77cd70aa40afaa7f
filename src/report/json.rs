use crate::types::report::ForecastReport;

pub fn to_json(report: &ForecastReport<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

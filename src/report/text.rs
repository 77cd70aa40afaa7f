use super::title_case;
use crate::types::report::ForecastReport;
use crate::types::scoring::Recommendation;

const RULE: &str = "============================================================";
const TOP_N: usize = 3;
const FALLBACK_CONSTRUCTION_DESCRIPTION: &str = "Traditional polyurethane construction";

pub fn to_text(report: &ForecastReport<'_>) -> String {
    let spot = report.spot;
    let conditions = &report.conditions;
    let spot_type = title_case(spot.break_type.as_str());

    let mut output = String::new();
    output.push_str(&format!("SURF FORECAST: {}\n", report.query.to_uppercase()));
    output.push_str(RULE);
    output.push('\n');
    output.push_str("SPOT INFO:\n");
    output.push_str(&format!("   Type: {spot_type}\n"));
    if let Some(description) = &spot.description {
        output.push_str(&format!("   {description}\n"));
    }

    output.push_str("\nCONDITIONS:\n");
    output.push_str(&format!(
        "   Wave Height: {:.1}ft\n   Period: {:.0}s\n   Wind: {:.0}mph @ {:.0}°\n   Tide: {}\n   Updated: {}\n",
        conditions.wave_height,
        conditions.period,
        conditions.wind_speed,
        conditions.wind_direction,
        conditions.tide.label(),
        conditions.timestamp.format("%H:%M UTC")
    ));

    output.push_str("\nBOARD RECOMMENDATIONS:\n");
    if report.recommendations.is_empty() {
        output.push_str("\n- none (quiver is empty)\n");
    }
    for (rank, recommendation) in report.recommendations.iter().take(TOP_N).enumerate() {
        push_recommendation(&mut output, rank + 1, recommendation);
    }

    if report.top_pick().is_some() {
        let characteristics = spot.characteristics.as_ref();
        let or_unknown = |value: Option<&str>| title_case(value.unwrap_or("unknown"));
        let wave_quality = characteristics.and_then(|c| c.wave_quality.as_ref());
        let skill_level = characteristics.and_then(|c| c.skill_level.as_ref());
        let crowd_factor = characteristics.and_then(|c| c.crowd_factor.as_ref());
        let best_boards = characteristics
            .map(|c| c.best_boards.join(", "))
            .unwrap_or_default();

        output.push_str("\nSPOT ANALYSIS (Top Pick):\n");
        output.push_str(&format!(
            "   Wave Quality: {}\n   Skill Level: {}\n   Crowd Factor: {}\n   Best Boards for This Spot: {best_boards}\n",
            or_unknown(wave_quality.map(|q| q.as_str())),
            or_unknown(skill_level.map(|s| s.as_str())),
            or_unknown(crowd_factor.map(|c| c.as_str())),
        ));
    }

    output.push('\n');
    output.push_str(RULE);
    output.push_str("\nRECOMMENDATION SUMMARY:\n");
    output.push_str(&format!(
        "{} ({spot_type}): {:.1}ft @ {:.0}s, {:.0}mph wind\n",
        report.query, conditions.wave_height, conditions.period, conditions.wind_speed
    ));
    if let Some(top) = report.top_pick() {
        output.push_str(&format!(
            "→ Take the {} ({} construction)\n",
            top.board.name, top.construction_type
        ));
    }

    output
}

fn push_recommendation(output: &mut String, rank: usize, recommendation: &Recommendation<'_>) {
    let board = recommendation.board;
    let construction_description = recommendation
        .construction_info
        .description
        .as_deref()
        .unwrap_or(FALLBACK_CONSTRUCTION_DESCRIPTION);

    output.push_str(&format!(
        "\n{rank}. {} (Score: {:.1}/8.0)\n   {} x {} | {}L | {}\n   {} Construction\n   {}\n",
        board.name,
        recommendation.score,
        board.length,
        board.width_label(),
        board.volume,
        board.board_type,
        title_case(recommendation.construction_type),
        construction_description,
    ));
    if !board.description.is_empty() {
        output.push_str(&format!("   {}\n", board.description));
    }
    output.push_str(&format!("   ✓ {}\n", recommendation.reasoning_text()));
}

//! Board-to-conditions scoring.
//!
//! Every board is scored independently with an additive rubric; each rule that
//! fires adds points and a [`Reason`] tagged with its [`RuleId`]. Bonuses are
//! cumulative, so a board can be rewarded for the same trait by several rules
//! (e.g. a fish in small surf earns both the wave-quality and the board-type
//! bonus). No rule subtracts points.

use crate::catalog::ConstructionTable;
use crate::types::catalog::{
    Board, BoardType, BreakType, Construction, Rating, SkillLevel, Spot, WaveQuality,
};
use crate::types::conditions::Conditions;
use crate::types::scoring::{Reason, Recommendation, RuleId, Score};

const VOLUME_THRESHOLD_L: f64 = 35.0;

#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub wave_height: f64,
    pub period: f64,
    pub wind_speed: f64,
    pub spot: Option<&'a Spot>,
}

impl<'a> ScoringInput<'a> {
    pub fn from_conditions(conditions: &Conditions, spot: Option<&'a Spot>) -> Self {
        Self {
            wave_height: conditions.wave_height,
            period: conditions.period,
            wind_speed: conditions.wind_speed,
            spot,
        }
    }
}

#[derive(Default)]
struct Tally {
    score: Score,
    reasoning: Vec<Reason>,
}

impl Tally {
    fn add(&mut self, points: Score, rule: RuleId, message: impl Into<String>) {
        self.score += points;
        self.reasoning.push(Reason::new(rule, message));
    }
}

/// Scores every board and returns them best first. The sort is stable, so
/// boards with equal scores keep catalog order.
pub fn recommend<'a>(
    boards: &'a [Board],
    constructions: &'a ConstructionTable,
    input: &ScoringInput<'_>,
) -> Vec<Recommendation<'a>> {
    let mut recommendations = boards
        .iter()
        .map(|board| score_board(board, constructions.resolve(&board.construction), input))
        .collect::<Vec<_>>();
    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommendations
}

pub fn score_board<'a>(
    board: &'a Board,
    construction: &'a Construction,
    input: &ScoringInput<'_>,
) -> Recommendation<'a> {
    let mut tally = Tally::default();

    score_wave_size(&mut tally, board, input.wave_height);
    score_period(&mut tally, board, input.period);
    score_wind(&mut tally, input.wind_speed);
    if let Some(spot) = input.spot {
        score_spot(&mut tally, board, spot, input);
    }
    score_construction(&mut tally, &board.construction, construction, input);
    score_board_type(&mut tally, board, input);

    Recommendation {
        board,
        construction_type: &board.construction,
        construction_info: construction,
        score: tally.score,
        reasoning: tally.reasoning,
    }
}

fn score_wave_size(tally: &mut Tally, board: &Board, wave_height: f64) {
    let [min, max] = board.ideal_wave_range;
    if (min..=max).contains(&wave_height) {
        tally.add(
            3.0,
            RuleId::WaveSize,
            format!("Perfect wave size ({wave_height:?}ft in {min}-{max}ft range)"),
        );
    } else if wave_height < min {
        tally.add(
            (2.0 - (min - wave_height)).max(0.0),
            RuleId::WaveSize,
            format!("Below ideal size ({wave_height:?}ft vs {min}ft+ ideal)"),
        );
    } else {
        tally.add(
            (2.0 - (wave_height - max)).max(0.0),
            RuleId::WaveSize,
            format!("Above ideal size ({wave_height:?}ft vs {max}ft max)"),
        );
    }
}

fn score_period(tally: &mut Tally, board: &Board, period: f64) {
    let [min, max] = board.ideal_period_range;
    if (min..=max).contains(&period) {
        tally.add(
            2.0,
            RuleId::Period,
            format!("Good period ({period}s in {min}-{max}s range)"),
        );
    } else {
        let midpoint = (min + max) / 2.0;
        tally.add(
            (1.0 - (period - midpoint).abs() / 5.0).max(0.0),
            RuleId::Period,
            format!("Period okay ({period}s vs {min}-{max}s ideal)"),
        );
    }
}

fn score_wind(tally: &mut Tally, wind_speed: f64) {
    if wind_speed < 10.0 {
        tally.add(1.0, RuleId::Wind, "Clean conditions");
    } else if wind_speed < 15.0 {
        tally.add(0.5, RuleId::Wind, "Slightly windy");
    } else {
        tally.add(0.0, RuleId::Wind, "Windy conditions");
    }
}

/// Break type, wave quality and skill level. Only applies to spots that
/// carry characteristics.
fn score_spot(tally: &mut Tally, board: &Board, spot: &Spot, input: &ScoringInput<'_>) {
    let Some(characteristics) = &spot.characteristics else {
        return;
    };
    let soft_board = matches!(
        board.board_type,
        BoardType::FishHybrid | BoardType::Longboard
    );

    match spot.break_type {
        BreakType::BeachBreak => {
            if soft_board {
                tally.add(0.5, RuleId::BreakType, "Great for beach breaks");
            }
        }
        BreakType::ReefBreak | BreakType::PointBreak => {
            if board.board_type == BoardType::PerformanceShortboard && input.period > 12.0 {
                tally.add(
                    1.0,
                    RuleId::BreakType,
                    "Performance board ideal for reef breaks",
                );
            } else if board.board_type == BoardType::Gun && input.wave_height > 6.0 {
                tally.add(1.5, RuleId::BreakType, "Gun perfect for big reef waves");
            }
        }
        _ => {}
    }

    match &characteristics.wave_quality {
        Some(WaveQuality::Forgiving) if soft_board => {
            tally.add(
                0.5,
                RuleId::WaveQuality,
                "Forgiving waves suit this board type",
            );
        }
        Some(WaveQuality::Excellent | WaveQuality::Challenging)
            if board.board_type == BoardType::PerformanceShortboard =>
        {
            tally.add(
                0.5,
                RuleId::WaveQuality,
                "High-performance board for quality waves",
            );
        }
        _ => {}
    }

    match &characteristics.skill_level {
        Some(SkillLevel::BeginnerFriendly) if board.volume > VOLUME_THRESHOLD_L => {
            tally.add(
                0.5,
                RuleId::SkillLevel,
                "Extra volume good for forgiving spots",
            );
        }
        Some(SkillLevel::Advanced) if board.volume < VOLUME_THRESHOLD_L => {
            tally.add(
                0.5,
                RuleId::SkillLevel,
                "Lower volume suits advanced breaks",
            );
        }
        _ => {}
    }
}

fn score_construction(
    tally: &mut Tally,
    construction_type: &str,
    construction: &Construction,
    input: &ScoringInput<'_>,
) {
    let small_waves = input.wave_height < 3.0;

    if small_waves && construction.small_wave_performance == Some(Rating::Excellent) {
        tally.add(
            1.0,
            RuleId::Construction,
            format!("{construction_type} construction excels in small waves"),
        );
    }
    if input.period > 13.0 && construction.powerful_wave_performance == Some(Rating::Excellent) {
        tally.add(
            1.0,
            RuleId::Construction,
            format!("{construction_type} construction handles power well"),
        );
    }
    if small_waves
        && input.period < 10.0
        && matches!(
            construction.paddle_power,
            Some(Rating::High | Rating::Excellent)
        )
    {
        tally.add(
            0.5,
            RuleId::Construction,
            format!("{construction_type} gives extra paddle power"),
        );
    }
    if input.period > 12.0 && matches!(construction.flex, Some(Rating::High | Rating::MediumHigh))
    {
        tally.add(
            0.5,
            RuleId::Construction,
            format!("{construction_type} provides responsive feel"),
        );
    }
}

fn score_board_type(tally: &mut Tally, board: &Board, input: &ScoringInput<'_>) {
    match board.board_type {
        BoardType::FishHybrid if input.wave_height < 3.0 => {
            tally.add(1.0, RuleId::BoardType, "Fish design excels in small waves");
        }
        BoardType::PerformanceShortboard if input.period > 12.0 => {
            tally.add(
                1.0,
                RuleId::BoardType,
                "Performance board great for powerful waves",
            );
        }
        BoardType::TwinFin if (3.0..=5.0).contains(&input.wave_height) => {
            tally.add(0.5, RuleId::BoardType, "Twin fin sweet spot conditions");
        }
        _ => {}
    }
}

use crate::types::catalog::{Board, Construction};
use serde::Serialize;

pub type Score = f64;

/// Scoring rule that contributed a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    WaveSize,
    Period,
    Wind,
    BreakType,
    WaveQuality,
    SkillLevel,
    Construction,
    BoardType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reason {
    pub rule: RuleId,
    pub message: String,
}

impl Reason {
    pub fn new(rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub board: &'a Board,
    /// Construction id as declared by the board.
    pub construction_type: &'a str,
    pub construction_info: &'a Construction,
    pub score: Score,
    pub reasoning: Vec<Reason>,
}

impl Recommendation<'_> {
    #[cfg(test)]
    pub fn has_rule(&self, rule: RuleId) -> bool {
        self.reasoning.iter().any(|reason| reason.rule == rule)
    }

    pub fn reasoning_text(&self) -> String {
        self.reasoning
            .iter()
            .map(|reason| reason.message.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

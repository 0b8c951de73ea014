//! Skill categories and scores for the radar charts.

use serde::{Deserialize, Serialize};

/// Upper bound of the skill score scale. Scores are validated against this
/// range at load time, and the radar chart's radial axis is fixed to it.
pub const MAX_SCORE: u32 = 100;

/// A single named skill with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name as it appears in the skills document.
    pub name: String,
    /// Score in `0..=MAX_SCORE`.
    pub score: u32,
}

/// One chart's worth of skills.
///
/// Categories and their skills keep the insertion order of the skills
/// document; that order drives both the chart ordering on the page and the
/// angular ordering of each chart's axes. A category always holds at least
/// one skill (enforced when the document is loaded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Category name, used as the chart title.
    pub name: String,
    /// Skills in document order.
    pub skills: Vec<Skill>,
}

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::equation::Equation;
use crate::step::SolutionStep;

/// How a problem is presented to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeMode {
    /// Hints and the expected step path are shown.
    Guided,
    /// Hints on request.
    Practice,
    /// No hints.
    Challenge,
}

impl PracticeMode {
    pub const ALL: [PracticeMode; 3] = [
        PracticeMode::Guided,
        PracticeMode::Practice,
        PracticeMode::Challenge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PracticeMode::Guided => "guided",
            PracticeMode::Practice => "practice",
            PracticeMode::Challenge => "challenge",
        }
    }

    pub fn allows_hints(self) -> bool {
        !matches!(self, PracticeMode::Challenge)
    }
}

impl fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pre-authored problem as supplied by a problem repository.
///
/// The core trusts this record: `equation.solution` is ground truth and the
/// expected steps are shown as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationProblem {
    pub id: String,
    pub mode: PracticeMode,
    pub difficulty: Difficulty,
    pub equation: Equation,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub expected_steps: Vec<SolutionStep>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl EquationProblem {
    pub fn expected_answer(&self) -> f64 {
        self.equation.solution
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

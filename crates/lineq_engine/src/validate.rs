//! Final-answer validation.
//!
//! The mistake classification is a heuristic meant for feedback copy. It
//! looks only at the submitted number, so it cannot know what the learner
//! actually did wrong.

use lineq_ast::EquationProblem;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mistake::MistakeKind;

/// Answers within this distance of the solution are correct.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Wrong answers further than this from the solution count as calculation errors.
pub const DEFAULT_CALCULATION_GAP: f64 = 10.0;

/// Pedagogical cutoffs used by the diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisThresholds {
    pub tolerance: f64,
    pub calculation_gap: f64,
}

impl Default for DiagnosisThresholds {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            calculation_gap: DEFAULT_CALCULATION_GAP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_correct: bool,
    pub submitted: f64,
    pub expected: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mistake_kind: Option<MistakeKind>,
    /// Closeness of the answer, in `[0, 1]`.
    pub partial_credit: f64,
}

impl ValidationResult {
    /// Feedback line for the learner.
    pub fn feedback(&self) -> &'static str {
        match self.mistake_kind {
            None if self.is_correct => "Correct!",
            None => "Not quite.",
            Some(kind) => kind.remediation(),
        }
    }
}

// Same convention as a three-way signum: zero has its own sign.
fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    thresholds: DiagnosisThresholds,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: DiagnosisThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &DiagnosisThresholds {
        &self.thresholds
    }

    pub fn validate(&self, problem: &EquationProblem, submitted: f64) -> ValidationResult {
        let result = self.validate_answer(problem.expected_answer(), submitted);
        debug!(
            target: "lineq::validate",
            problem = %problem.id,
            submitted,
            correct = result.is_correct,
            mistake = ?result.mistake_kind,
            "validated answer"
        );
        result
    }

    /// Grade `submitted` against `expected` directly.
    pub fn validate_answer(&self, expected: f64, submitted: f64) -> ValidationResult {
        if !submitted.is_finite() {
            return ValidationResult {
                is_correct: false,
                submitted,
                expected,
                mistake_kind: Some(MistakeKind::InterpretationError),
                partial_credit: 0.0,
            };
        }

        let distance = (submitted - expected).abs();
        if distance < self.thresholds.tolerance {
            return ValidationResult {
                is_correct: true,
                submitted,
                expected,
                mistake_kind: None,
                partial_credit: 1.0,
            };
        }

        let mistake = if sign(submitted) != sign(expected) {
            MistakeKind::SignError
        } else if distance > self.thresholds.calculation_gap {
            MistakeKind::CalculationError
        } else {
            MistakeKind::ConceptualError
        };

        let partial_credit = if expected == 0.0 {
            0.0
        } else {
            (1.0 - distance / expected.abs()).clamp(0.0, 1.0)
        };

        ValidationResult {
            is_correct: false,
            submitted,
            expected,
            mistake_kind: Some(mistake),
            partial_credit,
        }
    }
}

/// Validate with the default thresholds.
pub fn validate(problem: &EquationProblem, submitted: f64) -> ValidationResult {
    Validator::default().validate(problem, submitted)
}

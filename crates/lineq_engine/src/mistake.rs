use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of a wrong answer, used to pick feedback copy.
///
/// The validator only ever produces `SignError`, `CalculationError`,
/// `ConceptualError` and (for unreadable input) `InterpretationError`;
/// the remaining kinds can be reported by richer front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MistakeKind {
    SignError,
    TranspositionError,
    CalculationError,
    ConceptualError,
    OrderError,
    InterpretationError,
}

impl MistakeKind {
    pub fn name(self) -> &'static str {
        match self {
            MistakeKind::SignError => "sign error",
            MistakeKind::TranspositionError => "transposition error",
            MistakeKind::CalculationError => "calculation error",
            MistakeKind::ConceptualError => "conceptual error",
            MistakeKind::OrderError => "order error",
            MistakeKind::InterpretationError => "interpretation error",
        }
    }

    /// Fixed remediation advice for this kind of mistake.
    pub fn remediation(self) -> &'static str {
        match self {
            MistakeKind::SignError => {
                "Check your signs: when a term moves to the other side, its sign flips."
            }
            MistakeKind::TranspositionError => {
                "Move a term by doing the opposite operation to both sides, not to one."
            }
            MistakeKind::CalculationError => {
                "Your answer is far off. Redo the arithmetic one step at a time."
            }
            MistakeKind::ConceptualError => {
                "You are close. Substitute your answer back into the equation to check it."
            }
            MistakeKind::OrderError => {
                "Undo addition and subtraction first, then multiplication and division."
            }
            MistakeKind::InterpretationError => {
                "Read the problem again and make sure your answer is a single number."
            }
        }
    }
}

impl fmt::Display for MistakeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

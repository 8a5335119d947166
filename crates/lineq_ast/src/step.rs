use serde::{Deserialize, Serialize};

use crate::equation::Equation;
use crate::operation::Operation;

/// Snapshot of the equation after one operation.
///
/// Step 0 is the untouched problem equation and carries no operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionStep {
    pub step_index: usize,
    pub equation: Equation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_applied: Option<Operation>,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub is_key_step: bool,
}

impl SolutionStep {
    pub fn initial(equation: Equation) -> Self {
        Self {
            step_index: 0,
            equation,
            operation_applied: None,
            note: "Starting equation".to_string(),
            is_key_step: false,
        }
    }

    pub fn is_initial(&self) -> bool {
        self.step_index == 0 && self.operation_applied.is_none()
    }
}

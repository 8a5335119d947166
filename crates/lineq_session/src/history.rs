//! Step history with a movable cursor.
//!
//! The history is a linear undo/redo stack: applying an operation while the
//! cursor is behind the last step discards the steps after the cursor before
//! the new one is appended.

use lineq_ast::{Equation, Operation, SolutionStep};
use lineq_engine::{apply, is_isolated, step_note, OperationError};
use tracing::debug;

/// Snapshots of a problem's equation, one per applied operation.
///
/// Invariant: `steps` is never empty and `cursor < steps.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformationHistory {
    steps: Vec<SolutionStep>,
    cursor: usize,
}

impl TransformationHistory {
    pub fn new(equation: Equation) -> Self {
        Self {
            steps: vec![SolutionStep::initial(equation)],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &SolutionStep {
        &self.steps[self.cursor]
    }

    pub fn current_equation(&self) -> &Equation {
        &self.current().equation
    }

    pub fn original_equation(&self) -> &Equation {
        &self.steps[0].equation
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All retained steps, including any that can be redone.
    pub fn steps(&self) -> &[SolutionStep] {
        &self.steps
    }

    /// Steps from the original equation up to and including the cursor.
    pub fn active_path(&self) -> &[SolutionStep] {
        &self.steps[..=self.cursor]
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: the original equation is never removed.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.steps.len()
    }

    /// Apply `operation` to the current equation and push the result.
    ///
    /// On error nothing changes.
    pub fn apply_and_push(&mut self, operation: &Operation) -> Result<&SolutionStep, OperationError> {
        let before = self.current_equation();
        let next = apply(before, operation)?;
        let note = step_note(operation, before, &next);
        let is_key_step = is_isolated(&next).is_some() && is_isolated(before).is_none();

        let discarded = self.steps.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(
                target: "lineq::history",
                discarded,
                cursor = self.cursor,
                "dropping redo branch"
            );
            self.steps.truncate(self.cursor + 1);
        }

        let step_index = self.steps.len();
        self.steps.push(SolutionStep {
            step_index,
            equation: next,
            operation_applied: Some(operation.clone()),
            note,
            is_key_step,
        });
        self.cursor = step_index;
        Ok(&self.steps[step_index])
    }

    /// Move the cursor back one step. Returns whether it moved.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor forward one step. Returns whether it moved.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Back to the original equation with no redo branch.
    pub fn reset(&mut self) {
        self.steps.truncate(1);
        self.cursor = 0;
    }
}

use lineq_ast::{Equation, EquationProblem, Operation, SolutionStep};
use lineq_engine::{weights_of, BalanceWeights, OperationError, ValidationResult, Validator};
use tracing::info;

use crate::history::TransformationHistory;

/// One learner working on one problem.
///
/// Owns the live equation (through its history). Dropping a session abandons
/// the problem without touching any persisted progress.
#[derive(Debug, Clone)]
pub struct ProblemSession {
    problem: EquationProblem,
    history: TransformationHistory,
    hints_shown: usize,
    attempts: Vec<ValidationResult>,
}

impl ProblemSession {
    pub fn new(problem: EquationProblem) -> Self {
        let history = TransformationHistory::new(problem.equation.clone());
        Self {
            problem,
            history,
            hints_shown: 0,
            attempts: Vec::new(),
        }
    }

    pub fn problem(&self) -> &EquationProblem {
        &self.problem
    }

    pub fn history(&self) -> &TransformationHistory {
        &self.history
    }

    pub fn current_equation(&self) -> &Equation {
        self.history.current_equation()
    }

    pub fn weights(&self) -> BalanceWeights {
        weights_of(self.current_equation())
    }

    pub fn apply(&mut self, operation: &Operation) -> Result<&SolutionStep, OperationError> {
        self.history.apply_and_push(operation)
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn restart(&mut self) {
        self.history.reset();
    }

    /// Reveal the next hint, if the mode allows hints and any are left.
    pub fn next_hint(&mut self) -> Option<&str> {
        if !self.problem.mode.allows_hints() || self.hints_shown >= self.problem.hints.len() {
            return None;
        }
        let hint = &self.problem.hints[self.hints_shown];
        self.hints_shown += 1;
        Some(hint)
    }

    pub fn hints_shown(&self) -> usize {
        self.hints_shown
    }

    /// The authored step that would follow the current cursor position.
    pub fn expected_next_step(&self) -> Option<&SolutionStep> {
        self.problem
            .expected_steps
            .iter()
            .find(|s| s.step_index == self.history.cursor() + 1)
    }

    /// Grade a final answer. Independent of where the history cursor is.
    pub fn submit(&mut self, answer: f64, validator: &Validator) -> ValidationResult {
        let result = validator.validate(&self.problem, answer);
        if result.is_correct {
            info!(
                target: "lineq::session",
                problem = %self.problem.id,
                attempts = self.attempts.len() + 1,
                steps = self.history.cursor(),
                "problem solved"
            );
        }
        self.attempts.push(result);
        result
    }

    pub fn attempts(&self) -> &[ValidationResult] {
        &self.attempts
    }

    pub fn is_solved(&self) -> bool {
        self.attempts.iter().any(|r| r.is_correct)
    }
}

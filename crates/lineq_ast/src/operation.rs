use serde::{Deserialize, Serialize};
use std::fmt;

use crate::display::format_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Simplify,
}

impl OperationKind {
    /// Whether the operation needs a numeric operand.
    pub fn takes_value(self) -> bool {
        !matches!(self, OperationKind::Simplify)
    }

    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Subtract => "subtract",
            OperationKind::Multiply => "multiply",
            OperationKind::Divide => "divide",
            OperationKind::Simplify => "simplify",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which side(s) of the equation an operation acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    #[default]
    Both,
    Left,
    Right,
}

impl Target {
    pub fn includes_left(self) -> bool {
        matches!(self, Target::Both | Target::Left)
    }

    pub fn includes_right(self) -> bool {
        matches!(self, Target::Both | Target::Right)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Both => write!(f, "both sides"),
            Target::Left => write!(f, "the left side"),
            Target::Right => write!(f, "the right side"),
        }
    }
}

/// A learner-invoked algebraic action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub kind: OperationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default)]
    pub target: Target,
    /// Author-supplied wording; generated narration is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Operation {
    pub fn new(kind: OperationKind, value: Option<f64>, target: Target) -> Self {
        Self {
            kind,
            value,
            target,
            description: None,
        }
    }

    pub fn add(value: f64, target: Target) -> Self {
        Self::new(OperationKind::Add, Some(value), target)
    }

    pub fn subtract(value: f64, target: Target) -> Self {
        Self::new(OperationKind::Subtract, Some(value), target)
    }

    pub fn multiply(value: f64, target: Target) -> Self {
        Self::new(OperationKind::Multiply, Some(value), target)
    }

    pub fn divide(value: f64, target: Target) -> Self {
        Self::new(OperationKind::Divide, Some(value), target)
    }

    pub fn simplify(target: Target) -> Self {
        Self::new(OperationKind::Simplify, None, target)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) if self.kind.takes_value() => {
                write!(f, "{} {} ({})", self.kind, format_number(v), self.target)
            }
            _ => write!(f, "{} ({})", self.kind, self.target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_defaults_to_both_sides_on_input() {
        let op: Operation = serde_json::from_str(r#"{"kind":"subtract","value":3}"#).unwrap();
        assert_eq!(op, Operation::subtract(3.0, Target::Both));
    }

    #[test]
    fn display_includes_operand_and_target() {
        assert_eq!(
            Operation::divide(2.0, Target::Left).to_string(),
            "divide 2 (the left side)"
        );
        assert_eq!(
            Operation::simplify(Target::Both).to_string(),
            "simplify (both sides)"
        );
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::display::format_number;

/// A single additive component of one side of an equation.
///
/// A term is either `coefficient * name` or a plain number, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Term {
    Variable { coefficient: f64, name: String },
    Constant { value: f64 },
}

impl Term {
    pub fn var(coefficient: f64, name: impl Into<String>) -> Self {
        Term::Variable {
            coefficient,
            name: name.into(),
        }
    }

    pub fn constant(value: f64) -> Self {
        Term::Constant { value }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Term::Constant { .. })
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable { .. })
    }

    /// The numeric component: coefficient for variable terms, value for constants.
    pub fn numeric(&self) -> f64 {
        match self {
            Term::Variable { coefficient, .. } => *coefficient,
            Term::Constant { value } => *value,
        }
    }

    /// Same term with its numeric component multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Term {
        match self {
            Term::Variable { coefficient, name } => Term::Variable {
                coefficient: coefficient * factor,
                name: name.clone(),
            },
            Term::Constant { value } => Term::Constant {
                value: value * factor,
            },
        }
    }

    /// Same term with its numeric component divided by `divisor`.
    pub fn divided(&self, divisor: f64) -> Term {
        match self {
            Term::Variable { coefficient, name } => Term::Variable {
                coefficient: coefficient / divisor,
                name: name.clone(),
            },
            Term::Constant { value } => Term::Constant {
                value: value / divisor,
            },
        }
    }

    /// Same term with `delta` added to its numeric component.
    pub fn shifted(&self, delta: f64) -> Term {
        match self {
            Term::Variable { coefficient, name } => Term::Variable {
                coefficient: coefficient + delta,
                name: name.clone(),
            },
            Term::Constant { value } => Term::Constant {
                value: value + delta,
            },
        }
    }

    /// Numeric value of the term with the variable bound to `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Term::Variable { coefficient, .. } => coefficient * x,
            Term::Constant { value } => *value,
        }
    }

    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Term::Variable { name, .. } => Some(name),
            Term::Constant { .. } => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Decided on the printed coefficient so `1.0000000000000002x` reads `x`.
            Term::Variable { coefficient, name } => match format_number(*coefficient).as_str() {
                "1" => write!(f, "{}", name),
                "-1" => write!(f, "-{}", name),
                number => write!(f, "{}{}", number, name),
            },
            Term::Constant { value } => write!(f, "{}", format_number(*value)),
        }
    }
}

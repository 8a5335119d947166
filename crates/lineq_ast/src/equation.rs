use serde::{Deserialize, Serialize};

use crate::display::format_equation;
use crate::latex::latex_equation;
use crate::side::Side;
use crate::DEFAULT_VARIABLE;

/// Pre-rendered forms of an equation, regenerated with every new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayForms {
    pub text: String,
    pub latex: String,
}

impl DisplayForms {
    pub fn of(left: &Side, right: &Side) -> Self {
        Self {
            text: format_equation(left, right),
            latex: latex_equation(left, right),
        }
    }
}

/// A linear equation in one variable.
///
/// `solution` is fixed when the problem is authored: it is the value that
/// satisfies the original equation and stays a solution of every equation
/// derived from it by operations applied to both sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EquationRepr")]
pub struct Equation {
    pub id: String,
    pub left: Side,
    pub right: Side,
    pub solution: f64,
    pub variable: String,
    pub display: DisplayForms,
}

/// Wire shape accepted on input: display forms and variable are optional and
/// recomputed from the sides.
#[derive(Deserialize)]
struct EquationRepr {
    id: String,
    left: Side,
    right: Side,
    solution: f64,
    #[serde(default)]
    variable: Option<String>,
}

impl From<EquationRepr> for Equation {
    fn from(repr: EquationRepr) -> Self {
        let mut eq = Equation::new(repr.id, repr.left, repr.right, repr.solution);
        if let Some(var) = repr.variable {
            eq.variable = var;
        }
        eq
    }
}

impl Equation {
    pub fn new(id: impl Into<String>, left: Side, right: Side, solution: f64) -> Self {
        let variable = left
            .variable_name()
            .or_else(|| right.variable_name())
            .unwrap_or(DEFAULT_VARIABLE)
            .to_string();
        let display = DisplayForms::of(&left, &right);
        Self {
            id: id.into(),
            left,
            right,
            solution,
            variable,
            display,
        }
    }

    /// A new equation with the same identity and solution but different sides.
    pub fn with_sides(&self, left: Side, right: Side) -> Self {
        let display = DisplayForms::of(&left, &right);
        Self {
            id: self.id.clone(),
            left,
            right,
            solution: self.solution,
            variable: self.variable.clone(),
            display,
        }
    }

    /// `(left, right)` evaluated at the authored solution.
    pub fn evaluate_at_solution(&self) -> (f64, f64) {
        (
            self.left.evaluate(self.solution),
            self.right.evaluate(self.solution),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;

    fn x_plus_3_eq_7() -> Equation {
        Equation::new(
            "p1",
            Side::new(vec![Term::var(1.0, "x"), Term::constant(3.0)]),
            Side::new(vec![Term::constant(7.0)]),
            4.0,
        )
    }

    #[test]
    fn display_forms_follow_the_sides() {
        let eq = x_plus_3_eq_7();
        assert_eq!(eq.display.text, "x + 3 = 7");
        assert_eq!(eq.to_string(), "x + 3 = 7");
        let moved = eq.with_sides(
            Side::new(vec![Term::var(1.0, "x")]),
            Side::new(vec![Term::constant(4.0)]),
        );
        assert_eq!(moved.display.text, "x = 4");
        assert_eq!(moved.solution, 4.0);
        assert_eq!(moved.id, "p1");
    }

    #[test]
    fn variable_is_inferred_from_either_side() {
        let eq = Equation::new(
            "p2",
            Side::new(vec![Term::constant(10.0)]),
            Side::new(vec![Term::var(2.0, "n")]),
            5.0,
        );
        assert_eq!(eq.variable, "n");
        assert_eq!(eq.evaluate_at_solution(), (10.0, 10.0));
    }

    #[test]
    fn deserializing_recomputes_display() {
        let json = r#"{
            "id": "p1",
            "left": [{"kind": "variable", "coefficient": 1, "name": "x"}, {"kind": "constant", "value": 3}],
            "right": [{"kind": "constant", "value": 7}],
            "solution": 4
        }"#;
        let eq: Equation = serde_json::from_str(json).unwrap();
        assert_eq!(eq, x_plus_3_eq_7());
    }
}

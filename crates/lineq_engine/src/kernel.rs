use lineq_ast::{Equation, Side, Term};

/// Coefficients below this magnitude mean the unknown has cancelled out.
const DEGENERATE_COEFFICIENT: f64 = 1e-12;

/// `left = right` reduced to `coefficient * x + constant = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearKernel {
    pub coefficient: f64,
    pub constant: f64,
}

impl LinearKernel {
    pub fn of_sides(left: &Side, right: &Side) -> Self {
        Self {
            coefficient: left.variable_coefficient() - right.variable_coefficient(),
            constant: left.constant_sum() - right.constant_sum(),
        }
    }

    /// The unique root `-constant / coefficient`, if there is one.
    ///
    /// Returns `None` for identities (`0 = 0`) and contradictions (`0 = 5`).
    pub fn solve(&self) -> Option<f64> {
        if self.coefficient.abs() < DEGENERATE_COEFFICIENT {
            return None;
        }
        let root = -self.constant / self.coefficient;
        root.is_finite().then_some(root)
    }
}

/// Build an equation whose solution is derived from its sides.
///
/// Returns `None` when the sides do not pin down a unique value.
pub fn equation_from_sides(id: impl Into<String>, left: Side, right: Side) -> Option<Equation> {
    let solution = LinearKernel::of_sides(&left, &right).solve()?;
    Some(Equation::new(id, left, right, solution))
}

fn lone_unit_variable(side: &Side) -> bool {
    matches!(side.terms(), [Term::Variable { coefficient, .. }] if (*coefficient - 1.0).abs() < 1e-12)
}

fn lone_constant(side: &Side) -> Option<f64> {
    match side.terms() {
        [Term::Constant { value }] => Some(*value),
        _ => None,
    }
}

/// If the equation reads `x = c` or `c = x`, return `c`.
pub fn is_isolated(equation: &Equation) -> Option<f64> {
    if lone_unit_variable(&equation.left) {
        lone_constant(&equation.right)
    } else if lone_unit_variable(&equation.right) {
        lone_constant(&equation.left)
    } else {
        None
    }
}

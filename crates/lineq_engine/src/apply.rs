//! The operation engine.
//!
//! `apply` never mutates its input. Operands are checked before any side is
//! touched, so a refused operation has no effect at all.

use lineq_ast::{Equation, Operation, OperationKind, Side, Target, Term};
use tracing::{debug, warn};

use crate::balance::is_balanced;
use crate::error::OperationError;
use crate::simplify::simplify_side;

/// What an operation does to each side it targets.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SideTransform {
    /// Add to the constant term.
    Shift(f64),
    /// Multiply every numeric component.
    Scale(f64),
    /// Divide every numeric component.
    Divide(f64),
    /// Collect like terms.
    Collect,
}

fn side_transform(operation: &Operation) -> Result<SideTransform, OperationError> {
    let kind = operation.kind;
    if kind == OperationKind::Simplify {
        return Ok(SideTransform::Collect);
    }

    let value = match operation.value {
        Some(v) if v.is_finite() => v,
        other => return Err(OperationError::InvalidOperationValue { kind, value: other }),
    };

    let transform = match kind {
        OperationKind::Add => SideTransform::Shift(value),
        OperationKind::Subtract => SideTransform::Shift(-value),
        OperationKind::Multiply => SideTransform::Scale(value),
        OperationKind::Divide => {
            if value == 0.0 {
                return Err(OperationError::DivideByZero);
            }
            if !value.recip().is_finite() {
                return Err(OperationError::InvalidOperationValue {
                    kind,
                    value: Some(value),
                });
            }
            SideTransform::Divide(value)
        }
        OperationKind::Simplify => SideTransform::Collect,
    };
    Ok(transform)
}

fn transform_side(side: &Side, transform: SideTransform) -> Side {
    match transform {
        SideTransform::Shift(delta) => {
            let mut terms = side.terms().to_vec();
            match side.constant_position() {
                Some(i) => terms[i] = terms[i].shifted(delta),
                None => terms.push(Term::constant(delta)),
            }
            Side::new(terms)
        }
        SideTransform::Scale(factor) => {
            Side::new(side.iter().map(|t| t.scaled(factor)).collect())
        }
        SideTransform::Divide(divisor) => {
            Side::new(side.iter().map(|t| t.divided(divisor)).collect())
        }
        SideTransform::Collect => simplify_side(side),
    }
}

/// Apply `operation` to `equation`, producing a new equation.
///
/// When the operation targets both sides and the input was balanced at its
/// solution, the output must be balanced too; otherwise
/// [`OperationError::EquivalenceLost`] is returned.
pub fn apply(equation: &Equation, operation: &Operation) -> Result<Equation, OperationError> {
    let transform = side_transform(operation)?;
    let target = operation.target;

    let left = if target.includes_left() {
        transform_side(&equation.left, transform)
    } else {
        equation.left.clone()
    };
    let right = if target.includes_right() {
        transform_side(&equation.right, transform)
    } else {
        equation.right.clone()
    };
    let next = equation.with_sides(left, right);

    if target == Target::Both && is_balanced(equation) && !is_balanced(&next) {
        let (left, right) = next.evaluate_at_solution();
        warn!(
            target: "lineq::apply",
            equation = %equation,
            operation = %operation,
            left,
            right,
            "both-sides operation lost equivalence"
        );
        return Err(OperationError::EquivalenceLost { left, right });
    }

    debug!(
        target: "lineq::apply",
        before = %equation,
        after = %next,
        operation = %operation,
        "applied operation"
    );
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::weights_of;

    fn x_plus_3_eq_7() -> Equation {
        Equation::new(
            "p1",
            Side::new(vec![Term::var(1.0, "x"), Term::constant(3.0)]),
            Side::new(vec![Term::constant(7.0)]),
            4.0,
        )
    }

    #[test]
    fn subtracting_adjusts_existing_constants() {
        let eq = apply(&x_plus_3_eq_7(), &Operation::subtract(3.0, Target::Both)).unwrap();
        assert_eq!(eq.left.terms(), &[Term::var(1.0, "x"), Term::constant(0.0)]);
        assert_eq!(eq.right.terms(), &[Term::constant(4.0)]);

        let solved = apply(&eq, &Operation::simplify(Target::Both)).unwrap();
        assert_eq!(solved.to_string(), "x = 4");
    }

    #[test]
    fn adding_appends_a_constant_when_missing() {
        let eq = Equation::new(
            "p2",
            Side::new(vec![Term::var(2.0, "x")]),
            Side::new(vec![Term::constant(8.0)]),
            4.0,
        );
        let next = apply(&eq, &Operation::add(1.0, Target::Both)).unwrap();
        assert_eq!(next.left.terms(), &[Term::var(2.0, "x"), Term::constant(1.0)]);
        assert_eq!(next.right.terms(), &[Term::constant(9.0)]);
    }

    #[test]
    fn divide_scales_every_term() {
        let eq = Equation::new(
            "p3",
            Side::new(vec![Term::var(2.0, "x"), Term::constant(4.0)]),
            Side::new(vec![Term::constant(12.0)]),
            4.0,
        );
        let next = apply(&eq, &Operation::divide(2.0, Target::Both)).unwrap();
        assert_eq!(next.to_string(), "x + 2 = 6");
    }

    #[test]
    fn divide_by_zero_is_refused() {
        let eq = x_plus_3_eq_7();
        let before = eq.clone();
        let err = apply(&eq, &Operation::divide(0.0, Target::Both)).unwrap_err();
        assert_eq!(err, OperationError::DivideByZero);
        assert_eq!(eq, before);
    }

    #[test]
    fn missing_or_non_finite_values_are_refused() {
        let eq = x_plus_3_eq_7();
        let op = Operation::new(OperationKind::Add, None, Target::Both);
        assert!(matches!(
            apply(&eq, &op),
            Err(OperationError::InvalidOperationValue { value: None, .. })
        ));
        let op = Operation::multiply(f64::NAN, Target::Both);
        assert!(matches!(
            apply(&eq, &op),
            Err(OperationError::InvalidOperationValue { .. })
        ));
    }

    #[test]
    fn one_sided_operations_unbalance_the_scale() {
        let eq = apply(&x_plus_3_eq_7(), &Operation::add(2.0, Target::Left)).unwrap();
        assert_eq!(eq.to_string(), "x + 5 = 7");
        let weights = weights_of(&eq);
        assert!(!weights.is_balanced);
        assert_eq!(weights.left_weight, 9.0);

        // Both-sides operations on an unbalanced equation are still allowed.
        let eq = apply(&eq, &Operation::subtract(5.0, Target::Both)).unwrap();
        assert_eq!(eq.to_string(), "x + 0 = 2");
    }

    #[test]
    fn rounded_solutions_survive_scaling() {
        let eq = Equation::new(
            "third",
            Side::new(vec![Term::var(3.0, "x")]),
            Side::new(vec![Term::constant(1.0)]),
            0.3333,
        );
        assert!(is_balanced(&eq));
        let next = apply(&eq, &Operation::multiply(100.0, Target::Both)).unwrap();
        assert_eq!(next.to_string(), "300x = 100");
        assert!(weights_of(&next).is_balanced);
    }

    #[test]
    fn floating_point_unit_coefficient_prints_as_bare_variable() {
        let eq = Equation::new(
            "p5",
            Side::new(vec![Term::var(3.0, "x")]),
            Side::new(vec![Term::constant(12.0)]),
            4.0,
        );
        let eq = apply(&eq, &Operation::multiply(0.1, Target::Both)).unwrap();
        let eq = apply(&eq, &Operation::divide(0.3, Target::Both)).unwrap();
        assert_eq!(eq.to_string(), "x = 4");
        assert!(crate::kernel::is_isolated(&eq).is_some());
    }

    #[test]
    fn huge_factors_do_not_saturate_the_display() {
        let eq = apply(&x_plus_3_eq_7(), &Operation::multiply(1e19, Target::Both)).unwrap();
        assert_eq!(
            eq.to_string(),
            "10000000000000000000x + 30000000000000000000 = 70000000000000000000"
        );
    }

    #[test]
    fn simplify_on_one_side_only() {
        let eq = Equation::new(
            "p4",
            Side::new(vec![Term::var(1.0, "x"), Term::var(1.0, "x"), Term::constant(1.0)]),
            Side::new(vec![Term::constant(4.0), Term::constant(5.0)]),
            4.0,
        );
        let next = apply(&eq, &Operation::simplify(Target::Left)).unwrap();
        assert_eq!(next.to_string(), "2x + 1 = 4 + 5");
    }
}

//! Evaluation of both sides at the authored solution.
//!
//! The balance visualization only reads [`BalanceWeights`]; nothing here
//! renders anything.

use lineq_ast::Equation;
use serde::{Deserialize, Serialize};

/// Two sides are equal when they differ by less than this, scaled by the
/// larger magnitude of the two (never by less than 1).
pub const EQUIVALENCE_EPSILON: f64 = 1e-3;

/// Tilt per unit of weight difference, in degrees.
pub const DEGREES_PER_UNIT: f64 = 5.0;

/// The beam never tilts further than this, in degrees.
pub const MAX_TILT_DEGREES: f64 = 30.0;

/// Derived weights for the balance scale.
///
/// `tilt_angle` is positive when the right pan is heavier and zero whenever
/// the equation is balanced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceWeights {
    pub left_weight: f64,
    pub right_weight: f64,
    pub is_balanced: bool,
    pub tilt_angle: f64,
}

fn sides_agree(left: f64, right: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() < EQUIVALENCE_EPSILON * scale
}

/// Whether the authored solution still satisfies the equation.
pub fn is_balanced(equation: &Equation) -> bool {
    let (left, right) = equation.evaluate_at_solution();
    sides_agree(left, right)
}

pub fn weights_of(equation: &Equation) -> BalanceWeights {
    let (left, right) = equation.evaluate_at_solution();
    let balanced = sides_agree(left, right);
    let tilt_angle = if balanced || !(right - left).is_finite() {
        0.0
    } else {
        ((right - left) * DEGREES_PER_UNIT).clamp(-MAX_TILT_DEGREES, MAX_TILT_DEGREES)
    };
    BalanceWeights {
        left_weight: left,
        right_weight: right,
        is_balanced: balanced,
        tilt_angle,
    }
}

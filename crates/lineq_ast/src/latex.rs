//! LaTeX rendering for MathJax/KaTeX front ends.
//!
//! Simple fractions (denominator up to [`MAX_FRACTION_DENOMINATOR`]) render as
//! `\frac{p}{q}`; everything else falls back to the plain-text number format.

use crate::display::format_number;
use crate::equation::Equation;
use crate::side::Side;
use crate::term::Term;

pub const MAX_FRACTION_DENOMINATOR: i64 = 12;

const FRACTION_TOLERANCE: f64 = 1e-9;

/// Find `(p, q)` with `p / q == value`, `q` in `2..=MAX_FRACTION_DENOMINATOR`.
fn as_simple_fraction(value: f64) -> Option<(i64, i64)> {
    if !value.is_finite() || (value - value.round()).abs() < FRACTION_TOLERANCE {
        return None;
    }
    (2..=MAX_FRACTION_DENOMINATOR).find_map(|q| {
        let p = value * q as f64;
        if (p - p.round()).abs() < FRACTION_TOLERANCE {
            Some((p.round() as i64, q))
        } else {
            None
        }
    })
}

fn latex_magnitude(value: f64) -> String {
    match as_simple_fraction(value.abs()) {
        Some((p, q)) => format!("\\frac{{{}}}{{{}}}", p, q),
        None => format_number(value.abs()),
    }
}

/// Render a term without its sign; the sign is returned separately.
fn latex_term(term: &Term) -> (bool, String) {
    match term {
        Term::Variable { coefficient, name } => {
            let negative = *coefficient < 0.0;
            let body = if format_number(coefficient.abs()) == "1" {
                name.clone()
            } else {
                format!("{}{}", latex_magnitude(*coefficient), name)
            };
            (negative, body)
        }
        Term::Constant { value } => {
            let negative = *value < 0.0 && format_number(*value) != "0";
            (negative, latex_magnitude(*value))
        }
    }
}

pub fn latex_side(side: &Side) -> String {
    let mut out = String::new();
    for (i, term) in side.iter().enumerate() {
        let (negative, body) = latex_term(term);
        match (i, negative) {
            (0, true) => out.push('-'),
            (0, false) => {}
            (_, true) => out.push_str(" - "),
            (_, false) => out.push_str(" + "),
        }
        out.push_str(&body);
    }
    out
}

pub fn latex_equation(left: &Side, right: &Side) -> String {
    format!("{} = {}", latex_side(left), latex_side(right))
}

impl Equation {
    pub fn to_latex(&self) -> String {
        latex_equation(&self.left, &self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_render_as_fractions() {
        let side = Side::new(vec![Term::var(0.5, "x"), Term::constant(-1.0)]);
        assert_eq!(latex_side(&side), "\\frac{1}{2}x - 1");
    }

    #[test]
    fn leading_negative_stays_tight() {
        let side = Side::new(vec![Term::var(-1.0, "x"), Term::constant(0.25)]);
        assert_eq!(latex_side(&side), "-x + \\frac{1}{4}");
    }

    #[test]
    fn nearly_unit_coefficients_drop_the_numeral() {
        let side = Side::new(vec![Term::var(-(1.0 + f64::EPSILON), "x")]);
        assert_eq!(latex_side(&side), "-x");
    }

    #[test]
    fn awkward_decimals_fall_back_to_text() {
        assert_eq!(latex_magnitude(0.07), "0.07");
        assert_eq!(latex_magnitude(3.0), "3");
    }
}

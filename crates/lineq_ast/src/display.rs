//! Canonical plain-text formatting.
//!
//! A side renders as its terms in encounter order joined by signs, with a
//! leading negative term kept tight (`-3 + x`) and every later negative term
//! folded into the separator (`x - 3`, never `x + -3`).

use std::fmt;

use crate::equation::Equation;
use crate::side::Side;

/// Values closer than this to an integer print as that integer.
const INTEGER_SNAP: f64 = 1e-9;

/// Maximum number of decimals kept for non-integer values.
const MAX_DECIMALS: usize = 4;

/// Integers at or beyond this magnitude do not fit the `i64` path exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Format a number without a trailing `.0` and with at most four decimals.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round();
    if (value - rounded).abs() < INTEGER_SNAP && rounded.abs() < MAX_EXACT_INTEGER {
        // Avoid printing "-0".
        if rounded == 0.0 {
            return "0".to_string();
        }
        return format!("{}", rounded as i64);
    }
    let text = format!("{:.*}", MAX_DECIMALS, value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

pub fn format_side(side: &Side) -> String {
    let mut out = String::new();
    for (i, term) in side.iter().enumerate() {
        let text = term.to_string();
        if i == 0 {
            out.push_str(&text);
        } else if let Some(rest) = text.strip_prefix('-') {
            out.push_str(" - ");
            out.push_str(rest);
        } else {
            out.push_str(" + ");
            out.push_str(&text);
        }
    }
    out
}

pub fn format_equation(left: &Side, right: &Side) -> String {
    format!("{} = {}", format_side(left), format_side(right))
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_side(self))
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_equation(&self.left, &self.right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;

    #[test]
    fn numbers_drop_needless_decimals() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3333");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(-1e-12), "0");
    }

    #[test]
    fn huge_integers_keep_their_digits() {
        assert_eq!(format_number(1e19), "10000000000000000000");
        assert_eq!(format_number(-3e19), "-30000000000000000000");
        assert_eq!(format_number(9_007_199_254_740_991.0), "9007199254740991");
    }

    #[test]
    fn consecutive_signs_are_normalized() {
        let side = Side::new(vec![Term::var(2.0, "x"), Term::constant(-3.0)]);
        assert_eq!(format_side(&side), "2x - 3");

        let side = Side::new(vec![Term::constant(-3.0), Term::var(-1.0, "x")]);
        assert_eq!(format_side(&side), "-3 - x");

        let side = Side::new(vec![Term::var(1.0, "x"), Term::constant(3.0)]);
        assert_eq!(format_side(&side), "x + 3");
    }

    #[test]
    fn equation_joins_both_sides() {
        let left = Side::new(vec![Term::var(1.0, "x"), Term::constant(3.0)]);
        let right = Side::new(vec![Term::constant(7.0)]);
        assert_eq!(format_equation(&left, &right), "x + 3 = 7");
    }
}

use lineq_ast::{Equation, Side, Term};
use proptest::prelude::*;

pub fn arb_term() -> impl Strategy<Value = Term> {
    prop_oneof![
        (-20i32..20).prop_map(|c| Term::var(c as f64 / 2.0, "x")),
        (-50i32..50).prop_map(|v| Term::constant(v as f64 / 4.0)),
    ]
}

pub fn arb_side() -> impl Strategy<Value = Side> {
    prop::collection::vec(arb_term(), 1..6).prop_map(Side::new)
}

/// Arbitrary sides with an arbitrary (not necessarily correct) solution.
pub fn arb_equation() -> impl Strategy<Value = Equation> {
    (arb_side(), arb_side(), -10i32..10)
        .prop_map(|(l, r, s)| Equation::new("prop", l, r, s as f64))
}

/// Sides built so that `solution` really satisfies them.
pub fn arb_balanced_equation() -> impl Strategy<Value = Equation> {
    (arb_side(), arb_side(), -10i32..10).prop_map(|(l, r, s)| {
        let solution = s as f64;
        let gap = l.evaluate(solution) - r.evaluate(solution);
        let mut right = r.into_terms();
        right.push(Term::constant(gap));
        Equation::new("prop", l, Side::new(right), solution)
    })
}

use lineq_ast::{Side, Term, DEFAULT_VARIABLE};

/// Sums smaller than this are treated as zero when collecting terms.
const ZERO_SUM: f64 = 1e-12;

/// Collect like terms on one side.
///
/// Variable terms fold into one (sum of coefficients), constants into one
/// (sum of values). A sum of zero is dropped; if both vanish the side is `0`.
/// The variable term, when present, comes first.
pub fn simplify_side(side: &Side) -> Side {
    let coefficient = side.variable_coefficient();
    let constant = side.constant_sum();

    let mut terms = Vec::with_capacity(2);
    if coefficient.abs() > ZERO_SUM {
        let name = side.variable_name().unwrap_or(DEFAULT_VARIABLE);
        terms.push(Term::var(coefficient, name));
    }
    if constant.abs() > ZERO_SUM {
        terms.push(Term::constant(constant));
    }
    Side::new(terms)
}

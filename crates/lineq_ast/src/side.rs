use serde::{Deserialize, Serialize};

use crate::term::Term;

/// One side of an equation: an ordered, never-empty list of terms.
///
/// Order only matters for display. Building a side from an empty list
/// yields the single constant `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Term>", into = "Vec<Term>")]
pub struct Side {
    terms: Vec<Term>,
}

impl Side {
    pub fn new(terms: Vec<Term>) -> Self {
        if terms.is_empty() {
            Self {
                terms: vec![Term::constant(0.0)],
            }
        } else {
            Self { terms }
        }
    }

    pub fn zero() -> Self {
        Self::new(Vec::new())
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false; kept so `len` has its usual companion.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }

    /// Index of the first constant term, if any.
    pub fn constant_position(&self) -> Option<usize> {
        self.terms.iter().position(Term::is_constant)
    }

    /// Sum of all variable coefficients.
    pub fn variable_coefficient(&self) -> f64 {
        self.terms
            .iter()
            .filter(|t| t.is_variable())
            .map(Term::numeric)
            .sum()
    }

    /// Sum of all constant terms.
    pub fn constant_sum(&self) -> f64 {
        self.terms
            .iter()
            .filter(|t| t.is_constant())
            .map(Term::numeric)
            .sum()
    }

    pub fn has_variable(&self) -> bool {
        self.terms.iter().any(Term::is_variable)
    }

    /// First variable name in encounter order.
    pub fn variable_name(&self) -> Option<&str> {
        self.terms.iter().find_map(Term::variable_name)
    }

    /// Value of the side with the variable bound to `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter().map(|t| t.evaluate(x)).sum()
    }
}

impl From<Vec<Term>> for Side {
    fn from(terms: Vec<Term>) -> Self {
        Side::new(terms)
    }
}

impl From<Side> for Vec<Term> {
    fn from(side: Side) -> Self {
        side.terms
    }
}

impl<'a> IntoIterator for &'a Side {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

//! Data model for one-variable linear equations.
//!
//! Everything in this crate is a plain value. Equations are never mutated in
//! place: the engine builds a new [`Equation`] for every transformation, which
//! keeps step snapshots stable.

pub mod display;
pub mod equation;
pub mod latex;
pub mod operation;
pub mod problem;
pub mod side;
pub mod step;
pub mod term;

pub use display::{format_equation, format_number, format_side};
pub use equation::{DisplayForms, Equation};
pub use latex::{latex_equation, latex_side};
pub use operation::{Operation, OperationKind, Target};
pub use problem::{Difficulty, EquationProblem, PracticeMode};
pub use side::Side;
pub use step::SolutionStep;
pub use term::Term;

/// Name used for the unknown when an equation carries no variable term.
pub const DEFAULT_VARIABLE: &str = "x";

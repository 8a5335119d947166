//! Transformation and validation engine for one-variable linear equations.
//!
//! - [`apply`] turns an equation and an [`Operation`](lineq_ast::Operation)
//!   into a new equation, rejecting operations that cannot be applied.
//! - [`weights_of`] evaluates both sides at the authored solution for the
//!   balance visualization.
//! - [`Validator`] grades a learner's final answer and diagnoses mistakes.

pub mod apply;
pub mod balance;
pub mod error;
pub mod kernel;
pub mod mistake;
pub mod narration;
pub mod simplify;
pub mod validate;

pub use apply::apply;
pub use balance::{is_balanced, weights_of, BalanceWeights, EQUIVALENCE_EPSILON};
pub use error::OperationError;
pub use kernel::{equation_from_sides, is_isolated, LinearKernel};
pub use mistake::MistakeKind;
pub use narration::{describe_operation, step_note};
pub use simplify::simplify_side;
pub use validate::{
    validate, DiagnosisThresholds, ValidationResult, Validator, DEFAULT_CALCULATION_GAP,
    DEFAULT_TOLERANCE,
};

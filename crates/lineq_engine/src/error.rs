use lineq_ast::OperationKind;
use thiserror::Error;

/// Reasons an operation is refused. A refused operation never changes any state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperationError {
    #[error("Cannot divide by zero")]
    DivideByZero,
    #[error("Invalid value {value:?} for {kind}")]
    InvalidOperationValue {
        kind: OperationKind,
        value: Option<f64>,
    },
    #[error("Operation broke the balance: left = {left}, right = {right} at the solution")]
    EquivalenceLost { left: f64, right: f64 },
}

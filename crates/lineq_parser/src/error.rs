use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error: {0}")]
    NomError(String),
    #[error("Unconsumed input: {0}")]
    UnconsumedInput(String),
    #[error("Expected an equation of the form <side> = <side>")]
    MissingEquals,
    #[error("Not a linear equation: {0}")]
    NonLinear(String),
    #[error("Only one unknown is supported, found '{0}' and '{1}'")]
    MultipleVariables(String, String),
    #[error("Division by zero in '{0}'")]
    ZeroDenominator(String),
    #[error("Unknown operation '{0}'")]
    UnknownOperation(String),
}

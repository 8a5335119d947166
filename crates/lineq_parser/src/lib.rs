pub mod error;
pub mod operation;
pub mod parser;

pub use error::ParseError;
pub use operation::parse_operation;
pub use parser::{parse_equation, parse_side, ParsedEquation};

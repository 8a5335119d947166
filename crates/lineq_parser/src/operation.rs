//! Learner operation commands: `<verb> [value] [target]`.
//!
//! Examples: `sub 3`, `subtract 3 both`, `div 2 left`, `* -1`, `simplify right`.
//! A missing operand is not a parse error: the operation is built without a
//! value and the engine reports it.

use lineq_ast::{Operation, OperationKind, Target};
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, multispace0, multispace1},
    combinator::{map, opt, value},
    sequence::{pair, preceded},
    IResult,
};

use crate::error::ParseError;
use crate::parser::parse_number;

fn parse_kind(input: &str) -> IResult<&str, OperationKind> {
    alt((
        value(OperationKind::Subtract, tag_no_case("subtract")),
        value(OperationKind::Subtract, tag_no_case("sub")),
        value(OperationKind::Multiply, tag_no_case("multiply")),
        value(OperationKind::Multiply, tag_no_case("mul")),
        value(OperationKind::Multiply, tag_no_case("times")),
        value(OperationKind::Divide, tag_no_case("divide")),
        value(OperationKind::Divide, tag_no_case("div")),
        value(OperationKind::Simplify, tag_no_case("simplify")),
        value(OperationKind::Simplify, tag_no_case("simp")),
        value(OperationKind::Add, tag_no_case("add")),
        value(OperationKind::Add, char('+')),
        value(OperationKind::Subtract, char('-')),
        value(OperationKind::Multiply, char('*')),
        value(OperationKind::Divide, char('/')),
    ))(input)
}

fn parse_signed_number(input: &str) -> IResult<&str, f64> {
    map(pair(opt(char('-')), parse_number), |(neg, v)| {
        if neg.is_some() {
            -v
        } else {
            v
        }
    })(input)
}

fn parse_target(input: &str) -> IResult<&str, Target> {
    alt((
        value(Target::Both, tag_no_case("both")),
        value(Target::Left, tag_no_case("left")),
        value(Target::Right, tag_no_case("right")),
        value(Target::Left, tag_no_case("l")),
        value(Target::Right, tag_no_case("r")),
        value(Target::Both, tag_no_case("b")),
    ))(input)
}

/// Parse an operation command typed by the learner.
pub fn parse_operation(input: &str) -> Result<Operation, ParseError> {
    let trimmed = input.trim();
    let (rest, kind) = parse_kind(trimmed)
        .map_err(|_| ParseError::UnknownOperation(trimmed.to_string()))?;
    let (rest, operand) = opt(preceded(multispace0, parse_signed_number))(rest)
        .map_err(|e| ParseError::NomError(format!("{}", e)))?;
    let (rest, target) = opt(preceded(multispace1, parse_target))(rest)
        .map_err(|e| ParseError::NomError(format!("{}", e)))?;

    let rest = rest.trim();
    if !rest.is_empty() {
        return Err(ParseError::UnconsumedInput(rest.to_string()));
    }

    Ok(Operation::new(kind, operand, target.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_and_aliases() {
        assert_eq!(
            parse_operation("sub 3").unwrap(),
            Operation::subtract(3.0, Target::Both)
        );
        assert_eq!(
            parse_operation("Divide 2 left").unwrap(),
            Operation::divide(2.0, Target::Left)
        );
        assert_eq!(
            parse_operation("* -1 right").unwrap(),
            Operation::multiply(-1.0, Target::Right)
        );
        assert_eq!(
            parse_operation("simplify").unwrap(),
            Operation::simplify(Target::Both)
        );
        assert_eq!(
            parse_operation("simp l").unwrap(),
            Operation::simplify(Target::Left)
        );
    }

    #[test]
    fn missing_value_is_left_to_the_engine() {
        let op = parse_operation("add").unwrap();
        assert_eq!(op.kind, OperationKind::Add);
        assert_eq!(op.value, None);
    }

    #[test]
    fn unknown_verbs_and_trailing_garbage() {
        assert!(matches!(
            parse_operation("square 2"),
            Err(ParseError::UnknownOperation(_))
        ));
        assert!(matches!(
            parse_operation("add 2 sideways"),
            Err(ParseError::UnconsumedInput(_))
        ));
    }
}

//! Linear equation parser.
//!
//! Accepted grammar (whitespace is free between tokens):
//!
//! ```text
//! equation := side "=" side
//! side     := ["+" | "-"] term (("+" | "-") term)*
//! term     := number ["*"] ident ["/" number]
//!           | ident ["/" number]
//!           | number ["/" number]
//! ```
//!
//! Powers, products of unknowns and parentheses are rejected; the engine only
//! deals with first-degree equations in one unknown.

use lineq_ast::{Side, Term};
use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, multispace0, one_of},
    combinator::{opt, recognize},
    multi::many0,
    sequence::{pair, preceded, tuple},
    IResult,
};

use crate::error::ParseError;

/// Both sides of a parsed equation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEquation {
    pub left: Side,
    pub right: Side,
    /// The unknown, if any term mentions one.
    pub variable: Option<String>,
}

// Intermediate term before sign and divisor are folded in.
#[derive(Debug, Clone, Copy)]
struct RawTerm<'a> {
    coefficient: Option<f64>,
    name: Option<&'a str>,
    divisor: Option<f64>,
}

// Numeric literals: 12, 8.5, 8., .5
pub(crate) fn parse_number(input: &str) -> IResult<&str, f64> {
    let (rest, text) = alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ))(input)?;
    let value = text.parse::<f64>().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Float))
    })?;
    Ok((rest, value))
}

// Identifiers start with a letter, then letters, digits or underscores.
fn parse_identifier(input: &str) -> IResult<&str, &str> {
    let mut chars = input.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() => {}
        _ => {
            return Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::Alpha,
            )))
        }
    }
    let len = chars
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
        .map(|(i, _)| i)
        .unwrap_or(input.len());
    Ok((&input[len..], &input[..len]))
}

fn parse_unsigned_term(input: &str) -> IResult<&str, RawTerm<'_>> {
    let (input, coefficient) = opt(parse_number)(input)?;
    let (input, name) = if coefficient.is_some() {
        opt(preceded(
            tuple((multispace0, opt(char('*')), multispace0)),
            parse_identifier,
        ))(input)?
    } else {
        let (input, name) = parse_identifier(input)?;
        (input, Some(name))
    };
    let (input, divisor) = opt(preceded(
        tuple((multispace0, char('/'), multispace0)),
        parse_number,
    ))(input)?;
    Ok((
        input,
        RawTerm {
            coefficient,
            name,
            divisor,
        },
    ))
}

fn parse_signed_terms(input: &str) -> IResult<&str, Vec<(char, RawTerm<'_>)>> {
    let (input, _) = multispace0(input)?;
    let (input, lead) = opt(one_of("+-"))(input)?;
    let (input, first) = preceded(multispace0, parse_unsigned_term)(input)?;
    let (input, rest) = many0(pair(
        preceded(multispace0, one_of("+-")),
        preceded(multispace0, parse_unsigned_term),
    ))(input)?;

    let mut terms = Vec::with_capacity(rest.len() + 1);
    terms.push((lead.unwrap_or('+'), first));
    terms.extend(rest);
    Ok((input, terms))
}

fn lower_terms(
    source: &str,
    raw: Vec<(char, RawTerm<'_>)>,
    variable: &mut Option<String>,
) -> Result<Side, ParseError> {
    let mut terms = Vec::with_capacity(raw.len());
    for (sign, term) in raw {
        let sign = if sign == '-' { -1.0 } else { 1.0 };
        let divisor = term.divisor.unwrap_or(1.0);
        if divisor == 0.0 {
            return Err(ParseError::ZeroDenominator(source.trim().to_string()));
        }
        let numeric = sign * term.coefficient.unwrap_or(1.0) / divisor;
        match term.name {
            Some(name) => {
                match variable.as_deref() {
                    Some(seen) if seen != name => {
                        return Err(ParseError::MultipleVariables(
                            seen.to_string(),
                            name.to_string(),
                        ))
                    }
                    Some(_) => {}
                    None => *variable = Some(name.to_string()),
                }
                terms.push(Term::var(numeric, name));
            }
            None => terms.push(Term::constant(numeric)),
        }
    }
    Ok(Side::new(terms))
}

fn reject_nonlinear(input: &str) -> Result<(), ParseError> {
    if input.contains('^') || input.contains('(') || input.contains(')') {
        return Err(ParseError::NonLinear(input.trim().to_string()));
    }
    Ok(())
}

fn side_from_str(input: &str, variable: &mut Option<String>) -> Result<Side, ParseError> {
    let (remaining, raw) =
        parse_signed_terms(input).map_err(|e| ParseError::NomError(format!("{}", e)))?;
    let remaining = remaining.trim();
    if !remaining.is_empty() {
        if remaining.starts_with('*') {
            return Err(ParseError::NonLinear(input.trim().to_string()));
        }
        return Err(ParseError::UnconsumedInput(remaining.to_string()));
    }
    lower_terms(input, raw, variable)
}

/// Parse a single side such as `3x - 5`.
pub fn parse_side(input: &str) -> Result<Side, ParseError> {
    reject_nonlinear(input)?;
    side_from_str(input, &mut None)
}

/// Parse `left = right` into two sides.
pub fn parse_equation(input: &str) -> Result<ParsedEquation, ParseError> {
    reject_nonlinear(input)?;
    let (left_src, right_src) = input.split_once('=').ok_or(ParseError::MissingEquals)?;
    if right_src.contains('=') {
        return Err(ParseError::UnconsumedInput(right_src.trim().to_string()));
    }

    let mut variable = None;
    let left = side_from_str(left_src, &mut variable)?;
    let right = side_from_str(right_src, &mut variable)?;
    Ok(ParsedEquation {
        left,
        right,
        variable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number_forms() {
        assert_eq!(parse_number("12 rest"), Ok((" rest", 12.0)));
        assert_eq!(parse_number("8.5x"), Ok(("x", 8.5)));
        assert_eq!(parse_number(".5"), Ok(("", 0.5)));
        assert!(parse_number("x").is_err());
    }

    #[test]
    fn parses_simple_equation() {
        let eq = parse_equation("2x + 3 = 7").unwrap();
        assert_eq!(eq.left.terms(), &[Term::var(2.0, "x"), Term::constant(3.0)]);
        assert_eq!(eq.right.terms(), &[Term::constant(7.0)]);
        assert_eq!(eq.variable.as_deref(), Some("x"));
    }

    #[test]
    fn leading_minus_and_bare_variable() {
        let eq = parse_equation("-x = 4").unwrap();
        assert_eq!(eq.left.terms(), &[Term::var(-1.0, "x")]);
    }

    #[test]
    fn divisors_and_explicit_products() {
        let eq = parse_equation("x/2 - 3*y = 1/4").unwrap_err();
        assert_eq!(
            eq,
            ParseError::MultipleVariables("x".to_string(), "y".to_string())
        );

        let eq = parse_equation("x/2 - 3*x = 1/4").unwrap();
        assert_eq!(eq.left.terms(), &[Term::var(0.5, "x"), Term::var(-3.0, "x")]);
        assert_eq!(eq.right.terms(), &[Term::constant(0.25)]);
    }

    #[test]
    fn rejects_nonlinear_input() {
        assert!(matches!(
            parse_equation("x^2 = 4"),
            Err(ParseError::NonLinear(_))
        ));
        assert!(matches!(
            parse_equation("2(x + 1) = 4"),
            Err(ParseError::NonLinear(_))
        ));
        assert!(matches!(
            parse_equation("x*x = 4"),
            Err(ParseError::NonLinear(_))
        ));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_equation("x + 3"), Err(ParseError::MissingEquals));
        assert!(matches!(
            parse_equation("x = 3 = 4"),
            Err(ParseError::UnconsumedInput(_))
        ));
        assert!(matches!(
            parse_equation("x/0 = 1"),
            Err(ParseError::ZeroDenominator(_))
        ));
    }
}

use crate::equation::config::TermGrammar;
use crate::equation::errors::EquationError;
use log::debug;
use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::{digit1, one_of, space0},
    combinator::{all_consuming, opt},
    sequence::preceded,
};

/// one signed monomial `coefficient * X^exponent`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub exponent: u64,
}

impl Term {
    pub fn new(coefficient: f64, exponent: u64) -> Self {
        Term {
            coefficient,
            exponent,
        }
    }
}

/// `X^` followed by an optionally signed integer, nothing else
fn x_power(input: &str) -> IResult<&str, (Option<char>, &str)> {
    all_consuming(preceded(
        (tag("X^"), space0),
        (opt(one_of("+-")), digit1),
    ))
    .parse(input)
}

fn parse_exponent(x_part: &str) -> Result<u64, EquationError> {
    let (_, (sign, digits)) =
        x_power(x_part).map_err(|_| EquationError::invalid_x_part(x_part))?;
    let exponent = digits
        .parse::<u64>()
        .map_err(|_| EquationError::invalid_x_part(x_part))?;
    // negative powers are not polynomials
    if sign == Some('-') && exponent != 0 {
        return Err(EquationError::invalid_x_part(x_part));
    }
    Ok(exponent)
}

fn parse_coefficient(coeff_str: &str, term: &str) -> Result<f64, EquationError> {
    let coeff_str = coeff_str.trim();
    // the tokenizer leaves `- 3` for `... - 3 * X^2`
    let normalized = match coeff_str.chars().next() {
        Some(sign @ ('-' | '+')) => format!("{}{}", sign, coeff_str[1..].trim_start()),
        _ => coeff_str.to_string(),
    };
    normalized
        .parse::<f64>()
        .map_err(|_| EquationError::invalid_term(term))
}

/// turn one trimmed term (as produced by the tokenizer) into a `Term`.
///# Example
/// ```
/// use RustedPoly::equation::config::TermGrammar;
/// use RustedPoly::equation::term_parser::{parse_term, Term};
/// assert_eq!(parse_term("-3.5 * X^2", TermGrammar::Strict).unwrap(), Term::new(-3.5, 2));
/// assert_eq!(parse_term("7", TermGrammar::Lenient).unwrap(), Term::new(7.0, 0));
/// assert!(parse_term("7", TermGrammar::Strict).is_err());
/// ```
pub fn parse_term(term: &str, grammar: TermGrammar) -> Result<Term, EquationError> {
    let parts: Vec<&str> = term.split('*').collect();
    let parsed = match (parts.as_slice(), grammar) {
        ([constant], TermGrammar::Lenient) => {
            Term::new(parse_coefficient(constant, term)?, 0)
        }
        ([coeff_str, x_part], _) => {
            let coefficient = parse_coefficient(coeff_str, term)?;
            let exponent = parse_exponent(x_part.trim())?;
            Term::new(coefficient, exponent)
        }
        _ => return Err(EquationError::invalid_term(term)),
    };
    debug!("term '{}' -> {:?}", term, parsed);
    Ok(parsed)
}

//! Leaf grammar: element symbols and their count suffixes.

use nom::combinator::opt;
use nom::error::ErrorKind;
use nom::IResult;

use crate::parser::{take_token_if, CountNode, Span, TokenSlice, TokenType, UnitNode};

/// True when a digit run is a legal count: a single digit 2-9, or at least
/// two digits without a leading zero (any integer >= 10). `0` and `1` are
/// pointless multipliers and rejected.
///
/// The lexer only produces `Number` tokens made of ASCII digits, so byte
/// patterns are enough here.
fn is_legal_count(digits: &str) -> bool {
    match digits.as_bytes() {
        [b'2'..=b'9'] => true,
        [b'1'..=b'9', _, ..] => true,
        _ => false,
    }
}

/// Parse a count suffix.
///
/// Fails without consuming if the next token is not a digit run, or if the
/// run is not a legal count. Callers treat a count as optional (units) or
/// mandatory (groups); an unconsumed illegal run then either fails the
/// anchored whole-input check or the group, respectively.
pub fn parse_count(input: TokenSlice<'_>) -> IResult<TokenSlice<'_>, CountNode> {
    let (rest, token) = take_token_if(
        |t| matches!(t, TokenType::Number(digits) if is_legal_count(digits)),
        ErrorKind::Digit,
    )(input)?;
    let digits = match &token.token_type {
        TokenType::Number(digits) => digits.clone(),
        _ => unreachable!("take_token_if only accepts Number tokens here"),
    };
    Ok((
        rest,
        CountNode {
            digits,
            span: Span::of_token(token),
        },
    ))
}

/// Parse a unit: one symbol with an optional count.
pub fn parse_unit(input: TokenSlice<'_>) -> IResult<TokenSlice<'_>, UnitNode> {
    let (rest, sym) = take_token_if(
        |t| matches!(t, TokenType::Symbol(_)),
        ErrorKind::Alpha,
    )(input)?;
    let (rest, count) = opt(parse_count)(rest)?;

    let symbol = match &sym.token_type {
        TokenType::Symbol(symbol) => symbol.clone(),
        _ => unreachable!("take_token_if only accepts Symbol tokens here"),
    };
    let span = match &count {
        Some(count) => Span::merge(Span::of_token(sym), count.span),
        None => Span::of_token(sym),
    };
    Ok((
        rest,
        UnitNode {
            symbol,
            count,
            span,
        },
    ))
}

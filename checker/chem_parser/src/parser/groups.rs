//! Counted parenthesized groups.
//!
//! `parse_group` and `parse_item` recurse into each other, which is all it
//! takes to handle nesting of any depth. The count after the closing
//! parenthesis is not optional: parentheses without a multiplier are
//! pointless and rejected.

use nom::combinator::cut;
use nom::error::ErrorKind;
use nom::multi::many1;
use nom::IResult;

use crate::parser::units::parse_count;
use crate::parser::{parse_item, take_token_if, GroupNode, Span, TokenSlice, TokenType};

/// Parse `(` items `)` count.
///
/// Everything after the opening parenthesis is committed: a malformed
/// interior, a missing `)`, or a missing count fails the whole parse at
/// the offending token instead of backtracking into some other reading.
/// In valid input a `(` can only ever open a group, so committing early
/// loses nothing and keeps diagnostics pointed at the real problem.
pub fn parse_group(input: TokenSlice<'_>) -> IResult<TokenSlice<'_>, GroupNode> {
    let (rest, open) = take_token_if(
        |t| matches!(t, TokenType::LeftParen),
        ErrorKind::Tag,
    )(input)?;
    log::trace!("group opened at {}", open.location);

    let (rest, items) = cut(many1(parse_item))(rest)?;
    let (rest, _close) = cut(take_token_if(
        |t| matches!(t, TokenType::RightParen),
        ErrorKind::Tag,
    ))(rest)?;
    let (rest, count) = cut(parse_count)(rest)?;

    let span = Span::merge(Span::of_token(open), count.span);
    Ok((
        rest,
        GroupNode {
            items,
            count,
            span,
        },
    ))
}

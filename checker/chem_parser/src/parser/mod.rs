//! Recursive-descent validation of chemical-formula notation, built on nom
//! over a lexed token slice.
//!
//! The grammar, anchored to the whole input:
//!
//! ```text
//! formula := item+
//! item    := unit | group
//! unit    := SYMBOL count?
//! group   := '(' item+ ')' count          the count is mandatory
//! count   := NUMBER that is 2-9, or >= 10 with no leading zero
//! ```
//!
//! Nesting of any depth falls out of the recursion between [`parse_item`]
//! and [`parse_group`]; no pass ever rescans the input. One illegal or
//! leftover token anywhere invalidates the whole string.

pub mod diagnostics;
pub mod groups;
pub mod guard;
pub mod units;


use nom::combinator::all_consuming;
use nom::error::ErrorKind;
use nom::{IResult, InputLength};

use chem_lexer::lexer::Lexer;

// Re-export what parser callers and submodules reach for
pub use chem_ast::ast::{CountNode, FormulaNode, GroupNode, ItemNode, UnitNode};
pub use chem_ast::visit::Span;
pub use chem_lexer::token::{Token, TokenType};
pub use diagnostics::{render_snippet, Diagnostic, Severity};
pub use groups::parse_group;
pub use guard::{ensure_usable, InputError};
pub use units::{parse_count, parse_unit};

/// A cursor over the lexed tokens of one formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenSlice<'a>(pub &'a [Token]);

impl<'a> TokenSlice<'a> {
    /// Create a new token slice over `tokens`.
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenSlice(tokens)
    }

    /// The current token, without advancing.
    pub fn peek(&self) -> Option<&'a Token> {
        self.0.first()
    }

    /// A slice positioned one token further along.
    pub fn advance(&self) -> TokenSlice<'a> {
        TokenSlice(self.0.get(1..).unwrap_or(&[]))
    }

    /// True when no tokens remain.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl InputLength for TokenSlice<'_> {
    fn input_len(&self) -> usize {
        self.0.len()
    }
}

/// Consume one token whose type satisfies `pred`, or fail with `kind`
/// without consuming anything.
pub fn take_token_if<'a, F>(
    pred: F,
    kind: ErrorKind,
) -> impl Fn(TokenSlice<'a>) -> IResult<TokenSlice<'a>, &'a Token>
where
    F: Fn(&TokenType) -> bool,
{
    move |input: TokenSlice<'a>| match input.peek() {
        Some(token) if pred(&token.token_type) => Ok((input.advance(), token)),
        _ => Err(nom::Err::Error(nom::error::Error::new(input, kind))),
    }
}

/// Parse a single formula item: a unit, or a counted group.
pub fn parse_item(input: TokenSlice<'_>) -> IResult<TokenSlice<'_>, ItemNode> {
    match input.peek() {
        Some(token) if token.starts_item() => {
            if matches!(token.token_type, TokenType::LeftParen) {
                let (rest, group) = parse_group(input)?;
                Ok((rest, ItemNode::Group(group)))
            } else {
                let (rest, unit) = parse_unit(input)?;
                Ok((rest, ItemNode::Unit(unit)))
            }
        }
        _ => Err(nom::Err::Error(nom::error::Error::new(
            input,
            ErrorKind::Alt,
        ))),
    }
}

/// Parse one-or-more items.
///
/// This is the whole grammar except for anchoring: callers that need "and
/// nothing else" wrap it, as [`parse_formula_with_diagnostics`] does.
pub fn parse_formula(input: TokenSlice<'_>) -> IResult<TokenSlice<'_>, FormulaNode> {
    let (rest, items) = nom::multi::many1(parse_item)(input)?;
    // many1 guarantees at least one item
    let span = Span::merge(items[0].span(), items[items.len() - 1].span());
    Ok((rest, FormulaNode { items, span }))
}

/// Parse a complete token stream into a formula tree, or explain at which
/// token it stopped being one.
pub fn parse_formula_with_diagnostics(
    input: TokenSlice<'_>,
) -> Result<FormulaNode, Diagnostic> {
    match all_consuming(parse_formula)(input) {
        Ok((_, formula)) => Ok(formula),
        Err(err) => Err(diagnostics::diagnostic_from_nom_error(&err)),
    }
}

/// Check a formula string for valid syntax.
///
/// Absent input, the empty string, and whitespace anywhere are
/// precondition violations reported as [`InputError`]; they are the only
/// error cases. Every grammar-level problem is an ordinary `Ok(false)`.
///
/// # Examples
///
/// ```
/// use chem_parser::parser::is_syntax_valid;
///
/// assert_eq!(is_syntax_valid(Some("(NaCl)2")), Ok(true));
/// assert_eq!(is_syntax_valid(Some("(H2O)")), Ok(false));
/// assert!(is_syntax_valid(None).is_err());
/// ```
pub fn is_syntax_valid(formula: Option<&str>) -> Result<bool, InputError> {
    let formula = ensure_usable(formula)?;
    let tokens: Vec<Token> = Lexer::new(formula).collect();
    match parse_formula_with_diagnostics(TokenSlice::new(&tokens)) {
        Ok(_) => Ok(true),
        Err(diagnostic) => {
            log::debug!("rejected {:?}: {}", formula, diagnostic.message);
            Ok(false)
        }
    }
}

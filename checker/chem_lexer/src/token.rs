//! Semantic tokens and source locations for formula text.

use std::fmt;

/// Represents a token's location in the formula text.
///
/// Formulas are single-line in practice (whitespace is rejected upstream),
/// but line tracking is kept so locations stay honest for arbitrary input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based line number in the input
    pub line: usize,
    /// The 1-based column number in the input
    pub column: usize,
    /// The 0-based byte offset from the start of the input
    pub offset: usize,
}

/// Represents the type of a token in chemical-formula notation.
///
/// These are the grammar's terminals. The lexer makes no judgment beyond
/// shape: a `Number` may still be an illegal count, and a `Symbol` is never
/// checked against real element names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenType {
    /// An element-style symbol: one uppercase letter followed by up to two
    /// lowercase letters, e.g. `H`, `Na`, `Uuo`.
    Symbol(String),
    /// A run of decimal digits, leading zeros included. Whether the run is
    /// a legal count suffix is the parser's call, not the lexer's.
    Number(String),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// A run of whitespace. Not skipped: whitespace is never legal in a
    /// formula, and the guard needs a token to point at.
    Whitespace(String),
    /// Any character sequence the grammar has no use for.
    Unrecognized(String),
}

/// A token together with its original text and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token
    pub token_type: TokenType,
    /// The text exactly as it appeared in the input
    pub lexeme: String,
    /// Where the token starts
    pub location: Location,
}

impl Token {
    /// Create a new token.
    pub fn new(token_type: TokenType, lexeme: impl Into<String>, location: Location) -> Self {
        Token {
            token_type,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// True for the tokens that can begin a formula item: a symbol or an
    /// opening parenthesis.
    pub fn starts_item(&self) -> bool {
        matches!(
            self.token_type,
            TokenType::Symbol(_) | TokenType::LeftParen
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.token_type, self.location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.line, self.column, self.offset)
    }
}

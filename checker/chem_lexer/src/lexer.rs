//! Lexer for chemical-formula notation using the 'logos' crate
//! Recognizes element symbols, digit runs, parentheses, and whitespace

use crate::token::{Location, Token, TokenType};
use logos::Logos;

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum RawToken {
    /// One uppercase letter followed by up to two lowercase letters,
    /// longest match. `NaCl` lexes as `Na` then `Cl`.
    #[regex(r"[A-Z][a-z]{0,2}")]
    Symbol,

    /// A run of decimal digits. Count legality (no `0`, no `1`, no leading
    /// zero) is decided by the parser, so the raw run is kept intact.
    #[regex(r"[0-9]+")]
    Number,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// Whitespace is deliberately NOT skipped. A formula may not contain
    /// any, so downstream code needs the token to reject and point at.
    #[regex(r"\s+")]
    Whitespace,
}

/// Formula lexer that pairs each raw token with its source location.
pub struct Lexer<'source> {
    /// The logos lexer instance
    raw: logos::Lexer<'source, RawToken>,
    /// Current line number (1-based)
    line: usize,
    /// Current column number (1-based)
    column: usize,
    /// Current byte offset in source
    offset: usize,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given formula text
    pub fn new(source: &'source str) -> Self {
        Self {
            raw: RawToken::lexer(source),
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Convert a RawToken to our semantic Token type
    fn convert_token(&self, raw: RawToken, lexeme: &str) -> Token {
        let location = Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        };

        let token_type = match raw {
            RawToken::Symbol => TokenType::Symbol(lexeme.to_string()),
            RawToken::Number => TokenType::Number(lexeme.to_string()),
            RawToken::LParen => TokenType::LeftParen,
            RawToken::RParen => TokenType::RightParen,
            RawToken::Whitespace => TokenType::Whitespace(lexeme.to_string()),
        };

        Token::new(token_type, lexeme, location)
    }

    /// Update line and column numbers based on lexeme
    fn update_position(&mut self, lexeme: &str) {
        for c in lexeme.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.offset += c.len_utf8();
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.raw.next()?;
        let lexeme = self.raw.slice();
        let token = match raw {
            Ok(raw) => self.convert_token(raw, lexeme),
            Err(_) => {
                #[cfg(feature = "logging")]
                log::debug!(
                    "unrecognized input {:?} at {}:{}",
                    lexeme,
                    self.line,
                    self.column
                );
                Token::new(
                    TokenType::Unrecognized(lexeme.to_string()),
                    lexeme,
                    Location {
                        line: self.line,
                        column: self.column,
                        offset: self.offset,
                    },
                )
            }
        };
        self.update_position(lexeme);
        Some(token)
    }
}

//! Shared helpers for the integration tests.

use chem_lexer::{Lexer, Token};

/// Lex a formula into its token vector.
pub fn lex(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

/// Convenience wrapper: the grammar verdict for input that is known to
/// pass the guard.
pub fn verdict(input: &str) -> bool {
    chem_parser::parser::is_syntax_valid(Some(input))
        .unwrap_or_else(|err| panic!("{input:?} should pass the guard, got {err}"))
}

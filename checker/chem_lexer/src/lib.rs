//! Lexical analysis for chemical-formula notation.
//!
//! This crate converts a formula string into a stream of tokens for the
//! parser: element-style symbols, digit runs, parentheses, whitespace, and
//! anything the grammar has no use for.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod token;

// Re-export the main types for convenience
pub use lexer::Lexer;
pub use token::{Location, Token, TokenType};

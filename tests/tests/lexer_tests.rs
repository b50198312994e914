// Integration tests for the formula lexer
use chem_lexer::TokenType;
use pretty_assertions::assert_eq;
use tests::lex;

#[test]
fn test_every_terminal_kind() {
    let tokens = lex("(Na2) x");
    let types: Vec<TokenType> = tokens.into_iter().map(|t| t.token_type).collect();
    assert_eq!(
        types,
        vec![
            TokenType::LeftParen,
            TokenType::Symbol("Na".into()),
            TokenType::Number("2".into()),
            TokenType::RightParen,
            TokenType::Whitespace(" ".into()),
            TokenType::Unrecognized("x".into()),
        ]
    );
}

#[test]
fn test_symbol_shapes() {
    // One capital, up to two lowercase; the third lowercase letter starts
    // new (unlexable) input
    assert_eq!(
        lex("B").first().unwrap().token_type,
        TokenType::Symbol("B".into())
    );
    assert_eq!(
        lex("Br").first().unwrap().token_type,
        TokenType::Symbol("Br".into())
    );
    assert_eq!(
        lex("Uuo").first().unwrap().token_type,
        TokenType::Symbol("Uuo".into())
    );

    let tokens = lex("Uuoo");
    assert_eq!(tokens[0].token_type, TokenType::Symbol("Uuo".into()));
    assert_eq!(tokens[1].token_type, TokenType::Unrecognized("o".into()));
}

#[test]
fn test_digit_runs_stay_whole() {
    let tokens = lex("C120H184");
    let types: Vec<TokenType> = tokens.into_iter().map(|t| t.token_type).collect();
    assert_eq!(
        types,
        vec![
            TokenType::Symbol("C".into()),
            TokenType::Number("120".into()),
            TokenType::Symbol("H".into()),
            TokenType::Number("184".into()),
        ]
    );
}

#[test]
fn test_offsets_are_bytes_columns_are_chars() {
    let tokens = lex("(OH)12");
    let number = tokens.last().unwrap();
    assert_eq!(number.token_type, TokenType::Number("12".into()));
    assert_eq!(number.location.offset, 4);
    assert_eq!(number.location.column, 5);
    assert_eq!(number.lexeme, "12");
}

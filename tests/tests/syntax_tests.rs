// System tests for the full validation pipeline: guard, lexer, parser.
// The case matrix follows the checker's reference behavior for plain,
// counted, parenthesized, and nested formulas.

use chem_parser::parser::{is_syntax_valid, InputError};
use tests::verdict;

#[test]
fn test_single_element() {
    assert!(verdict("O"));
    assert!(verdict("Br"));
    assert!(verdict("Umm"));

    assert!(!verdict("o"));
    assert!(!verdict("Uhhhhhhhhhh"));
}

#[test]
fn test_many_elements() {
    assert!(verdict("OH"));
    assert!(verdict("BrH"));
    assert!(verdict("BrHe"));
    assert!(verdict("UmmOhh"));

    assert!(!verdict("ErrrrrUhh"));
    assert!(!verdict("UmmUhhhhhhhhh"));
}

#[test]
fn test_multiples() {
    assert!(verdict("O2"));
    assert!(verdict("H2O"));
    assert!(verdict("H2O2"));
    assert!(verdict("Hi2Ho4"));

    assert!(!verdict("o5"));
    assert!(!verdict("O1"));
    assert!(!verdict("O1o"));
    assert!(!verdict("O0"));
    assert!(!verdict("H1H8"));
    assert!(!verdict("L8RH8R0"));
}

#[test]
fn test_count_boundaries() {
    // 0 and 1 are never legal counts; 2-9 and anything >= 10 without a
    // leading zero always are.
    assert!(!verdict("O0"));
    assert!(!verdict("O1"));
    for count in 2..=9u32 {
        assert!(verdict(&format!("O{count}")), "O{count} should be valid");
    }
    assert!(verdict("O10"));
    assert!(verdict("O99"));
    assert!(verdict("O100"));
    assert!(!verdict("O01"));
    assert!(!verdict("O007"));
}

#[test]
fn test_parentheses() {
    assert!(verdict("(NaCl)2"));
    assert!(verdict("(Na2Cl)4"));
    assert!(verdict("(Na2Cl4)6OH"));

    assert!(!verdict("(NaCl"));
    assert!(!verdict("Boo)"));
    assert!(!verdict("(H2O)"));
}

#[test]
fn test_nested_parentheses() {
    assert!(verdict("((OH2)3Pr)4"));
    assert!(verdict("((OH2)3Pr)4LOL3"));
    assert!(verdict("((OH2)3(Hgg)4Pr)4"));

    assert!(!verdict("(((((((((((((WhOoPs)"));
    assert!(!verdict("((NaCl)(Oh)2)2"));
}

#[test]
fn test_fully_parenthesized_formula() {
    // The whole input being one counted group is fine
    assert!(verdict("(H2O)2"));
    assert!(verdict("((H2O)2)2"));
}

#[test]
fn test_not_real_chemistry_still_valid() {
    // Grammar, not chemistry: made-up symbols pass
    assert!(verdict("Xy99"));
    assert!(verdict("Zzz2Qqq"));
}

#[test]
fn test_invalid_input_is_an_error_not_a_verdict() {
    assert_eq!(is_syntax_valid(None), Err(InputError::NullInput));

    assert!(matches!(
        is_syntax_valid(Some("")),
        Err(InputError::InvalidInput { .. })
    ));
    assert!(matches!(
        is_syntax_valid(Some("Hi ThErE1")),
        Err(InputError::InvalidInput { .. })
    ));
    assert!(matches!(
        is_syntax_valid(Some("\tH2O")),
        Err(InputError::InvalidInput { .. })
    ));
}

#[test]
fn test_stray_punctuation_is_a_plain_false() {
    // Anything that is not whitespace reaches the grammar and fails there,
    // as a verdict rather than an error
    assert_eq!(is_syntax_valid(Some("H2O!")), Ok(false));
    assert_eq!(is_syntax_valid(Some("H-O")), Ok(false));
    assert_eq!(is_syntax_valid(Some("{NaCl}2")), Ok(false));
}

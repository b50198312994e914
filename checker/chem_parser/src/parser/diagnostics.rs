use chem_ast::visit::Span;
use chem_lexer::token::{Token, TokenType};
use nom::error::{Error as NomError, ErrorKind};
use nom::Err as NomErr;

/// Severity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

/// A diagnostic describing where and why a formula stopped parsing.
///
/// Diagnostics are informational only: at the public boundary a grammar
/// failure is still a plain `false`, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Span,
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic at a specific token with a custom message
    pub fn at_token<S: Into<String>>(token: &Token, message: S) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            span: Span::of_token(token),
            help: default_help_for_token(&token.token_type),
        }
    }

    /// Create a diagnostic for a nom ErrorKind, optionally anchored at a token
    pub fn from_error_kind(token: Option<&Token>, kind: ErrorKind) -> Self {
        let (message, help) = message_for_error_kind(kind, token.map(|t| &t.token_type));
        let span = token.map(Span::of_token).unwrap_or_default();
        Self {
            severity: Severity::Error,
            message,
            span,
            help,
        }
    }
}

/// Convert a nom error into a single diagnostic
pub fn diagnostic_from_nom_error<'a>(
    err: &NomErr<NomError<crate::parser::TokenSlice<'a>>>,
) -> Diagnostic {
    match err {
        NomErr::Error(NomError { input, code }) | NomErr::Failure(NomError { input, code }) => {
            Diagnostic::from_error_kind(input.peek(), *code)
        }
        NomErr::Incomplete(_) => Diagnostic {
            severity: Severity::Error,
            message: "Incomplete input".to_string(),
            span: Span::default(),
            help: Some("The parser expected more input. Did the formula end unexpectedly?".into()),
        },
    }
}

/// Provide a default help message for a token type
fn default_help_for_token(tt: &TokenType) -> Option<String> {
    use TokenType::*;
    match tt {
        RightParen => Some("Did you forget a matching '(' earlier?".to_string()),
        LeftParen => Some("Groups look like '(H2O)3': contents, then a count".to_string()),
        Number(_) => Some(
            "Counts are a single digit 2-9, or 10 and up with no leading zero".to_string(),
        ),
        Whitespace(_) => Some("Formulas may not contain whitespace".to_string()),
        Unrecognized(_) => {
            Some("Only A-Z, a-z, 0-9, '(' and ')' can appear in a formula".to_string())
        }
        Symbol(_) => None,
    }
}

/// Map a nom ErrorKind and optional token type to a user-friendly message
fn message_for_error_kind(kind: ErrorKind, tok: Option<&TokenType>) -> (String, Option<String>) {
    use ErrorKind::*;
    let msg = match (kind, tok) {
        // Token mismatch
        (Tag, Some(tt)) => format!("Unexpected token: {}", pretty_token(tt)),
        (Tag, None) => "Unexpected end of formula".to_string(),

        // Expected character classes
        (Alpha, Some(tt)) => format!("Expected an element symbol, found {}", pretty_token(tt)),
        (Alpha, None) => "Expected an element symbol".to_string(),
        (Digit, Some(tt)) => format!("Expected a count, found {}", pretty_token(tt)),
        (Digit, None) => "Expected a count".to_string(),

        // Item dispatch and repetition
        (Alt, Some(tt)) => format!(
            "Expected an element symbol or a group, found {}",
            pretty_token(tt)
        ),
        (Alt, None) => "Expected an element symbol or a group".to_string(),
        (Many1, _) => "Expected at least one element or group".to_string(),

        // Anchoring: the formula parsed, but input remained
        (Eof, Some(tt)) => format!("Leftover input starting at {}", pretty_token(tt)),
        (Eof, None) => "Unexpected end of formula".to_string(),

        _ => "Syntax error".to_string(),
    };

    // Provide contextual help when possible, otherwise fall back to token defaults
    let help = match (kind, tok) {
        (Tag, None) => {
            Some("Did you forget a closing ')' or a group count?".to_string())
        }
        (Digit, _) => Some(
            "Parenthesized groups must end with a count: a single digit 2-9, or 10 and up"
                .to_string(),
        ),
        _ => tok.and_then(default_help_for_token),
    };

    (msg, help)
}

/// Format a token type for display
fn pretty_token(tt: &TokenType) -> String {
    match tt {
        TokenType::Symbol(s) => format!("element symbol '{s}'"),
        TokenType::Number(n) => format!("number '{n}'"),
        TokenType::LeftParen => "'('".to_string(),
        TokenType::RightParen => "')'".to_string(),
        TokenType::Whitespace(_) => "whitespace".to_string(),
        TokenType::Unrecognized(s) => format!("unrecognized text '{s}'"),
    }
}

/// Render a diagnostic as a one-line snippet with a caret range under the
/// offending span.
///
/// Formulas are single-line (whitespace never survives the guard), so a
/// single source line with carets is always enough.
pub fn render_snippet(diag: &Diagnostic, source: &str) -> String {
    let start = diag.span.start.min(source.len());
    let end = diag.span.end.clamp(start, source.len());
    let pad = source[..start].chars().count();
    let caret_len = source[start..end].chars().count().max(1);

    let mut out = format!("{}\n  {}\n  ", diag.message, source);
    out.push_str(&" ".repeat(pad));
    out.push_str(&"^".repeat(caret_len));
    if let Some(help) = &diag.help {
        out.push_str("\n  help: ");
        out.push_str(help);
    }
    out
}

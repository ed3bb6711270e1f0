//! Utility macros for the front end.
//!
//! This module defines helper macros used throughout the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for fixed-lexeme tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's source lexeme
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
        }
    };
}

/// Creates a lexer handler for tokens whose lexeme is fixed.
///
/// Generates a handler function that advances the cursor past the lexeme and
/// returns a token of the given kind.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$literal` - The literal lexeme (also used for cursor advancement)
///
/// # Example
///
/// ```ignore
/// TokenPattern {
///     regex: Regex::new(r"\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $literal:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            lexer.advance_n($literal.len());
            Some(MK_TOKEN!($kind, String::from($literal)))
        }
    };
}

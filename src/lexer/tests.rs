//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - One- and two-character operators and delimiters
//! - Whitespace handling
//! - Illegal characters and the EOF sentinel

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_ident, TokenKind},
};

#[test]
fn test_next_token_walks_a_full_program() {
    let source = r#"let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};
let result = add(five, ten);
!-/*5;
5 < 10 > 5;
if (5 < 10) {
    return true;
} else {
    return false;
}
"#;

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assignment, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Assignment, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "result"),
        (TokenKind::Assignment, "="),
        (TokenKind::Identifier, "add"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "ten"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Not, "!"),
        (TokenKind::Dash, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Star, "*"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::Greater, ">"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Int, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::EOF, ""),
    ];

    let mut lexer = Lexer::new(source.to_string());
    for (i, (kind, literal)) in expected.iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token.kind, *kind, "kind mismatch at token {}", i);
        assert_eq!(token.literal, *literal, "literal mismatch at token {}", i);
    }
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let if else true false return".to_string());

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::If);
    assert_eq!(tokens[3].kind, TokenKind::Else);
    assert_eq!(tokens[4].kind, TokenKind::True);
    assert_eq!(tokens[5].kind, TokenKind::False);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase".to_string());

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].literal, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].literal, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].literal, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].literal, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers_keep_their_lexeme() {
    let tokens = tokenize("42 0 1234567890".to_string());

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].literal, "42");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].literal, "0");
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].literal, "1234567890");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("= + - ! * / < > == !=".to_string());

    assert_eq!(tokens[0].kind, TokenKind::Assignment);
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::Dash);
    assert_eq!(tokens[3].kind, TokenKind::Not);
    assert_eq!(tokens[4].kind, TokenKind::Star);
    assert_eq!(tokens[5].kind, TokenKind::Slash);
    assert_eq!(tokens[6].kind, TokenKind::Less);
    assert_eq!(tokens[7].kind, TokenKind::Greater);
    assert_eq!(tokens[8].kind, TokenKind::Equals);
    assert_eq!(tokens[9].kind, TokenKind::NotEquals);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_two_char_operators_win_over_their_prefixes() {
    let tokens = tokenize("a==b; c!=d".to_string());

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Equals);
    assert_eq!(tokens[1].literal, "==");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::Semicolon);
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].kind, TokenKind::NotEquals);
    assert_eq!(tokens[5].literal, "!=");
    assert_eq!(tokens[6].kind, TokenKind::Identifier);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_delimiters() {
    let tokens = tokenize(", ; ( ) { }".to_string());

    assert_eq!(tokens[0].kind, TokenKind::Comma);
    assert_eq!(tokens[1].kind, TokenKind::Semicolon);
    assert_eq!(tokens[2].kind, TokenKind::OpenParen);
    assert_eq!(tokens[3].kind, TokenKind::CloseParen);
    assert_eq!(tokens[4].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[5].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_illegal_character_does_not_stop_the_stream() {
    let tokens = tokenize("let x = @;".to_string());

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].literal, "@");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_input() {
    let tokens = tokenize(String::new());

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].literal, "");
}

#[test]
fn test_tokenize_whitespace_only_input() {
    let tokens = tokenize(" \t\r\n ".to_string());

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_emits_exactly_one_eof() {
    let tokens = tokenize("5 + 5".to_string());

    let eof_count = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::EOF)
        .count();
    assert_eq!(eof_count, 1);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_next_token_stays_at_eof() {
    let mut lexer = Lexer::new("x".to_string());

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_lookup_ident_classifies_reserved_words() {
    assert_eq!(lookup_ident("fn"), TokenKind::Fn);
    assert_eq!(lookup_ident("let"), TokenKind::Let);
    assert_eq!(lookup_ident("true"), TokenKind::True);
    assert_eq!(lookup_ident("return"), TokenKind::Return);
    assert_eq!(lookup_ident("foobar"), TokenKind::Identifier);
    assert_eq!(lookup_ident("lets"), TokenKind::Identifier);
}

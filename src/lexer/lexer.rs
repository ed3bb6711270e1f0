use regex::Regex;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

pub type TokenHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

#[derive(Clone)]
pub struct TokenPattern {
    regex: Regex,
    handler: TokenHandler,
}

pub struct Lexer {
    patterns: Vec<TokenPattern>,
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            pos: 0,
            // Tried in order; two-character operators must precede their
            // one-character prefixes.
            patterns: vec![
                TokenPattern { regex: Regex::new(r"\s+").unwrap(), handler: skip_handler },
                TokenPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: identifier_handler },
                TokenPattern { regex: Regex::new("[0-9]+").unwrap(), handler: integer_handler },
                TokenPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
                TokenPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
                TokenPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
                TokenPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
                TokenPattern { regex: Regex::new(r"\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                TokenPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
                TokenPattern { regex: Regex::new(r"\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                TokenPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                TokenPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
                TokenPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
                TokenPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                TokenPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
                TokenPattern { regex: Regex::new(r"\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                TokenPattern { regex: Regex::new(r"\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
                TokenPattern { regex: Regex::new(r"\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
                TokenPattern { regex: Regex::new(r"\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
            ],
            source,
        }
    }

    /// Produces the next token, advancing the cursor past it.
    ///
    /// At end of input this returns the EOF token, and keeps returning it on
    /// every further call. An unrecognized character produces an `Illegal`
    /// token carrying that character as its lexeme.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, String::new());
            }

            let pattern = self
                .patterns
                .iter()
                .find(|pattern| {
                    matches!(pattern.regex.find(self.remainder()), Some(m) if m.start() == 0)
                })
                .cloned();

            match pattern {
                Some(pattern) => {
                    if let Some(token) = (pattern.handler)(self, &pattern.regex) {
                        return token;
                    }
                    // Whitespace consumed, classify again.
                }
                None => {
                    let offending = self.at().to_string();
                    self.advance_n(offending.len());
                    return MK_TOKEN!(TokenKind::Illegal, offending);
                }
            }
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn at(&self) -> char {
        self.remainder().chars().next().unwrap()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let end = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(end);
    None
}

fn identifier_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let lexeme = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    lexer.advance_n(lexeme.len());
    Some(MK_TOKEN!(lookup_ident(&lexeme), lexeme))
}

fn integer_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let lexeme = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    lexer.advance_n(lexeme.len());
    Some(MK_TOKEN!(TokenKind::Int, lexeme))
}

/// Runs the lexer over the whole input.
///
/// The returned stream is terminated by exactly one EOF token; nothing
/// follows it. Tokenization never fails; lexical problems surface as
/// `Illegal` tokens in the stream.
pub fn tokenize(source: String) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

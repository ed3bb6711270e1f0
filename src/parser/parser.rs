//! Parser implementation for building the abstract syntax tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser uses a Pratt approach with prefix/infix handlers for
//! expression parsing and a statement-handler table for statement
//! dispatch.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - Prefix handlers, invoked when a token kind can start an expression
//! - Infix handlers, invoked to extend an already-parsed left operand
//! - Precedence levels for the infix-capable token kinds
//!
//! Errors accumulate on the parser instead of aborting it; the statement
//! loop keeps going after a failure so one pass can report several
//! problems.

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::tokens::{Token, TokenKind},
    MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, InfixHandler, InfixLookup, Precedence, PrecedenceLookup,
        PrefixHandler, PrefixLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream, tracks the current position in it,
/// owns the handler lookup tables, and accumulates the diagnostics recorded
/// along the way.
pub struct Parser {
    /// The token stream to parse, terminated by an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Diagnostics recorded so far, in source order
    errors: Vec<ParseError>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for prefix (expression-starting) handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix (left-extending) handlers
    infix_lookup: InfixLookup,
    /// Lookup table for operator precedence
    precedence_lookup: PrecedenceLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// The stream is expected to end with an EOF token, as produced by
    /// `tokenize`; one is appended if missing so the cursor always has a
    /// resting place.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new()));
        }

        Parser {
            tokens,
            pos: 0,
            errors: vec![],
            stmt_lookup: StmtLookup::new(),
            prefix_lookup: PrefixLookup::new(),
            infix_lookup: InfixLookup::new(),
            precedence_lookup: PrecedenceLookup::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// Returns the table precedence of the current token, `Lowest` for
    /// kinds with no entry.
    pub fn current_precedence(&self) -> Precedence {
        match self.precedence_lookup.get(&self.current_kind()) {
            Some(precedence) => *precedence,
            None => Precedence::Lowest,
        }
    }

    /// Advances to the next token and returns the consumed one.
    ///
    /// The cursor never moves past the trailing EOF token.
    pub fn advance(&mut self) -> &Token {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
            &self.tokens[self.pos - 1]
        } else {
            &self.tokens[self.pos]
        }
    }

    /// Consumes a token of the specified kind.
    ///
    /// # Returns
    ///
    /// The consumed token, or an `ExpectedToken` diagnostic naming both
    /// kinds when the current token does not match (nothing is consumed in
    /// that case).
    pub fn expect(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        let got = self.current_kind();
        if got != expected {
            return Err(ParseError::ExpectedToken { expected, got });
        }

        Ok(self.advance().clone())
    }

    /// Checks whether tokens remain before the EOF sentinel.
    pub fn has_tokens(&self) -> bool {
        self.current_kind() != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the prefix handler lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_lookup
    }

    /// Returns a reference to the infix handler lookup table.
    pub fn get_infix_lookup(&self) -> &InfixLookup {
        &self.infix_lookup
    }

    /// Registers an infix handler for a token kind, together with the
    /// precedence the kind carries as a binary operator.
    pub fn infix(&mut self, kind: TokenKind, precedence: Precedence, infix_fn: InfixHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Registers a prefix handler for a token kind.
    ///
    /// Prefix registration leaves the precedence table alone; only
    /// infix-capable kinds carry a precedence.
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers a statement handler for a token kind.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Appends a diagnostic to the parser's error list.
    pub fn record_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// The diagnostics recorded so far, in order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }
}

/// Parses a token stream into a program.
///
/// This is the main entry point. It creates a parser, installs the handler
/// tables, and parses statements until the EOF token.
///
/// Parsing is best-effort: when a statement fails, its diagnostic is
/// recorded and parsing resumes, advancing one token whenever the failing
/// handler consumed nothing so the loop always makes progress. The caller
/// must inspect the returned error list before trusting the tree; a
/// non-empty list means the program is partial.
pub fn parse(tokens: Vec<Token>) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut statements = vec![];

    while parser.has_tokens() {
        let checkpoint = parser.pos;
        match parse_stmt(&mut parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => {
                parser.record_error(error);
                if parser.pos == checkpoint {
                    parser.advance();
                }
            }
        }
    }

    (Program { statements }, parser.errors)
}

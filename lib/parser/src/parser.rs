//! Precedence climbing parser for the grammar
//!
//! ```text
//! E      --> Exp(0)
//! Exp(p) --> P { B Exp(q) }
//! P      --> U Exp(q) | "(" E ")" | v
//! B      --> "+" | "-" | "*" | "/" | "^" | "||" | "&&" | "="
//! U      --> "-"
//! ```
//!
//! where `B Exp(q)` is only taken while the precedence of `B` is at least `p`,
//! and `q` is the precedence of the operator for right associative operators
//! and one more than that for left associative ones.
mod expr;
mod operator;
use std::fmt::Display;

use cursor::Col;
pub use expr::Expr;
pub use operator::{Associativity, Operator, OperatorError};
use scanner::{ScanError, ScanErrorType, Scanner, Token, TokenType};

use TokenType::*;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("error (c. {col}): {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub col: Col,
}

impl From<ScanError> for ParseError {
    fn from(error: ScanError) -> Self {
        Self { kind: ParseErrorKind::Scan(error.error), col: error.col }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("{0}")]
    Scan(ScanErrorType),
    #[error("{0}")]
    Operator(OperatorError),
    #[error("Expected one of -, (, <ident> or <number>, got {found}")]
    UnexpectedToken { found: String },
    #[error("Expected token {expected}, but got {found}")]
    ExpectedToken { expected: String, found: String },
    #[error("Unexpected {found} after end of expression")]
    UnexpectedTrailingInput { found: String },
    #[error("Number literal {0} does not fit into 64 bits")]
    InvalidNumber(String),
}

impl ParseErrorKind {
    fn at(self, token: &Token) -> ParseError {
        ParseError { kind: self, col: token.col() }
    }
}

/// Parses a complete expression.
pub fn parse(source: &str) -> Result<Expr> {
    Parser::new(source).parse()
}

#[derive(Debug)]
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    debug: bool,
    depth: usize,
    trace: Vec<String>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { scanner: Scanner::new(source), debug: false, depth: 0, trace: Vec::new() }
    }

    /// When enabled, every step of the descent is recorded and can be read
    /// back with [`Parser::trace`] after parsing.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Parses one expression, which has to span the rest of the input.
    pub fn parse(&mut self) -> Result<Expr> {
        let expr = self.parse_expr(0)?;

        let token = self.scanner.peek()?;
        if !token.is_eof() {
            return Err(
                ParseErrorKind::UnexpectedTrailingInput { found: token.to_string() }.at(&token)
            );
        }

        log::debug!("Parsed {}", expr);
        Ok(expr)
    }

    fn parse_expr(&mut self, min_precedence: u8) -> Result<Expr> {
        self.step(format_args!("parse_expr({min_precedence})"));

        let mut expr = self.parse_primary()?;

        while let Some(op) = self.peek_binary_operator(min_precedence)? {
            self.scanner.consume()?;

            let next_min_precedence = match op.associativity() {
                Associativity::Right => op.precedence(),
                Associativity::Left => op.precedence() + 1,
            };
            self.step(format_args!("- op {op}"));

            let right = self.nested(|p| p.parse_expr(next_min_precedence))?;
            expr = Expr::binary(op, expr, right);
            self.step(format_args!("-> {expr}"));
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let token = self.scanner.peek()?;
        let expr = match token.ty() {
            BinaryOp if Operator::is_unary_prefix(token.lexeme()) => {
                let op = Operator::unary(token.lexeme())
                    .map_err(|e| ParseErrorKind::Operator(e).at(&token))?;
                self.scanner.consume()?;

                let operand = self.nested(|p| p.parse_expr(op.precedence()))?;
                Expr::unary(op, operand)
            }
            LeftParen => {
                self.scanner.consume()?;
                let expr = self.nested(|p| p.parse_expr(0))?;
                self.consume_or_error(RightParen)?;

                // Grouping leaves no node behind, the nesting already encodes it
                return Ok(expr);
            }
            Identifier => {
                self.scanner.consume()?;
                Expr::identifier(token.lexeme())
            }
            Number => {
                self.scanner.consume()?;
                let value = token.lexeme().parse().map_err(|_| {
                    ParseErrorKind::InvalidNumber(token.lexeme().to_string()).at(&token)
                })?;
                Expr::number(value)
            }
            _ => {
                return Err(
                    ParseErrorKind::UnexpectedToken { found: token.to_string() }.at(&token)
                )
            }
        };

        self.step(format_args!("-> {expr}"));
        Ok(expr)
    }
}

// Helpers
impl<'a> Parser<'a> {
    /// Returns the upcoming operator if it binds at least as tight as
    /// `min_precedence`, without consuming it.
    fn peek_binary_operator(&mut self, min_precedence: u8) -> Result<Option<Operator>> {
        let token = self.scanner.peek()?;
        if token.ty() != BinaryOp {
            return Ok(None);
        }

        let op =
            Operator::binary(token.lexeme()).map_err(|e| ParseErrorKind::Operator(e).at(&token))?;
        Ok((op.precedence() >= min_precedence).then_some(op))
    }

    fn consume_or_error(&mut self, ty: TokenType) -> Result<Token<'a>> {
        let token = self.scanner.peek()?;
        if token.ty() == ty {
            Ok(self.scanner.consume()?)
        } else {
            Err(ParseErrorKind::ExpectedToken { expected: ty.to_string(), found: token.to_string() }
                .at(&token))
        }
    }

    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn step(&mut self, step: impl Display) {
        if !self.debug && !log::log_enabled!(log::Level::Trace) {
            return;
        }

        let line = format!("{}{}", "  ".repeat(self.depth), step);
        log::trace!("{}", line);
        if self.debug {
            self.trace.push(line);
        }
    }
}

use std::fmt::Display;

use cursor::{Col, SourceRange};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    ty: TokenType,
    range: SourceRange<'a>,
}

impl<'a> Token<'a> {
    pub fn new(ty: TokenType, range: impl Into<SourceRange<'a>>) -> Token<'a> {
        Self { ty, range: range.into() }
    }

    pub fn ty(&self) -> TokenType {
        self.ty
    }

    pub fn lexeme(&self) -> &'a str {
        self.range.lexeme()
    }

    pub fn col(&self) -> Col {
        self.range.col()
    }

    pub fn is_eof(&self) -> bool {
        self.ty == TokenType::Eof
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.ty {
            TokenType::Eof => write!(f, "{}", self.ty),
            _ => write!(f, "{}", self.lexeme()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum TokenType {
    #[strum(serialize = "<<end>>")]
    Eof,
    #[strum(serialize = "identifier")]
    Identifier,
    #[strum(serialize = "number")]
    Number,
    #[strum(serialize = "operator")]
    BinaryOp,
    #[strum(serialize = "(")]
    LeftParen,
    #[strum(serialize = ")")]
    RightParen,
}

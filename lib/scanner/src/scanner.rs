use cursor::{Col, Cursor, SourceRange};

pub mod token;
pub use token::{Token, TokenType};
use TokenType::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{error} (column {col})")]
pub struct ScanError {
    pub error: ScanErrorType,
    pub col: Col,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanErrorType {
    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),
}

pub type Result<T> = std::result::Result<T, ScanError>;

/// On-demand tokenizer with a single token of lookahead.
///
/// Only the token after the current position is ever materialized: `peek`
/// scans it from a copy of the cursor and caches it together with its end
/// position, `consume` hands it out and moves the cursor past it.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    peeked: Option<(Result<Token<'a>>, Cursor<'a>)>,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source), peeked: None, finished: false }
    }

    /// Returns the next token without advancing.
    pub fn peek(&mut self) -> Result<Token<'a>> {
        let cursor = self.cursor;
        self.peeked.get_or_insert_with(|| scan_token(cursor)).0.clone()
    }

    /// Returns the next token and advances past it.
    ///
    /// Once the end of input is reached, every further call returns
    /// [`TokenType::Eof`] again.
    pub fn consume(&mut self) -> Result<Token<'a>> {
        let (token, end) = self.peeked.take().unwrap_or_else(|| scan_token(self.cursor));
        self.cursor = end;
        if let Ok(token) = &token {
            log::trace!("Consumed {:?} {:?}", token.ty(), token.lexeme());
        }
        token
    }
}

/// Yields every token up to and including `Eof`, or up to the first error.
impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.consume();
        self.finished = !matches!(&token, Ok(t) if !t.is_eof());
        Some(token)
    }
}

fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^' | '=')
}

fn scan_token(mut cursor: Cursor<'_>) -> (Result<Token<'_>>, Cursor<'_>) {
    cursor.advance_while(|c| c == ' ');

    let start = cursor;
    let Some(c) = cursor.next() else {
        return (Ok(Token::new(Eof, (start, cursor))), cursor);
    };

    let ty = match c {
        d if d.is_ascii_digit() => {
            cursor.advance_while(|c| c.is_ascii_digit());
            Number
        }
        l if l.is_ascii_lowercase() => {
            cursor.advance_while(|c| c.is_ascii_lowercase());
            Identifier
        }
        o if is_operator(o) => BinaryOp,
        '|' if cursor.next_if_eq('|') => BinaryOp,
        '&' if cursor.next_if_eq('&') => BinaryOp,
        '(' => LeftParen,
        ')' => RightParen,
        c => {
            let error = ScanError { error: ScanErrorType::UnexpectedCharacter(c), col: start.col() };
            return (Err(error), cursor);
        }
    };

    (Ok(Token::new(ty, SourceRange::new(start, cursor))), cursor)
}

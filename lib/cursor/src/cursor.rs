use std::fmt::{Display, Formatter};

mod source_range;
pub use source_range::*;

/// A position inside an expression.
///
/// The cursor is a plain byte index into the source, so saving a position for
/// lookahead is just a copy of the cursor.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> std::fmt::Debug for Cursor<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Printing the source is usually to verbose, so by default
        // we only print the column
        if f.alternate() {
            f.debug_struct("Cursor")
                .field("col", &self.col())
                .field("source", &self.source)
                .finish()
        } else {
            f.debug_struct("Cursor").field("col", &self.col()).finish()
        }
    }
}

impl<'a> PartialEq for Cursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        (self.source, self.pos) == (other.source, other.pos)
    }
}

/// 1-based column, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Col(pub usize);

impl Display for Col {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn col(&self) -> Col {
        Col(self.source[..self.pos].chars().count() + 1)
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }
}

impl<'a> From<&'a str> for Cursor<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }
}

impl<'a> Cursor<'a> {
    pub fn slice_until(&self, end: &Cursor<'a>) -> &'a str {
        assert!(self.source == end.source);
        &self.source[self.pos..end.pos]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes the next char if it is `expected`.
    pub fn next_if_eq(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes chars as long as `pred` holds, returns how many were consumed.
    pub fn advance_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(&pred) {
            self.next();
            count += 1;
        }
        count
    }
}

use std::fmt::{self, Display, Formatter};

use crate::Operator;

/// Expression tree produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Identifier(String),
    NumberLiteral(i64),
    /// An operator application. Unary minus reuses this shape: its only
    /// operand is `left` and `right` is `None`.
    BinaryOp { op: Operator, left: Box<Expr>, right: Option<Box<Expr>> },
}

impl Expr {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn number(value: i64) -> Self {
        Expr::NumberLiteral(value)
    }

    pub fn binary(op: Operator, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp { op, left: Box::new(left), right: Some(Box::new(right)) }
    }

    pub fn unary(op: Operator, operand: Expr) -> Self {
        Expr::BinaryOp { op, left: Box::new(operand), right: None }
    }
}

/// Prefix rendering: `op(left,right)` for binary and `op(operand)` for unary
/// nodes, leaves as written.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(name) => write!(f, "{}", name),
            Expr::NumberLiteral(value) => write!(f, "{}", value),
            Expr::BinaryOp { op, left, right: Some(right) } => {
                write!(f, "{}({},{})", op, left, right)
            }
            Expr::BinaryOp { op, left, right: None } => write!(f, "{}({})", op, left),
        }
    }
}

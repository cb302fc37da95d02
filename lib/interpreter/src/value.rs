use std::fmt;
use std::fmt::{Display, Formatter};

/// Result of evaluating an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    /// What an unbound variable evaluates to when the context isn't strict.
    Nil,
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Nil => write!(f, "nil"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl std::str::FromStr for Value {
    type Err = String;

    /// Accepts `true`, `false`, `nil` and (optionally negative) decimal integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(true.into()),
            "false" => Ok(false.into()),
            "nil" => Ok(Value::Nil),
            _ => s
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| format!("`{s}` is not an integer, boolean or nil")),
        }
    }
}

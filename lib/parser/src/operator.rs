#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OperatorError {
    #[error("Unknown binary operator `{0}`")]
    UnknownBinary(String),
    #[error("Unknown unary operator `{0}`")]
    UnknownUnary(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Operator {
    #[display(fmt = "||")]
    Or,
    #[display(fmt = "&&")]
    And,
    #[display(fmt = "=")]
    Equals,
    #[display(fmt = "+")]
    Add,
    #[display(fmt = "-")]
    Subtract,
    #[display(fmt = "-")]
    Negate,
    #[display(fmt = "*")]
    Multiply,
    #[display(fmt = "/")]
    Divide,
    #[display(fmt = "^")]
    Exponent,
}

impl Operator {
    /// Looks up the infix operator spelled `symbol`.
    ///
    /// Note that `=` is the equality test, there is no assignment.
    pub fn binary(symbol: &str) -> Result<Self, OperatorError> {
        Ok(match symbol {
            "||" => Operator::Or,
            "&&" => Operator::And,
            "=" => Operator::Equals,
            "+" => Operator::Add,
            "-" => Operator::Subtract,
            "*" => Operator::Multiply,
            "/" => Operator::Divide,
            "^" => Operator::Exponent,
            _ => return Err(OperatorError::UnknownBinary(symbol.to_string())),
        })
    }

    pub fn is_unary_prefix(symbol: &str) -> bool {
        symbol == "-"
    }

    pub fn unary(symbol: &str) -> Result<Self, OperatorError> {
        match symbol {
            "-" => Ok(Operator::Negate),
            _ => Err(OperatorError::UnknownUnary(symbol.to_string())),
        }
    }

    /// Binding strength, higher binds tighter.
    ///
    /// Unary minus takes its operand at precedence 4, so `*`, `/` and `^`
    /// bind into the operand while `+` and `-` end it: `-a * b` is `-(a * b)`
    /// and `-a + b` is `(-a) + b`.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Or => 0,
            Operator::And => 1,
            Operator::Equals => 2,
            Operator::Add | Operator::Subtract => 3,
            Operator::Negate => 4,
            Operator::Multiply | Operator::Divide => 5,
            Operator::Exponent => 6,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            Operator::Exponent => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    pub fn is_unary(self) -> bool {
        self == Operator::Negate
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Operator::Add
                | Operator::Subtract
                | Operator::Multiply
                | Operator::Divide
                | Operator::Exponent
        )
    }

    pub fn is_logical(self) -> bool {
        matches!(self, Operator::Or | Operator::And)
    }
}

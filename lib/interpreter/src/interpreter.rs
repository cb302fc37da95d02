use parser::{Expr, Operator};

mod value;
pub use value::Value;

mod context;
pub use context::Context;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("Operator {op} is only supported on {expected} values, got {value}")]
    TypeError { op: Operator, expected: &'static str, value: Value },
    #[error("Cannot evaluate {0}")]
    UnsupportedOperation(String),
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),
    #[error("Tried to divide by zero")]
    DivisionByZero,
    #[error("Integer overflow in {op}")]
    Overflow { op: Operator },
}

pub type Result<T> = std::result::Result<T, EvalError>;

/// Evaluates `expr` with the variables bound in `context`.
pub fn evaluate(expr: &Expr, context: &Context) -> Result<Value> {
    Interpreter::new(context).evaluate(expr)
}

/// Tree-walking evaluator. Every operand is evaluated, `&&` and `||` don't
/// short circuit.
#[derive(Debug, Clone, Copy)]
pub struct Interpreter<'c> {
    context: &'c Context,
}

impl<'c> Interpreter<'c> {
    pub fn new(context: &'c Context) -> Self {
        Self { context }
    }

    pub fn evaluate(&self, expr: &Expr) -> Result<Value> {
        let value = match expr {
            Expr::Identifier(name) => self.lookup(name)?,
            Expr::NumberLiteral(n) => (*n).into(),
            Expr::BinaryOp { op, left, right: None } if op.is_unary() => {
                let operand = self.integer_operand(*op, left)?;
                operand.checked_neg().ok_or(EvalError::Overflow { op: *op })?.into()
            }
            Expr::BinaryOp { op, left, right: Some(right) } if !op.is_unary() => {
                self.binary(*op, left, right)?
            }
            Expr::BinaryOp { .. } => {
                return Err(EvalError::UnsupportedOperation(expr.to_string()))
            }
        };

        log::trace!("Evaluated {} to {}", expr, value);
        Ok(value)
    }

    fn lookup(&self, name: &str) -> Result<Value> {
        match self.context.get(name) {
            Some(value) => Ok(*value),
            None if self.context.is_strict() => Err(EvalError::UndefinedVariable(name.to_string())),
            None => {
                log::debug!("Variable {} is not bound, using nil", name);
                Ok(Value::Nil)
            }
        }
    }

    fn binary(&self, op: Operator, left: &Expr, right: &Expr) -> Result<Value> {
        match op {
            Operator::Equals => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Ok((left == right).into())
            }
            _ if op.is_logical() => {
                let left = self.boolean_operand(op, left)?;
                let right = self.boolean_operand(op, right)?;
                let result = if op == Operator::And { left && right } else { left || right };
                Ok(result.into())
            }
            _ if op.is_arithmetic() => {
                let left = self.integer_operand(op, left)?;
                let right = self.integer_operand(op, right)?;
                arithmetic(op, left, right).map(Value::from)
            }
            _ => Err(EvalError::UnsupportedOperation(op.to_string())),
        }
    }

    fn integer_operand(&self, op: Operator, expr: &Expr) -> Result<i64> {
        match self.evaluate(expr)? {
            Value::Integer(n) => Ok(n),
            value => Err(EvalError::TypeError { op, expected: "integer", value }),
        }
    }

    fn boolean_operand(&self, op: Operator, expr: &Expr) -> Result<bool> {
        match self.evaluate(expr)? {
            Value::Boolean(b) => Ok(b),
            value => Err(EvalError::TypeError { op, expected: "boolean", value }),
        }
    }
}

fn arithmetic(op: Operator, left: i64, right: i64) -> Result<i64> {
    let overflow = EvalError::Overflow { op };
    match op {
        Operator::Add => left.checked_add(right).ok_or(overflow),
        Operator::Subtract => left.checked_sub(right).ok_or(overflow),
        Operator::Multiply => left.checked_mul(right).ok_or(overflow),
        Operator::Divide if right == 0 => Err(EvalError::DivisionByZero),
        // Truncates towards zero
        Operator::Divide => left.checked_div(right).ok_or(overflow),
        Operator::Exponent => power(left, right),
        _ => Err(EvalError::UnsupportedOperation(op.to_string())),
    }
}

/// Integer power. Negative exponents give the truncated real result.
fn power(base: i64, exponent: i64) -> Result<i64> {
    match (base, exponent) {
        (0, e) if e < 0 => Err(EvalError::DivisionByZero),
        (0, 0) => Ok(1),
        (0, _) => Ok(0),
        (1, _) => Ok(1),
        (-1, e) => Ok(if e % 2 == 0 { 1 } else { -1 }),
        (_, e) if e < 0 => Ok(0),
        (b, e) => u32::try_from(e)
            .ok()
            .and_then(|e| b.checked_pow(e))
            .ok_or(EvalError::Overflow { op: Operator::Exponent }),
    }
}

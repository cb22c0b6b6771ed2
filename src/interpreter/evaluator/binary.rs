use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::strict_eq,
        },
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// - `+` adds two numbers; any other pairing concatenates the display
    ///   forms of both operands, so `1 + "x"` is `"1x"`.
    /// - `-`, `*` and `/` require two numbers. Division checks for a zero
    ///   divisor before dividing.
    /// - `==` and `!=` use strict equality; mixed kinds are unequal.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use vilang::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let position = Position::new(1, 3);
    ///
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                    &Value::Number(3.0),
    ///                                    &Value::Number(4.0),
    ///                                    position);
    /// assert_eq!(sum.unwrap(), Value::Number(7.0));
    ///
    /// let text = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                     &Value::Number(1.0),
    ///                                     &Value::from("x"),
    ///                                     position);
    /// assert_eq!(text.unwrap(), Value::from("1x"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Equal, Mul, NotEqual, Sub};

        match op {
            Add => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                _ => Ok(Value::Text(format!("{left}{right}"))),
            },
            Sub => {
                let (a, b) = Self::numeric_operands(op, left, right, position)?;
                Ok(Value::Number(a - b))
            },
            Mul => {
                let (a, b) = Self::numeric_operands(op, left, right, position)?;
                Ok(Value::Number(a * b))
            },
            Div => {
                let (a, b) = Self::numeric_operands(op, left, right, position)?;
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line:   position.line,
                                                              column: position.column, });
                }
                Ok(Value::Number(a / b))
            },
            Equal => Ok(Value::Bool(strict_eq(left, right))),
            NotEqual => Ok(Value::Bool(!strict_eq(left, right))),
        }
    }

    /// Unwraps both operands of an arithmetic operator as numbers.
    fn numeric_operands(op: BinaryOperator,
                        left: &Value,
                        right: &Value,
                        position: Position)
                        -> EvalResult<(f64, f64)> {
        match (left.as_number(), right.as_number()) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(RuntimeError::OperandsMustBeNumbers { operator: op,
                                                           line:     position.line,
                                                           column:   position.column, }),
        }
    }
}

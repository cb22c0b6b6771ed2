use crate::interpreter::value::Value;

/// Decides whether a value counts as true in a condition.
///
/// A boolean is itself. Every other value is true, including `0` and the
/// empty text.
///
/// # Example
/// ```
/// use vilang::interpreter::{evaluator::utils::is_truthy, value::Value};
///
/// assert!(is_truthy(&Value::Number(0.0)));
/// assert!(is_truthy(&Value::from("")));
/// assert!(!is_truthy(&Value::Bool(false)));
/// ```
#[must_use]
pub const fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(_) | Value::Text(_) => true,
    }
}

/// Compares two values without any implicit conversion.
///
/// Values of different kinds are never equal, so `1 == "1"` is false rather
/// than an error. Numbers follow IEEE 754 equality.
///
/// # Example
/// ```
/// use vilang::interpreter::{evaluator::utils::strict_eq, value::Value};
///
/// assert!(strict_eq(&Value::Number(1.0), &Value::Number(1.0)));
/// assert!(!strict_eq(&Value::Number(1.0), &Value::from("1")));
/// ```
#[must_use]
pub fn strict_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        _ => false,
    }
}

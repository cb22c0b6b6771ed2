/// Represents a runtime value in the interpreter.
///
/// Values carry no memory of the AST node that produced them; they are plain
/// tagged data that the environment stores and the evaluator combines.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A text value.
    Text(String),
    /// A boolean value, written `đúng` or `sai`.
    /// Produced by `==` and `!=`, or by a boolean literal.
    Bool(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Returns the number inside `self`, if it is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Formats values the way `in (...)` prints them.
///
/// Numbers use the shortest decimal form that round-trips, without a trailing
/// `.0`; booleans use the language keywords.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Negative zero prints as `0`.
            Self::Number(n) if *n == 0.0 => write!(f, "0"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "đúng"),
            Self::Bool(false) => write!(f, "sai"),
        }
    }
}

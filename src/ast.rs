/// A 1-based source location.
///
/// Every AST node records the position of the token that introduced it, so
/// runtime errors can point back into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Position {
    /// Line number in the source code.
    pub line:   usize,
    /// Column number in the source code, counted in characters.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and column pair.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Binary operators supported by the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`, numeric addition or text concatenation.
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{symbol}")
    }
}

/// A variable name as it appears in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// Name of the variable.
    pub name:     String,
    /// Where the name was written.
    pub position: Position,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The variant set is closed; the evaluator matches on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.5`.
    NumberLiteral {
        /// The constant value.
        value:    f64,
        /// Where the literal was written.
        position: Position,
    },
    /// A string literal with escapes already resolved.
    StringLiteral {
        /// The constant value.
        value:    String,
        /// Where the literal was written.
        position: Position,
    },
    /// `đúng` or `sai`.
    BooleanLiteral {
        /// The constant value.
        value:    bool,
        /// Where the literal was written.
        position: Position,
    },
    /// Reference to a variable by name.
    Identifier(Identifier),
    /// A binary operation. Unary minus is also represented here, as `0 - x`.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator token.
        position: Position,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use vilang::ast::{Expr, Position};
    ///
    /// let expr = Expr::NumberLiteral { value:    1.0,
    ///                                  position: Position::new(5, 3), };
    ///
    /// assert_eq!(expr.position().line, 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::NumberLiteral { position, .. }
            | Self::StringLiteral { position, .. }
            | Self::BooleanLiteral { position, .. }
            | Self::Binary { position, .. } => *position,
            Self::Identifier(identifier) => identifier.position,
        }
    }
}

/// Tears binary trees down with a heap stack, so dropping a long operator
/// chain does not recurse once per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let Self::Binary { left, right, .. } = self else {
            return;
        };
        let mut pending = vec![take_operand(left), take_operand(right)];

        while let Some(mut expr) = pending.pop() {
            if let Self::Binary { left, right, .. } = &mut expr {
                pending.push(take_operand(left));
                pending.push(take_operand(right));
            }
        }
    }
}

/// Moves an operand out of its box, leaving a leaf behind.
fn take_operand(slot: &mut Expr) -> Expr {
    std::mem::replace(slot,
                      Expr::BooleanLiteral { value:    false,
                                             position: Position::default(), })
}

/// A statement in a program or block.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `gán name = expression`
    Assignment {
        /// The variable being bound.
        target:   Identifier,
        /// The value expression.
        value:    Expr,
        /// Position of the `gán` keyword.
        position: Position,
    },
    /// `in (expression)`
    Print {
        /// The expression to print.
        value:    Expr,
        /// Position of the `in` keyword.
        position: Position,
    },
    /// `nếu (condition) { ... } khác { ... }`
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statements run when the condition is truthy.
        then_branch: Vec<Self>,
        /// Statements run otherwise, if an `khác` branch was written.
        else_branch: Option<Vec<Self>>,
        /// Position of the `nếu` keyword.
        position:    Position,
    },
}

impl Statement {
    /// Gets the source position from `self`.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Assignment { position, .. }
            | Self::Print { position, .. }
            | Self::If { position, .. } => *position,
        }
    }
}

/// Flattens nested branches onto a heap stack before dropping them.
impl Drop for Statement {
    fn drop(&mut self) {
        let Self::If { then_branch,
                       else_branch,
                       .. } = self
        else {
            return;
        };
        let mut pending = std::mem::take(then_branch);
        if let Some(branch) = else_branch {
            pending.append(branch);
        }

        while let Some(mut statement) = pending.pop() {
            if let Self::If { then_branch,
                              else_branch,
                              .. } = &mut statement
            {
                pending.append(then_branch);
                if let Some(branch) = else_branch {
                    pending.append(branch);
                }
            }
        }
    }
}

/// The root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

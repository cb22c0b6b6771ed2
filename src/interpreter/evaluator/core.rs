use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::{
    ast::{BinaryOperator, Expr, Identifier, Position, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, ScopeId},
        evaluator::utils::is_truthy,
        value::Value,
    },
    stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The observable result of running a program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunOutput {
    /// Lines printed by `in (...)`, in execution order.
    pub output:   Vec<String>,
    /// Every variable bound when the program finished, ordered by name.
    pub bindings: BTreeMap<String, Value>,
}

/// Stores the runtime evaluation state.
///
/// An `Interpreter` owns one [`Environment`] with a root scope and the output
/// lines printed so far. It is meant to be created for a single run and then
/// discarded.
///
/// ## Usage
///
/// ```
/// use vilang::interpreter::{
///     evaluator::core::Interpreter, lexer::tokenize, parser::parse, value::Value,
/// };
///
/// let program = parse(&tokenize("gán a = 2\nin (a * 3)").unwrap()).unwrap();
/// let mut interpreter = Interpreter::new();
/// let result = interpreter.interpret(&program).unwrap();
///
/// assert_eq!(result.output, vec!["6".to_string()]);
/// assert_eq!(result.bindings.get("a"), Some(&Value::Number(2.0)));
/// ```
#[derive(Debug)]
pub struct Interpreter {
    environment: Environment,
    /// The scope statements currently execute in.
    scope:       ScopeId,
    output:      Vec<String>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter with an empty root scope and no output.
    #[must_use]
    pub fn new() -> Self {
        Self { environment: Environment::new(),
               scope:       ScopeId::ROOT,
               output:      Vec::new(), }
    }

    /// Executes every top-level statement of `program` in order.
    ///
    /// The first runtime error stops execution. Output and bindings gathered
    /// before the failure stay readable through [`Self::output`] and
    /// [`Self::bindings`].
    ///
    /// # Returns
    /// A snapshot of the printed lines and final bindings.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised by any statement.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn interpret(&mut self, program: &Program) -> EvalResult<RunOutput> {
        for statement in &program.statements {
            self.execute(statement)?;
        }

        debug!(lines = self.output.len(), "program finished");
        Ok(RunOutput { output:   self.output.clone(),
                       bindings: self.bindings(), })
    }

    /// Executes a single statement.
    ///
    /// Assignments define the name in the current scope, prints append one
    /// line of output, and conditionals run exactly one branch (or none).
    /// Branches run in the current scope.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        trace!(position = %statement.position(), "executing statement");

        match statement {
            Statement::Assignment { target, value, .. } => {
                let value = self.evaluate(value)?;
                self.environment
                    .define(self.scope, target.name.clone(), value);
                Ok(())
            },
            Statement::Print { value, .. } => {
                let value = self.evaluate(value)?;
                self.output.push(value.to_string());
                Ok(())
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                let condition = self.evaluate(condition)?;
                let branch = if is_truthy(&condition) {
                    Some(then_branch.as_slice())
                } else {
                    else_branch.as_deref()
                };

                ensure_sufficient_stack(|| -> EvalResult<()> {
                    for statement in branch.unwrap_or_default() {
                        self.execute(statement)?;
                    }
                    Ok(())
                })
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands of a binary expression are evaluated left to right, both
    /// always, before the operator is applied.
    ///
    /// Binary trees are walked with an explicit stack of pending operators
    /// instead of recursion, so an operator chain of any length evaluates in
    /// constant native stack.
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Value> {
        let mut frames = Vec::new();
        let mut current = expr;

        'descend: loop {
            let mut value = match current {
                Expr::NumberLiteral { value, .. } => Value::Number(*value),
                Expr::StringLiteral { value, .. } => Value::Text(value.clone()),
                Expr::BooleanLiteral { value, .. } => Value::Bool(*value),
                Expr::Identifier(identifier) => self.lookup(identifier)?,
                Expr::Binary { left,
                               op,
                               right,
                               position, } => {
                    frames.push(Frame::Left { op:       *op,
                                              right:    &**right,
                                              position: *position, });
                    current = &**left;
                    continue;
                },
            };

            loop {
                match frames.pop() {
                    None => return Ok(value),
                    Some(Frame::Left { op, right, position }) => {
                        frames.push(Frame::Right { op,
                                                   left: value,
                                                   position });
                        current = right;
                        continue 'descend;
                    },
                    Some(Frame::Right { op, left, position }) => {
                        value = Self::eval_binary(op, &left, &value, position)?;
                    },
                }
            }
        }
    }

    /// Reads a variable, failing if no enclosing scope defines it.
    fn lookup(&self, identifier: &Identifier) -> EvalResult<Value> {
        self.environment
            .get(self.scope, &identifier.name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name:   identifier.name.clone(),
                                                             line:   identifier.position.line,
                                                             column: identifier.position.column, })
    }

    /// Lines printed so far.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Every binding visible from the current scope, ordered by name.
    #[must_use]
    pub fn bindings(&self) -> BTreeMap<String, Value> {
        self.environment.snapshot(self.scope)
    }
}

/// A binary operator waiting on one of its operands.
enum Frame<'e> {
    /// The left operand is being evaluated; `right` is still to come.
    Left {
        op:       BinaryOperator,
        right:    &'e Expr,
        position: Position,
    },
    /// The left operand is done; the right one is being evaluated.
    Right {
        op:       BinaryOperator,
        left:     Value,
        position: Position,
    },
}

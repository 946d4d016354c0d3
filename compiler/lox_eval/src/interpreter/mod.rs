//! Tree-walking interpreter.
//!
//! Statements run in order against one [`Environment`]; the first runtime
//! error stops the run and is returned to the caller. The environment
//! outlives a single `interpret` call, so a REPL keeps its globals.

use lox_ir::{Expr, ExprKind, Literal, Stmt, StmtKind, StringInterner, Token};
use lox_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{
    evaluate_binary, evaluate_unary, stdout_handler, Environment, EvalError, EvalErrorKind,
    EvalResult, ScopeError, SharedPrintHandler, Value,
};

/// Executes parsed statements.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    environment: Environment,
    print_handler: SharedPrintHandler,
}

impl<'a> Interpreter<'a> {
    /// An interpreter with empty globals that prints to stdout.
    ///
    /// `interner` must be the one the statements were scanned with.
    pub fn new(interner: &'a StringInterner) -> Self {
        Interpreter {
            interner,
            environment: Environment::new(),
            print_handler: stdout_handler(),
        }
    }

    /// Send `print` output to `handler` instead of stdout.
    #[must_use]
    pub fn with_print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = handler;
        self
    }

    /// Run `statements` in order, stopping at the first runtime error.
    ///
    /// Effects of statements before the failing one (output, bindings)
    /// are kept.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        for stmt in statements {
            if let Err(error) = self.execute(stmt) {
                debug!(line = error.line, code = %error.code(), "runtime error");
                return Err(error);
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        match &stmt.kind {
            StmtKind::Expression(expr) => {
                debug!(kind = "expression", "execute");
                self.evaluate(expr)?;
            }
            StmtKind::Print(expr) => {
                debug!(kind = "print", "execute");
                let value = self.evaluate(expr)?;
                self.print_handler.println(&value.to_string());
            }
            StmtKind::Var { name, initializer } => {
                debug!(kind = "var", "execute");
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                trace!(name = self.interner.lookup(name.lexeme), %value, "define");
                self.environment.define(name.lexeme, value);
            }
        }
        Ok(())
    }

    /// Evaluate an expression to a value.
    ///
    /// Operands are evaluated left to right, each fully before the next.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(expr))
    }

    fn evaluate_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(self.literal(*literal)),
            ExprKind::Grouping(inner) => self.evaluate(inner),
            ExprKind::Unary {
                op,
                operator,
                operand,
            } => {
                let value = self.evaluate(operand)?;
                evaluate_unary(&value, *op).map_err(|kind| kind.at(operator))
            }
            ExprKind::Binary {
                left,
                op,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(left, right, *op).map_err(|kind| kind.at(operator))
            }
            ExprKind::Variable { name } => self
                .environment
                .get(name.lexeme)
                .cloned()
                .map_err(|error| self.scope_error(error, name)),
            ExprKind::Assign { name, value } => {
                let value = self.evaluate(value)?;
                trace!(name = self.interner.lookup(name.lexeme), %value, "assign");
                self.environment
                    .assign(name.lexeme, value.clone())
                    .map_err(|error| self.scope_error(error, name))?;
                Ok(value)
            }
        }
    }

    fn literal(&self, literal: Literal) -> Value {
        match literal {
            Literal::Number(n) => Value::Number(n),
            Literal::Str(name) => Value::string(self.interner.lookup(name)),
            Literal::Bool(b) => Value::Bool(b),
            Literal::Nil => Value::Nil,
        }
    }

    fn scope_error(&self, error: ScopeError, token: &Token) -> EvalError {
        let ScopeError::Undefined(name) = error;
        EvalErrorKind::UndefinedVariable {
            name: self.interner.lookup(name).to_string(),
        }
        .at(token)
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Current value of the variable spelled `name`, if it is bound.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.environment.get(self.interner.intern(name)).ok().cloned()
    }
}

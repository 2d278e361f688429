//! Tree-walking interpreter.
//!
//! # Environment Threading
//!
//! Every step consumes one `Environment` and returns its successor inside
//! `Evaluated`. Subexpressions run left to right, and each one receives the
//! environment returned by the one before it, so an assignment is visible to
//! everything evaluated after it in the same tree. The returned environment
//! is the only valid one to continue with.
//!
//! # Recursion
//!
//! Nested expressions recurse through `evaluate`, which grows the stack on
//! demand. `while` iterates in place; its body does not add a stack frame per
//! iteration.

mod builder;

pub use builder::InterpreterBuilder;

use stimpl_ir::{Expr, Name};

use crate::errors::{
    assignment_type_mismatch, binding_type_mismatch, unbound_variable, unsupported_operation,
    EvalResult, Operation,
};
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::stack::ensure_sufficient_stack;
use crate::unary_operators::evaluate_not;
use crate::value::printable;
use crate::{Environment, RuntimeType, Value};

/// The `(value, type, environment)` produced by every evaluation step.
#[derive(Clone, Debug)]
pub struct Evaluated {
    /// The computed value; `None` when the type is Unit.
    pub value: Option<Value>,
    pub ty: RuntimeType,
    /// The environment to use for whatever is evaluated next.
    pub env: Environment,
}

impl Evaluated {
    fn new(value: Option<Value>, env: Environment) -> Self {
        let ty = RuntimeType::of(value.as_ref());
        Evaluated { value, ty, env }
    }

    fn unit(env: Environment) -> Self {
        Evaluated {
            value: None,
            ty: RuntimeType::Unit,
            env,
        }
    }

    pub fn into_parts(self) -> (Option<Value>, RuntimeType, Environment) {
        (self.value, self.ty, self.env)
    }
}

/// Evaluates expression trees.
///
/// Holds only configuration; all program state lives in the `Environment`
/// threaded through each call.
pub struct Interpreter {
    print_handler: SharedPrintHandler,
    debug: bool,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// An interpreter printing to stdout, without debug output.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Evaluate a whole program from the empty environment.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&self, program: &Expr) -> EvalResult<Evaluated> {
        let result = self.evaluate(program, Environment::empty());
        match &result {
            Ok(done) => {
                tracing::debug!(ty = %done.ty, bindings = done.env.len(), "program finished");
                if self.debug {
                    self.report(program, done);
                }
            }
            Err(e) => tracing::debug!(error = %e, "evaluation failed"),
        }
        result
    }

    /// Evaluate `expr` against `env`.
    pub fn evaluate(&self, expr: &Expr, env: Environment) -> EvalResult<Evaluated> {
        ensure_sufficient_stack(|| self.eval_inner(expr, env))
    }

    fn eval_inner(&self, expr: &Expr, env: Environment) -> EvalResult<Evaluated> {
        tracing::trace!(kind = expr.kind_name(), "evaluate");
        match expr {
            Expr::Unit => Ok(Evaluated::unit(env)),
            Expr::Int(n) => Ok(Evaluated::new(Some(Value::Int(*n)), env)),
            Expr::Float(n) => Ok(Evaluated::new(Some(Value::Float(*n)), env)),
            Expr::Str(s) => Ok(Evaluated::new(Some(Value::Str(s.clone())), env)),
            Expr::Bool(b) => Ok(Evaluated::new(Some(Value::Bool(*b)), env)),
            Expr::Variable(name) => Self::eval_variable(name, env),
            Expr::Print(inner) => {
                let result = self.evaluate(inner, env)?;
                let text = match result.ty {
                    RuntimeType::Unit => printable(None),
                    _ => printable(result.value.as_ref()),
                };
                self.print_handler.println(&text);
                Ok(result)
            }
            Expr::Sequence(exprs) => exprs
                .iter()
                .try_fold(Evaluated::unit(env), |last, expr| self.evaluate(expr, last.env)),
            Expr::Assign { name, value } => self.eval_assign(name, value, env),
            Expr::Binary { op, left, right } => {
                let left = self.evaluate(left, env)?;
                let right = self.evaluate(right, left.env)?;
                let value = evaluate_binary(*op, left.value, left.ty, right.value, right.ty)?;
                Ok(Evaluated::new(Some(value), right.env))
            }
            Expr::Not(inner) => {
                let operand = self.evaluate(inner, env)?;
                let value = evaluate_not(operand.value, operand.ty)?;
                Ok(Evaluated::new(Some(value), operand.env))
            }
            Expr::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let cond = self.evaluate(condition, env)?;
                match condition_value(&cond) {
                    Some(true) => self.evaluate(then_branch, cond.env),
                    Some(false) => self.evaluate(else_branch, cond.env),
                    None => Err(unsupported_operation(Operation::If, cond.ty)),
                }
            }
            Expr::While { condition, body } => self.eval_while(condition, body, env),
        }
    }

    /// Read a binding, rejecting one whose value does not have its recorded
    /// type.
    fn eval_variable(name: &Name, env: Environment) -> EvalResult<Evaluated> {
        let Some(binding) = env.lookup(name) else {
            return Err(unbound_variable(name));
        };
        let (value, ty) = (binding.value().cloned(), binding.ty());
        let held = RuntimeType::of(value.as_ref());
        if held != ty {
            return Err(binding_type_mismatch(name, ty, held));
        }
        Ok(Evaluated { value, ty, env })
    }

    /// Bind `name` to the value of `value_expr`.
    ///
    /// The existing binding is looked up in the environment returned by
    /// `value_expr`, so an assignment inside the value expression counts.
    fn eval_assign(&self, name: &Name, value_expr: &Expr, env: Environment) -> EvalResult<Evaluated> {
        let Evaluated { value, ty, env } = self.evaluate(value_expr, env)?;
        if let Some(existing) = env.lookup(name) {
            if existing.ty() != ty {
                return Err(assignment_type_mismatch(name, existing.ty(), ty));
            }
        }
        tracing::trace!(name = %name, ty = %ty, "bind");
        let env = env.extend(name.clone(), value.clone(), ty);
        Ok(Evaluated { value, ty, env })
    }

    /// Loop until the condition is false; the result is the final condition's.
    ///
    /// Body results are discarded except for their environment.
    fn eval_while(&self, condition: &Expr, body: &Expr, env: Environment) -> EvalResult<Evaluated> {
        let mut env = env;
        loop {
            let cond = self.evaluate(condition, env)?;
            match condition_value(&cond) {
                Some(true) => env = self.evaluate(body, cond.env)?.env,
                Some(false) => return Ok(cond),
                None => return Err(unsupported_operation(Operation::While, cond.ty)),
            }
        }
    }

    /// Write the program, its final value and the final environment.
    fn report(&self, program: &Expr, done: &Evaluated) {
        let handler = &self.print_handler;
        handler.println(&format!("program: {program}"));
        handler.println(&format!(
            "final_value: ({}, {})",
            printable(done.value.as_ref()),
            done.ty
        ));
        handler.println(&format!("final_state: {}", done.env));
    }
}

/// The truth value of a condition, or `None` when it is not a Boolean.
fn condition_value(cond: &Evaluated) -> Option<bool> {
    match cond.ty {
        RuntimeType::Boolean => cond.value.as_ref().and_then(Value::as_bool),
        _ => None,
    }
}

/// Evaluate `expr` against `env`, printing to stdout.
pub fn evaluate(expr: &Expr, env: Environment) -> EvalResult<Evaluated> {
    Interpreter::new().evaluate(expr, env)
}

/// Evaluate a whole program from the empty environment, printing to stdout.
pub fn run(program: &Expr) -> EvalResult<Evaluated> {
    Interpreter::new().run(program)
}

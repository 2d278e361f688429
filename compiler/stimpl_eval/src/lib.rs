//! Stimpl Eval - tree-walking evaluator for the stimpl expression language.
//!
//! Evaluation computes a value, checks its runtime type, and threads a
//! persistent environment through every subexpression in one recursive pass.
//!
//! # Architecture
//!
//! - `Environment`: persistent chain of `(name, value, type)` bindings
//! - `Interpreter`: the recursive dispatcher over `stimpl_ir::Expr`
//! - `evaluate_binary` / `evaluate_not`: operator rules per runtime type
//! - `PrintHandlerImpl`: where the `print` construct writes
//!
//! # Entry Points
//!
//! - `run(program)`: evaluate from the empty environment
//! - `evaluate(expr, env)`: evaluate against a given environment
//!
//! Both print to stdout; build an `Interpreter` to redirect output.

mod environment;
pub mod errors;
mod interpreter;
mod logging;
mod operators;
mod print_handler;
mod stack;
mod unary_operators;
mod value;

#[cfg(test)]
mod tests;

pub use environment::{Binding, Environment, Iter};
pub use errors::{ErrorCategory, EvalError, EvalErrorKind, EvalResult, Operation};
pub use interpreter::{evaluate, run, Evaluated, Interpreter, InterpreterBuilder};
pub use logging::init_tracing;
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_not;
pub use value::{printable, RuntimeType, Value};

// Re-export the tree types so callers need only one crate.
pub use stimpl_ir::{BinaryOp, Expr, Name};

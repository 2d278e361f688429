//! Stimpl IR - expression tree types for the stimpl evaluator.
//!
//! This crate holds the data handed to the evaluator:
//! - `Name` for variable identifiers
//! - `Expr`, the closed set of expression nodes
//! - `BinaryOp` and its operator families
//!
//! Trees are immutable once built. The evaluator only ever borrows them.

mod ast;
mod display;
mod name;
mod operators;

pub use ast::Expr;
pub use name::Name;
pub use operators::{BinaryOp, OpFamily};

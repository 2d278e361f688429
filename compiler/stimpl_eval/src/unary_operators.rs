//! Unary operator implementations for the evaluator.
//!
//! `not` is the only unary operator. Its operand must be Boolean; there is
//! no type-mismatch case because there is only one operand.

use crate::errors::{unsupported_operation, EvalResult, Operation};
use crate::{RuntimeType, Value};

/// Logical negation of an evaluated operand of type `ty`.
pub fn evaluate_not(value: Option<Value>, ty: RuntimeType) -> EvalResult {
    match (value, ty) {
        (Some(Value::Bool(b)), RuntimeType::Boolean) => Ok(Value::Bool(!b)),
        _ => Err(unsupported_operation(Operation::Not, ty)),
    }
}

//! Binary operator implementations for the evaluator.
//!
//! Operands arrive as optional values (absence is Unit) together with the
//! runtime type carried alongside each one. Type checks use those carried
//! types and run in a fixed order: operand types must be identical, then the
//! shared type must be in the operator's allowed set.
//!
//! | Operator | Allowed types |
//! |---|---|
//! | `Add` | Integer, FloatingPoint, String |
//! | `Subtract`, `Multiply`, `Divide` | Integer, FloatingPoint |
//! | `And`, `Or` | Boolean |
//! | comparisons | Integer, FloatingPoint, String, Boolean, Unit |
//!
//! Integer arithmetic is checked: overflow and division by zero surface as
//! arithmetic faults. Float division by zero is also a fault rather than an
//! infinity.

use std::cmp::Ordering;

use stimpl_ir::{BinaryOp, OpFamily};

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, unsupported_operation, EvalResult,
    Operation,
};
use crate::{RuntimeType, Value};

/// Evaluate a binary operation over two already evaluated operands.
///
/// Binary results are never Unit: arithmetic on Unit is unsupported and
/// comparisons yield a Boolean.
pub fn evaluate_binary(
    op: BinaryOp,
    left: Option<Value>,
    left_ty: RuntimeType,
    right: Option<Value>,
    right_ty: RuntimeType,
) -> EvalResult {
    if left_ty != right_ty {
        return Err(binary_type_mismatch(op, left_ty, right_ty));
    }
    let held = (RuntimeType::of(left.as_ref()), RuntimeType::of(right.as_ref()));
    if held != (left_ty, right_ty) {
        return Err(binary_type_mismatch(op, held.0, held.1));
    }

    match (left, right) {
        (None, None) => eval_unit_binary(op),
        (Some(Value::Int(a)), Some(Value::Int(b))) => eval_int_binary(a, b, op),
        (Some(Value::Float(a)), Some(Value::Float(b))) => eval_float_binary(a, b, op),
        (Some(Value::Str(a)), Some(Value::Str(b))) => eval_string_binary(a, &b, op),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => eval_bool_binary(a, b, op),
        // Equal tags always pair up the same variants.
        _ => Err(binary_type_mismatch(op, left_ty, right_ty)),
    }
}

/// Map an ordering onto a comparison operator's result.
#[inline]
fn compare(ordering: Option<Ordering>, op: BinaryOp) -> bool {
    match op {
        BinaryOp::Lt => ordering == Some(Ordering::Less),
        BinaryOp::Lte => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        BinaryOp::Gt => ordering == Some(Ordering::Greater),
        BinaryOp::Gte => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        BinaryOp::Eq => ordering == Some(Ordering::Equal),
        BinaryOp::Ne => ordering != Some(Ordering::Equal),
        _ => false,
    }
}

#[cold]
fn unsupported(op: BinaryOp, ty: RuntimeType) -> crate::EvalError {
    unsupported_operation(Operation::Binary(op), ty)
}

// Type-Specific Evaluation Functions

/// Unit has a single value: it equals itself and is never strictly ordered.
fn eval_unit_binary(op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Lte | BinaryOp::Gte | BinaryOp::Eq => Ok(Value::Bool(true)),
        BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Ne => Ok(Value::Bool(false)),
        _ => Err(unsupported(op, RuntimeType::Unit)),
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => a.checked_add(b).map(Value::Int).ok_or_else(|| integer_overflow("addition")),
        BinaryOp::Subtract => a
            .checked_sub(b)
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("subtraction")),
        BinaryOp::Multiply => a
            .checked_mul(b)
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("multiplication")),
        BinaryOp::Divide => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_floor_div(a, b)
                    .map(Value::Int)
                    .ok_or_else(|| integer_overflow("division"))
            }
        }
        _ if op.family() == OpFamily::Comparison => Ok(Value::Bool(compare(Some(a.cmp(&b)), op))),
        _ => Err(unsupported(op, RuntimeType::Integer)),
    }
}

/// Integer division rounding toward negative infinity.
///
/// `7 / 2 = 3`, `-7 / 2 = -4`, `7 / -2 = -4`. Returns `None` on a zero divisor
/// or when the quotient overflows (`i64::MIN / -1`).
fn checked_floor_div(a: i64, b: i64) -> Option<i64> {
    let div = a.checked_div(b)?;
    let rem = a.checked_rem(b)?;
    if rem != 0 && (a < 0) != (b < 0) {
        div.checked_sub(1)
    } else {
        Some(div)
    }
}

fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Float(a + b)),
        BinaryOp::Subtract => Ok(Value::Float(a - b)),
        BinaryOp::Multiply => Ok(Value::Float(a * b)),
        BinaryOp::Divide => {
            if b == 0.0 {
                Err(division_by_zero())
            } else {
                Ok(Value::Float(a / b))
            }
        }
        // partial_cmp keeps IEEE 754 semantics (NaN is unordered and unequal).
        _ if op.family() == OpFamily::Comparison => {
            Ok(Value::Bool(compare(a.partial_cmp(&b), op)))
        }
        _ => Err(unsupported(op, RuntimeType::FloatingPoint)),
    }
}

fn eval_string_binary(mut a: String, b: &str, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => {
            a.push_str(b);
            Ok(Value::Str(a))
        }
        // Lexicographic comparison
        _ if op.family() == OpFamily::Comparison => {
            Ok(Value::Bool(compare(Some(a.as_str().cmp(b)), op)))
        }
        _ => Err(unsupported(op, RuntimeType::String)),
    }
}

/// Booleans order `false < true`.
fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => Ok(Value::Bool(a && b)),
        BinaryOp::Or => Ok(Value::Bool(a || b)),
        _ if op.family() == OpFamily::Comparison => Ok(Value::Bool(compare(Some(a.cmp(&b)), op))),
        _ => Err(unsupported(op, RuntimeType::Boolean)),
    }
}

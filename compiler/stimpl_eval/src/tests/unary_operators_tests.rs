//! Tests for `not`.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use crate::errors::{EvalErrorKind, Operation};
use crate::unary_operators::evaluate_not;
use crate::{RuntimeType, Value};
use pretty_assertions::assert_eq;

#[test]
fn negates_booleans() {
    assert_eq!(evaluate_not(Some(Value::Bool(true)), RuntimeType::Boolean).unwrap(), Value::Bool(false));
    assert_eq!(evaluate_not(Some(Value::Bool(false)), RuntimeType::Boolean).unwrap(), Value::Bool(true));
}

#[test]
fn rejects_every_other_type() {
    let cases = [
        (Some(Value::int(0)), RuntimeType::Integer),
        (Some(Value::float(0.0)), RuntimeType::FloatingPoint),
        (Some(Value::string("")), RuntimeType::String),
        (None, RuntimeType::Unit),
    ];
    for (value, ty) in cases {
        let err = evaluate_not(value, ty).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::UnsupportedOperation {
                operation: Operation::Not,
                ty,
            }
        );
        assert!(err.is_type_fault());
    }
}

#[test]
fn boolean_value_under_another_type_is_rejected() {
    let err = evaluate_not(Some(Value::Bool(true)), RuntimeType::Integer).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnsupportedOperation {
            operation: Operation::Not,
            ty: RuntimeType::Integer,
        }
    );
}

//! Error types for evaluation.
//!
//! Every failure aborts the evaluation in progress and is returned to the
//! caller of `evaluate`/`run`; nothing is recovered inside the evaluator.
//!
//! # Categories
//!
//! `EvalErrorKind::category` groups kinds the way callers report them:
//! - `SyntaxFault`: the program reads a variable no assignment has reached
//! - `TypeFault`: operand types disagree, fall outside an operator's allowed
//!   set, or a reassignment changes a variable's type. Reading a binding
//!   whose value does not have its recorded type is a `TypeFault` too.
//! - `ArithmeticFault`: host arithmetic failed (division by zero, integer
//!   overflow). These are not language-level errors.
//!
//! Factory functions (e.g., `unbound_variable()`) are the public way to build
//! errors; they fill in both `kind` and `message`.

use std::fmt;

use stimpl_ir::{BinaryOp, Name};

use crate::{RuntimeType, Value};

/// Result of an evaluation step.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Broad classification of an evaluation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    SyntaxFault,
    TypeFault,
    ArithmeticFault,
}

/// The operation an `UnsupportedOperation` error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Binary(BinaryOp),
    Not,
    /// The condition of an `if`.
    If,
    /// The condition of a `while`.
    While,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Binary(op) => f.write_str(op.name()),
            Operation::Not => f.write_str("Not"),
            Operation::If => f.write_str("If"),
            Operation::While => f.write_str("While"),
        }
    }
}

/// Typed error category for structured reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Syntax
    UnboundVariable {
        name: Name,
    },

    // Type
    BinaryTypeMismatch {
        op: BinaryOp,
        left: RuntimeType,
        right: RuntimeType,
    },
    UnsupportedOperation {
        operation: Operation,
        ty: RuntimeType,
    },
    AssignmentTypeMismatch {
        name: Name,
        existing: RuntimeType,
        assigned: RuntimeType,
    },
    BindingTypeMismatch {
        name: Name,
        declared: RuntimeType,
        held: RuntimeType,
    },

    // Arithmetic
    DivisionByZero,
    IntegerOverflow {
        operation: &'static str,
    },
}

impl EvalErrorKind {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::UnboundVariable { .. } => ErrorCategory::SyntaxFault,
            Self::BinaryTypeMismatch { .. }
            | Self::UnsupportedOperation { .. }
            | Self::AssignmentTypeMismatch { .. }
            | Self::BindingTypeMismatch { .. } => ErrorCategory::TypeFault,
            Self::DivisionByZero | Self::IntegerOverflow { .. } => ErrorCategory::ArithmeticFault,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Syntax
            Self::UnboundVariable { name } => {
                write!(f, "cannot read from {name} before assignment")
            }

            // Type
            Self::BinaryTypeMismatch { op, left, right } => {
                write!(f, "mismatched types for {}: {left} and {right}", op.name())
            }
            Self::UnsupportedOperation { operation, ty } => {
                write!(f, "cannot apply {operation} to {ty}")
            }
            Self::AssignmentTypeMismatch {
                name,
                existing,
                assigned,
            } => write!(
                f,
                "mismatched types for assignment to {name}: cannot assign {assigned} to {existing}"
            ),
            Self::BindingTypeMismatch {
                name,
                declared,
                held,
            } => write!(
                f,
                "binding for {name} is declared {declared} but holds a {held} value"
            ),

            // Arithmetic
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    #[inline]
    pub fn is_syntax_fault(&self) -> bool {
        self.category() == ErrorCategory::SyntaxFault
    }

    #[inline]
    pub fn is_type_fault(&self) -> bool {
        self.category() == ErrorCategory::TypeFault
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Syntax Errors

/// Variable read before any assignment reached it.
#[cold]
pub fn unbound_variable(name: &Name) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundVariable { name: name.clone() })
}

// Type Errors

/// Operands of a binary operator have different types.
#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: RuntimeType, right: RuntimeType) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch { op, left, right })
}

/// Operand type outside the operation's allowed set.
#[cold]
pub fn unsupported_operation(operation: Operation, ty: RuntimeType) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperation { operation, ty })
}

/// Reassignment would change a variable's established type.
#[cold]
pub fn assignment_type_mismatch(
    name: &Name,
    existing: RuntimeType,
    assigned: RuntimeType,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AssignmentTypeMismatch {
        name: name.clone(),
        existing,
        assigned,
    })
}

/// A binding read from the environment carries a value of another type.
#[cold]
pub fn binding_type_mismatch(name: &Name, declared: RuntimeType, held: RuntimeType) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BindingTypeMismatch {
        name: name.clone(),
        declared,
        held,
    })
}

// Arithmetic Errors

/// Division by the zero value.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Integer result does not fit in 64 bits.
#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

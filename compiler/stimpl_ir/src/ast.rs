//! Expression nodes.
//!
//! Every construct of the language is one `Expr` variant. Adding a construct
//! means adding a variant here and an arm to the evaluator's match; there is
//! no fallback arm.

use crate::{BinaryOp, Name};

/// An expression node.
///
/// Trees own their children through `Box`/`Vec`. A whole program is a
/// `Sequence`.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// The unit literal. Evaluates to no value of type Unit.
    Unit,
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    /// Read a variable.
    Variable(Name),
    /// Print the operand's value, then yield it unchanged.
    Print(Box<Expr>),
    /// Evaluate in order; yields the last result, or unit when empty.
    Sequence(Vec<Expr>),
    /// Bind `name` to the value of `value`.
    Assign { name: Name, value: Box<Expr> },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Logical negation.
    Not(Box<Expr>),
    If {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    While {
        condition: Box<Expr>,
        body: Box<Expr>,
    },
}

// Constructors

impl Expr {
    pub fn unit() -> Self {
        Expr::Unit
    }

    pub fn int(value: i64) -> Self {
        Expr::Int(value)
    }

    pub fn float(value: f64) -> Self {
        Expr::Float(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn boolean(value: bool) -> Self {
        Expr::Bool(value)
    }

    pub fn var(name: impl Into<Name>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn print(expr: Expr) -> Self {
        Expr::Print(Box::new(expr))
    }

    pub fn sequence(exprs: Vec<Expr>) -> Self {
        Expr::Sequence(exprs)
    }

    /// Wrap top-level expressions as a program.
    pub fn program(exprs: Vec<Expr>) -> Self {
        Expr::Sequence(exprs)
    }

    pub fn assign(name: impl Into<Name>, value: Expr) -> Self {
        Expr::Assign {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Add, left, right)
    }

    pub fn subtract(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Subtract, left, right)
    }

    pub fn multiply(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Multiply, left, right)
    }

    pub fn divide(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Divide, left, right)
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::And, left, right)
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Or, left, right)
    }

    pub fn not(expr: Expr) -> Self {
        Expr::Not(Box::new(expr))
    }

    pub fn less_than(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Lt, left, right)
    }

    pub fn less_equal(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Lte, left, right)
    }

    pub fn greater_than(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Gt, left, right)
    }

    pub fn greater_equal(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Gte, left, right)
    }

    pub fn equal(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Eq, left, right)
    }

    pub fn not_equal(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Ne, left, right)
    }

    pub fn if_then_else(condition: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn while_loop(condition: Expr, body: Expr) -> Self {
        Expr::While {
            condition: Box::new(condition),
            body: Box::new(body),
        }
    }
}

// Queries

impl Expr {
    /// Short name of the node kind, for logging.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Expr::Unit => "unit",
            Expr::Int(_) => "int",
            Expr::Float(_) => "float",
            Expr::Str(_) => "string",
            Expr::Bool(_) => "bool",
            Expr::Variable(_) => "variable",
            Expr::Print(_) => "print",
            Expr::Sequence(_) => "sequence",
            Expr::Assign { .. } => "assign",
            Expr::Binary { op, .. } => op.name(),
            Expr::Not(_) => "not",
            Expr::If { .. } => "if",
            Expr::While { .. } => "while",
        }
    }
}

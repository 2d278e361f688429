//! Surface rendering of expression trees.
//!
//! Binary operations are fully parenthesized so the rendering never depends
//! on precedence.

use std::fmt;

use crate::Expr;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Unit => f.write_str("()"),
            Expr::Int(n) => write!(f, "{n}"),
            Expr::Float(n) => write!(f, "{n:?}"),
            Expr::Str(s) => write!(f, "{s:?}"),
            Expr::Bool(b) => write!(f, "{b}"),
            Expr::Variable(name) => write!(f, "{name}"),
            Expr::Print(expr) => write!(f, "print({expr})"),
            Expr::Sequence(exprs) => {
                if exprs.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, expr) in exprs.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{expr}")?;
                }
                f.write_str(" }")
            }
            Expr::Assign { name, value } => write!(f, "{name} = {value}"),
            Expr::Binary { op, left, right } => {
                write!(f, "({left} {} {right})", op.as_symbol())
            }
            Expr::Not(expr) => write!(f, "not {expr}"),
            Expr::If {
                condition,
                then_branch,
                else_branch,
            } => write!(f, "if {condition} then {then_branch} else {else_branch}"),
            Expr::While { condition, body } => write!(f, "while {condition} do {body}"),
        }
    }
}

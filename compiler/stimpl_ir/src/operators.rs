//! Binary operators.
//!
//! `not` is the only unary operator and has its own `Expr` variant.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,

    // Logical
    And,
    Or,

    // Comparison
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Ne,
}

/// Which rule set an operator is checked against.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum OpFamily {
    /// Result has the operand type.
    Arithmetic,
    /// Boolean operands, Boolean result.
    Logical,
    /// Any comparable operand type, Boolean result.
    Comparison,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used when rendering programs.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::And => "and",
            Self::Or => "or",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
        }
    }

    /// Returns the operator's name as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::And => "And",
            Self::Or => "Or",
            Self::Lt => "Lt",
            Self::Lte => "Lte",
            Self::Gt => "Gt",
            Self::Gte => "Gte",
            Self::Eq => "Eq",
            Self::Ne => "Ne",
        }
    }

    pub const fn family(self) -> OpFamily {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide => OpFamily::Arithmetic,
            Self::And | Self::Or => OpFamily::Logical,
            Self::Lt | Self::Lte | Self::Gt | Self::Gte | Self::Eq | Self::Ne => {
                OpFamily::Comparison
            }
        }
    }
}

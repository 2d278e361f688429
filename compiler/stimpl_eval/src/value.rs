//! Runtime values and their type tags.
//!
//! The unit type has exactly one value and carries no payload, so it is
//! represented as the absence of a `Value` (`Option<Value>::None`) rather than
//! as a variant here.

use std::fmt;

/// A computed value of a non-unit type.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// The runtime type tag of this value.
    pub const fn runtime_type(&self) -> RuntimeType {
        match self {
            Value::Int(_) => RuntimeType::Integer,
            Value::Float(_) => RuntimeType::FloatingPoint,
            Value::Str(_) => RuntimeType::String,
            Value::Bool(_) => RuntimeType::Boolean,
        }
    }

    /// Returns the boolean payload, if this is a boolean.
    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Natural text of a value, as written by `print`.
///
/// Strings are written raw. Floats always keep a fractional part so `7.0`
/// is distinguishable from `7`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n:?}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

/// Dynamic type tag attached to every computed result.
///
/// Tags carry no parameters; two types are equal iff they are the same tag.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RuntimeType {
    Unit,
    Integer,
    FloatingPoint,
    String,
    Boolean,
}

impl RuntimeType {
    /// Type of an optional value; absence is Unit.
    #[inline]
    pub fn of(value: Option<&Value>) -> Self {
        value.map_or(RuntimeType::Unit, Value::runtime_type)
    }

    pub const fn name(self) -> &'static str {
        match self {
            RuntimeType::Unit => "Unit",
            RuntimeType::Integer => "Integer",
            RuntimeType::FloatingPoint => "FloatingPoint",
            RuntimeType::String => "String",
            RuntimeType::Boolean => "Boolean",
        }
    }
}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text written by `print` for an optional value: `Unit` for absence.
pub fn printable(value: Option<&Value>) -> String {
    value.map_or_else(|| RuntimeType::Unit.name().to_string(), Value::to_string)
}

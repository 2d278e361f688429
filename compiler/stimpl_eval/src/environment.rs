//! Persistent environment of variable bindings.
//!
//! An `Environment` is a singly-linked chain of bindings, newest first.
//! Extending never touches an existing node: it allocates a new head that
//! points at the old chain, so every older `Environment` value still sees
//! exactly the bindings it saw before. Reassigning a name shadows the old
//! binding instead of overwriting it.

use rustc_hash::FxHashSet;
use std::fmt;
use std::rc::Rc;

use stimpl_ir::Name;

use crate::{RuntimeType, Value};

/// One `(name, value, type)` entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    name: Name,
    value: Option<Value>,
    ty: RuntimeType,
}

impl Binding {
    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The bound value; `None` for Unit.
    #[inline]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    #[inline]
    pub fn ty(&self) -> RuntimeType {
        self.ty
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(Value::Str(s)) => write!(f, "{}: {s:?} ({})", self.name, self.ty),
            Some(value) => write!(f, "{}: {value} ({})", self.name, self.ty),
            None => write!(f, "{}: Unit ({})", self.name, self.ty),
        }
    }
}

#[derive(Debug)]
struct Node {
    binding: Binding,
    next: Environment,
}

/// A persistent chain of bindings.
///
/// Cloning is O(1) and shares the whole chain.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    head: Option<Rc<Node>>,
}

impl Environment {
    /// The terminal environment with no bindings.
    pub fn empty() -> Self {
        Environment { head: None }
    }

    /// Prepend a binding. Does not check whether `name` is already bound.
    ///
    /// `ty` is recorded as given; the interpreter rejects a binding whose
    /// value has another type when the variable is read.
    #[must_use]
    pub fn extend(&self, name: Name, value: Option<Value>, ty: RuntimeType) -> Self {
        Environment {
            head: Some(Rc::new(Node {
                binding: Binding { name, value, ty },
                next: self.clone(),
            })),
        }
    }

    /// Most recent binding of `name`, scanning head to tail.
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.iter().find(|binding| binding.name.as_str() == name)
    }

    /// All bindings head to tail, shadowed ones included.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            current: self.head.as_deref(),
        }
    }

    /// Number of nodes in the chain, shadowed bindings included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The binding `lookup` would return for each bound name, newest first.
    pub fn visible(&self) -> Vec<&Binding> {
        let mut seen = FxHashSet::default();
        self.iter()
            .filter(|binding| seen.insert(binding.name.as_str()))
            .collect()
    }

    /// Whether both environments are the same chain node.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, binding) in self.visible().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{binding}")?;
        }
        f.write_str("}")
    }
}

// Chains grow with every assignment a loop executes; unlink iteratively so
// dropping a long chain does not recurse once per node.
impl Drop for Environment {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(node) = head {
            match Rc::try_unwrap(node) {
                Ok(mut node) => head = node.next.head.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator over an environment's bindings, newest first.
pub struct Iter<'a> {
    current: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Binding;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.head.as_deref();
        Some(&node.binding)
    }
}

impl<'a> IntoIterator for &'a Environment {
    type Item = &'a Binding;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

//! Type definition identity.

use std::cmp::Ordering;
use std::fmt;

/// Identity of a type definition: namespace, simple name, generic arity.
///
/// Two `TypeKey`s built independently from the same metadata compare equal,
/// so keys can be used directly as map keys across provider lookups.
///
/// Ordering is by name, then arity, then namespace. This is the order used
/// when interface sets are sorted for deterministic output.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeKey {
    /// Dotted namespace (empty for the global namespace).
    #[cfg_attr(feature = "serde", serde(default))]
    pub namespace: String,
    /// Simple name without arity marker or type arguments.
    pub name: String,
    /// Number of type-level generic parameters.
    #[cfg_attr(feature = "serde", serde(default))]
    pub arity: u16,
}

impl TypeKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, arity: u16) -> Self {
        TypeKey {
            namespace: namespace.into(),
            name: name.into(),
            arity,
        }
    }

    /// Non-generic key.
    pub fn simple(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(namespace, name, 0)
    }

    /// `Namespace.Name` without arity marker.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        self.arity > 0
    }
}

impl Ord for TypeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then(self.arity.cmp(&other.arity))
            .then_with(|| self.namespace.cmp(&other.namespace))
    }
}

impl PartialOrd for TypeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.namespace.is_empty() {
            write!(f, "{}.", self.namespace)?;
        }
        write!(f, "{}", self.name)?;
        if self.arity > 0 {
            write!(f, "`{}", self.arity)?;
        }
        Ok(())
    }
}

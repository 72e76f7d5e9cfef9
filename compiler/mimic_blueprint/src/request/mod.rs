//! Generation requests and the policy they carry.
//!
//! A request is the only configuration the pipeline reads. Nothing is taken
//! from ambient or global state, so independent requests can be built
//! concurrently.

use std::fmt;

use mimic_ir::{Accessibility, NamedType, TypeKey};

/// How the generated type relates to a generic target.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum GenerationMode {
    /// Neither side is generic.
    #[default]
    NonGeneric,
    /// The generated type mirrors the target's open parameters one-for-one.
    UnboundGeneric,
    /// The generated type targets one constructed instantiation.
    ClosedGeneric,
}

impl GenerationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GenerationMode::NonGeneric => "non-generic",
            GenerationMode::UnboundGeneric => "unbound generic",
            GenerationMode::ClosedGeneric => "closed generic",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of member names to leave out of a blueprint.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<String>", into = "Vec<String>")
)]
pub struct ExclusionList(Vec<String>);

impl ExclusionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name; duplicates keep their first position.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = ExclusionList::new();
        for name in iter {
            list.insert(name);
        }
        list
    }
}

impl From<Vec<String>> for ExclusionList {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<ExclusionList> for Vec<String> {
    fn from(list: ExclusionList) -> Self {
        list.0
    }
}

/// Per-request generation policy.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationPolicy {
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: GenerationMode,
    /// Admit `internal` and `private protected` members and bases.
    #[cfg_attr(feature = "serde", serde(default))]
    pub include_internals: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub excluded: ExclusionList,
}

impl GenerationPolicy {
    pub fn new(mode: GenerationMode) -> Self {
        GenerationPolicy {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn including_internals(mut self) -> Self {
        self.include_internals = true;
        self
    }

    #[must_use]
    pub fn excluding<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.excluded.insert(name);
        }
        self
    }
}

/// Identity of the stand-in type being generated.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedType {
    #[cfg_attr(feature = "serde", serde(default))]
    pub namespace: String,
    pub name: String,
    /// The generated type's own generic parameter names.
    #[cfg_attr(feature = "serde", serde(default))]
    pub type_params: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub accessibility: Accessibility,
}

impl GeneratedType {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        GeneratedType {
            namespace: namespace.into(),
            name: name.into(),
            type_params: Vec::new(),
            accessibility: Accessibility::Public,
        }
    }

    #[must_use]
    pub fn with_type_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Key under which the generated type can itself be looked up.
    pub fn key(&self) -> TypeKey {
        let arity = u16::try_from(self.type_params.len()).unwrap_or(u16::MAX);
        TypeKey::new(self.namespace.clone(), self.name.clone(), arity)
    }

    /// `Ns.Name<T1, T2>`.
    pub fn display_name(&self) -> String {
        let mut out = self.key().qualified_name();
        if !self.type_params.is_empty() {
            out.push('<');
            out.push_str(&self.type_params.join(", "));
            out.push('>');
        }
        out
    }
}

impl fmt::Display for GeneratedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// One stand-in to generate.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRequest {
    /// Target type. Open (no arguments) in non-generic and unbound modes,
    /// fully constructed in closed mode.
    pub target: NamedType,
    pub generated: GeneratedType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: GenerationPolicy,
}

impl GenerationRequest {
    pub fn new(target: NamedType, generated: GeneratedType) -> Self {
        GenerationRequest {
            target,
            generated,
            policy: GenerationPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: GenerationPolicy) -> Self {
        self.policy = policy;
        self
    }
}

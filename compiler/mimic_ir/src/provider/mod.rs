//! Type metadata providers.
//!
//! The resolution pipeline never discovers types on its own; it asks a
//! [`TypeMetadataProvider`] for definitions by key. [`TypeTable`] is the
//! in-memory provider used by the driver (filled from a catalog) and by
//! tests. [`Layered`] overlays extra definitions on another provider without
//! copying it.

use rustc_hash::FxHashMap;

use crate::{well_known, TypeDefinition, TypeKey};

/// Source of complete, static structural descriptions.
pub trait TypeMetadataProvider {
    /// Definition for `key`, or `None` if the type is unknown.
    fn definition(&self, key: &TypeKey) -> Option<&TypeDefinition>;

    /// Key of the universal root type. Base-chain walks stop here.
    fn root_type(&self) -> &TypeKey;
}

/// In-memory provider keyed by `TypeKey`.
#[derive(Clone, Debug)]
pub struct TypeTable {
    types: FxHashMap<TypeKey, TypeDefinition>,
    root: TypeKey,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    /// Empty table rooted at `System.Object`.
    pub fn new() -> Self {
        Self::with_root(well_known::object_key())
    }

    pub fn with_root(root: TypeKey) -> Self {
        TypeTable {
            types: FxHashMap::default(),
            root,
        }
    }

    /// Register a definition, replacing any previous one with the same key.
    ///
    /// Returns the replaced definition.
    pub fn insert(&mut self, definition: TypeDefinition) -> Option<TypeDefinition> {
        self.types.insert(definition.key().clone(), definition)
    }

    /// Builder-style `insert`.
    #[must_use]
    pub fn with(mut self, definition: TypeDefinition) -> Self {
        self.insert(definition);
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn contains(&self, key: &TypeKey) -> bool {
        self.types.contains_key(key)
    }

    /// All definitions, sorted by key for deterministic iteration.
    pub fn definitions(&self) -> Vec<&TypeDefinition> {
        let mut defs: Vec<_> = self.types.values().collect();
        defs.sort_by(|a, b| a.key().cmp(b.key()));
        defs
    }
}

impl FromIterator<TypeDefinition> for TypeTable {
    fn from_iter<I: IntoIterator<Item = TypeDefinition>>(iter: I) -> Self {
        let mut table = TypeTable::new();
        for def in iter {
            table.insert(def);
        }
        table
    }
}

impl TypeMetadataProvider for TypeTable {
    fn definition(&self, key: &TypeKey) -> Option<&TypeDefinition> {
        self.types.get(key)
    }

    fn root_type(&self) -> &TypeKey {
        &self.root
    }
}

/// A provider whose lookups consult `overlay` first, then `base`.
///
/// Used to make generated types visible to requests that target them.
pub struct Layered<'a, P: ?Sized> {
    base: &'a P,
    overlay: &'a TypeTable,
}

impl<'a, P: TypeMetadataProvider + ?Sized> Layered<'a, P> {
    pub fn new(base: &'a P, overlay: &'a TypeTable) -> Self {
        Layered { base, overlay }
    }
}

impl<P: TypeMetadataProvider + ?Sized> TypeMetadataProvider for Layered<'_, P> {
    fn definition(&self, key: &TypeKey) -> Option<&TypeDefinition> {
        self.overlay
            .definition(key)
            .or_else(|| self.base.definition(key))
    }

    fn root_type(&self) -> &TypeKey {
        self.base.root_type()
    }
}

//! Import tracking and deduplication.

use std::collections::BTreeMap;

/// Result of adding an entry to an [`ImportSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was new.
    Added,
    /// The key was already present with the same value.
    AlreadyPresent,
    /// The key was already present with a different value; the first value
    /// is kept.
    Collision,
}

/// Imports keyed by the identifier they bind in the generated code.
///
/// Iteration is sorted by key, so the rendered import list does not depend
/// on insertion order. Two different values deriving the same key are never
/// merged silently: the first one wins and the later one is recorded in
/// [`ImportSet::collisions`].
///
/// # Example
///
/// ```
/// use rpcgen_codegen::generation::{ImportSet, InsertOutcome};
///
/// let mut imports = ImportSet::new();
/// imports.insert("receipt", 2);
/// imports.insert("order", 1);
/// assert_eq!(imports.insert("order", 1), InsertOutcome::AlreadyPresent);
///
/// let keys: Vec<_> = imports.keys().collect();
/// assert_eq!(keys, vec!["order", "receipt"]);
/// ```
#[derive(Debug, Clone)]
pub struct ImportSet<V> {
    entries: BTreeMap<String, V>,
    collisions: Vec<(String, V)>,
}

impl<V> Default for ImportSet<V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            collisions: Vec::new(),
        }
    }
}

impl<V: PartialEq> ImportSet<V> {
    /// Create an empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import binding `key` to `value`.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> InsertOutcome {
        let key = key.into();
        match self.entries.get(&key) {
            None => {
                self.entries.insert(key, value);
                InsertOutcome::Added
            }
            Some(existing) if *existing == value => InsertOutcome::AlreadyPresent,
            Some(_) => {
                self.collisions.push((key, value));
                InsertOutcome::Collision
            }
        }
    }

    /// Get the value bound to `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Iterate over `(key, value)` pairs sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries rejected because their key was already bound to another value.
    pub fn collisions(&self) -> &[(String, V)] {
        &self.collisions
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of imports.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

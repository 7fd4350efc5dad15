//! Insertion-ordered key mappings.
//!
//! A `Mapping` enumerates its own entries in the order their keys were first
//! inserted. Overwriting a key keeps its position; removing a key closes the
//! gap. Lookups go through a hash index into the entry list:
//!
//! - get / insert over an existing key: O(1) average case
//! - insert of a new key: O(1) amortized
//! - remove: O(n), the index of every later entry shifts down by one

use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// A key mapping with a stable enumeration order.
#[derive(Clone, Debug)]
pub struct Mapping<K: Clone + Eq + Hash, V> {
    /// Map from key to position in `entries`.
    index: FxHashMap<K, usize>,
    /// Entries in enumeration order.
    entries: Vec<(K, V)>,
}

impl<K: Clone + Eq + Hash, V> Default for Mapping<K, V> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<K: Clone + Eq + Hash, V> Mapping<K, V> {
    /// Create a new empty mapping.
    pub fn new() -> Mapping<K, V> {
        return Mapping {
            index: FxHashMap::default(),
            entries: Vec::new(),
        };
    }

    /// Insert a value, returning the value it replaced, if any.
    ///
    /// A new key is appended to the enumeration order. An existing key
    /// keeps its position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&position) = self.index.get(&key) {
            let old = std::mem::replace(&mut self.entries[position].1, value);
            return Some(old);
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        return None;
    }

    /// Get the value stored under a key.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = *self.index.get(key)?;
        return Some(&self.entries[position].1);
    }

    /// Get a mutable reference to the value stored under a key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = *self.index.get(key)?;
        return Some(&mut self.entries[position].1);
    }

    /// Check whether a key is present.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        return self.index.contains_key(key);
    }

    /// Remove a key, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.index.remove(key)?;
        let (_, value) = self.entries.remove(position);
        for (later, _) in &self.entries[position..] {
            if let Some(slot) = self.index.get_mut::<K>(later) {
                *slot -= 1;
            }
        }
        return Some(value);
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }

    /// Iterate over `(key, value)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        return self.entries.iter().map(|(k, v)| (k, v));
    }

    /// Iterate over keys in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        return self.entries.iter().map(|(k, _)| k);
    }

    /// Iterate over values in enumeration order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        return self.entries.iter().map(|(_, v)| v);
    }
}

impl<K: Clone + Eq + Hash, V: PartialEq> PartialEq for Mapping<K, V> {
    /// Two mappings are equal when they hold the same entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        return self.entries == other.entries;
    }
}

impl<K: Clone + Eq + Hash, V> FromIterator<(K, V)> for Mapping<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        return mapping;
    }
}

impl<K: Clone + Eq + Hash, V, const N: usize> From<[(K, V); N]> for Mapping<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        return entries.into_iter().collect();
    }
}

//! Key-value container abstraction.
//!
//! Mirrors [`crate::collection::Collection`] for associative containers so
//! the null-safety operations cover `HashMap` and `BTreeMap` uniformly.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Common surface over key-value containers.
pub trait Map {
    type Key;
    type Value;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Associate `value` with `key`, returning the previous value if the key
    /// was already present (last write wins).
    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn contains_key(&self, key: &Self::Key) -> bool;

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    fn iter(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    fn contains_value(&self, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq,
    {
        self.iter().any(|(_, v)| v == value)
    }

    /// Remove the entry only when both key and value match, reporting
    /// whether anything was removed.
    fn remove_entry(&mut self, key: &Self::Key, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq,
    {
        if self.get(key) == Some(value) {
            self.remove(key);
            true
        } else {
            false
        }
    }
}

impl<K: Eq + Hash, V> Map for HashMap<K, V> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        HashMap::iter(self)
    }
}

impl<K: Ord, V> Map for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        BTreeMap::iter(self)
    }
}

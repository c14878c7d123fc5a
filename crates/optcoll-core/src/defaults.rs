//! Fixed-default-factory shorthands over [`crate::ops`].
//!
//! Pure delegation: each function binds the common default container
//! (`Vec`, `HashSet` or `HashMap`) to the factory parameter. The
//! single-value variants return the container directly because the bound
//! factory always produces one; the bulk variants keep the `Option` return
//! so the empty-source passthrough is observable.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::collection::Collection;
use crate::map::Map;
use crate::ops;

/// Append to a sequence, defaulting to a fresh `Vec` when absent.
pub fn add_vec<V: PartialEq>(list: Option<Vec<V>>, value: V) -> Vec<V> {
    ops::add(list, || Some(Vec::new()), value).unwrap_or_default()
}

/// Insert into a set, defaulting to a fresh `HashSet` when absent.
pub fn add_set<V: Eq + Hash>(set: Option<HashSet<V>>, value: V) -> HashSet<V> {
    ops::add(set, || Some(HashSet::new()), value).unwrap_or_default()
}

/// Merge into a sequence, defaulting to a fresh `Vec` when the source is
/// non-empty and the target absent.
pub fn add_all_vec<S, V>(list: Option<Vec<V>>, source: Option<&S>) -> Option<Vec<V>>
where
    S: Collection<Item = V>,
    V: PartialEq + Clone,
{
    ops::add_all(list, || Some(Vec::new()), source)
}

/// Merge into a set, defaulting to a fresh `HashSet`.
pub fn add_all_set<S, V>(set: Option<HashSet<V>>, source: Option<&S>) -> Option<HashSet<V>>
where
    S: Collection<Item = V>,
    V: Eq + Hash + Clone,
{
    ops::add_all(set, || Some(HashSet::new()), source)
}

/// Associate a key with a value, defaulting to a fresh `HashMap` when absent.
pub fn put_map<K: Eq + Hash, V>(map: Option<HashMap<K, V>>, key: K, value: V) -> HashMap<K, V> {
    ops::put(map, || Some(HashMap::new()), key, value).unwrap_or_default()
}

/// Merge entries into a map, defaulting to a fresh `HashMap`.
pub fn put_all_map<S, K, V>(map: Option<HashMap<K, V>>, source: Option<&S>) -> Option<HashMap<K, V>>
where
    S: Map<Key = K, Value = V>,
    K: Eq + Hash + Clone,
    V: Clone,
{
    ops::put_all(map, || Some(HashMap::new()), source)
}

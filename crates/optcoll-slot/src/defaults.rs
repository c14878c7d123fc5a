//! Fixed-default-factory shorthands over [`crate::ops`] for slots.
//!
//! Pure delegation, same defaults as the direct tier: `Vec` for sequences,
//! `HashSet` for sets, `HashMap` for maps.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use optcoll_core::collection::Collection;
use optcoll_core::map::Map;

use crate::ops;
use crate::slot::Slot;

/// Append through the slot, defaulting to a fresh `Vec` when absent.
pub fn add_vec<'a, S, V>(slot: Option<&'a mut S>, value: V) -> Option<&'a mut Vec<V>>
where
    S: Slot<Container = Vec<V>>,
    V: PartialEq,
{
    ops::add(slot, || Some(Vec::new()), value)
}

/// Insert through the slot, defaulting to a fresh `HashSet` when absent.
pub fn add_set<'a, S, V>(slot: Option<&'a mut S>, value: V) -> Option<&'a mut HashSet<V>>
where
    S: Slot<Container = HashSet<V>>,
    V: Eq + Hash,
{
    ops::add(slot, || Some(HashSet::new()), value)
}

/// Merge through the slot into a sequence, defaulting to a fresh `Vec`.
pub fn add_all_vec<'a, S, Src, V>(
    slot: Option<&'a mut S>,
    source: Option<&Src>,
) -> Option<&'a mut Vec<V>>
where
    S: Slot<Container = Vec<V>>,
    Src: Collection<Item = V>,
    V: PartialEq + Clone,
{
    ops::add_all(slot, || Some(Vec::new()), source)
}

/// Merge through the slot into a set, defaulting to a fresh `HashSet`.
pub fn add_all_set<'a, S, Src, V>(
    slot: Option<&'a mut S>,
    source: Option<&Src>,
) -> Option<&'a mut HashSet<V>>
where
    S: Slot<Container = HashSet<V>>,
    Src: Collection<Item = V>,
    V: Eq + Hash + Clone,
{
    ops::add_all(slot, || Some(HashSet::new()), source)
}

/// Associate through the slot, defaulting to a fresh `HashMap` when absent.
pub fn put_map<'a, S, K, V>(
    slot: Option<&'a mut S>,
    key: K,
    value: V,
) -> Option<&'a mut HashMap<K, V>>
where
    S: Slot<Container = HashMap<K, V>>,
    K: Eq + Hash,
{
    ops::put(slot, || Some(HashMap::new()), key, value)
}

/// Merge entries through the slot, defaulting to a fresh `HashMap`.
pub fn put_all_map<'a, S, Src, K, V>(
    slot: Option<&'a mut S>,
    source: Option<&Src>,
) -> Option<&'a mut HashMap<K, V>>
where
    S: Slot<Container = HashMap<K, V>>,
    Src: Map<Key = K, Value = V>,
    K: Eq + Hash + Clone,
    V: Clone,
{
    ops::put_all(slot, || Some(HashMap::new()), source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_vec_materializes_the_field() {
        let mut field: Option<Vec<i32>> = None;
        assert_eq!(add_vec(Some(&mut field), 5), Some(&mut vec![5]));
        assert_eq!(field, Some(vec![5]));
    }

    #[test]
    fn add_set_deduplicates() {
        let mut field: Option<HashSet<&str>> = None;
        add_set(Some(&mut field), "a");
        add_set(Some(&mut field), "a");
        assert_eq!(field.map(|s| s.len()), Some(1));
    }

    #[test]
    fn bulk_defaults_keep_the_short_circuit() {
        let mut field: Option<HashSet<i32>> = None;
        let empty: Vec<i32> = Vec::new();
        assert!(add_all_set(Some(&mut field), Some(&empty)).is_none());
        assert_eq!(field, None);

        let mut map_field: Option<HashMap<i32, i32>> = None;
        let source = HashMap::from([(1, 2), (3, 4)]);
        assert_eq!(
            put_all_map(Some(&mut map_field), Some(&source)).map(|m| m.len()),
            Some(2)
        );
    }

    #[test]
    fn put_map_overwrites() {
        let mut field: Option<HashMap<i32, &str>> = None;
        put_map(Some(&mut field), 1, "a");
        put_map(Some(&mut field), 1, "b");
        assert_eq!(field.and_then(|m| m.get(&1).copied()), Some("b"));
    }
}

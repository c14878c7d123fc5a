//! Null-safe operations over containers that may be absent.
//!
//! Every function here is total: an absent (`None`) container, factory or
//! source is a handled input, never a panic. Mutating entry points take the
//! container by value together with a factory and hand back the effective
//! container, so an absent target is materialized exactly once, on the
//! absent-to-present transition, and only when the operation actually has
//! something to write. A factory may itself return `None`, which turns the
//! mutation into a no-op.

use tracing::trace;

use crate::collection::Collection;
use crate::map::Map;

/// Resolve an absent target through the factory. Present targets pass
/// through untouched; the factory fires at most once.
fn or_init<C>(target: Option<C>, init: impl FnOnce() -> Option<C>) -> Option<C> {
    match target {
        Some(c) => Some(c),
        None => {
            let created = init();
            if created.is_some() {
                trace!("materialized absent container via factory");
            }
            created
        }
    }
}

/// True if the collection is absent or holds no elements.
pub fn is_empty<C: Collection>(collection: Option<&C>) -> bool {
    collection.map_or(true, |c| c.is_empty())
}

/// Exact complement of [`is_empty`].
pub fn is_not_empty<C: Collection>(collection: Option<&C>) -> bool {
    !is_empty(collection)
}

/// True if the map is absent or holds no entries.
pub fn map_is_empty<M: Map>(map: Option<&M>) -> bool {
    map.map_or(true, |m| m.is_empty())
}

/// Exact complement of [`map_is_empty`].
pub fn map_is_not_empty<M: Map>(map: Option<&M>) -> bool {
    !map_is_empty(map)
}

/// True if the slice is absent or zero-length. Fixed arrays support only the
/// emptiness tests; their size is immutable.
pub fn slice_is_empty<V>(slice: Option<&[V]>) -> bool {
    slice.map_or(true, |s| s.is_empty())
}

/// Exact complement of [`slice_is_empty`].
pub fn slice_is_not_empty<V>(slice: Option<&[V]>) -> bool {
    !slice_is_empty(slice)
}

/// Append `item`, materializing an absent collection through `init` first.
/// Returns the effective collection, or `None` when both the target and the
/// factory result are absent (no mutation happens in that case).
pub fn add<C: Collection>(
    target: Option<C>,
    init: impl FnOnce() -> Option<C>,
    item: C::Item,
) -> Option<C> {
    let mut target = or_init(target, init);
    if let Some(c) = target.as_mut() {
        c.insert(item);
    }
    target
}

/// Merge every element of `source` into `target`. An absent or empty source
/// short-circuits: the target passes through unchanged (including `None`)
/// and the factory is never consulted.
pub fn add_all<T, S>(
    target: Option<T>,
    init: impl FnOnce() -> Option<T>,
    source: Option<&S>,
) -> Option<T>
where
    T: Collection,
    S: Collection<Item = T::Item>,
    T::Item: Clone,
{
    match source {
        Some(src) if !src.is_empty() => {
            let mut target = or_init(target, init);
            if let Some(t) = target.as_mut() {
                for item in src.iter() {
                    t.insert(item.clone());
                }
            }
            target
        }
        _ => target,
    }
}

/// Associate `key` with `value`, materializing an absent map through `init`
/// first. Overwrites any existing value for the key.
pub fn put<M: Map>(
    target: Option<M>,
    init: impl FnOnce() -> Option<M>,
    key: M::Key,
    value: M::Value,
) -> Option<M> {
    let mut target = or_init(target, init);
    if let Some(m) = target.as_mut() {
        m.insert(key, value);
    }
    target
}

/// Merge every entry of `source` into `target`; source entries overwrite
/// target entries with equal keys. Same empty-source short-circuit as
/// [`add_all`].
pub fn put_all<T, S>(
    target: Option<T>,
    init: impl FnOnce() -> Option<T>,
    source: Option<&S>,
) -> Option<T>
where
    T: Map,
    S: Map<Key = T::Key, Value = T::Value>,
    T::Key: Clone,
    T::Value: Clone,
{
    match source {
        Some(src) if !src.is_empty() => {
            let mut target = or_init(target, init);
            if let Some(t) = target.as_mut() {
                for (key, value) in src.iter() {
                    t.insert(key.clone(), value.clone());
                }
            }
            target
        }
        _ => target,
    }
}

/// Membership test; false for an absent collection. Never materializes.
pub fn contains<C: Collection>(collection: Option<&C>, item: &C::Item) -> bool {
    collection.is_some_and(|c| c.contains(item))
}

/// Key-presence test; false for an absent map.
pub fn contains_key<M: Map>(map: Option<&M>, key: &M::Key) -> bool {
    map.is_some_and(|m| m.contains_key(key))
}

/// Value-presence test; false for an absent map.
pub fn contains_value<M>(map: Option<&M>, value: &M::Value) -> bool
where
    M: Map,
    M::Value: PartialEq,
{
    map.is_some_and(|m| m.contains_value(value))
}

/// True only when every source element is present in the target. An absent
/// or empty side on either end yields false: an empty requirement is never
/// considered satisfied.
pub fn contains_all<T, S>(target: Option<&T>, source: Option<&S>) -> bool
where
    T: Collection,
    S: Collection<Item = T::Item>,
{
    match (target, source) {
        (Some(t), Some(s)) if !t.is_empty() && !s.is_empty() => {
            s.iter().all(|item| t.contains(item))
        }
        _ => false,
    }
}

/// True only when every source entry is present in the target with an equal
/// value. A key present with a different value is a mismatch. Same
/// emptiness asymmetry as [`contains_all`].
pub fn contains_all_entries<T, S>(target: Option<&T>, source: Option<&S>) -> bool
where
    T: Map,
    S: Map<Key = T::Key, Value = T::Value>,
    T::Value: PartialEq,
{
    match (target, source) {
        (Some(t), Some(s)) if !t.is_empty() && !s.is_empty() => {
            s.iter().all(|(key, value)| t.get(key) == Some(value))
        }
        _ => false,
    }
}

/// True only when every key in `source` is present in the target map. Same
/// emptiness asymmetry as [`contains_all`].
pub fn contains_all_keys<T, S>(target: Option<&T>, source: Option<&S>) -> bool
where
    T: Map,
    S: Collection<Item = T::Key>,
{
    match (target, source) {
        (Some(t), Some(s)) if !t.is_empty() && !s.is_empty() => {
            s.iter().all(|key| t.contains_key(key))
        }
        _ => false,
    }
}

/// Remove one matching element (first occurrence for sequences); false for
/// an absent collection or a missing element.
pub fn remove<C: Collection>(collection: Option<&mut C>, item: &C::Item) -> bool {
    collection.is_some_and(|c| c.remove_item(item))
}

/// Remove the entry only when both key and value match.
pub fn remove_entry<M>(map: Option<&mut M>, key: &M::Key, value: &M::Value) -> bool
where
    M: Map,
    M::Value: PartialEq,
{
    map.is_some_and(|m| m.remove_entry(key, value))
}

/// Remove the entry for `key`; false for an absent map or a missing key.
pub fn remove_key<M: Map>(map: Option<&mut M>, key: &M::Key) -> bool {
    map.is_some_and(|m| m.remove(key).is_some())
}

/// Remove every occurrence of every source element from the target,
/// reporting whether the target changed. False when either side is absent
/// or empty.
pub fn remove_all<T, S>(target: Option<&mut T>, source: Option<&S>) -> bool
where
    T: Collection,
    S: Collection<Item = T::Item>,
{
    match (target, source) {
        (Some(t), Some(s)) if !t.is_empty() && !s.is_empty() => {
            t.retain_where(|item| !s.contains(item))
        }
        _ => false,
    }
}

/// Remove each source entry from the target individually, only when both
/// key and value match. True if at least one removal succeeded; this is not
/// an all-or-nothing batch.
pub fn remove_all_entries<T, S>(target: Option<&mut T>, source: Option<&S>) -> bool
where
    T: Map,
    S: Map<Key = T::Key, Value = T::Value>,
    T::Value: PartialEq,
{
    match (target, source) {
        (Some(t), Some(s)) if !t.is_empty() && !s.is_empty() => {
            let mut changed = false;
            for (key, value) in s.iter() {
                changed |= t.remove_entry(key, value);
            }
            changed
        }
        _ => false,
    }
}

/// Remove the entry for every key in `source`, reporting whether the target
/// changed.
pub fn remove_all_keys<T, S>(target: Option<&mut T>, source: Option<&S>) -> bool
where
    T: Map,
    S: Collection<Item = T::Key>,
{
    match (target, source) {
        (Some(t), Some(s)) if !t.is_empty() && !s.is_empty() => {
            let mut changed = false;
            for key in s.iter() {
                changed |= t.remove(key).is_some();
            }
            changed
        }
        _ => false,
    }
}

/// Keep only the elements also present in `source`, reporting whether the
/// target changed. False when either side is absent or empty.
pub fn retain_all<T, S>(target: Option<&mut T>, source: Option<&S>) -> bool
where
    T: Collection,
    S: Collection<Item = T::Item>,
{
    match (target, source) {
        (Some(t), Some(s)) if !t.is_empty() && !s.is_empty() => {
            t.retain_where(|item| s.contains(item))
        }
        _ => false,
    }
}

//! Accessor-mediated counterparts of the direct-tier operations.
//!
//! Every function takes `Option<&mut S>` for some [`Slot`]: passing `None`
//! means "no accessor supplied" and yields the operation's default
//! immediately, which is distinct from a supplied slot that currently reads
//! absent. Mutating operations resolve absence through [`init_if_absent`],
//! publishing a factory-created container through the slot's write side at
//! most once and never with an absent value.

use tracing::trace;

use optcoll_core::collection::Collection;
use optcoll_core::map::Map;
use optcoll_core::ops as core_ops;

use crate::slot::Slot;

/// Read through the slot, lazily materializing an absent container.
///
/// A present value is returned as-is and the write side is never touched.
/// When the slot reads absent, the factory runs; if it yields a container,
/// that container is published through the slot exactly once and returned.
pub fn init_if_absent<S: Slot>(
    slot: &mut S,
    init: impl FnOnce() -> Option<S::Container>,
) -> Option<&mut S::Container> {
    if slot.get().is_none() {
        let created = init()?;
        trace!("publishing factory-created container through write accessor");
        slot.set(created);
    }
    slot.get()
}

/// True when the accessor is absent, reads absent, or reads an empty
/// collection.
pub fn is_empty<S, C>(slot: Option<&mut S>) -> bool
where
    S: Slot<Container = C>,
    C: Collection,
{
    match slot {
        Some(slot) => core_ops::is_empty(slot.get().map(|c| &*c)),
        None => true,
    }
}

/// Exact complement of [`is_empty`].
pub fn is_not_empty<S, C>(slot: Option<&mut S>) -> bool
where
    S: Slot<Container = C>,
    C: Collection,
{
    !is_empty(slot)
}

/// True when the accessor is absent, reads absent, or reads an empty map.
pub fn map_is_empty<S, M>(slot: Option<&mut S>) -> bool
where
    S: Slot<Container = M>,
    M: Map,
{
    match slot {
        Some(slot) => core_ops::map_is_empty(slot.get().map(|m| &*m)),
        None => true,
    }
}

/// Exact complement of [`map_is_empty`].
pub fn map_is_not_empty<S, M>(slot: Option<&mut S>) -> bool
where
    S: Slot<Container = M>,
    M: Map,
{
    !map_is_empty(slot)
}

/// Emptiness test for slots holding fixed-size storage (`[V; N]`,
/// `Box<[V]>`, anything slice-viewable). Arrays get no mutation operations.
pub fn array_is_empty<S, A, V>(slot: Option<&mut S>) -> bool
where
    S: Slot<Container = A>,
    A: AsRef<[V]>,
{
    match slot {
        Some(slot) => core_ops::slice_is_empty(slot.get().map(|a| (*a).as_ref())),
        None => true,
    }
}

/// Exact complement of [`array_is_empty`].
pub fn array_is_not_empty<S, A, V>(slot: Option<&mut S>) -> bool
where
    S: Slot<Container = A>,
    A: AsRef<[V]>,
{
    !array_is_empty(slot)
}

/// Append through the slot, materializing an absent collection via `init`.
/// Returns the resolved collection, or `None` when the accessor is absent
/// or the factory declined to create one.
pub fn add<'a, S, C>(
    slot: Option<&'a mut S>,
    init: impl FnOnce() -> Option<C>,
    item: C::Item,
) -> Option<&'a mut C>
where
    S: Slot<Container = C>,
    C: Collection,
{
    let target = init_if_absent(slot?, init)?;
    target.insert(item);
    Some(target)
}

/// Merge every source element through the slot. An absent or empty source
/// returns `None` without reading the slot at all: there is nothing to
/// merge, so the field is never materialized or even inspected.
pub fn add_all<'a, S, C, Src>(
    slot: Option<&'a mut S>,
    init: impl FnOnce() -> Option<C>,
    source: Option<&Src>,
) -> Option<&'a mut C>
where
    S: Slot<Container = C>,
    C: Collection,
    Src: Collection<Item = C::Item>,
    C::Item: Clone,
{
    let src = match source {
        Some(src) if !src.is_empty() => src,
        _ => return None,
    };
    let target = init_if_absent(slot?, init)?;
    for item in src.iter() {
        target.insert(item.clone());
    }
    Some(target)
}

/// Associate `key` with `value` through the slot, materializing an absent
/// map via `init`. Overwrites any existing value for the key.
pub fn put<'a, S, M>(
    slot: Option<&'a mut S>,
    init: impl FnOnce() -> Option<M>,
    key: M::Key,
    value: M::Value,
) -> Option<&'a mut M>
where
    S: Slot<Container = M>,
    M: Map,
{
    let target = init_if_absent(slot?, init)?;
    target.insert(key, value);
    Some(target)
}

/// Merge every source entry through the slot; source entries overwrite
/// equal keys. Same empty-source short-circuit as [`add_all`].
pub fn put_all<'a, S, M, Src>(
    slot: Option<&'a mut S>,
    init: impl FnOnce() -> Option<M>,
    source: Option<&Src>,
) -> Option<&'a mut M>
where
    S: Slot<Container = M>,
    M: Map,
    Src: Map<Key = M::Key, Value = M::Value>,
    M::Key: Clone,
    M::Value: Clone,
{
    let src = match source {
        Some(src) if !src.is_empty() => src,
        _ => return None,
    };
    let target = init_if_absent(slot?, init)?;
    for (key, value) in src.iter() {
        target.insert(key.clone(), value.clone());
    }
    Some(target)
}

/// Membership test through the slot; false for an absent accessor.
pub fn contains<S, C>(slot: Option<&mut S>, item: &C::Item) -> bool
where
    S: Slot<Container = C>,
    C: Collection,
{
    match slot {
        Some(slot) => core_ops::contains(slot.get().map(|c| &*c), item),
        None => false,
    }
}

/// Key-presence test through the slot.
pub fn contains_key<S, M>(slot: Option<&mut S>, key: &M::Key) -> bool
where
    S: Slot<Container = M>,
    M: Map,
{
    match slot {
        Some(slot) => core_ops::contains_key(slot.get().map(|m| &*m), key),
        None => false,
    }
}

/// Value-presence test through the slot.
pub fn contains_value<S, M>(slot: Option<&mut S>, value: &M::Value) -> bool
where
    S: Slot<Container = M>,
    M: Map,
    M::Value: PartialEq,
{
    match slot {
        Some(slot) => core_ops::contains_value(slot.get().map(|m| &*m), value),
        None => false,
    }
}

/// Containment of every source element; false on an absent accessor, an
/// absent/empty target or an absent/empty source.
pub fn contains_all<S, C, Src>(slot: Option<&mut S>, source: Option<&Src>) -> bool
where
    S: Slot<Container = C>,
    C: Collection,
    Src: Collection<Item = C::Item>,
{
    match slot {
        Some(slot) => core_ops::contains_all(slot.get().map(|c| &*c), source),
        None => false,
    }
}

/// Entry-wise containment; a key present with a different value is a
/// mismatch.
pub fn contains_all_entries<S, M, Src>(slot: Option<&mut S>, source: Option<&Src>) -> bool
where
    S: Slot<Container = M>,
    M: Map,
    Src: Map<Key = M::Key, Value = M::Value>,
    M::Value: PartialEq,
{
    match slot {
        Some(slot) => core_ops::contains_all_entries(slot.get().map(|m| &*m), source),
        None => false,
    }
}

/// Key-set containment through the slot.
pub fn contains_all_keys<S, M, Src>(slot: Option<&mut S>, source: Option<&Src>) -> bool
where
    S: Slot<Container = M>,
    M: Map,
    Src: Collection<Item = M::Key>,
{
    match slot {
        Some(slot) => core_ops::contains_all_keys(slot.get().map(|m| &*m), source),
        None => false,
    }
}

/// Remove one matching element through the slot; never materializes.
pub fn remove<S, C>(slot: Option<&mut S>, item: &C::Item) -> bool
where
    S: Slot<Container = C>,
    C: Collection,
{
    match slot {
        Some(slot) => core_ops::remove(slot.get(), item),
        None => false,
    }
}

/// Remove the entry only when both key and value match.
pub fn remove_entry<S, M>(slot: Option<&mut S>, key: &M::Key, value: &M::Value) -> bool
where
    S: Slot<Container = M>,
    M: Map,
    M::Value: PartialEq,
{
    match slot {
        Some(slot) => core_ops::remove_entry(slot.get(), key, value),
        None => false,
    }
}

/// Remove the entry for `key` through the slot.
pub fn remove_key<S, M>(slot: Option<&mut S>, key: &M::Key) -> bool
where
    S: Slot<Container = M>,
    M: Map,
{
    match slot {
        Some(slot) => core_ops::remove_key(slot.get(), key),
        None => false,
    }
}

/// Remove every occurrence of every source element through the slot.
pub fn remove_all<S, C, Src>(slot: Option<&mut S>, source: Option<&Src>) -> bool
where
    S: Slot<Container = C>,
    C: Collection,
    Src: Collection<Item = C::Item>,
{
    match slot {
        Some(slot) => core_ops::remove_all(slot.get(), source),
        None => false,
    }
}

/// Entry-wise removal through the slot; true if at least one entry went.
pub fn remove_all_entries<S, M, Src>(slot: Option<&mut S>, source: Option<&Src>) -> bool
where
    S: Slot<Container = M>,
    M: Map,
    Src: Map<Key = M::Key, Value = M::Value>,
    M::Value: PartialEq,
{
    match slot {
        Some(slot) => core_ops::remove_all_entries(slot.get(), source),
        None => false,
    }
}

/// Remove the entry for every source key through the slot.
pub fn remove_all_keys<S, M, Src>(slot: Option<&mut S>, source: Option<&Src>) -> bool
where
    S: Slot<Container = M>,
    M: Map,
    Src: Collection<Item = M::Key>,
{
    match slot {
        Some(slot) => core_ops::remove_all_keys(slot.get(), source),
        None => false,
    }
}

/// Keep only elements also present in `source`, through the slot.
pub fn retain_all<S, C, Src>(slot: Option<&mut S>, source: Option<&Src>) -> bool
where
    S: Slot<Container = C>,
    C: Collection,
    Src: Collection<Item = C::Item>,
{
    match slot {
        Some(slot) => core_ops::retain_all(slot.get(), source),
        None => false,
    }
}

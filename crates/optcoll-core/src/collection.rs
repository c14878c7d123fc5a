//! Element-container abstraction shared by sequences and sets.
//!
//! The operations in [`crate::ops`] are generic over this trait, so the same
//! null-safety contract covers `Vec`, `VecDeque`, `HashSet` and `BTreeSet`
//! without caring which one the caller's field holds.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::Hash;

/// Common surface over growable element containers.
pub trait Collection {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert an element, reporting whether the container changed.
    /// Sequences always change; sets reject duplicates.
    fn insert(&mut self, item: Self::Item) -> bool;

    fn contains(&self, item: &Self::Item) -> bool;

    /// Remove one matching element (the first occurrence for sequences),
    /// reporting whether anything was removed.
    fn remove_item(&mut self, item: &Self::Item) -> bool;

    /// Keep only the elements `keep` accepts, reporting whether the
    /// container changed.
    fn retain_where(&mut self, keep: impl FnMut(&Self::Item) -> bool) -> bool;

    fn iter(&self) -> impl Iterator<Item = &Self::Item>;
}

impl<T: PartialEq> Collection for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn insert(&mut self, item: T) -> bool {
        self.push(item);
        true
    }

    fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }

    fn remove_item(&mut self, item: &T) -> bool {
        match self.as_slice().iter().position(|x| x == item) {
            Some(pos) => {
                self.remove(pos);
                true
            }
            None => false,
        }
    }

    fn retain_where(&mut self, keep: impl FnMut(&T) -> bool) -> bool {
        let before = Vec::len(self);
        self.retain(keep);
        Vec::len(self) != before
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }
}

impl<T: PartialEq> Collection for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn insert(&mut self, item: T) -> bool {
        self.push_back(item);
        true
    }

    fn contains(&self, item: &T) -> bool {
        VecDeque::contains(self, item)
    }

    fn remove_item(&mut self, item: &T) -> bool {
        match VecDeque::iter(self).position(|x| x == item) {
            Some(pos) => {
                self.remove(pos);
                true
            }
            None => false,
        }
    }

    fn retain_where(&mut self, keep: impl FnMut(&T) -> bool) -> bool {
        let before = VecDeque::len(self);
        self.retain(keep);
        VecDeque::len(self) != before
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        VecDeque::iter(self)
    }
}

impl<T: Eq + Hash> Collection for HashSet<T> {
    type Item = T;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn insert(&mut self, item: T) -> bool {
        HashSet::insert(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn remove_item(&mut self, item: &T) -> bool {
        HashSet::remove(self, item)
    }

    fn retain_where(&mut self, keep: impl FnMut(&T) -> bool) -> bool {
        let before = HashSet::len(self);
        self.retain(keep);
        HashSet::len(self) != before
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        HashSet::iter(self)
    }
}

impl<T: Ord> Collection for BTreeSet<T> {
    type Item = T;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn insert(&mut self, item: T) -> bool {
        BTreeSet::insert(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }

    fn remove_item(&mut self, item: &T) -> bool {
        BTreeSet::remove(self, item)
    }

    fn retain_where(&mut self, keep: impl FnMut(&T) -> bool) -> bool {
        let before = BTreeSet::len(self);
        self.retain(keep);
        BTreeSet::len(self) != before
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        BTreeSet::iter(self)
    }
}

//! Field-slot abstraction: a readable, writable location that may hold a
//! container.
//!
//! Two modelings are provided. `Option<C>` is a slot directly (the plain
//! struct-field case), and [`Accessors`] binds a getter and a setter closure
//! over an explicit owner value for fields that are only reachable through
//! accessor methods. The write side is only ever used to publish a
//! newly created container; a present container is mutated in place through
//! the read side.

use std::marker::PhantomData;

/// A logical field slot holding a container that may be absent.
pub trait Slot {
    type Container;

    /// Current value of the slot, if any.
    fn get(&mut self) -> Option<&mut Self::Container>;

    /// Publish a container as the slot's new value.
    fn set(&mut self, container: Self::Container);
}

impl<C> Slot for Option<C> {
    type Container = C;

    fn get(&mut self) -> Option<&mut C> {
        self.as_mut()
    }

    fn set(&mut self, container: C) {
        *self = Some(container);
    }
}

/// Accessor pair bound over an owner value: a read closure projecting the
/// container out of the owner and a write closure storing one back.
pub struct Accessors<'o, O, C, G, P>
where
    G: FnMut(&mut O) -> Option<&mut C>,
    P: FnMut(&mut O, C),
{
    owner: &'o mut O,
    get: G,
    put: P,
    _container: PhantomData<fn() -> C>,
}

impl<'o, O, C, G, P> Accessors<'o, O, C, G, P>
where
    G: FnMut(&mut O) -> Option<&mut C>,
    P: FnMut(&mut O, C),
{
    pub fn new(owner: &'o mut O, get: G, put: P) -> Self {
        Self {
            owner,
            get,
            put,
            _container: PhantomData,
        }
    }
}

impl<'o, O, C, G, P> Slot for Accessors<'o, O, C, G, P>
where
    G: FnMut(&mut O) -> Option<&mut C>,
    P: FnMut(&mut O, C),
{
    type Container = C;

    fn get(&mut self) -> Option<&mut C> {
        (self.get)(&mut *self.owner)
    }

    fn set(&mut self, container: C) {
        (self.put)(&mut *self.owner, container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_is_a_slot() {
        let mut field: Option<Vec<i32>> = None;
        assert!(field.get().is_none());
        field.set(vec![1]);
        assert_eq!(field.get(), Some(&mut vec![1]));
    }

    #[test]
    fn accessors_read_and_write_through_the_owner() {
        struct Bean {
            items: Option<Vec<i32>>,
        }

        let mut bean = Bean { items: None };
        let mut slot = Accessors::new(
            &mut bean,
            |b: &mut Bean| b.items.as_mut(),
            |b: &mut Bean, v: Vec<i32>| b.items = Some(v),
        );

        assert!(slot.get().is_none());
        slot.set(vec![7]);
        assert_eq!(slot.get().map(|v| v.len()), Some(1));
        assert_eq!(bean.items, Some(vec![7]));
    }
}

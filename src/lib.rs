//! optcoll - a null-safety layer over `Option`-wrapped containers.
//!
//! Callers perform membership, mutation and bulk-merge operations on
//! collections and maps that may be absent, without branching on absence
//! themselves; an absent container is materialized lazily, exactly when a
//! mutation needs one to exist. Two tiers are re-exported here:
//!
//! - the direct tier ([`ops`], [`defaults`]) takes the container itself;
//! - the slot tier ([`slot_ops`], [`slot_defaults`]) takes an accessor into
//!   a field slot instead, publishing a newly created container through the
//!   write accessor before mutating it.

pub use optcoll_core::collection::{self, Collection};
pub use optcoll_core::map::{self, Map};
pub use optcoll_core::{defaults, ops};

pub use optcoll_slot::slot::{Accessors, Slot};
pub use optcoll_slot::{defaults as slot_defaults, ops as slot_ops, slot};

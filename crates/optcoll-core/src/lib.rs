pub mod collection;
pub mod defaults;
pub mod map;
pub mod ops;

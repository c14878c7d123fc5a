pub mod defaults;
pub mod ops;
pub mod slot;

//! Item records: the store contract and its in-memory implementation.

pub mod memory;
pub mod store;

pub use memory::MemoryItemStore;
pub use store::ItemStore;

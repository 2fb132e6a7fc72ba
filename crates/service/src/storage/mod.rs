//! Storage abstractions for service layer
//!
//! Contains the in-memory map every store in this crate is built on.

pub mod map_store;

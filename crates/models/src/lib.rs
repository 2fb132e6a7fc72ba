//! Domain types shared by the store and the HTTP layer.

pub mod errors;
pub mod item;

pub use item::{Item, ItemKey, Namespace};

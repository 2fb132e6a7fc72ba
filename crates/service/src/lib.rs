//! Service layer providing the record store behind the CRUD endpoints.
//! - `storage`: generic lock-guarded map
//! - `items`: the item store trait and its in-memory implementation
//! - `metrics`: Prometheus counters for store operations

pub mod errors;
pub mod items;
pub mod metrics;
pub mod storage;

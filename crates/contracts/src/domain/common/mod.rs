//! Общие трейты агрегатов

pub mod aggregate_id;
pub mod aggregate_root;
pub mod serde_helpers;

pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;

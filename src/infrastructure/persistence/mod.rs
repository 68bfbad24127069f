//! Record store implementations.
//!
//! - [`MemoryRecordStore`] - Process-local table guarded by an async lock
//!
//! A durable datastore can stand in by implementing
//! [`crate::domain::repositories::RecordStore`] with an atomic insert.

pub mod memory_record_store;

pub use memory_record_store::MemoryRecordStore;

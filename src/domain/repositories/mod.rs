//! Storage trait definitions for the domain layer.
//!
//! Traits define the contract for data operations. Implementations live in
//! `crate::infrastructure::persistence`; mocks are generated via `mockall`.

pub mod record_store;

pub use record_store::RecordStore;

#[cfg(test)]
pub use record_store::MockRecordStore;

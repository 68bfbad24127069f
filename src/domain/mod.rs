//! Domain layer containing business entities and storage contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Allocation and orchestration live in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;

//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Recent-GIF store backends (Redis, in-memory, no-op)
//! - [`provider`] - Image provider HTTP clients

pub mod provider;
pub mod store;

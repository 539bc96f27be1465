//! Application layer services implementing business logic.
//!
//! Services consume the store and provider traits from [`crate::domain`] and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::gif_service::GifService`] - GIF selection, recording and statistics

pub mod services;

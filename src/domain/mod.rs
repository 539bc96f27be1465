//! Domain layer containing entities and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - GIF source, delivery and statistics types
//! - [`repositories`] - Store and image provider trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. The delivery flow itself lives in
//! [`crate::application::services::GifService`].

pub mod entities;
pub mod repositories;

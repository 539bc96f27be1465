//! # Cat GIF
//!
//! A random cat GIF page built with Axum, with an optional Redis-backed pool
//! of recently served GIFs and hit/miss counters.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - GIF entities and store/provider traits
//! - **Application Layer** ([`application`]) - GIF delivery flow
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis, in-memory and no-op stores; Cataas client
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - HTML page rendering
//!
//! ## Request Flow
//!
//! 1. Pop the tail of the recent-GIF list
//! 2. On a hit serve that URL, otherwise fetch one from the image provider
//! 3. Push the URL back to the head and trim the list to 10 entries
//! 4. Increment `cache_hits` or `api_calls` and render both with the list size
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::GifService;
    pub use crate::domain::entities::{GifDelivery, GifSource, GifStats, RECENT_GIFS_BOUND};
    pub use crate::domain::repositories::{GifStore, ImageProvider, ProviderError, StoreError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

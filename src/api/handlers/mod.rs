//! HTTP request handlers for JSON endpoints.

pub mod health;
pub mod stats;

pub use health::health_handler;
pub use stats::stats_handler;

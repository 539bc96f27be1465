//! Web layer serving the cat GIF page.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`error`] - HTML error pages
//! - [`routes`] - Page route configuration

pub mod error;
pub mod handlers;
pub mod routes;

//! Business logic services for the application layer.

pub mod gif_service;

pub use gif_service::GifService;

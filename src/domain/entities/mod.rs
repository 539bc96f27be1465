//! Core domain entities.

mod gif;

pub use gif::{Counter, GifDelivery, GifSource, GifStats, RECENT_GIFS_BOUND};

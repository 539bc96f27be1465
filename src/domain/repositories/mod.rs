//! Data access traits implemented by the infrastructure layer.

mod gif_store;
mod image_provider;

pub use gif_store::{GifStore, StoreError, StoreResult};
pub use image_provider::{ImageProvider, ProviderError};

#[cfg(test)]
pub use gif_store::MockGifStore;
#[cfg(test)]
pub use image_provider::MockImageProvider;

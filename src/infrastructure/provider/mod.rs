//! Image provider clients.

mod cataas;

pub use cataas::{CataasProvider, DEFAULT_CATAAS_GIF_URL};

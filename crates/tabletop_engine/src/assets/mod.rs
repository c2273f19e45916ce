//! Asset loading

pub mod image_loader;

pub use image_loader::ImageData;

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// The file could not be read or decoded
    #[error("Could not load image {path}: {source}")]
    Decode {
        /// File that failed
        path: String,
        /// Decoder error
        #[source]
        source: image::ImageError,
    },

    /// The image has a channel count other than 3 or 4
    #[error("Unsupported channel count ({0})")]
    UnsupportedChannels(u8),
}

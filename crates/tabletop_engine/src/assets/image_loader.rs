//! Image loading utilities for texture data
//!
//! Decodes image files with the `image` crate into tightly packed 8-bit RGB or
//! RGBA rows. Rows are flipped so that row 0 is the bottom of the picture,
//! which is the UV origin every authored coordinate in the scene assumes.

use std::path::Path;

use image::DynamicImage;

use crate::assets::AssetError;
use crate::render::backend::PixelFormat;

/// Loaded image data ready for GPU upload
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Pixel rows, bottom row first
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Pixel layout of `data`
    pub format: PixelFormat,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref).map_err(|source| AssetError::Decode {
            path: path_ref.display().to_string(),
            source,
        })?;

        let data = Self::from_dynamic(img)?;
        log::info!("Loaded image {}x{} from {:?}", data.width, data.height, path_ref);
        Ok(data)
    }

    /// Convert an already decoded image
    ///
    /// Only 3- and 4-channel sources are accepted; grayscale and gray+alpha
    /// images fail with [`AssetError::UnsupportedChannels`].
    pub fn from_dynamic(img: DynamicImage) -> Result<Self, AssetError> {
        let channels = img.color().channel_count();
        let format = PixelFormat::from_channels(channels)
            .ok_or(AssetError::UnsupportedChannels(channels))?;

        let flipped = img.flipv();
        let (width, height) = (flipped.width(), flipped.height());
        let data = match format {
            PixelFormat::Rgb8 => flipped.to_rgb8().into_raw(),
            PixelFormat::Rgba8 => flipped.to_rgba8().into_raw(),
        };

        Ok(Self {
            data,
            width,
            height,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, Rgb, RgbImage};

    #[test]
    fn test_rows_are_flipped_to_bottom_left_origin() {
        // Top row red, bottom row blue
        let mut source = RgbImage::new(1, 2);
        source.put_pixel(0, 0, Rgb([255, 0, 0]));
        source.put_pixel(0, 1, Rgb([0, 0, 255]));

        let img = ImageData::from_dynamic(DynamicImage::ImageRgb8(source)).unwrap();
        assert_eq!(img.format, PixelFormat::Rgb8);
        assert_eq!(&img.data[0..3], &[0, 0, 255]);
        assert_eq!(&img.data[3..6], &[255, 0, 0]);
    }

    #[test]
    fn test_one_and_two_channel_sources_are_rejected() {
        let gray = DynamicImage::ImageLuma8(GrayImage::new(2, 2));
        assert!(matches!(
            ImageData::from_dynamic(gray),
            Err(AssetError::UnsupportedChannels(1))
        ));

        let gray_alpha = DynamicImage::ImageLumaA8(GrayAlphaImage::new(2, 2));
        assert!(matches!(
            ImageData::from_dynamic(gray_alpha),
            Err(AssetError::UnsupportedChannels(2))
        ));
    }

    #[test]
    fn test_missing_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ImageData::from_file(dir.path().join("nope.png"));
        assert!(matches!(result, Err(AssetError::Decode { .. })));
    }
}

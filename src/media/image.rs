// SPDX-License-Identifier: MPL-2.0
//! Image decoding (PNG, JPEG, GIF, WebP, BMP) into renderer handles.

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;

/// A decoded image ready to draw.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Approximate decoded size in bytes (RGBA).
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Decodes encoded image bytes.
///
/// # Errors
///
/// Returns [`Error::Image`](crate::error::Error::Image) if the bytes are not a
/// supported image.
pub fn decode(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    #[test]
    fn png_bytes_decode_with_expected_dimensions() {
        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        let mut bytes = Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, ImageFormat::Png)
            .expect("failed to encode png");

        let data = decode(bytes.get_ref()).expect("png should decode");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.size_bytes(), 32);
    }

    #[test]
    fn invalid_bytes_return_image_error() {
        match decode(b"not a png") {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error, got {other:?}"),
        }
    }
}

//! # Stored Graphics
//!
//! Converts a raster image (PNG, JPEG, BMP, ...) into a `~DG` download
//! command, so a logo referenced by [`Label::image_load`] exists on the
//! printer before a label recalls it.
//!
//! ## Conversion
//!
//! ```text
//! image → optional resize to target width (aspect kept)
//!       → grayscale
//!       → threshold (luma < 128 = black)
//!       → packed rows, MSB leftmost
//!       → ~DG<reference>,<total>,<bytes_per_row>,<HEX>
//! ```
//!
//! [`Label::image_load`]: crate::label::Label::image_load

use std::path::Path;

use image::{DynamicImage, imageops::FilterType};
use tracing::debug;

use crate::error::{Result, ZebrellaError};
use crate::protocol::graphics;

/// Luma values below this print as black.
const THRESHOLD: u8 = 128;

/// A 1-bit image ready to be stored on the printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredGraphic {
    /// Printer device and file name, e.g. `E:CAI.GRF`
    pub reference: String,
    pub width: u32,
    pub height: u32,
    /// Packed rows, `bytes_per_row * height` bytes
    pub data: Vec<u8>,
}

impl StoredGraphic {
    /// Load and convert an image file.
    pub fn from_path(
        reference: impl Into<String>,
        path: impl AsRef<Path>,
        width: Option<u32>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|e| {
            ZebrellaError::Image(format!("Failed to open {}: {}", path.display(), e))
        })?;
        Ok(Self::from_image(reference, &image, width))
    }

    /// Convert an encoded image held in memory.
    pub fn from_bytes(reference: impl Into<String>, bytes: &[u8], width: Option<u32>) -> Result<Self> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| ZebrellaError::Image(format!("Failed to decode image: {}", e)))?;
        Ok(Self::from_image(reference, &image, width))
    }

    /// Convert a decoded image, optionally resized to `width` dots.
    pub fn from_image(reference: impl Into<String>, image: &DynamicImage, width: Option<u32>) -> Self {
        let image = match width {
            Some(w) if w > 0 && w != image.width() => {
                let h = ((image.height() as f64 * w as f64) / image.width() as f64)
                    .round()
                    .max(1.0) as u32;
                image.resize_exact(w, h, FilterType::Lanczos3)
            }
            _ => image.clone(),
        };
        let gray = image.to_luma8();
        let (width, height) = gray.dimensions();

        let mut data = Vec::with_capacity(bytes_per_row(width) * height as usize);
        for y in 0..height {
            let row: Vec<bool> = (0..width)
                .map(|x| gray.get_pixel(x, y)[0] < THRESHOLD)
                .collect();
            data.extend(pack_row(&row));
        }

        let reference = reference.into();
        debug!(%reference, width, height, bytes = data.len(), "Converted graphic");
        Self {
            reference,
            width,
            height,
            data,
        }
    }

    /// Packed row width in bytes.
    pub fn bytes_per_row(&self) -> usize {
        bytes_per_row(self.width)
    }

    /// The `~DG` command that stores this graphic.
    pub fn to_zpl(&self) -> String {
        graphics::download_graphic(&self.reference, self.bytes_per_row(), &self.data)
    }
}

fn bytes_per_row(width: u32) -> usize {
    (width as usize).div_ceil(8)
}

/// Pack a row of pixels into bytes (MSB first, `true` = black).
///
/// ```
/// use zebrella::graphic::pack_row;
///
/// assert_eq!(pack_row(&[true, true, true, true, false, false, false, false]), vec![0xF0]);
/// assert_eq!(pack_row(&[true; 12]), vec![0xFF, 0xF0]);
/// ```
pub fn pack_row(pixels: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; pixels.len().div_ceil(8)];
    for (i, &pixel) in pixels.iter().enumerate() {
        if pixel {
            bytes[i / 8] |= 1 << (7 - (i % 8));
        }
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn checker(width: u32, height: u32) -> DynamicImage {
        let mut img = GrayImage::from_pixel(width, height, Luma([255]));
        for y in 0..height {
            for x in 0..width {
                if (x + y) % 2 == 0 {
                    img.put_pixel(x, y, Luma([0]));
                }
            }
        }
        DynamicImage::ImageLuma8(img)
    }

    #[test]
    fn test_checkerboard_packing() {
        let graphic = StoredGraphic::from_image("E:CHK.GRF", &checker(8, 2), None);
        assert_eq!(graphic.width, 8);
        assert_eq!(graphic.height, 2);
        assert_eq!(graphic.data, vec![0xAA, 0x55]);
        assert_eq!(graphic.to_zpl(), "~DGE:CHK.GRF,2,1,AA55");
    }

    #[test]
    fn test_row_padding() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(10, 3, Luma([0])));
        let graphic = StoredGraphic::from_image("E:PAD.GRF", &img, None);
        assert_eq!(graphic.bytes_per_row(), 2);
        assert_eq!(graphic.data, vec![0xFF, 0xC0, 0xFF, 0xC0, 0xFF, 0xC0]);
    }

    #[test]
    fn test_resize_keeps_aspect() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(100, 50, Luma([255])));
        let graphic = StoredGraphic::from_image("E:R.GRF", &img, Some(40));
        assert_eq!((graphic.width, graphic.height), (40, 20));
        assert!(graphic.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = StoredGraphic::from_bytes("E:X.GRF", b"not an image", None).unwrap_err();
        assert!(matches!(err, ZebrellaError::Image(_)));
    }

    #[test]
    fn test_from_bytes_png_round() {
        let mut png = Vec::new();
        checker(16, 1)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        let graphic = StoredGraphic::from_bytes("E:P.GRF", &png, None).unwrap();
        assert_eq!(graphic.data, vec![0xAA, 0xAA]);
    }
}

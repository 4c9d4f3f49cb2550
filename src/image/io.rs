//! I/O helpers for grayscale images and JSON.
//!
//! - `load_grayscale_image`: decode a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `save_normalized_f32`: write a signed float image (band-pass, Laplacian)
//!   to PNG after min–max normalization.
//! - `save_grayscale_u8`: write an owned 8-bit gray buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, ImageU8, ImageView};
use crate::error::{EdgelError, Result};
use image::{GrayImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            stride: width,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Write a pixel; coordinates outside the image are ignored.
    #[inline]
    pub fn put(&mut self, x: i64, y: i64, v: u8) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.data[y as usize * self.stride + x as usize] = v;
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
///
/// Decode failures surface as [`EdgelError::ImageLoad`]; a decodable but empty
/// image is returned as-is and rejected later as `InvalidImage`.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8> {
    let img = image::open(path)
        .map_err(|source| EdgelError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(GrayImageU8::new(width, height, data))
}

/// Min–max normalize a float image into 8-bit. A constant image maps to 0.
pub fn normalize_to_u8(image: &ImageF32) -> GrayImageU8 {
    let (lo, hi) = image.min_max().unwrap_or((0.0, 0.0));
    let range = hi - lo;
    let scale = if range > f32::EPSILON { 255.0 / range } else { 0.0 };
    let mut data = Vec::with_capacity(image.w * image.h);
    for row in image.rows() {
        data.extend(
            row.iter()
                .map(|&v| ((v - lo) * scale).round().clamp(0.0, 255.0) as u8),
        );
    }
    GrayImageU8::new(image.w, image.h, data)
}

/// Save a signed float image to a grayscale PNG using min–max normalization.
pub fn save_normalized_f32(image: &ImageF32, path: &Path) -> Result<()> {
    save_grayscale_u8(&normalize_to_u8(image), path)
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut packed = Vec::with_capacity(buffer.width * buffer.height);
    for row in buffer.as_view().rows() {
        packed.extend_from_slice(row);
    }
    let image: GrayImage =
        ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(buffer.width as u32, buffer.height as u32, packed)
            .ok_or_else(|| EdgelError::invalid_image("buffer does not match its dimensions"))?;
    image.save(path).map_err(|source| EdgelError::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| EdgelError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| EdgelError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

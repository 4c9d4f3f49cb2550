use crate::error::{EdgelError, Result};

/// Borrowed 8-bit grayscale view; the pipeline's input type.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // elements between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view (`stride == w`).
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Reject empty views and buffers too short for the declared geometry.
    pub fn validate(&self) -> Result<()> {
        if self.w == 0 || self.h == 0 {
            return Err(EdgelError::invalid_image(format!(
                "empty image ({}x{})",
                self.w, self.h
            )));
        }
        if self.stride < self.w {
            return Err(EdgelError::invalid_image(format!(
                "stride {} smaller than width {}",
                self.stride, self.w
            )));
        }
        let needed = (self.h - 1) * self.stride + self.w;
        if self.data.len() < needed {
            return Err(EdgelError::invalid_image(format!(
                "buffer holds {} bytes, {}x{} with stride {} needs {needed}",
                self.data.len(),
                self.w,
                self.h,
                self.stride
            )));
        }
        Ok(())
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

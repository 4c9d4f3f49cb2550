//! Separable filters: the fixed binomial used by the pyramid and the sampled
//! Gaussian used to smooth the input.
//!
//! All passes clamp indices at the border (replicate).
use super::options::BlurParams;
use crate::error::{EdgelError, Result};
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to be
    /// symmetric around its centre, but the implementation does not rely on it.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        GAUSSIAN_5TAP
    }
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.0625, 0.25, 0.375, 0.25, 0.0625]);

/// Sampled, normalised Gaussian of odd length.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    taps: Vec<f32>,
    sigma: f32,
}

impl GaussianKernel {
    /// Build a kernel of `kernel_size` taps.
    ///
    /// A non-positive `sigma` is derived from the size as
    /// `0.3 * ((k - 1) * 0.5 - 1) + 0.8`.
    pub fn new(kernel_size: usize, sigma: f32) -> Result<Self> {
        if kernel_size == 0 || kernel_size % 2 == 0 {
            return Err(EdgelError::primitive(
                "gaussian_blur",
                format!("kernel size must be odd and positive, got {kernel_size}"),
            ));
        }
        if !sigma.is_finite() {
            return Err(EdgelError::primitive(
                "gaussian_blur",
                format!("sigma must be finite, got {sigma}"),
            ));
        }
        let sigma = if sigma > 0.0 {
            sigma
        } else {
            0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
        };
        let radius = (kernel_size / 2) as f32;
        let denom = 2.0 * sigma * sigma;
        let mut taps: Vec<f32> = (0..kernel_size)
            .map(|k| {
                let d = k as f32 - radius;
                (-(d * d) / denom).exp()
            })
            .collect();
        let sum: f32 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }
        Ok(Self { taps, sigma })
    }

    /// Effective sigma after the non-positive fallback.
    pub fn sigma(&self) -> f32 {
        self.sigma
    }
}

impl SeparableFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Convolve `src` with `filter` along x then y. Output has the same size.
pub fn apply<F: SeparableFilter + ?Sized>(filter: &F, src: &ImageF32) -> ImageF32 {
    let (w, h) = src.dims();
    let mut out = ImageF32::new(w, h);
    if src.is_empty() {
        return out;
    }
    let taps = filter.taps();
    let radius = taps.len() / 2;

    let mut tmp = ImageF32::new(w, h);
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = tmp.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - radius as isize, w);
                acc += tap * src_row[sx];
            }
            *dst_px = acc;
        }
    }

    for y in 0..h {
        let dst_row = out.row_mut(y);
        for (k, &tap) in taps.iter().enumerate() {
            let sy = clamp_index(y as isize + k as isize - radius as isize, h);
            let src_row = tmp.row(sy);
            for (dst_px, &s) in dst_row.iter_mut().zip(src_row) {
                *dst_px += tap * s;
            }
        }
    }
    out
}

/// Smooth `src` with a sampled Gaussian of `params.kernel_size` taps.
pub fn gaussian_blur(src: &ImageF32, params: &BlurParams) -> Result<ImageF32> {
    let kernel = GaussianKernel::new(params.kernel_size, params.sigma)?;
    Ok(apply(&kernel, src))
}

#[inline]
pub(crate) fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 || idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}

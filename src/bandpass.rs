//! Band-pass image from a Gaussian pyramid.
//!
//! `S = B - expand(reduce(B))`: the blurred input minus its level-1
//! reconstruction, upsampled back to the input's exact size. `S` is signed.
//! Levels beyond 1 are built (the default pyramid has 4 levels) and kept on
//! the result for diagnostics, but do not contribute to `S`.
use crate::error::{EdgelError, Result};
use crate::image::{ImageF32, ImageView, ImageViewMut};
use crate::pyramid::{upsample_to, Pyramid, PyramidOptions};
use log::debug;

/// Output of [`build_bandpass`].
#[derive(Clone, Debug)]
pub struct BandPass {
    /// Signed band-pass response, same size as the pyramid base.
    pub image: ImageF32,
    /// The pyramid the response was built from; `levels[0]` is the input.
    pub pyramid: Pyramid,
}

impl BandPass {
    /// The blurred input the band-pass was computed from.
    pub fn base(&self) -> &ImageF32 {
        &self.pyramid.levels[0]
    }
}

/// Build the band-pass image of an already blurred image.
pub fn build_bandpass(blurred: ImageF32, options: PyramidOptions) -> Result<BandPass> {
    if options.levels < 2 {
        return Err(EdgelError::primitive(
            "bandpass",
            format!("needs at least 2 pyramid levels, got {}", options.levels),
        ));
    }
    let pyramid = Pyramid::build_f32(blurred, options)?;
    let base = &pyramid.levels[0];
    let coarse = &pyramid.levels[1];
    debug!(
        "bandpass: pyramid {:?}",
        pyramid.levels.iter().map(|l| l.dims()).collect::<Vec<_>>()
    );

    let interpolated = upsample_to(coarse, base.w, base.h)?;
    let image = subtract(base, &interpolated)?;
    Ok(BandPass { image, pyramid })
}

/// Pixelwise `a - b`; dimensions must match.
pub fn subtract(a: &ImageF32, b: &ImageF32) -> Result<ImageF32> {
    if a.dims() != b.dims() {
        return Err(EdgelError::primitive(
            "subtract",
            format!("size mismatch {:?} vs {:?}", a.dims(), b.dims()),
        ));
    }
    let mut out = ImageF32::new(a.w, a.h);
    for y in 0..a.h {
        let dst = out.row_mut(y);
        for ((d, &x), &z) in dst.iter_mut().zip(a.row(y)).zip(b.row(y)) {
            *d = x - z;
        }
    }
    Ok(out)
}

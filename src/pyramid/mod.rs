//! Gaussian pyramid primitives: anti-aliased 2× reduction and exact-size 2×
//! expansion, plus the separable filters they are built from.
//!
//! Level 0 is whatever the caller passes in (the blurred input in the edgel
//! pipeline). Each further level applies the 5-tap binomial
//! `[1, 4, 6, 4, 1] / 16` and keeps every other sample, so a `w × h` level
//! reduces to `ceil(w/2) × ceil(h/2)`. Borders clamp (replicate).

pub mod filters;
pub mod options;
mod pyramidbuild;
mod upsample;

pub use filters::{
    gaussian_blur, GaussianKernel, SeparableFilter, StaticSeparableFilter, GAUSSIAN_5TAP,
};
pub use options::{BlurParams, PyramidOptions};
pub use pyramidbuild::{downsample, Pyramid};
pub use upsample::upsample_to;

use super::filters::{SeparableFilter, StaticSeparableFilter, GAUSSIAN_5TAP};

use serde::{Deserialize, Serialize};

/// Options controlling pyramid construction.
#[derive(Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct PyramidOptions {
    /// Number of pyramid levels including the full-resolution level 0.
    pub levels: usize,
    /// Anti-aliasing filter applied before every 2× decimation.
    #[serde(skip)]
    pub filter: StaticSeparableFilter,
}

impl Default for PyramidOptions {
    fn default() -> Self {
        Self::new(4)
    }
}

impl PyramidOptions {
    pub fn new(levels: usize) -> Self {
        Self {
            levels,
            filter: GAUSSIAN_5TAP,
        }
    }

    pub fn with_filter(mut self, filter: StaticSeparableFilter) -> Self {
        self.filter = filter;
        self
    }
}

impl std::fmt::Debug for PyramidOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PyramidOptions")
            .field("levels", &self.levels)
            .field("filter_taps", &self.filter.taps().len())
            .finish()
    }
}

/// Gaussian smoothing applied to the input before the pyramid is built.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BlurParams {
    /// Odd number of taps per axis.
    pub kernel_size: usize,
    /// Standard deviation in pixels; `<= 0` derives it from `kernel_size`.
    pub sigma: f32,
}

impl Default for BlurParams {
    fn default() -> Self {
        Self {
            kernel_size: 5,
            sigma: 1.0,
        }
    }
}

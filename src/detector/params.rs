//! Parameters of the edgel pipeline.
//!
//! Defaults: a 5×5 Gaussian with sigma 1, a 4-level pyramid (three
//! reductions) and the 4-neighbour Laplacian.

use crate::edges::LaplacianKernel;
use crate::pyramid::BlurParams;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgelParams {
    /// Smoothing applied to the input before the pyramid.
    pub blur: BlurParams,
    /// Pyramid levels including level 0 (>= 2, level 1 feeds the band-pass).
    pub pyramid_levels: usize,
    /// Stencil of the Laplacian taken on the band-pass image.
    pub laplacian: LaplacianKernel,
    /// Split the quad scan across threads. Needs the `parallel` feature;
    /// ignored otherwise. Output is identical either way.
    pub parallel_scan: bool,
}

impl Default for EdgelParams {
    fn default() -> Self {
        Self {
            blur: BlurParams::default(),
            pyramid_levels: 4,
            laplacian: LaplacianKernel::FourNeighbour,
            parallel_scan: false,
        }
    }
}

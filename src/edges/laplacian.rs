//! Discrete Laplacian of a single-channel float image.
//!
//! - Convolves a 3×3 kernel with border clamping (replicate).
//! - Output has the input's dimensions and is signed; its zero crossings mark
//!   the band-pass edges.
use crate::image::{ImageF32, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

type Kernel3 = [[f32; 3]; 3];

const FOUR_NEIGHBOUR_KERNEL: Kernel3 = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];
const EIGHT_NEIGHBOUR_KERNEL: Kernel3 = [[1.0, 1.0, 1.0], [1.0, -8.0, 1.0], [1.0, 1.0, 1.0]];

/// Stencil used for the second-derivative response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaplacianKernel {
    /// `[0 1 0; 1 -4 1; 0 1 0]`
    #[default]
    FourNeighbour,
    /// `[1 1 1; 1 -8 1; 1 1 1]`
    EightNeighbour,
}

impl LaplacianKernel {
    fn weights(self) -> &'static Kernel3 {
        match self {
            Self::FourNeighbour => &FOUR_NEIGHBOUR_KERNEL,
            Self::EightNeighbour => &EIGHT_NEIGHBOUR_KERNEL,
        }
    }
}

/// Compute the Laplacian of `l` with the selected stencil.
pub fn laplacian(l: &ImageF32, kernel: LaplacianKernel) -> ImageF32 {
    let w = l.w;
    let h = l.h;
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    let k = kernel.weights();

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let dst = out.row_mut(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut acc = 0.0;
            for (row, k_row) in rows.iter().zip(k) {
                acc += row[x_idx[0]] * k_row[0]
                    + row[x_idx[1]] * k_row[1]
                    + row[x_idx[2]] * k_row[2];
            }
            *px = acc;
        }
    }
    out
}

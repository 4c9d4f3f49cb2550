//! Zero-crossing edgels: the Laplacian operator, the quad scan and the
//! [`Edgel`] value it produces.
//!
//! Coordinates follow the pixel-centre convention: sample `(row, col)` sits at
//! `[x, y] = [col, row]`. Crossing points therefore land on half-integer
//! positions between sample centres.

pub mod edgel;
pub mod laplacian;
pub mod zero_crossing;

pub use edgel::Edgel;
pub use laplacian::{laplacian, LaplacianKernel};
#[cfg(feature = "parallel")]
pub use zero_crossing::{extract_edgels_par, scan_zero_crossings_par};
pub use zero_crossing::{
    extract_edgels, is_sign_change, scan_quad, scan_zero_crossings, Quad, QuadCrossings,
    QuadEdge, ScanStats, ZeroCrossingScan,
};

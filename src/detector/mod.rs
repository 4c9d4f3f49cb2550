//! End-to-end edgel detector.
//!
//! Pipeline
//! - Convert 8-bit gray to `[0, 1]` floats and smooth with a Gaussian.
//! - Build a Gaussian pyramid and subtract the upsampled level 1 from the
//!   blurred image to obtain the signed band-pass image `S`.
//! - Take the Laplacian of `S` and scan its 2×2 quads for zero crossings;
//!   each quad with exactly two crossings contributes one [`Edgel`].
//!
//! Every stage is timed and logged at `debug` level.
//!
//! [`Edgel`]: crate::edges::Edgel

pub mod params;
mod pipeline;

pub use params::EdgelParams;
pub use pipeline::{EdgelDetection, EdgelDetector};

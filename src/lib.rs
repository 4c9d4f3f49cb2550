#![doc = include_str!("../README.md")]

// Public modules
pub mod bandpass;
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod overlay;

// Building blocks: numeric primitives and the quad scan.
pub mod edges;
pub mod pyramid;

// --- High-level re-exports -------------------------------------------------

pub use crate::bandpass::{build_bandpass, BandPass};
pub use crate::detector::{EdgelDetection, EdgelDetector, EdgelParams};
pub use crate::edges::{extract_edgels, Edgel};
pub use crate::error::{EdgelError, Result};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use bandpass_edgels::prelude::*;
///
/// # fn main() -> Result<(), EdgelError> {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let det = EdgelDetector::new(EdgelParams::default());
/// let out = det.process(img)?;
/// println!("edgels={} total_ms={:.3}", out.edgels.len(), out.timing.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageU8};
    pub use crate::{Edgel, EdgelDetector, EdgelError, EdgelParams};
}

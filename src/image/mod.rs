//! Image containers and file I/O.
//!
//! - [`ImageU8`]: borrowed 8-bit grayscale view with an element stride.
//! - [`ImageF32`]: owned float buffer used for every intermediate of the
//!   pipeline (blurred, pyramid levels, band-pass, Laplacian).
//! - [`io`]: decode to gray, save PNGs, write JSON.
pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;

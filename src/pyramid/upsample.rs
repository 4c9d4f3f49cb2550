//! 2× pyramid expansion to an exact target size.
//!
//! Equivalent to inserting zeros between samples and convolving with the
//! 5-tap binomial scaled by 4. Per axis this reduces to:
//! - even output `2i`: `(s[i-1] + 6 s[i] + s[i+1]) / 8`
//! - odd output `2i+1`: `(s[i] + s[i+1]) / 2`
//!
//! The even case is evaluated as `s[i] + (s[i-1] - 2 s[i] + s[i+1]) / 8` so a
//! flat level expands to exactly the same constant. Source indices clamp at
//! the border.
use super::filters::clamp_index;
use crate::error::{EdgelError, Result};
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Upsample `src` to `width × height`.
///
/// The target must be a valid 2× expansion of the source on both axes, i.e.
/// `ceil(width / 2) == src.w` and `ceil(height / 2) == src.h`. This covers the
/// odd sizes produced by [`super::downsample`].
pub fn upsample_to(src: &ImageF32, width: usize, height: usize) -> Result<ImageF32> {
    if src.is_empty() {
        return Err(EdgelError::invalid_image(format!(
            "cannot upsample an empty level ({}x{})",
            src.w, src.h
        )));
    }
    if width.div_ceil(2) != src.w || height.div_ceil(2) != src.h {
        return Err(EdgelError::primitive(
            "upsample",
            format!(
                "target {width}x{height} is not a 2x expansion of {}x{}",
                src.w, src.h
            ),
        ));
    }

    let mut horiz = ImageF32::new(width, src.h);
    for y in 0..src.h {
        upsample_line(src.row(y), horiz.row_mut(y));
    }

    let mut out = ImageF32::new(width, height);
    let n = src.h;
    for y in 0..height {
        let i = y / 2;
        let dst = out.row_mut(y);
        if y % 2 == 0 {
            let above = horiz.row(clamp_index(i as isize - 1, n));
            let center = horiz.row(i);
            let below = horiz.row(clamp_index(i as isize + 1, n));
            for (x, px) in dst.iter_mut().enumerate() {
                *px = center[x] + (above[x] - 2.0 * center[x] + below[x]) * 0.125;
            }
        } else {
            let center = horiz.row(i);
            let below = horiz.row(clamp_index(i as isize + 1, n));
            for (x, px) in dst.iter_mut().enumerate() {
                *px = (center[x] + below[x]) * 0.5;
            }
        }
    }
    Ok(out)
}

fn upsample_line(src: &[f32], dst: &mut [f32]) {
    let n = src.len();
    for (x, px) in dst.iter_mut().enumerate() {
        let i = x / 2;
        let next = src[clamp_index(i as isize + 1, n)];
        *px = if x % 2 == 0 {
            src[i] + (src[clamp_index(i as isize - 1, n)] - 2.0 * src[i] + next) * 0.125
        } else {
            (src[i] + next) * 0.5
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_has_exact_target_size() {
        let src = ImageF32::from_fn(4, 3, |x, y| (x * y) as f32);
        assert_eq!(upsample_to(&src, 8, 6).unwrap().dims(), (8, 6));
        assert_eq!(upsample_to(&src, 7, 5).unwrap().dims(), (7, 5));
    }

    #[test]
    fn incompatible_target_is_rejected() {
        let src = ImageF32::new(4, 3);
        assert!(matches!(
            upsample_to(&src, 10, 6),
            Err(EdgelError::PrimitiveFailure { .. })
        ));
        assert!(upsample_to(&src, 8, 4).is_err());
    }

    #[test]
    fn constant_level_reconstructs_constant() {
        let src = ImageF32::from_fn(3, 3, |_, _| 0.4);
        let up = upsample_to(&src, 5, 6).unwrap();
        assert!(up.data.iter().all(|v| (v - 0.4).abs() < 1e-6));
    }

    #[test]
    fn interior_of_a_ramp_is_interpolated_linearly() {
        let src = ImageF32::from_fn(5, 1, |x, _| x as f32);
        let up = upsample_to(&src, 10, 2).unwrap();
        // even samples of a linear ramp keep their value, odd ones sit halfway
        assert!((up.get(4, 0) - 2.0).abs() < 1e-6);
        assert!((up.get(5, 0) - 2.5).abs() < 1e-6);
    }
}

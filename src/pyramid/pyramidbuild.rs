use super::filters::{clamp_index, SeparableFilter, StaticSeparableFilter};
use super::options::PyramidOptions;
use crate::error::{EdgelError, Result};
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Gaussian pyramid; `levels[0]` is the (already blurred) input.
#[derive(Clone, Debug, Default)]
pub struct Pyramid {
    pub levels: Vec<ImageF32>,
}

impl Pyramid {
    /// Build `options.levels` levels, each the anti-aliased half of the previous.
    pub fn build_f32(image: ImageF32, options: PyramidOptions) -> Result<Self> {
        if options.levels == 0 {
            return Err(EdgelError::primitive(
                "pyramid",
                "pyramid requires at least one level",
            ));
        }
        if image.is_empty() {
            return Err(EdgelError::invalid_image(format!(
                "pyramid base is empty ({}x{})",
                image.w, image.h
            )));
        }
        let mut levels = Vec::with_capacity(options.levels);
        levels.push(image);

        let mut horiz_cache = Vec::new();
        let mut cached_rows = Vec::new();
        for _ in 1..options.levels {
            let prev = levels.last().expect("previous level available");
            let (nw, nh) = (prev.w.div_ceil(2), prev.h.div_ceil(2));
            let mut down = ImageF32::new(nw, nh);
            downsample_with_filter(
                prev,
                &mut down,
                options.filter,
                &mut horiz_cache,
                &mut cached_rows,
            );
            levels.push(down);
        }

        Ok(Self { levels })
    }

    pub fn level(&self, index: usize) -> Option<&ImageF32> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Blur with `filter` and keep every other sample: `ceil(w/2) × ceil(h/2)`.
pub fn downsample(src: &ImageF32, filter: StaticSeparableFilter) -> ImageF32 {
    let mut dst = ImageF32::new(src.w.div_ceil(2), src.h.div_ceil(2));
    downsample_with_filter(src, &mut dst, filter, &mut Vec::new(), &mut Vec::new());
    dst
}

fn downsample_with_filter(
    src: &ImageF32,
    dst: &mut ImageF32,
    filter: StaticSeparableFilter,
    horiz_cache: &mut Vec<f32>,
    cached_rows: &mut Vec<isize>,
) {
    if src.is_empty() || dst.is_empty() {
        return;
    }
    let taps = filter.taps();
    assert!(
        !taps.is_empty(),
        "filter must provide at least one tap for downsampling"
    );
    let radius = taps.len() / 2;
    let taps_len = taps.len();
    let cache_width = dst.w;

    horiz_cache.clear();
    horiz_cache.resize(cache_width * taps_len, 0.0);
    cached_rows.clear();
    cached_rows.resize(taps_len, -1);

    for y in 0..dst.h {
        let center_sy = (y * 2) as isize;
        for ky in 0..taps_len {
            let offset = ky as isize - radius as isize;
            let sy = clamp_index(center_sy + offset, src.h) as isize;
            if cached_rows[ky] != sy {
                let src_row = src.row(sy as usize);
                let cache_row = &mut horiz_cache[ky * cache_width..(ky + 1) * cache_width];
                filter_row_downsample(src_row, cache_row, taps, radius);
                cached_rows[ky] = sy;
            }
        }
        let dst_row = dst.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (ky, &tap) in taps.iter().enumerate() {
                acc += tap * horiz_cache[ky * cache_width + x];
            }
            *dst_px = acc;
        }
    }
}

fn filter_row_downsample(row: &[f32], out: &mut [f32], taps: &[f32], radius: usize) {
    if row.is_empty() || out.is_empty() {
        return;
    }
    let max_x = row.len();
    let mut sx = 0isize;
    for dst_px in out {
        let mut acc = 0.0f32;
        for (k, &tap) in taps.iter().enumerate() {
            let offset = k as isize - radius as isize;
            acc += tap * row[clamp_index(sx + offset, max_x)];
        }
        *dst_px = acc;
        sx = sx.saturating_add(2);
    }
}

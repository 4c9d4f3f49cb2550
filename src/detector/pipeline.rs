use super::params::EdgelParams;
use crate::bandpass::{build_bandpass, BandPass};
use crate::diagnostics::TimingBreakdown;
use crate::edges::{laplacian, scan_zero_crossings, Edgel, ScanStats, ZeroCrossingScan};
use crate::error::Result;
use crate::image::{ImageF32, ImageU8};
use crate::pyramid::{gaussian_blur, PyramidOptions};
use log::{debug, info};
use std::time::Instant;

/// Everything produced by one run; intermediates are kept for presentation.
#[derive(Clone, Debug)]
pub struct EdgelDetection {
    pub bandpass: BandPass,
    pub laplacian: ImageF32,
    pub edgels: Vec<Edgel>,
    pub stats: ScanStats,
    pub timing: TimingBreakdown,
}

/// Band-pass zero-crossing edgel detector.
#[derive(Clone, Debug, Default)]
pub struct EdgelDetector {
    params: EdgelParams,
}

impl EdgelDetector {
    pub fn new(params: EdgelParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EdgelParams {
        &self.params
    }

    /// Run the full pipeline on an 8-bit grayscale image.
    pub fn process(&self, gray: ImageU8<'_>) -> Result<EdgelDetection> {
        let start = Instant::now();
        gray.validate()?;
        let mut timing = TimingBreakdown::default();
        let base = timing.time("convert_l0", || ImageF32::from_u8_unit(&gray));
        let blurred = timing.time("blur", || gaussian_blur(&base, &self.params.blur))?;
        debug!(
            "EdgelDetector::process {}x{} blurred (k={}, sigma={})",
            gray.w, gray.h, self.params.blur.kernel_size, self.params.blur.sigma
        );
        self.finish(blurred, timing, start)
    }

    /// Run from an image that is already smoothed, skipping conversion and blur.
    pub fn process_blurred(&self, blurred: ImageF32) -> Result<EdgelDetection> {
        self.finish(blurred, TimingBreakdown::default(), Instant::now())
    }

    fn finish(
        &self,
        blurred: ImageF32,
        mut timing: TimingBreakdown,
        start: Instant,
    ) -> Result<EdgelDetection> {
        let options = PyramidOptions::new(self.params.pyramid_levels);
        let bandpass = timing.time("bandpass", || build_bandpass(blurred, options))?;
        let lap = timing.time("laplacian", || {
            laplacian(&bandpass.image, self.params.laplacian)
        });
        let scan = timing.time("zero_crossings", || self.scan(&lap));
        timing.total_ms = start.elapsed().as_secs_f64() * 1000.0;

        debug!(
            "EdgelDetector::process scanned {} quads, histogram {:?}",
            scan.stats.quads, scan.stats.crossing_histogram
        );
        if scan.stats.ambiguous_quads() > 0 {
            debug!(
                "EdgelDetector::process dropped {} quads with more than two crossings",
                scan.stats.ambiguous_quads()
            );
        }
        info!(
            "extracted {} edgels in {:.3} ms",
            scan.edgels.len(),
            timing.total_ms
        );

        Ok(EdgelDetection {
            bandpass,
            laplacian: lap,
            edgels: scan.edgels,
            stats: scan.stats,
            timing,
        })
    }

    #[cfg(feature = "parallel")]
    fn scan(&self, field: &ImageF32) -> ZeroCrossingScan {
        if self.params.parallel_scan {
            crate::edges::scan_zero_crossings_par(field)
        } else {
            scan_zero_crossings(field)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn scan(&self, field: &ImageF32) -> ZeroCrossingScan {
        if self.params.parallel_scan {
            debug!("parallel scan requested without the `parallel` feature; scanning serially");
        }
        scan_zero_crossings(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EdgelError;

    fn disk(w: usize, h: usize, r: f32) -> Vec<u8> {
        let (cx, cy) = (w as f32 / 2.0, h as f32 / 2.0);
        let mut out = vec![30u8; w * h];
        for y in 0..h {
            for x in 0..w {
                let (dx, dy) = (x as f32 - cx, y as f32 - cy);
                if dx * dx + dy * dy <= r * r {
                    out[y * w + x] = 220;
                }
            }
        }
        out
    }

    #[test]
    fn disk_produces_edgels_with_consistent_outputs() {
        let data = disk(48, 40, 10.0);
        let det = EdgelDetector::default()
            .process(ImageU8::packed(48, 40, &data))
            .unwrap();
        assert_eq!(det.bandpass.image.dims(), (48, 40));
        assert_eq!(det.laplacian.dims(), (48, 40));
        assert!(!det.edgels.is_empty());
        assert_eq!(det.stats.quads, 47 * 39);
        assert_eq!(det.stats.edgel_quads(), det.edgels.len());
        let labels: Vec<_> = det.timing.stages.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            ["convert_l0", "blur", "bandpass", "laplacian", "zero_crossings"]
        );
    }

    #[test]
    fn flat_image_has_no_edgels() {
        let data = vec![128u8; 32 * 32];
        let det = EdgelDetector::default()
            .process(ImageU8::packed(32, 32, &data))
            .unwrap();
        assert!(det.edgels.is_empty());
    }

    #[test]
    fn empty_image_is_invalid() {
        let err = EdgelDetector::default()
            .process(ImageU8::packed(0, 0, &[]))
            .unwrap_err();
        assert!(matches!(err, EdgelError::InvalidImage { .. }));
    }

    #[test]
    fn bad_blur_kernel_is_a_primitive_failure() {
        let data = vec![0u8; 16];
        let params = EdgelParams {
            blur: crate::pyramid::BlurParams {
                kernel_size: 4,
                sigma: 1.0,
            },
            ..Default::default()
        };
        let err = EdgelDetector::new(params)
            .process(ImageU8::packed(4, 4, &data))
            .unwrap_err();
        assert!(matches!(err, EdgelError::PrimitiveFailure { .. }));
    }

    #[test]
    fn process_blurred_matches_scan_of_bandpass_laplacian() {
        let blurred = ImageF32::from_fn(20, 18, |x, y| {
            if (x / 5 + y / 6) % 2 == 0 {
                0.2
            } else {
                0.8
            }
        });
        let det = EdgelDetector::default().process_blurred(blurred).unwrap();
        let again = scan_zero_crossings(&det.laplacian);
        assert_eq!(again.edgels, det.edgels);
        assert_eq!(again.stats, det.stats);
    }
}

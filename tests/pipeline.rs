mod common;

use bandpass_edgels::edges::{laplacian, scan_zero_crossings, LaplacianKernel};
use bandpass_edgels::image::{ImageF32, ImageU8};
use bandpass_edgels::{EdgelDetector, EdgelError, EdgelParams};
use common::synthetic_image::{checkerboard_u8, disk_u8, vertical_step_u8};
use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn bandpass_and_laplacian_keep_input_dimensions() {
    init_logging();
    let det = EdgelDetector::default();
    for (w, h) in [(64usize, 48usize), (33, 17), (5, 3), (2, 2)] {
        let buffer = checkerboard_u8(w, h, 4);
        let out = det.process(ImageU8::packed(w, h, &buffer)).unwrap();
        assert_eq!(out.bandpass.image.dims(), (w, h));
        assert_eq!(out.laplacian.dims(), (w, h));
        assert_eq!(out.stats.quads, (w - 1) * (h - 1));
    }
}

#[test]
fn uniform_image_yields_no_edgels() {
    init_logging();
    let buffer = vec![90u8; 40 * 30];
    let out = EdgelDetector::default()
        .process(ImageU8::packed(40, 30, &buffer))
        .unwrap();
    assert!(out.edgels.is_empty());
    assert_eq!(out.stats.crossing_histogram[2], 0);
}

#[test]
fn vertical_step_produces_vertical_unit_edgels_near_the_boundary() {
    init_logging();
    let (w, h) = (32usize, 24usize);
    let buffer = vertical_step_u8(w, h, 16);
    let out = EdgelDetector::default()
        .process(ImageU8::packed(w, h, &buffer))
        .unwrap();

    assert!(!out.edgels.is_empty());
    // every row of a column-constant field is identical, so each crossing
    // column contributes one edgel per quad row
    assert_eq!(out.edgels.len() % (h - 1), 0);
    for e in &out.edgels {
        assert!((e.orientation() - FRAC_PI_2).abs() < 1e-6);
        assert_eq!(e.gradient_magnitude(), 1.0);
        assert_eq!(e.endpoint1()[0], e.endpoint2()[0]);
        assert_eq!(e.endpoint1()[0].fract(), 0.5);
    }
    assert!(
        out.edgels
            .iter()
            .any(|e| (13.5..=17.5).contains(&e.midpoint()[0])),
        "expected a crossing column near x=15.5"
    );
}

#[test]
fn edgel_geometry_is_consistent_on_a_disk() {
    init_logging();
    let (w, h) = (64usize, 64usize);
    let buffer = disk_u8(w, h, 14.0);
    let out = EdgelDetector::default()
        .process(ImageU8::packed(w, h, &buffer))
        .unwrap();
    assert!(!out.edgels.is_empty());
    assert_eq!(out.stats.edgel_quads(), out.edgels.len());

    let mut last_anchor = (0usize, 0usize);
    for e in &out.edgels {
        let [x1, y1] = e.endpoint1();
        let [x2, y2] = e.endpoint2();
        let (dx, dy) = (x2 - x1, y2 - y1);
        // crossings of one unit quad: opposite sides are 1 apart, adjacent ones √½
        let m = e.gradient_magnitude();
        assert!(
            (m - 1.0).abs() < 1e-6 || (m - FRAC_1_SQRT_2).abs() < 1e-6,
            "unexpected magnitude {m}"
        );
        assert!((m - (dx * dx + dy * dy).sqrt()).abs() < 1e-6);
        assert!(e.orientation() > -PI && e.orientation() <= PI);
        assert!((e.orientation() - dy.atan2(dx)).abs() < 1e-6);
        assert_eq!(e.midpoint(), [(x1 + x2) * 0.5, (y1 + y2) * 0.5]);

        // recover the quad anchor and check row-major order
        let anchor = (y1.min(y2).floor() as usize, x1.min(x2).floor() as usize);
        assert!(anchor >= last_anchor, "{anchor:?} after {last_anchor:?}");
        last_anchor = anchor;
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    init_logging();
    let buffer = disk_u8(50, 40, 11.0);
    let det = EdgelDetector::default();
    let a = det.process(ImageU8::packed(50, 40, &buffer)).unwrap();
    let b = det.process(ImageU8::packed(50, 40, &buffer)).unwrap();
    assert_eq!(a.edgels, b.edgels);
    assert_eq!(
        serde_json::to_string(&a.edgels).unwrap(),
        serde_json::to_string(&b.edgels).unwrap()
    );
}

#[test]
fn detector_scan_equals_direct_scan_of_its_laplacian() {
    let buffer = checkerboard_u8(40, 40, 6);
    let params = EdgelParams {
        laplacian: LaplacianKernel::EightNeighbour,
        ..Default::default()
    };
    let out = EdgelDetector::new(params)
        .process(ImageU8::packed(40, 40, &buffer))
        .unwrap();
    let lap = laplacian(&out.bandpass.image, LaplacianKernel::EightNeighbour);
    assert_eq!(lap, out.laplacian);
    assert_eq!(scan_zero_crossings(&lap).edgels, out.edgels);
}

#[test]
fn four_by_four_field_with_one_negative_corner() {
    let mut field = ImageF32::from_fn(4, 4, |_, _| 1.0);
    field.set(0, 0, -1.0);
    let scan = scan_zero_crossings(&field);
    assert_eq!(scan.stats.quads, 9);
    assert_eq!(scan.edgels.len(), 1);
    let e = scan.edgels[0];
    assert!(e.endpoint1()[0] <= 1.0 && e.endpoint1()[1] <= 1.0);
    assert!(e.endpoint2()[0] <= 1.0 && e.endpoint2()[1] <= 1.0);
}

#[test]
fn short_buffer_is_rejected() {
    let buffer = vec![0u8; 10];
    let err = EdgelDetector::default()
        .process(ImageU8::packed(4, 4, &buffer))
        .unwrap_err();
    assert!(matches!(err, EdgelError::InvalidImage { .. }));
}

#[test]
fn single_level_pyramid_is_a_primitive_failure() {
    let buffer = vec![0u8; 64];
    let params = EdgelParams {
        pyramid_levels: 1,
        ..Default::default()
    };
    let err = EdgelDetector::new(params)
        .process(ImageU8::packed(8, 8, &buffer))
        .unwrap_err();
    assert!(matches!(err, EdgelError::PrimitiveFailure { .. }));
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_scan_matches_serial_pipeline() {
    let buffer = disk_u8(96, 80, 25.0);
    let serial = EdgelDetector::default()
        .process(ImageU8::packed(96, 80, &buffer))
        .unwrap();
    let parallel = EdgelDetector::new(EdgelParams {
        parallel_scan: true,
        ..Default::default()
    })
    .process(ImageU8::packed(96, 80, &buffer))
    .unwrap();
    assert_eq!(serial.edgels, parallel.edgels);
    assert_eq!(serial.stats, parallel.stats);
}

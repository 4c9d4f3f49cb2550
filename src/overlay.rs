//! Off-screen edgel visualization.
//!
//! The band-pass image is min–max normalized to 8-bit, then each edgel gets a
//! white segment between its endpoints and a filled disk at its midpoint.
//! Edgels are only read.
use crate::edges::Edgel;
use crate::image::io::{normalize_to_u8, GrayImageU8};
use crate::image::ImageF32;

/// Drawing parameters for [`render_overlay_with`].
#[derive(Clone, Copy, Debug)]
pub struct OverlayStyle {
    pub marker_radius: i64,
    pub value: u8,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            marker_radius: 2,
            value: 255,
        }
    }
}

/// Render `edgels` over the normalized `background` with the default style.
pub fn render_overlay(background: &ImageF32, edgels: &[Edgel]) -> GrayImageU8 {
    render_overlay_with(background, edgels, OverlayStyle::default())
}

pub fn render_overlay_with(
    background: &ImageF32,
    edgels: &[Edgel],
    style: OverlayStyle,
) -> GrayImageU8 {
    let mut canvas = normalize_to_u8(background);
    for edgel in edgels {
        draw_line(&mut canvas, edgel.endpoint1(), edgel.endpoint2(), style.value);
        draw_disk(&mut canvas, edgel.midpoint(), style.marker_radius, style.value);
    }
    canvas
}

fn draw_line(canvas: &mut GrayImageU8, p0: [f32; 2], p1: [f32; 2], value: u8) {
    let dx = p1[0] - p0[0];
    let dy = p1[1] - p0[1];
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
    for s in 0..=steps {
        let t = s as f32 / steps as f32;
        let x = (p0[0] + dx * t).round() as i64;
        let y = (p0[1] + dy * t).round() as i64;
        canvas.put(x, y, value);
    }
}

fn draw_disk(canvas: &mut GrayImageU8, center: [f32; 2], radius: i64, value: u8) {
    let cx = center[0].round() as i64;
    let cy = center[1].round() as i64;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                canvas.put(cx + dx, cy + dy, value);
            }
        }
    }
}

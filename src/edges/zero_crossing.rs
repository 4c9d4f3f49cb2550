//! Zero-crossing scan over the 2×2 quads of a Laplacian field.
//!
//! A quad anchored at row `i`, column `j` holds
//!
//! ```text
//!   p1 = (i, j)     p3 = (i, j+1)
//!   p2 = (i+1, j)   p4 = (i+1, j+1)
//! ```
//!
//! Its four sides are tested in the fixed order left `(p1,p2)`, top `(p1,p3)`,
//! bottom `(p2,p4)`, right `(p3,p4)`. A side registers a crossing only when one
//! sample is strictly positive and the other strictly negative; the crossing
//! sits at the midpoint of the side, independent of the sample magnitudes.
//!
//! A quad with exactly two crossings yields one [`Edgel`]. Quads with more
//! crossings keep only the first two locations and are then rejected by the
//! same rule; [`ScanStats`] counts them so the loss is visible. Strict sign
//! changes around a closed quad come in pairs and a zero silences both sides
//! it touches, so in practice that means four crossings (a saddle).
use super::edgel::Edgel;
use crate::image::{ImageF32, ImageView};
use serde::Serialize;

/// Side of a quad, listed in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuadEdge {
    /// `(p1, p2)`, column `j`
    Left,
    /// `(p1, p3)`, row `i`
    Top,
    /// `(p2, p4)`, row `i + 1`
    Bottom,
    /// `(p3, p4)`, column `j + 1`
    Right,
}

impl QuadEdge {
    pub const EVALUATION_ORDER: [QuadEdge; 4] =
        [QuadEdge::Left, QuadEdge::Top, QuadEdge::Bottom, QuadEdge::Right];

    /// Midpoint of this side for the quad at (`row`, `col`), as `[x, y]`.
    #[inline]
    pub fn crossing_point(self, row: usize, col: usize) -> [f32; 2] {
        let (x, y) = (col as f32, row as f32);
        match self {
            QuadEdge::Left => [x, y + 0.5],
            QuadEdge::Top => [x + 0.5, y],
            QuadEdge::Bottom => [x + 0.5, y + 1.0],
            QuadEdge::Right => [x + 1.0, y + 0.5],
        }
    }
}

/// The four samples of one quad.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub p1: f32,
    pub p2: f32,
    pub p3: f32,
    pub p4: f32,
}

impl Quad {
    /// Read the quad anchored at (`row`, `col`); both must be `< dim - 1`.
    #[inline]
    pub fn at(field: &ImageF32, row: usize, col: usize) -> Self {
        let top = field.row(row);
        let bottom = field.row(row + 1);
        Self {
            p1: top[col],
            p2: bottom[col],
            p3: top[col + 1],
            p4: bottom[col + 1],
        }
    }

    #[inline]
    fn side(&self, edge: QuadEdge) -> (f32, f32) {
        match edge {
            QuadEdge::Left => (self.p1, self.p2),
            QuadEdge::Top => (self.p1, self.p3),
            QuadEdge::Bottom => (self.p2, self.p4),
            QuadEdge::Right => (self.p3, self.p4),
        }
    }
}

/// Strictly opposite signs. Zero never registers, nor does NaN.
#[inline]
pub fn is_sign_change(a: f32, b: f32) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}

/// Crossings found on one quad; only the first two locations are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct QuadCrossings {
    count: u8,
    first: Option<[f32; 2]>,
    second: Option<[f32; 2]>,
}

impl QuadCrossings {
    /// Number of sides with a sign change, `0..=4`.
    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn first(&self) -> Option<[f32; 2]> {
        self.first
    }

    pub fn second(&self) -> Option<[f32; 2]> {
        self.second
    }

    /// The edgel of this quad, present iff exactly two sides changed sign.
    pub fn edgel(&self) -> Option<Edgel> {
        match (self.count, self.first, self.second) {
            (2, Some(e1), Some(e2)) => Some(Edgel::from_crossings(e1, e2)),
            _ => None,
        }
    }
}

/// Test the four sides of `quad` anchored at (`row`, `col`).
pub fn scan_quad(quad: &Quad, row: usize, col: usize) -> QuadCrossings {
    let mut out = QuadCrossings::default();
    for edge in QuadEdge::EVALUATION_ORDER {
        let (a, b) = quad.side(edge);
        if !is_sign_change(a, b) {
            continue;
        }
        let point = edge.crossing_point(row, col);
        match out.count {
            0 => out.first = Some(point),
            1 => out.second = Some(point),
            _ => {}
        }
        out.count += 1;
    }
    out
}

/// Quad counts gathered during a scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    /// Quads visited: `(rows - 1) * (cols - 1)`.
    pub quads: usize,
    /// `crossing_histogram[k]` = number of quads with `k` crossings.
    pub crossing_histogram: [usize; 5],
}

impl ScanStats {
    #[inline]
    fn record(&mut self, count: u8) {
        self.quads += 1;
        self.crossing_histogram[count as usize] += 1;
    }

    /// Quads that produced an edgel.
    pub fn edgel_quads(&self) -> usize {
        self.crossing_histogram[2]
    }

    /// Quads with more than two crossings, dropped without an edgel.
    pub fn ambiguous_quads(&self) -> usize {
        self.crossing_histogram[3] + self.crossing_histogram[4]
    }

    pub fn merge(&mut self, other: &ScanStats) {
        self.quads += other.quads;
        for (a, b) in self.crossing_histogram.iter_mut().zip(other.crossing_histogram) {
            *a += b;
        }
    }
}

/// Edgels in row-major quad order together with the scan statistics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZeroCrossingScan {
    pub edgels: Vec<Edgel>,
    pub stats: ScanStats,
}

fn scan_row(field: &ImageF32, row: usize, edgels: &mut Vec<Edgel>, stats: &mut ScanStats) {
    for col in 0..field.w - 1 {
        let crossings = scan_quad(&Quad::at(field, row, col), row, col);
        stats.record(crossings.count());
        if let Some(edgel) = crossings.edgel() {
            edgels.push(edgel);
        }
    }
}

/// Scan every quad of `field`. Fields narrower or shorter than 2 yield nothing.
pub fn scan_zero_crossings(field: &ImageF32) -> ZeroCrossingScan {
    let mut scan = ZeroCrossingScan::default();
    if field.w < 2 || field.h < 2 {
        return scan;
    }
    for row in 0..field.h - 1 {
        scan_row(field, row, &mut scan.edgels, &mut scan.stats);
    }
    scan
}

/// Edgels of `field` in row-major quad order.
pub fn extract_edgels(field: &ImageF32) -> Vec<Edgel> {
    scan_zero_crossings(field).edgels
}

/// Row-partitioned variant of [`scan_zero_crossings`]; identical output.
#[cfg(feature = "parallel")]
pub fn scan_zero_crossings_par(field: &ImageF32) -> ZeroCrossingScan {
    use rayon::prelude::*;

    if field.w < 2 || field.h < 2 {
        return ZeroCrossingScan::default();
    }
    let rows: Vec<(Vec<Edgel>, ScanStats)> = (0..field.h - 1)
        .into_par_iter()
        .map(|row| {
            let mut edgels = Vec::new();
            let mut stats = ScanStats::default();
            scan_row(field, row, &mut edgels, &mut stats);
            (edgels, stats)
        })
        .collect();

    let mut scan = ZeroCrossingScan {
        edgels: Vec::with_capacity(rows.iter().map(|(e, _)| e.len()).sum()),
        stats: ScanStats::default(),
    };
    for (edgels, stats) in rows {
        scan.edgels.extend(edgels);
        scan.stats.merge(&stats);
    }
    scan
}

/// Row-partitioned variant of [`extract_edgels`].
#[cfg(feature = "parallel")]
pub fn extract_edgels_par(field: &ImageF32) -> Vec<Edgel> {
    scan_zero_crossings_par(field).edgels
}

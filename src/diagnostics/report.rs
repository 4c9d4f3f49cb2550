use super::pyramid::PyramidStage;
use super::timing::TimingBreakdown;
use crate::detector::{EdgelDetection, EdgelParams};
use crate::edges::{Edgel, ScanStats};
use serde::Serialize;

/// JSON summary of a detector run, as written by the CLI.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgelReport {
    pub width: usize,
    pub height: usize,
    pub params: EdgelParams,
    pub pyramid: PyramidStage,
    pub scan: ScanStats,
    pub ambiguous_quads: usize,
    pub timing: TimingBreakdown,
    pub edgel_count: usize,
    pub edgels: Vec<Edgel>,
}

impl EdgelReport {
    pub fn new(detection: &EdgelDetection, params: &EdgelParams) -> Self {
        let (width, height) = detection.bandpass.image.dims();
        Self {
            width,
            height,
            params: *params,
            pyramid: PyramidStage::from_pyramid(&detection.bandpass.pyramid),
            scan: detection.stats,
            ambiguous_quads: detection.stats.ambiguous_quads(),
            timing: detection.timing.clone(),
            edgel_count: detection.edgels.len(),
            edgels: detection.edgels.clone(),
        }
    }
}

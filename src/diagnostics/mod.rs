//! Serializable summaries of a detector run: pyramid level statistics, scan
//! statistics and per-stage timings.
pub mod pyramid;
pub mod report;
pub mod timing;

pub use crate::edges::ScanStats;
pub use pyramid::{PyramidLevelReport, PyramidStage};
pub use report::EdgelReport;
pub use timing::{StageTiming, TimingBreakdown};

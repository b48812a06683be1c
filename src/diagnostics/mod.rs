//! Diagnostics returned alongside the label map.
//!
//! `DetectionReport` bundles the final labels with a serializable
//! `PipelineTrace`: input shape, computed extent, derived threshold cuts,
//! per-class pixel counts and per-stage timings.

pub mod report;
pub mod timing;

pub use report::{DetectionReport, InputDescriptor, LabelStats, PipelineTrace};
pub use timing::{StageTiming, TimingBreakdown};

use thiserror::Error;

use crate::core::SegmentId;
use crate::interaction::EditMode;

pub type PeakResult<T> = Result<T, PeakError>;

#[derive(Debug, Error)]
pub enum PeakError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("curve rtime must be strictly increasing (sample {index}: {rtime} after {previous})")]
    NonMonotonicCurve {
        index: usize,
        previous: f64,
        rtime: f64,
    },

    #[error("curve needs at least {required} samples, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },

    #[error("sample index {index} out of range for curve of {len} samples")]
    SampleOutOfRange { index: usize, len: usize },

    #[error("unknown segment: {0}")]
    UnknownSegment(SegmentId),

    #[error("operation requires {required:?} mode, current mode is {current:?}")]
    ModeInactive {
        required: EditMode,
        current: EditMode,
    },
}

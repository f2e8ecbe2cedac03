use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{PeakError, PeakResult};

/// One observed point of a curve.
///
/// `rtime` is the independent axis (retention time), `intensity` the
/// dependent one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub rtime: f64,
    pub intensity: f64,
}

impl Sample {
    #[must_use]
    pub fn new(rtime: f64, intensity: f64) -> Self {
        Self { rtime, intensity }
    }

    pub fn from_decimal(rtime: Decimal, intensity: Decimal) -> PeakResult<Self> {
        Ok(Self {
            rtime: decimal_to_f64(rtime, "rtime")?,
            intensity: decimal_to_f64(intensity, "intensity")?,
        })
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.rtime.is_finite() && self.intensity.is_finite()
    }
}

/// Which end of a [`Segment`] an adjust gesture grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentEndpoint {
    Start,
    End,
}

/// User-drawn two-point baseline.
///
/// Endpoint order only matters for display; the intersection math is
/// symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Sample,
    pub end: Sample,
}

impl Segment {
    #[must_use]
    pub fn new(start: Sample, end: Sample) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn endpoint(self, endpoint: SegmentEndpoint) -> Sample {
        match endpoint {
            SegmentEndpoint::Start => self.start,
            SegmentEndpoint::End => self.end,
        }
    }

    /// Returns a copy with one endpoint replaced.
    #[must_use]
    pub fn with_endpoint(self, endpoint: SegmentEndpoint, sample: Sample) -> Self {
        match endpoint {
            SegmentEndpoint::Start => Self {
                start: sample,
                ..self
            },
            SegmentEndpoint::End => Self { end: sample, ..self },
        }
    }

    /// Inclusive `(min, max)` rtime span.
    #[must_use]
    pub fn rtime_span(self) -> (f64, f64) {
        if self.start.rtime <= self.end.rtime {
            (self.start.rtime, self.end.rtime)
        } else {
            (self.end.rtime, self.start.rtime)
        }
    }

    /// `true` when both endpoints share an rtime, so the baseline has no
    /// intensity-as-a-function-of-rtime interpretation.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        self.start.rtime == self.end.rtime
    }

    /// Baseline intensity at `rtime`, or `None` for a vertical segment.
    #[must_use]
    pub fn intensity_at(self, rtime: f64) -> Option<f64> {
        if self.is_vertical() {
            return None;
        }
        let Self { start, end } = self;
        Some(
            start.intensity
                + ((rtime - start.rtime) / (end.rtime - start.rtime))
                    * (end.intensity - start.intensity),
        )
    }
}

/// Stable identifier of a committed segment. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SegmentId(pub u64);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "segment#{}", self.0)
    }
}

/// Validated curve: finite samples with strictly increasing `rtime`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Sample>", into = "Vec<Sample>")]
pub struct Curve {
    samples: Vec<Sample>,
}

impl Curve {
    pub fn new(samples: Vec<Sample>) -> PeakResult<Self> {
        validate_samples(&samples)?;
        Ok(Self { samples })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).copied()
    }

    /// Inclusive `(min, max)` rtime span, `None` when empty.
    #[must_use]
    pub fn rtime_span(&self) -> Option<(f64, f64)> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        Some((first.rtime, last.rtime))
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl TryFrom<Vec<Sample>> for Curve {
    type Error = PeakError;

    fn try_from(samples: Vec<Sample>) -> PeakResult<Self> {
        Self::new(samples)
    }
}

impl From<Curve> for Vec<Sample> {
    fn from(curve: Curve) -> Self {
        curve.samples
    }
}

fn validate_samples(samples: &[Sample]) -> PeakResult<()> {
    for (index, sample) in samples.iter().enumerate() {
        if !sample.is_finite() {
            return Err(PeakError::InvalidData(format!(
                "sample {index} has non-finite coordinates"
            )));
        }
    }
    for (index, pair) in samples.windows(2).enumerate() {
        if pair[1].rtime <= pair[0].rtime {
            return Err(PeakError::NonMonotonicCurve {
                index: index + 1,
                previous: pair[0].rtime,
                rtime: pair[1].rtime,
            });
        }
    }
    Ok(())
}

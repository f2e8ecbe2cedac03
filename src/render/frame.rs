use serde::{Deserialize, Serialize};

use crate::core::{PeakPolygon, Sample, Segment, SegmentId};
use crate::error::{PeakError, PeakResult};

/// Committed segment as handed to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentPrimitive {
    pub id: SegmentId,
    pub segment: Segment,
}

/// Backend-agnostic overlay scene in data coordinates.
///
/// Mapping to pixels is the renderer's concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayFrame {
    pub curve: Vec<Sample>,
    pub segments: Vec<SegmentPrimitive>,
    pub polygons: Vec<PeakPolygon>,
    pub provisional: Option<Segment>,
    pub ranges: Vec<Vec<Sample>>,
    pub hover: Option<Sample>,
    pub selected_sample: Option<Sample>,
}

impl OverlayFrame {
    #[must_use]
    pub fn new(curve: Vec<Sample>) -> Self {
        Self {
            curve,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_segment(mut self, id: SegmentId, segment: Segment) -> Self {
        self.segments.push(SegmentPrimitive { id, segment });
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PeakPolygon) -> Self {
        self.polygons.push(polygon);
        self
    }

    #[must_use]
    pub fn with_provisional(mut self, segment: Option<Segment>) -> Self {
        self.provisional = segment;
        self
    }

    pub fn validate(&self) -> PeakResult<()> {
        ensure_finite_all(&self.curve, "curve")?;
        for primitive in &self.segments {
            ensure_finite_all(&[primitive.segment.start, primitive.segment.end], "segment")?;
        }
        if let Some(segment) = self.provisional {
            ensure_finite_all(&[segment.start, segment.end], "provisional segment")?;
        }
        for polygon in &self.polygons {
            if polygon.vertices.len() < 3 {
                return Err(PeakError::InvalidData(format!(
                    "polygon of {} needs at least 3 vertices, got {}",
                    polygon.segment_id,
                    polygon.vertices.len()
                )));
            }
            ensure_finite_all(&polygon.vertices, "polygon")?;
        }
        for range in &self.ranges {
            ensure_finite_all(range, "range")?;
        }
        ensure_finite_all(self.hover.as_slice(), "hover sample")?;
        ensure_finite_all(self.selected_sample.as_slice(), "selected sample")?;
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curve.is_empty()
            && self.segments.is_empty()
            && self.polygons.is_empty()
            && self.provisional.is_none()
            && self.ranges.is_empty()
    }
}

fn ensure_finite_all(samples: &[Sample], what: &str) -> PeakResult<()> {
    if samples.iter().all(|sample| sample.is_finite()) {
        Ok(())
    } else {
        Err(PeakError::InvalidData(format!(
            "{what} contains non-finite coordinates"
        )))
    }
}

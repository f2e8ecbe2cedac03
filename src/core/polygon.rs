use serde::{Deserialize, Serialize};

use crate::core::intersection::find_intersections;
use crate::core::windowing::samples_in_rtime_window;
use crate::core::{Sample, Segment, SegmentId};

/// Closed peak region: `[start_intersection, ..curve_samples, end_intersection]`.
pub type Polygon = Vec<Sample>;

/// Peak polygon tagged with the segment it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakPolygon {
    pub segment_id: SegmentId,
    pub vertices: Polygon,
}

impl PeakPolygon {
    #[must_use]
    pub fn new(segment_id: SegmentId, vertices: Polygon) -> Self {
        Self {
            segment_id,
            vertices,
        }
    }

    /// Inclusive `(min, max)` rtime covered by the polygon.
    #[must_use]
    pub fn rtime_span(&self) -> Option<(f64, f64)> {
        let first = self.vertices.first()?;
        let last = self.vertices.last()?;
        Some((first.rtime, last.rtime))
    }
}

/// Builds one polygon per sub-interval where the curve rises above `segment`.
///
/// Sub-intervals are bounded by consecutive intersections. A sub-interval is
/// a peak when any curve sample inside it lies strictly above the baseline;
/// dips below the baseline are never peaks. Vertical segments produce no
/// polygons since the baseline cannot be evaluated as a function of rtime.
#[must_use]
pub fn build_polygons(segment: &Segment, curve: &[Sample]) -> Vec<Polygon> {
    if segment.is_vertical() {
        return Vec::new();
    }

    let intersections = find_intersections(segment, curve);
    if intersections.len() < 2 {
        return Vec::new();
    }

    let mut polygons = Vec::new();
    for bounds in intersections.windows(2) {
        let (start, end) = (bounds[0], bounds[1]);
        let segment_data = samples_in_rtime_window(curve, start.rtime, end.rtime);
        if segment_data.is_empty() || !rises_above(segment, &segment_data) {
            continue;
        }

        let mut polygon = Vec::with_capacity(segment_data.len() + 2);
        polygon.push(start);
        polygon.extend(segment_data);
        polygon.push(end);
        polygons.push(polygon);
    }

    polygons
}

fn rises_above(segment: &Segment, samples: &[Sample]) -> bool {
    samples.iter().any(|sample| {
        segment
            .intensity_at(sample.rtime)
            .is_some_and(|line_y| sample.intensity > line_y)
    })
}

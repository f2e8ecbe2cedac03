use indexmap::IndexMap;

use crate::core::{Curve, PeakPolygon, Sample, Segment, SegmentId, build_polygons};
use crate::error::{PeakError, PeakResult};
use crate::interaction::InteractionState;

/// Committed segment together with the polygons derived from it.
///
/// Polygons are owned by the record, so removing the record cascades.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct SegmentRecord {
    pub(super) segment: Segment,
    pub(super) polygons: Vec<PeakPolygon>,
}

impl SegmentRecord {
    pub(super) fn derive(id: SegmentId, segment: Segment, samples: &[Sample]) -> Self {
        let polygons = build_polygons(&segment, samples)
            .into_iter()
            .map(|vertices| PeakPolygon::new(id, vertices))
            .collect();
        Self { segment, polygons }
    }
}

/// Mutable editing state behind the `PeakEngine` facade.
#[derive(Debug, Default)]
pub(super) struct PeakModel {
    pub(super) curve: Curve,
    pub(super) segments: IndexMap<SegmentId, SegmentRecord>,
    pub(super) ranges: Vec<Vec<Sample>>,
    pub(super) interaction: InteractionState,
    pub(super) next_segment_id: u64,
}

impl PeakModel {
    pub(super) fn allocate_segment_id(&mut self) -> PeakResult<SegmentId> {
        let id = SegmentId(self.next_segment_id);
        self.next_segment_id = self
            .next_segment_id
            .checked_add(1)
            .ok_or_else(|| PeakError::InvalidData("segment id space exhausted".to_owned()))?;
        Ok(id)
    }

    /// Re-derives polygons of every committed segment against the current curve.
    pub(super) fn recompute_all_polygons(&mut self) {
        let samples = self.curve.samples();
        for (id, record) in &mut self.segments {
            *record = SegmentRecord::derive(*id, record.segment, samples);
        }
    }

    pub(super) fn polygons_len(&self) -> usize {
        self.segments
            .values()
            .map(|record| record.polygons.len())
            .sum()
    }
}

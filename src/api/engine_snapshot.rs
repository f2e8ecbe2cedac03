use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Curve, Polygon, Sample, Segment, SegmentId};
use crate::error::{PeakError, PeakResult};
use crate::interaction::EditMode;
use crate::render::Renderer;

use super::peak_model::SegmentRecord;
use super::{PeakEngine, PeakEngineConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSnapshot {
    pub id: SegmentId,
    pub segment: Segment,
    pub polygons: Vec<Polygon>,
}

/// Serializable editing state used by hosts to persist a session and by
/// regression tests.
///
/// Polygons are included for consumers that only read the snapshot; restoring
/// re-derives them from the curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub config: PeakEngineConfig,
    pub mode: EditMode,
    pub curve: Vec<Sample>,
    pub segments: Vec<SegmentSnapshot>,
    pub ranges: Vec<Vec<Sample>>,
    pub next_segment_id: u64,
}

impl<R: Renderer> PeakEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            config: self.config,
            mode: self.mode(),
            curve: self.samples().to_vec(),
            segments: self
                .model
                .segments
                .iter()
                .map(|(id, record)| SegmentSnapshot {
                    id: *id,
                    segment: record.segment,
                    polygons: record
                        .polygons
                        .iter()
                        .map(|polygon| polygon.vertices.clone())
                        .collect(),
                })
                .collect(),
            ranges: self.model.ranges.clone(),
            next_segment_id: self.model.next_segment_id,
        }
    }

    /// Rebuilds an engine from a snapshot.
    ///
    /// Segment ids are preserved and new ids continue after the highest one
    /// ever issued. Non-finite coordinates and an id of `u64::MAX` (which
    /// leaves no successor to allocate) are rejected.
    pub fn from_snapshot(renderer: R, snapshot: EngineSnapshot) -> PeakResult<Self> {
        let mut engine = Self::new(renderer, snapshot.config)?;
        engine.model.curve = Curve::new(snapshot.curve)?;

        let mut next_segment_id = snapshot.next_segment_id;
        for entry in snapshot.segments {
            if engine.model.segments.contains_key(&entry.id) {
                return Err(PeakError::InvalidData(format!(
                    "duplicate {} in snapshot",
                    entry.id
                )));
            }
            if !entry.segment.start.is_finite() || !entry.segment.end.is_finite() {
                return Err(PeakError::InvalidData(format!(
                    "{} in snapshot has non-finite endpoints",
                    entry.id
                )));
            }
            let after = entry.id.0.checked_add(1).ok_or_else(|| {
                PeakError::InvalidData(format!("{} in snapshot exhausts the id space", entry.id))
            })?;
            next_segment_id = next_segment_id.max(after);
            let record = SegmentRecord::derive(entry.id, entry.segment, engine.samples());
            engine.model.segments.insert(entry.id, record);
        }
        if snapshot
            .ranges
            .iter()
            .flatten()
            .any(|sample| !sample.is_finite())
        {
            return Err(PeakError::InvalidData(
                "snapshot ranges contain non-finite samples".to_owned(),
            ));
        }
        engine.model.next_segment_id = next_segment_id;
        engine.model.interaction.set_mode(snapshot.mode);
        engine.model.ranges = snapshot.ranges;

        debug!(
            samples_len = engine.model.curve.len(),
            segments_len = engine.model.segments.len(),
            "restored engine from snapshot"
        );
        Ok(engine)
    }
}

use tracing::{debug, trace};

use crate::core::{Sample, Segment, SegmentEndpoint, SegmentId, nearest_sample};
use crate::error::{PeakError, PeakResult};
use crate::interaction::EditMode;
use crate::render::Renderer;

use super::peak_model::SegmentRecord;
use super::{PeakEngine, PluginEvent};

impl<R: Renderer> PeakEngine<R> {
    /// Activates `mode`, deselecting the others.
    ///
    /// Any in-progress connect drag is abandoned and picked ranges, pending
    /// picks and the selected sample are cleared. Committed segments stay.
    pub fn set_mode(&mut self, mode: EditMode) {
        let had_gesture = self.model.interaction.drawing().is_some();
        self.model.interaction.set_mode(mode);
        self.model.ranges.clear();
        debug!(?mode, "edit mode changed");
        if had_gesture {
            self.emit_plugin_event(PluginEvent::GestureCancelled);
        }
        self.emit_plugin_event(PluginEvent::ModeChanged { mode });
    }

    /// Activates `mode`, or returns to `EditMode::None` when it is already active.
    pub fn toggle_mode(&mut self, mode: EditMode) -> EditMode {
        let next = if self.mode() == mode {
            EditMode::None
        } else {
            mode
        };
        self.set_mode(next);
        next
    }

    /// Drops picked ranges, pending picks and the selected sample.
    pub fn clear_selection(&mut self) {
        self.model.ranges.clear();
        self.model.interaction.clear_selection();
        self.emit_plugin_event(PluginEvent::SelectionCleared);
    }

    /// Starts a connect drag anchored at the sample nearest to `rtime`.
    pub fn begin_connect(&mut self, rtime: f64) -> PeakResult<Sample> {
        self.require_mode(EditMode::Connect)?;
        let anchor = self.snap_for_segment(rtime)?;
        self.model.interaction.begin_drawing(anchor);
        trace!(rtime = anchor.rtime, "connect drag started");
        self.emit_plugin_event(PluginEvent::GestureStarted);
        Ok(anchor)
    }

    /// Moves the free end of the provisional segment.
    ///
    /// Only the provisional segment is updated; polygons are derived once the
    /// gesture completes. Returns `None` when no drag is active.
    pub fn drag_connect(&mut self, rtime: f64) -> Option<Segment> {
        self.model.interaction.drawing()?;
        let current = nearest_sample(rtime, self.samples())?;
        self.model
            .interaction
            .update_drawing(current)
            .map(|gesture| gesture.provisional_segment())
    }

    /// Completes a connect drag at the sample nearest to `rtime`.
    ///
    /// Returns the id of the committed segment, or `None` when no drag was
    /// active or the drag collapsed to a single rtime (such a segment cannot
    /// bound any peak and is discarded).
    pub fn end_connect(&mut self, rtime: f64) -> PeakResult<Option<SegmentId>> {
        let Some(gesture) = self.model.interaction.take_drawing() else {
            return Ok(None);
        };
        let Some(end) = nearest_sample(rtime, self.samples()) else {
            self.emit_plugin_event(PluginEvent::GestureCancelled);
            return Ok(None);
        };

        let segment = Segment::new(gesture.anchor, end);
        if segment.is_vertical() {
            debug!(rtime = end.rtime, "discarding zero-span connect gesture");
            self.emit_plugin_event(PluginEvent::GestureCancelled);
            return Ok(None);
        }

        let id = self.model.allocate_segment_id()?;
        let record = SegmentRecord::derive(id, segment, self.model.curve.samples());
        let polygons_len = record.polygons.len();
        self.model.segments.insert(id, record);
        debug!(%id, polygons_len, "segment committed");
        self.emit_plugin_event(PluginEvent::SegmentCommitted { id, polygons_len });
        Ok(Some(id))
    }

    /// Abandons the in-progress connect drag. Returns `true` when one existed.
    pub fn cancel_connect(&mut self) -> bool {
        let cancelled = self.model.interaction.take_drawing().is_some();
        if cancelled {
            self.emit_plugin_event(PluginEvent::GestureCancelled);
        }
        cancelled
    }

    /// Moves one endpoint of segment `id` to the sample nearest to `rtime`
    /// (adjust mode) and re-derives that segment's polygons.
    ///
    /// An adjustment that would leave both endpoints at the same rtime is
    /// rejected and the stored segment is kept.
    pub fn adjust_endpoint(
        &mut self,
        id: SegmentId,
        endpoint: SegmentEndpoint,
        rtime: f64,
    ) -> PeakResult<Segment> {
        self.require_mode(EditMode::Adjust)?;
        let segment = self.segment(id).ok_or(PeakError::UnknownSegment(id))?;
        let snapped = self.snap_for_segment(rtime)?;

        let adjusted = segment.with_endpoint(endpoint, snapped);
        if adjusted.is_vertical() {
            debug!(%id, ?endpoint, rtime = snapped.rtime, "rejecting zero-span adjustment");
            return Err(PeakError::InvalidData(format!(
                "adjusting {id} would collapse it to rtime {}",
                snapped.rtime
            )));
        }
        let record = SegmentRecord::derive(id, adjusted, self.model.curve.samples());
        let polygons_len = record.polygons.len();
        self.model.segments.insert(id, record);
        trace!(%id, ?endpoint, polygons_len, "segment endpoint adjusted");
        self.emit_plugin_event(PluginEvent::SegmentAdjusted { id, polygons_len });
        Ok(adjusted)
    }

    /// Removes segment `id` and every polygon derived from it (delete mode).
    pub fn delete_segment(&mut self, id: SegmentId) -> PeakResult<Segment> {
        self.require_mode(EditMode::Delete)?;
        let record = self
            .model
            .segments
            .shift_remove(&id)
            .ok_or(PeakError::UnknownSegment(id))?;
        let polygons_removed = record.polygons.len();
        debug!(%id, polygons_removed, "segment deleted");
        self.emit_plugin_event(PluginEvent::SegmentDeleted {
            id,
            polygons_removed,
        });
        Ok(record.segment)
    }

    /// Removes every committed segment. Returns how many were removed.
    pub fn remove_all_segments(&mut self) -> usize {
        let removed = self.model.segments.len();
        self.model.segments.clear();
        if removed > 0 {
            debug!(removed, "segments cleared");
            self.emit_plugin_event(PluginEvent::SegmentsCleared { removed });
        }
        removed
    }

    fn snap_for_segment(&self, rtime: f64) -> PeakResult<Sample> {
        let required = self.config.min_curve_samples;
        let actual = self.model.curve.len();
        if actual < required {
            return Err(PeakError::InsufficientSamples { required, actual });
        }
        nearest_sample(rtime, self.samples())
            .ok_or(PeakError::InsufficientSamples { required, actual })
    }
}

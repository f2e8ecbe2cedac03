use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{Curve, Sample, nearest_sample, samples_in_rtime_window};
use crate::error::{PeakError, PeakResult};
use crate::interaction::EditMode;
use crate::render::Renderer;

use super::validation::bound_dragged_value;
use super::{PeakEngine, PluginEvent};

/// What a click on a curve sample did, depending on the active mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SampleClickOutcome {
    /// No mode active.
    Ignored,
    /// First of two connect-mode picks recorded.
    RangePickPending,
    /// Second pick completed a range of `samples_len` samples.
    RangeSelected { samples_len: usize },
    /// Adjust-mode selection toggled; `None` means deselected.
    SelectionToggled { selected: Option<usize> },
    /// Delete-mode removal of the clicked sample.
    SampleDeleted { sample: Sample },
}

impl<R: Renderer> PeakEngine<R> {
    /// Replaces the curve and re-derives every segment's polygons.
    ///
    /// Rejects non-finite samples and non-increasing rtime. Index-based
    /// selections (ranges, selected sample, hover) are dropped, as is any
    /// in-progress connect drag.
    pub fn set_curve(&mut self, samples: Vec<Sample>) -> PeakResult<()> {
        let curve = Curve::new(samples)?;
        debug!(samples_len = curve.len(), "set curve");
        self.abandon_connect_for_curve_change();
        self.model.curve = curve;
        self.model.ranges.clear();
        self.model.interaction.clear_selection();
        self.model.interaction.set_hover(None);
        self.model.recompute_all_polygons();
        self.emit_curve_updated();
        Ok(())
    }

    /// Dispatches a click on curve sample `index` according to the mode.
    pub fn click_sample(&mut self, index: usize) -> PeakResult<SampleClickOutcome> {
        let sample = self.sample_at(index)?;
        match self.mode() {
            EditMode::None => Ok(SampleClickOutcome::Ignored),
            EditMode::Connect => {
                let Some((first, second)) = self.model.interaction.push_range_pick(sample) else {
                    return Ok(SampleClickOutcome::RangePickPending);
                };
                let range = samples_in_rtime_window(self.samples(), first.rtime, second.rtime);
                let samples_len = range.len();
                debug!(samples_len, "range selected");
                self.model.ranges.push(range);
                self.emit_plugin_event(PluginEvent::RangeSelected { samples_len });
                Ok(SampleClickOutcome::RangeSelected { samples_len })
            }
            EditMode::Adjust => {
                let selected = self.model.interaction.toggle_selected_sample(index);
                Ok(SampleClickOutcome::SelectionToggled { selected })
            }
            EditMode::Delete => {
                let sample = self.delete_sample(index)?;
                Ok(SampleClickOutcome::SampleDeleted { sample })
            }
        }
    }

    /// Removes curve sample `index` (delete mode).
    ///
    /// Refused when the curve would fall below `min_curve_samples`.
    pub fn delete_sample(&mut self, index: usize) -> PeakResult<Sample> {
        self.require_mode(EditMode::Delete)?;
        let sample = self.sample_at(index)?;

        let len = self.model.curve.len();
        let required = self.config.min_curve_samples;
        if len <= required {
            warn!(len, required, "refusing sample deletion below minimum");
            return Err(PeakError::InsufficientSamples {
                required,
                actual: len - 1,
            });
        }

        let mut samples = self.samples().to_vec();
        samples.remove(index);
        let curve = Curve::new(samples)?;
        self.abandon_connect_for_curve_change();
        self.model.curve = curve;
        self.model.ranges.clear();
        self.model.interaction.clear_selection();
        self.model.interaction.set_hover(None);
        self.model.recompute_all_polygons();
        debug!(index, samples_len = self.model.curve.len(), "deleted sample");
        self.emit_curve_updated();
        Ok(sample)
    }

    /// Drags curve sample `index` to a new position (adjust mode).
    ///
    /// Coordinates are rounded (when configured) and clamped to the
    /// configured domains, then the curve is re-sorted by rtime. A move that
    /// would land on an existing rtime is rejected and leaves the curve
    /// untouched. Returns the sample's index after re-sorting.
    pub fn move_sample(&mut self, index: usize, rtime: f64, intensity: f64) -> PeakResult<usize> {
        self.require_mode(EditMode::Adjust)?;
        self.sample_at(index)?;
        if !rtime.is_finite() || !intensity.is_finite() {
            return Err(PeakError::InvalidData(
                "dragged sample coordinates must be finite".to_owned(),
            ));
        }

        let round = self.config.round_dragged_samples;
        let moved = Sample::new(
            bound_dragged_value(rtime, self.config.rtime_domain, round),
            bound_dragged_value(intensity, self.config.intensity_domain, round),
        );

        let mut samples = self.samples().to_vec();
        samples[index] = moved;
        samples.sort_by(|a, b| a.rtime.total_cmp(&b.rtime));
        let curve = Curve::new(samples).inspect_err(|err| {
            warn!(error = %err, index, "rejected sample move");
        })?;

        let new_index = curve
            .samples()
            .iter()
            .position(|sample| *sample == moved)
            .unwrap_or(index);
        trace!(
            index,
            new_index,
            rtime = moved.rtime,
            intensity = moved.intensity,
            "moved sample"
        );

        self.abandon_connect_for_curve_change();
        self.model.curve = curve;
        self.model.ranges.clear();
        self.model.interaction.set_selected_sample(Some(new_index));
        self.model.recompute_all_polygons();
        self.emit_curve_updated();
        Ok(new_index)
    }

    /// Updates the hover readout with the sample nearest to `rtime`.
    pub fn hover(&mut self, rtime: f64) -> Option<Sample> {
        let sample = nearest_sample(rtime, self.samples());
        self.model.interaction.set_hover(sample);
        sample
    }

    pub fn hover_leave(&mut self) {
        self.model.interaction.set_hover(None);
    }

    pub(super) fn sample_at(&self, index: usize) -> PeakResult<Sample> {
        self.model
            .curve
            .get(index)
            .ok_or(PeakError::SampleOutOfRange {
                index,
                len: self.model.curve.len(),
            })
    }

    pub(super) fn require_mode(&self, required: EditMode) -> PeakResult<()> {
        let current = self.mode();
        if current == required {
            Ok(())
        } else {
            Err(PeakError::ModeInactive { required, current })
        }
    }

    /// Drops a connect drag whose anchor was snapped to the outgoing curve.
    fn abandon_connect_for_curve_change(&mut self) {
        if self.model.interaction.take_drawing().is_some() {
            debug!("connect drag abandoned by curve change");
            self.emit_plugin_event(PluginEvent::GestureCancelled);
        }
    }

    fn emit_curve_updated(&mut self) {
        let samples_len = self.model.curve.len();
        self.emit_plugin_event(PluginEvent::CurveUpdated { samples_len });
    }
}

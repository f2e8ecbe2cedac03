use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Sample, Segment};

/// Mutually exclusive editing modes. `None` is the idle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditMode {
    #[default]
    None,
    /// Draw new baseline segments; clicking samples picks point ranges.
    Connect,
    /// Drag segment endpoints or curve samples.
    Adjust,
    /// Remove segments (with their polygons) or curve samples.
    Delete,
}

/// In-progress connect drag. Never part of the committed segment list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawingGesture {
    pub anchor: Sample,
    pub current: Sample,
}

impl DrawingGesture {
    #[must_use]
    pub fn provisional_segment(self) -> Segment {
        Segment::new(self.anchor, self.current)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    mode: EditMode,
    drawing: Option<DrawingGesture>,
    range_picks: SmallVec<[Sample; 2]>,
    selected_sample: Option<usize>,
    hover: Option<Sample>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Switches mode and drops every transient selection.
    pub fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
        self.drawing = None;
        self.clear_selection();
    }

    pub fn clear_selection(&mut self) {
        self.range_picks.clear();
        self.selected_sample = None;
    }

    #[must_use]
    pub fn drawing(&self) -> Option<DrawingGesture> {
        self.drawing
    }

    pub fn begin_drawing(&mut self, anchor: Sample) {
        self.drawing = Some(DrawingGesture {
            anchor,
            current: anchor,
        });
    }

    /// Moves the free end of the provisional segment.
    ///
    /// Returns `None` when no drag is active.
    pub fn update_drawing(&mut self, current: Sample) -> Option<DrawingGesture> {
        let gesture = self.drawing.as_mut()?;
        gesture.current = current;
        Some(*gesture)
    }

    pub fn take_drawing(&mut self) -> Option<DrawingGesture> {
        self.drawing.take()
    }

    #[must_use]
    pub fn range_picks(&self) -> &[Sample] {
        &self.range_picks
    }

    /// Records a picked sample; returns the pair once two picks are in.
    pub fn push_range_pick(&mut self, sample: Sample) -> Option<(Sample, Sample)> {
        self.range_picks.push(sample);
        if self.range_picks.len() < 2 {
            return None;
        }
        let pair = (self.range_picks[0], self.range_picks[1]);
        self.range_picks.clear();
        Some(pair)
    }

    #[must_use]
    pub fn selected_sample(&self) -> Option<usize> {
        self.selected_sample
    }

    /// Selects `index`, or clears the selection when it is already selected.
    pub fn toggle_selected_sample(&mut self, index: usize) -> Option<usize> {
        self.selected_sample = if self.selected_sample == Some(index) {
            None
        } else {
            Some(index)
        };
        self.selected_sample
    }

    pub fn set_selected_sample(&mut self, index: Option<usize>) {
        self.selected_sample = index;
    }

    #[must_use]
    pub fn hover(&self) -> Option<Sample> {
        self.hover
    }

    pub fn set_hover(&mut self, sample: Option<Sample>) {
        self.hover = sample;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_switch_drops_gesture_and_picks() {
        let mut state = InteractionState::default();
        state.set_mode(EditMode::Connect);
        state.begin_drawing(Sample::new(1.0, 1.0));
        assert!(state.push_range_pick(Sample::new(2.0, 2.0)).is_none());

        state.set_mode(EditMode::Adjust);
        assert_eq!(state.mode(), EditMode::Adjust);
        assert!(state.drawing().is_none());
        assert!(state.range_picks().is_empty());
    }

    #[test]
    fn second_pick_completes_range() {
        let mut state = InteractionState::default();
        let a = Sample::new(1.0, 1.0);
        let b = Sample::new(3.0, 2.0);
        assert!(state.push_range_pick(a).is_none());
        assert_eq!(state.push_range_pick(b), Some((a, b)));
        assert!(state.range_picks().is_empty());
    }

    #[test]
    fn update_without_drag_is_ignored() {
        let mut state = InteractionState::default();
        assert!(state.update_drawing(Sample::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn toggling_selected_sample_twice_clears_it() {
        let mut state = InteractionState::default();
        assert_eq!(state.toggle_selected_sample(3), Some(3));
        assert_eq!(state.toggle_selected_sample(3), None);
    }
}

use serde::{Deserialize, Serialize};

use crate::core::SegmentId;
use crate::interaction::EditMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub mode: EditMode,
    pub samples_len: usize,
    pub segments_len: usize,
    pub polygons_len: usize,
    pub ranges_len: usize,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    CurveUpdated { samples_len: usize },
    ModeChanged { mode: EditMode },
    GestureStarted,
    GestureCancelled,
    SegmentCommitted { id: SegmentId, polygons_len: usize },
    SegmentAdjusted { id: SegmentId, polygons_len: usize },
    SegmentDeleted { id: SegmentId, polygons_removed: usize },
    SegmentsCleared { removed: usize },
    RangeSelected { samples_len: usize },
    SelectionCleared,
    Rendered,
}

/// Extension hook interface for presentation layers.
///
/// Plugins observe events and read engine context without mutating the
/// editing model.
pub trait PeakPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}

use tracing::debug;

use crate::core::{Curve, PeakPolygon, Sample, Segment, SegmentId};
use crate::error::PeakResult;
use crate::extensions::PeakPlugin;
use crate::interaction::{EditMode, InteractionState};
use crate::render::{OverlayFrame, Renderer};

use super::peak_model::PeakModel;
use super::validation::validate_engine_config;
use super::{PeakEngineConfig, PluginEvent};

/// Editing model for baseline segments drawn over a sampled curve.
///
/// Owns the curve, the committed segments (in creation order) and their
/// derived peak polygons. All geometry runs synchronously inside the calling
/// method; nothing is deferred.
pub struct PeakEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PeakEngineConfig,
    pub(super) model: PeakModel,
    pub(super) plugins: Vec<Box<dyn PeakPlugin>>,
}

impl<R: Renderer> PeakEngine<R> {
    pub fn new(renderer: R, config: PeakEngineConfig) -> PeakResult<Self> {
        let config = validate_engine_config(config)?;
        debug!(?config, "peak engine init");
        Ok(Self {
            renderer,
            config,
            model: PeakModel::default(),
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> PeakEngineConfig {
        self.config
    }

    #[must_use]
    pub fn curve(&self) -> &Curve {
        &self.model.curve
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        self.model.curve.samples()
    }

    #[must_use]
    pub fn mode(&self) -> EditMode {
        self.model.interaction.mode()
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.model.interaction
    }

    /// Committed segments in creation order.
    pub fn segments(&self) -> impl Iterator<Item = (SegmentId, Segment)> + '_ {
        self.model
            .segments
            .iter()
            .map(|(id, record)| (*id, record.segment))
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.model.segments.len()
    }

    #[must_use]
    pub fn segment(&self, id: SegmentId) -> Option<Segment> {
        self.model.segments.get(&id).map(|record| record.segment)
    }

    /// Every derived polygon, grouped by segment in creation order.
    pub fn polygons(&self) -> impl Iterator<Item = &PeakPolygon> + '_ {
        self.model
            .segments
            .values()
            .flat_map(|record| record.polygons.iter())
    }

    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.model.polygons_len()
    }

    #[must_use]
    pub fn polygons_for(&self, id: SegmentId) -> Option<&[PeakPolygon]> {
        self.model
            .segments
            .get(&id)
            .map(|record| record.polygons.as_slice())
    }

    /// Sample ranges picked in connect mode.
    #[must_use]
    pub fn ranges(&self) -> &[Vec<Sample>] {
        &self.model.ranges
    }

    /// Segment currently being dragged out, if any.
    #[must_use]
    pub fn provisional_segment(&self) -> Option<Segment> {
        self.model
            .interaction
            .drawing()
            .map(|gesture| gesture.provisional_segment())
    }

    /// Materializes the overlay scene and hands it to the renderer.
    pub fn render(&mut self) -> PeakResult<()> {
        let frame = self.overlay_frame();
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn overlay_frame(&self) -> OverlayFrame {
        let interaction = &self.model.interaction;
        let mut frame = OverlayFrame::new(self.samples().to_vec())
            .with_provisional(self.provisional_segment());
        for (id, segment) in self.segments() {
            frame = frame.with_segment(id, segment);
        }
        for polygon in self.polygons() {
            frame = frame.with_polygon(polygon.clone());
        }
        frame.ranges = self.model.ranges.clone();
        frame.hover = interaction.hover();
        frame.selected_sample = interaction
            .selected_sample()
            .and_then(|index| self.model.curve.get(index));
        frame
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

use crate::error::PeakResult;
use crate::render::{OverlayFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch invalid geometry before a
/// real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_segment_count: usize,
    pub last_polygon_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &OverlayFrame) -> PeakResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_segment_count = frame.segments.len();
        self.last_polygon_count = frame.polygons.len();
        Ok(())
    }
}

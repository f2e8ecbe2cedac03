mod frame;
mod null_renderer;

pub use frame::{OverlayFrame, SegmentPrimitive};
pub use null_renderer::NullRenderer;

use crate::error::PeakResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `OverlayFrame` so drawing code stays
/// isolated from the geometry and the editing model.
pub trait Renderer {
    fn render(&mut self, frame: &OverlayFrame) -> PeakResult<()>;
}

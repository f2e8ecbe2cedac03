use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{PeakEngine, PluginEvent};

impl<R: Renderer> PeakEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            mode: self.model.interaction.mode(),
            samples_len: self.model.curve.len(),
            segments_len: self.model.segments.len(),
            polygons_len: self.model.polygons_len(),
            ranges_len: self.model.ranges.len(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}

use tracing::debug;

use crate::error::{PeakError, PeakResult};
use crate::extensions::PeakPlugin;
use crate::render::Renderer;

use super::PeakEngine;

impl<R: Renderer> PeakEngine<R> {
    /// Adds an observer. Plugins receive events in registration order.
    ///
    /// Ids must be non-empty and unique among registered plugins.
    pub fn register_plugin(&mut self, plugin: Box<dyn PeakPlugin>) -> PeakResult<()> {
        let id = plugin.id();
        if id.is_empty() {
            return Err(PeakError::InvalidData(
                "peak plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(id) {
            return Err(PeakError::InvalidData(format!(
                "peak plugin `{id}` is already observing this engine"
            )));
        }
        debug!(plugin = id, "peak plugin registered");
        self.plugins.push(plugin);
        Ok(())
    }

    /// Removes the observer with `plugin_id`. Returns `true` when one was removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|plugin| plugin.id() != plugin_id);
        let removed = self.plugins.len() != before;
        if removed {
            debug!(plugin = plugin_id, "peak plugin unregistered");
        }
        removed
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }
}

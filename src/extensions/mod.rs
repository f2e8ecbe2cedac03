//! Observer hooks for hosts that react to editing-model changes.

pub mod plugins;

pub use plugins::{PeakPlugin, PluginContext, PluginEvent};

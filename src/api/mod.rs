//! Stateful editing model over the pure geometry in [`crate::core`].

mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod json_contract;
mod peak_model;
mod plugin_dispatch;
mod plugin_registry;
mod segment_controller;
mod validation;

pub use data_controller::SampleClickOutcome;
pub use engine::PeakEngine;
pub use engine_config::PeakEngineConfig;
pub use engine_snapshot::{EngineSnapshot, SegmentSnapshot};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};

pub use crate::extensions::{PeakPlugin, PluginContext, PluginEvent};

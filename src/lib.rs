//! peak-rs: baseline-bounded peak regions over sampled curves.
//!
//! The `core` module holds the pure geometry: intersecting a drawn baseline
//! segment with a sampled curve, deriving the closed polygons where the curve
//! rises above it, and snapping arbitrary rtimes to real samples. The `api`
//! module wraps it in a small editing model of user-drawn segments.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PeakEngine, PeakEngineConfig};
pub use crate::core::{Sample, Segment, build_polygons, find_intersections, nearest_sample};
pub use error::{PeakError, PeakResult};

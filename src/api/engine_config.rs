use serde::{Deserialize, Serialize};

use crate::error::{PeakError, PeakResult};

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load editor setup without
/// inventing their own ad-hoc format. Missing JSON fields fall back to the
/// defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakEngineConfig {
    /// Inclusive rtime bounds a dragged sample is clamped into.
    #[serde(default = "default_rtime_domain")]
    pub rtime_domain: (f64, f64),
    /// Inclusive intensity bounds a dragged sample is clamped into.
    #[serde(default = "default_intensity_domain")]
    pub intensity_domain: (f64, f64),
    /// Sample deletion is refused when the curve would drop below this.
    #[serde(default = "default_min_curve_samples")]
    pub min_curve_samples: usize,
    /// Round dragged sample coordinates to whole units.
    #[serde(default = "default_round_dragged_samples")]
    pub round_dragged_samples: bool,
}

impl Default for PeakEngineConfig {
    fn default() -> Self {
        Self {
            rtime_domain: default_rtime_domain(),
            intensity_domain: default_intensity_domain(),
            min_curve_samples: default_min_curve_samples(),
            round_dragged_samples: default_round_dragged_samples(),
        }
    }
}

impl PeakEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rtime_domain(mut self, min: f64, max: f64) -> Self {
        self.rtime_domain = (min, max);
        self
    }

    #[must_use]
    pub fn with_intensity_domain(mut self, min: f64, max: f64) -> Self {
        self.intensity_domain = (min, max);
        self
    }

    #[must_use]
    pub fn with_min_curve_samples(mut self, min_curve_samples: usize) -> Self {
        self.min_curve_samples = min_curve_samples;
        self
    }

    #[must_use]
    pub fn with_round_dragged_samples(mut self, enabled: bool) -> Self {
        self.round_dragged_samples = enabled;
        self
    }

    pub fn from_json_str(input: &str) -> PeakResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PeakError::InvalidConfig(format!("failed to parse config json: {e}")))
    }

    pub fn to_json_pretty(&self) -> PeakResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PeakError::InvalidConfig(format!("failed to serialize config json: {e}")))
    }
}

fn default_rtime_domain() -> (f64, f64) {
    (0.0, 130.0)
}

fn default_intensity_domain() -> (f64, f64) {
    (0.0, 10_000.0)
}

fn default_min_curve_samples() -> usize {
    2
}

fn default_round_dragged_samples() -> bool {
    true
}

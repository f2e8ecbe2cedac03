use crate::error::{PeakError, PeakResult};

use super::PeakEngineConfig;

pub(super) fn validate_engine_config(config: PeakEngineConfig) -> PeakResult<PeakEngineConfig> {
    for (name, (min, max)) in [
        ("rtime_domain", config.rtime_domain),
        ("intensity_domain", config.intensity_domain),
    ] {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(PeakError::InvalidConfig(format!(
                "`{name}` must be finite with min < max"
            )));
        }
    }

    if config.min_curve_samples < 2 {
        return Err(PeakError::InvalidConfig(
            "`min_curve_samples` must be >= 2".to_owned(),
        ));
    }

    Ok(config)
}

/// Clamps a dragged coordinate into `domain`, optionally rounding first.
pub(super) fn bound_dragged_value(value: f64, domain: (f64, f64), round: bool) -> f64 {
    let value = if round { value.round() } else { value };
    value.clamp(domain.0, domain.1)
}

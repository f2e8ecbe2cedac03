use ordered_float::OrderedFloat;

use crate::core::Sample;

/// Returns the sample whose rtime is closest to `rtime`.
///
/// Ties resolve to the first sample in sequence order. Returns `None` for an
/// empty curve.
#[must_use]
pub fn nearest_sample(rtime: f64, curve: &[Sample]) -> Option<Sample> {
    curve
        .iter()
        .copied()
        .min_by_key(|sample| OrderedFloat((sample.rtime - rtime).abs()))
}

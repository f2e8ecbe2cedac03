use crate::core::Sample;

/// Returns samples whose rtime falls inside an inclusive window.
///
/// Bounds may be given in either order.
#[must_use]
pub fn samples_in_rtime_window(samples: &[Sample], start: f64, end: f64) -> Vec<Sample> {
    let (min_t, max_t) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };

    samples
        .iter()
        .copied()
        .filter(|sample| sample.rtime >= min_t && sample.rtime <= max_t)
        .collect()
}

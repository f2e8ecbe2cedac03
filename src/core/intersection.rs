use crate::core::{Sample, Segment};

/// Finds every point where `segment` crosses the polyline through `curve`.
///
/// Each consecutive pair of samples is treated as a finite edge and solved
/// against the segment with the parametric line-line form. Parallel or
/// degenerate edges (zero denominator) are skipped. A crossing is accepted
/// only when it lies within both finite segments, endpoints included.
///
/// The result is sorted by `rtime`. A segment passing exactly through a curve
/// vertex is reported once per adjacent edge; duplicates are kept.
#[must_use]
pub fn find_intersections(segment: &Segment, curve: &[Sample]) -> Vec<Sample> {
    if curve.len() < 2 {
        return Vec::new();
    }

    let Segment { start: p1, end: p2 } = *segment;
    let seg_dx = p2.rtime - p1.rtime;
    let seg_dy = p2.intensity - p1.intensity;

    let mut intersections = Vec::new();
    for edge in curve.windows(2) {
        let (p3, p4) = (edge[0], edge[1]);
        let edge_dx = p4.rtime - p3.rtime;
        let edge_dy = p4.intensity - p3.intensity;

        let denominator = edge_dx * seg_dy - edge_dy * seg_dx;
        if denominator == 0.0 {
            continue;
        }

        let offset_x = p1.rtime - p3.rtime;
        let offset_y = p1.intensity - p3.intensity;
        let ua = (edge_dy * offset_x - edge_dx * offset_y) / denominator;
        let ub = (seg_dy * offset_x - seg_dx * offset_y) / denominator;

        if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
            intersections.push(Sample::new(
                p1.rtime + ua * seg_dx,
                p1.intensity + ua * seg_dy,
            ));
        }
    }

    intersections.sort_by(|a, b| a.rtime.total_cmp(&b.rtime));
    intersections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_segment_never_intersects() {
        let point = Sample::new(5.0, 5.0);
        let curve = [Sample::new(0.0, 0.0), Sample::new(10.0, 10.0)];
        assert!(find_intersections(&Segment::new(point, point), &curve).is_empty());
    }

    #[test]
    fn crossing_on_edge_endpoint_is_accepted() {
        let curve = [Sample::new(0.0, 0.0), Sample::new(10.0, 10.0)];
        let segment = Segment::new(Sample::new(10.0, 0.0), Sample::new(10.0, 20.0));
        let hits = find_intersections(&segment, &curve);
        assert_eq!(hits, vec![Sample::new(10.0, 10.0)]);
    }
}

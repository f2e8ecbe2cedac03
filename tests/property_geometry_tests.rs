use peak_rs::core::{Sample, Segment, build_polygons, find_intersections, nearest_sample};
use proptest::prelude::*;

/// Strictly increasing rtimes with arbitrary intensities.
fn curve_strategy() -> impl Strategy<Value = Vec<Sample>> {
    (
        -1_000.0f64..1_000.0,
        proptest::collection::vec((0.5f64..25.0, -5_000.0f64..5_000.0), 2..48),
    )
        .prop_map(|(start, steps)| {
            let mut rtime = start;
            steps
                .into_iter()
                .map(|(step, intensity)| {
                    rtime += step;
                    Sample::new(rtime, intensity)
                })
                .collect()
        })
}

fn sample_strategy() -> impl Strategy<Value = Sample> {
    (-1_500.0f64..2_500.0, -6_000.0f64..6_000.0)
        .prop_map(|(rtime, intensity)| Sample::new(rtime, intensity))
}

fn max_intensity(curve: &[Sample]) -> f64 {
    curve
        .iter()
        .map(|sample| sample.intensity)
        .fold(f64::NEG_INFINITY, f64::max)
}

fn min_intensity(curve: &[Sample]) -> f64 {
    curve
        .iter()
        .map(|sample| sample.intensity)
        .fold(f64::INFINITY, f64::min)
}

proptest! {
    #[test]
    fn intersections_are_sorted_by_rtime(
        curve in curve_strategy(),
        a in sample_strategy(),
        b in sample_strategy()
    ) {
        let hits = find_intersections(&Segment::new(a, b), &curve);
        for pair in hits.windows(2) {
            prop_assert!(pair[0].rtime <= pair[1].rtime);
        }
    }

    #[test]
    fn intersections_lie_within_curve_and_segment_spans(
        curve in curve_strategy(),
        a in sample_strategy(),
        b in sample_strategy()
    ) {
        let segment = Segment::new(a, b);
        let (seg_min, seg_max) = segment.rtime_span();
        let curve_min = curve[0].rtime;
        let curve_max = curve[curve.len() - 1].rtime;
        let eps = 1e-6;
        for hit in find_intersections(&segment, &curve) {
            prop_assert!(hit.rtime >= seg_min - eps && hit.rtime <= seg_max + eps);
            prop_assert!(hit.rtime >= curve_min - eps && hit.rtime <= curve_max + eps);
        }
    }

    #[test]
    fn polygon_vertices_stay_within_segment_span(
        curve in curve_strategy(),
        a in sample_strategy(),
        b in sample_strategy()
    ) {
        let segment = Segment::new(a, b);
        let (seg_min, seg_max) = segment.rtime_span();
        let eps = 1e-6;
        for polygon in build_polygons(&segment, &curve) {
            prop_assert!(polygon.len() >= 3);
            for vertex in polygon {
                prop_assert!(vertex.rtime >= seg_min - eps && vertex.rtime <= seg_max + eps);
            }
        }
    }

    #[test]
    fn build_polygons_is_idempotent(
        curve in curve_strategy(),
        a in sample_strategy(),
        b in sample_strategy()
    ) {
        let segment = Segment::new(a, b);
        prop_assert_eq!(build_polygons(&segment, &curve), build_polygons(&segment, &curve));
    }

    #[test]
    fn baselines_clear_of_the_curve_never_cross(
        curve in curve_strategy(),
        gap in 1.0f64..1_000.0,
        from in -1_500.0f64..2_500.0,
        to in -1_500.0f64..2_500.0
    ) {
        let above = max_intensity(&curve) + gap;
        let below = min_intensity(&curve) - gap;
        for level in [above, below] {
            let segment = Segment::new(Sample::new(from, level), Sample::new(to, level));
            prop_assert!(find_intersections(&segment, &curve).is_empty());
            prop_assert!(build_polygons(&segment, &curve).is_empty());
        }
    }

    #[test]
    fn monotonic_curve_is_crossed_once_by_a_spanning_baseline(
        start in -1_000.0f64..1_000.0,
        steps in proptest::collection::vec((0.5f64..25.0, 1.0f64..50.0), 2..32),
        pick in any::<prop::sample::Index>()
    ) {
        let mut rtime = start;
        let mut intensity = 0.0;
        let mut curve = vec![Sample::new(rtime, intensity)];
        for (dt, dy) in steps {
            rtime += dt;
            intensity += dy;
            curve.push(Sample::new(rtime, intensity));
        }

        // Midway between two consecutive intensities, so no vertex is touched.
        let k = pick.index(curve.len() - 1);
        let level = (curve[k].intensity + curve[k + 1].intensity) / 2.0;
        let segment = Segment::new(
            Sample::new(start - 1.0, level),
            Sample::new(rtime + 1.0, level),
        );

        prop_assert_eq!(find_intersections(&segment, &curve).len(), 1);
        prop_assert!(build_polygons(&segment, &curve).is_empty());
    }

    #[test]
    fn nearest_sample_minimizes_distance_with_first_tie(
        curve in curve_strategy(),
        rtime in -1_500.0f64..2_500.0
    ) {
        let nearest = nearest_sample(rtime, &curve).expect("non-empty curve");
        let best = (nearest.rtime - rtime).abs();
        let first_at_best = curve
            .iter()
            .position(|sample| (sample.rtime - rtime).abs() == best)
            .expect("nearest sample belongs to curve");
        prop_assert_eq!(curve[first_at_best], nearest);
        for sample in &curve {
            prop_assert!((sample.rtime - rtime).abs() >= best);
        }
    }
}

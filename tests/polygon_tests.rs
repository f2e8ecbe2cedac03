use approx::assert_abs_diff_eq;
use peak_rs::core::{Sample, Segment, build_polygons, find_intersections};

fn bump_curve() -> Vec<Sample> {
    vec![
        Sample::new(0.0, 0.0),
        Sample::new(10.0, 0.0),
        Sample::new(20.0, 10.0),
        Sample::new(30.0, 0.0),
        Sample::new(40.0, 0.0),
    ]
}

/// Five gaussian peaks sampled every 10 rtime units, as produced by the demo
/// chromatogram generator.
fn chromatogram() -> Vec<Sample> {
    let peaks = [
        (10_000.0, 20.0),
        (8_000.0, 40.0),
        (9_000.0, 60.0),
        (9_500.0, 80.0),
        (8_500.0, 100.0),
    ];
    (0..=12)
        .map(|step| {
            let rtime = f64::from(step) * 10.0;
            let intensity = peaks
                .iter()
                .map(|(height, center)| {
                    let d: f64 = rtime - center;
                    height * (-(d * d) / 50.0).exp()
                })
                .fold(f64::NEG_INFINITY, f64::max);
            Sample::new(rtime, intensity)
        })
        .collect()
}

fn horizontal(level: f64, from: f64, to: f64) -> Segment {
    Segment::new(Sample::new(from, level), Sample::new(to, level))
}

#[test]
fn zero_baseline_encloses_the_bump_between_its_feet() {
    let polygons = build_polygons(&horizontal(0.0, 0.0, 40.0), &bump_curve());
    assert_eq!(
        polygons,
        vec![vec![
            Sample::new(10.0, 0.0),
            Sample::new(10.0, 0.0),
            Sample::new(20.0, 10.0),
            Sample::new(30.0, 0.0),
            Sample::new(30.0, 0.0),
        ]]
    );
}

#[test]
fn mid_height_baseline_cuts_off_the_tip() {
    let polygons = build_polygons(&horizontal(5.0, 0.0, 40.0), &bump_curve());
    assert_eq!(
        polygons,
        vec![vec![
            Sample::new(15.0, 5.0),
            Sample::new(20.0, 10.0),
            Sample::new(25.0, 5.0),
        ]]
    );
}

#[test]
fn baseline_entirely_below_curve_has_no_bounding_crossings() {
    let segment = horizontal(-100.0, 0.0, 40.0);
    assert!(find_intersections(&segment, &bump_curve()).is_empty());
    assert!(build_polygons(&segment, &bump_curve()).is_empty());
}

#[test]
fn single_crossing_cannot_bound_a_polygon() {
    let curve = vec![
        Sample::new(0.0, 0.0),
        Sample::new(10.0, 10.0),
        Sample::new(20.0, 20.0),
    ];
    let segment = Segment::new(Sample::new(0.0, 12.0), Sample::new(20.0, 2.0));
    assert_eq!(find_intersections(&segment, &curve).len(), 1);
    assert!(build_polygons(&segment, &curve).is_empty());
}

#[test]
fn touching_the_apex_is_not_a_peak() {
    let segment = horizontal(10.0, 0.0, 40.0);
    assert_eq!(find_intersections(&segment, &bump_curve()).len(), 2);
    assert!(build_polygons(&segment, &bump_curve()).is_empty());
}

#[test]
fn sloped_baseline_onto_the_apex_encloses_nothing() {
    let segment = Segment::new(Sample::new(0.0, 0.0), Sample::new(20.0, 10.0));
    assert!(build_polygons(&segment, &bump_curve()).is_empty());
}

#[test]
fn high_baseline_splits_chromatogram_into_one_polygon_per_peak() {
    let curve = chromatogram();
    let polygons = build_polygons(&horizontal(3_000.0, 0.0, 120.0), &curve);
    assert_eq!(polygons.len(), 5);

    for (polygon, apex) in polygons.iter().zip([20.0, 40.0, 60.0, 80.0, 100.0]) {
        assert_eq!(polygon.len(), 3);
        assert_abs_diff_eq!(polygon[1].rtime, apex);
        assert_abs_diff_eq!(polygon[0].intensity, 3_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(polygon[2].intensity, 3_000.0, epsilon = 1e-9);
    }
}

#[test]
fn low_baseline_merges_chromatogram_into_a_single_region() {
    let curve = chromatogram();
    let polygons = build_polygons(&horizontal(1_000.0, 0.0, 120.0), &curve);
    assert_eq!(polygons.len(), 1);
    // Both boundary crossings plus every sample from rtime 10 through 110.
    assert_eq!(polygons[0].len(), 13);
}

#[test]
fn polygons_are_reproducible() {
    let curve = chromatogram();
    let segment = Segment::new(Sample::new(0.0, 500.0), Sample::new(120.0, 4_000.0));
    assert_eq!(
        build_polygons(&segment, &curve),
        build_polygons(&segment, &curve)
    );
}

#[test]
fn polygon_vertices_stay_within_segment_span() {
    let curve = chromatogram();
    let segment = Segment::new(Sample::new(15.0, 2_000.0), Sample::new(95.0, 2_500.0));
    let polygons = build_polygons(&segment, &curve);
    assert!(!polygons.is_empty());

    let (min_t, max_t) = segment.rtime_span();
    for polygon in &polygons {
        assert!(polygon.len() >= 3);
        for vertex in polygon {
            assert!(vertex.rtime >= min_t - 1e-9 && vertex.rtime <= max_t + 1e-9);
        }
    }
}

// Integration tests for Catmull-Rom evaluation and sampling

use approx::assert_abs_diff_eq;
use catrom_curve::catmull_rom::{working_points, ParameterTable};
use catrom_curve::{
    evaluate_point, evaluate_sampled_curve, sample_curve, CatmullRomCurve, Curve2, CurveOptions,
};
use catrom_math::{dvec2, Point2};

const EPSILON: f64 = 1e-9;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn zigzag() -> Vec<Point2> {
    vec![dvec2(0.0, 0.0), dvec2(1.0, 2.0), dvec2(2.0, 0.0), dvec2(3.0, 2.0)]
}

fn uneven() -> Vec<Point2> {
    vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(5.0, 3.0), dvec2(5.5, 4.0)]
}

#[test]
fn integration_endpoints_open() {
    init_logger();
    for alpha in [0.0, 0.5, 1.0] {
        for pts in [zigzag(), uneven()] {
            assert_eq!(evaluate_point(&pts, 0.0, false, alpha), pts[0]);
            assert_eq!(evaluate_point(&pts, 1.0, false, alpha), pts[pts.len() - 1]);
        }
    }
}

#[test]
fn integration_closed_returns_to_start() {
    let pts = zigzag();
    assert_eq!(evaluate_point(&pts, 0.0, true, 0.5), pts[0]);
    assert_eq!(evaluate_point(&pts, 1.0, true, 0.5), pts[0]);

    let samples = evaluate_sampled_curve(&pts, true, 50, 0.5);
    assert_eq!(samples.len(), 50);
    assert_eq!(samples[0], pts[0]);
    assert_eq!(samples[49], pts[0]);
}

#[test]
fn integration_sample_count_and_ends() {
    init_logger();
    let pts = uneven();
    for n in [2, 3, 10, 100] {
        let samples = evaluate_sampled_curve(&pts, false, n, 0.5);
        assert_eq!(samples.len(), n);
        assert_eq!(samples[0], evaluate_point(&pts, 0.0, false, 0.5));
        assert_eq!(samples[n - 1], evaluate_point(&pts, 1.0, false, 0.5));
    }
}

#[test]
fn integration_samples_match_single_point_evaluation() {
    let pts = uneven();
    let n = 11;
    let samples = evaluate_sampled_curve(&pts, false, n, 0.5);
    for (k, sample) in samples.iter().enumerate() {
        let t = k as f64 / (n - 1) as f64;
        assert_eq!(*sample, evaluate_point(&pts, t, false, 0.5));
    }
}

#[test]
fn integration_collinear_points_stay_on_line() {
    let sets = [
        vec![dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(2.0, 2.0), dvec2(3.0, 3.0)],
        vec![dvec2(0.0, 0.0), dvec2(0.5, 0.5), dvec2(4.0, 4.0), dvec2(4.2, 4.2)],
    ];
    for pts in &sets {
        for alpha in [0.0, 0.25, 0.5, 0.75, 1.0] {
            for p in evaluate_sampled_curve(pts, false, 40, alpha) {
                assert_abs_diff_eq!(p.x, p.y, epsilon = EPSILON);
            }
        }
    }
}

#[test]
fn integration_short_inputs_yield_empty_samples() {
    let two = [dvec2(0.0, 0.0), dvec2(1.0, 1.0)];
    let one = [dvec2(0.0, 0.0)];
    assert!(evaluate_sampled_curve(&two, false, 100, 0.5).is_empty());
    assert!(evaluate_sampled_curve(&two, true, 100, 0.5).is_empty());
    assert!(evaluate_sampled_curve(&one, false, 100, 0.5).is_empty());
    assert!(evaluate_sampled_curve(&[], false, 100, 0.5).is_empty());
    assert_eq!(evaluate_point(&one, 0.3, false, 0.5), Point2::ZERO);
}

#[test]
fn integration_alpha_changes_interior_only() {
    let pts = uneven();
    let uniform = evaluate_sampled_curve(&pts, false, 9, 0.0);
    let chordal = evaluate_sampled_curve(&pts, false, 9, 1.0);

    assert_eq!(uniform[0], chordal[0]);
    assert_eq!(uniform[8], chordal[8]);

    let max_shift = uniform[1..8]
        .iter()
        .zip(&chordal[1..8])
        .map(|(a, b)| a.distance(*b))
        .fold(0.0, f64::max);
    assert!(max_shift > 1e-3, "interior samples barely moved: {}", max_shift);
}

#[test]
fn integration_five_sample_example() {
    let pts = zigzag();
    let samples = evaluate_sampled_curve(&pts, false, 5, 0.5);

    assert_eq!(samples.len(), 5);
    assert_eq!(samples[0], dvec2(0.0, 0.0));
    assert_eq!(samples[4], dvec2(3.0, 2.0));

    // Interior samples are not all on the chord from first to last point
    let off_chord = samples[1..4]
        .iter()
        .map(|p| (p.x * 2.0 - p.y * 3.0).abs())
        .fold(0.0, f64::max);
    assert!(off_chord > 0.1);

    // The curve stays in the neighborhood of its control polygon
    for p in &samples {
        assert!(p.x > -0.5 && p.x < 3.5, "{:?}", p);
        assert!(p.y > -0.5 && p.y < 2.5, "{:?}", p);
    }
}

#[test]
fn integration_passes_through_control_points() {
    for closed in [false, true] {
        for alpha in [0.0, 0.5, 1.0] {
            let pts = uneven();
            let working = working_points(&pts, closed);
            let table = ParameterTable::new(&working, alpha);
            assert_eq!(table.len(), working.len());
            for (i, &t) in table.as_slice().iter().enumerate() {
                let p = evaluate_point(&pts, t, closed, alpha);
                assert_eq!(
                    p, working[i],
                    "closed={} alpha={} point {} at t={}",
                    closed, alpha, i, t
                );
            }
        }
    }
}

#[test]
fn integration_parameter_table_invariants() {
    for alpha in [0.0, 0.5, 1.0] {
        let table = ParameterTable::new(&uneven(), alpha);
        let v = table.as_slice();
        assert_eq!(v[0], 0.0);
        assert_eq!(v[v.len() - 1], 1.0);
        assert!(v.windows(2).all(|w| w[0] < w[1]), "{:?}", v);
    }
}

#[test]
fn integration_coincident_points_propagate_non_finite() {
    let pts = vec![dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(1.0, 1.0), dvec2(2.0, 0.0)];
    // The segment after the duplicate uses a zero-length neighbor chord
    let p = evaluate_point(&pts, 0.9, false, 0.5);
    assert!(!p.is_finite());
    assert!(CatmullRomCurve::new(pts, false, 0.5).is_err());
}

#[test]
fn integration_curve_object_matches_free_functions() {
    init_logger();
    let pts = uneven();
    let options = CurveOptions::default().with_sample_count(17);
    let curve = CatmullRomCurve::from_options(pts.clone(), &options).unwrap();

    assert_eq!(curve.sample(17), sample_curve(&pts, &options));
    assert_eq!(curve.point_at(0.37), evaluate_point(&pts, 0.37, false, 0.5));
    assert_eq!(curve.domain(), (0.0, 1.0));
}

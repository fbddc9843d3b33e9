//! Catmull-Rom core: parameter table, Bézier conversion, and curve evaluation.
//!
//! The free functions here never fail. Inputs with fewer than
//! [`MIN_CONTROL_POINTS`] points produce a fixed fallback, and coincident
//! adjacent points propagate NaN/infinity as IEEE arithmetic dictates. Use
//! [`crate::CatmullRomCurve`] for validated input.

pub mod bezier;
pub mod params;

use catrom_math::Point2;

pub use bezier::{bezier_segment, cubic_derivative, cubic_point};
pub use params::ParameterTable;

/// Centripetal parameterization.
pub const DEFAULT_ALPHA: f64 = 0.5;
/// Samples produced when no count is configured.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;
/// Fewest control points that define a curve.
pub const MIN_CONTROL_POINTS: usize = 3;

/// Copy of `points`, with the first point appended when `closed`.
pub fn working_points(points: &[Point2], closed: bool) -> Vec<Point2> {
    let mut working = Vec::with_capacity(points.len() + 1);
    working.extend_from_slice(points);
    if closed {
        if let Some(&first) = points.first() {
            working.push(first);
        }
    }
    working
}

/// Bézier control points of `segment` in the working sequence.
///
/// Neighbors missing at either end are taken from the other end of the loop
/// when `closed`, otherwise reflected through the end point.
pub(crate) fn segment_controls(
    points: &[Point2],
    segment: usize,
    closed: bool,
    alpha: f64,
) -> [Point2; 4] {
    let n = points.len();
    let start = points[segment];
    let end = points[segment + 1];

    let before = if segment > 0 {
        points[segment - 1]
    } else if closed {
        points[n - 2]
    } else {
        start - (end - start)
    };

    let after = if segment + 2 < n {
        points[segment + 2]
    } else if closed {
        points[1]
    } else {
        end + (end - start)
    };

    bezier_segment(before, start, end, after, alpha)
}

pub(crate) fn evaluate_with_table(
    points: &[Point2],
    table: &ParameterTable,
    t: f64,
    closed: bool,
    alpha: f64,
) -> Point2 {
    let (segment, u) = table.locate(t);
    cubic_point(&segment_controls(points, segment, closed, alpha), u)
}

pub(crate) fn sample_with_table(
    points: &[Point2],
    table: &ParameterTable,
    closed: bool,
    sample_count: usize,
    alpha: f64,
) -> Vec<Point2> {
    match sample_count {
        0 => Vec::new(),
        1 => vec![evaluate_with_table(points, table, 0.0, closed, alpha)],
        _ => {
            let last = (sample_count - 1) as f64;
            (0..sample_count)
                .map(|k| evaluate_with_table(points, table, k as f64 / last, closed, alpha))
                .collect()
        }
    }
}

/// Evaluate the Catmull-Rom curve through `control_points` at global parameter `t`.
///
/// Returns `(0, 0)` for fewer than three control points. `t` is clamped to
/// `[0, 1]`; NaN evaluates to the start point. The result equals a control
/// point exactly when `t` equals that point's global parameter.
pub fn evaluate_point(control_points: &[Point2], t: f64, closed: bool, alpha: f64) -> Point2 {
    if control_points.len() < MIN_CONTROL_POINTS {
        return Point2::ZERO;
    }
    let points = working_points(control_points, closed);
    let table = ParameterTable::new(&points, alpha);
    evaluate_with_table(&points, &table, t, closed, alpha)
}

/// Sample `sample_count` points uniformly in global parameter space.
///
/// Samples sit at `t = k / (sample_count - 1)`. The parameter table is built
/// once and shared by every sample. Returns an empty vector for two or fewer
/// control points; `sample_count == 1` yields only the start point.
pub fn evaluate_sampled_curve(
    control_points: &[Point2],
    closed: bool,
    sample_count: usize,
    alpha: f64,
) -> Vec<Point2> {
    if control_points.len() < MIN_CONTROL_POINTS {
        return Vec::new();
    }
    log::trace!(
        "sampling {} points through {} control points (closed: {}, alpha: {})",
        sample_count,
        control_points.len(),
        closed,
        alpha
    );

    let points = working_points(control_points, closed);
    let table = ParameterTable::new(&points, alpha);
    sample_with_table(&points, &table, closed, sample_count, alpha)
}

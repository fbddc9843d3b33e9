//! Catmull-Rom to cubic Bézier conversion and cubic evaluation.

use catrom_math::{Point2, Vector2};

/// Cubic Bézier control points `[c0, c1, c2, c3]` of the Catmull-Rom
/// segment from `p_start` to `p_end`.
///
/// `c0 == p_start` and `c3 == p_end`. The interior points blend the four
/// inputs with chord distance powers (`d^alpha`, `d^(2 alpha)`). A zero
/// distance between `p_before`/`p_start` or `p_end`/`p_after` with
/// `alpha > 0` divides by zero and yields non-finite coordinates.
pub fn bezier_segment(
    p_before: Point2,
    p_start: Point2,
    p_end: Point2,
    p_after: Point2,
    alpha: f64,
) -> [Point2; 4] {
    let d1 = p_before.distance(p_start);
    let d2 = p_start.distance(p_end);
    let d3 = p_end.distance(p_after);

    let d1a = d1.powf(alpha);
    let d12a = d1.powf(2.0 * alpha);
    let d2a = d2.powf(alpha);
    let d22a = d2.powf(2.0 * alpha);
    let d3a = d3.powf(alpha);
    let d32a = d3.powf(2.0 * alpha);

    let c1 = (d12a * p_end - d22a * p_before + (2.0 * d12a + 3.0 * d1a * d2a + d22a) * p_start)
        / (3.0 * d1a * (d1a + d2a));
    let c2 = (d32a * p_start - d22a * p_after + (2.0 * d32a + 3.0 * d3a * d2a + d22a) * p_end)
        / (3.0 * d3a * (d3a + d2a));

    [p_start, c1, c2, p_end]
}

/// Evaluate a cubic Bézier at local parameter `u` (Bernstein form).
pub fn cubic_point(c: &[Point2; 4], u: f64) -> Point2 {
    let u2 = u * u;
    let u3 = u2 * u;
    let s = 1.0 - u;
    let s2 = s * s;
    let s3 = s2 * s;
    c[0] * s3 + c[1] * (3.0 * u * s2) + c[2] * (3.0 * u2 * s) + c[3] * u3
}

/// First derivative of a cubic Bézier with respect to `u`.
pub fn cubic_derivative(c: &[Point2; 4], u: f64) -> Vector2 {
    let s = 1.0 - u;
    (c[1] - c[0]) * (3.0 * s * s) + (c[2] - c[1]) * (6.0 * s * u) + (c[3] - c[2]) * (3.0 * u * u)
}

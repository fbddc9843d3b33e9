//! Tessellation utilities for converting curves to polylines.

use catrom_math::Point2;

use crate::curve::Curve2;

/// Convert a curve to a polyline using adaptive subdivision.
///
/// Each span between consecutive breakpoints is subdivided recursively
/// where the midpoint deviation from the chord exceeds `tolerance`. Every
/// breakpoint appears in the output.
///
/// # Arguments
/// * `curve` - The curve to tessellate
/// * `tolerance` - Maximum allowed deviation from the true curve
///
/// # Returns
/// A vector of points approximating the curve.
pub fn curve_to_polyline(curve: &dyn Curve2, tolerance: f64) -> Vec<Point2> {
    let breakpoints = curve.breakpoints();
    let mut points = Vec::new();
    let Some(&t_start) = breakpoints.first() else {
        return points;
    };
    points.push(curve.point_at(t_start));

    for span in breakpoints.windows(2) {
        let (t0, t1) = (span[0], span[1]);
        if t1 > t0 {
            subdivide_curve(curve, t0, t1, tolerance, &mut points, 0);
        }
    }
    points
}

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

fn subdivide_curve(
    curve: &dyn Curve2,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<Point2>,
    depth: u32,
) {
    if depth >= MAX_DEPTH {
        points.push(curve.point_at(t1));
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.point_at(t0);
    let p1 = curve.point_at(t1);
    let p_mid = curve.point_at(t_mid);

    // Chord midpoint
    let chord_mid = (p0 + p1) * 0.5;
    let deviation = (p_mid - chord_mid).length();

    if deviation > tolerance {
        subdivide_curve(curve, t0, t_mid, tolerance, points, depth + 1);
        subdivide_curve(curve, t_mid, t1, tolerance, points, depth + 1);
    } else {
        points.push(p1);
    }
}

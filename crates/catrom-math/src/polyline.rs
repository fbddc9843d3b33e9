//! Polyline measurement helpers.

use crate::Point2;

/// Euclidean length of each consecutive segment of `points`.
pub fn segment_lengths(points: &[Point2]) -> impl Iterator<Item = f64> + '_ {
    points.windows(2).map(|w| w[0].distance(w[1]))
}

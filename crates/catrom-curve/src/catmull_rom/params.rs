//! Global parameter table for Catmull-Rom evaluation.

use catrom_math::{polyline::segment_lengths, Point2};

/// Global curve parameter of each control point.
///
/// Built from cumulative chord length raised to `alpha`, normalized so the
/// first entry is `0.0` and the last is `1.0`. Coincident adjacent points
/// contribute a zero increment; if every point coincides the interior
/// entries are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterTable {
    values: Vec<f64>,
}

impl ParameterTable {
    pub fn new(points: &[Point2], alpha: f64) -> Self {
        let n = points.len();
        if n == 0 {
            return Self { values: Vec::new() };
        }

        let mut cumulative = Vec::with_capacity(n);
        cumulative.push(0.0);
        let mut total = 0.0;
        for d in segment_lengths(points) {
            total += d.powf(alpha);
            cumulative.push(total);
        }

        let mut values: Vec<f64> = cumulative.iter().map(|c| c / total).collect();
        values[0] = 0.0;
        if n > 1 {
            values[n - 1] = 1.0;
        }

        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Span of segment `i` in global parameter space; `0.0` past the last segment.
    pub fn span(&self, i: usize) -> f64 {
        match (self.values.get(i), self.values.get(i + 1)) {
            (Some(t0), Some(t1)) => t1 - t0,
            _ => 0.0,
        }
    }

    /// Locate the segment containing `t` and the local parameter within it.
    ///
    /// `t <= 0` (and NaN) map to the start of the first segment, `t >= 1`
    /// to the end of the last. Otherwise the segment is the first `i` with
    /// `t < table[i + 1]`. A table with fewer than two entries has no
    /// segment and always yields `(0, 0.0)`.
    pub fn locate(&self, t: f64) -> (usize, f64) {
        let Some(last_segment) = self.values.len().checked_sub(2) else {
            return (0, 0.0);
        };

        if t.is_nan() || t <= 0.0 {
            return (0, 0.0);
        }
        if t >= 1.0 {
            return (last_segment, 1.0);
        }

        let i = self.values[1..]
            .iter()
            .position(|&v| t < v)
            .unwrap_or(last_segment);
        let u = (t - self.values[i]) / self.span(i);
        (i, u)
    }
}

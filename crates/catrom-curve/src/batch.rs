//! Sampling many independent curves, e.g. one line per record of a dataset.

use catrom_math::Point2;
use rayon::prelude::*;

use crate::catmull_rom::evaluate_sampled_curve;
use crate::options::CurveOptions;

/// Sample one curve through `control_points` with the given options.
pub fn sample_curve(control_points: &[Point2], options: &CurveOptions) -> Vec<Point2> {
    evaluate_sampled_curve(
        control_points,
        options.closed,
        options.sample_count,
        options.alpha,
    )
}

/// Sample every polyline in parallel. Output order matches input order;
/// polylines with two or fewer points yield empty samples.
pub fn sample_curves<P>(polylines: &[P], options: &CurveOptions) -> Vec<Vec<Point2>>
where
    P: AsRef<[Point2]> + Sync,
{
    log::debug!(
        "sampling {} curves with {} points each",
        polylines.len(),
        options.sample_count
    );
    polylines
        .par_iter()
        .map(|points| sample_curve(points.as_ref(), options))
        .collect()
}

//! Validated Catmull-Rom curve.

use catrom_core::traits::{BoundingBox, Validate};
use catrom_core::{CurveError, Result, Tolerance};
use catrom_math::{Aabb2, Point2, Vector2};

use super::Curve2;
use crate::catmull_rom::{
    cubic_derivative, evaluate_with_table, sample_with_table, segment_controls, working_points,
    ParameterTable, MIN_CONTROL_POINTS,
};
use crate::options::CurveOptions;

/// A Catmull-Rom curve through owned control points, parameterized over `[0, 1]`.
///
/// Construction rejects input the free functions would turn into NaN:
/// too few points, non-finite coordinates, an `alpha` outside `[0, 1]`, and
/// adjacent control points closer than the linear tolerance (including the
/// closing pair of a closed curve). The parameter table is built once here.
#[derive(Debug, Clone)]
pub struct CatmullRomCurve {
    control_points: Vec<Point2>,
    closed: bool,
    alpha: f64,
    tolerance: Tolerance,
    working: Vec<Point2>,
    parameters: ParameterTable,
}

impl CatmullRomCurve {
    pub fn new(control_points: Vec<Point2>, closed: bool, alpha: f64) -> Result<Self> {
        Self::with_tolerance(control_points, closed, alpha, Tolerance::default())
    }

    pub fn from_options(control_points: Vec<Point2>, options: &CurveOptions) -> Result<Self> {
        options.validate()?;
        Self::new(control_points, options.closed, options.alpha)
    }

    pub fn with_tolerance(
        control_points: Vec<Point2>,
        closed: bool,
        alpha: f64,
        tolerance: Tolerance,
    ) -> Result<Self> {
        if let Err(e) = check_input(&control_points, closed, alpha, tolerance) {
            log::debug!("rejected Catmull-Rom input: {}", e);
            return Err(e);
        }

        let working = working_points(&control_points, closed);
        let parameters = ParameterTable::new(&working, alpha);
        Ok(Self {
            control_points,
            closed,
            alpha,
            tolerance,
            working,
            parameters,
        })
    }

    pub fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Global parameter of each point of the working sequence. For a closed
    /// curve the last entry belongs to the repeated first point.
    pub fn parameters(&self) -> &[f64] {
        self.parameters.as_slice()
    }

    pub fn segment_count(&self) -> usize {
        self.working.len() - 1
    }

    /// Cubic Bézier control points of every segment, in order.
    pub fn bezier_segments(&self) -> Vec<[Point2; 4]> {
        (0..self.segment_count())
            .map(|i| segment_controls(&self.working, i, self.closed, self.alpha))
            .collect()
    }

    /// Sample `count` points uniformly in parameter space.
    pub fn sample(&self, count: usize) -> Vec<Point2> {
        sample_with_table(&self.working, &self.parameters, self.closed, count, self.alpha)
    }
}

fn check_input(points: &[Point2], closed: bool, alpha: f64, tolerance: Tolerance) -> Result<()> {
    if points.len() < MIN_CONTROL_POINTS {
        return Err(CurveError::TooFewPoints {
            required: MIN_CONTROL_POINTS,
            got: points.len(),
        });
    }
    if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
        return Err(CurveError::InvalidOption(format!(
            "alpha must lie in [0, 1], got {}",
            alpha
        )));
    }
    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        return Err(CurveError::NonFinite(format!(
            "control point {} is {:?}",
            i, points[i]
        )));
    }
    for (i, w) in points.windows(2).enumerate() {
        if tolerance.is_zero(w[0].distance(w[1])) {
            return Err(CurveError::Degenerate(format!(
                "control points {} and {} coincide",
                i,
                i + 1
            )));
        }
    }
    if closed {
        let last = points.len() - 1;
        if tolerance.is_zero(points[last].distance(points[0])) {
            return Err(CurveError::Degenerate(format!(
                "closing control point {} coincides with the first",
                last
            )));
        }
    }
    Ok(())
}

impl Curve2 for CatmullRomCurve {
    fn point_at(&self, t: f64) -> Point2 {
        evaluate_with_table(&self.working, &self.parameters, t, self.closed, self.alpha)
    }

    /// Derivative with respect to the global parameter.
    fn tangent_at(&self, t: f64) -> Vector2 {
        let (segment, u) = self.parameters.locate(t);
        let controls = segment_controls(&self.working, segment, self.closed, self.alpha);
        cubic_derivative(&controls, u) / self.parameters.span(segment)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn breakpoints(&self) -> Vec<f64> {
        self.parameters.as_slice().to_vec()
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Validate for CatmullRomCurve {
    fn validate(&self) -> Result<()> {
        check_input(&self.control_points, self.closed, self.alpha, self.tolerance)
    }
}

impl BoundingBox for CatmullRomCurve {
    type Point = Point2;

    /// Union of each segment's Bézier control point box, which encloses the curve.
    fn bounding_box(&self) -> (Point2, Point2) {
        self.bezier_segments()
            .iter()
            .filter_map(|controls| Aabb2::from_points(controls))
            .reduce(|acc, aabb| acc.merge(&aabb))
            .map_or((Point2::ZERO, Point2::ZERO), |aabb| (aabb.min, aabb.max))
    }
}

//! Curve trait and implementations.

mod catmull_rom;

use catrom_math::{Point2, Vector2};

pub use catmull_rom::CatmullRomCurve;

/// Trait for parametric curves in the plane.
pub trait Curve2: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point2;

    /// Evaluate the tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector2;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Parameters where the curve switches between polynomial pieces,
    /// including both ends of the domain.
    fn breakpoints(&self) -> Vec<f64> {
        let (t_min, t_max) = self.domain();
        vec![t_min, t_max]
    }

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }
}

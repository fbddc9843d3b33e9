//! Catrom curves: Catmull-Rom evaluation through 2D control points.

pub mod batch;
pub mod catmull_rom;
pub mod curve;
pub mod options;
pub mod tessellate;

pub use batch::{sample_curve, sample_curves};
pub use catmull_rom::{evaluate_point, evaluate_sampled_curve, ParameterTable};
pub use curve::{CatmullRomCurve, Curve2};
pub use options::CurveOptions;

pub mod aabb;
pub mod polyline;

pub use glam::{dvec2, DVec2};
pub use aabb::Aabb2;
pub use polyline::segment_lengths;

pub type Point2 = DVec2;
pub type Vector2 = DVec2;

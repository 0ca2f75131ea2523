// src/numerics/types/point.rs
// Point2 is an alias for Vector2.

use super::vector::Vector2;

/// Point2 is an alias to Vector2 to represent positions in the plane.
///
/// Positions and displacements share the same arithmetic: `point - point`
/// gives a displacement, `point + displacement` gives a point.
pub type Point2<T = f32> = Vector2<T>;

pub mod sampling;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type. Connective structures lift planar points onto `z = 0`.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Lifts a planar point onto the `z = 0` plane.
#[must_use]
pub fn lift(p: &Point2) -> Point3 {
    Point3::new(p.x, p.y, 0.0)
}


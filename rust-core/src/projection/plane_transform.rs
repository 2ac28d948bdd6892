use nalgebra::Vector2;

/// A map from lattice plane coordinates to application coordinates.
///
/// Applied once per element after the disc crop; it never affects lattice topology.
pub trait PlaneTransform {
    fn apply(&self, point: Vector2<f64>) -> Vector2<f64>;
}

impl<F> PlaneTransform for F
where
    F: Fn(Vector2<f64>) -> Vector2<f64>,
{
    fn apply(&self, point: Vector2<f64>) -> Vector2<f64> {
        self(point)
    }
}

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can detect whether `T` lies entirely within `Self`.
///
/// Due to floating point arithmetic precision, a shape that touches the boundary of `Self`
/// is considered to be enclosed.
pub trait AlmostEncloses<T> {
    fn almost_encloses(&self, other: &T) -> bool;
}

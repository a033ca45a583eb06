use crate::constants::TWICE_PI;
use cgmath::*;

/// Map a 2D sample to the unit disk with a radius linear in `u.x`
/// and an angle linear in `u.y`.
/// The result is NOT uniform over the disk area: the radial density is
/// constant while the circumference grows with the radius, so points
/// pile up near the center.
pub fn non_uniform_sample_disk(u: Point2<f32>) -> Vector2<f32> {
    polar(u.x, u.y * TWICE_PI)
}

/// Map a 2D sample uniformly (per unit area) to the unit disk.
/// Taking the square root of `u.x` makes the chance to land in the ring
/// [r, r + dr] proportional to its area 2πr dr.
pub fn uniform_sample_disk(u: Point2<f32>) -> Vector2<f32> {
    polar(u.x.sqrt(), u.y * TWICE_PI)
}

#[inline]
fn polar(r: f32, theta: f32) -> Vector2<f32> {
    Vector2::new(r * theta.cos(), r * theta.sin())
}

/// Angle of `v` in [0, 2π)
pub fn angle(v: Vector2<f32>) -> f32 {
    v.y.atan2(v.x).modulo(TWICE_PI)
}

pub trait ModuloSignedExt {
    fn modulo(&self, n: Self) -> Self;
}
macro_rules! modulo_signed_ext_impl {
    ($($t:ty)*) => ($(
        impl ModuloSignedExt for $t {
            #[inline]
            fn modulo(&self, n: Self) -> Self {
                (self % n + n) % n
            }
        }
    )*)
}
modulo_signed_ext_impl! { f32 }

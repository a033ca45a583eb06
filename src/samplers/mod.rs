use cgmath::Point2;

/// Source of uniform random numbers in [0, 1).
/// Generators draw from it explicitly so a fixed seed gives fixed points.
pub trait Sampler {
    fn next(&mut self) -> f32;
    /// Two consecutive draws: `x` first, then `y`
    fn next2d(&mut self) -> Point2<f32>;
}

pub mod independent;

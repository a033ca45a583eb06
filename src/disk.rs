use crate::math::{non_uniform_sample_disk, uniform_sample_disk};
use crate::samplers::Sampler;
use cgmath::*;

/// Tolerance on the containment test, to absorb f32 rounding when the
/// disk offset is added to the center
const CONTAINS_EPSILON: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point2<f32>,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Point2<f32>, radius: f32) -> Circle {
        Circle { center, radius }
    }

    pub fn distance(&self, p: Point2<f32>) -> f32 {
        (p - self.center).magnitude()
    }

    pub fn contains(&self, p: Point2<f32>) -> bool {
        self.distance(p) <= self.radius + CONTAINS_EPSILON
    }
}

/// How the radial distance of a sample is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiskSampling {
    /// Radius linear in the random draw (over-samples the center)
    NonUniform,
    /// Radius as the square root of the random draw (area-uniform)
    Uniform,
}

impl DiskSampling {
    /// Generate one point inside `circle`.
    /// The first draw controls the distance, the second the angle.
    pub fn sample(self, circle: &Circle, sampler: &mut dyn Sampler) -> Point2<f32> {
        let u = sampler.next2d();
        let d = match self {
            DiskSampling::NonUniform => non_uniform_sample_disk(u),
            DiskSampling::Uniform => uniform_sample_disk(u),
        };
        circle.center + d * circle.radius
    }
}

/// Ordered points generated inside one circle with one sampling method.
/// Order has no meaning beyond display order.
pub struct PointSet {
    circle: Circle,
    method: DiskSampling,
    points: Vec<Point2<f32>>,
}

impl PointSet {
    pub fn new(circle: Circle, method: DiskSampling) -> PointSet {
        PointSet {
            circle,
            method,
            points: vec![],
        }
    }

    pub fn circle(&self) -> &Circle {
        &self.circle
    }
    pub fn method(&self) -> DiskSampling {
        self.method
    }
    pub fn points(&self) -> &[Point2<f32>] {
        &self.points
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Generate a new point and append it to the set
    pub fn add_point(&mut self, sampler: &mut dyn Sampler) -> Point2<f32> {
        let p = self.method.sample(&self.circle, sampler);
        self.points.push(p);
        p
    }

    /// Clear the set then append `count` new points
    pub fn refill(&mut self, count: usize, sampler: &mut dyn Sampler) {
        self.clear();
        self.points.reserve(count);
        for _ in 0..count {
            self.add_point(sampler);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Replay a fixed list of values, cycling when exhausted
    pub(crate) struct ReplaySampler {
        pub values: Vec<f32>,
        pub pos: usize,
    }

    impl ReplaySampler {
        pub fn new(values: Vec<f32>) -> Self {
            ReplaySampler { values, pos: 0 }
        }
    }

    impl Sampler for ReplaySampler {
        fn next(&mut self) -> f32 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }
        fn next2d(&mut self) -> Point2<f32> {
            let x = self.next();
            let y = self.next();
            Point2::new(x, y)
        }
    }

    #[test]
    fn example_scenario() {
        let circle = Circle::new(Point2::new(0.0, 0.0), 100.0);
        let mut sampler = ReplaySampler::new(vec![0.25, 0.5]);

        let p = DiskSampling::NonUniform.sample(&circle, &mut sampler);
        assert_approx_eq!(p.x, -25.0, 1e-4);
        assert_approx_eq!(p.y, 0.0, 1e-4);

        let p = DiskSampling::Uniform.sample(&circle, &mut sampler);
        assert_approx_eq!(p.x, -50.0, 1e-4);
        assert_approx_eq!(p.y, 0.0, 1e-4);
    }

    #[test]
    fn offset_by_center() {
        let circle = Circle::new(Point2::new(500.0, 150.0), 100.0);
        let mut sampler = ReplaySampler::new(vec![0.25, 0.0]);
        let p = DiskSampling::Uniform.sample(&circle, &mut sampler);
        assert_approx_eq!(p.x, 550.0, 1e-3);
        assert_approx_eq!(p.y, 150.0, 1e-3);
        assert_approx_eq!(circle.distance(p), 50.0, 1e-3);
    }

    #[test]
    fn add_point_appends() {
        let circle = Circle::new(Point2::new(10.0, 10.0), 5.0);
        let mut set = PointSet::new(circle, DiskSampling::NonUniform);
        let mut sampler = ReplaySampler::new(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
        assert!(set.is_empty());
        let a = set.add_point(&mut sampler);
        let b = set.add_point(&mut sampler);
        assert_eq!(set.points(), &[a, b]);
        assert!(set.points().iter().all(|p| set.circle().contains(*p)));
    }

    #[test]
    fn refill_replaces() {
        let circle = Circle::new(Point2::new(0.0, 0.0), 1.0);
        let mut set = PointSet::new(circle, DiskSampling::Uniform);
        let mut sampler = ReplaySampler::new(vec![0.9, 0.1, 0.5, 0.7]);
        set.refill(10, &mut sampler);
        assert_eq!(set.len(), 10);
        set.refill(3, &mut sampler);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn containment() {
        let circle = Circle::new(Point2::new(150.0, 150.0), 100.0);
        assert!(circle.contains(Point2::new(250.0, 150.0)));
        assert!(circle.contains(Point2::new(150.0, 150.0)));
        assert!(!circle.contains(Point2::new(250.1, 150.0)));
    }
}

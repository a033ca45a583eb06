use crate::constants::TWICE_PI;
use crate::disk::Circle;
use crate::math::angle;
use cgmath::Point2;

/// Radial and angular summary of a set of points inside a circle
#[derive(Debug, Clone)]
pub struct DiskStats {
    pub count: usize,
    /// Fraction of the points closer than half the radius.
    /// An area-uniform distribution gives 1/4.
    pub inner_fraction: f32,
    pub max_distance: f32,
    /// Number of points per angular sector over [0, 2π)
    pub angle_histogram: Vec<usize>,
}

impl DiskStats {
    /// With `nb_bins == 0` the angle histogram is left empty
    pub fn compute(circle: &Circle, points: &[Point2<f32>], nb_bins: usize) -> DiskStats {
        let mut inner = 0;
        let mut max_distance: f32 = 0.0;
        let mut angle_histogram = vec![0; nb_bins];
        let half_radius = circle.radius * 0.5;
        for p in points {
            let d = *p - circle.center;
            let dist = circle.distance(*p);
            if dist < half_radius {
                inner += 1;
            }
            max_distance = max_distance.max(dist);
            if nb_bins > 0 {
                let bin = ((angle(d) / TWICE_PI) * nb_bins as f32) as usize;
                angle_histogram[bin.min(nb_bins - 1)] += 1;
            }
        }
        DiskStats {
            count: points.len(),
            inner_fraction: if points.is_empty() {
                0.0
            } else {
                inner as f32 / points.len() as f32
            },
            max_distance,
            angle_histogram,
        }
    }

    /// Largest relative deviation of a sector count from the mean count
    pub fn angle_deviation(&self) -> f32 {
        if self.count == 0 || self.angle_histogram.is_empty() {
            return 0.0;
        }
        let mean = self.count as f32 / self.angle_histogram.len() as f32;
        self.angle_histogram
            .iter()
            .map(|c| (*c as f32 - mean).abs() / mean)
            .fold(0.0, f32::max)
    }
}

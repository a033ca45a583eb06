use crate::constants::*;
use crate::disk::{Circle, DiskSampling, PointSet};
use crate::samplers::Sampler;
use cgmath::Point2;
use std::io::BufRead;

/// Owns the two point sets shown side by side:
/// the naive sampling on the left, the area-uniform one on the right.
pub struct PointDemo {
    pub non_uniform: PointSet,
    pub uniform: PointSet,
}

impl Default for PointDemo {
    fn default() -> Self {
        PointDemo::new()
    }
}

impl PointDemo {
    /// Both sets start empty
    pub fn new() -> PointDemo {
        let (nx, ny) = NON_UNIFORM_CIRCLE_CENTER;
        let (ux, uy) = UNIFORM_CIRCLE_CENTER;
        PointDemo {
            non_uniform: PointSet::new(
                Circle::new(Point2::new(nx, ny), CIRCLE_RADIUS),
                DiskSampling::NonUniform,
            ),
            uniform: PointSet::new(
                Circle::new(Point2::new(ux, uy), CIRCLE_RADIUS),
                DiskSampling::Uniform,
            ),
        }
    }

    pub fn sets(&self) -> [&PointSet; 2] {
        [&self.non_uniform, &self.uniform]
    }

    /// Throw away all the points and generate `SAMPLES` new ones per set
    pub fn regenerate(&mut self, sampler: &mut dyn Sampler) {
        self.non_uniform.refill(SAMPLES, sampler);
        self.uniform.refill(SAMPLES, sampler);
        debug!(
            "Regenerated {} non uniform and {} uniform points",
            self.non_uniform.len(),
            self.uniform.len()
        );
    }

    /// Key press dispatch. Returns true if the points changed
    /// (the display needs to be refreshed).
    pub fn handle_key(&mut self, key: char, sampler: &mut dyn Sampler) -> bool {
        match key {
            'a' | 'A' => {
                self.regenerate(sampler);
                true
            }
            _ => false,
        }
    }

    /// Key session: every character of every line is a key press.
    /// `refresh` is called once per line that changed the points, and the
    /// session stops at the end of the input. Returns the number of refreshes.
    pub fn run_keys<R, F, E>(
        &mut self,
        input: R,
        sampler: &mut dyn Sampler,
        mut refresh: F,
    ) -> Result<usize, E>
    where
        R: BufRead,
        F: FnMut(&PointDemo) -> Result<(), E>,
        E: From<std::io::Error>,
    {
        let mut nb_refresh = 0;
        for line in input.lines() {
            let line = line?;
            let mut changed = false;
            for key in line.chars() {
                changed |= self.handle_key(key, sampler);
            }
            if changed {
                refresh(self)?;
                nb_refresh += 1;
            } else {
                debug!("Ignored keys: {:?}", line);
            }
        }
        Ok(nb_refresh)
    }
}

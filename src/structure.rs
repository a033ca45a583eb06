use crate::tools::{self, SaveError};
use cgmath::*;
#[cfg(feature = "image")]
use image::Rgb;

/// Pixel color representation
#[derive(Clone, PartialEq, Debug, Copy)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b }
    }
    pub fn zero() -> Color {
        Color::new(0.0, 0.0, 0.0)
    }
    pub fn one() -> Color {
        Color::new(1.0, 1.0, 1.0)
    }
    pub fn red() -> Color {
        Color::new(1.0, 0.0, 0.0)
    }
    #[cfg(feature = "image")]
    pub fn to_rgb(&self) -> Rgb<u8> {
        Rgb([
            (self.r.max(0.0).min(1.0).powf(1.0 / 2.2) * 255.0) as u8,
            (self.g.max(0.0).min(1.0).powf(1.0 / 2.2) * 255.0) as u8,
            (self.b.max(0.0).min(1.0).powf(1.0 / 2.2) * 255.0) as u8,
        ])
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::zero()
    }
}

/// Image buffer, rows stored from top to bottom
pub struct Bitmap {
    pub size: Vector2<u32>,
    pub colors: Vec<Color>,
}

impl Bitmap {
    pub fn new(size: Vector2<u32>) -> Bitmap {
        Bitmap {
            size,
            colors: vec![Color::default(); (size.x * size.y) as usize],
        }
    }

    pub fn clear(&mut self, c: Color) {
        self.colors.iter_mut().for_each(|v| *v = c);
    }

    #[inline]
    fn index(&self, p: Point2<u32>) -> usize {
        assert!(p.x < self.size.x && p.y < self.size.y);
        (p.y * self.size.x + p.x) as usize
    }

    pub fn get(&self, p: Point2<u32>) -> Color {
        self.colors[self.index(p)]
    }

    pub fn set(&mut self, p: Point2<u32>, c: Color) {
        let i = self.index(p);
        self.colors[i] = c;
    }

    /// Write the bitmap to disk, the format is deduced from the extension
    pub fn save(&self, imgout_path_str: &str) -> Result<(), SaveError> {
        tools::save(imgout_path_str, self)
    }
}

//! Fixed parameters of the demo.
//! Nothing here is user configurable: both circles share the same radius and
//! both point sets are refilled with the same number of samples.

/// Canvas size (logical units, one unit per pixel)
pub const SCREEN_WIDTH: u32 = 700;
pub const SCREEN_HEIGHT: u32 = 350;

pub const CIRCLE_RADIUS: f32 = 100.0;
pub const NON_UNIFORM_CIRCLE_CENTER: (f32, f32) = (150.0, 150.0);
pub const UNIFORM_CIRCLE_CENTER: (f32, f32) = (500.0, 150.0);

/// Number of points generated per set on each regeneration
pub const SAMPLES: usize = 5000;

/// Number of sides of the polygon approximating a circle outline
pub const CIRCLE_SIDES: u32 = 30;

pub const TWICE_PI: f32 = 2.0 * std::f32::consts::PI;

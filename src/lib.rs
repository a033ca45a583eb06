#![allow(clippy::float_cmp)]

// For the vector op
extern crate cgmath;
// For the image (LDR) export
#[cfg(feature = "image")]
extern crate image;
// For the random number generator
extern crate rand;
// For the logging
#[macro_use]
extern crate log;
// For the PFM export
extern crate byteorder;
// For the tests
#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

// all the modules
pub mod constants;
pub mod demo;
pub mod disk;
pub mod math;
pub mod render;
pub mod samplers;
pub mod stats;
pub mod structure;
pub mod tools;

//! Geometry primitives shared by the waterfall layout crates.
//!
//! All values are logical pixels stored as `f32`. Rectangles use a top-left
//! origin with `y` growing downwards.

mod geometry;

pub use geometry::*;

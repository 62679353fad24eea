pub mod direction;
pub mod geometry;
pub mod options;

pub use direction::{Axis, AxisEffect, Direction};
pub use geometry::{
    clamp_min_size, preserve_aspect_ratio, reduce_size, resize_step, rotate_displacement,
};
pub use options::ResizeOptions;

// Re-export kurbo types so downstream crates don't need a direct dependency
pub use kurbo::{Point, Size, Vec2};

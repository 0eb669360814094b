//! # clipspace - Transform Kernel for Real-Time Graphics
//!
//! Fixed-size vectors and column-major square matrices, plus the camera
//! routines that carry points between object space, clip space and the
//! viewport (`project` / `unproject`).
//!
//! Every type is a plain `Copy` buffer. Operations either mutate the
//! receiver in place or return a fresh value; nothing allocates.

pub mod vector;
pub mod matrix;
pub mod projection;
pub mod ray;
pub mod error;

pub use vector::*;
pub use matrix::*;
pub use projection::*;
pub use ray::*;
pub use error::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const TAU: f32 = PI * 2.0;
    pub const FRAC_PI_2: f32 = PI / 2.0;
    pub const FRAC_PI_4: f32 = PI / 4.0;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

pub mod prelude {
    pub use crate::vector::{Vec2, Vec3, Vec4};
    pub use crate::matrix::{Mat2, Mat3, Mat4};
    pub use crate::projection::{
        project, project_into, unproject, unproject_into,
        degrees_to_radians, radians_to_degrees,
    };
    pub use crate::ray::Ray;
    pub use crate::error::ProjectionError;
}

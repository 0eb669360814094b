//! Vector types
//!
//! Each vector is a single `[f32; N]` array. The named components
//! (`x`/`y`/`z`/`w`, `r`/`g`/`b`/`a`, and `width`/`height` on [`Vec4`]) are
//! accessor methods over that array, so writing through one alias is
//! visible through every other alias of the same slot.

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::matrix::{Mat2, Mat3, Mat4};

macro_rules! impl_vector_common {
    ($name:ident, $n:expr) => {
        impl $name {
            pub const ZERO: Self = Self { values: [0.0; $n] };
            pub const ONE: Self = Self { values: [1.0; $n] };

            #[inline]
            pub const fn from_array(values: [f32; $n]) -> Self {
                Self { values }
            }

            #[inline]
            pub const fn to_array(self) -> [f32; $n] {
                self.values
            }

            #[inline]
            pub fn splat(v: f32) -> Self {
                Self { values: [v; $n] }
            }

            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                self.values
                    .iter()
                    .zip(other.values.iter())
                    .map(|(a, b)| a * b)
                    .sum()
            }

            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn length(self) -> f32 {
                self.length_squared().sqrt()
            }

            /// Scale to unit length in place. A zero-length vector is left as is.
            #[inline]
            pub fn normalize(&mut self) {
                let len_sq = self.length_squared();
                if len_sq > 0.0 {
                    let inv = 1.0 / len_sq.sqrt();
                    for v in &mut self.values {
                        *v *= inv;
                    }
                }
            }

            #[inline]
            pub fn normalized(mut self) -> Self {
                self.normalize();
                self
            }

            #[inline]
            pub fn negate(&mut self) {
                for v in &mut self.values {
                    *v = -*v;
                }
            }

            /// Replace every component with its reciprocal. Zero components
            /// become infinite.
            #[inline]
            pub fn invert(&mut self) {
                for v in &mut self.values {
                    *v = 1.0 / *v;
                }
            }

            #[inline]
            pub fn inverted(mut self) -> Self {
                self.invert();
                self
            }

            #[inline]
            fn zip_with(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
                Self { values: core::array::from_fn(|i| f(self.values[i], rhs.values[i])) }
            }

            #[inline]
            fn map(self, f: impl Fn(f32) -> f32) -> Self {
                Self { values: self.values.map(f) }
            }
        }

        impl Add for $name {
            type Output = Self;
            #[inline] fn add(self, rhs: Self) -> Self { self.zip_with(rhs, |a, b| a + b) }
        }
        impl Sub for $name {
            type Output = Self;
            #[inline] fn sub(self, rhs: Self) -> Self { self.zip_with(rhs, |a, b| a - b) }
        }
        impl Mul for $name {
            type Output = Self;
            #[inline] fn mul(self, rhs: Self) -> Self { self.zip_with(rhs, |a, b| a * b) }
        }
        impl Div for $name {
            type Output = Self;
            #[inline] fn div(self, rhs: Self) -> Self { self.zip_with(rhs, |a, b| a / b) }
        }
        impl Mul<f32> for $name {
            type Output = Self;
            #[inline] fn mul(self, rhs: f32) -> Self { self.map(|a| a * rhs) }
        }
        impl Mul<$name> for f32 {
            type Output = $name;
            #[inline] fn mul(self, rhs: $name) -> $name { rhs * self }
        }
        impl Div<f32> for $name {
            type Output = Self;
            #[inline] fn div(self, rhs: f32) -> Self { self.map(|a| a / rhs) }
        }
        impl Neg for $name {
            type Output = Self;
            #[inline] fn neg(self) -> Self { self.map(|a| -a) }
        }
        impl AddAssign for $name {
            #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
        }
        impl SubAssign for $name {
            #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
        }
        impl MulAssign for $name {
            #[inline] fn mul_assign(&mut self, rhs: Self) { *self = *self * rhs; }
        }
        impl DivAssign for $name {
            #[inline] fn div_assign(&mut self, rhs: Self) { *self = *self / rhs; }
        }
        impl MulAssign<f32> for $name {
            #[inline] fn mul_assign(&mut self, rhs: f32) { *self = *self * rhs; }
        }
        impl DivAssign<f32> for $name {
            #[inline] fn div_assign(&mut self, rhs: f32) { *self = *self / rhs; }
        }
        impl Index<usize> for $name {
            type Output = f32;
            #[inline] fn index(&self, index: usize) -> &f32 { &self.values[index] }
        }
        impl IndexMut<usize> for $name {
            #[inline] fn index_mut(&mut self, index: usize) -> &mut f32 { &mut self.values[index] }
        }
        impl From<[f32; $n]> for $name {
            #[inline] fn from(values: [f32; $n]) -> Self { Self { values } }
        }
        impl From<$name> for [f32; $n] {
            #[inline] fn from(v: $name) -> Self { v.values }
        }
    };
}

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    pub values: [f32; 2],
}

impl_vector_common!(Vec2, 2);

impl Vec2 {
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { values: [x, y] }
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32) {
        self.values = [x, y];
    }

    #[inline] pub fn x(&self) -> f32 { self.values[0] }
    #[inline] pub fn y(&self) -> f32 { self.values[1] }
    #[inline] pub fn set_x(&mut self, x: f32) { self.values[0] = x; }
    #[inline] pub fn set_y(&mut self, y: f32) { self.values[1] = y; }

    /// Transform in place by a 2x2 matrix (`self = m * self`)
    #[inline]
    pub fn transform_mat2(&mut self, m: &Mat2) {
        *self = *m * *self;
    }
}

/// 3D vector - positions, directions and RGB colors
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    pub values: [f32; 3],
}

impl_vector_common!(Vec3, 3);

impl Vec3 {
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);
    pub const NEG_Z: Self = Self::new(0.0, 0.0, -1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { values: [x, y, z] }
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.values = [x, y, z];
    }

    #[inline] pub fn x(&self) -> f32 { self.values[0] }
    #[inline] pub fn y(&self) -> f32 { self.values[1] }
    #[inline] pub fn z(&self) -> f32 { self.values[2] }
    #[inline] pub fn set_x(&mut self, x: f32) { self.values[0] = x; }
    #[inline] pub fn set_y(&mut self, y: f32) { self.values[1] = y; }
    #[inline] pub fn set_z(&mut self, z: f32) { self.values[2] = z; }

    #[inline] pub fn r(&self) -> f32 { self.values[0] }
    #[inline] pub fn g(&self) -> f32 { self.values[1] }
    #[inline] pub fn b(&self) -> f32 { self.values[2] }
    #[inline] pub fn set_r(&mut self, r: f32) { self.values[0] = r; }
    #[inline] pub fn set_g(&mut self, g: f32) { self.values[1] = g; }
    #[inline] pub fn set_b(&mut self, b: f32) { self.values[2] = b; }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.values;
        let [bx, by, bz] = other.values;
        Self::new(
            ay * bz - az * by,
            az * bx - ax * bz,
            ax * by - ay * bx,
        )
    }

    /// Transform in place by a 3x3 matrix (`self = m * self`)
    #[inline]
    pub fn transform_mat3(&mut self, m: &Mat3) {
        *self = *m * *self;
    }

    #[inline]
    pub fn extend(self, w: f32) -> Vec4 {
        let [x, y, z] = self.values;
        Vec4::new(x, y, z, w)
    }
}

/// 4D vector - homogeneous coordinates, RGBA colors and viewport rectangles
///
/// As a viewport, components 0 and 1 are the origin and 2 and 3 are the
/// extent, readable as `width()` / `height()`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Vec4 {
    pub values: [f32; 4],
}

impl_vector_common!(Vec4, 4);

impl Vec4 {
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { values: [x, y, z, w] }
    }

    /// Viewport rectangle `(x, y, width, height)`
    #[inline]
    pub const fn viewport(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, width, height)
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.values = [x, y, z, w];
    }

    #[inline] pub fn x(&self) -> f32 { self.values[0] }
    #[inline] pub fn y(&self) -> f32 { self.values[1] }
    #[inline] pub fn z(&self) -> f32 { self.values[2] }
    #[inline] pub fn w(&self) -> f32 { self.values[3] }
    #[inline] pub fn set_x(&mut self, x: f32) { self.values[0] = x; }
    #[inline] pub fn set_y(&mut self, y: f32) { self.values[1] = y; }
    #[inline] pub fn set_z(&mut self, z: f32) { self.values[2] = z; }
    #[inline] pub fn set_w(&mut self, w: f32) { self.values[3] = w; }

    #[inline] pub fn r(&self) -> f32 { self.values[0] }
    #[inline] pub fn g(&self) -> f32 { self.values[1] }
    #[inline] pub fn b(&self) -> f32 { self.values[2] }
    #[inline] pub fn a(&self) -> f32 { self.values[3] }
    #[inline] pub fn set_r(&mut self, r: f32) { self.values[0] = r; }
    #[inline] pub fn set_g(&mut self, g: f32) { self.values[1] = g; }
    #[inline] pub fn set_b(&mut self, b: f32) { self.values[2] = b; }
    #[inline] pub fn set_a(&mut self, a: f32) { self.values[3] = a; }

    #[inline] pub fn width(&self) -> f32 { self.values[2] }
    #[inline] pub fn height(&self) -> f32 { self.values[3] }
    #[inline] pub fn set_width(&mut self, width: f32) { self.values[2] = width; }
    #[inline] pub fn set_height(&mut self, height: f32) { self.values[3] = height; }

    /// Transform in place by a 4x4 matrix (`self = m * self`)
    #[inline]
    pub fn transform_mat4(&mut self, m: &Mat4) {
        *self = *m * *self;
    }

    #[inline]
    pub fn truncate(self) -> Vec3 {
        let [x, y, z, _] = self.values;
        Vec3::new(x, y, z)
    }
}

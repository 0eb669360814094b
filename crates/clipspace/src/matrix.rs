//! Matrix types for transformations
//!
//! All matrices are square and stored column-major in a flat array: the
//! element at row `r`, column `c` of an `N`x`N` matrix lives at
//! `values[c * N + r]`.
//!
//! The `*_into(out, ..)` variants borrow `out` mutably and the inputs
//! shared, so `out` can never alias an input.

use core::ops::{Mul, MulAssign};

use crate::vector::{Vec2, Vec3, Vec4};

macro_rules! impl_matrix_common {
    ($name:ident, $vec:ident, $n:expr) => {
        impl $name {
            pub const ZERO: Self = Self { values: [0.0; $n * $n] };

            pub const IDENTITY: Self = {
                let mut values = [0.0; $n * $n];
                let mut i = 0;
                while i < $n {
                    values[i * $n + i] = 1.0;
                    i += 1;
                }
                Self { values }
            };

            #[inline]
            pub const fn from_cols_array(values: [f32; $n * $n]) -> Self {
                Self { values }
            }

            #[inline]
            pub const fn to_cols_array(&self) -> [f32; $n * $n] {
                self.values
            }

            #[inline]
            pub fn get(&self, row: usize, col: usize) -> f32 {
                self.values[col * $n + row]
            }

            #[inline]
            pub fn set(&mut self, row: usize, col: usize, value: f32) {
                self.values[col * $n + row] = value;
            }

            #[inline]
            pub fn col(&self, index: usize) -> $vec {
                $vec::from_array(core::array::from_fn(|r| self.values[index * $n + r]))
            }

            #[inline]
            pub fn set_col(&mut self, index: usize, col: $vec) {
                self.values[index * $n..(index + 1) * $n].copy_from_slice(&col.values);
            }

            #[inline]
            pub fn set_identity(&mut self) {
                *self = Self::IDENTITY;
            }

            /// Overwrite every element with the elements of `m`
            #[inline]
            pub fn copy_from(&mut self, m: &Self) {
                self.values = m.values;
            }

            #[inline]
            pub fn copy(src: &Self, dst: &mut Self) {
                dst.values = src.values;
            }

            pub fn transpose(&self) -> Self {
                let mut out = Self::ZERO;
                Self::transpose_into(&mut out, self);
                out
            }

            pub fn transpose_into(out: &mut Self, m: &Self) {
                for c in 0..$n {
                    for r in 0..$n {
                        out.values[c * $n + r] = m.values[r * $n + c];
                    }
                }
            }

            /// Post-multiply in place: `self = self * m`
            #[inline]
            pub fn multiply(&mut self, m: &Self) {
                *self = *self * *m;
            }

            /// `out = a * b`
            pub fn multiply_into(out: &mut Self, a: &Self, b: &Self) {
                for c in 0..$n {
                    for r in 0..$n {
                        let mut sum = 0.0;
                        for k in 0..$n {
                            sum += a.values[k * $n + r] * b.values[c * $n + k];
                        }
                        out.values[c * $n + r] = sum;
                    }
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl Mul for $name {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                let mut out = Self::ZERO;
                Self::multiply_into(&mut out, &self, &rhs);
                out
            }
        }

        impl MulAssign for $name {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl Mul<$vec> for $name {
            type Output = $vec;

            #[inline]
            fn mul(self, rhs: $vec) -> $vec {
                let mut out = [0.0; $n];
                for (r, slot) in out.iter_mut().enumerate() {
                    for c in 0..$n {
                        *slot += self.values[c * $n + r] * rhs.values[c];
                    }
                }
                $vec::from_array(out)
            }
        }
    };
}

/// 2x2 matrix (column-major)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat2 {
    pub values: [f32; 4],
}

impl_matrix_common!(Mat2, Vec2, 2);

impl Mat2 {
    #[inline]
    pub const fn from_cols(c0: Vec2, c1: Vec2) -> Self {
        Self { values: [c0.values[0], c0.values[1], c1.values[0], c1.values[1]] }
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        let [m00, m10, m01, m11] = self.values;
        m00 * m11 - m01 * m10
    }
}

/// 3x3 matrix (column-major)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    pub values: [f32; 9],
}

impl_matrix_common!(Mat3, Vec3, 3);

impl Mat3 {
    #[inline]
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        let [a, b, c] = c0.values;
        let [d, e, f] = c1.values;
        let [g, h, i] = c2.values;
        Self { values: [a, b, c, d, e, f, g, h, i] }
    }

    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_cols(
            Vec3::new(scale.x(), 0.0, 0.0),
            Vec3::new(0.0, scale.y(), 0.0),
            Vec3::new(0.0, 0.0, scale.z()),
        )
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        let [m00, m10, m20, m01, m11, m21, m02, m12, m22] = self.values;
        m00 * (m11 * m22 - m12 * m21)
            - m01 * (m10 * m22 - m12 * m20)
            + m02 * (m10 * m21 - m11 * m20)
    }

    /// Embed in the upper-left block of a 4x4 identity
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols(
            self.col(0).extend(0.0),
            self.col(1).extend(0.0),
            self.col(2).extend(0.0),
            Vec4::W,
        )
    }
}

/// 4x4 matrix (column-major) - the main transformation matrix
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Mat4 {
    pub values: [f32; 16],
}

impl_matrix_common!(Mat4, Vec4, 4);

impl Mat4 {
    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        let [a, b, c, d] = c0.values;
        let [e, f, g, h] = c1.values;
        let [i, j, k, l] = c2.values;
        let [m, n, o, p] = c3.values;
        Self { values: [a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p] }
    }

    #[inline]
    pub fn from_translation(translation: Vec3) -> Self {
        Self::from_cols(
            Vec4::X,
            Vec4::Y,
            Vec4::Z,
            translation.extend(1.0),
        )
    }

    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_cols(
            Vec4::new(scale.x(), 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale.y(), 0.0, 0.0),
            Vec4::new(0.0, 0.0, scale.z(), 0.0),
            Vec4::W,
        )
    }

    #[inline]
    pub fn from_rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_cols(
            Vec4::X,
            Vec4::new(0.0, cos, sin, 0.0),
            Vec4::new(0.0, -sin, cos, 0.0),
            Vec4::W,
        )
    }

    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_cols(
            Vec4::new(cos, 0.0, -sin, 0.0),
            Vec4::Y,
            Vec4::new(sin, 0.0, cos, 0.0),
            Vec4::W,
        )
    }

    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_cols(
            Vec4::new(cos, sin, 0.0, 0.0),
            Vec4::new(-sin, cos, 0.0, 0.0),
            Vec4::Z,
            Vec4::W,
        )
    }

    /// Create an orthographic projection matrix (OpenGL style, depth [-1, 1])
    ///
    /// Zero-extent ranges are not checked and produce infinities.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rml = right - left;
        let tmb = top - bottom;
        let fmn = far - near;

        Self::from_cols(
            Vec4::new(2.0 / rml, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / tmb, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -2.0 / fmn, 0.0),
            Vec4::new(-(right + left) / rml, -(top + bottom) / tmb, -(far + near) / fmn, 1.0),
        )
    }

    /// Create an off-axis perspective projection matrix (OpenGL style, depth [-1, 1])
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let n2 = 2.0 * near;
        let rml = right - left;
        let tmb = top - bottom;
        let fmn = far - near;

        Self::from_cols(
            Vec4::new(n2 / rml, 0.0, 0.0, 0.0),
            Vec4::new(0.0, n2 / tmb, 0.0, 0.0),
            Vec4::new((right + left) / rml, (top + bottom) / tmb, -(far + near) / fmn, -1.0),
            Vec4::new(0.0, 0.0, -n2 * far / fmn, 0.0),
        )
    }

    /// Create a symmetric perspective projection matrix, `fov_y` in radians
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let fmn = far - near;

        Self::from_cols(
            Vec4::new(f / aspect, 0.0, 0.0, 0.0),
            Vec4::new(0.0, f, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -(far + near) / fmn, -1.0),
            Vec4::new(0.0, 0.0, -2.0 * near * far / fmn, 0.0),
        )
    }

    /// Create a look-at view matrix
    ///
    /// `up` only needs to be roughly up; it is re-orthogonalized against the
    /// view direction. If `eye == target`, or `up` is parallel to the view
    /// direction, the affected basis vector stays zero and the result is
    /// singular.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalized();
        let side = forward.cross(up).normalized();
        let up = side.cross(forward);

        Self::from_cols(
            Vec4::new(side.x(), up.x(), -forward.x(), 0.0),
            Vec4::new(side.y(), up.y(), -forward.y(), 0.0),
            Vec4::new(side.z(), up.z(), -forward.z(), 0.0),
            Vec4::new(-side.dot(eye), -up.dot(eye), forward.dot(eye), 1.0),
        )
    }

    #[inline]
    pub fn set_from_translation(&mut self, translation: Vec3) {
        *self = Self::from_translation(translation);
    }

    #[inline]
    pub fn set_from_scale(&mut self, scale: Vec3) {
        *self = Self::from_scale(scale);
    }

    #[inline]
    pub fn set_from_rotation_x(&mut self, angle: f32) {
        *self = Self::from_rotation_x(angle);
    }

    #[inline]
    pub fn set_from_rotation_y(&mut self, angle: f32) {
        *self = Self::from_rotation_y(angle);
    }

    #[inline]
    pub fn set_from_rotation_z(&mut self, angle: f32) {
        *self = Self::from_rotation_z(angle);
    }

    #[inline]
    pub fn set_orthographic(&mut self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
        *self = Self::orthographic(left, right, bottom, top, near, far);
    }

    #[inline]
    pub fn set_frustum(&mut self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
        *self = Self::frustum(left, right, bottom, top, near, far);
    }

    #[inline]
    pub fn set_perspective(&mut self, fov_y: f32, aspect: f32, near: f32, far: f32) {
        *self = Self::perspective(fov_y, aspect, near, far);
    }

    #[inline]
    pub fn set_look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        *self = Self::look_at(eye, target, up);
    }

    /// Compose a scale into this transform (`self = self * S`)
    pub fn scale(&mut self, scale: Vec3) {
        let [sx, sy, sz] = scale.values;
        let (c0, c1, c2) = (self.col(0), self.col(1), self.col(2));

        self.set_col(0, c0 * sx);
        self.set_col(1, c1 * sy);
        self.set_col(2, c2 * sz);
    }

    /// Compose a translation into this transform (`self = self * T`)
    pub fn translate(&mut self, offset: Vec3) {
        let [x, y, z] = offset.values;
        let (c0, c1, c2, c3) = (self.col(0), self.col(1), self.col(2), self.col(3));

        self.set_col(3, c0 * x + c1 * y + c2 * z + c3);
    }

    /// Compose a rotation about X into this transform (`self = self * Rx`)
    pub fn rotate_x(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        let (c1, c2) = (self.col(1), self.col(2));

        self.set_col(1, c1 * cos + c2 * sin);
        self.set_col(2, c2 * cos - c1 * sin);
    }

    /// Compose a rotation about Y into this transform (`self = self * Ry`)
    pub fn rotate_y(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        let (c0, c2) = (self.col(0), self.col(2));

        self.set_col(0, c0 * cos - c2 * sin);
        self.set_col(2, c0 * sin + c2 * cos);
    }

    /// Compose a rotation about Z into this transform (`self = self * Rz`)
    pub fn rotate_z(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        let (c0, c1) = (self.col(0), self.col(1));

        self.set_col(0, c0 * cos + c1 * sin);
        self.set_col(1, c1 * cos - c0 * sin);
    }

    /// Get the translation component
    #[inline]
    pub fn translation(&self) -> Vec3 {
        self.col(3).truncate()
    }

    /// Transform a point (w=1), dividing by the resulting w
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let v = *self * point.extend(1.0);
        v.truncate() / v.w()
    }

    /// Transform a vector (w=0)
    #[inline]
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        (*self * vector.extend(0.0)).truncate()
    }

    pub fn determinant(&self) -> f32 {
        let [m00, m10, m20, m30, m01, m11, m21, m31, m02, m12, m22, m32, m03, m13, m23, m33] =
            self.values;

        let k23 = m22 * m33 - m32 * m23;
        let k13 = m12 * m33 - m32 * m13;
        let k12 = m12 * m23 - m22 * m13;
        let k03 = m02 * m33 - m32 * m03;
        let k02 = m02 * m23 - m22 * m03;
        let k01 = m02 * m13 - m12 * m03;

        let n0 = m11 * k23 - m21 * k13 + m31 * k12;
        let n1 = m01 * k23 - m21 * k03 + m31 * k02;
        let n2 = m01 * k13 - m11 * k03 + m31 * k01;
        let n3 = m01 * k12 - m11 * k02 + m21 * k01;

        m00 * n0 - m10 * n1 + m20 * n2 - m30 * n3
    }

    /// Invert by cofactor expansion.
    ///
    /// Returns `None` when the determinant is exactly zero. Nearly singular
    /// matrices still invert, into very large values.
    pub fn try_inverse(&self) -> Option<Self> {
        let [m00, m10, m20, m30, m01, m11, m21, m31, m02, m12, m22, m32, m03, m13, m23, m33] =
            self.values;

        // 2x2 minors of columns 2 and 3, by row pair
        let k23 = m22 * m33 - m32 * m23;
        let k13 = m12 * m33 - m32 * m13;
        let k12 = m12 * m23 - m22 * m13;
        let k03 = m02 * m33 - m32 * m03;
        let k02 = m02 * m23 - m22 * m03;
        let k01 = m02 * m13 - m12 * m03;

        // minors of the column-0 entries
        let n0 = m11 * k23 - m21 * k13 + m31 * k12;
        let n1 = m01 * k23 - m21 * k03 + m31 * k02;
        let n2 = m01 * k13 - m11 * k03 + m31 * k01;
        let n3 = m01 * k12 - m11 * k02 + m21 * k01;

        let det = m00 * n0 - m10 * n1 + m20 * n2 - m30 * n3;
        if det == 0.0 {
            return None;
        }

        // 2x2 minors of columns 1 and 3
        let l23 = m21 * m33 - m31 * m23;
        let l13 = m11 * m33 - m31 * m13;
        let l12 = m11 * m23 - m21 * m13;
        let l03 = m01 * m33 - m31 * m03;
        let l02 = m01 * m23 - m21 * m03;
        let l01 = m01 * m13 - m11 * m03;

        // 2x2 minors of columns 1 and 2
        let p23 = m21 * m32 - m31 * m22;
        let p13 = m11 * m32 - m31 * m12;
        let p12 = m11 * m22 - m21 * m12;
        let p03 = m01 * m32 - m31 * m02;
        let p02 = m01 * m22 - m21 * m02;
        let p01 = m01 * m12 - m11 * m02;

        // minors of the column-1 entries
        let q0 = m10 * k23 - m20 * k13 + m30 * k12;
        let q1 = m00 * k23 - m20 * k03 + m30 * k02;
        let q2 = m00 * k13 - m10 * k03 + m30 * k01;
        let q3 = m00 * k12 - m10 * k02 + m20 * k01;

        // minors of the column-2 entries
        let u0 = m10 * l23 - m20 * l13 + m30 * l12;
        let u1 = m00 * l23 - m20 * l03 + m30 * l02;
        let u2 = m00 * l13 - m10 * l03 + m30 * l01;
        let u3 = m00 * l12 - m10 * l02 + m20 * l01;

        // minors of the column-3 entries
        let v0 = m10 * p23 - m20 * p13 + m30 * p12;
        let v1 = m00 * p23 - m20 * p03 + m30 * p02;
        let v2 = m00 * p13 - m10 * p03 + m30 * p01;
        let v3 = m00 * p12 - m10 * p02 + m20 * p01;

        // inverse[r][c] = cofactor[c][r] / det
        let inv_det = 1.0 / det;
        Some(Self::from_cols(
            Vec4::new(n0, -q0, u0, -v0) * inv_det,
            Vec4::new(-n1, q1, -u1, v1) * inv_det,
            Vec4::new(n2, -q2, u2, -v2) * inv_det,
            Vec4::new(-n3, q3, -u3, v3) * inv_det,
        ))
    }
}

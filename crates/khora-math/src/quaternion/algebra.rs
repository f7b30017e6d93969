// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Quaternion arithmetic: component-wise operators, scaling, the Hamilton product
//! and the dot product.

use super::Quaternion;
use crate::{Mat3, Vec3};
use std::ops::{
    Add, AddAssign, BitOr, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

impl Quaternion {
    /// Computes the dot product of two quaternions.
    ///
    /// Also usable in associated form, `Quaternion::dot(&a, b)`, and through the
    /// `|` operator.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    /// Note: This is not a rotation operation; the sum is generally not unit length.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl AddAssign<Quaternion> for Quaternion {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    /// Subtracts two quaternions component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl SubAssign<Quaternion> for Quaternion {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: f32) -> Self::Output {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl Mul<Quaternion> for f32 {
    type Output = Quaternion;
    #[inline]
    fn mul(self, rhs: Quaternion) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<f32> for Quaternion {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl Div<f32> for Quaternion {
    type Output = Self;
    /// Divides all components by a scalar.
    ///
    /// The divisor must be non-zero; this is checked in debug builds only.
    #[inline]
    fn div(self, scalar: f32) -> Self::Output {
        debug_assert!(scalar != 0.0, "Quaternion divided by zero");
        self * (1.0 / scalar)
    }
}

impl DivAssign<f32> for Quaternion {
    #[inline]
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations using the Hamilton product.
    ///
    /// Quaternion multiplication is not commutative: applying `a * b` to a vector
    /// applies `b` first, then `a`.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl MulAssign<Quaternion> for Quaternion {
    /// Combines this rotation with another: `self = self * rhs`.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;
    /// Rotates a `Vec3` by this quaternion. Same as [`Quaternion::rotate_vector`].
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.rotate_vector(rhs)
    }
}

impl Mul<Mat3> for Quaternion {
    type Output = Mat3;
    /// Returns the rotation matrix of this quaternion multiplied by `rhs`.
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        self.to_mat3() * rhs
    }
}

impl BitOr<Quaternion> for Quaternion {
    type Output = f32;
    /// Dot product shorthand: `a | b == a.dot(b)`.
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.dot(rhs)
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components. The result describes the same rotation.
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

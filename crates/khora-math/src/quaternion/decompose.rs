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

//! Length, normalization, inversion and the geometric quantities that can be read
//! back out of a quaternion (angle, axis, basis vectors).
//!
//! Operations that change the quaternion come in pairs: a pure form that returns a
//! new value (`normalize`, `inverse`, `conjugate`, `square`) and a `*_mut` form that
//! updates `self` in place and returns `&mut Self` for chaining.

use super::Quaternion;
use crate::{clamp_unit, radians_to_degrees, MathError, Result, Vec3, EPSILON};

/// Below this squared length a quaternion is treated as zero.
const DEGENERATE_LENGTH_SQUARED: f32 = EPSILON * EPSILON;

impl Quaternion {
    /// Calculates the squared length (magnitude) of the quaternion.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the quaternion.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the quaternion with a length of 1.
    /// If the quaternion has a near-zero length, it returns the identity quaternion.
    pub fn normalize(&self) -> Self {
        match self.try_normalize() {
            Ok(q) => q,
            Err(_) => {
                log::trace!("Normalizing a zero-length quaternion, using identity.");
                Self::IDENTITY
            }
        }
    }

    /// Normalizes the quaternion in place. See [`Quaternion::normalize`].
    #[inline]
    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// Returns a normalized version of the quaternion, or an error if its length is
    /// near zero.
    pub fn try_normalize(&self) -> Result<Self> {
        let length_squared = self.length_squared();
        if length_squared > DEGENERATE_LENGTH_SQUARED {
            Ok(*self * (1.0 / length_squared.sqrt()))
        } else {
            Err(MathError::DegenerateLength { length_squared })
        }
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Conjugates the quaternion in place.
    #[inline]
    pub fn conjugate_mut(&mut self) -> &mut Self {
        *self = self.conjugate();
        self
    }

    /// Computes the inverse of the quaternion, `conjugate / length²`.
    ///
    /// For a unit quaternion, the inverse is equal to its conjugate. A near-zero
    /// quaternion has no inverse and yields the identity quaternion.
    pub fn inverse(&self) -> Self {
        match self.try_inverse() {
            Ok(q) => q,
            Err(_) => {
                log::trace!("Inverting a zero-length quaternion, using identity.");
                Self::IDENTITY
            }
        }
    }

    /// Inverts the quaternion in place. See [`Quaternion::inverse`].
    #[inline]
    pub fn inverse_mut(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Computes the inverse of the quaternion, or an error if its length is near zero.
    pub fn try_inverse(&self) -> Result<Self> {
        let length_squared = self.length_squared();
        if length_squared > DEGENERATE_LENGTH_SQUARED {
            Ok(self.conjugate() * (1.0 / length_squared))
        } else {
            Err(MathError::DegenerateLength { length_squared })
        }
    }

    /// Returns `self * self`. For a unit quaternion this doubles the rotation angle.
    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Squares the quaternion in place.
    #[inline]
    pub fn square_mut(&mut self) -> &mut Self {
        *self = self.square();
        self
    }

    /// Returns the rotation angle in degrees, in `[0, 360]`.
    ///
    /// Only meaningful for a unit quaternion.
    #[inline]
    pub fn angle(&self) -> f32 {
        radians_to_degrees(2.0 * clamp_unit(self.w).acos())
    }

    /// Returns the unit rotation axis.
    ///
    /// When the rotation angle is (near) zero the axis is undefined and `Vec3::X`
    /// is returned.
    pub fn rotation_axis(&self) -> Vec3 {
        let v = self.xyz();
        if v.length_squared() > DEGENERATE_LENGTH_SQUARED {
            v.normalize()
        } else {
            log::trace!("Rotation axis of a zero-angle quaternion requested, using +X.");
            Vec3::X
        }
    }

    /// Returns the rotation as `(axis, angle_degrees)`.
    #[inline]
    pub fn axis_angle(&self) -> (Vec3, f32) {
        (self.rotation_axis(), self.angle())
    }

    /// Image of the world X axis, i.e. the first column of [`Quaternion::to_mat3`].
    #[inline]
    pub fn axis_x(&self) -> Vec3 {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        Vec3::new(
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y + w * z),
            2.0 * (x * z - w * y),
        )
    }

    /// Image of the world Y axis, i.e. the second column of [`Quaternion::to_mat3`].
    #[inline]
    pub fn axis_y(&self) -> Vec3 {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        Vec3::new(
            2.0 * (x * y - w * z),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z + w * x),
        )
    }

    /// Image of the world Z axis, i.e. the third column of [`Quaternion::to_mat3`].
    #[inline]
    pub fn axis_z(&self) -> Vec3 {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        Vec3::new(
            2.0 * (x * z + w * y),
            2.0 * (y * z - w * x),
            1.0 - 2.0 * (x * x + y * y),
        )
    }

    /// The engine's forward direction (+Z) rotated by this quaternion.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotate_vector(Vec3::Z)
    }

    /// The engine's right direction (+X) rotated by this quaternion.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.rotate_vector(Vec3::X)
    }

    /// The engine's up direction (+Y) rotated by this quaternion.
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.rotate_vector(Vec3::Y)
    }

    /// Returns the angle in degrees of the shortest rotation taking `self` to `other`.
    ///
    /// Both quaternions should be normalized. The sign ambiguity is removed with the
    /// absolute dot product, so the result is in `[0, 180]`.
    #[inline]
    pub fn angular_distance(&self, other: Self) -> f32 {
        radians_to_degrees(2.0 * clamp_unit(self.dot(other).abs()).acos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length() {
        let q = Quaternion::new(1.0, 2.0, 2.0, 4.0);
        assert_relative_eq!(q.length_squared(), 25.0);
        assert_relative_eq!(q.length(), 5.0);
        assert_relative_eq!(Quaternion::IDENTITY.length(), 1.0);
    }

    #[test]
    fn test_normalization() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let n = q.normalize();
        assert_relative_eq!(n.length(), 1.0, epsilon = EPSILON);
        assert!(n.is_normalized());
        assert_eq!(n.normalize(), n);
        // Original is untouched by the pure form.
        assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));

        let mut m = q;
        m.normalize_mut();
        assert_eq!(m, n);
        assert_eq!(q.try_normalize(), Ok(n));
    }

    #[test]
    fn test_normalize_zero_quaternion() {
        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.normalize(), Quaternion::IDENTITY);
        assert!(matches!(
            zero.try_normalize(),
            Err(MathError::DegenerateLength { .. })
        ));
    }

    #[test]
    fn test_mut_forms_chain() {
        let mut q = Quaternion::new(0.0, 0.0, 3.0, 4.0);
        q.normalize_mut().conjugate_mut();
        assert_eq!(q, Quaternion::new(0.0, 0.0, -0.6, 0.8));
    }

    #[test]
    fn test_conjugate() {
        let q = Quaternion::new(1.0, -2.0, 3.0, 4.0);
        let c = q.conjugate();
        assert_eq!(c, Quaternion::new(-1.0, 2.0, -3.0, 4.0));
        let back = c.conjugate();
        assert_eq!(back.to_array(), q.to_array());

        let mut m = q;
        m.conjugate_mut().conjugate_mut();
        assert_eq!(m.to_array(), q.to_array());
    }

    #[test]
    fn test_conjugate_and_inverse_unit() {
        let axis = Vec3::new(1.0, 2.0, 3.0).normalize();
        let q = Quaternion::from_axis_angle(axis, 43.0);
        assert_eq!(q.inverse(), q.conjugate());
    }

    #[test]
    fn test_inverse_non_unit() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let inv = q.inverse();
        assert_eq!(q * inv, Quaternion::IDENTITY);
        assert_eq!(inv * q, Quaternion::IDENTITY);

        let mut m = q;
        m.inverse_mut();
        assert_eq!(m, inv);
    }

    #[test]
    fn test_inverse_zero_quaternion() {
        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.inverse(), Quaternion::IDENTITY);
        assert!(zero.try_inverse().is_err());
    }

    #[test]
    fn test_square_doubles_angle() {
        let q = Quaternion::from_axis_angle(Vec3::Y, 40.0);
        let sq = q.square();
        assert_eq!(sq, q * q);
        assert!(super::super::same_rotation(
            sq,
            Quaternion::from_axis_angle(Vec3::Y, 80.0)
        ));

        let mut m = q;
        m.square_mut();
        assert_eq!(m, sq);
    }

    #[test]
    fn test_angle() {
        assert_relative_eq!(Quaternion::IDENTITY.angle(), 0.0);
        let q = Quaternion::from_axis_angle(Vec3::X, 90.0);
        assert_relative_eq!(q.angle(), 90.0, epsilon = 1e-3);
        // Drift slightly above 1 must not produce NaN.
        let drifted = Quaternion::new(0.0, 0.0, 0.0, 1.0 + 1e-6);
        assert_relative_eq!(drifted.angle(), 0.0);
    }

    #[test]
    fn test_axis_angle_extraction() {
        let axis = Vec3::new(-1.0, 2.5, 0.7).normalize();
        let q = Quaternion::from_axis_angle(axis, 106.0);
        let (out_axis, out_angle) = q.axis_angle();
        assert_relative_eq!(out_axis, axis, epsilon = EPSILON);
        assert_relative_eq!(out_angle, 106.0, epsilon = 1e-3);
    }

    #[test]
    fn test_axis_angle_of_identity_uses_fallback_axis() {
        let (axis, angle) = Quaternion::IDENTITY.axis_angle();
        assert_eq!(axis, Vec3::X);
        assert_relative_eq!(angle, 0.0);
    }

    #[test]
    fn test_basis_axes_match_matrix_columns() {
        let q = Quaternion::from_euler(35.0, -20.0, 110.0);
        let m = q.to_mat3();
        assert_relative_eq!(q.axis_x(), m.cols[0], epsilon = EPSILON);
        assert_relative_eq!(q.axis_y(), m.cols[1], epsilon = EPSILON);
        assert_relative_eq!(q.axis_z(), m.cols[2], epsilon = EPSILON);
    }

    #[test]
    fn test_engine_basis_vectors() {
        assert_eq!(Quaternion::IDENTITY.forward(), Vec3::Z);
        assert_eq!(Quaternion::IDENTITY.right(), Vec3::X);
        assert_eq!(Quaternion::IDENTITY.up(), Vec3::Y);

        // Yaw of 90 degrees about +Y turns forward (+Z) into +X.
        let q = Quaternion::from_axis_angle(Vec3::Y, 90.0);
        assert_relative_eq!(q.forward(), Vec3::X, epsilon = EPSILON);
        assert_relative_eq!(q.right(), -Vec3::Z, epsilon = EPSILON);
        assert_relative_eq!(q.up(), Vec3::Y, epsilon = EPSILON);
        assert_relative_eq!(q.forward(), q.axis_z(), epsilon = EPSILON);
    }

    #[test]
    fn test_angular_distance() {
        let a = Quaternion::from_axis_angle(Vec3::Z, 10.0);
        let b = Quaternion::from_axis_angle(Vec3::Z, 70.0);
        assert_relative_eq!(a.angular_distance(b), 60.0, epsilon = 1e-2);
        assert_relative_eq!(b.angular_distance(a), 60.0, epsilon = 1e-2);
        // Sign of the representation does not matter.
        assert_relative_eq!(a.angular_distance(-b), 60.0, epsilon = 1e-2);
        // acos is steep near 1, so rounding in the dot product shows up here.
        assert_relative_eq!(a.angular_distance(a), 0.0, epsilon = 0.1);
    }
}

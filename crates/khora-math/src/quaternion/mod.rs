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

//! Provides a Quaternion type for representing 3D rotations.
//!
//! The type is split by concern:
//!
//! * this module: the data, construction, predicates and interop conversions,
//! * [`algebra`]: operators, the Hamilton product and the dot product,
//! * [`decompose`]: length, normalization, inversion, angle/axis and basis extraction,
//! * [`rotation`]: applying a quaternion to vectors and points,
//! * [`interpolation`]: `lerp`, `nlerp` and `slerp`,
//! * [`conversion`]: Euler angles and rotation matrices.

use std::fmt;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::{approx_eq, degrees_to_radians, MathError, Result, Vec3, Vec4, EPSILON};

pub mod algebra;
pub mod conversion;
pub mod decompose;
pub mod interpolation;
pub mod rotation;

/// Represents a quaternion for efficient 3D rotations.
///
/// A quaternion is stored as `(x, y, z, w)`, where `[x, y, z]` is the "vector" part
/// and `w` is the "scalar" (real) part. Any 4-tuple is a valid quaternion value: sums,
/// scaled values and squares are regular intermediate results. Only a "unit
/// quaternion", where `x² + y² + z² + w² = 1`, represents a rotation, and the
/// rotation-specific operations assume one. Nothing here renormalizes behind your
/// back except where a method says so.
///
/// Equality (`==`) is a component-wise comparison within [`EPSILON`]. `q` and `-q`
/// describe the same rotation but do not compare equal.
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(
        serde::Serialize,
        serde::Deserialize,
        bincode::Encode,
        bincode::Decode
    )
)]
#[repr(C)]
pub struct Quaternion {
    /// The x component of the vector part.
    pub x: f32,
    /// The y component of the vector part.
    pub y: f32,
    /// The z component of the vector part.
    pub z: f32,
    /// The scalar (real) part.
    pub w: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new quaternion from its raw components.
    ///
    /// Note: This does not guarantee a unit quaternion. For creating rotations,
    /// prefer using `from_axis_angle` or other rotation-specific constructors.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion representing a rotation around a given axis by a given angle.
    ///
    /// # Arguments
    ///
    /// * `axis`: The axis of rotation. Must be a unit vector; it is not normalized here.
    /// * `angle_degrees`: The angle of rotation in degrees.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle_degrees: f32) -> Self {
        let (s, c) = (degrees_to_radians(angle_degrees) * 0.5).sin_cos();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Returns the vector part `(x, y, z)`.
    #[inline]
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Returns the components as `[x, y, z, w]`.
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Returns `true` if the quaternion has no rotation axis component.
    ///
    /// Only `x`, `y` and `z` are checked: `w` may be `1` or `-1` for the same rotation.
    #[inline]
    pub fn is_identity(&self) -> bool {
        approx_eq(self.x, 0.0) && approx_eq(self.y, 0.0) && approx_eq(self.z, 0.0)
    }

    /// Returns `true` if the real part is zero, i.e. the quaternion embeds a 3-vector.
    #[inline]
    pub fn is_pure(&self) -> bool {
        approx_eq(self.w, 0.0)
    }

    /// Returns `true` if the quaternion has unit length.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        approx_eq(self.length(), 1.0)
    }
}

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Quaternion {
    /// Component-wise comparison within [`EPSILON`].
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, EPSILON)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

// --- Interop ---

impl From<[f32; 4]> for Quaternion {
    /// Builds a quaternion from `[x, y, z, w]`.
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion> for [f32; 4] {
    #[inline]
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

impl From<Vec4> for Quaternion {
    #[inline]
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Quaternion> for Vec4 {
    #[inline]
    fn from(q: Quaternion) -> Self {
        Vec4::new(q.x, q.y, q.z, q.w)
    }
}

impl TryFrom<&[f32]> for Quaternion {
    type Error = MathError;

    /// Reads a quaternion from a flat `[x, y, z, w]` buffer.
    fn try_from(values: &[f32]) -> Result<Self> {
        if let &[x, y, z, w] = values {
            Ok(Self::new(x, y, z, w))
        } else {
            Err(MathError::InvalidComponentCount {
                expected: 4,
                actual: values.len(),
            })
        }
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}

impl UlpsEq for Quaternion {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
            && self.w.ulps_eq(&other.w, epsilon, max_ulps)
    }
}

/// Returns `true` if both quaternions describe the same rotation, regardless of sign.
#[cfg(test)]
pub(crate) fn same_rotation(q1: Quaternion, q2: Quaternion) -> bool {
    approx::relative_eq!(q1.dot(q2).abs(), 1.0, epsilon = EPSILON * 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_identity_and_default() {
        let q_ident = Quaternion::IDENTITY;
        let q_def = Quaternion::default();
        assert_eq!(q_ident, q_def);
        assert_eq!(q_ident.to_array(), [0.0, 0.0, 0.0, 1.0]);
        assert!(Quaternion::new(0.0, 0.0, 0.0, 1.0).is_identity());
        assert!(q_ident.is_normalized());
        assert!(!q_ident.is_pure());
    }

    #[test]
    fn test_new_stores_components_verbatim() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.x, 1.0);
        assert_eq!(q.y, 2.0);
        assert_eq!(q.z, 3.0);
        assert_eq!(q.w, 4.0);
        assert!(!q.is_normalized());
        assert_eq!(q.xyz(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_is_identity_ignores_real_sign() {
        assert!(Quaternion::new(0.0, 0.0, 0.0, -1.0).is_identity());
        assert!(Quaternion::new(EPSILON / 2.0, 0.0, 0.0, 1.0).is_identity());
        assert!(!Quaternion::new(0.1, 0.0, 0.0, 1.0).is_identity());
    }

    #[test]
    fn test_is_pure() {
        assert!(Quaternion::new(1.0, 2.0, 3.0, 0.0).is_pure());
        assert!(!Quaternion::new(1.0, 2.0, 3.0, 0.5).is_pure());
    }

    #[test]
    fn test_from_axis_angle_z_90() {
        let q = Quaternion::from_axis_angle(Vec3::Z, 90.0);
        assert_relative_eq!(q.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(q.y, 0.0, epsilon = EPSILON);
        assert_relative_eq!(q.z, FRAC_1_SQRT_2, epsilon = EPSILON);
        assert_relative_eq!(q.w, FRAC_1_SQRT_2, epsilon = EPSILON);
        assert!(q.is_normalized());
    }

    #[test]
    fn test_from_axis_angle_zero_is_identity() {
        let axis = Vec3::new(1.0, 2.0, -3.0).normalize();
        assert_eq!(Quaternion::from_axis_angle(axis, 0.0), Quaternion::IDENTITY);
        assert_eq!(Quaternion::from_axis_angle(Vec3::Y, 0.0), Quaternion::IDENTITY);
    }

    #[test]
    fn test_from_axis_angle_keeps_axis_as_given() {
        // The axis is a caller contract; a non-unit axis scales the vector part.
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 2.0, 0.0), 180.0);
        assert_relative_eq!(q.y, 2.0, epsilon = EPSILON);
        assert!(!q.is_normalized());
    }

    #[test]
    fn test_equality_uses_tolerance() {
        let q = Quaternion::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(q, Quaternion::new(0.1 + EPSILON / 4.0, 0.2, 0.3, 0.4));
        assert_ne!(q, Quaternion::new(0.1 + EPSILON * 4.0, 0.2, 0.3, 0.4));
        assert_ne!(q, -q);
    }

    #[test]
    fn test_display() {
        let q = Quaternion::new(1.0, -2.5, 0.0, 0.5);
        assert_eq!(q.to_string(), "(1, -2.5, 0, 0.5)");
        assert_eq!(format!("{}", Quaternion::IDENTITY), "(0, 0, 0, 1)");
    }

    #[test]
    fn test_array_and_vec4_conversions() {
        let q = Quaternion::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
        let arr: [f32; 4] = q.into();
        assert_eq!(arr, [1.0, 2.0, 3.0, 4.0]);
        let v: Vec4 = q.into();
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Quaternion::from(v), q);
    }

    #[test]
    fn test_try_from_slice() {
        let values = [0.0, 0.0, 0.0, 1.0, 9.0];
        assert_eq!(
            Quaternion::try_from(&values[..4]),
            Ok(Quaternion::IDENTITY)
        );
        assert_eq!(
            Quaternion::try_from(&values[..]),
            Err(MathError::InvalidComponentCount {
                expected: 4,
                actual: 5
            })
        );
        assert!(Quaternion::try_from(&values[..3]).is_err());
    }

    #[test]
    fn test_pod_cast() {
        let qs = [Quaternion::IDENTITY, Quaternion::new(1.0, 2.0, 3.0, 4.0)];
        let floats: &[f32] = bytemuck::cast_slice(&qs);
        assert_eq!(floats, &[0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 3.0, 4.0]);
    }
}

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

//! Conversions between quaternions, Euler angles and rotation matrices.
//!
//! # Euler convention
//!
//! Yaw turns about Z, pitch about Y and roll about X. The composed rotation is
//! `q_z(yaw) * q_y(pitch) * q_x(roll)`: roll is applied first, then pitch, then
//! yaw. As a `Vec3` the angles are stored as `x` = roll, `y` = pitch, `z` = yaw,
//! in degrees. [`Quaternion::to_euler`] inverts [`Quaternion::from_euler`] for
//! pitch in `(-90°, 90°)`.

use super::Quaternion;
use crate::{clamp_unit, degrees_to_radians, radians_to_degrees, Mat3, Mat4, Vec3};

/// `|sin(pitch)|` above which `to_euler` treats the rotation as gimbal locked.
const GIMBAL_LOCK_SIN: f32 = 1.0 - 1e-6;

impl Quaternion {
    /// Creates a quaternion from a 3x3 rotation matrix.
    ///
    /// The component with the largest magnitude is recovered first so the divisor
    /// never approaches zero, including for rotations close to 180°. The result is
    /// normalized to absorb drift in the input.
    pub fn from_mat3(m: &Mat3) -> Self {
        let m00 = m.cols[0].x;
        let m10 = m.cols[0].y;
        let m20 = m.cols[0].z;
        let m01 = m.cols[1].x;
        let m11 = m.cols[1].y;
        let m21 = m.cols[1].z;
        let m02 = m.cols[2].x;
        let m12 = m.cols[2].y;
        let m22 = m.cols[2].z;

        // Algorithm from http://www.euclideanspace.com/maths/geometry/rotations/conversions/matrixToQuaternion/index.htm
        let trace = m00 + m11 + m22;
        let q = if trace > 0.0 {
            let s = 2.0 * (trace + 1.0).sqrt();
            Self::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s)
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            Self::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            Self::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            Self::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        };
        q.normalize()
    }

    /// Creates a quaternion from the rotation part of a 4x4 matrix.
    ///
    /// Only the upper-left 3x3 block is read; translation is ignored.
    #[inline]
    pub fn from_mat4(m: &Mat4) -> Self {
        Self::from_mat3(&Mat3::from_mat4(m))
    }

    /// Creates a quaternion from Euler angles in degrees.
    ///
    /// # Arguments
    ///
    /// * `yaw_z`: Angle around Z, applied last.
    /// * `pitch_y`: Angle around Y.
    /// * `roll_x`: Angle around X, applied first.
    pub fn from_euler(yaw_z: f32, pitch_y: f32, roll_x: f32) -> Self {
        let (sr, cr) = (degrees_to_radians(roll_x) * 0.5).sin_cos();
        let (sp, cp) = (degrees_to_radians(pitch_y) * 0.5).sin_cos();
        let (sy, cy) = (degrees_to_radians(yaw_z) * 0.5).sin_cos();

        Self::new(
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
            cr * cp * cy + sr * sp * sy,
        )
    }

    /// Creates a quaternion from Euler angles stored as `(roll, pitch, yaw)` in degrees,
    /// the layout returned by [`Quaternion::to_euler`].
    #[inline]
    pub fn from_euler_vec(euler_degrees: Vec3) -> Self {
        Self::from_euler(euler_degrees.z, euler_degrees.y, euler_degrees.x)
    }

    /// Returns the Euler angles of this rotation as `(roll, pitch, yaw)` in degrees.
    ///
    /// The first component is the angle around X, the second around Y and the third
    /// around Z. Pitch lies in `[-90, 90]`, roll and yaw in `[-180, 180]`.
    ///
    /// At pitch = ±90° (gimbal lock) roll and yaw turn about the same axis and only
    /// their combination is defined. In that case roll is reported as `0` and yaw
    /// carries the whole rotation about that axis.
    pub fn to_euler(&self) -> Vec3 {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let sin_pitch = 2.0 * (w * y - x * z);

        if sin_pitch.abs() > GIMBAL_LOCK_SIN {
            log::trace!("Quaternion to Euler conversion hit gimbal lock, roll set to 0.");
            let pitch = 90.0f32.copysign(sin_pitch);
            let yaw = (2.0 * (w * z - x * y)).atan2(1.0 - 2.0 * (x * x + z * z));
            return Vec3::new(0.0, pitch, radians_to_degrees(yaw));
        }

        let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
        let pitch = clamp_unit(sin_pitch).asin();
        let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));
        Vec3::new(
            radians_to_degrees(roll),
            radians_to_degrees(pitch),
            radians_to_degrees(yaw),
        )
    }

    /// Converts the quaternion into a 3x3 rotation matrix.
    ///
    /// The quaternion is expected to be normalized; it is not normalized here.
    pub fn to_mat3(&self) -> Mat3 {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;
        let xx = self.x * x2;
        let xy = self.x * y2;
        let xz = self.x * z2;
        let yy = self.y * y2;
        let yz = self.y * z2;
        let zz = self.z * z2;
        let wx = self.w * x2;
        let wy = self.w * y2;
        let wz = self.w * z2;

        Mat3::from_cols(
            Vec3::new(1.0 - (yy + zz), xy + wz, xz - wy),
            Vec3::new(xy - wz, 1.0 - (xx + zz), yz + wx),
            Vec3::new(xz + wy, yz - wx, 1.0 - (xx + yy)),
        )
    }

    /// Converts the quaternion into a 4x4 rotation matrix, with no translation or scale.
    #[inline]
    pub fn to_mat4(&self) -> Mat4 {
        self.to_mat3().to_mat4()
    }
}

impl From<Mat3> for Quaternion {
    #[inline]
    fn from(m: Mat3) -> Self {
        Self::from_mat3(&m)
    }
}

impl From<Mat4> for Quaternion {
    #[inline]
    fn from(m: Mat4) -> Self {
        Self::from_mat4(&m)
    }
}

impl From<Quaternion> for Mat3 {
    #[inline]
    fn from(q: Quaternion) -> Self {
        q.to_mat3()
    }
}

impl From<Quaternion> for Mat4 {
    #[inline]
    fn from(q: Quaternion) -> Self {
        q.to_mat4()
    }
}

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

//! Applying rotations to vectors and points.

use super::Quaternion;
use crate::Vec3;

impl Quaternion {
    /// Rotates a 3D vector by this quaternion, `q * (0, v) * q⁻¹`.
    ///
    /// Evaluated as `v + w·t + u × t` with `u` the vector part and `t = 2(u × v)`,
    /// which skips building the intermediate quaternions. The identity only holds
    /// for a unit quaternion: for any other `q` the result is not a scaled rotation
    /// and is unspecified. Normalize first.
    #[inline]
    pub fn rotate_vector(&self, v: Vec3) -> Vec3 {
        let u = self.xyz();
        let t = 2.0 * u.cross(v);
        v + self.w * t + u.cross(t)
    }

    /// Rotates `point` by this quaternion around `pivot` instead of the origin.
    #[inline]
    pub fn rotate_around_pivot(&self, point: Vec3, pivot: Vec3) -> Vec3 {
        self.rotate_vector(point - pivot) + pivot
    }

    /// Rotates `point` by `rotation` around `pivot`.
    #[inline]
    pub fn rotate_point_around_pivot(point: Vec3, pivot: Vec3, rotation: Quaternion) -> Vec3 {
        rotation.rotate_around_pivot(point, pivot)
    }

    /// Rotates `point` around `pivot` by Euler angles in degrees
    /// (`x` = roll, `y` = pitch, `z` = yaw, see [`Quaternion::from_euler_vec`]).
    #[inline]
    pub fn rotate_point_around_pivot_euler(point: Vec3, pivot: Vec3, euler_degrees: Vec3) -> Vec3 {
        Self::from_euler_vec(euler_degrees).rotate_around_pivot(point, pivot)
    }
}

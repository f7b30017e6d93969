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

//! Blending between orientations.
//!
//! All three functions take their operands by value. Only [`Quaternion::slerp`]
//! clamps the interpolation factor `t` to `[0.0, 1.0]`; `lerp` and `nlerp`
//! extrapolate outside that range. The operands should be normalized; this is
//! not checked.

use super::Quaternion;
use crate::{clamp_unit, saturate, EPSILON, SLERP_DOT_THRESHOLD};

impl Quaternion {
    /// Component-wise linear interpolation, `start * (1 - t) + end * t`.
    ///
    /// `t` is not clamped. The result is generally not unit length; use
    /// [`Quaternion::nlerp`] when a rotation is needed.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        start * (1.0 - t) + end * t
    }

    /// Linear interpolation followed by normalization.
    ///
    /// Cheaper than [`Quaternion::slerp`] but does not move at constant angular speed.
    #[inline]
    pub fn nlerp(start: Self, end: Self, t: f32) -> Self {
        Self::lerp(start, end, t).normalize()
    }

    /// Performs a Spherical Linear Interpolation (Slerp) between two quaternions.
    ///
    /// Slerp provides a smooth, constant-speed interpolation between two rotations,
    /// following the shortest path on the surface of a 4D sphere. When the operands
    /// point into opposite hemispheres `end` is negated, so at `t = 1` the result may
    /// be `-end`, which is the same rotation.
    pub fn slerp(start: Self, end: Self, t: f32) -> Self {
        let t = saturate(t);
        let mut cos_theta = start.dot(end);
        let mut end_adjusted = end;

        // Both arcs are equally long when the dot product is ~0; keep `end` as given.
        if cos_theta < -EPSILON {
            cos_theta = -cos_theta;
            end_adjusted = -end;
        }

        if cos_theta > SLERP_DOT_THRESHOLD {
            // sin(theta) is close to zero here.
            return Self::nlerp(start, end_adjusted, t);
        }

        let angle = clamp_unit(cos_theta).acos();
        let sin_theta_inv = 1.0 / angle.sin();
        let scale_start = ((1.0 - t) * angle).sin() * sin_theta_inv;
        let scale_end = (t * angle).sin() * sin_theta_inv;
        start * scale_start + end_adjusted * scale_end
    }
}

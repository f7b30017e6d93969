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

//! Orientation and rotation primitives for the Khora Engine.
//!
//! The centerpiece of this crate is [`Quaternion`], the type used by transforms,
//! cameras and animation to compose, interpolate and apply rotations without
//! suffering gimbal lock. [`Vec3`], [`Vec4`], [`Mat3`] and [`Mat4`] are provided as
//! the minimal collaborators the quaternion converts to and from.
//!
//! # Angle units
//!
//! Every angle crossing the public boundary of [`Quaternion`] is expressed in
//! **degrees**: axis-angle and Euler constructors, [`Quaternion::angle`],
//! [`Quaternion::angular_distance`] and [`Quaternion::to_euler`]. The matrix
//! rotation builders (`Mat3::from_rotation_x` and friends) take **radians**, like
//! the rest of the engine's math code. Use [`degrees_to_radians`] and
//! [`radians_to_degrees`] to move between the two.
//!
//! # Conventions
//!
//! * Matrices are column-major; `m.cols[c].y` is the element at row 1, column `c`.
//! * The coordinate system is right-handed. The engine basis is right = +X,
//!   up = +Y and forward = +Z.
//! * `a * b` for quaternions applies `b` first, then `a`, the same order as
//!   `M1 * M2 * v` for matrices.

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

/// Above this dot product two unit quaternions are treated as parallel and
/// [`Quaternion::slerp`] falls back to normalized linear interpolation.
pub const SLERP_DOT_THRESHOLD: f32 = 1.0 - EPSILON;

// Re-export standard mathematical constants for convenience.
pub use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

// --- Declare Sub-Modules ---

pub mod error;
pub mod matrix;
pub mod quaternion;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::error::{MathError, Result};
pub use self::matrix::{Mat3, Mat4};
pub use self::quaternion::Quaternion;
pub use self::vector::{Vec3, Vec4};

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use khora_math::{degrees_to_radians, PI};
/// assert_eq!(degrees_to_radians(180.0), PI);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// use khora_math::{radians_to_degrees, PI};
/// assert_eq!(radians_to_degrees(PI), 180.0);
/// ```
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Clamps a value to a specified minimum and maximum range.
///
/// # Examples
///
/// ```
/// use khora_math::clamp;
/// assert_eq!(clamp(1.5, -1.0, 1.0), 1.0);
/// assert_eq!(clamp(-3.0, -1.0, 1.0), -1.0);
/// assert_eq!(clamp(0.25, -1.0, 1.0), 0.25);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min_val: T, max_val: T) -> T {
    if value < min_val {
        min_val
    } else if value > max_val {
        max_val
    } else {
        value
    }
}

/// Clamps a floating-point value to the `[0.0, 1.0]` range.
///
/// Used for interpolation factors.
///
/// # Examples
///
/// ```
/// use khora_math::saturate;
/// assert_eq!(saturate(1.5), 1.0);
/// assert_eq!(saturate(-0.5), 0.0);
/// ```
#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Performs an approximate equality comparison between two floats with a custom tolerance.
///
/// # Examples
///
/// ```
/// use khora_math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the crate's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use khora_math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}

/// Clamps `value` to `[-1, 1]` before it is handed to `acos` or `asin`.
#[inline]
pub(crate) fn clamp_unit(value: f32) -> f32 {
    clamp(value, -1.0, 1.0)
}

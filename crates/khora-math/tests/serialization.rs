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

#![cfg(feature = "serde")]

use khora_math::{Quaternion, Vec3};

#[test]
fn quaternion_json_round_trip() {
    let q = Quaternion::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), 33.0);
    let json = serde_json::to_string(&q).unwrap();
    let back: Quaternion = serde_json::from_str(&json).unwrap();
    assert_eq!(back.to_array(), q.to_array());
}

#[test]
fn quaternion_json_uses_named_fields() {
    let value = serde_json::to_value(Quaternion::IDENTITY).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0 })
    );
}

#[test]
fn quaternion_bincode_round_trip() {
    let config = bincode::config::standard();
    let q = Quaternion::new(-0.25, 0.5, 1.5, -3.0);

    let bytes = bincode::encode_to_vec(q, config).unwrap();
    let (back, read): (Quaternion, usize) = bincode::decode_from_slice(&bytes, config).unwrap();
    assert_eq!(read, bytes.len());
    assert_eq!(back.to_array(), q.to_array());

    let bytes = bincode::serde::encode_to_vec(q, config).unwrap();
    let (back, _): (Quaternion, usize) =
        bincode::serde::decode_from_slice(&bytes, config).unwrap();
    assert_eq!(back.to_array(), q.to_array());
}

#[test]
fn euler_vector_round_trip() {
    let euler = Quaternion::from_euler(20.0, 10.0, -30.0).to_euler();
    let json = serde_json::to_string(&euler).unwrap();
    let back: Vec3 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, euler);
}

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

//! Error types for the fallible corners of the math API.
//!
//! The arithmetic itself never fails: degenerate inputs are resolved with
//! documented fallbacks. These errors are only produced by the `try_*`
//! companions and by conversions from untyped data.

use thiserror::Error;

/// Errors returned by fallible math operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// The value has a (near) zero length and cannot be normalized or inverted.
    #[error("cannot normalize or invert a value with near-zero length (length squared = {length_squared})")]
    DegenerateLength {
        /// The squared length that was found.
        length_squared: f32,
    },

    /// A flat buffer did not contain the expected number of components.
    #[error("expected {expected} components, got {actual}")]
    InvalidComponentCount {
        /// The number of components the target type needs.
        expected: usize,
        /// The number of components that were provided.
        actual: usize,
    },
}

/// A specialized `Result` type for math operations.
pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MathError::InvalidComponentCount {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "expected 4 components, got 3");

        let err = MathError::DegenerateLength {
            length_squared: 0.0,
        };
        assert!(err.to_string().contains("near-zero length"));
    }
}

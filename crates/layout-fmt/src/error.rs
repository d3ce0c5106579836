// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for layout transcoding.

/// Errors that can occur when transcoding a tensor.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The source holds fewer elements than the shape parameters imply.
    #[error("insufficient input: need at least {required} elements, got {actual}")]
    InsufficientInput { required: usize, actual: usize },

    /// The source length does not match an exact-length requirement.
    #[error("input length mismatch: expected exactly {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

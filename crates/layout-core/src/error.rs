// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for layout geometry derivation.

/// Errors produced when deriving layout geometry from shape parameters.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    /// The kernel dimension is not one of the supported sizes.
    #[error("unsupported kernel dim {0}: expected one of 1, 3, 5, 7")]
    UnsupportedKernelDim(usize),
}

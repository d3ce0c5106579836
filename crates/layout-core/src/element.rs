// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Element types a layout transcode can move.

/// Marker for the 4-byte numeric types that flow through a transcoder.
///
/// The address arithmetic never interprets element values — a transcode
/// is a pure relayout — so the only property that matters is the fixed
/// element width. Both supported types are [`bytemuck::Pod`], which lets
/// blob I/O reinterpret whole buffers to and from raw little-endian
/// bytes without a per-element conversion.
pub trait Element:
    bytemuck::Pod + PartialEq + std::fmt::Debug + Send + Sync + 'static
{
    /// Human-readable label for diagnostics.
    fn type_name() -> &'static str;
}

impl Element for u32 {
    fn type_name() -> &'static str {
        "u32"
    }
}

impl Element for f32 {
    fn type_name() -> &'static str {
        "f32"
    }
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # layout-core
//!
//! Shared arithmetic for the STRIDE layout transcoders.
//!
//! This crate provides:
//! - [`STRIDE`] / [`HALF_STRIDE`] — the accelerator's addressable row width.
//! - [`round_up`] — the rounding primitive every derived dimension is
//!   built from.
//! - [`KernelBlock`] — the per-dim kernel block geometry table.
//! - [`MapTile`] — the per-dim feature-map tiling table.
//! - [`Element`] — the 4-byte POD element types a transcode can move.
//!
//! # Design Goals
//! - Pure integer arithmetic, no state, no I/O.
//! - The hand-tuned per-dim constants live in explicit tables, not in
//!   per-layout branching.
//! - Clean error types via `thiserror`.

mod element;
mod error;
mod geometry;

pub use element::Element;
pub use error::GeometryError;
pub use geometry::{
    kernel_block, map_tile, round_up, KernelBlock, MapTile, HALF_STRIDE, STRIDE,
};

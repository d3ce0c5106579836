// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # layout-fmt
//!
//! Layout transcoders for the STRIDE FPGA inference engine.
//!
//! Each transcoder is a closed-form, purely arithmetic map from a
//! tensor's natural row-major index space into the accelerator's padded,
//! tiled memory address space. A transcode is a padding, not a
//! compaction: the destination is always at least as long as the source,
//! and every address the map never assigns stays zero.
//!
//! This crate provides:
//! - [`KernelWeightLayout`] — 2-D convolution kernels into cell/block
//!   addressed memory.
//! - [`ConvFcWeightLayout`] / [`FcWeightLayout`] — fully-connected
//!   weight matrices into cell-grouped memory.
//! - [`BiasLayout`] / [`BatchNormLayout`] — per-channel scalars (and
//!   scale/shift pairs) into stride-addressed slots.
//! - [`FeatureMapLayout`] — batches of square activation maps into
//!   rounds/parts addressed by the same striping scheme.
//! - [`Transcoder`] — the trait unifying validation, zero-fill and the
//!   per-family scatter.
//!
//! # Design Goals
//! - Transcoders are stateless pure functions over owned buffers: no
//!   I/O, no shared state, trivially parallel across shapes.
//! - One shape, one instance; `size()` and `format()` are deterministic
//!   functions of the shape parameters alone.

mod batch_norm;
mod bias;
mod error;
mod feature_map;
mod fcw;
mod transcoder;
mod weight;

pub use batch_norm::BatchNormLayout;
pub use bias::{BiasLayout, SlotOrder};
pub use error::FormatError;
pub use feature_map::FeatureMapLayout;
pub use fcw::{ConvFcWeightLayout, FcWeightLayout};
pub use transcoder::{SourceLen, Transcoder};
pub use weight::KernelWeightLayout;

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # model-io
//!
//! The I/O collaborators around the layout transcoders.
//!
//! This crate provides:
//! - [`read_elements`] / [`write_elements`] — whole-blob element I/O
//!   ("read N elements of type T from source, write N to sink").
//! - [`dump`] / [`DumpOptions`] — the little-endian hex-dump utility.
//! - [`FillPattern`] / [`fill_u32`] / [`tagged_conv`] — synthetic input
//!   generation for exercising the transcoders.
//! - [`FormatManifest`] / [`run_manifest`] — a JSON manifest naming a
//!   model's tensors and the batch runner that transcodes all of them.
//!
//! The transcoders themselves never touch files: every `format` call
//! consumes exactly one in-memory source and yields exactly one
//! caller-owned destination. This crate is the only place bytes meet
//! the filesystem.

mod batch;
mod blob;
mod dump;
mod error;
mod manifest;
mod synth;

pub use batch::{run_manifest, BatchOutcome};
pub use blob::{elements_from_bytes, read_elements, write_elements};
pub use dump::{dump, dump_file, DumpOptions};
pub use error::BlobError;
pub use manifest::{FormatManifest, LayoutKind, TensorEntry};
pub use synth::{fill_u32, tagged_conv, FillPattern};

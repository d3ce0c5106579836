// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Batch transcoding driven by a [`FormatManifest`].
//!
//! The runner resolves every blob path against a base directory, builds
//! the layout each entry names, transcodes, and writes the destination
//! blob. Element values are moved as u32 bit patterns — the relayout
//! never interprets them, so f32 blobs pass through bit-exactly.

use crate::manifest::{FormatManifest, LayoutKind, TensorEntry};
use crate::{read_elements, write_elements, BlobError};
use layout_fmt::{
    BatchNormLayout, BiasLayout, ConvFcWeightLayout, FcWeightLayout, FeatureMapLayout,
    KernelWeightLayout, Transcoder,
};
use std::path::Path;

/// Result of transcoding one manifest entry.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Tensor name from the manifest.
    pub name: String,
    /// Layout kind that was applied.
    pub kind: LayoutKind,
    /// Source element count.
    pub src_len: usize,
    /// Destination element count written.
    pub dest_len: usize,
}

/// Validates the manifest and transcodes every entry, in order.
///
/// Blob paths are resolved relative to `base_dir`. The first failing
/// entry aborts the run; entries already written stay on disk.
pub fn run_manifest(
    manifest: &FormatManifest,
    base_dir: &Path,
) -> Result<Vec<BatchOutcome>, BlobError> {
    manifest.validate()?;
    tracing::info!(
        model = %manifest.name,
        tensors = manifest.tensors.len(),
        "batch transcode start",
    );

    let mut outcomes = Vec::with_capacity(manifest.tensors.len());
    for entry in &manifest.tensors {
        let outcome = run_entry(entry, base_dir)?;
        tracing::info!(
            tensor = %outcome.name,
            kind = outcome.kind.as_str(),
            src = outcome.src_len,
            dest = outcome.dest_len,
            "tensor transcoded",
        );
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn run_entry(entry: &TensorEntry, base_dir: &Path) -> Result<BatchOutcome, BlobError> {
    let kind = entry.layout_kind()?;
    let src: Vec<u32> = read_elements(&base_dir.join(&entry.input))?;

    let dest = match kind {
        LayoutKind::Weight => {
            KernelWeightLayout::new(entry.dim, entry.inputs, entry.outputs)?.format(&src)?
        }
        LayoutKind::ConvFcw => {
            ConvFcWeightLayout::new(entry.inputs, entry.outputs).format(&src)?
        }
        LayoutKind::FcFcw => FcWeightLayout::new(entry.inputs, entry.outputs).format(&src)?,
        LayoutKind::Bias => BiasLayout::conv(entry.inputs).format(&src)?,
        LayoutKind::FcBias => BiasLayout::fc(entry.inputs).format(&src)?,
        LayoutKind::BnConv | LayoutKind::BnFc => {
            let pair = entry.bias_input.as_ref().ok_or_else(|| {
                BlobError::Manifest(format!("tensor '{}' needs a bias_input blob", entry.name))
            })?;
            let biases: Vec<u32> = read_elements(&base_dir.join(pair))?;
            let layout = if kind == LayoutKind::BnConv {
                BatchNormLayout::conv(entry.inputs)
            } else {
                BatchNormLayout::fc(entry.inputs)
            };
            layout.format(&src, &biases)?
        }
        LayoutKind::FeatureMaps => FeatureMapLayout::with_options(
            entry.dim,
            entry.img_h,
            entry.img_count,
            entry.channels,
            entry.same_conv,
        )?
        .format(&src)?,
    };

    write_elements(&base_dir.join(&entry.output), &dest)?;
    Ok(BatchOutcome {
        name: entry.name.clone(),
        kind,
        src_len: src.len(),
        dest_len: dest.len(),
    })
}

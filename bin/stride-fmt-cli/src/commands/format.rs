// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `stride-fmt format-*` commands: one transcode per invocation.
//!
//! Every command follows the same flow: read the source blob, build the
//! layout from the shape flags, transcode, write the destination blob.
//! Elements are moved as u32 bit patterns — the relayout never
//! interprets values, so f32 blobs pass through bit-exactly.

use crate::config::CliConfig;
use layout_fmt::{
    BatchNormLayout, BiasLayout, ConvFcWeightLayout, FcWeightLayout, FeatureMapLayout,
    KernelWeightLayout, Transcoder,
};
use model_io::{read_elements, write_elements};
use std::path::Path;

pub fn weight(
    config: &CliConfig,
    input: &Path,
    output: &Path,
    dim: usize,
    inputs: usize,
    outputs: usize,
) -> anyhow::Result<()> {
    let layout = KernelWeightLayout::new(dim, inputs, outputs)?;
    let src: Vec<u32> = read_elements(input)?;
    let dest = layout.format(&src)?;
    write_blob(config, output, &dest, layout.kind())
}

pub fn conv_fcw(
    config: &CliConfig,
    input: &Path,
    output: &Path,
    inputs: usize,
    outputs: usize,
) -> anyhow::Result<()> {
    let layout = ConvFcWeightLayout::new(inputs, outputs);
    let src: Vec<u32> = read_elements(input)?;
    let dest = layout.format(&src)?;
    write_blob(config, output, &dest, layout.kind())
}

pub fn fc_fcw(
    config: &CliConfig,
    input: &Path,
    output: &Path,
    inputs: usize,
    outputs: usize,
) -> anyhow::Result<()> {
    let layout = FcWeightLayout::new(inputs, outputs);
    let src: Vec<u32> = read_elements(input)?;
    let dest = layout.format(&src)?;
    write_blob(config, output, &dest, layout.kind())
}

pub fn bias(
    config: &CliConfig,
    input: &Path,
    output: &Path,
    inputs: usize,
) -> anyhow::Result<()> {
    let layout = BiasLayout::conv(inputs);
    let src: Vec<u32> = read_elements(input)?;
    let dest = layout.format(&src)?;
    write_blob(config, output, &dest, layout.kind())
}

pub fn fc_bias(
    config: &CliConfig,
    input: &Path,
    output: &Path,
    inputs: usize,
) -> anyhow::Result<()> {
    let layout = BiasLayout::fc(inputs);
    let src: Vec<u32> = read_elements(input)?;
    let dest = layout.format(&src)?;
    write_blob(config, output, &dest, layout.kind())
}

pub fn batch_norm(
    config: &CliConfig,
    weights: &Path,
    biases: &Path,
    output: &Path,
    inputs: usize,
    fc: bool,
) -> anyhow::Result<()> {
    let layout = if fc {
        BatchNormLayout::fc(inputs)
    } else {
        BatchNormLayout::conv(inputs)
    };
    let scales: Vec<u32> = read_elements(weights)?;
    let shifts: Vec<u32> = read_elements(biases)?;
    let dest = layout.format(&scales, &shifts)?;
    write_blob(config, output, &dest, layout.kind())
}

#[allow(clippy::too_many_arguments)]
pub fn feature_maps(
    config: &CliConfig,
    input: &Path,
    output: &Path,
    dim: usize,
    img_h: usize,
    img_count: usize,
    channels: usize,
    same_conv: bool,
) -> anyhow::Result<()> {
    let layout = FeatureMapLayout::with_options(dim, img_h, img_count, channels, same_conv)?;
    let src: Vec<u32> = read_elements(input)?;
    let dest = layout.format(&src)?;
    write_blob(config, output, &dest, layout.kind())
}

/// Resolves the destination path and writes the formatted blob.
pub(crate) fn write_blob(
    config: &CliConfig,
    output: &Path,
    dest: &[u32],
    kind: &str,
) -> anyhow::Result<()> {
    let path = config.resolve_output(output);
    write_elements(&path, dest)?;
    println!(
        "  {kind}: wrote {} elements ({} bytes) to '{}'",
        dest.len(),
        dest.len() * 4,
        path.display(),
    );
    Ok(())
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `stride-fmt fill-conv` command: paint convs of a kernel-weight
//! buffer with the tag pattern `(cell << 16) | (conv << 8) | n`.
//!
//! A dump of the result shows exactly where each conv's sub-convolutions
//! land, which is how formatted blobs are eyeballed against the engine's
//! expectations.

use crate::config::CliConfig;
use layout_fmt::{KernelWeightLayout, Transcoder};
use model_io::{read_elements, tagged_conv};
use std::path::Path;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    config: &CliConfig,
    input: Option<&Path>,
    output: &Path,
    dim: usize,
    inputs: usize,
    outputs: usize,
    cell: Option<usize>,
    conv: Option<usize>,
    value: u32,
) -> anyhow::Result<()> {
    let layout = KernelWeightLayout::new(dim, inputs, outputs)?;

    let mut buffer: Vec<u32> = match input {
        Some(path) => {
            let existing: Vec<u32> = read_elements(path)?;
            if existing.len() == layout.dest_len() {
                existing
            } else {
                tracing::warn!(
                    "'{}' holds {} elements, expected {}; starting from zeros",
                    path.display(),
                    existing.len(),
                    layout.dest_len(),
                );
                vec![0; layout.dest_len()]
            }
        }
        None => vec![0; layout.dest_len()],
    };

    match (cell, conv) {
        (Some(cell), Some(conv)) => {
            paint(&layout, cell, conv, value, &mut buffer);
            println!("  painted cell {cell} conv {conv}");
        }
        _ => {
            for cell in 0..outputs {
                for conv in 0..inputs {
                    paint(&layout, cell, conv, value, &mut buffer);
                }
            }
            println!("  painted all {outputs} x {inputs} convs");
        }
    }

    super::format::write_blob(config, output, &buffer, "fill_conv")
}

fn paint(layout: &KernelWeightLayout, cell: usize, conv: usize, value: u32, dst: &mut [u32]) {
    let tags = tagged_conv(cell, conv, value, layout.dim() * layout.dim());
    layout.fill_conv(cell, conv, &tags, dst);
}

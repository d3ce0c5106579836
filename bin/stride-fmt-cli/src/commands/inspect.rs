// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `stride-fmt inspect` command: print derived layout geometry.
//!
//! Shows the numbers the address formulas are built from, which is the
//! first thing to compare when a formatted blob disagrees with what the
//! engine expects.

use layout_core::STRIDE;
use layout_fmt::{FeatureMapLayout, KernelWeightLayout, Transcoder};

pub fn execute(
    dim: usize,
    inputs: usize,
    outputs: usize,
    img_h: Option<usize>,
    img_count: Option<usize>,
    same_conv: bool,
) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            stride-fmt · Layout Inspector            ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    if inputs > 0 && outputs > 0 {
        let w = KernelWeightLayout::new(dim, inputs, outputs)?;
        println!("  Kernel weight (dim={dim}, inputs={inputs}, outputs={outputs}):");
        println!(
            "   block: {} x {} convs ({} elements wide, pad {})",
            w.cell_w_convs(),
            w.block_convs() / w.cell_w_convs(),
            w.block_w(),
            w.block_pad_w(),
        );
        println!(
            "   cell:  {} x {} convs -> {} x {} elements",
            w.cell_w_convs(),
            w.cell_h_convs(),
            w.cell_w(),
            w.cell_h(),
        );
        println!(
            "   destination: {} elements ({} bytes, {} rows)",
            w.dest_len(),
            w.dest_len() * 4,
            w.dest_len() / STRIDE,
        );
        println!();
    }

    if let (Some(img_h), Some(img_count)) = (img_h, img_count) {
        let fms = FeatureMapLayout::with_options(dim, img_h, img_count, 1, same_conv)?;
        println!("  Feature maps (dim={dim}, img_h={img_h}, count={img_count}):");
        println!(
            "   padded height: {} (pad {} leading, {} trailing)",
            fms.img_h(),
            fms.pad0(),
            fms.pad1(),
        );
        println!(
            "   tiling: {} maps per row, {} per round, map_pad {}",
            fms.stride_imgs(),
            fms.round_imgs(),
            fms.map_pad(),
        );
        println!(
            "   parts: {} x {} rows; rounds: {}",
            fms.part_num(),
            fms.dim(),
            fms.round_num(),
        );
        println!(
            "   destination: {} elements ({} bytes, {} rows)",
            fms.dest_len(),
            fms.dest_len() * 4,
            fms.dest_len() / STRIDE,
        );
        println!();
    }

    Ok(())
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Fully-connected weight layouts.
//!
//! Two variants share the cell-per-output-channel scheme:
//!
//! - [`ConvFcWeightLayout`] (`conv_fcw`) — the convolution-pipeline
//!   variant. Each output channel's input vector is cut into groups of
//!   [`HALF_STRIDE`] elements; every group is replicated
//!   `GROUP_N_STRIDE` times on consecutive STRIDE rows to satisfy the
//!   engine's read-port fan-out, and groups alternate between the two
//!   halves of the row the same way kernel cells pair output channels.
//! - [`FcWeightLayout`] (`fc_fcw`) — the plain variant: one contiguous,
//!   block-aligned cell per output channel, filled by straight copy and
//!   zero-padded to the cell length.

use crate::{SourceLen, Transcoder};
use layout_core::{round_up, Element, HALF_STRIDE, STRIDE};

/// Replicated copies of each group on consecutive rows.
const GROUP_N_STRIDE: usize = 3;

/// Cell row counts align to whole blocks of this many STRIDE rows.
const BLOCK_N_STRIDE: usize = 15;

/// Fully-connected weights for the convolution pipeline, with per-group
/// replication.
#[derive(Debug, Clone)]
pub struct ConvFcWeightLayout {
    inputs: usize,
    outputs: usize,
    cell_n_groups: usize,
    cell_n_stride: usize,
}

impl ConvFcWeightLayout {
    /// Creates the layout for `outputs` channels of `inputs` weights each.
    pub fn new(inputs: usize, outputs: usize) -> Self {
        let cell_n_groups = round_up(inputs, HALF_STRIDE) / HALF_STRIDE;
        let rows = round_up(cell_n_groups, 2) / 2 * GROUP_N_STRIDE;
        let cell_n_stride = round_up(rows, BLOCK_N_STRIDE);
        Self { inputs, outputs, cell_n_groups, cell_n_stride }
    }

    /// Input weight count per output channel.
    pub fn inputs(&self) -> usize {
        self.inputs
    }

    /// Output channel count.
    pub fn outputs(&self) -> usize {
        self.outputs
    }

    /// Half-stride groups per cell.
    pub fn cell_n_groups(&self) -> usize {
        self.cell_n_groups
    }

    /// STRIDE rows per cell, rounded up to whole blocks.
    pub fn cell_n_stride(&self) -> usize {
        self.cell_n_stride
    }

    /// Source elements per group.
    pub fn group_len(&self) -> usize {
        HALF_STRIDE
    }

    /// Replicated copies written per group.
    pub fn group_copies(&self) -> usize {
        GROUP_N_STRIDE
    }

    /// Address of the first copy of `group` in `cell`. Even groups take
    /// the left half of their row run, odd groups the right half.
    pub fn group_addr(&self, cell: usize, group: usize) -> usize {
        let mut addr =
            cell * self.cell_n_stride * STRIDE + (group / 2) * GROUP_N_STRIDE * STRIDE;
        if group % 2 == 1 {
            addr += HALF_STRIDE;
        }
        addr
    }
}

impl Transcoder for ConvFcWeightLayout {
    fn kind(&self) -> &'static str {
        "conv_fcw"
    }

    fn dest_len(&self) -> usize {
        self.cell_n_stride * STRIDE * self.outputs
    }

    fn src_len(&self) -> SourceLen {
        SourceLen::AtLeast(self.inputs * self.outputs)
    }

    fn scatter<E: Element>(&self, src: &[E], dst: &mut [E]) {
        for cell in 0..self.outputs {
            let channel = &src[cell * self.inputs..][..self.inputs];
            for (group, chunk) in channel.chunks(HALF_STRIDE).enumerate() {
                let base = self.group_addr(cell, group);
                for copy in 0..GROUP_N_STRIDE {
                    let at = base + copy * STRIDE;
                    dst[at..at + chunk.len()].copy_from_slice(chunk);
                }
            }
        }
    }
}

/// Fully-connected weights for the FC pipeline: one contiguous cell per
/// output channel.
#[derive(Debug, Clone)]
pub struct FcWeightLayout {
    inputs: usize,
    outputs: usize,
    cell_len: usize,
}

impl FcWeightLayout {
    /// Creates the layout for `outputs` channels of `inputs` weights each.
    pub fn new(inputs: usize, outputs: usize) -> Self {
        let cell_len = round_up(inputs, STRIDE * BLOCK_N_STRIDE);
        Self { inputs, outputs, cell_len }
    }

    /// Input weight count per output channel.
    pub fn inputs(&self) -> usize {
        self.inputs
    }

    /// Output channel count.
    pub fn outputs(&self) -> usize {
        self.outputs
    }

    /// Block-aligned cell length in elements.
    pub fn cell_len(&self) -> usize {
        self.cell_len
    }

    /// Base address of output channel `cell`.
    pub fn cell_addr(&self, cell: usize) -> usize {
        cell * self.cell_len
    }
}

impl Transcoder for FcWeightLayout {
    fn kind(&self) -> &'static str {
        "fc_fcw"
    }

    fn dest_len(&self) -> usize {
        self.cell_len * self.outputs
    }

    fn src_len(&self) -> SourceLen {
        SourceLen::AtLeast(self.inputs * self.outputs)
    }

    fn scatter<E: Element>(&self, src: &[E], dst: &mut [E]) {
        for cell in 0..self.outputs {
            let at = self.cell_addr(cell);
            dst[at..at + self.inputs]
                .copy_from_slice(&src[cell * self.inputs..][..self.inputs]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatError;

    #[test]
    fn test_conv_fcw_geometry() {
        let w = ConvFcWeightLayout::new(512, 2);
        assert_eq!(w.cell_n_groups(), 32);
        // 16 group pairs x 3 rows, rounded up to whole 15-row blocks.
        assert_eq!(w.cell_n_stride(), 60);
        assert_eq!(w.dest_len(), 60 * 32 * 2);
    }

    #[test]
    fn test_conv_fcw_group_addr() {
        let w = ConvFcWeightLayout::new(512, 2);
        assert_eq!(w.group_addr(0, 0), 0);
        assert_eq!(w.group_addr(0, 1), HALF_STRIDE);
        assert_eq!(w.group_addr(0, 2), 3 * 32);
        assert_eq!(w.group_addr(0, 3), 3 * 32 + HALF_STRIDE);
        assert_eq!(w.group_addr(1, 3), 60 * 32 + 3 * 32 + HALF_STRIDE);
    }

    #[test]
    fn test_conv_fcw_replication() {
        let w = ConvFcWeightLayout::new(20, 1);
        assert_eq!(w.cell_n_groups(), 2);
        assert_eq!(w.cell_n_stride(), 15);

        let src: Vec<u32> = (1..=20).collect();
        let out = w.format(&src).unwrap();

        // Every copy of a group is byte-identical to the source slice
        // that fed it.
        for copy in 0..3 {
            let at = copy * 32;
            assert_eq!(&out[at..at + 16], &src[..16], "group 0 copy {copy}");
            let at = copy * 32 + HALF_STRIDE;
            assert_eq!(&out[at..at + 4], &src[16..20], "group 1 copy {copy}");
        }

        // 3 copies x (16 + 4) source elements, everything else zero.
        assert_eq!(out.iter().filter(|&&v| v != 0).count(), 60);
    }

    #[test]
    fn test_conv_fcw_insufficient_input() {
        let w = ConvFcWeightLayout::new(20, 2);
        assert!(matches!(
            w.format(&vec![1u32; 39]),
            Err(FormatError::InsufficientInput { required: 40, actual: 39 }),
        ));
    }

    #[test]
    fn test_fc_fcw_geometry() {
        let w = FcWeightLayout::new(512, 2);
        assert_eq!(w.cell_len(), 960);
        assert_eq!(w.cell_addr(1), 960);
        assert_eq!(w.dest_len(), 1920);
    }

    #[test]
    fn test_fc_fcw_straight_copy() {
        let w = FcWeightLayout::new(5, 2);
        let src: Vec<u32> = (1..=10).collect();
        let out = w.format(&src).unwrap();

        assert_eq!(&out[..5], &src[..5]);
        assert_eq!(&out[480..485], &src[5..10]);
        assert_eq!(out.iter().filter(|&&v| v != 0).count(), 10);
    }

    #[test]
    fn test_fc_fcw_insufficient_input() {
        let w = FcWeightLayout::new(512, 2);
        assert!(w.format(&vec![0u32; 1023]).is_err());
    }
}

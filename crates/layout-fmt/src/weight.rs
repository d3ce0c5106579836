// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Convolution kernel weight layout.
//!
//! Output channels tile two per cell row-pair: even channels take the
//! left half of each STRIDE row, odd channels the right half. Within a
//! cell, input channels ("convs") tile into blocks of
//! `block_w_convs × block_h_convs`; each `dim × dim` kernel is written
//! `dim` times as cyclically-rotated row-placements ("sub-convolutions"),
//! spreading it across `dim` interleaved `dim`-wide slices so the engine
//! can read adjacent kernel rows on consecutive cycles.

use crate::{SourceLen, Transcoder};
use layout_core::{kernel_block, round_up, Element, GeometryError, KernelBlock, HALF_STRIDE, STRIDE};

/// Lays out 2-D convolution kernels into cell/block addressed memory.
#[derive(Debug, Clone)]
pub struct KernelWeightLayout {
    dim: usize,
    inputs: usize,
    outputs: usize,
    block: KernelBlock,
}

impl KernelWeightLayout {
    /// Creates the layout for `outputs × inputs` kernels of size
    /// `dim × dim`. Fails for kernel dims outside {1, 3, 5, 7}.
    pub fn new(dim: usize, inputs: usize, outputs: usize) -> Result<Self, GeometryError> {
        let block = kernel_block(dim)?;
        Ok(Self { dim, inputs, outputs, block })
    }

    /// Kernel dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Input channel count.
    pub fn inputs(&self) -> usize {
        self.inputs
    }

    /// Output channel count.
    pub fn outputs(&self) -> usize {
        self.outputs
    }

    /// Conv slot width in elements.
    pub fn conv_w(&self) -> usize {
        self.dim
    }

    /// Conv slot height in rows: one rotated row-band per sub-conv.
    pub fn conv_h(&self) -> usize {
        self.dim
    }

    /// Convolutions per block.
    pub fn block_convs(&self) -> usize {
        self.block.convs()
    }

    /// Block width in elements.
    pub fn block_w(&self) -> usize {
        self.block.block_w_convs * self.conv_w()
    }

    /// Block height in rows.
    pub fn block_h(&self) -> usize {
        self.block.block_h_convs * self.conv_h()
    }

    /// Unused columns padding a block row out to a half-stride.
    pub fn block_pad_w(&self) -> usize {
        self.block.pad_w()
    }

    /// Convs per cell row.
    pub fn cell_w_convs(&self) -> usize {
        self.block.block_w_convs
    }

    /// Conv rows per cell: the input count rounded up to whole blocks.
    pub fn cell_h_convs(&self) -> usize {
        round_up(self.inputs, self.block_convs()) / self.block.block_w_convs
    }

    /// Conv capacity of a cell.
    pub fn cell_convs(&self) -> usize {
        self.cell_w_convs() * self.cell_h_convs()
    }

    /// Cell width in elements.
    pub fn cell_w(&self) -> usize {
        self.cell_w_convs() * self.conv_w()
    }

    /// Cell height in rows.
    pub fn cell_h(&self) -> usize {
        self.cell_h_convs() * self.conv_h()
    }

    /// Base address of output channel `cell`: channel pairs share a
    /// row-pair at opposite halves of the STRIDE row.
    pub fn cell_addr(&self, cell: usize) -> usize {
        (cell / 2) * self.cell_h() * STRIDE + if cell % 2 == 1 { HALF_STRIDE } else { 0 }
    }

    /// Cell-relative address of `conv`'s sub-convolution `sub`.
    pub fn conv_addr(&self, conv: usize, sub: usize) -> usize {
        let w_convs = conv % self.block.block_w_convs;
        let h_convs = conv / self.block.block_w_convs;
        (h_convs * self.conv_h() + sub * self.dim) * STRIDE + w_convs * self.conv_w()
    }

    /// Absolute address of kernel element `pixel` of (`cell`, `conv`)
    /// in the unrotated (sub 0) placement.
    pub fn pixel_addr(&self, cell: usize, conv: usize, pixel: usize) -> usize {
        let row = pixel % self.dim;
        let col = pixel / self.dim;
        self.cell_addr(cell) + self.conv_addr(conv, 0) + row * STRIDE + col
    }

    /// Writes one `dim × dim` kernel into every sub-convolution slot of
    /// (`cell`, `conv`). `dst` must be a buffer of `dest_len()` elements.
    pub fn fill_conv<E: Element>(&self, cell: usize, conv: usize, kernel: &[E], dst: &mut [E]) {
        let cell_addr = self.cell_addr(cell);
        for sub in 0..self.dim {
            let base = cell_addr + self.conv_addr(conv, sub);
            for (n, &v) in kernel.iter().take(self.dim * self.dim).enumerate() {
                let row = n % self.dim;
                let col = (n / self.dim + sub) % self.dim;
                // The top conv rows of a brim-full single-cell layout can
                // rotate past the buffer end; those writes are dropped.
                if let Some(slot) = dst.get_mut(base + row * STRIDE + col) {
                    *slot = v;
                }
            }
        }
    }
}

impl Transcoder for KernelWeightLayout {
    fn kind(&self) -> &'static str {
        "weight"
    }

    fn dest_len(&self) -> usize {
        STRIDE * self.cell_h() * self.outputs
    }

    fn src_len(&self) -> SourceLen {
        SourceLen::AtLeast(self.outputs * self.inputs * self.dim * self.dim)
    }

    fn scatter<E: Element>(&self, src: &[E], dst: &mut [E]) {
        let kernel_len = self.dim * self.dim;
        for cell in 0..self.outputs {
            for conv in 0..self.inputs {
                let at = (cell * self.inputs + conv) * kernel_len;
                self.fill_conv(cell, conv, &src[at..at + kernel_len], dst);
            }
        }
    }
}

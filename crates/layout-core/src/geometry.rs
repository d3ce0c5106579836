// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Striping geometry: the accelerator row constants, the rounding
//! primitive, and the hand-tuned per-dim block and tiling tables.

use crate::GeometryError;

/// Width in elements of one addressable row of the accelerator's
/// weight/activation memory bank.
pub const STRIDE: usize = 32;

/// Half of a [`STRIDE`] row. Even/odd output channels (and alternating
/// fully-connected groups) interleave into opposite halves of the same
/// row pair.
pub const HALF_STRIDE: usize = STRIDE / 2;

/// Rounds `x` up to the next multiple of `base`.
///
/// Exact multiples — including zero — are returned unchanged.
pub fn round_up(x: usize, base: usize) -> usize {
    base * (x / base + usize::from(x % base != 0))
}

/// Kernel block geometry for one supported kernel dimension.
///
/// A block is the tile of convolutions used to derive cell geometry;
/// its width in elements always pads out to a half-stride:
/// `block_w_convs * dim + pad_w() == HALF_STRIDE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelBlock {
    /// Kernel dimension (1, 3, 5 or 7).
    pub dim: usize,
    /// Convolutions per block row.
    pub block_w_convs: usize,
    /// Convolutions per block column.
    pub block_h_convs: usize,
}

/// Hand-tuned block dimensions, one tuple per supported kernel dim.
const KERNEL_BLOCKS: [KernelBlock; 4] = [
    KernelBlock { dim: 1, block_w_convs: 16, block_h_convs: 10 },
    KernelBlock { dim: 3, block_w_convs: 5, block_h_convs: 10 },
    KernelBlock { dim: 5, block_w_convs: 2, block_h_convs: 8 },
    KernelBlock { dim: 7, block_w_convs: 1, block_h_convs: 8 },
];

impl KernelBlock {
    /// Unused columns padding a block row out to a half-stride.
    pub fn pad_w(&self) -> usize {
        HALF_STRIDE - self.block_w_convs * self.dim
    }

    /// Convolutions per block.
    pub fn convs(&self) -> usize {
        self.block_w_convs * self.block_h_convs
    }
}

/// Looks up the block geometry for `dim`.
pub fn kernel_block(dim: usize) -> Result<KernelBlock, GeometryError> {
    KERNEL_BLOCKS
        .iter()
        .copied()
        .find(|b| b.dim == dim)
        .ok_or(GeometryError::UnsupportedKernelDim(dim))
}

/// Feature-map tiling constants for one supported kernel dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapTile {
    /// Kernel dimension (1, 3, 5 or 7).
    pub dim: usize,
    /// Images sharing one STRIDE row.
    pub stride_imgs: usize,
    /// Images forming one full round before addressing wraps.
    pub round_imgs: usize,
}

/// Hand-tuned tiling constants, one tuple per supported kernel dim.
const MAP_TILES: [MapTile; 4] = [
    MapTile { dim: 1, stride_imgs: 32, round_imgs: 160 },
    MapTile { dim: 3, stride_imgs: 10, round_imgs: 50 },
    MapTile { dim: 5, stride_imgs: 4, round_imgs: 20 },
    MapTile { dim: 7, stride_imgs: 2, round_imgs: 10 },
];

impl MapTile {
    /// Image rows per round.
    pub fn round_h_imgs(&self) -> usize {
        self.round_imgs / self.stride_imgs
    }
}

/// Looks up the tiling constants for `dim`.
pub fn map_tile(dim: usize) -> Result<MapTile, GeometryError> {
    MAP_TILES
        .iter()
        .copied()
        .find(|t| t.dim == dim)
        .ok_or(GeometryError::UnsupportedKernelDim(dim))
}

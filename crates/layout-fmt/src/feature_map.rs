// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Feature-map (activation) layout.
//!
//! A batch of square maps is tiled into rounds: `stride_imgs` maps share
//! one STRIDE row (each occupying `dim` columns, centred by `map_pad`
//! when the lane run is narrower than the row), and `round_imgs` maps
//! form one full round before addressing wraps. Each map is cut into
//! `part_num` horizontal parts of `dim` rows; a part is stored
//! column-major relative to the STRIDE rows, so pixel `n` of a part
//! lands at `(n % img_h) * STRIDE + n / img_h`.
//!
//! When the maps feed a same-size convolution, symmetric zero padding of
//! `(dim-1)/2` is first added around every edge so the sliding window
//! never reads out of bounds; the padded height is then rounded up to a
//! whole number of `dim`-row parts, with the remainder on the trailing
//! edge.

use crate::{SourceLen, Transcoder};
use bytemuck::Zeroable;
use layout_core::{map_tile, round_up, Element, GeometryError, MapTile, STRIDE};

/// Tiles a batch of square activation maps into the accelerator's
/// round/part representation.
#[derive(Debug, Clone)]
pub struct FeatureMapLayout {
    dim: usize,
    origin_h: usize,
    img_count: usize,
    channels: usize,
    tile: MapTile,
    img_h: usize,
    pad0: usize,
    pad1: usize,
}

impl FeatureMapLayout {
    /// Creates the layout for `img_count` maps of `img_h × img_h`
    /// pixels, single channel, no convolution padding.
    pub fn new(dim: usize, img_h: usize, img_count: usize) -> Result<Self, GeometryError> {
        Self::with_options(dim, img_h, img_count, 1, false)
    }

    /// Creates the layout with an explicit channel count and optional
    /// same-convolution padding. Each channel plane counts as an
    /// independent map.
    pub fn with_options(
        dim: usize,
        img_h: usize,
        img_count: usize,
        channels: usize,
        same_convolution: bool,
    ) -> Result<Self, GeometryError> {
        let tile = map_tile(dim)?;
        let pad0 = if same_convolution && dim > 1 { (dim - 1) / 2 } else { 0 };
        let padded_h = round_up(img_h + 2 * pad0, dim);
        let pad1 = padded_h - img_h - pad0;
        Ok(Self {
            dim,
            origin_h: img_h,
            img_count,
            channels,
            tile,
            img_h: padded_h,
            pad0,
            pad1,
        })
    }

    /// Kernel dimension the maps are tiled for.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Unpadded input map height.
    pub fn origin_h(&self) -> usize {
        self.origin_h
    }

    /// Padded map height: a whole number of `dim`-row parts.
    pub fn img_h(&self) -> usize {
        self.img_h
    }

    /// Leading pad rows/columns.
    pub fn pad0(&self) -> usize {
        self.pad0
    }

    /// Trailing pad rows/columns (the rounding remainder).
    pub fn pad1(&self) -> usize {
        self.pad1
    }

    /// Total maps, counting each channel plane separately.
    pub fn maps(&self) -> usize {
        self.img_count * self.channels
    }

    /// Maps sharing one STRIDE row.
    pub fn stride_imgs(&self) -> usize {
        self.tile.stride_imgs
    }

    /// Maps forming one full round.
    pub fn round_imgs(&self) -> usize {
        self.tile.round_imgs
    }

    /// Rounds needed for the whole batch.
    pub fn round_num(&self) -> usize {
        round_up(self.maps(), self.tile.round_imgs) / self.tile.round_imgs
    }

    /// Map rows per round.
    pub fn round_h_imgs(&self) -> usize {
        self.tile.round_h_imgs()
    }

    /// Elements per round.
    pub fn round_size(&self) -> usize {
        self.round_h_imgs() * self.part_num() * self.img_h * STRIDE
    }

    /// Horizontal `dim`-row parts per map.
    pub fn part_num(&self) -> usize {
        self.img_h / self.dim
    }

    /// Pixels per part.
    pub fn part_size(&self) -> usize {
        self.img_h * self.dim
    }

    /// Pixels per padded map.
    pub fn map_size(&self) -> usize {
        self.img_h * self.img_h
    }

    /// Columns centring a narrow lane run within the STRIDE row.
    pub fn map_pad(&self) -> usize {
        (STRIDE - self.tile.stride_imgs * self.dim) / 2
    }

    /// Base address of part `part` of map `img`.
    pub fn img_addr(&self, img: usize, part: usize) -> usize {
        let lane = img % self.tile.stride_imgs;
        (img / self.tile.stride_imgs) * self.img_h * STRIDE
            + lane * self.dim
            + if lane >= self.tile.stride_imgs / 2 { self.map_pad() } else { 0 }
            + part * self.img_h * STRIDE
    }

    /// Part-relative address of pixel `index`: parts store column-major
    /// against the STRIDE rows.
    pub fn pixel_addr(&self, index: usize) -> usize {
        (index % self.img_h) * STRIDE + index / self.img_h
    }

    /// Expands the batch into padded maps: each source row is copied to
    /// its `pad0` offset and the rounding remainder stays zero.
    fn pad_source<E: Element>(&self, src: &[E]) -> Vec<E> {
        let mut padded = vec![E::zeroed(); self.map_size() * self.maps()];
        for (m, map) in src.chunks_exact(self.origin_h * self.origin_h).enumerate() {
            let base = m * self.map_size();
            for (r, row) in map.chunks_exact(self.origin_h).enumerate() {
                let at = base + (self.pad0 + r) * self.img_h + self.pad0;
                padded[at..at + self.origin_h].copy_from_slice(row);
            }
        }
        padded
    }
}

impl Transcoder for FeatureMapLayout {
    fn kind(&self) -> &'static str {
        "feature_maps"
    }

    fn dest_len(&self) -> usize {
        self.round_num() * self.round_size()
    }

    fn src_len(&self) -> SourceLen {
        SourceLen::Exactly(self.origin_h * self.origin_h * self.maps())
    }

    fn scatter<E: Element>(&self, src: &[E], dst: &mut [E]) {
        let padded = self.pad_source(src);
        let part_size = self.part_size();
        let mut at = 0;
        for img in 0..self.maps() {
            for part in 0..self.part_num() {
                let base = self.img_addr(img, part);
                for (i, &v) in padded[at..at + part_size].iter().enumerate() {
                    dst[base + self.pixel_addr(i)] = v;
                }
                at += part_size;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatError;

    #[test]
    fn test_geometry() {
        let fms = FeatureMapLayout::new(3, 10, 54).unwrap();

        assert_eq!(fms.img_h(), 12);
        assert_eq!(fms.pad0(), 0);
        assert_eq!(fms.pad1(), 2);
        assert_eq!(fms.part_num(), 4);
        assert_eq!(fms.round_num(), 2);
        assert_eq!(fms.map_pad(), 1);
        assert_eq!(fms.dest_len(), 2 * 5 * 12 * 4 * 32);
    }

    #[test]
    fn test_img_addr() {
        let fms = FeatureMapLayout::new(3, 10, 54).unwrap();

        assert_eq!(fms.img_addr(3, 0), 3 * 3);
        // Lanes in the upper half of the row shift by map_pad.
        assert_eq!(fms.img_addr(7, 0), 7 * 3 + 1);
        assert_eq!(fms.img_addr(13, 0), 12 * 32 + 3 * 3);
        assert_eq!(fms.img_addr(17, 0), 12 * 32 + 7 * 3 + 1);

        // Consecutive parts advance one padded-map height of rows.
        assert_eq!(fms.img_addr(3, 2), fms.img_addr(3, 0) + 12 * 2 * 32);
        assert_eq!(fms.img_addr(17, 2), fms.img_addr(17, 0) + 12 * 2 * 32);
    }

    #[test]
    fn test_pixel_addr_transposes_parts() {
        let fms = FeatureMapLayout::new(3, 10, 54).unwrap();
        assert_eq!(fms.pixel_addr(0), 0);
        assert_eq!(fms.pixel_addr(1), 32);
        assert_eq!(fms.pixel_addr(11), 11 * 32);
        assert_eq!(fms.pixel_addr(12), 1);
        assert_eq!(fms.pixel_addr(25), 32 + 2);
    }

    #[test]
    fn test_scatter_single_map() {
        // 3x3 map, already part-aligned: one part, stored transposed.
        let fms = FeatureMapLayout::new(3, 3, 1).unwrap();
        assert_eq!(fms.part_num(), 1);

        let src: Vec<u32> = (1..=9).collect();
        let out = fms.format(&src).unwrap();

        assert_eq!(out[0], src[0]);
        assert_eq!(out[32], src[1]);
        assert_eq!(out[64], src[2]);
        assert_eq!(out[1], src[3]);
        assert_eq!(out[64 + 1], src[5]);
        assert_eq!(out[64 + 2], src[8]);
        assert_eq!(out.iter().filter(|&&v| v != 0).count(), 9);
    }

    #[test]
    fn test_same_convolution_padding() {
        let fms = FeatureMapLayout::with_options(3, 10, 1, 1, true).unwrap();
        assert_eq!(fms.pad0(), 1);
        assert_eq!(fms.img_h(), 12);
        assert_eq!(fms.pad1(), 1);

        let src = vec![7u32; 100];
        let out = fms.format(&src).unwrap();

        // The padded corner stays zero; the first source pixel sits one
        // padded row down, one column in.
        assert_eq!(out[fms.img_addr(0, 0) + fms.pixel_addr(0)], 0);
        let first = fms.img_addr(0, 0) + fms.pixel_addr(padded_index(&fms, 0, 0));
        assert_eq!(out[first], 7);
        assert_eq!(out.iter().filter(|&&v| v != 0).count(), 100);
    }

    #[test]
    fn test_dim1_no_same_conv_pad() {
        let fms = FeatureMapLayout::with_options(1, 4, 2, 1, true).unwrap();
        assert_eq!(fms.pad0(), 0);
        assert_eq!(fms.img_h(), 4);
        assert_eq!(fms.part_num(), 4);
    }

    #[test]
    fn test_channels_multiply_maps() {
        let fms = FeatureMapLayout::with_options(3, 3, 1, 2, false).unwrap();
        assert_eq!(fms.maps(), 2);

        let src: Vec<u32> = (1..=18).collect();
        let out = fms.format(&src).unwrap();

        // The second plane is the next lane over.
        assert_eq!(fms.img_addr(1, 0), 3);
        assert_eq!(out[3], src[9]);
    }

    #[test]
    fn test_exact_length_required() {
        let fms = FeatureMapLayout::new(3, 10, 54).unwrap();
        assert!(matches!(
            fms.format(&vec![0u32; 100 * 54 - 1]),
            Err(FormatError::LengthMismatch { .. }),
        ));
        assert!(matches!(
            fms.format(&vec![0u32; 100 * 54 + 1]),
            Err(FormatError::LengthMismatch { .. }),
        ));
    }

    #[test]
    fn test_full_batch_addresses_in_bounds() {
        let fms = FeatureMapLayout::new(3, 10, 54).unwrap();
        let src = vec![1u32; 100 * 54];
        let out = fms.format(&src).unwrap();
        assert_eq!(out.len(), fms.dest_len());
    }

    /// Padded-map index of source pixel (row, col) of a map.
    fn padded_index(fms: &FeatureMapLayout, row: usize, col: usize) -> usize {
        (fms.pad0() + row) * fms.img_h() + fms.pad0() + col
    }
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Batch-norm parameter layouts.
//!
//! Generalises the bias layouts to scale/shift pairs: each channel's
//! scale lands in the channel's bias slot and the matching shift sits
//! two columns over, so a row carries both parameters for its channels.

use crate::bias::BiasLayout;
use crate::{FormatError, SourceLen, Transcoder};
use bytemuck::Zeroable;
use layout_core::Element;

/// Interleaves per-channel batch-norm scale/shift pairs into
/// stride-addressed slots.
#[derive(Debug, Clone)]
pub struct BatchNormLayout {
    slots: BiasLayout,
}

impl BatchNormLayout {
    /// Layout for the convolution pipeline (`bn_conv`): channels pair
    /// two per row.
    pub fn conv(inputs: usize) -> Self {
        Self { slots: BiasLayout::conv(inputs) }
    }

    /// Layout for the fully-connected pipeline (`bn_fc`): one row per
    /// channel.
    pub fn fc(inputs: usize) -> Self {
        Self { slots: BiasLayout::fc(inputs) }
    }

    /// Channel count.
    pub fn inputs(&self) -> usize {
        self.slots.inputs()
    }

    /// Short layout-family name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self.slots.order() {
            crate::SlotOrder::Paired => "bn_conv",
            crate::SlotOrder::PerRow => "bn_fc",
        }
    }

    /// Destination length in elements.
    pub fn dest_len(&self) -> usize {
        self.slots.dest_len()
    }

    /// Destination address of channel `index`'s scale.
    pub fn weight_addr(&self, index: usize) -> usize {
        self.slots.slot_addr(index)
    }

    /// Destination address of channel `index`'s shift.
    pub fn bias_addr(&self, index: usize) -> usize {
        self.weight_addr(index) + 2
    }

    /// Validates both sources, allocates the zeroed destination and
    /// interleaves the pairs. The returned buffer is caller-owned.
    pub fn format<E: Element>(
        &self,
        weights: &[E],
        biases: &[E],
    ) -> Result<Vec<E>, FormatError> {
        let inputs = self.inputs();
        SourceLen::AtLeast(inputs).check(weights.len())?;
        SourceLen::AtLeast(inputs).check(biases.len())?;

        let mut dst = vec![E::zeroed(); self.dest_len()];
        for i in 0..inputs {
            dst[self.weight_addr(i)] = weights[i];
            dst[self.bias_addr(i)] = biases[i];
        }
        tracing::debug!(
            kind = self.kind(),
            channels = inputs,
            dest_len = dst.len(),
            "transcode complete",
        );
        Ok(dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_core::STRIDE;

    #[test]
    fn test_conv_pair_addresses() {
        let bn = BatchNormLayout::conv(4);
        assert_eq!(bn.weight_addr(0), 0);
        assert_eq!(bn.bias_addr(0), 2);
        assert_eq!(bn.weight_addr(1), 1);
        assert_eq!(bn.bias_addr(1), 3);
        assert_eq!(bn.weight_addr(2), STRIDE);
        assert_eq!(bn.bias_addr(2), STRIDE + 2);
    }

    #[test]
    fn test_fc_pair_addresses() {
        let bn = BatchNormLayout::fc(4);
        assert_eq!(bn.weight_addr(3), 3 * STRIDE);
        assert_eq!(bn.bias_addr(3), 3 * STRIDE + 2);
    }

    #[test]
    fn test_conv_interleave() {
        let bn = BatchNormLayout::conv(2);
        let out = bn.format(&[10u32, 20], &[11u32, 21]).unwrap();
        // One row: w0 w1 b0 b1, rest zero.
        assert_eq!(&out[..4], &[10, 20, 11, 21]);
        assert_eq!(out.iter().filter(|&&v| v != 0).count(), 4);
        assert_eq!(out.len(), STRIDE);
    }

    #[test]
    fn test_rejects_short_pair_sources() {
        let bn = BatchNormLayout::fc(4);
        assert!(bn.format(&[0u32; 3], &[0u32; 4]).is_err());
        assert!(bn.format(&[0u32; 4], &[0u32; 3]).is_err());
    }
}

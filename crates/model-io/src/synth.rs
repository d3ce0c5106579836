// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Synthetic input generation for exercising the transcoders.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Deterministic fill patterns for synthetic blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPattern {
    /// 0, 1, 2, ... — makes destination addresses legible in a dump.
    Counting,
    /// A single repeated value.
    Constant(u32),
    /// Seeded pseudo-random words, reproducible across runs.
    Random { seed: u64 },
}

/// Generates `count` synthetic u32 elements.
pub fn fill_u32(count: usize, pattern: FillPattern) -> Vec<u32> {
    match pattern {
        FillPattern::Counting => (0..count).map(|v| v as u32).collect(),
        FillPattern::Constant(value) => vec![value; count],
        FillPattern::Random { seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..count).map(|_| rng.gen()).collect()
        }
    }
}

/// Tag fill for tracing one conv through the kernel weight layout:
/// element `n` becomes `(cell << 16) | (conv << 8) | n`, or `| value`
/// when a non-zero value is given.
pub fn tagged_conv(cell: usize, conv: usize, value: u32, len: usize) -> Vec<u32> {
    (0..len)
        .map(|n| {
            let low = if value == 0 { n as u32 } else { value };
            ((cell as u32) << 16) | ((conv as u32) << 8) | low
        })
        .collect()
}
